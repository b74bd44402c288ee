//! Shared rate/ratio helpers for the aggregations.

/// Hourly employee cost: annual salary spread over the configured monthly
/// working hours (default 40 h/week × 4 weeks/month = 160 h).
pub fn hourly_cost(avg_annual_salary: f64, hours_per_month: f64) -> f64 {
    avg_annual_salary / hours_per_month
}

/// Percentage with an explicit undefined case.
///
/// A zero denominator yields `None`, never NaN, infinity or a silent 0;
/// a 0% only comes back when the denominator is genuinely nonzero.
pub fn percent(numerator: f64, denominator: f64) -> Option<f64> {
    if denominator == 0.0 {
        None
    } else {
        Some(numerator / denominator * 100.0)
    }
}

/// Round to two decimal places (adoption percentages are reported this way).
pub fn round2(v: f64) -> f64 {
    (v * 100.0).round() / 100.0
}

/// Mean of the values that are present; `None` when none are.
pub fn mean_of_present(values: impl Iterator<Item = Option<f64>>) -> Option<f64> {
    let present: Vec<f64> = values.flatten().collect();
    if present.is_empty() {
        None
    } else {
        Some(present.iter().sum::<f64>() / present.len() as f64)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn percent_guards_zero_denominator() {
        assert_eq!(percent(5.0, 0.0), None);
        assert_eq!(percent(0.0, 0.0), None);
        assert_eq!(percent(0.0, 8.0), Some(0.0));
        assert_eq!(percent(4.0, 8.0), Some(50.0));
    }

    #[test]
    fn hourly_cost_matches_fixture() {
        // 75000 / (40*4) = 468.75
        assert_eq!(hourly_cost(75000.0, 160.0), 468.75);
    }

    #[test]
    fn mean_skips_missing() {
        let vals = vec![Some(10.0), None, Some(20.0)];
        assert_eq!(mean_of_present(vals.into_iter()), Some(15.0));
        assert_eq!(mean_of_present(vec![None, None].into_iter()), None);
    }
}
