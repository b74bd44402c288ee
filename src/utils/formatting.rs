//! Formatting utilities used for CLI and export outputs.

/// Percentage field that may be undefined (zero denominator) or
/// not computable (zero-cost tool). None always renders as "n/a",
/// never as 0%.
pub fn fmt_opt_percent(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.2}%", v),
        None => "n/a".to_string(),
    }
}

/// Quality average on the 1-5 scale, "n/a" when there are no rated rows.
pub fn fmt_opt_quality(value: Option<f64>) -> String {
    match value {
        Some(v) => format!("{:.1}/5", v),
        None => "n/a".to_string(),
    }
}

pub fn fmt_money(value: f64) -> String {
    format!("${:.2}", value)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn undefined_percent_is_na_not_zero() {
        assert_eq!(fmt_opt_percent(None), "n/a");
        assert_eq!(fmt_opt_percent(Some(0.0)), "0.00%");
        assert_eq!(fmt_opt_percent(Some(6931.25)), "6931.25%");
    }

    #[test]
    fn quality_renders_one_decimal() {
        assert_eq!(fmt_opt_quality(Some(4.0)), "4.0/5");
        assert_eq!(fmt_opt_quality(None), "n/a");
    }
}
