// src/export/range.rs

use crate::errors::{AppError, AppResult};
use crate::utils::date::month_last_day;
use chrono::NaiveDate;

fn bad(msg: &str) -> AppError {
    AppError::Export(msg.to_string())
}

/// Parse --range (year / month / day / span).
///
/// Supported:
/// - YYYY
/// - YYYY-MM
/// - YYYY-MM-DD
/// - YYYY:YYYY
/// - YYYY-MM:YYYY-MM
/// - YYYY-MM-DD:YYYY-MM-DD
pub(crate) fn parse_range(r: &str) -> AppResult<(NaiveDate, NaiveDate)> {
    // The arms below byte-slice by position; a multi-byte character would
    // land on a non-boundary, so reject anything outside the date alphabet.
    if !r.is_ascii() {
        return Err(bad("unsupported --range format"));
    }

    if let Some((start_raw, end_raw)) = r.split_once(':') {
        let start = start_raw.trim();
        let end = end_raw.trim();

        if start.len() != end.len() {
            return Err(bad("start and end must have same format"));
        }

        match start.len() {
            // YYYY:YYYY
            4 => {
                let ys: i32 = start.parse().map_err(|_| bad("invalid start year"))?;
                let ye: i32 = end.parse().map_err(|_| bad("invalid end year"))?;

                let d1 =
                    NaiveDate::from_ymd_opt(ys, 1, 1).ok_or_else(|| bad("invalid start date"))?;
                let d2 =
                    NaiveDate::from_ymd_opt(ye, 12, 31).ok_or_else(|| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM:YYYY-MM
            7 => {
                let ys: i32 = start[0..4].parse().map_err(|_| bad("invalid start year"))?;
                let ms: u32 = start[5..7].parse().map_err(|_| bad("invalid start month"))?;
                let ye: i32 = end[0..4].parse().map_err(|_| bad("invalid end year"))?;
                let me: u32 = end[5..7].parse().map_err(|_| bad("invalid end month"))?;

                let last = month_last_day(ye, me).ok_or_else(|| bad("invalid end month"))?;

                let d1 =
                    NaiveDate::from_ymd_opt(ys, ms, 1).ok_or_else(|| bad("invalid start date"))?;
                let d2 =
                    NaiveDate::from_ymd_opt(ye, me, last).ok_or_else(|| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD:YYYY-MM-DD
            10 => {
                let d1 = NaiveDate::parse_from_str(start, "%Y-%m-%d")
                    .map_err(|_| bad("invalid start date"))?;
                let d2 = NaiveDate::parse_from_str(end, "%Y-%m-%d")
                    .map_err(|_| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            _ => Err(bad("unsupported range format")),
        }
    } else {
        match r.len() {
            // YYYY
            4 => {
                let y: i32 = r.parse().map_err(|_| bad("invalid year"))?;
                let d1 =
                    NaiveDate::from_ymd_opt(y, 1, 1).ok_or_else(|| bad("invalid start date"))?;
                let d2 =
                    NaiveDate::from_ymd_opt(y, 12, 31).ok_or_else(|| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM
            7 => {
                let y: i32 = r[0..4].parse().map_err(|_| bad("invalid year"))?;
                let m: u32 = r[5..7].parse().map_err(|_| bad("invalid month"))?;
                let last = month_last_day(y, m).ok_or_else(|| bad("invalid month"))?;

                let d1 =
                    NaiveDate::from_ymd_opt(y, m, 1).ok_or_else(|| bad("invalid start date"))?;
                let d2 =
                    NaiveDate::from_ymd_opt(y, m, last).ok_or_else(|| bad("invalid end date"))?;
                Ok((d1, d2))
            }
            // YYYY-MM-DD
            10 => {
                let d =
                    NaiveDate::parse_from_str(r, "%Y-%m-%d").map_err(|_| bad("invalid date"))?;
                Ok((d, d))
            }
            _ => Err(bad("unsupported --range format")),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).unwrap()
    }

    #[test]
    fn single_month_covers_first_to_last_day() {
        assert_eq!(
            parse_range("2024-02").unwrap(),
            (ymd(2024, 2, 1), ymd(2024, 2, 29))
        );
        assert_eq!(
            parse_range("2023-02").unwrap(),
            (ymd(2023, 2, 1), ymd(2023, 2, 28))
        );
    }

    #[test]
    fn spans_and_single_days() {
        assert_eq!(
            parse_range("2024").unwrap(),
            (ymd(2024, 1, 1), ymd(2024, 12, 31))
        );
        assert_eq!(
            parse_range("2024-03-05:2024-04-01").unwrap(),
            (ymd(2024, 3, 5), ymd(2024, 4, 1))
        );
        assert_eq!(
            parse_range("2024-03-05").unwrap(),
            (ymd(2024, 3, 5), ymd(2024, 3, 5))
        );
    }

    #[test]
    fn garbage_is_rejected() {
        assert!(parse_range("not-a-date").is_err());
        assert!(parse_range("2024-13").is_err());
        assert!(parse_range("2024:2023-01").is_err());
    }

    #[test]
    fn multibyte_input_is_an_error_not_a_panic() {
        // 7 and 10 bytes respectively, landing in the sliced arms
        assert!(parse_range("1234€").is_err());
        assert!(parse_range("1234€:1234€").is_err());
        assert!(parse_range("2024-€3").is_err());
    }
}
