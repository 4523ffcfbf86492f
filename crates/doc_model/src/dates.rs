//! Issue-date formatting

use chrono::{Datelike, NaiveDate};

/// Format an issue date the way the national-motto block prints it,
/// e.g. `ngày 05 tháng 03 năm 2024`.
pub fn format_issue_date(date: NaiveDate) -> String {
    format!(
        "ngày {:02} tháng {:02} năm {:04}",
        date.day(),
        date.month(),
        date.year()
    )
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_day_and_month_are_zero_padded() {
        let date = NaiveDate::from_ymd_opt(2024, 3, 5).unwrap();
        assert_eq!(format_issue_date(date), "ngày 05 tháng 03 năm 2024");
    }

    #[test]
    fn test_two_digit_values_unchanged() {
        let date = NaiveDate::from_ymd_opt(2023, 10, 20).unwrap();
        assert_eq!(format_issue_date(date), "ngày 20 tháng 10 năm 2023");
    }

    proptest::proptest! {
        #[test]
        fn prop_fixed_shape_for_any_date(days in 0i64..80_000) {
            let date = NaiveDate::from_ymd_opt(1900, 1, 1).unwrap() + chrono::Duration::days(days);
            let text = format_issue_date(date);
            let parts: Vec<&str> = text.split(' ').collect();
            proptest::prop_assert_eq!(parts.len(), 6);
            proptest::prop_assert_eq!(parts[0], "ngày");
            proptest::prop_assert_eq!(parts[1].len(), 2);
            proptest::prop_assert_eq!(parts[3].len(), 2);
            proptest::prop_assert_eq!(parts[5].len(), 4);
        }
    }
}
