use chrono::{Months, NaiveDate};

/// Label used for each projected month, e.g. `Jan-2025`
pub const MONTH_LABEL_FORMAT: &str = "%b-%Y";
/// Label used for headline dates, e.g. `Mar 1, 2025`
pub const DAY_LABEL_FORMAT: &str = "%b %-d, %Y";

/// Advances `date` by whole calendar months. Days past the end of the target
/// month are clamped to its last day (Jan 31 + 1 month = Feb 28/29). Returns
/// `None` if the result falls outside the supported calendar range.
pub fn add_months(date: NaiveDate, months: u32) -> Option<NaiveDate> {
    date.checked_add_months(Months::new(months))
}

pub fn month_label(date: NaiveDate) -> String {
    date.format(MONTH_LABEL_FORMAT).to_string()
}

pub fn day_label(date: NaiveDate) -> String {
    date.format(DAY_LABEL_FORMAT).to_string()
}

#[cfg(test)]
mod tests {

    use super::*;

    fn ymd(y: i32, m: u32, d: u32) -> NaiveDate {
        NaiveDate::from_ymd_opt(y, m, d).expect("valid test date")
    }

    #[test]
    fn add_zero_months() {
        assert_eq!(add_months(ymd(2025, 1, 1), 0), Some(ymd(2025, 1, 1)));
    }

    #[test]
    fn add_months_across_year() {
        assert_eq!(add_months(ymd(2025, 11, 15), 3), Some(ymd(2026, 2, 15)));
    }

    #[test]
    fn add_months_clamps_to_month_end() {
        assert_eq!(add_months(ymd(2025, 1, 31), 1), Some(ymd(2025, 2, 28)));
        assert_eq!(add_months(ymd(2024, 1, 31), 1), Some(ymd(2024, 2, 29)));
    }

    #[test]
    fn add_months_out_of_range() {
        assert_eq!(add_months(NaiveDate::MAX, 1), None);
    }

    #[test]
    fn labels() {
        assert_eq!(month_label(ymd(2025, 1, 1)), "Jan-2025");
        assert_eq!(day_label(ymd(2025, 3, 1)), "Mar 1, 2025");
    }
}
