//! Thai long-form date formatting.
//!
//! Produces the date string used both on the rendered form and in the
//! structured export: day-of-month numeral, full Thai month name, full year.

use chrono::{Datelike, NaiveDate};

/// Full Thai month names, January first.
const THAI_MONTHS: [&str; 12] = [
    "มกราคม",
    "กุมภาพันธ์",
    "มีนาคม",
    "เมษายน",
    "พฤษภาคม",
    "มิถุนายน",
    "กรกฎาคม",
    "สิงหาคม",
    "กันยายน",
    "ตุลาคม",
    "พฤศจิกายน",
    "ธันวาคม",
];

/// Format an optional date as a Thai long-form string.
///
/// Absent dates format to the empty string. The numeric year is emitted
/// verbatim next to the Thai month name; it is NOT converted to the Buddhist
/// era (พ.ศ.). Callers that want an era-shifted year must convert before
/// storing the date in the memo.
pub fn format(date: Option<NaiveDate>) -> String {
    match date {
        None => String::new(),
        Some(d) => format!(
            "{} {} {}",
            d.day(),
            THAI_MONTHS[d.month0() as usize],
            d.year()
        ),
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_absent_date_is_empty() {
        assert_eq!(format(None), "");
    }

    #[test]
    fn test_long_form() {
        let date = NaiveDate::from_ymd_opt(2024, 5, 10);
        assert_eq!(format(date), "10 พฤษภาคม 2024");
    }

    #[test]
    fn test_year_not_era_shifted() {
        // 2024 CE would be 2567 in the Buddhist era; the year passes through.
        let date = NaiveDate::from_ymd_opt(2024, 1, 1);
        assert!(format(date).ends_with("2024"));
    }

    #[test]
    fn test_deterministic() {
        let date = NaiveDate::from_ymd_opt(1999, 12, 31);
        assert_eq!(format(date), format(date));
        assert_eq!(format(date), "31 ธันวาคม 1999");
    }
}
