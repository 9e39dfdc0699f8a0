use chrono::{Days, NaiveDate};
use contracts::shared::grid::Cell;
use serde_json::Value;

use super::cells::cell_text;

pub const DATE_FORMAT: &str = "%d/%m/%Y";

/// Spreadsheet serial day 0
fn serial_epoch() -> Option<NaiveDate> {
    NaiveDate::from_ymd_opt(1899, 12, 30)
}

/// Converts a spreadsheet serial number to a date. The time-of-day
/// fraction is dropped.
pub fn serial_to_date(serial: f64) -> Option<NaiveDate> {
    if !serial.is_finite() || serial.abs() > 3_000_000.0 {
        return None;
    }
    let days = serial.floor() as i64;
    let epoch = serial_epoch()?;
    if days >= 0 {
        epoch.checked_add_days(Days::new(days as u64))
    } else {
        epoch.checked_sub_days(Days::new(days.unsigned_abs()))
    }
}

pub fn format_dmy(date: NaiveDate) -> String {
    date.format(DATE_FORMAT).to_string()
}

pub fn parse_dmy(text: &str) -> Option<NaiveDate> {
    NaiveDate::parse_from_str(text.trim(), DATE_FORMAT).ok()
}

/// Text serials below this (serial 10000 is 18/05/1927) are treated as
/// plain text, so a bare year such as "2025" is not read as a 1905 date.
const MIN_TEXT_SERIAL: f64 = 10_000.0;

fn text_serial(text: &str) -> Option<f64> {
    let numeric = !text.is_empty()
        && text.chars().filter(|c| *c == '.').count() <= 1
        && text.chars().all(|c| c.is_ascii_digit() || c == '.')
        && text.chars().any(|c| c.is_ascii_digit());
    if !numeric {
        return None;
    }
    text.parse::<f64>().ok().filter(|v| *v >= MIN_TEXT_SERIAL)
}

/// Canonical `dd/mm/yyyy` for anything that parses as a date
/// (`1/1/2026` → `01/01/2026`); other text is only trimmed.
pub fn normalize_date_text(text: &str) -> String {
    let text = text.trim();
    match parse_dmy(text) {
        Some(date) => format_dmy(date),
        None => text.to_string(),
    }
}

/// Date column value as `dd/mm/yyyy`. Serial numbers (numeric cells or
/// digit strings of at least `MIN_TEXT_SERIAL`) are converted.
pub fn normalize_date_cell(cell: &Cell) -> String {
    let serial = match cell {
        Value::Number(n) => n.as_f64(),
        Value::String(s) => text_serial(s.trim()),
        _ => None,
    };

    match serial.and_then(serial_to_date) {
        Some(date) => format_dmy(date),
        None => normalize_date_text(&cell_text(cell)),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use serde_json::json;

    #[test]
    fn test_serial_to_date() {
        assert_eq!(serial_to_date(1.0).map(format_dmy).unwrap(), "31/12/1899");
        assert_eq!(serial_to_date(0.0).map(format_dmy).unwrap(), "30/12/1899");
        assert_eq!(serial_to_date(45000.0).map(format_dmy).unwrap(), "15/03/2023");
        assert_eq!(serial_to_date(46014.0).map(format_dmy).unwrap(), "23/12/2025");
        assert_eq!(serial_to_date(46014.75).map(format_dmy).unwrap(), "23/12/2025");
        assert!(serial_to_date(f64::NAN).is_none());
    }

    #[test]
    fn test_normalize_date_cell() {
        assert_eq!(normalize_date_cell(&json!(46014)), "23/12/2025");
        assert_eq!(normalize_date_cell(&json!("46014")), "23/12/2025");
        assert_eq!(normalize_date_cell(&json!(" 23/12/2025 ")), "23/12/2025");
        assert_eq!(normalize_date_cell(&json!("Ngày")), "Ngày");
        assert_eq!(normalize_date_cell(&Value::Null), "");
        assert_eq!(normalize_date_cell(&json!("1.2.3")), "1.2.3");
        assert_eq!(normalize_date_cell(&json!("1/1/2026")), "01/01/2026");
    }

    #[test]
    fn test_short_digit_text_is_not_a_serial() {
        assert_eq!(normalize_date_cell(&json!("2025")), "2025");
        assert_eq!(normalize_date_cell(&json!(" 9999 ")), "9999");
        assert_eq!(normalize_date_cell(&json!("10000")), "18/05/1927");
        // Numeric cells are always serials
        assert_eq!(normalize_date_cell(&json!(1)), "31/12/1899");
    }

    #[test]
    fn test_normalize_date_text() {
        assert_eq!(normalize_date_text(" 1/1/2026 "), "01/01/2026");
        assert_eq!(normalize_date_text("01/01/2026"), "01/01/2026");
        assert_eq!(normalize_date_text("Ngày"), "Ngày");
    }

    #[test]
    fn test_parse_dmy() {
        assert_eq!(parse_dmy("23/12/2025"), NaiveDate::from_ymd_opt(2025, 12, 23));
        assert!(parse_dmy("2025-12-23").is_none());
        assert!(parse_dmy("31/02/2025").is_none());
    }
}
