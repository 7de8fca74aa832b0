/// Utilities for date and time formatting
///
/// Table cells use the chrono-backed helpers; the stage tracker shows
/// browser-locale timestamps via `format_local`.
use chrono::{DateTime, NaiveDate};

/// Format an ISO datetime string to DD/MM/YYYY HH:MM.
/// Example: "2025-01-07T09:30:05.210Z" -> "07/01/2025 09:30"
pub fn format_datetime(datetime_str: &str) -> String {
    match DateTime::parse_from_rfc3339(datetime_str) {
        Ok(dt) => dt.format("%d/%m/%Y %H:%M").to_string(),
        Err(_) => datetime_str.to_string(),
    }
}

/// Format a date to DD/MM/YYYY. Accepts both bare dates and full
/// timestamps, since the backend is inconsistent about which it sends.
pub fn format_date(date_str: &str) -> String {
    if let Ok(dt) = DateTime::parse_from_rfc3339(date_str) {
        return dt.format("%d/%m/%Y").to_string();
    }
    match NaiveDate::parse_from_str(date_str, "%Y-%m-%d") {
        Ok(date) => date.format("%d/%m/%Y").to_string(),
        Err(_) => date_str.to_string(),
    }
}

/// Locale-aware timestamp for tracker cells (browser only; falls back to
/// the raw string off-wasm or on an unparseable input).
pub fn format_local(iso: &str) -> String {
    let date = js_sys::Date::new(&wasm_bindgen::JsValue::from_str(iso));
    if date.get_time().is_nan() {
        return "—".to_string();
    }
    date.to_locale_string("en-IN", &wasm_bindgen::JsValue::UNDEFINED)
        .as_string()
        .unwrap_or_else(|| iso.to_string())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_format_datetime() {
        assert_eq!(
            format_datetime("2025-01-07T09:30:05.210Z"),
            "07/01/2025 09:30"
        );
        assert_eq!(format_datetime("2025-06-30T18:45:00Z"), "30/06/2025 18:45");
    }

    #[test]
    fn test_format_date() {
        assert_eq!(format_date("2024-11-02"), "02/11/2024");
        assert_eq!(format_date("2025-01-07T09:30:05.210Z"), "07/01/2025");
    }

    #[test]
    fn test_invalid_format() {
        assert_eq!(format_datetime("not-a-date"), "not-a-date");
        assert_eq!(format_date("not-a-date"), "not-a-date");
    }
}
