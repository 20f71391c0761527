use chrono::{NaiveDate, NaiveDateTime};
use js_sys::Date;

/// Current local wall-clock time, read from the browser clock
pub fn now_local() -> NaiveDateTime {
    from_js_date(&Date::new_0())
}

/// Convert a JS `Date` to naive local time. Falls back to the epoch for an
/// invalid date.
pub fn from_js_date(date: &Date) -> NaiveDateTime {
    let year = date.get_full_year() as i32;
    let month = date.get_month() + 1; // JavaScript months are 0-indexed
    let day = date.get_date();

    NaiveDate::from_ymd_opt(year, month, day)
        .and_then(|d| d.and_hms_opt(date.get_hours(), date.get_minutes(), date.get_seconds()))
        .unwrap_or_default()
}

/// Millisecond clock value used to seed wish selection
pub fn clock_seed() -> u64 {
    Date::now() as u64
}

#[cfg(test)]
mod tests {
    use super::*;
    use chrono::{Datelike, Timelike};
    use wasm_bindgen::JsValue;
    use wasm_bindgen_test::*;

    wasm_bindgen_test_configure!(run_in_browser);

    #[wasm_bindgen_test]
    fn test_from_js_date_uses_local_fields() {
        // Month is 0-indexed in the JS constructor
        let date = Date::new_with_year_month_day_hr_min_sec(2025, 4, 12, 9, 30, 15);
        let converted = from_js_date(&date);
        assert_eq!(converted.year(), 2025);
        assert_eq!(converted.month(), 5);
        assert_eq!(converted.day(), 12);
        assert_eq!(converted.hour(), 9);
        assert_eq!(converted.minute(), 30);
        assert_eq!(converted.second(), 15);
    }

    #[wasm_bindgen_test]
    fn test_invalid_date_falls_back() {
        let invalid = Date::new(&JsValue::from_str("not a date"));
        assert_eq!(from_js_date(&invalid), NaiveDateTime::default());
    }
}
