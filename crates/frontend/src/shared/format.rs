//! Display formatting for table cells.

/// Format a money amount with two decimals and comma thousands
/// separators. A missing value renders as "0.00", matching the report
/// endpoints that emit `null` for empty cells.
///
/// ```
/// assert_eq!(frontend::shared::format::format_amount(Some(1234.5)), "1,234.50");
/// assert_eq!(frontend::shared::format::format_amount(None), "0.00");
/// ```
pub fn format_amount(value: Option<f64>) -> String {
    match value {
        Some(v) => group_thousands(&format!("{:.2}", v)),
        None => "0.00".to_string(),
    }
}

/// Insert comma separators into the integer part of an already
/// formatted decimal string.
fn group_thousands(formatted: &str) -> String {
    let (integer_part, decimal_part) = match formatted.split_once('.') {
        Some((i, d)) => (i, Some(d)),
        None => (formatted, None),
    };

    let mut grouped = String::new();
    let chars: Vec<char> = integer_part.chars().rev().collect();
    for (i, c) in chars.iter().enumerate() {
        if i > 0 && i % 3 == 0 && *c != '-' {
            grouped.push(',');
        }
        grouped.push(*c);
    }
    let integer_grouped: String = grouped.chars().rev().collect();

    match decimal_part {
        Some(d) => format!("{}.{}", integer_grouped, d),
        None => integer_grouped,
    }
}

/// Format a source timestamp as `MM/DD HH:mm`.
///
/// The value is treated as already being in display-local time; this is
/// structural slicing of an ISO-like string, not timezone math. Input
/// that does not look like `YYYY-MM-DDTHH:MM...` is returned untouched.
pub fn format_timestamp(timestamp: &str) -> String {
    let Some((date_part, time_part)) = timestamp.split_once('T') else {
        return timestamp.to_string();
    };
    let mut date_fields = date_part.split('-');
    let _year = date_fields.next();
    let (Some(month), Some(day)) = (date_fields.next(), date_fields.next()) else {
        return timestamp.to_string();
    };
    let mut time_fields = time_part.split(':');
    let (Some(hour), Some(minute)) = (time_fields.next(), time_fields.next()) else {
        return timestamp.to_string();
    };
    format!("{}/{} {}:{}", month, day, hour, minute)
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn missing_amount_renders_zero() {
        assert_eq!(format_amount(None), "0.00");
    }

    #[test]
    fn amounts_get_two_decimals_and_separators() {
        assert_eq!(format_amount(Some(1234.5)), "1,234.50");
        assert_eq!(format_amount(Some(0.0)), "0.00");
        assert_eq!(format_amount(Some(999.999)), "1,000.00");
        assert_eq!(format_amount(Some(1234567.891)), "1,234,567.89");
        assert_eq!(format_amount(Some(-1234.5)), "-1,234.50");
        assert_eq!(format_amount(Some(-123.0)), "-123.00");
    }

    #[test]
    fn timestamps_render_month_day_hour_minute() {
        assert_eq!(format_timestamp("2024-03-15T13:45:12"), "03/15 13:45");
        assert_eq!(format_timestamp("2024-03-15T13:45:12.123Z"), "03/15 13:45");
    }

    #[test]
    fn unparseable_timestamps_pass_through() {
        assert_eq!(format_timestamp("yesterday"), "yesterday");
        assert_eq!(format_timestamp("2024-03-15"), "2024-03-15");
    }
}
