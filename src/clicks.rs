//! Click-count normalization and display.

use crate::models::FieldValue;

const TEN_THOUSAND: char = '万';
const THOUSAND: char = '千';
const MONTHLY_LABEL: &str = "月点击：";

/// Converts a click value into a plain number.
///
/// Numbers pass through unchanged. Text may carry a `万` (x10,000) or `千`
/// (x1,000) suffix and an optional `月点击：` label. Anything empty or
/// unparseable yields `None`, which callers treat as absent rather than zero.
pub fn normalize_clicks(value: &FieldValue) -> Option<f64> {
    match value {
        FieldValue::Number(number) => Some(*number),
        FieldValue::Text(text) => parse_click_text(text),
    }
}

fn parse_click_text(text: &str) -> Option<f64> {
    let text = text.trim();
    let text = text.strip_prefix(MONTHLY_LABEL).unwrap_or(text).trim();
    if text.is_empty() {
        return None;
    }

    let (digits, scale) = if text.contains(TEN_THOUSAND) {
        (text.replacen(TEN_THOUSAND, "", 1), 10_000.0)
    } else if text.contains(THOUSAND) {
        (text.replacen(THOUSAND, "", 1), 1_000.0)
    } else {
        (text.to_string(), 1.0)
    };

    let parsed = leading_decimal(&digits.trim().replace(',', ""))?;
    parsed.is_finite().then_some(parsed * scale)
}

/// Reads the decimal at the start of `text` and ignores whatever trails it,
/// so `"12.5+"` reads as `12.5`. No leading digits means no value.
fn leading_decimal(text: &str) -> Option<f64> {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        end += 1;
    }
    let int_start = end;
    while bytes.get(end).is_some_and(u8::is_ascii_digit) {
        end += 1;
    }
    let mut digits = end - int_start;
    if bytes.get(end) == Some(&b'.') {
        let frac_start = end + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        if frac_end > frac_start || digits > 0 {
            digits += frac_end - frac_start;
            end = frac_end;
        }
    }
    if digits == 0 {
        return None;
    }
    text[..end].parse::<f64>().ok()
}

/// Lossy display form: `1.2万` at or above ten thousand, grouped integer below.
pub fn format_clicks(value: f64) -> String {
    if value >= 10_000.0 {
        format!("{:.1}{TEN_THOUSAND}", value / 10_000.0)
    } else {
        group_thousands(value.round() as i64)
    }
}

/// Formats an integer with comma thousands separators.
pub fn group_thousands(value: i64) -> String {
    let digits = value.unsigned_abs().to_string();
    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if value < 0 {
        out.push('-');
    }
    for (index, ch) in digits.chars().enumerate() {
        if index > 0 && (digits.len() - index) % 3 == 0 {
            out.push(',');
        }
        out.push(ch);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;

    fn text(value: &str) -> FieldValue {
        FieldValue::Text(value.to_string())
    }

    #[test]
    fn numbers_pass_through() {
        for value in [0.0, 1.5, 9_999.0, 12_000.0, 3.25e9, -4.0] {
            assert_eq!(normalize_clicks(&FieldValue::Number(value)), Some(value));
        }
    }

    #[test]
    fn normalized_output_is_stable() {
        let first = normalize_clicks(&text("3.4万")).unwrap();
        assert_eq!(normalize_clicks(&FieldValue::Number(first)), Some(first));
    }

    #[test]
    fn unit_suffixes_scale() {
        assert_eq!(normalize_clicks(&text("5千")), Some(5_000.0));
        assert_eq!(normalize_clicks(&text("1.2万")), Some(12_000.0));
        assert_eq!(normalize_clicks(&text("875")), Some(875.0));
    }

    #[test]
    fn monthly_label_is_stripped() {
        assert_eq!(normalize_clicks(&text("月点击：1130542")), Some(1_130_542.0));
        assert_eq!(normalize_clicks(&text(" 月点击：2万 ")), Some(20_000.0));
    }

    #[test]
    fn trailing_text_after_the_number_is_ignored() {
        assert_eq!(normalize_clicks(&text("12.5万+")), Some(125_000.0));
        assert_eq!(normalize_clicks(&text("800次")), Some(800.0));
        assert_eq!(normalize_clicks(&text("3.千")), Some(3_000.0));
        assert_eq!(normalize_clicks(&text(".5万")), Some(5_000.0));
        assert_eq!(normalize_clicks(&text("约3万")), None);
        assert_eq!(normalize_clicks(&text("-.")), None);
    }

    #[test]
    fn garbage_is_absent() {
        assert_eq!(normalize_clicks(&text("abc")), None);
        assert_eq!(normalize_clicks(&text("")), None);
        assert_eq!(normalize_clicks(&text("   ")), None);
        assert_eq!(normalize_clicks(&text("万")), None);
    }

    #[test]
    fn format_switches_to_ten_thousand_unit() {
        assert_eq!(format_clicks(12_000.0), "1.2万");
        assert_eq!(format_clicks(10_000.0), "1.0万");
        assert_eq!(format_clicks(1_130_542.0), "113.1万");
        assert_eq!(format_clicks(5_000.0), "5,000");
        assert_eq!(format_clicks(0.0), "0");
    }

    #[test]
    fn grouping() {
        assert_eq!(group_thousands(999), "999");
        assert_eq!(group_thousands(1_000), "1,000");
        assert_eq!(group_thousands(1_234_567), "1,234,567");
        assert_eq!(group_thousands(-12_345), "-12,345");
    }
}
