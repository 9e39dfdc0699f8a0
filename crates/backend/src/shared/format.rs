/// Groups the digits of an unsigned integer string in threes
fn group_digits(digits: &str, separator: char) -> String {
    let len = digits.len();
    let mut result = String::with_capacity(len + len / 3);
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            result.push(separator);
        }
        result.push(ch);
    }
    result
}

/// Форматирует число с разделителями тысяч (точками)
///
/// # Примеры
/// ```
/// use backend::shared::format::format_number;
/// assert_eq!(format_number(1234567), "1.234.567");
/// assert_eq!(format_number(42), "42");
/// ```
pub fn format_number(n: usize) -> String {
    group_digits(&n.to_string(), '.')
}

/// Formats a production quantity for alert messages: comma thousands,
/// at most two decimals, no trailing zeros.
///
/// ```
/// use backend::shared::format::format_quantity;
/// assert_eq!(format_quantity(1234.0), "1,234");
/// assert_eq!(format_quantity(-12.5), "-12.5");
/// ```
pub fn format_quantity(value: f64) -> String {
    let rounded = (value * 100.0).round() / 100.0;
    let negative = rounded < 0.0;
    let text = format!("{:.2}", rounded.abs());
    let (int_part, frac_part) = text.split_once('.').unwrap_or((text.as_str(), ""));
    let frac_part = frac_part.trim_end_matches('0');

    let mut result = String::new();
    if negative {
        result.push('-');
    }
    result.push_str(&group_digits(int_part, ','));
    if !frac_part.is_empty() {
        result.push('.');
        result.push_str(frac_part);
    }
    result
}
