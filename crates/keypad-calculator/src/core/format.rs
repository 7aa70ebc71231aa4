//! Number parsing and display formatting
//!
//! Operands are kept as strings while they are typed so that partial input
//! such as `"12."` or `"0.50"` survives untouched. These helpers convert
//! between that textual form, `f64`, and the grouped display form.

/// Default thousands separator
pub const DEFAULT_SEPARATOR: char = ',';

/// Parses the longest numeric prefix of `text`
///
/// Leading whitespace is skipped, an optional sign, digits with an optional
/// fraction and exponent are accepted, as is `Infinity`. Anything after the
/// prefix is ignored. Returns `None` when no digits were found, so `""`,
/// `"."`, `"-"` and `"Error"` all fail.
#[must_use]
pub fn parse_operand(text: &str) -> Option<f64> {
    let s = text.trim_start();
    let bytes = s.as_bytes();

    let mut end = usize::from(matches!(bytes.first(), Some(b'+' | b'-')));
    if s[end..].starts_with("Infinity") {
        return Some(if s.starts_with('-') {
            f64::NEG_INFINITY
        } else {
            f64::INFINITY
        });
    }

    let int_digits = count_digits(&bytes[end..]);
    end += int_digits;

    let mut frac_digits = 0;
    if bytes.get(end) == Some(&b'.') {
        frac_digits = count_digits(&bytes[end + 1..]);
        if frac_digits > 0 {
            end += 1 + frac_digits;
        }
    }

    if int_digits == 0 && frac_digits == 0 {
        return None;
    }

    if matches!(bytes.get(end), Some(b'e' | b'E')) {
        let mut exp_end = end + 1;
        if matches!(bytes.get(exp_end), Some(b'+' | b'-')) {
            exp_end += 1;
        }
        let exp_digits = count_digits(&bytes[exp_end.min(bytes.len())..]);
        if exp_digits > 0 {
            end = exp_end + exp_digits;
        }
    }

    s[..end].parse::<f64>().ok()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

/// Converts a computed value back into operand text
///
/// Shortest round-trip digits; exponent notation (`1e+21`, `1.5e-7`) outside
/// `[1e-6, 1e21)`. Negative zero prints as `0`.
#[must_use]
pub fn number_to_string(value: f64) -> String {
    if value.is_nan() {
        return "NaN".to_string();
    }
    if value.is_infinite() {
        return if value > 0.0 { "Infinity" } else { "-Infinity" }.to_string();
    }
    if value == 0.0 {
        return "0".to_string();
    }

    let abs = value.abs();
    if !(1e-6..1e21).contains(&abs) {
        let s = format!("{value:e}");
        return match s.split_once('e') {
            Some((mantissa, exp)) if !exp.starts_with('-') => format!("{mantissa}e+{exp}"),
            _ => s,
        };
    }
    format!("{value}")
}

/// Formats operand text for display using the default separator
///
/// ```rust
/// use keypad_calculator::core::format::format_display_number;
///
/// assert_eq!(format_display_number("1234567.50"), "1,234,567.50");
/// assert_eq!(format_display_number("12."), "12.");
/// assert_eq!(format_display_number(""), "");
/// ```
#[must_use]
pub fn format_display_number(number: &str) -> String {
    format_display_number_with(number, DEFAULT_SEPARATOR)
}

/// Formats operand text for display
///
/// The integer part is grouped in threes; the fractional part, if any, is
/// reattached verbatim so mid-entry input like `"3.10"` keeps its trailing
/// zero. A non-numeric integer part renders as an empty string.
#[must_use]
pub fn format_display_number_with(number: &str, separator: char) -> String {
    let (integer_part, decimal_part) = match number.split_once('.') {
        Some((int, dec)) => (int, Some(dec)),
        None => (number, None),
    };

    let integer_display = parse_operand(integer_part)
        .map(|value| group_integer(value, separator))
        .unwrap_or_default();

    match decimal_part {
        Some(decimal) => format!("{integer_display}.{decimal}"),
        None => integer_display,
    }
}

/// Rounds to an integer and inserts a separator every three digits
fn group_integer(value: f64, separator: char) -> String {
    if value.is_infinite() {
        return if value < 0.0 { "-∞" } else { "∞" }.to_string();
    }

    let rounded = value.round();
    // `Display` never switches to exponent form for f64
    let digits = format!("{}", rounded.abs());

    let mut out = String::with_capacity(digits.len() + digits.len() / 3 + 1);
    if rounded.is_sign_negative() {
        out.push('-');
    }
    for (i, ch) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(separator);
        }
        out.push(ch);
    }
    out
}
