//! Numeric cell canonicalization.
//!
//! Numeric cells are parsed leniently: the longest numeric prefix of the
//! trimmed value is used, and anything unparseable (including an empty cell)
//! becomes zero. Downstream validation relies on this coercion, so it is a
//! contract rather than a convenience.

/// Parse the leading decimal number of `value`, or 0 when there is none.
///
/// Accepts an optional sign, digits with an optional fraction, and an optional
/// exponent. Non-finite results collapse to 0.
pub fn parse_decimal(value: &str) -> f64 {
    let trimmed = value.trim();
    let end = decimal_prefix_len(trimmed.as_bytes());
    if end == 0 {
        return 0.0;
    }
    match trimmed[..end].parse::<f64>() {
        Ok(parsed) if parsed.is_finite() => parsed,
        _ => 0.0,
    }
}

/// Parse the leading number of `value` as an integer, or 0 when there is none.
///
/// The whole numeric prefix counts, exponent included, and the result is
/// truncated toward zero ("12.7" is 12, "1.5e3" is 1500). Values outside the
/// `i64` range saturate.
pub fn parse_integer(value: &str) -> i64 {
    let trimmed = value.trim();
    let prefix = &trimmed[..decimal_prefix_len(trimmed.as_bytes())];
    let digits = prefix.strip_prefix(['+', '-']).unwrap_or(prefix);
    if digits.is_empty() {
        return 0;
    }
    if digits.bytes().all(|byte| byte.is_ascii_digit()) {
        return parse_digits(digits, prefix.starts_with('-'));
    }
    match prefix.parse::<f64>() {
        // Float to int casts truncate and saturate.
        Ok(parsed) if !parsed.is_nan() => parsed as i64,
        _ => 0,
    }
}

/// Exact saturating accumulation, so long integers keep every digit.
fn parse_digits(digits: &str, negative: bool) -> i64 {
    digits.bytes().fold(0i64, |acc, byte| {
        let digit = i64::from(byte - b'0');
        if negative {
            acc.saturating_mul(10).saturating_sub(digit)
        } else {
            acc.saturating_mul(10).saturating_add(digit)
        }
    })
}

/// Render a decimal in canonical form: no trailing zeros, no exponent.
///
/// ```
/// use shiprate_normalization::format_decimal;
///
/// assert_eq!(format_decimal(5.0), "5");
/// assert_eq!(format_decimal(5.5), "5.5");
/// assert_eq!(format_decimal(-0.0), "0");
/// ```
pub fn format_decimal(value: f64) -> String {
    if !value.is_finite() || value == 0.0 {
        return "0".to_string();
    }
    format!("{value}")
}

/// Canonical decimal string: "5", "5.0" and "5.00" all become "5".
pub fn normalize_decimal_string(value: &str) -> String {
    format_decimal(parse_decimal(value))
}

/// Canonical integer string: "1000", " 1000 " and "1000.9" all become "1000".
pub fn normalize_integer_string(value: &str) -> String {
    parse_integer(value).to_string()
}

/// Length of the longest prefix of `bytes` that forms a decimal literal.
fn decimal_prefix_len(bytes: &[u8]) -> usize {
    let mut idx = 0;
    if matches!(bytes.first(), Some(b'+' | b'-')) {
        idx = 1;
    }
    let int_start = idx;
    while bytes.get(idx).is_some_and(u8::is_ascii_digit) {
        idx += 1;
    }
    let mut digits = idx - int_start;
    if bytes.get(idx) == Some(&b'.') {
        let frac_start = idx + 1;
        let mut frac_end = frac_start;
        while bytes.get(frac_end).is_some_and(u8::is_ascii_digit) {
            frac_end += 1;
        }
        let frac_digits = frac_end - frac_start;
        if digits > 0 || frac_digits > 0 {
            idx = frac_end;
            digits += frac_digits;
        }
    }
    if digits == 0 {
        return 0;
    }
    if matches!(bytes.get(idx), Some(b'e' | b'E')) {
        let mut exp_idx = idx + 1;
        if matches!(bytes.get(exp_idx), Some(b'+' | b'-')) {
            exp_idx += 1;
        }
        let exp_start = exp_idx;
        while bytes.get(exp_idx).is_some_and(u8::is_ascii_digit) {
            exp_idx += 1;
        }
        if exp_idx > exp_start {
            idx = exp_idx;
        }
    }
    idx
}
