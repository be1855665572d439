//! Lenient numeric parsing for source cells.
//!
//! Source files are hand-edited spreadsheets, so numbers are read from the
//! leading numeric prefix of a cell: `"42 years"` reads as 42 and `"4.7"` as
//! an integer reads as 4. A cell with no leading number yields `None`.
//!
//! Infinity is not a number here: `"Infinity"` and overflowing literals such
//! as `"1e999"` yield `None`, so float fields holding them fail validation.

/// Parses the leading integer of `value`.
///
/// Accepts leading whitespace and one optional sign. Values beyond the `i64`
/// range saturate.
pub fn parse_int_prefix(value: &str) -> Option<i64> {
    let (negative, rest) = split_sign(value.trim_start());
    let digits = leading_digits(rest);
    if digits.is_empty() {
        return None;
    }
    let magnitude = digits.bytes().fold(0i64, |acc, byte| {
        acc.saturating_mul(10)
            .saturating_add(i64::from(byte - b'0'))
    });
    Some(if negative { -magnitude } else { magnitude })
}

/// Parses the leading decimal number of `value`.
///
/// Accepts an optional sign, a fraction and an exponent. Non-finite results
/// are rejected.
pub fn parse_float_prefix(value: &str) -> Option<f64> {
    let trimmed = value.trim_start();
    let (_, rest) = split_sign(trimmed);
    let sign_len = trimmed.len() - rest.len();

    let integer = leading_digits(rest);
    let mut end = integer.len();
    let mut has_digits = !integer.is_empty();
    if rest[end..].starts_with('.') {
        let fraction = leading_digits(&rest[end + 1..]);
        if !fraction.is_empty() || has_digits {
            end += 1 + fraction.len();
            has_digits |= !fraction.is_empty();
        }
    }
    if !has_digits {
        return None;
    }
    end += exponent_len(&rest[end..]);

    trimmed[..sign_len + end]
        .parse::<f64>()
        .ok()
        .filter(|number| number.is_finite())
}

fn split_sign(value: &str) -> (bool, &str) {
    if let Some(rest) = value.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = value.strip_prefix('+') {
        (false, rest)
    } else {
        (false, value)
    }
}

fn leading_digits(value: &str) -> &str {
    let end = value
        .find(|ch: char| !ch.is_ascii_digit())
        .unwrap_or(value.len());
    &value[..end]
}

fn exponent_len(value: &str) -> usize {
    let Some(rest) = value.strip_prefix(['e', 'E']) else {
        return 0;
    };
    let (_, unsigned) = split_sign(rest);
    let digits = leading_digits(unsigned);
    if digits.is_empty() {
        0
    } else {
        1 + (rest.len() - unsigned.len()) + digits.len()
    }
}
