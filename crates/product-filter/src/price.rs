//! Price Text
//!
//! Reading card prices like `$19.99` and writing them back for display.

use thiserror::Error;

/// Currency symbol printed in front of prices
pub const CURRENCY_SYMBOL: char = '$';

#[derive(Debug, Clone, PartialEq, Error)]
pub enum PriceParseError {
    #[error("price text is empty")]
    Empty,
    #[error("no number in price text '{0}'")]
    NotANumber(String),
    #[error("price '{0}' is out of range")]
    OutOfRange(String),
}

/// Parse a currency-prefixed price.
///
/// Reads the leading number after an optional `$`, exponent included, ignoring
/// whatever follows it (`"$19.99 TTC"` is 19.99, `"$1e3"` is 1000).
pub fn parse_price(text: &str) -> Result<f64, PriceParseError> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Err(PriceParseError::Empty);
    }
    let unprefixed = trimmed
        .strip_prefix(CURRENCY_SYMBOL)
        .unwrap_or(trimmed)
        .trim_start();

    let number = leading_number(unprefixed);
    if !number.bytes().any(|b| b.is_ascii_digit()) {
        return Err(PriceParseError::NotANumber(trimmed.to_string()));
    }

    let value: f64 = number
        .parse()
        .map_err(|_| PriceParseError::NotANumber(trimmed.to_string()))?;
    if !value.is_finite() {
        return Err(PriceParseError::OutOfRange(trimmed.to_string()));
    }
    Ok(value)
}

fn skip_digits(bytes: &[u8], mut pos: usize) -> usize {
    while pos < bytes.len() && bytes[pos].is_ascii_digit() {
        pos += 1;
    }
    pos
}

/// Longest prefix shaped like `[-+]digits[.digits][e[-+]digits]`
fn leading_number(text: &str) -> &str {
    let bytes = text.as_bytes();
    let mut end = 0;
    if matches!(bytes.first(), Some(b'-') | Some(b'+')) {
        end = 1;
    }
    let mantissa_start = end;
    end = skip_digits(bytes, end);
    if end < bytes.len() && bytes[end] == b'.' {
        end = skip_digits(bytes, end + 1);
    }
    let has_mantissa_digit = bytes[mantissa_start..end].iter().any(u8::is_ascii_digit);

    // An exponent only counts when digits follow it: `2e` reads as 2
    if has_mantissa_digit && matches!(bytes.get(end), Some(b'e') | Some(b'E')) {
        let mut exp = end + 1;
        if matches!(bytes.get(exp), Some(b'-') | Some(b'+')) {
            exp += 1;
        }
        let exp_end = skip_digits(bytes, exp);
        if exp_end > exp {
            end = exp_end;
        }
    }
    &text[..end]
}

/// Format a price for a card, e.g. `$19.99`
pub fn format_price(price: f64) -> String {
    format!("{}{:.2}", CURRENCY_SYMBOL, price)
}
