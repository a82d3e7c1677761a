use std::fmt;
use std::str::FromStr;

use lazy_static::lazy_static;
use num_bigint::{BigInt, Sign};
use num_traits::{FromPrimitive, Signed, ToPrimitive, Zero};
use regex::Regex;
use rust_decimal::Decimal;
use serde::{Serialize, Serializer};

use super::pow::pow10;

lazy_static! {
    /// Decimal literal: optional sign, digits with optional fraction, optional exponent.
    static ref DECIMAL_LITERAL_REGEX: Regex =
        Regex::new(r"^[+-]?(\d+\.?\d*|\.\d+)([eE][+-]?\d+)?$").expect("Invalid regex pattern");
}

/// A token amount as it arrives from the API or a caller: a numeric string,
/// a float, or an exact integer. Unit is the token's smallest denomination.
#[derive(Debug, Clone, PartialEq)]
pub enum RawAmount {
    Text(String),
    Number(f64),
    Integer(BigInt),
}

impl RawAmount {
    /// Exact integer value.
    ///
    /// Text is trimmed and the empty string counts as zero; otherwise it must
    /// be an optionally signed run of decimal digits or an unsigned
    /// `0x`/`0o`/`0b` literal. Numbers must be finite and integral.
    pub fn to_bigint(&self) -> Option<BigInt> {
        match self {
            RawAmount::Text(text) => parse_integer_literal(text),
            RawAmount::Number(value) => {
                if value.is_finite() && value.fract() == 0.0 {
                    BigInt::from_f64(*value)
                } else {
                    None
                }
            }
            RawAmount::Integer(value) => Some(value.clone()),
        }
    }

    /// Lenient numeric value; NaN when the text is not a number.
    ///
    /// Accepts everything [`to_bigint`](Self::to_bigint) does plus fractions,
    /// exponents and `Infinity`.
    pub fn to_f64(&self) -> f64 {
        match self {
            RawAmount::Text(text) => parse_number_literal(text),
            RawAmount::Number(value) => *value,
            RawAmount::Integer(value) => value.to_f64().unwrap_or(f64::NAN),
        }
    }
}

fn split_radix_prefix(text: &str) -> Option<(u32, &str)> {
    let bytes = text.as_bytes();
    if bytes.len() < 2 || bytes[0] != b'0' {
        return None;
    }
    let radix = match bytes[1] {
        b'x' | b'X' => 16,
        b'o' | b'O' => 8,
        b'b' | b'B' => 2,
        _ => return None,
    };
    Some((radix, &text[2..]))
}

fn parse_radix_digits(digits: &str, radix: u32) -> Option<BigInt> {
    if digits.is_empty() || !digits.chars().all(|c| c.is_digit(radix)) {
        return None;
    }
    BigInt::parse_bytes(digits.as_bytes(), radix)
}

fn parse_integer_literal(text: &str) -> Option<BigInt> {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return Some(BigInt::zero());
    }
    if let Some((radix, digits)) = split_radix_prefix(trimmed) {
        return parse_radix_digits(digits, radix);
    }

    let (negative, digits) = if let Some(rest) = trimmed.strip_prefix('-') {
        (true, rest)
    } else if let Some(rest) = trimmed.strip_prefix('+') {
        (false, rest)
    } else {
        (false, trimmed)
    };

    let magnitude = parse_radix_digits(digits, 10)?;
    Some(if negative { -magnitude } else { magnitude })
}

fn parse_number_literal(text: &str) -> f64 {
    let trimmed = text.trim();
    if trimmed.is_empty() {
        return 0.0;
    }
    match trimmed {
        "Infinity" | "+Infinity" => return f64::INFINITY,
        "-Infinity" => return f64::NEG_INFINITY,
        _ => {}
    }
    if let Some((radix, digits)) = split_radix_prefix(trimmed) {
        return parse_radix_digits(digits, radix)
            .and_then(|value| value.to_f64())
            .unwrap_or(f64::NAN);
    }
    if DECIMAL_LITERAL_REGEX.is_match(trimmed) {
        trimmed.parse::<f64>().unwrap_or(f64::NAN)
    } else {
        f64::NAN
    }
}

impl From<&str> for RawAmount {
    fn from(value: &str) -> Self {
        RawAmount::Text(value.to_string())
    }
}

impl From<String> for RawAmount {
    fn from(value: String) -> Self {
        RawAmount::Text(value)
    }
}

impl From<&String> for RawAmount {
    fn from(value: &String) -> Self {
        RawAmount::Text(value.clone())
    }
}

impl From<f64> for RawAmount {
    fn from(value: f64) -> Self {
        RawAmount::Number(value)
    }
}

impl From<u64> for RawAmount {
    fn from(value: u64) -> Self {
        RawAmount::Integer(BigInt::from(value))
    }
}

impl From<i32> for RawAmount {
    fn from(value: i32) -> Self {
        RawAmount::Integer(BigInt::from(value))
    }
}

impl From<u32> for RawAmount {
    fn from(value: u32) -> Self {
        RawAmount::Integer(BigInt::from(value))
    }
}

impl From<i64> for RawAmount {
    fn from(value: i64) -> Self {
        RawAmount::Integer(BigInt::from(value))
    }
}

impl From<u128> for RawAmount {
    fn from(value: u128) -> Self {
        RawAmount::Integer(BigInt::from(value))
    }
}

impl From<BigInt> for RawAmount {
    fn from(value: BigInt) -> Self {
        RawAmount::Integer(value)
    }
}

impl From<&BigInt> for RawAmount {
    fn from(value: &BigInt) -> Self {
        RawAmount::Integer(value.clone())
    }
}

/// A raw amount scaled down by `10^decimals`, kept exact.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AdjustedAmount {
    raw: BigInt,
    decimals: u32,
}

impl AdjustedAmount {
    pub fn new(raw: BigInt, decimals: u32) -> Self {
        Self { raw, decimals }
    }

    pub fn raw(&self) -> &BigInt {
        &self.raw
    }

    pub fn decimals(&self) -> u32 {
        self.decimals
    }

    pub fn is_zero(&self) -> bool {
        self.raw.is_zero()
    }

    /// Whole units, truncated toward zero.
    pub fn integer_part(&self) -> BigInt {
        &self.raw / pow10(self.decimals)
    }

    /// Nearest `f64`. Parsed from the exact decimal text so the only rounding
    /// is the final one.
    pub fn to_f64(&self) -> f64 {
        self.to_string().parse::<f64>().unwrap_or(f64::NAN)
    }

    /// `Decimal` value, `None` when it does not fit in 96 bits.
    pub fn to_decimal(&self) -> Option<Decimal> {
        Decimal::from_str(&self.to_string()).ok()
    }

    /// Display string with `,` thousands separators and between
    /// `min_fraction` and `max_fraction` fractional digits. Excess digits are
    /// rounded half away from zero.
    pub fn format_grouped(&self, min_fraction: u32, max_fraction: u32) -> String {
        let max_fraction = max_fraction.max(min_fraction);
        let magnitude = self.raw.abs();

        let scaled = if max_fraction >= self.decimals {
            magnitude * pow10(max_fraction - self.decimals)
        } else {
            let step = pow10(self.decimals - max_fraction);
            let quotient = &magnitude / &step;
            let remainder = &magnitude % &step;
            if remainder * 2u32 >= step {
                quotient + 1u32
            } else {
                quotient
            }
        };

        let unit = pow10(max_fraction);
        let integer = &scaled / &unit;
        let fraction = &scaled % &unit;

        let mut fraction_digits = if max_fraction == 0 {
            String::new()
        } else {
            format!("{:0>width$}", fraction.to_string(), width = max_fraction as usize)
        };
        while fraction_digits.len() > min_fraction as usize && fraction_digits.ends_with('0') {
            fraction_digits.pop();
        }

        let mut out = String::new();
        if self.raw.sign() == Sign::Minus && !scaled.is_zero() {
            out.push('-');
        }
        out.push_str(&group_thousands(&integer.to_string()));
        if !fraction_digits.is_empty() {
            out.push('.');
            out.push_str(&fraction_digits);
        }
        out
    }
}

fn group_thousands(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (digits.len() - i) % 3 == 0 {
            out.push(',');
        }
        out.push(c);
    }
    out
}

impl fmt::Display for AdjustedAmount {
    /// Exact decimal without trailing fractional zeros.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let magnitude = self.raw.abs();
        let unit = pow10(self.decimals);
        let integer = &magnitude / &unit;
        let fraction = &magnitude % &unit;

        if self.raw.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", integer)?;
        if !fraction.is_zero() {
            let digits = format!(
                "{:0>width$}",
                fraction.to_string(),
                width = self.decimals as usize
            );
            write!(f, ".{}", digits.trim_end_matches('0'))?;
        }
        Ok(())
    }
}

impl Serialize for AdjustedAmount {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        serializer.collect_str(self)
    }
}
