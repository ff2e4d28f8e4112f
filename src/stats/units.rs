//! Conversion of human readable sizes (`1.5GiB`, `648 B`, `12.3 kB`) into bytes.
//!
//! Decimal labels are treated as binary multiples, so `GB` and `GiB` both mean
//! 1024³. The values are only used for percentages, where the difference cancels
//! out.

use super::{Result, StatParseError};

const KIB: u64 = 1024;
const MIB: u64 = KIB * 1024;
const GIB: u64 = MIB * 1024;
const TIB: u64 = GIB * 1024;

/// Returns the byte multiplier for a unit suffix. Unknown or empty suffixes are 1.
pub fn multiplier(unit: &str) -> u64 {
    match unit.trim() {
        "TB" | "TiB" => TIB,
        "GB" | "GiB" => GIB,
        "MB" | "MiB" => MIB,
        "KB" | "KiB" | "kB" => KIB,
        _ => 1,
    }
}

/// Converts a numeric string with the given unit suffix into bytes.
///
/// # Errors
///
/// Returns [`StatParseError::InvalidSize`] if `value` is not a non-negative number.
///
/// # Examples
///
/// ```
/// # use dockermon::stats::convert;
/// assert_eq!(convert("2", "GiB").unwrap(), 2_147_483_648);
/// assert_eq!(convert("10", "").unwrap(), 10);
/// ```
pub fn convert(value: &str, unit: &str) -> Result<u64> {
    let number = value
        .trim()
        .parse::<f64>()
        .ok()
        .filter(|n| n.is_finite() && *n >= 0.0)
        .ok_or_else(|| StatParseError::InvalidSize {
            value: value.to_owned(),
        })?;

    Ok((number * multiplier(unit) as f64) as u64)
}

/// Parses a size such as `1.5GiB` or `1.5 GiB` into bytes.
///
/// # Errors
///
/// Returns [`StatParseError::InvalidSize`] when no leading number is present.
pub fn parse_size(src: &str) -> Result<u64> {
    let src = src.trim();
    let split = src
        .find(|c: char| !(c.is_ascii_digit() || c == '.'))
        .unwrap_or(src.len());
    let (value, unit) = src.split_at(split);
    if value.is_empty() {
        return Err(StatParseError::InvalidSize {
            value: src.to_owned(),
        });
    }

    convert(value, unit)
}
