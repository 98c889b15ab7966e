//! Base units and amount rendering.
//!
//! Amounts are held everywhere as integer satoshis; the base unit only
//! decides where the decimal point goes when rendering. Switching unit
//! must preserve the satoshi value, never the display string.

use std::fmt;

/// Thousands separator inserted between digit groups when enabled.
pub const THOUSANDS_SEP: char = ' ';

/// Base display unit of the KAW coin.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum BaseUnit {
    /// 1 KAW = 100_000_000 sat.
    #[default]
    Kaw,
    /// 1 mKAW = 100_000 sat.
    MilliKaw,
    /// 1 µKAW = 100 sat.
    MicroKaw,
    /// The indivisible unit.
    Sat,
}

impl BaseUnit {
    /// All units, in display order.
    pub fn all() -> &'static [BaseUnit] {
        &[
            BaseUnit::Kaw,
            BaseUnit::MilliKaw,
            BaseUnit::MicroKaw,
            BaseUnit::Sat,
        ]
    }

    /// Decimal digits between this unit and a satoshi.
    pub fn decimal_point(self) -> u8 {
        match self {
            BaseUnit::Kaw => 8,
            BaseUnit::MilliKaw => 5,
            BaseUnit::MicroKaw => 2,
            BaseUnit::Sat => 0,
        }
    }

    /// Ticker string, also the persisted config value.
    pub fn ticker(self) -> &'static str {
        match self {
            BaseUnit::Kaw => "KAW",
            BaseUnit::MilliKaw => "mKAW",
            BaseUnit::MicroKaw => "µKAW",
            BaseUnit::Sat => "sat",
        }
    }

    /// Inverse of [`BaseUnit::ticker`].
    pub fn from_ticker(ticker: &str) -> Option<BaseUnit> {
        BaseUnit::all().iter().copied().find(|u| u.ticker() == ticker)
    }

    /// Unit for a given decimal point, if one exists.
    pub fn from_decimal_point(decimal_point: u8) -> Option<BaseUnit> {
        BaseUnit::all()
            .iter()
            .copied()
            .find(|u| u.decimal_point() == decimal_point)
    }
}

impl fmt::Display for BaseUnit {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.ticker())
    }
}

/// Render a satoshi amount in the unit implied by `decimal_point`.
///
/// The fractional part keeps at least `num_zeros` digits (padding with
/// zeros) and drops trailing zeros beyond that. With `num_zeros = 0` a
/// whole amount renders without a decimal point.
pub fn format_amount(sats: i64, decimal_point: u8, num_zeros: u8, thousands_sep: bool) -> String {
    let num_zeros = num_zeros.min(decimal_point);
    let scale = 10i64.pow(decimal_point as u32);
    let magnitude = sats.unsigned_abs();
    let whole = magnitude / scale.unsigned_abs();
    let frac = magnitude % scale.unsigned_abs();

    let mut whole_str = whole.to_string();
    if thousands_sep {
        whole_str = group_digits(&whole_str);
    }

    let mut frac_str = if decimal_point > 0 {
        format!("{:0width$}", frac, width = decimal_point as usize)
    } else {
        String::new()
    };
    while frac_str.len() > num_zeros as usize && frac_str.ends_with('0') {
        frac_str.pop();
    }

    let sign = if sats < 0 { "-" } else { "" };
    if frac_str.is_empty() {
        format!("{sign}{whole_str}")
    } else {
        format!("{sign}{whole_str}.{frac_str}")
    }
}

/// Parse a rendered amount back to satoshis.
///
/// Accepts thousands separators and a fractional part no longer than
/// `decimal_point` digits. Returns `None` for anything else.
pub fn parse_amount(text: &str, decimal_point: u8) -> Option<i64> {
    let text = text.trim();
    let (negative, text) = match text.strip_prefix('-') {
        Some(rest) => (true, rest),
        None => (false, text),
    };
    let cleaned: String = text.chars().filter(|c| *c != THOUSANDS_SEP).collect();
    if cleaned.is_empty() {
        return None;
    }

    let (whole_str, frac_str) = match cleaned.split_once('.') {
        Some((w, f)) => (w, f),
        None => (cleaned.as_str(), ""),
    };
    if frac_str.len() > decimal_point as usize {
        return None;
    }
    if !whole_str.chars().all(|c| c.is_ascii_digit())
        || !frac_str.chars().all(|c| c.is_ascii_digit())
        || whole_str.is_empty()
    {
        return None;
    }

    let scale = 10i64.pow(decimal_point as u32);
    let whole: i64 = whole_str.parse().ok()?;
    let frac: i64 = if frac_str.is_empty() {
        0
    } else {
        let padded = format!("{frac_str:0<width$}", width = decimal_point as usize);
        padded.parse().ok()?
    };
    let magnitude = whole.checked_mul(scale)?.checked_add(frac)?;
    Some(if negative { -magnitude } else { magnitude })
}

fn group_digits(digits: &str) -> String {
    let mut out = String::with_capacity(digits.len() + digits.len() / 3);
    let len = digits.len();
    for (i, c) in digits.chars().enumerate() {
        if i > 0 && (len - i) % 3 == 0 {
            out.push(THOUSANDS_SEP);
        }
        out.push(c);
    }
    out
}

#[cfg(test)]
mod tests {
    use super::*;
    use proptest::prelude::*;

    #[test]
    fn format_pads_to_num_zeros() {
        assert_eq!(format_amount(100_000_000, 8, 2, false), "1.00");
        assert_eq!(format_amount(100_000_000, 8, 0, false), "1");
        assert_eq!(format_amount(123_456_789, 8, 2, false), "1.23456789");
    }

    #[test]
    fn format_negative_amounts() {
        assert_eq!(format_amount(-150_000_000, 8, 2, false), "-1.50");
    }

    #[test]
    fn thousands_grouping() {
        assert_eq!(format_amount(1_234_567, 0, 0, true), "1 234 567");
        assert_eq!(parse_amount("1 234 567", 0), Some(1_234_567));
    }

    #[test]
    fn unit_switch_preserves_sats() {
        let sats = 123_456_789i64;
        for unit in BaseUnit::all() {
            let dp = unit.decimal_point();
            let rendered = format_amount(sats, dp, 0, false);
            assert_eq!(parse_amount(&rendered, dp), Some(sats), "unit {unit}");
        }
    }

    #[test]
    fn parse_rejects_excess_precision() {
        assert_eq!(parse_amount("1.234", 2), None);
        assert_eq!(parse_amount("abc", 2), None);
        assert_eq!(parse_amount("", 8), None);
    }

    proptest! {
        #[test]
        fn format_parse_roundtrip(sats in -10_000_000_000_000i64..10_000_000_000_000i64,
                                  unit_idx in 0usize..4,
                                  num_zeros in 0u8..=8,
                                  sep in proptest::bool::ANY) {
            let dp = BaseUnit::all()[unit_idx].decimal_point();
            let rendered = format_amount(sats, dp, num_zeros, sep);
            prop_assert_eq!(parse_amount(&rendered, dp), Some(sats));
        }
    }
}
