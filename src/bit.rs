//! Binary feature values and the token mapping that produces them.

use serde::{Deserialize, Serialize};

/// A single binary feature value.
///
/// The binary domain has exactly two admissible values. A cell that fails to
/// map to one of them rejects the whole row before classification; there is
/// no in-vector "unknown" state.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub enum Bit {
    /// The value 0.
    Zero,
    /// The value 1.
    One,
}

impl Bit {
    /// Numeric value of the bit.
    pub fn as_u8(self) -> u8 {
        match self {
            Bit::Zero => 0,
            Bit::One => 1,
        }
    }
}

impl std::fmt::Display for Bit {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_u8())
    }
}

/// Map a raw cell value to a bit.
///
/// The value is trimmed and lowercased, then matched against two fixed token
/// sets; anything else falls through to an integer parse accepting only 0
/// and 1. Empty values are unmappable.
pub fn map_to_bit(raw: &str) -> Option<Bit> {
    const TRUES: &[&str] = &["1", "true", "yes", "y", "si", "sí", "t"];
    const FALSES: &[&str] = &["0", "false", "no", "n", "f"];

    let value = raw.trim().to_lowercase();
    if value.is_empty() {
        return None;
    }
    if TRUES.contains(&value.as_str()) {
        return Some(Bit::One);
    }
    if FALSES.contains(&value.as_str()) {
        return Some(Bit::Zero);
    }
    match value.parse::<i64>() {
        Ok(0) => Some(Bit::Zero),
        Ok(1) => Some(Bit::One),
        _ => None,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_tokens() {
        for token in ["1", "true", "yes", "y", "si", "sí", "t"] {
            assert_eq!(map_to_bit(token), Some(Bit::One), "token: {token}");
        }
    }

    #[test]
    fn test_false_tokens() {
        for token in ["0", "false", "no", "n", "f"] {
            assert_eq!(map_to_bit(token), Some(Bit::Zero), "token: {token}");
        }
    }

    #[test]
    fn test_case_and_whitespace_insensitive() {
        assert_eq!(map_to_bit(" YES "), Some(Bit::One));
        assert_eq!(map_to_bit("Y"), Some(Bit::One));
        assert_eq!(map_to_bit("SÍ"), Some(Bit::One));
        assert_eq!(map_to_bit("No"), Some(Bit::Zero));
        assert_eq!(map_to_bit(" f "), Some(Bit::Zero));
        assert_eq!(map_to_bit("\tTRUE\t"), Some(Bit::One));
    }

    #[test]
    fn test_integer_fallback() {
        assert_eq!(map_to_bit("01"), Some(Bit::One));
        assert_eq!(map_to_bit("00"), Some(Bit::Zero));
        assert_eq!(map_to_bit("+1"), Some(Bit::One));
    }

    #[test]
    fn test_unmappable() {
        for token in ["", "  ", "maybe", "2", "-1", "1.0", "truee", "yes no"] {
            assert_eq!(map_to_bit(token), None, "token: {token:?}");
        }
    }

    #[test]
    fn test_display() {
        assert_eq!(Bit::Zero.to_string(), "0");
        assert_eq!(Bit::One.to_string(), "1");
    }
}
