//! Numeric scalar for attribute values.
//!
//! The store's number type is decimal text on the wire; the in-memory
//! distinction between integers and floats exists only on this side of the
//! boundary. Both variants carry the same wire tag.

use serde::{Deserialize, Serialize};
use std::cmp::Ordering;
use std::fmt;
use std::str::FromStr;

use crate::error::Error;

/// A numeric attribute value.
///
/// Parsing prefers `Int`: decimal text without a fraction or exponent
/// becomes `Int`, everything else becomes `Float`. Rendering is canonical
/// and round-trips the variant: integers render as plain decimal, floats
/// always carry a fraction or exponent.
///
/// ## Ordering
///
/// `Number` implements a total order so that number sets have a
/// deterministic wire encoding: `Int`/`Int` compares exactly,
/// `Float`/`Float` uses IEEE-754 total ordering, and mixed pairs compare
/// numerically with `Int` sorting before a numerically-equal `Float`.
/// Equality is derived from that order, so `Int(1) != Float(1.0)` — there
/// is no cross-variant coercion.
#[derive(Debug, Clone, Copy, Serialize, Deserialize)]
#[serde(untagged)]
pub enum Number {
    /// 64-bit signed integer
    Int(i64),
    /// 64-bit IEEE-754 floating point; only finite values can be encoded
    Float(f64),
}

impl Number {
    /// Whether this number has a wire representation.
    ///
    /// Integers always do; floats must be finite (NaN and the infinities
    /// have no decimal text form).
    pub fn is_finite(&self) -> bool {
        match self {
            Number::Int(_) => true,
            Number::Float(f) => f.is_finite(),
        }
    }

    /// Try to get as i64. Returns `None` for floats, even integral ones.
    pub fn as_int(&self) -> Option<i64> {
        match self {
            Number::Int(i) => Some(*i),
            Number::Float(_) => None,
        }
    }

    /// Numeric value as f64. Lossy above 2^53 for integers.
    pub fn as_f64(&self) -> f64 {
        match self {
            Number::Int(i) => *i as f64,
            Number::Float(f) => *f,
        }
    }
}

impl fmt::Display for Number {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Number::Int(i) => write!(f, "{}", i),
            Number::Float(x) => {
                let s = x.to_string();
                // Keep a fraction so the text parses back as Float.
                if !x.is_finite() || s.contains('.') || s.contains('e') || s.contains('E') {
                    write!(f, "{}", s)
                } else {
                    write!(f, "{}.0", s)
                }
            }
        }
    }
}

impl FromStr for Number {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Error> {
        if let Ok(i) = s.parse::<i64>() {
            return Ok(Number::Int(i));
        }
        match s.parse::<f64>() {
            Ok(f) if f.is_finite() => Ok(Number::Float(f)),
            _ => Err(Error::Parse(s.to_string())),
        }
    }
}

impl Ord for Number {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Number::Int(a), Number::Int(b)) => a.cmp(b),
            (Number::Float(a), Number::Float(b)) => a.total_cmp(b),
            // Mixed pairs compare numerically; a numerically-equal Int
            // sorts first so the order stays total and coercion-free.
            (Number::Int(a), Number::Float(b)) => (*a as f64).total_cmp(b).then(Ordering::Less),
            (Number::Float(a), Number::Int(b)) => a.total_cmp(&(*b as f64)).then(Ordering::Greater),
        }
    }
}

impl PartialOrd for Number {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl PartialEq for Number {
    fn eq(&self, other: &Self) -> bool {
        self.cmp(other) == Ordering::Equal
    }
}

impl Eq for Number {}

impl From<i64> for Number {
    fn from(i: i64) -> Self {
        Number::Int(i)
    }
}

impl From<i32> for Number {
    fn from(i: i32) -> Self {
        Number::Int(i64::from(i))
    }
}

impl From<f64> for Number {
    fn from(f: f64) -> Self {
        Number::Float(f)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    // === Parsing ===

    #[test]
    fn test_parse_int() {
        assert_eq!("42".parse::<Number>().unwrap(), Number::Int(42));
        assert_eq!("-7".parse::<Number>().unwrap(), Number::Int(-7));
        assert_eq!("0".parse::<Number>().unwrap(), Number::Int(0));
    }

    #[test]
    fn test_parse_int_extremes() {
        assert_eq!(
            "9223372036854775807".parse::<Number>().unwrap(),
            Number::Int(i64::MAX)
        );
        assert_eq!(
            "-9223372036854775808".parse::<Number>().unwrap(),
            Number::Int(i64::MIN)
        );
    }

    #[test]
    fn test_parse_float() {
        assert_eq!("1.5".parse::<Number>().unwrap(), Number::Float(1.5));
        assert_eq!("-0.25".parse::<Number>().unwrap(), Number::Float(-0.25));
        assert_eq!("1e3".parse::<Number>().unwrap(), Number::Float(1000.0));
    }

    #[test]
    fn test_parse_oversized_int_falls_back_to_float() {
        // One past i64::MAX still parses, as a float.
        let n = "9223372036854775808".parse::<Number>().unwrap();
        assert!(matches!(n, Number::Float(_)));
    }

    #[test]
    fn test_parse_rejects_garbage() {
        assert_eq!(
            "abc".parse::<Number>(),
            Err(Error::Parse("abc".to_string()))
        );
        assert!("".parse::<Number>().is_err());
        assert!("1.2.3".parse::<Number>().is_err());
    }

    #[test]
    fn test_parse_rejects_non_finite_text() {
        // f64's parser accepts these; the wire format does not.
        assert!("NaN".parse::<Number>().is_err());
        assert!("inf".parse::<Number>().is_err());
        assert!("-inf".parse::<Number>().is_err());
    }

    // === Rendering ===

    #[test]
    fn test_render_int() {
        assert_eq!(Number::Int(42).to_string(), "42");
        assert_eq!(Number::Int(-7).to_string(), "-7");
    }

    #[test]
    fn test_render_float_keeps_fraction() {
        assert_eq!(Number::Float(1.5).to_string(), "1.5");
        assert_eq!(Number::Float(2.0).to_string(), "2.0");
        assert_eq!(Number::Float(-0.25).to_string(), "-0.25");
    }

    #[test]
    fn test_render_parse_round_trip_preserves_variant() {
        for n in [
            Number::Int(0),
            Number::Int(i64::MAX),
            Number::Int(i64::MIN),
            Number::Float(2.0),
            Number::Float(3.141592653589793),
            Number::Float(1e300),
        ] {
            let text = n.to_string();
            assert_eq!(text.parse::<Number>().unwrap(), n, "text was {:?}", text);
        }
    }

    // === Ordering ===

    #[test]
    fn test_total_order_within_variant() {
        assert!(Number::Int(1) < Number::Int(2));
        assert!(Number::Float(1.5) < Number::Float(2.5));
    }

    #[test]
    fn test_total_order_across_variants_is_numeric() {
        assert!(Number::Int(1) < Number::Float(1.5));
        assert!(Number::Float(0.5) < Number::Int(1));
    }

    #[test]
    fn test_numerically_equal_mixed_pair_is_ordered_not_equal() {
        assert!(Number::Int(1) < Number::Float(1.0));
        assert_ne!(Number::Int(1), Number::Float(1.0));
    }

    #[test]
    fn test_large_ints_compare_exactly() {
        // Adjacent large ints collapse to the same f64; exact Int/Int
        // comparison must still distinguish them.
        let a = Number::Int(i64::MAX - 1);
        let b = Number::Int(i64::MAX);
        assert!(a < b);
        assert_ne!(a, b);
    }

    #[test]
    fn test_finiteness() {
        assert!(Number::Int(i64::MIN).is_finite());
        assert!(Number::Float(1.0).is_finite());
        assert!(!Number::Float(f64::NAN).is_finite());
        assert!(!Number::Float(f64::INFINITY).is_finite());
    }
}
