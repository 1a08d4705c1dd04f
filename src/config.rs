//! Parser configuration.
//!
//! The grammar itself has no knobs. The only setting is an optional numeric range
//! that every accepted integer must fall into; without it `IllFormedInteger` is
//! never reported.

use serde::Serialize;

use crate::errors::BaresError;

/// Inclusive bounds applied to every integer literal.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
pub struct IntegerBounds {
    min: i64,
    max: i64,
}

impl IntegerBounds {
    /// The range of a signed 16-bit integer.
    pub const SIGNED_16: IntegerBounds = IntegerBounds {
        min: i16::MIN as i64,
        max: i16::MAX as i64,
    };

    /// The full `i64` range. Literals that do not fit an `i64` still fail.
    pub const FULL: IntegerBounds = IntegerBounds {
        min: i64::MIN,
        max: i64::MAX,
    };

    pub fn new(min: i64, max: i64) -> Result<Self, BaresError> {
        if min > max {
            return Err(BaresError::Config {
                message: format!("integer bounds are empty: min {min} is greater than max {max}"),
            });
        }
        Ok(Self { min, max })
    }

    pub const fn min(&self) -> i64 {
        self.min
    }

    pub const fn max(&self) -> i64 {
        self.max
    }

    pub const fn contains(&self, value: i64) -> bool {
        self.min <= value && value <= self.max
    }

    /// Checks a literal as accepted by the grammar (digits with an optional minus).
    pub fn admits(&self, lexeme: &str) -> bool {
        lexeme
            .parse::<i64>()
            .map(|value| self.contains(value))
            .unwrap_or(false)
    }
}

/// Settings shared by every parse performed with one `ExpressionParser`.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize)]
pub struct ParserConfig {
    pub integer_bounds: Option<IntegerBounds>,
}

impl ParserConfig {
    pub fn with_bounds(bounds: IntegerBounds) -> Self {
        Self {
            integer_bounds: Some(bounds),
        }
    }

    /// Builds a config from optional command-line limits. Supplying either side
    /// enables range checking; the missing side defaults to the `i64` limit.
    pub fn from_limits(min: Option<i64>, max: Option<i64>) -> Result<Self, BaresError> {
        if min.is_none() && max.is_none() {
            return Ok(Self::default());
        }
        let bounds = IntegerBounds::new(
            min.unwrap_or(IntegerBounds::FULL.min),
            max.unwrap_or(IntegerBounds::FULL.max),
        )?;
        Ok(Self::with_bounds(bounds))
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn empty_bounds_are_rejected() {
        let err = IntegerBounds::new(5, -5).unwrap_err();
        assert!(err.to_string().contains("min 5 is greater than max -5"));
    }

    #[test]
    fn signed_16_admits_its_limits_only() {
        let bounds = IntegerBounds::SIGNED_16;
        assert!(bounds.admits("32767"));
        assert!(bounds.admits("-32768"));
        assert!(!bounds.admits("32768"));
        assert!(!bounds.admits("-32769"));
    }

    #[test]
    fn literals_beyond_i64_are_never_admitted() {
        assert!(!IntegerBounds::FULL.admits("9223372036854775808"));
        assert!(IntegerBounds::FULL.admits("-9223372036854775808"));
    }

    #[test]
    fn limits_build_optional_bounds() {
        assert_eq!(ParserConfig::from_limits(None, None).unwrap(), ParserConfig::default());
        let config = ParserConfig::from_limits(Some(-10), None).unwrap();
        let bounds = config.integer_bounds.unwrap();
        assert_eq!((bounds.min(), bounds.max()), (-10, i64::MAX));
        assert!(ParserConfig::from_limits(Some(1), Some(0)).is_err());
    }

    #[test]
    fn one_sided_limit_fills_in_the_full_range() {
        let config = ParserConfig::from_limits(None, Some(7)).unwrap();
        let bounds = config.integer_bounds.unwrap();
        assert_eq!(bounds.min(), IntegerBounds::FULL.min());
        assert!(!bounds.admits("8"));
        assert!(!bounds.admits("-9223372036854775809"));
    }
}
