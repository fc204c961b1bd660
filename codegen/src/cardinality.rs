//! Multiplicity expressions → Alloy quantifiers.
//!
//! The four canonical multiplicities map onto Alloy's multiplicity keywords.
//! Anything else is *custom*: the field is declared with `set` and the caller
//! emits a `fact multiplicity` enforcing the numeric bounds.

use std::fmt;

use crate::error::{Result, TransformError};

/// Alloy multiplicity keywords.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Quantifier {
    /// `0..1`
    Lone,
    /// `1`
    One,
    /// `0..*`
    Set,
    /// `1..*`
    Some,
}

impl Quantifier {
    /// The Alloy keyword.
    #[must_use]
    pub fn keyword(self) -> &'static str {
        match self {
            Quantifier::Lone => "lone",
            Quantifier::One => "one",
            Quantifier::Set => "set",
            Quantifier::Some => "some",
        }
    }
}

impl fmt::Display for Quantifier {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.keyword())
    }
}

/// Classification of a multiplicity expression.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Multiplicity {
    /// One of the four canonical forms.
    Keyword(Quantifier),
    /// Any other range. `lower` is absent when 0, `upper` when unbounded.
    Custom {
        /// Lower bound, if greater than zero.
        lower: Option<u32>,
        /// Upper bound, if bounded.
        upper: Option<u32>,
    },
}

impl Multiplicity {
    /// Classifies a multiplicity expression such as `"1"`, `"0..*"` or `"2..5"`.
    ///
    /// # Errors
    ///
    /// Returns [`TransformError::InvalidCardinality`] when the expression is
    /// not `n`, `*`, `n..m` or `n..*`.
    pub fn parse(expr: &str) -> Result<Self> {
        let invalid = || TransformError::InvalidCardinality {
            cardinality: expr.to_string(),
        };
        let trimmed = expr.trim();

        let (lower, upper) = match trimmed.split_once("..") {
            Some((lower, upper)) => {
                let lower: u32 = lower.trim().parse().map_err(|_| invalid())?;
                let upper = match upper.trim() {
                    "*" => None,
                    bound => Some(bound.parse::<u32>().map_err(|_| invalid())?),
                };
                (lower, upper)
            }
            None if trimmed == "*" => (0, None),
            None => {
                let exact: u32 = trimmed.parse().map_err(|_| invalid())?;
                (exact, Some(exact))
            }
        };

        Ok(match (lower, upper) {
            (0, Some(1)) => Multiplicity::Keyword(Quantifier::Lone),
            (1, Some(1)) => Multiplicity::Keyword(Quantifier::One),
            (0, None) => Multiplicity::Keyword(Quantifier::Set),
            (1, None) => Multiplicity::Keyword(Quantifier::Some),
            (lower, upper) => Multiplicity::Custom {
                lower: (lower > 0).then_some(lower),
                upper,
            },
        })
    }

    /// The keyword used in a field declaration; custom ranges fall back to `set`.
    #[must_use]
    pub fn keyword(&self) -> &'static str {
        match self {
            Multiplicity::Keyword(q) => q.keyword(),
            Multiplicity::Custom { .. } => "set",
        }
    }

    /// Returns `true` for ranges not expressible by a keyword.
    #[must_use]
    pub fn is_custom(&self) -> bool {
        matches!(self, Multiplicity::Custom { .. })
    }

    /// Numeric bounds of the range, with the same absence rules as `Custom`.
    #[must_use]
    pub fn bounds(&self) -> (Option<u32>, Option<u32>) {
        match *self {
            Multiplicity::Keyword(Quantifier::Lone) => (None, Some(1)),
            Multiplicity::Keyword(Quantifier::One) => (Some(1), Some(1)),
            Multiplicity::Keyword(Quantifier::Set) => (None, None),
            Multiplicity::Keyword(Quantifier::Some) => (Some(1), None),
            Multiplicity::Custom { lower, upper } => (lower, upper),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn canonical_forms() {
        assert_eq!(Multiplicity::parse("0..1"), Ok(Multiplicity::Keyword(Quantifier::Lone)));
        assert_eq!(Multiplicity::parse("1"), Ok(Multiplicity::Keyword(Quantifier::One)));
        assert_eq!(Multiplicity::parse("1..1"), Ok(Multiplicity::Keyword(Quantifier::One)));
        assert_eq!(Multiplicity::parse("0..*"), Ok(Multiplicity::Keyword(Quantifier::Set)));
        assert_eq!(Multiplicity::parse("*"), Ok(Multiplicity::Keyword(Quantifier::Set)));
        assert_eq!(Multiplicity::parse("1..*"), Ok(Multiplicity::Keyword(Quantifier::Some)));
    }

    #[test]
    fn custom_ranges() {
        assert_eq!(
            Multiplicity::parse("2..5"),
            Ok(Multiplicity::Custom { lower: Some(2), upper: Some(5) })
        );
        assert_eq!(
            Multiplicity::parse("3"),
            Ok(Multiplicity::Custom { lower: Some(3), upper: Some(3) })
        );
        assert_eq!(
            Multiplicity::parse("2..*"),
            Ok(Multiplicity::Custom { lower: Some(2), upper: None })
        );
        assert_eq!(
            Multiplicity::parse("0..4"),
            Ok(Multiplicity::Custom { lower: None, upper: Some(4) })
        );
        assert_eq!(Multiplicity::parse(" 2 .. 5 ").map(|m| m.keyword()), Ok("set"));
    }

    #[test]
    fn malformed_expressions() {
        for expr in ["", "many", "*..1", "1..", "..3", "-1", "1..2..3"] {
            assert_eq!(
                Multiplicity::parse(expr),
                Err(TransformError::InvalidCardinality { cardinality: expr.to_string() }),
                "{expr:?} should be rejected"
            );
        }
    }

    #[test]
    fn bounds_of_keywords() {
        assert_eq!(Multiplicity::Keyword(Quantifier::Some).bounds(), (Some(1), None));
        assert_eq!(Multiplicity::Keyword(Quantifier::Set).bounds(), (None, None));
        assert!(!Multiplicity::Keyword(Quantifier::One).is_custom());
    }
}
