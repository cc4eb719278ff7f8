//! # Sign Policy
//!
//! The one place the "positive / negative, zero allowed or not" rule lives.
//! Scalar validators and elementwise array validators both delegate here.
//!
//! | sign | zero | accepts |
//! |------|------|---------|
//! | positive | false | `x > 0` |
//! | positive | true  | `x >= 0` |
//! | negative | false | `x < 0` |
//! | negative | true  | `x <= 0` |
//!
//! NaN satisfies no policy.

use std::fmt;

/// Required sign of a number.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sign {
    /// Greater than zero.
    Positive,
    /// Less than zero.
    Negative,
}

/// Sign requirement plus whether zero is admissible.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct SignPolicy {
    /// Required sign.
    pub sign: Sign,
    /// Whether zero also passes.
    pub zero: bool,
}

impl SignPolicy {
    /// `x > 0`, or `x >= 0` when `zero` is set.
    pub const fn positive(zero: bool) -> Self {
        Self {
            sign: Sign::Positive,
            zero,
        }
    }

    /// `x < 0`, or `x <= 0` when `zero` is set.
    pub const fn negative(zero: bool) -> Self {
        Self {
            sign: Sign::Negative,
            zero,
        }
    }

    /// True if `x` satisfies the policy.
    pub fn admits(&self, x: f64) -> bool {
        match (self.sign, self.zero) {
            (Sign::Positive, false) => x > 0.0,
            (Sign::Positive, true) => x >= 0.0,
            (Sign::Negative, false) => x < 0.0,
            (Sign::Negative, true) => x <= 0.0,
        }
    }
}

impl fmt::Display for SignPolicy {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let relation = match self.sign {
            Sign::Positive => "greater than zero",
            Sign::Negative => "less than zero",
        };
        if self.zero {
            write!(f, "{relation} or zero")
        } else {
            f.write_str(relation)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn zero_handling() {
        assert!(!SignPolicy::positive(false).admits(0.0));
        assert!(SignPolicy::positive(true).admits(0.0));
        assert!(!SignPolicy::negative(false).admits(0.0));
        assert!(SignPolicy::negative(true).admits(0.0));
        assert!(SignPolicy::positive(true).admits(-0.0));
    }

    #[test]
    fn nan_never_admitted() {
        for policy in [
            SignPolicy::positive(false),
            SignPolicy::positive(true),
            SignPolicy::negative(false),
            SignPolicy::negative(true),
        ] {
            assert!(!policy.admits(f64::NAN));
        }
    }

    #[test]
    fn display() {
        assert_eq!(SignPolicy::positive(false).to_string(), "greater than zero");
        assert_eq!(SignPolicy::negative(true).to_string(), "less than zero or zero");
    }
}
