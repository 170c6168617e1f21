//! A single variable scaled by a rational coefficient.

use crate::fraction::Fraction;
use std::fmt::{self, Display, Formatter};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A monomial of degree one, `coefficient * variable`, such as `2x` or `-1/3y`.
///
/// A [`Term`] always has exactly one variable; constants are held by the
/// [`Expression`](crate::Expression) a term belongs to.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub struct Term {
    /// The coefficient of the variable.
    pub(crate) coefficient: Fraction,

    /// The name of the variable.
    pub(crate) variable: String,
}

impl Term {
    /// Creates the term `1 * variable`.
    pub fn new(variable: impl Into<String>) -> Self {
        Self::with_coefficient(Fraction::one(), variable)
    }

    /// Creates the term `coefficient * variable`.
    pub fn with_coefficient(coefficient: impl Into<Fraction>, variable: impl Into<String>) -> Self {
        Self {
            coefficient: coefficient.into(),
            variable: variable.into(),
        }
    }

    /// Returns the coefficient of this term.
    pub fn coefficient(&self) -> &Fraction {
        &self.coefficient
    }

    /// Returns the name of the variable of this term.
    pub fn variable(&self) -> &str {
        &self.variable
    }

    /// Returns true if both terms have the same variable, regardless of their coefficients.
    pub fn has_the_same_variable_as(&self, other: &Term) -> bool {
        self.variable == other.variable
    }

    /// Formats the magnitude of this term as plain text. The sign is left to the caller, so `-2x`
    /// prints as `2x`, and a coefficient of magnitude 1 is omitted entirely.
    pub fn print(&self) -> String {
        self.render(Fraction::print)
    }

    /// Formats the magnitude of this term as TeX. See [`Term::print`].
    pub fn tex(&self) -> String {
        self.render(Fraction::tex)
    }

    fn render(&self, number: impl Fn(&Fraction) -> String) -> String {
        let magnitude = self.coefficient.abs();
        if magnitude == Fraction::one() {
            self.variable.clone()
        } else {
            format!("{}{}", number(&magnitude), self.variable)
        }
    }
}

/// Unlike [`Term::print`], this includes the sign of the coefficient.
impl Display for Term {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        if self.coefficient.is_negative() {
            write!(f, "-")?;
        }
        write!(f, "{}", self.print())
    }
}

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    fn frac(numer: i64, denom: i64) -> Fraction {
        Fraction::new(numer, denom).unwrap()
    }

    #[test]
    fn default_coefficient() {
        let term = Term::new("x");
        assert_eq!(term.coefficient(), &Fraction::one());
        assert_eq!(term.variable(), "x");
    }

    #[test]
    fn same_variable_ignores_coefficient() {
        let a = Term::with_coefficient(3, "x");
        let b = Term::with_coefficient(frac(-1, 2), "x");
        let c = Term::with_coefficient(3, "y");
        assert!(a.has_the_same_variable_as(&b));
        assert!(!a.has_the_same_variable_as(&c));
    }

    #[test]
    fn copies_are_independent() {
        let original = Term::with_coefficient(2, "x");
        let mut copy = original.clone();
        copy.coefficient = frac(5, 3);
        assert_eq!(original.coefficient(), &Fraction::from(2));
        assert_eq!(copy.variable(), original.variable());
    }

    #[test]
    fn print_unit_coefficient() {
        assert_eq!(Term::new("x").print(), "x");
        assert_eq!(Term::with_coefficient(-1, "x").print(), "x");
        assert_eq!(Term::with_coefficient(frac(2, 2), "x").print(), "x");
    }

    #[test]
    fn print_magnitude() {
        assert_eq!(Term::with_coefficient(2, "x").print(), "2x");
        assert_eq!(Term::with_coefficient(-2, "x").print(), "2x");
        assert_eq!(Term::with_coefficient(frac(2, -6), "y").print(), "1/3y");
    }

    #[test]
    fn tex_magnitude() {
        assert_eq!(Term::with_coefficient(frac(-1, 2), "x").tex(), "\\frac{1}{2}x");
        assert_eq!(Term::with_coefficient(4, "x").tex(), "4x");
        assert_eq!(Term::with_coefficient(-1, "x").tex(), "x");
    }

    #[test]
    fn display_keeps_sign() {
        assert_eq!(Term::with_coefficient(-1, "y").to_string(), "-y");
        assert_eq!(Term::with_coefficient(frac(-2, 3), "x").to_string(), "-2/3x");
        assert_eq!(Term::with_coefficient(7, "z").to_string(), "7z");
    }
}
