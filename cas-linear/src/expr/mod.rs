//! Linear expressions with exact rational coefficients.
//!
//! An [`Expression`] is a constant plus a sum of [`Term`]s, such as `2x - 1/3y + 5`. Every
//! operation returns a new expression in **canonical form**:
//!
//! - There is at most one term per variable.
//! - No term has a coefficient of zero.
//! - The constant and every coefficient are in lowest terms.
//!
//! The constant may be any rational number, including zero.
//!
//! # Term order
//!
//! Terms are kept in the order they were first introduced. When two expressions are added, the
//! terms of the receiver come first, in their original order, followed by the terms of the
//! argument whose variables the receiver did not already have. Rendering with
//! [`Expression::print`] and [`Expression::tex`] follows this order, which keeps output stable
//! across operations.
//!
//! Equality ignores term order: two expressions are equal if they have the same constant and the
//! same terms, in any order. This mirrors how `x + y` and `y + x` are the same expression.
//!
//! # Operands
//!
//! The right-hand side of each operation is an [`Operand`], which can be built from a number, a
//! [`Term`], or another [`Expression`]. Only numbers can scale an expression; multiplying or
//! dividing by a term or an expression would leave the space of linear expressions, and fails
//! with [`Error::InvalidArgument`].
//!
//! ```
//! use cas_linear::{Expression, Fraction, Term};
//!
//! let expr = Expression::from_variable("x")
//!     .add(Term::with_coefficient(-1, "y"))
//!     .add(5);
//! assert_eq!(expr.print(), "x - y + 5");
//!
//! let half = expr.multiply(Fraction::new(1, 2).unwrap()).unwrap();
//! assert_eq!(half.print(), "1/2x - 1/2y + 5/2");
//!
//! assert!(expr.multiply(Expression::from_variable("y")).is_err());
//! ```

mod eval;
mod fmt;
mod operand;

use crate::{error::Error, fraction::Fraction, term::Term};
use rug::Integer;
use std::ops::Neg;

pub use eval::Evaluated;
pub use operand::Operand;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// A linear expression, `constant + c1*v1 + c2*v2 + ...`.
///
/// For more information about this type, see the [module-level documentation](self).
#[derive(Clone, Debug, Default)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize), serde(from = "RawExpression"))]
pub struct Expression {
    /// The constant term.
    constant: Fraction,

    /// The terms, in insertion order, with distinct variables.
    terms: Vec<Term>,
}

impl Expression {
    /// Creates the zero expression, with no terms and a constant of zero.
    pub fn new() -> Self {
        Self::default()
    }

    /// Creates the expression `1 * variable`.
    pub fn from_variable(variable: impl Into<String>) -> Self {
        Self {
            constant: Fraction::zero(),
            terms: vec![Term::new(variable)],
        }
    }

    /// Returns the constant of this expression.
    pub fn constant(&self) -> &Fraction {
        &self.constant
    }

    /// Returns the terms of this expression, in insertion order.
    pub fn terms(&self) -> &[Term] {
        &self.terms
    }

    /// Returns the coefficient of the given variable, or [`None`] if the expression has no term
    /// with that variable.
    pub fn coefficient_of(&self, variable: &str) -> Option<&Fraction> {
        self.terms.iter()
            .find(|term| term.variable == variable)
            .map(|term| &term.coefficient)
    }

    /// Returns true if the expression has a term with the given variable.
    pub fn has_variable(&self, variable: &str) -> bool {
        self.terms.iter().any(|term| term.variable == variable)
    }

    /// Returns true if the expression has no terms, i.e. it is a bare constant.
    pub fn is_constant(&self) -> bool {
        self.terms.is_empty()
    }

    /// Returns the sum of this expression and the given operand.
    ///
    /// Like terms are combined into the term already present in this expression, and terms whose
    /// coefficients cancel to zero are removed.
    pub fn add(&self, rhs: impl Into<Operand>) -> Self {
        let mut copy = self.clone();

        match rhs.into() {
            Operand::Number(n) => copy.constant = copy.constant.add(n),
            Operand::Term(term) => copy.merge(Self::from(term)),
            Operand::Expression(expr) => copy.merge(expr),
        }

        copy.canonicalize();
        copy
    }

    /// Returns the difference of this expression and the given operand.
    pub fn subtract(&self, rhs: impl Into<Operand>) -> Self {
        self.add(rhs.into().negate())
    }

    /// Returns the product of this expression and the given number.
    ///
    /// Returns [`Error::InvalidArgument`] if the operand is a [`Term`] or an [`Expression`], since
    /// the product would not be linear.
    pub fn multiply(&self, rhs: impl Into<Operand>) -> Result<Self, Error> {
        let factor = number_operand("multiply", rhs.into())?;
        Ok(self.scale(&factor))
    }

    /// Returns the quotient of this expression and the given number.
    ///
    /// Returns [`Error::InvalidArgument`] if the operand is a [`Term`] or an [`Expression`], or
    /// [`Error::DivideByZero`] if the operand is zero.
    pub fn divide(&self, rhs: impl Into<Operand>) -> Result<Self, Error> {
        let divisor = number_operand("divide", rhs.into())?;
        if divisor.is_zero() {
            tracing::debug!(dividend = %self, "attempted to divide an expression by zero");
            return Err(Error::DivideByZero);
        }

        Ok(self.scale(&divisor.recip()?))
    }

    /// Returns the additive inverse of this expression.
    pub fn negate(&self) -> Self {
        self.scale(&Fraction::from(-1))
    }

    /// Multiplies the constant and every coefficient by the given factor.
    fn scale(&self, factor: &Fraction) -> Self {
        let mut copy = self.clone();
        copy.constant = copy.constant.multiply(factor);
        for term in &mut copy.terms {
            term.coefficient = term.coefficient.multiply(factor);
        }

        copy.canonicalize();
        copy
    }

    /// Adds the constant and terms of the given expression into this one.
    ///
    /// Each term of `self` absorbs the first incoming term with the same variable. Incoming terms
    /// that match nothing are appended in their original order.
    fn merge(&mut self, other: Self) {
        self.constant = self.constant.add(other.constant);

        let mut incoming = other.terms;
        for term in &mut self.terms {
            if let Some(idx) = incoming.iter().position(|t| term.has_the_same_variable_as(t)) {
                let matched = incoming.remove(idx);
                term.coefficient = term.coefficient.add(matched.coefficient);
            }
        }

        self.terms.extend(incoming);
    }

    /// Removes every term with the given variable.
    pub(crate) fn remove_terms_with_variable(&mut self, variable: &str) {
        self.terms.retain(|term| term.variable != variable);
    }

    /// Removes every term whose coefficient is zero.
    pub(crate) fn remove_terms_with_coefficient_zero(&mut self) {
        self.terms.retain(|term| {
            let keep = !term.coefficient.is_zero();
            if !keep {
                tracing::trace!(variable = %term.variable, "purged zero-coefficient term");
            }
            keep
        });
    }

    /// Brings the expression into canonical form, reducing the constant and every coefficient,
    /// then purging zero terms.
    pub(crate) fn canonicalize(&mut self) {
        self.constant = self.constant.reduce();
        for term in &mut self.terms {
            term.coefficient = term.coefficient.reduce();
        }
        self.remove_terms_with_coefficient_zero();
    }
}

/// The serialized fields of an [`Expression`], which may not be in canonical form.
#[cfg(feature = "serde")]
#[derive(Deserialize)]
struct RawExpression {
    constant: Fraction,
    terms: Vec<Term>,
}

/// Like terms are combined in order of appearance, then zero terms are purged.
#[cfg(feature = "serde")]
impl From<RawExpression> for Expression {
    fn from(raw: RawExpression) -> Self {
        let mut expr = Self::from(raw.constant);
        for term in raw.terms {
            expr.merge(Self {
                constant: Fraction::zero(),
                terms: vec![term],
            });
        }

        expr.canonicalize();
        expr
    }
}

/// Extracts the number from an operand that must be a number, for the given operation.
fn number_operand(operation: &'static str, operand: Operand) -> Result<Fraction, Error> {
    match operand {
        Operand::Number(n) => Ok(n),
        other => {
            let operand = other.kind_name();
            tracing::debug!(operation, operand, "rejected non-numeric operand");
            Err(Error::InvalidArgument { operation, operand })
        },
    }
}

/// Checks if two expressions are equal.
///
/// Two expressions are equal if their constants are equal, and they have the same terms, in any
/// order. For more information, see the [module-level documentation](self).
impl PartialEq for Expression {
    fn eq(&self, other: &Self) -> bool {
        self.constant == other.constant
            && self.terms.len() == other.terms.len()
            && self.terms.iter().all(|term| other.terms.contains(term))
    }
}

impl Eq for Expression {}

impl From<Term> for Expression {
    fn from(term: Term) -> Self {
        let mut expr = Self {
            constant: Fraction::zero(),
            terms: vec![term],
        };
        expr.canonicalize();
        expr
    }
}

impl From<Fraction> for Expression {
    fn from(constant: Fraction) -> Self {
        Self {
            constant: constant.reduce(),
            terms: Vec::new(),
        }
    }
}

impl From<&Fraction> for Expression {
    fn from(constant: &Fraction) -> Self {
        Self::from(constant.reduce())
    }
}

impl From<Integer> for Expression {
    fn from(constant: Integer) -> Self {
        Self::from(Fraction::from(constant))
    }
}

/// Implements [`From`] for [`Expression`] for the given primitive integer types, producing a
/// constant expression.
macro_rules! impl_from_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Expression {
                fn from(constant: $t) -> Self {
                    Self::from(Fraction::from(constant))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

impl Neg for Expression {
    type Output = Self;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}

impl Neg for &Expression {
    type Output = Expression;

    fn neg(self) -> Self::Output {
        self.negate()
    }
}
