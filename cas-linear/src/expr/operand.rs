use crate::{fraction::Fraction, term::Term};
use rug::Integer;
use super::Expression;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The right-hand side of an [`Expression`] operation.
///
/// Every operation on an [`Expression`] accepts anything that converts into an [`Operand`]:
/// numbers (primitive integers, [`Integer`]s and [`Fraction`]s), [`Term`]s and other
/// [`Expression`]s. Whether a given shape is supported depends on the operation; see
/// [`Expression::multiply`], for example.
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Operand {
    /// A rational number.
    Number(Fraction),

    /// A single term, such as `2x`.
    Term(Term),

    /// A linear expression, such as `2x + y - 3`.
    Expression(Expression),
}

impl Operand {
    /// Returns the name of the shape of this operand.
    pub fn kind_name(&self) -> &'static str {
        match self {
            Self::Number(_) => "number",
            Self::Term(_) => "term",
            Self::Expression(_) => "expression",
        }
    }

    /// Returns the additive inverse of this operand, keeping its shape.
    pub(crate) fn negate(self) -> Self {
        match self {
            Self::Number(n) => Self::Number(-n),
            Self::Term(term) => Self::Term(Term {
                coefficient: -term.coefficient,
                variable: term.variable,
            }),
            Self::Expression(expr) => Self::Expression(expr.negate()),
        }
    }
}

impl From<Fraction> for Operand {
    fn from(n: Fraction) -> Self {
        Self::Number(n)
    }
}

impl From<&Fraction> for Operand {
    fn from(n: &Fraction) -> Self {
        Self::Number(n.clone())
    }
}

impl From<Integer> for Operand {
    fn from(n: Integer) -> Self {
        Self::Number(n.into())
    }
}

impl From<&Integer> for Operand {
    fn from(n: &Integer) -> Self {
        Self::Number(n.into())
    }
}

impl From<Term> for Operand {
    fn from(term: Term) -> Self {
        Self::Term(term)
    }
}

impl From<&Term> for Operand {
    fn from(term: &Term) -> Self {
        Self::Term(term.clone())
    }
}

impl From<Expression> for Operand {
    fn from(expr: Expression) -> Self {
        Self::Expression(expr)
    }
}

impl From<&Expression> for Operand {
    fn from(expr: &Expression) -> Self {
        Self::Expression(expr.clone())
    }
}

/// Implements [`From`] for [`Operand`] for the given primitive integer types.
macro_rules! impl_from_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Operand {
                fn from(n: $t) -> Self {
                    Self::Number(n.into())
                }
            }

            impl From<&$t> for Operand {
                fn from(n: &$t) -> Self {
                    Self::Number(n.into())
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);

#[cfg(test)]
mod tests {
    use pretty_assertions::assert_eq;
    use super::*;

    #[test]
    fn kind_names() {
        assert_eq!(Operand::from(3).kind_name(), "number");
        assert_eq!(Operand::from(Term::new("x")).kind_name(), "term");
        assert_eq!(Operand::from(Expression::new()).kind_name(), "expression");
    }

    #[test]
    fn negate_keeps_shape() {
        assert_eq!(Operand::from(3).negate(), Operand::from(-3));
        assert_eq!(
            Operand::from(Term::with_coefficient(2, "x")).negate(),
            Operand::from(Term::with_coefficient(-2, "x")),
        );
    }
}
