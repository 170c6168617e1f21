use crate::fraction::Fraction;
use std::fmt::{self, Display, Formatter};
use super::Expression;

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// The result of substituting values into an [`Expression`] with [`Expression::evaluate_at`].
#[derive(Clone, Debug, PartialEq, Eq)]
#[cfg_attr(feature = "serde", derive(Serialize, Deserialize))]
pub enum Evaluated {
    /// Every variable was substituted, leaving a number.
    Number(Fraction),

    /// Some variables were not substituted.
    Expression(Expression),
}

impl Evaluated {
    /// If the result is a number, returns a reference to it.
    pub fn as_number(&self) -> Option<&Fraction> {
        match self {
            Self::Number(n) => Some(n),
            Self::Expression(_) => None,
        }
    }

    /// If the result is a number, returns it.
    pub fn into_number(self) -> Option<Fraction> {
        match self {
            Self::Number(n) => Some(n),
            Self::Expression(_) => None,
        }
    }

    /// If the result is an expression, returns a reference to it.
    pub fn as_expression(&self) -> Option<&Expression> {
        match self {
            Self::Expression(expr) => Some(expr),
            Self::Number(_) => None,
        }
    }

    /// If the result is an expression, returns it.
    pub fn into_expression(self) -> Option<Expression> {
        match self {
            Self::Expression(expr) => Some(expr),
            Self::Number(_) => None,
        }
    }
}

impl Display for Evaluated {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::Number(n) => write!(f, "{}", n),
            Self::Expression(expr) => write!(f, "{}", expr),
        }
    }
}

impl Expression {
    /// Substitutes the given values for their variables.
    ///
    /// For each term whose variable matches a key, `coefficient * value` is added to the constant
    /// and the term is removed. A variable supplied more than once is folded in once per pair.
    /// Keys that match no variable are ignored.
    ///
    /// If no terms remain, the result is the bare constant, [`Evaluated::Number`].
    ///
    /// ```
    /// use cas_linear::{Evaluated, Expression, Fraction};
    /// use std::collections::HashMap;
    ///
    /// let expr = Expression::from_variable("x").multiply(2).unwrap().add(3);
    /// let values = HashMap::from([("x", 5)]);
    /// assert_eq!(expr.evaluate_at(&values), Evaluated::Number(Fraction::from(13)));
    /// ```
    pub fn evaluate_at<I, K, V>(&self, values: I) -> Evaluated
    where
        I: IntoIterator<Item = (K, V)>,
        K: AsRef<str>,
        V: Into<Fraction>,
    {
        let values = values.into_iter()
            .map(|(variable, value)| (variable, value.into()))
            .collect::<Vec<(K, Fraction)>>();

        let mut copy = self.clone();
        let mut substituted = 0usize;
        for term in &self.terms {
            for (variable, value) in &values {
                let variable = variable.as_ref();
                if term.variable == variable {
                    copy.constant = copy.constant.add(term.coefficient.multiply(value));
                    copy.remove_terms_with_variable(variable);
                    substituted += 1;
                }
            }
        }

        copy.canonicalize();
        tracing::trace!(substituted, remaining = copy.terms.len(), "evaluated expression");

        if copy.terms.is_empty() {
            Evaluated::Number(copy.constant)
        } else {
            Evaluated::Expression(copy)
        }
    }
}
