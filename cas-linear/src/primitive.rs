//! Functions to construct and inspect the [`Integer`]s backing every [`Fraction`].
//!
//! [`Fraction`]: crate::Fraction

use rug::Integer;
use std::cmp::Ordering;

/// Creates an [`Integer`] with the given value.
pub fn int<T>(n: T) -> Integer
where
    Integer: From<T>,
{
    Integer::from(n)
}

/// Returns true if the given [`Integer`] is zero.
pub(crate) fn is_zero(n: &Integer) -> bool {
    n.cmp0() == Ordering::Equal
}

/// Returns true if the given [`Integer`] is strictly less than zero.
pub(crate) fn is_negative(n: &Integer) -> bool {
    n.cmp0() == Ordering::Less
}
