//! Exact rational numbers.

use crate::{error::Error, primitive::{int, is_negative, is_zero}};
use rug::Integer;
use std::{cmp::Ordering, fmt::{self, Display, Formatter}, ops::Neg};

#[cfg(feature = "serde")]
use serde::{Deserialize, Serialize};

/// An exact rational number, stored as a numerator and a non-zero denominator.
///
/// A [`Fraction`] created with [`Fraction::new`] keeps the numerator and denominator it was
/// given, but every arithmetic operation returns its result in lowest terms with a positive
/// denominator (see [`Fraction::reduce`]). Comparisons are always made by value, so `2/4` and
/// `1/2` are equal.
///
/// ```
/// use cas_linear::Fraction;
///
/// let a = Fraction::new(1, 3).unwrap();
/// let b = Fraction::new(1, 6).unwrap();
/// assert_eq!(a.add(&b), Fraction::new(1, 2).unwrap());
/// assert_eq!(a.multiply(3), Fraction::from(1));
/// ```
#[derive(Clone, Debug)]
#[cfg_attr(
    feature = "serde",
    derive(Serialize, Deserialize),
    serde(try_from = "(Integer, Integer)", into = "(Integer, Integer)")
)]
pub struct Fraction {
    /// The numerator.
    numer: Integer,

    /// The denominator. This is never zero.
    denom: Integer,
}

impl Fraction {
    /// Creates a fraction with the given numerator and denominator, as given. Returns
    /// [`Error::DivideByZero`] if the denominator is zero.
    pub fn new(numer: impl Into<Integer>, denom: impl Into<Integer>) -> Result<Self, Error> {
        let denom = denom.into();
        if is_zero(&denom) {
            return Err(Error::DivideByZero);
        }

        Ok(Self { numer: numer.into(), denom })
    }

    /// Creates a fraction from a numerator and denominator that are known to be valid.
    fn from_parts(numer: Integer, denom: Integer) -> Self {
        debug_assert!(!is_zero(&denom));
        Self { numer, denom }
    }

    /// The rational number `0`.
    pub fn zero() -> Self {
        Self::from_parts(int(0), int(1))
    }

    /// The rational number `1`.
    pub fn one() -> Self {
        Self::from_parts(int(1), int(1))
    }

    /// Returns the numerator, as stored.
    pub fn numer(&self) -> &Integer {
        &self.numer
    }

    /// Returns the denominator, as stored.
    pub fn denom(&self) -> &Integer {
        &self.denom
    }

    /// Returns true if this fraction is equal to zero.
    pub fn is_zero(&self) -> bool {
        is_zero(&self.numer)
    }

    /// Returns true if this fraction is strictly less than zero.
    pub fn is_negative(&self) -> bool {
        is_negative(&self.numer) != is_negative(&self.denom) && !self.is_zero()
    }

    /// Returns true if this fraction is strictly greater than zero.
    pub fn is_positive(&self) -> bool {
        !self.is_zero() && !self.is_negative()
    }

    /// Returns an equal fraction in lowest terms, with a positive denominator.
    ///
    /// Zero reduces to `0/1`.
    pub fn reduce(&self) -> Self {
        // gcd(0, d) = |d|, which is non-zero
        let gcd = Integer::from(self.numer.gcd_ref(&self.denom));
        let numer = Integer::from(&self.numer / &gcd);
        let denom = Integer::from(&self.denom / &gcd);

        if is_negative(&denom) {
            Self::from_parts(-numer, -denom)
        } else {
            Self::from_parts(numer, denom)
        }
    }

    /// Returns the magnitude of this fraction, in lowest terms.
    pub fn abs(&self) -> Self {
        let reduced = self.reduce();
        Self::from_parts(reduced.numer.abs(), reduced.denom)
    }

    /// Returns the reciprocal of this fraction. Returns [`Error::DivideByZero`] if this fraction is
    /// zero.
    pub fn recip(&self) -> Result<Self, Error> {
        Self::new(self.denom.clone(), self.numer.clone()).map(|recip| recip.reduce())
    }

    /// Adds the given number to this fraction.
    pub fn add(&self, rhs: impl Into<Fraction>) -> Self {
        let rhs = rhs.into();
        let numer = Integer::from(&self.numer * &rhs.denom) + Integer::from(&rhs.numer * &self.denom);
        Self::from_parts(numer, Integer::from(&self.denom * &rhs.denom)).reduce()
    }

    /// Subtracts the given number from this fraction.
    pub fn subtract(&self, rhs: impl Into<Fraction>) -> Self {
        self.add(-rhs.into())
    }

    /// Multiplies this fraction by the given number.
    pub fn multiply(&self, rhs: impl Into<Fraction>) -> Self {
        let rhs = rhs.into();
        Self::from_parts(
            Integer::from(&self.numer * &rhs.numer),
            Integer::from(&self.denom * &rhs.denom),
        ).reduce()
    }

    /// Divides this fraction by the given number. Returns [`Error::DivideByZero`] if the divisor
    /// is zero.
    pub fn divide(&self, rhs: impl Into<Fraction>) -> Result<Self, Error> {
        let rhs = rhs.into();
        if rhs.is_zero() {
            tracing::debug!(dividend = %self, "attempted to divide a fraction by zero");
            return Err(Error::DivideByZero);
        }

        Ok(self.multiply(rhs.recip()?))
    }

    /// Formats this fraction as plain text: the bare numerator if the denominator is 1, or
    /// `numer/denom` otherwise. The sign is always written in front, so `1/-2` prints as `-1/2`.
    pub fn print(&self) -> String {
        let (sign, numer, denom) = self.signed_parts();
        if denom == 1 {
            format!("{}{}", sign, numer)
        } else {
            format!("{}{}/{}", sign, numer, denom)
        }
    }

    /// Formats this fraction as TeX, using `\frac` for non-integers.
    pub fn tex(&self) -> String {
        let (sign, numer, denom) = self.signed_parts();
        if denom == 1 {
            format!("{}{}", sign, numer)
        } else {
            format!("{}\\frac{{{}}}{{{}}}", sign, numer, denom)
        }
    }

    /// Splits this fraction into its sign and the magnitudes of the stored numerator and
    /// denominator, without reducing.
    fn signed_parts(&self) -> (&'static str, Integer, Integer) {
        let sign = if self.is_negative() { "-" } else { "" };
        (sign, Integer::from(self.numer.abs_ref()), Integer::from(self.denom.abs_ref()))
    }
}

impl Default for Fraction {
    fn default() -> Self {
        Self::zero()
    }
}

impl Display for Fraction {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.print())
    }
}

/// Fractions are compared by value: `a/b == c/d` exactly when `ad == cb`.
impl PartialEq for Fraction {
    fn eq(&self, other: &Self) -> bool {
        Integer::from(&self.numer * &other.denom) == Integer::from(&other.numer * &self.denom)
    }
}

impl Eq for Fraction {}

impl PartialOrd for Fraction {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl Ord for Fraction {
    fn cmp(&self, other: &Self) -> Ordering {
        // cross-multiplying preserves order only with positive denominators
        let (lhs, rhs) = (self.reduce(), other.reduce());
        Integer::from(&lhs.numer * &rhs.denom).cmp(&Integer::from(&rhs.numer * &lhs.denom))
    }
}

impl Neg for Fraction {
    type Output = Self;

    fn neg(self) -> Self::Output {
        Self::from_parts(-self.numer, self.denom)
    }
}

impl Neg for &Fraction {
    type Output = Fraction;

    fn neg(self) -> Self::Output {
        Fraction::from_parts(Integer::from(-&self.numer), self.denom.clone())
    }
}

impl From<Integer> for Fraction {
    fn from(numer: Integer) -> Self {
        Self::from_parts(numer, int(1))
    }
}

impl From<&Integer> for Fraction {
    fn from(numer: &Integer) -> Self {
        Self::from_parts(numer.clone(), int(1))
    }
}

impl From<&Fraction> for Fraction {
    fn from(fraction: &Fraction) -> Self {
        fraction.clone()
    }
}

impl TryFrom<(Integer, Integer)> for Fraction {
    type Error = Error;

    fn try_from((numer, denom): (Integer, Integer)) -> Result<Self, Self::Error> {
        Self::new(numer, denom)
    }
}

impl From<Fraction> for (Integer, Integer) {
    fn from(fraction: Fraction) -> Self {
        (fraction.numer, fraction.denom)
    }
}

/// Implements [`From`] for [`Fraction`] for the given primitive integer types, both by value and
/// by reference.
macro_rules! impl_from_primitive {
    ($($t:ty),* $(,)?) => {
        $(
            impl From<$t> for Fraction {
                fn from(n: $t) -> Self {
                    Self::from(int(n))
                }
            }

            impl From<&$t> for Fraction {
                fn from(n: &$t) -> Self {
                    Self::from(int(*n))
                }
            }
        )*
    };
}

impl_from_primitive!(i8, i16, i32, i64, i128, isize, u8, u16, u32, u64, u128, usize);
