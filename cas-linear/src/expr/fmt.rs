//! Plain text and TeX rendering of [`Expression`]s.

use crate::{fraction::Fraction, term::Term};
use std::fmt::{self, Display, Formatter};
use super::Expression;

impl Expression {
    /// Formats this expression as plain text, such as `2x - 1/3y + 5`.
    ///
    /// Terms appear in insertion order. The leading term carries its sign directly (`-x`), later
    /// terms and the constant are joined with ` + ` or ` - `, and a zero constant is left out. The
    /// zero expression prints as `0`.
    pub fn print(&self) -> String {
        self.render(Term::print, Fraction::print)
    }

    /// Formats this expression as TeX, such as `2x - \frac{1}{3}y + 5`, following the same rules
    /// as [`Expression::print`].
    pub fn tex(&self) -> String {
        self.render(Term::tex, Fraction::tex)
    }

    fn render(
        &self,
        term_fmt: impl Fn(&Term) -> String,
        number_fmt: impl Fn(&Fraction) -> String,
    ) -> String {
        let Some((first, rest)) = self.terms.split_first() else {
            return number_fmt(&self.constant.reduce());
        };

        // there is no joiner before the first term, so its sign is written separately
        let mut out = String::new();
        if first.coefficient.is_negative() {
            out.push('-');
        }
        out.push_str(&term_fmt(first));

        for term in rest {
            out.push_str(joiner(&term.coefficient));
            out.push_str(&term_fmt(term));
        }

        if !self.constant.is_zero() {
            out.push_str(joiner(&self.constant));
            out.push_str(&number_fmt(&self.constant.abs()));
        }

        out
    }
}

/// Returns the string that joins a term with the given coefficient to the rest of the expression.
fn joiner(coefficient: &Fraction) -> &'static str {
    if coefficient.is_negative() {
        " - "
    } else {
        " + "
    }
}

impl Display for Expression {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
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

    fn var(name: &str) -> Expression {
        Expression::from_variable(name)
    }

    #[test]
    fn zero_expression() {
        assert_eq!(Expression::new().print(), "0");
        assert_eq!(Expression::new().tex(), "0");
    }

    #[test]
    fn constant_only() {
        assert_eq!(Expression::from(-7).print(), "-7");
        assert_eq!(Expression::from(frac(-1, 2)).print(), "-1/2");
        assert_eq!(Expression::from(frac(-1, 2)).tex(), "-\\frac{1}{2}");
    }

    #[test]
    fn mixed_signs() {
        let expr = var("x").add(var("y").multiply(-1).unwrap()).add(5);
        assert_eq!(expr.print(), "x - y + 5");
    }

    #[test]
    fn leading_negative() {
        assert_eq!(Expression::new().subtract(var("x")).print(), "-x");
        assert_eq!(var("x").multiply(-3).unwrap().subtract(2).print(), "-3x - 2");
    }

    #[test]
    fn cancelled_term_not_rendered() {
        let expr = var("x").add(var("y")).subtract(var("x"));
        assert_eq!(expr.print(), "y");
    }

    #[test]
    fn insertion_order() {
        let expr = var("z").add(var("a")).add(var("m"));
        assert_eq!(expr.print(), "z + a + m");
    }

    #[test]
    fn fractional_coefficients() {
        let expr = var("x")
            .multiply(frac(2, 3)).unwrap()
            .subtract(Term::with_coefficient(frac(1, 4), "y"))
            .subtract(frac(5, 6));
        assert_eq!(expr.print(), "2/3x - 1/4y - 5/6");
        assert_eq!(expr.tex(), "\\frac{2}{3}x - \\frac{1}{4}y - \\frac{5}{6}");
        assert_eq!(expr.to_string(), expr.print());
    }

    #[test]
    fn tex_leading_negative_fraction() {
        let expr = Expression::from(Term::with_coefficient(frac(-1, 2), "x")).add(1);
        assert_eq!(expr.tex(), "-\\frac{1}{2}x + 1");
    }
}
