//! The [`Error`] returned by fallible operations on [`Fraction`]s and [`Expression`]s.
//!
//! [`Fraction`]: crate::Fraction
//! [`Expression`]: crate::Expression

use ariadne::{Color, Fmt, Label, Report, ReportKind};
use std::{error::Error as StdError, fmt::{self, Display, Formatter}, ops::Range};

/// The color to use to highlight expressions.
pub const EXPR: Color = Color::RGB(52, 235, 152);

/// Represents any kind of error that can occur while manipulating expressions.
///
/// An operation that returns an [`Error`] leaves its receiver and arguments untouched.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum Error {
    /// The operation does not accept an operand of this shape, such as multiplying an expression
    /// by another expression.
    InvalidArgument {
        /// The name of the operation that rejected the operand, such as `multiply`.
        operation: &'static str,

        /// The shape of the rejected operand, such as `expression`.
        operand: &'static str,
    },

    /// The divisor of a division, or the denominator of a new fraction, was zero.
    DivideByZero,
}

impl Error {
    /// Returns true if this is an [`Error::InvalidArgument`].
    pub fn is_invalid_argument(&self) -> bool {
        matches!(self, Self::InvalidArgument { .. })
    }

    /// Returns true if this is an [`Error::DivideByZero`].
    pub fn is_divide_by_zero(&self) -> bool {
        matches!(self, Self::DivideByZero)
    }

    /// Builds a report for this error, labelling each of the given spans of the source code
    /// identified by `src_id`.
    ///
    /// The first span is expected to cover the whole operation, and the second (if any) the
    /// offending operand.
    pub fn build_report<'a>(
        &self,
        src_id: &'a str,
        spans: &[Range<usize>],
    ) -> Report<(&'a str, Range<usize>)> {
        let (labels, help): (&[&str], String) = match self {
            Self::InvalidArgument { operation, operand } => (
                &["this operation", "this operand"],
                format!(
                    "only numbers can be used to {} an expression, but this operand is {} {}",
                    operation,
                    article(operand),
                    operand.fg(EXPR),
                ),
            ),
            Self::DivideByZero => (
                &["this division", "this divisor is zero"],
                "the divisor must be a non-zero number".to_string(),
            ),
        };

        let offset = spans.first().map_or(0, |span| span.start);
        let mut builder = Report::build(ReportKind::Error, src_id, offset)
            .with_message(self.to_string())
            .with_labels(
                spans.iter()
                    .zip(labels)
                    .map(|(span, label)| {
                        Label::new((src_id, span.clone()))
                            .with_color(EXPR)
                            .with_message(label)
                    })
                    .collect::<Vec<_>>()
            );

        builder.set_help(help);
        builder.finish()
    }
}

/// Picks the indefinite article for the given noun.
fn article(noun: &str) -> &'static str {
    match noun.chars().next() {
        Some('a' | 'e' | 'i' | 'o' | 'u') => "an",
        _ => "a",
    }
}

impl Display for Error {
    fn fmt(&self, f: &mut Formatter<'_>) -> fmt::Result {
        match self {
            Self::InvalidArgument { operation, operand } => {
                write!(f, "cannot {} an expression by {} {}", operation, article(operand), operand)
            },
            Self::DivideByZero => write!(f, "cannot divide by zero"),
        }
    }
}

impl StdError for Error {}
