#![doc = include_str!("../README.md")]

pub mod error;
pub mod expr;
pub mod fraction;
pub mod primitive;
pub mod term;

mod proptests;

pub use error::Error;
pub use expr::{Evaluated, Expression, Operand};
pub use fraction::Fraction;
pub use term::Term;
