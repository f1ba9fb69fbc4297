//! This module contains all types needed for parsing a macro to an abstract syntax tree.

mod tokens;
pub(crate) use tokens::*;
pub use tokens::tokenize;

mod binary_expr;
pub use binary_expr::*;

mod expr;
pub use expr::*;

mod literal;
pub use literal::*;

mod unary_expr;
pub use unary_expr::*;

#[cfg(test)]
mod test_macros;
#[cfg(test)]
pub(crate) use test_macros::*;
