//! Evaluation of nested C multiplication macro chains.
//!
//! A chain like
//!
//! ```c
//! #define MULTIPLY(x, y) ((x) * (y))
//! #define SQUARE(x) MULTIPLY((x), (x))
//! #define CUBE(x) MULTIPLY((x), SQUARE(x))
//! ```
//!
//! can be evaluated directly with [`NestedProduct`], or parsed from source
//! with [`Program`], expanded with a [`MacroSet`] and evaluated with fixed-width
//! wrapping arithmetic. [`Program::generate`] emits equivalent Rust code.
#![warn(missing_debug_implementations)]

pub mod ast;
pub use ast::*;
mod chain;
pub use chain::*;
pub mod codegen;
pub use codegen::CodegenContext;
mod error;
pub use error::*;
mod fn_macro;
pub use fn_macro::*;
mod macro_set;
pub use macro_set::*;
mod macro_sig;
pub use macro_sig::*;
mod program;
pub use program::*;
mod var_macro;
pub use var_macro::*;
mod wrapping;
pub use wrapping::*;
