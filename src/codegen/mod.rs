//! Generation of Rust code equivalent to parsed macros.

use nom::combinator::all_consuming;
use proc_macro2::TokenStream;
use quote::{quote, TokenStreamExt};

use crate::{Expr, Macro, Program};

/// Context for code generation.
pub trait CodegenContext {
  /// The integer type used for macro arguments and results.
  ///
  /// Defaults to `i32`, the type of an unsuffixed C integer literal.
  fn int_type(&self) -> syn::Type {
    syn::parse_quote! { i32 }
  }
}

impl CodegenContext for () {}

/// The expression to generate for `RESULT`.
///
/// Macro calls are kept if calling the generated functions computes the same
/// as expanding the macros. Otherwise, e.g. for `#define SQ(x) x * x`, the
/// expanded expression is used.
fn result_expr(program: &Program) -> Result<Expr, crate::Error> {
  let expanded = program.result_expr()?;

  let grouped = program.result_expr_with(|tokens| program.macro_set.expand_grouped(tokens));
  if grouped.as_ref() != Ok(&expanded) {
    return Ok(expanded)
  }

  let calls = program.result_expr_with(|tokens| {
    let (_, expr) = all_consuming(Expr::parse)(tokens)?;
    Ok(expr)
  });
  Ok(calls.unwrap_or(expanded))
}

/// Generate Rust items for all macros of a program and its `result` assignment.
pub fn generate<C: CodegenContext>(program: &Program, cx: &C) -> TokenStream {
  let mut tokens = TokenStream::new();

  for m in program.macro_set.iter() {
    tokens.append_all(match m {
      Macro::Fn(fn_macro) => fn_macro.generate(cx),
      Macro::Var(var_macro) => var_macro.generate(cx),
    });
  }

  if let Ok(expr) = result_expr(program) {
    let ty = cx.int_type();
    let expr = expr.to_token_stream(cx);

    tokens.append_all(quote! {
      pub const RESULT: #ty = #expr;
    });
  }

  tokens
}

#[cfg(test)]
mod tests {
  use super::*;

  struct Wide;

  impl CodegenContext for Wide {
    fn int_type(&self) -> syn::Type {
      syn::parse_quote! { i64 }
    }
  }

  #[test]
  fn generate_program() {
    let program = Program::parse("#define TWICE(x) ((x) + (x))\nint main() { result = TWICE(21); }").unwrap();

    assert_eq!(
      generate(&program, &Wide).to_string(),
      quote! {
        #[allow(non_snake_case)]
        #[inline(always)]
        pub const fn TWICE(x: i64) -> i64 {
          <i64>::wrapping_add(x, x)
        }
        pub const RESULT: i64 = TWICE(21);
      }
      .to_string()
    );
  }

  #[test]
  fn generate_expanded_result() {
    let program = Program::parse("#define SQ(x) x * x\nint main() { int result = SQ(1 + 2); }").unwrap();

    assert_eq!(
      generate(&program, &()).to_string(),
      quote! {
        #[allow(non_snake_case)]
        #[inline(always)]
        pub const fn SQ(x: i32) -> i32 {
          <i32>::wrapping_mul(x, x)
        }
        pub const RESULT: i32 = <i32>::wrapping_add(<i32>::wrapping_add(1, <i32>::wrapping_mul(2, 1)), 2);
      }
      .to_string()
    );
  }

  #[test]
  fn generate_compound_result() {
    let program = Program::parse("#define N 3\nint result = N; result *= -N;").unwrap();

    assert_eq!(
      generate(&program, &()).to_string(),
      quote! {
        pub const N: i32 = 3;
        pub const RESULT: i32 = <i32>::wrapping_mul(N, <i32>::wrapping_neg(N));
      }
      .to_string()
    );
  }

  #[test]
  fn generate_without_result() {
    let program = Program::parse("#define N 3").unwrap();
    assert_eq!(generate(&program, &()).to_string(), quote! { pub const N: i32 = 3; }.to_string());
  }
}
