use nom::combinator::all_consuming;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::{CodegenContext, Expr, MacroSig};

/// A function-like macro.
///
/// ```c
/// #define CUBE(x) MULTIPLY((x), SQUARE(x))
/// ```
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FnMacro {
  pub name: String,
  pub params: Vec<String>,
  pub body: Expr,
  /// Body tokens which parameters are replaced in during expansion.
  pub tokens: Vec<String>,
}

impl FnMacro {
  /// Parse a function-like macro from its signature and body tokens.
  pub fn parse(sig: &[&str], body: &[&str]) -> Result<Self, crate::Error> {
    let (_, sig) = MacroSig::parse(sig)?;
    let tokens = body.iter().map(|&token| token.to_owned()).collect();
    let (_, body) = all_consuming(Expr::parse)(body)?;

    let mut params: Vec<String> = Vec::with_capacity(sig.args.len());
    for arg in sig.args {
      if params.iter().any(|param| param == arg) {
        return Err(crate::Error::NonUniqueArgument(arg.to_owned()))
      }

      params.push(arg.to_owned());
    }

    Ok(Self { name: sig.name.to_owned(), params, body, tokens })
  }

  pub fn name(&self) -> &str {
    &self.name
  }

  /// Generate a `const fn` computing the macro with wrapping arithmetic.
  pub fn generate<C: CodegenContext>(&self, cx: &C) -> TokenStream {
    let name = Ident::new(&self.name, Span::call_site());
    let ty = cx.int_type();

    let func_args = self
      .params
      .iter()
      .map(|param| {
        let id = Ident::new(param, Span::call_site());
        quote! { #id: #ty }
      })
      .collect::<Vec<_>>();

    let body = self.body.to_token_stream(cx);

    quote! {
      #[allow(non_snake_case)]
      #[inline(always)]
      pub const fn #name(#(#func_args),*) -> #ty {
        #body
      }
    }
  }
}

#[cfg(test)]
mod tests {
  use super::*;
  use crate::ast::{call, var};

  #[test]
  fn parse() {
    let body = ["MULTIPLY", "(", "(", "x", ")", ",", "(", "x", ")", ")"];
    let fn_macro = FnMacro::parse(&["SQUARE", "(", "x", ")"], &body);
    assert_eq!(
      fn_macro,
      Ok(FnMacro {
        name: "SQUARE".into(),
        params: vec!["x".into()],
        body: call!(MULTIPLY(var!(x), var!(x))),
        tokens: body.map(String::from).to_vec(),
      })
    );
  }

  #[test]
  fn non_unique_arg_name() {
    let fn_macro = FnMacro::parse(&["X", "(", "x", ",", "x", ")"], &["x", "*", "x"]);
    assert_eq!(fn_macro, Err(crate::Error::NonUniqueArgument("x".into())));
  }

  #[test]
  fn invalid_body() {
    let fn_macro = FnMacro::parse(&["X", "(", "x", ")"], &["x", "*"]);
    assert_eq!(fn_macro, Err(crate::Error::ParserError));
  }

  #[test]
  fn generate() {
    let fn_macro = FnMacro::parse(&["MULTIPLY", "(", "x", ",", "y", ")"], &["x", "*", "y"]).unwrap();

    assert_eq!(
      fn_macro.generate(&()).to_string(),
      quote! {
        #[allow(non_snake_case)]
        #[inline(always)]
        pub const fn MULTIPLY(x: i32, y: i32) -> i32 {
          <i32>::wrapping_mul(x, y)
        }
      }
      .to_string()
    );
  }
}
