use nom::combinator::all_consuming;
use proc_macro2::{Ident, Span, TokenStream};
use quote::quote;

use crate::{CodegenContext, Expr};

/// A variable-like macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct VarMacro {
  pub name: String,
  pub expr: Expr,
  pub tokens: Vec<String>,
}

impl VarMacro {
  pub fn parse(name: &str, body: &[&str]) -> Result<Self, crate::Error> {
    let (_, expr) = all_consuming(Expr::parse)(body)?;
    let tokens = body.iter().map(|&token| token.to_owned()).collect();
    Ok(Self { name: name.to_owned(), expr, tokens })
  }

  pub fn name(&self) -> &str {
    self.name.as_str()
  }

  pub fn generate<C: CodegenContext>(&self, cx: &C) -> TokenStream {
    let name = Ident::new(&self.name, Span::call_site());
    let ty = cx.int_type();
    let expr = self.expr.to_token_stream(cx);

    quote! {
      pub const #name: #ty = #expr;
    }
  }
}
