use proc_macro2::TokenStream;
use quote::{quote, TokenStreamExt};

use crate::{CodegenContext, Expr, WrappingInt};

/// A unary expression operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum UnaryOp {
  /// `+expr`
  Plus,
  /// `-expr`
  Minus,
}

impl UnaryOp {
  /// Apply the operator with wrapping arithmetic.
  pub fn apply<T: WrappingInt>(self, value: T) -> T {
    match self {
      Self::Plus => value,
      Self::Minus => value.wrapping_neg(),
    }
  }
}

/// A unary expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct UnaryExpr {
  /// Expression operator.
  pub op: UnaryOp,
  /// Expression.
  pub expr: Box<Expr>,
}

impl UnaryExpr {
  pub(crate) fn to_tokens<C: CodegenContext>(&self, cx: &C, tokens: &mut TokenStream) {
    let expr = self.expr.to_token_stream(cx);

    match self.op {
      UnaryOp::Plus => tokens.append_all(expr),
      UnaryOp::Minus => {
        let ty = cx.int_type();
        tokens.append_all(quote! { <#ty>::wrapping_neg(#expr) })
      },
    }
  }
}
