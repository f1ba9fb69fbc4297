use proc_macro2::{Ident, Span, TokenStream};
use quote::{quote, TokenStreamExt};

use crate::{CodegenContext, Expr, WrappingInt};

/// A binary expression operator.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum BinaryOp {
  /// lhs * rhs
  Mul,
  /// lhs + rhs
  Add,
  /// lhs - rhs
  Sub,
}

impl BinaryOp {
  /// Apply the operator with wrapping arithmetic.
  pub fn apply<T: WrappingInt>(self, lhs: T, rhs: T) -> T {
    match self {
      Self::Mul => lhs.wrapping_mul(rhs),
      Self::Add => lhs.wrapping_add(rhs),
      Self::Sub => lhs.wrapping_sub(rhs),
    }
  }

  pub(crate) fn wrapping_method(self) -> &'static str {
    match self {
      Self::Mul => "wrapping_mul",
      Self::Add => "wrapping_add",
      Self::Sub => "wrapping_sub",
    }
  }
}

/// A binary expression.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct BinaryExpr {
  /// Left-hand side expression.
  pub lhs: Box<Expr>,
  /// Expression operator.
  pub op: BinaryOp,
  /// Right-hand side expression.
  pub rhs: Box<Expr>,
}

impl BinaryExpr {
  pub(crate) fn to_tokens<C: CodegenContext>(&self, cx: &C, tokens: &mut TokenStream) {
    let ty = cx.int_type();
    let method = Ident::new(self.op.wrapping_method(), Span::call_site());
    let lhs = self.lhs.to_token_stream(cx);
    let rhs = self.rhs.to_token_stream(cx);

    tokens.append_all(quote! { <#ty>::#method(#lhs, #rhs) })
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn apply_wrapping() {
    assert_eq!(BinaryOp::Mul.apply(i32::MAX, 2), -2);
    assert_eq!(BinaryOp::Add.apply(i8::MAX, 1), i8::MIN);
    assert_eq!(BinaryOp::Sub.apply(0u8, 1), u8::MAX);
  }
}
