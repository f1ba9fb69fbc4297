use nom::{
  branch::alt,
  combinator::{map, value},
  multi::{fold_many0, separated_list0},
  sequence::pair,
  IResult,
};
use proc_macro2::{Ident, Literal, Span, TokenStream};
use quote::{quote, TokenStreamExt};

use super::{
  tokens::{identifier, parenthesized, token},
  BinaryExpr, BinaryOp, LitInt, UnaryExpr, UnaryOp,
};
use crate::{CodegenContext, WrappingInt};

/// An integer expression.
///
/// Parentheses only group during parsing and are not part of the tree.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Expr {
  Literal(LitInt),
  Variable { name: String },
  Call { name: String, args: Vec<Expr> },
  Unary(UnaryExpr),
  Binary(BinaryExpr),
}

impl Expr {
  pub fn binary(lhs: Expr, op: BinaryOp, rhs: Expr) -> Self {
    Self::Binary(BinaryExpr { lhs: Box::new(lhs), op, rhs: Box::new(rhs) })
  }

  pub fn unary(op: UnaryOp, expr: Expr) -> Self {
    Self::Unary(UnaryExpr { op, expr: Box::new(expr) })
  }

  fn parse_factor<'i, 't>(tokens: &'i [&'t str]) -> IResult<&'i [&'t str], Self> {
    alt((
      map(
        pair(alt((value(UnaryOp::Minus, token("-")), value(UnaryOp::Plus, token("+")))), Self::parse_factor),
        |(op, expr)| Self::unary(op, expr),
      ),
      parenthesized(Self::parse),
      map(pair(identifier, parenthesized(separated_list0(token(","), Self::parse))), |(name, args)| Self::Call {
        name: name.to_owned(),
        args,
      }),
      map(identifier, |name| Self::Variable { name: name.to_owned() }),
      map(LitInt::parse, Self::Literal),
    ))(tokens)
  }

  fn parse_term<'i, 't>(tokens: &'i [&'t str]) -> IResult<&'i [&'t str], Self> {
    let (tokens, factor) = Self::parse_factor(tokens)?;

    fold_many0(
      pair(value(BinaryOp::Mul, token("*")), Self::parse_factor),
      move || factor.clone(),
      |lhs, (op, rhs)| Self::binary(lhs, op, rhs),
    )(tokens)
  }

  /// Parse an expression from a list of tokens.
  pub fn parse<'i, 't>(tokens: &'i [&'t str]) -> IResult<&'i [&'t str], Self> {
    let (tokens, term) = Self::parse_term(tokens)?;

    fold_many0(
      pair(alt((value(BinaryOp::Add, token("+")), value(BinaryOp::Sub, token("-")))), Self::parse_term),
      move || term.clone(),
      |lhs, (op, rhs)| Self::binary(lhs, op, rhs),
    )(tokens)
  }

  /// Evaluate a fully expanded expression.
  pub fn evaluate<T: WrappingInt>(&self) -> Result<T, crate::Error> {
    Ok(match self {
      Self::Literal(lit) => T::from_literal(lit.value),
      Self::Variable { name } => return Err(crate::Error::UnknownVariable(name.clone())),
      Self::Call { name, .. } => return Err(crate::Error::UnknownFunction(name.clone())),
      Self::Unary(UnaryExpr { op, expr }) => op.apply(expr.evaluate()?),
      Self::Binary(BinaryExpr { lhs, op, rhs }) => op.apply(lhs.evaluate()?, rhs.evaluate()?),
    })
  }

  /// The power of `var` if this expression is a product of `var` and literals.
  pub fn degree(&self, var: &str) -> Option<u32> {
    match self {
      Self::Literal(_) => Some(0),
      Self::Variable { name } if name == var => Some(1),
      Self::Unary(UnaryExpr { expr, .. }) => expr.degree(var),
      Self::Binary(BinaryExpr { lhs, op: BinaryOp::Mul, rhs }) => lhs.degree(var)?.checked_add(rhs.degree(var)?),
      _ => None,
    }
  }

  pub(crate) fn to_tokens<C: CodegenContext>(&self, cx: &C, tokens: &mut TokenStream) {
    match self {
      Self::Literal(lit) => tokens.append(Literal::u64_unsuffixed(lit.value)),
      Self::Variable { name } => tokens.append(Ident::new(name, Span::call_site())),
      Self::Call { name, args } => {
        let name = Ident::new(name, Span::call_site());
        let args = args.iter().map(|arg| arg.to_token_stream(cx));
        tokens.append_all(quote! { #name(#(#args),*) })
      },
      Self::Unary(expr) => expr.to_tokens(cx, tokens),
      Self::Binary(expr) => expr.to_tokens(cx, tokens),
    }
  }

  pub fn to_token_stream<C: CodegenContext>(&self, cx: &C) -> TokenStream {
    let mut tokens = TokenStream::new();
    self.to_tokens(cx, &mut tokens);
    tokens
  }
}
