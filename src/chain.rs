use crate::{BinaryOp, Expr, LitInt, WrappingInt};

/// A literal multiplied by itself through nested macro layers.
///
/// Layer 1 is `x * x`, and every further layer multiplies `x` by the
/// previous layer, i.e. `MULTIPLY((x), PREVIOUS(x))`. Each layer therefore
/// adds one to the exponent, so `depth` layers compute `x^(depth + 1)`,
/// regardless of what the layers are named.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct NestedProduct {
  base: u64,
  depth: u32,
}

impl NestedProduct {
  /// `THREE_HUNDRED_TWENTY_SEVENTH(2)`: 16 layers from `SQUARE` upwards.
  pub const FIXTURE: Self = Self::new(2, 16);

  pub const fn new(base: u64, depth: u32) -> Self {
    Self { base, depth }
  }

  pub const fn base(&self) -> u64 {
    self.base
  }

  pub const fn depth(&self) -> u32 {
    self.depth
  }

  /// The power of `base` computed by the chain.
  ///
  /// Widened to `u64`, since `u32::MAX` layers compute `x^(u32::MAX + 1)`.
  pub const fn exponent(&self) -> u64 {
    self.depth as u64 + 1
  }

  /// Multiply layer by layer, wrapping at the width of `T`.
  pub fn evaluate<T: WrappingInt>(&self) -> T {
    let x = T::from_literal(self.base);
    (0..self.depth).fold(x, |acc, _| x.wrapping_mul(acc))
  }

  /// Same as [`evaluate`](Self::evaluate), computed by exponentiation by squaring.
  pub fn evaluate_pow<T: WrappingInt>(&self) -> T {
    let x = T::from_literal(self.base);
    x.wrapping_pow(self.depth).wrapping_mul(x)
  }

  /// The fully expanded expression of the chain.
  pub fn to_expr(&self) -> Expr {
    let x = Expr::Literal(LitInt::from(self.base));
    (0..self.depth).fold(x.clone(), |acc, _| Expr::binary(x.clone(), BinaryOp::Mul, acc))
  }
}

impl Default for NestedProduct {
  fn default() -> Self {
    Self::FIXTURE
  }
}
