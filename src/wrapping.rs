use std::fmt::{Debug, Display};

/// A fixed-width integer with two's complement wrapping arithmetic.
///
/// Results are reduced modulo `2^BITS`.
pub trait WrappingInt: Copy + Debug + Display + PartialEq {
  /// Width of the type in bits.
  const BITS: u32;

  /// Convert a literal value, truncating to the width of `Self`.
  fn from_literal(value: u64) -> Self;

  fn wrapping_add(self, rhs: Self) -> Self;

  fn wrapping_sub(self, rhs: Self) -> Self;

  fn wrapping_mul(self, rhs: Self) -> Self;

  fn wrapping_neg(self) -> Self;

  fn wrapping_pow(self, exp: u32) -> Self;
}

macro_rules! impl_wrapping_int {
  ($($ty:ty),*) => {
    $(
      impl WrappingInt for $ty {
        const BITS: u32 = <$ty>::BITS;

        #[inline]
        fn from_literal(value: u64) -> Self {
          value as $ty
        }

        #[inline]
        fn wrapping_add(self, rhs: Self) -> Self {
          <$ty>::wrapping_add(self, rhs)
        }

        #[inline]
        fn wrapping_sub(self, rhs: Self) -> Self {
          <$ty>::wrapping_sub(self, rhs)
        }

        #[inline]
        fn wrapping_mul(self, rhs: Self) -> Self {
          <$ty>::wrapping_mul(self, rhs)
        }

        #[inline]
        fn wrapping_neg(self) -> Self {
          <$ty>::wrapping_neg(self)
        }

        #[inline]
        fn wrapping_pow(self, exp: u32) -> Self {
          <$ty>::wrapping_pow(self, exp)
        }
      }
    )*
  };
}

impl_wrapping_int!(i8, i16, i32, i64, i128, u8, u16, u32, u64, u128);
