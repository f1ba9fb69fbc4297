use nom::{
  branch::alt,
  bytes::complete::{is_a, tag, tag_no_case, take_while},
  character::complete::{digit1, hex_digit1, oct_digit1},
  combinator::{all_consuming, map_opt},
  sequence::{pair, preceded},
  IResult,
};

use super::tokens::take_one;

/// An integer literal.
///
/// ```c
/// #define INT 1
/// #define INT 0x2ull
/// #define INT 017
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LitInt {
  /// The integer value.
  pub value: u64,
}

impl LitInt {
  fn parse_u64(radix: u32) -> impl Fn(&str) -> Option<u64> {
    move |digits| u64::from_str_radix(digits, radix).ok()
  }

  fn from_token(token: &str) -> Option<Self> {
    let digits = alt((
      map_opt(preceded(tag_no_case("0x"), hex_digit1), Self::parse_u64(16)),
      map_opt(preceded(tag_no_case("0b"), is_a("01")), Self::parse_u64(2)),
      map_opt(preceded(tag("0"), oct_digit1), Self::parse_u64(8)),
      map_opt(digit1, Self::parse_u64(10)),
    ));
    let suffix = take_while(|c: char| matches!(c, 'u' | 'U' | 'l' | 'L' | 'z' | 'Z'));

    let result: IResult<&str, (u64, &str)> = all_consuming(pair(digits, suffix))(token);
    result.ok().map(|(_, (value, _))| Self { value })
  }

  /// Parse an integer literal token.
  pub fn parse<'i, 't>(tokens: &'i [&'t str]) -> IResult<&'i [&'t str], Self> {
    map_opt(take_one, Self::from_token)(tokens)
  }
}

impl From<u64> for LitInt {
  fn from(value: u64) -> Self {
    Self { value }
  }
}

#[cfg(test)]
mod tests {
  use super::*;

  #[test]
  fn parse_int() {
    let (_, lit) = LitInt::parse(&["777"]).unwrap();
    assert_eq!(lit, LitInt { value: 777 });

    let (_, lit) = LitInt::parse(&["0777"]).unwrap();
    assert_eq!(lit, LitInt { value: 0o777 });

    let (_, lit) = LitInt::parse(&["0"]).unwrap();
    assert_eq!(lit, LitInt { value: 0 });

    let (_, lit) = LitInt::parse(&["0x1F"]).unwrap();
    assert_eq!(lit, LitInt { value: 31 });

    let (_, lit) = LitInt::parse(&["0b101"]).unwrap();
    assert_eq!(lit, LitInt { value: 5 });

    let (_, lit) = LitInt::parse(&["2ULL"]).unwrap();
    assert_eq!(lit, LitInt { value: 2 });
  }

  #[test]
  fn parse_int_invalid() {
    assert!(LitInt::parse(&["1.5"]).is_err());
    assert!(LitInt::parse(&["x"]).is_err());
    assert!(LitInt::parse(&["99999999999999999999999"]).is_err());
  }
}
