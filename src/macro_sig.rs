use nom::combinator::all_consuming;
use nom::multi::separated_list0;
use nom::IResult;

use crate::ast::{identifier, parenthesized, token};

/// The signature of a function-like macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct MacroSig<'t> {
  pub name: &'t str,
  pub args: Vec<&'t str>,
}

impl<'t> MacroSig<'t> {
  pub fn parse<'i>(input: &'i [&'t str]) -> IResult<&'i [&'t str], Self> {
    let (input, name) = identifier(input)?;
    let (input, args) = all_consuming(parenthesized(separated_list0(token(","), identifier)))(input)?;

    Ok((input, MacroSig { name, args }))
  }
}
