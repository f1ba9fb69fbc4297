use nom::{
  combinator::{map_opt, verify},
  error::ErrorKind,
  sequence::delimited,
  IResult, Parser,
};
use unicode_ident::{is_xid_continue, is_xid_start};

/// Multi-character punctuators, longest first.
const PUNCTUATORS: &[&str] = &[
  "<<=", ">>=", "...", "->", "++", "--", "<<", ">>", "<=", ">=", "==", "!=", "&&", "||", "*=", "/=", "%=", "+=", "-=",
  "&=", "^=", "|=", "##",
];

const SINGLE_PUNCTUATORS: &str = "()[]{},;:?.~!%^&*-+=<>|/#";

pub(crate) fn is_identifier(token: &str) -> bool {
  let mut chars = token.chars();

  match chars.next() {
    Some(c) if c == '_' || is_xid_start(c) => chars.all(is_xid_continue),
    _ => false,
  }
}

fn identifier_len(input: &str) -> usize {
  input.find(|c: char| !is_xid_continue(c)).unwrap_or(input.len())
}

fn number_len(input: &str) -> usize {
  input.find(|c: char| !(c.is_ascii_alphanumeric() || c == '.' || c == '_')).unwrap_or(input.len())
}

fn quoted_len(input: &str, quote: char) -> Option<usize> {
  let mut chars = input.char_indices().skip(1);

  while let Some((i, c)) = chars.next() {
    match c {
      '\\' => {
        chars.next();
      },
      '\n' => return None,
      c if c == quote => return Some(i + 1),
      _ => (),
    }
  }

  None
}

/// Split C source text into preprocessing tokens.
///
/// Whitespace, escaped newlines and comments are dropped.
pub fn tokenize(input: &str) -> Result<Vec<&str>, crate::Error> {
  let mut tokens = vec![];
  let mut rest = input;

  while let Some(c) = rest.chars().next() {
    if c.is_whitespace() {
      rest = &rest[c.len_utf8()..];
      continue
    }

    if rest.starts_with("\\\n") {
      rest = &rest[2..];
      continue
    }

    if rest.starts_with("//") {
      rest = &rest[rest.find('\n').unwrap_or(rest.len())..];
      continue
    }

    if let Some(comment) = rest.strip_prefix("/*") {
      let end = comment.find("*/").ok_or(crate::Error::InvalidToken('/'))?;
      rest = &comment[(end + 2)..];
      continue
    }

    let len = match c {
      '_' => identifier_len(rest),
      c if is_xid_start(c) => identifier_len(rest),
      '0'..='9' => number_len(rest),
      '.' if rest[1..].starts_with(|c: char| c.is_ascii_digit()) => number_len(rest),
      '"' | '\'' => quoted_len(rest, c).ok_or(crate::Error::InvalidToken(c))?,
      c => match PUNCTUATORS.iter().find(|p| rest.starts_with(**p)) {
        Some(punct) => punct.len(),
        None if SINGLE_PUNCTUATORS.contains(c) => 1,
        None => return Err(crate::Error::InvalidToken(c)),
      },
    };

    let (token, remaining) = rest.split_at(len);
    tokens.push(token);
    rest = remaining;
  }

  Ok(tokens)
}

pub(crate) fn take_one<'i, 't>(tokens: &'i [&'t str]) -> IResult<&'i [&'t str], &'t str> {
  if let Some((first, tokens)) = tokens.split_first() {
    return Ok((tokens, *first))
  }

  Err(nom::Err::Error(nom::error::Error::new(tokens, ErrorKind::Eof)))
}

pub(crate) fn token<'i, 't>(token: &'static str) -> impl Fn(&'i [&'t str]) -> IResult<&'i [&'t str], &'static str>
where
  't: 'i,
{
  move |tokens| map_opt(take_one, |t| (t == token).then_some(token))(tokens)
}

pub(crate) fn identifier<'i, 't>(tokens: &'i [&'t str]) -> IResult<&'i [&'t str], &'t str> {
  verify(take_one, |t: &str| is_identifier(t))(tokens)
}

pub(crate) fn parenthesized<'i, 't, O, F>(
  f: F,
) -> impl FnMut(&'i [&'t str]) -> IResult<&'i [&'t str], O, nom::error::Error<&'i [&'t str]>>
where
  't: 'i,
  F: Parser<&'i [&'t str], O, nom::error::Error<&'i [&'t str]>>,
{
  delimited(token("("), f, token(")"))
}
