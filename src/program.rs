use std::mem;

use nom::{combinator::map_opt, sequence::pair, IResult};
use proc_macro2::TokenStream;
use tracing::{debug, warn};

use crate::{
  ast::{identifier, is_identifier, take_one},
  codegen, tokenize, BinaryOp, CodegenContext, Expr, FnMacro, Macro, MacroSet, VarMacro, WrappingInt,
};

/// The benchmark program: a chain of nested multiplication macros applied to `2`.
pub const MACROS_C: &str = include_str!("../tests/fixtures/macros.c");

/// The variable whose final value a program prints.
const RESULT_VAR: &str = "result";

/// An assignment operator.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum AssignOp {
  /// `=`
  Assign,
  /// `*=`, `+=` and `-=`
  Compound(BinaryOp),
  /// Any other compound assignment, e.g. `<<=`.
  Unsupported(String),
}

impl AssignOp {
  fn from_token(token: &str) -> Option<Self> {
    Some(match token {
      "=" => Self::Assign,
      "*=" => Self::Compound(BinaryOp::Mul),
      "+=" => Self::Compound(BinaryOp::Add),
      "-=" => Self::Compound(BinaryOp::Sub),
      "/=" | "%=" | "<<=" | ">>=" | "&=" | "^=" | "|=" => Self::Unsupported(token.to_owned()),
      _ => return None,
    })
  }

  pub(crate) fn parse<'i, 't>(tokens: &'i [&'t str]) -> IResult<&'i [&'t str], Self> {
    map_opt(take_one, Self::from_token)(tokens)
  }
}

/// An assignment `name op value`.
///
/// The value is kept as tokens, since it can only be parsed once macros are expanded.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Assignment {
  pub name: String,
  pub op: AssignOp,
  pub value: Vec<String>,
}

/// A C translation unit reduced to what is needed to evaluate its result.
#[derive(Debug, Clone, Default)]
pub struct Program {
  pub macro_set: MacroSet,
  /// Paths given to `#include`, which are not resolved.
  pub includes: Vec<String>,
  /// Assignments in source order.
  pub assignments: Vec<Assignment>,
}

/// Join lines ending in a backslash with the following line.
fn logical_lines(source: &str) -> Vec<String> {
  let mut lines = vec![];
  let mut current = String::new();

  for line in source.lines() {
    if let Some(continued) = line.strip_suffix('\\') {
      current.push_str(continued);
      current.push(' ');
      continue
    }

    current.push_str(line);
    lines.push(mem::take(&mut current));
  }

  if !current.is_empty() {
    lines.push(current);
  }

  lines
}

fn parse_define(definition: &str) -> Result<Macro, crate::Error> {
  let name_len = definition.find(|c: char| c.is_whitespace() || c == '(').unwrap_or(definition.len());
  let (name, rest) = definition.split_at(name_len);

  if !is_identifier(name) {
    return Err(crate::Error::ParserError)
  }

  // Only a parenthesis directly after the name starts a parameter list.
  if rest.starts_with('(') {
    let close = rest.find(')').ok_or(crate::Error::ParserError)?;
    let sig = tokenize(&definition[..(name_len + close + 1)])?;
    let body = tokenize(&rest[(close + 1)..])?;
    Ok(Macro::Fn(FnMacro::parse(&sig, &body)?))
  } else {
    let body = tokenize(rest)?;
    Ok(Macro::Var(VarMacro::parse(name, &body)?))
  }
}

/// Length of an assigned value, which ends at `;`, `,` or an unmatched closing bracket.
fn value_len(tokens: &[&str]) -> usize {
  let mut depth = 0usize;

  for (i, &token) in tokens.iter().enumerate() {
    match token {
      "(" | "[" | "{" => depth += 1,
      ")" | "]" | "}" | ";" | "," if depth == 0 => return i,
      ")" | "]" | "}" => depth -= 1,
      _ => (),
    }
  }

  tokens.len()
}

fn parse_assignments(tokens: &[&str]) -> Vec<Assignment> {
  (0..tokens.len())
    .filter(|&i| i == 0 || !matches!(tokens[i - 1], "." | "->"))
    .filter_map(|i| pair(identifier, AssignOp::parse)(&tokens[i..]).ok())
    .map(|(rest, (name, op))| Assignment {
      name: name.to_owned(),
      op,
      value: rest[..value_len(rest)].iter().map(|&token| token.to_owned()).collect(),
    })
    .collect()
}

impl Program {
  /// Parse C source.
  ///
  /// `#define` and `#include` are recorded, other directives are skipped.
  /// Definitions whose body is not an integer expression are skipped as well.
  pub fn parse(source: &str) -> Result<Self, crate::Error> {
    let mut program = Self::default();
    let mut code = String::new();

    for line in logical_lines(source) {
      match line.trim_start().strip_prefix('#') {
        Some(directive) => program.directive(directive.trim_start()),
        None => {
          code.push_str(&line);
          code.push('\n');
        },
      }
    }

    program.assignments = parse_assignments(&tokenize(&code)?);

    debug!(
      macros = program.macro_set.len(),
      assignments = program.assignments.len(),
      "parsed program"
    );

    Ok(program)
  }

  /// The benchmark program embedded in this crate.
  pub fn embedded() -> Result<Self, crate::Error> {
    Self::parse(MACROS_C)
  }

  fn directive(&mut self, directive: &str) {
    let keyword_len = directive.find(|c: char| !c.is_ascii_alphabetic()).unwrap_or(directive.len());
    let (keyword, rest) = directive.split_at(keyword_len);

    match keyword {
      "define" => match parse_define(rest.trim()) {
        Ok(m) => {
          if let Some(previous) = self.macro_set.define(m) {
            debug!(name = previous.name(), "macro redefined");
          }
        },
        Err(err) => warn!(definition = rest.trim(), %err, "skipping macro definition"),
      },
      "include" => {
        let path = rest.trim().trim_start_matches(&['<', '"'][..]).trim_end_matches(&['>', '"'][..]);
        self.includes.push(path.to_owned());
      },
      _ => debug!(directive, "skipping unsupported directive"),
    }
  }

  /// The fully expanded expression finally assigned to `result`.
  ///
  /// Compound assignments combine with the previous value. A value which
  /// cannot be expanded or parsed is an error unless a later `=` replaces it.
  pub fn result_expr(&self) -> Result<Expr, crate::Error> {
    self.result_expr_with(|tokens| self.macro_set.expand(tokens))
  }

  pub(crate) fn result_expr_with<F>(&self, mut parse_value: F) -> Result<Expr, crate::Error>
  where
    F: FnMut(&[&str]) -> Result<Expr, crate::Error>,
  {
    let mut current: Option<Result<Expr, crate::Error>> = None;

    for assignment in self.assignments.iter().filter(|assignment| assignment.name == RESULT_VAR) {
      let tokens = assignment.value.iter().map(String::as_str).collect::<Vec<_>>();
      let value = parse_value(&tokens);

      current = Some(match &assignment.op {
        AssignOp::Assign => value,
        AssignOp::Compound(op) => match current.take() {
          Some(lhs) => lhs.and_then(|lhs| Ok(Expr::binary(lhs, *op, value?))),
          None => Err(crate::Error::UnknownVariable(RESULT_VAR.to_owned())),
        },
        AssignOp::Unsupported(op) => Err(crate::Error::UnsupportedOperator(op.clone())),
      });
    }

    current.unwrap_or(Err(crate::Error::MissingResult))
  }

  /// Expand and evaluate the value assigned to `result`.
  pub fn evaluate<T: WrappingInt>(&self) -> Result<T, crate::Error> {
    let expr = self.result_expr()?;
    debug!(bits = T::BITS, "evaluating result");
    expr.evaluate()
  }

  /// The real power of every unary function-like macro, in definition order.
  pub fn layer_powers(&self) -> Vec<(&str, Option<u32>)> {
    self
      .macro_set
      .iter()
      .filter_map(|m| match m {
        Macro::Fn(fn_macro) if fn_macro.params.len() == 1 => {
          Some((fn_macro.name(), self.macro_set.power_of(fn_macro.name()).ok().flatten()))
        },
        _ => None,
      })
      .collect()
  }

  /// Generate equivalent Rust source.
  pub fn generate<C: CodegenContext>(&self, cx: &C) -> TokenStream {
    codegen::generate(self, cx)
  }
}
