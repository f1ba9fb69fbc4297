use std::{collections::HashMap, mem};

use nom::combinator::all_consuming;

use crate::{Expr, FnMacro, VarMacro};

/// A defined macro.
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum Macro {
  Var(VarMacro),
  Fn(FnMacro),
}

impl Macro {
  pub fn name(&self) -> &str {
    match self {
      Self::Var(var_macro) => var_macro.name(),
      Self::Fn(fn_macro) => fn_macro.name(),
    }
  }
}

/// A set of macros.
///
/// Macros can only be fully expanded once all macros are defined, since a
/// macro body may refer to macros defined after it. Definitions keep the
/// order in which they were first defined.
///
/// # Example
///
/// ```
/// # fn main() -> Result<(), Box<dyn std::error::Error>> {
/// use macrochain::{tokenize, FnMacro, MacroSet};
///
/// let mut macro_set = MacroSet::new();
/// macro_set.define_fn_macro(FnMacro::parse(&tokenize("SQUARE(x)")?, &tokenize("((x) * (x))")?)?);
///
/// assert_eq!(macro_set.expand(&tokenize("SQUARE(7)")?)?.evaluate::<i32>()?, 49);
/// # Ok(())
/// # }
/// ```
#[derive(Debug, Clone, Default)]
pub struct MacroSet {
  macros: Vec<Macro>,
  index: HashMap<String, usize>,
}

impl MacroSet {
  pub fn new() -> Self {
    Self::default()
  }

  /// Define a macro, returning the definition it replaces.
  pub fn define(&mut self, m: Macro) -> Option<Macro> {
    match self.index.get(m.name()) {
      Some(&i) => Some(mem::replace(&mut self.macros[i], m)),
      None => {
        self.index.insert(m.name().to_owned(), self.macros.len());
        self.macros.push(m);
        None
      },
    }
  }

  pub fn define_var_macro(&mut self, var_macro: VarMacro) -> Option<Macro> {
    self.define(Macro::Var(var_macro))
  }

  pub fn define_fn_macro(&mut self, fn_macro: FnMacro) -> Option<Macro> {
    self.define(Macro::Fn(fn_macro))
  }

  pub fn get(&self, name: &str) -> Option<&Macro> {
    self.index.get(name).map(|&i| &self.macros[i])
  }

  /// Iterate over all macros in definition order.
  pub fn iter(&self) -> impl Iterator<Item = &Macro> {
    self.macros.iter()
  }

  pub fn len(&self) -> usize {
    self.macros.len()
  }

  pub fn is_empty(&self) -> bool {
    self.macros.is_empty()
  }

  /// Fully expand all macros in `tokens` and parse the result.
  pub fn expand(&self, tokens: &[&str]) -> Result<Expr, crate::Error> {
    parse_expanded(&self.expand_tokens(tokens)?)
  }

  /// Fully expand all macros in `tokens`.
  ///
  /// A function-like macro is only called if its name is followed by `(`.
  /// Arguments are expanded before their tokens replace the parameters, then
  /// the replaced body is expanded again. Names which are not macros are kept.
  pub fn expand_tokens(&self, tokens: &[&str]) -> Result<Vec<String>, crate::Error> {
    let tokens = tokens.iter().map(|&token| token.to_owned()).collect::<Vec<_>>();
    self.expand_inner(&tokens, &mut Vec::new(), false)
  }

  /// Expand as if every macro were a function, i.e. with every argument and
  /// every body in parentheses.
  pub(crate) fn expand_grouped(&self, tokens: &[&str]) -> Result<Expr, crate::Error> {
    let tokens = tokens.iter().map(|&token| token.to_owned()).collect::<Vec<_>>();
    parse_expanded(&self.expand_inner(&tokens, &mut Vec::new(), true)?)
  }

  fn expand_inner<'s>(
    &'s self,
    tokens: &[String],
    active: &mut Vec<&'s str>,
    grouped: bool,
  ) -> Result<Vec<String>, crate::Error> {
    let mut expanded = Vec::with_capacity(tokens.len());
    let mut it = tokens.iter().peekable();

    while let Some(token) = it.next() {
      let body = match self.get(token) {
        // Treat as function-like macro call if immediately followed by `(`.
        Some(Macro::Fn(fn_macro)) if it.peek().map(|t| t.as_str()) == Some("(") => {
          it.next();
          let args = collect_args(&mut it)?;
          let body = self.replace_params(fn_macro, &args, active, grouped)?;
          self.expand_body(&fn_macro.name, &body, active, grouped)?
        },
        Some(Macro::Var(var_macro)) => self.expand_body(&var_macro.name, &var_macro.tokens, active, grouped)?,
        _ => {
          expanded.push(token.clone());
          continue
        },
      };

      if grouped {
        expanded.push("(".to_owned());
        expanded.extend(body);
        expanded.push(")".to_owned());
      } else {
        expanded.extend(body);
      }
    }

    Ok(expanded)
  }

  fn replace_params<'s>(
    &'s self,
    fn_macro: &FnMacro,
    args: &[Vec<String>],
    active: &mut Vec<&'s str>,
    grouped: bool,
  ) -> Result<Vec<String>, crate::Error> {
    // Allow passing an empty argument for arity 0.
    let args: &[Vec<String>] =
      if fn_macro.params.is_empty() && matches!(args, [arg] if arg.is_empty()) { &[] } else { args };

    if fn_macro.params.len() != args.len() {
      return Err(crate::Error::FnMacroArgumentError {
        name: fn_macro.name.clone(),
        required: fn_macro.params.len(),
        given: args.len(),
      })
    }

    let args = args.iter().map(|arg| self.expand_inner(arg, active, grouped)).collect::<Result<Vec<_>, _>>()?;

    let mut body = Vec::with_capacity(fn_macro.tokens.len());
    for token in &fn_macro.tokens {
      match fn_macro.params.iter().position(|param| param == token) {
        Some(i) if grouped => {
          body.push("(".to_owned());
          body.extend(args[i].iter().cloned());
          body.push(")".to_owned());
        },
        Some(i) => body.extend(args[i].iter().cloned()),
        None => body.push(token.clone()),
      }
    }

    Ok(body)
  }

  fn expand_body<'s>(
    &'s self,
    name: &'s str,
    body: &[String],
    active: &mut Vec<&'s str>,
    grouped: bool,
  ) -> Result<Vec<String>, crate::Error> {
    if active.contains(&name) {
      return Err(crate::Error::RecursiveDefinition(name.to_owned()))
    }

    active.push(name);
    let expanded = self.expand_inner(body, active, grouped);
    active.pop();

    expanded
  }

  /// The power of the parameter of the unary macro `name` after expansion.
  ///
  /// Returns `None` if the macro does not take exactly one parameter or its
  /// expansion is not a plain product of the parameter.
  pub fn power_of(&self, name: &str) -> Result<Option<u32>, crate::Error> {
    let fn_macro = match self.get(name) {
      Some(Macro::Fn(fn_macro)) => fn_macro,
      _ => return Err(crate::Error::MacroNotFound(name.to_owned())),
    };

    let param = match fn_macro.params.as_slice() {
      [param] => param,
      _ => return Ok(None),
    };

    Ok(self.expand(&[name, "(", param.as_str(), ")"])?.degree(param))
  }
}

fn parse_expanded(tokens: &[String]) -> Result<Expr, crate::Error> {
  let tokens = tokens.iter().map(String::as_str).collect::<Vec<_>>();
  let (_, expr) = all_consuming(Expr::parse)(&tokens)?;
  Ok(expr)
}

/// Collect the arguments of a call whose `(` was already consumed, up to the matching `)`.
fn collect_args<'t, I>(it: &mut I) -> Result<Vec<Vec<String>>, crate::Error>
where
  I: Iterator<Item = &'t String>,
{
  let mut depth = 0usize;
  let mut args = vec![];
  let mut current_arg = vec![];

  for token in it {
    match token.as_str() {
      ")" if depth == 0 => {
        args.push(mem::take(&mut current_arg));
        return Ok(args)
      },
      "," if depth == 0 => {
        args.push(mem::take(&mut current_arg));
        continue
      },
      "(" => depth += 1,
      ")" => depth -= 1,
      _ => (),
    }

    current_arg.push(token.clone());
  }

  Err(crate::Error::ParserError)
}
