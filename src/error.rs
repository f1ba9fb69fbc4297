/// A parsing, expansion or evaluation error.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
  /// Parsing failed.
  #[error("parser error")]
  ParserError,
  /// Character which does not start any token.
  #[error("invalid token starting with {0:?}")]
  InvalidToken(char),
  /// Function-like macro argument is not unique.
  #[error("non-unique argument `{0}`")]
  NonUniqueArgument(String),
  /// Function-like macro called with wrong number of arguments.
  #[error("macro `{name}` requires {required} argument(s) but {given} were given")]
  FnMacroArgumentError {
    /// The macro name.
    name: String,
    /// The required number of arguments.
    required: usize,
    /// The given number of arguments.
    given: usize,
  },
  /// Recursive macro definition.
  #[error("recursive definition of `{0}`")]
  RecursiveDefinition(String),
  /// Variable is unknown.
  #[error("unknown variable `{0}`")]
  UnknownVariable(String),
  /// Called function is neither a macro nor known otherwise.
  #[error("unknown function `{0}`")]
  UnknownFunction(String),
  /// Macro is not defined.
  #[error("macro `{0}` not found")]
  MacroNotFound(String),
  /// Assignment operator without a wrapping equivalent.
  #[error("unsupported assignment operator `{0}`")]
  UnsupportedOperator(String),
  /// No assignment to `result` in the program.
  #[error("no assignment to `result` found")]
  MissingResult,
}

impl<I> From<nom::Err<nom::error::Error<I>>> for Error {
  fn from(_: nom::Err<nom::error::Error<I>>) -> Self {
    Self::ParserError
  }
}
