macro_rules! lit {
  ($value:literal) => {
    $crate::ast::Expr::Literal($crate::ast::LitInt::from($value as u64))
  };
}
pub(crate) use lit;

macro_rules! var {
  ($name:ident) => {
    $crate::ast::Expr::Variable { name: String::from(stringify!($name)) }
  };
}
pub(crate) use var;

macro_rules! call {
  ($name:ident($($arg:expr),*)) => {
    $crate::ast::Expr::Call { name: String::from(stringify!($name)), args: vec![$($arg),*] }
  };
}
pub(crate) use call;

macro_rules! mul {
  ($lhs:expr, $rhs:expr) => {
    $crate::ast::Expr::binary($lhs, $crate::ast::BinaryOp::Mul, $rhs)
  };
}
pub(crate) use mul;

macro_rules! neg {
  ($expr:expr) => {
    $crate::ast::Expr::Unary($crate::ast::UnaryExpr { op: $crate::ast::UnaryOp::Minus, expr: Box::new($expr) })
  };
}
pub(crate) use neg;
