/// Lexical errors.
///
/// Defines the errors that can occur while turning an expression string into
/// tokens: characters outside the calculator's alphabet and numeric literals
/// that cannot be read as a decimal number.
pub mod lex_error;
/// Evaluation errors.
///
/// Contains the errors raised while reducing a token sequence to a value,
/// such as unbalanced parentheses, misplaced operators, or division by zero.
/// Lexical failures surfaced through `evaluate` are wrapped here as well.
pub mod eval_error;

pub use eval_error::EvalError;
pub use lex_error::LexError;
