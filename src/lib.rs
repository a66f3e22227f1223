//! # infixcalc
//!
//! infixcalc evaluates arithmetic expressions written in infix notation.
//! It supports signed decimal numbers, the four binary operators `+`, `-`,
//! `*` and `/`, and nested parentheses, with the usual precedence and
//! left-to-right associativity.

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
)]
#![allow(clippy::missing_errors_doc, clippy::float_cmp)]

/// Defines the operator chain that remains once parentheses are resolved.
///
/// This module declares the `BinaryOperator` enum and the `Chain` type: a
/// leading number followed by `(operator, number)` links. A chain is the
/// validated form of a parenthesis-free token sequence and is what the
/// precedence passes operate on.
pub mod ast;
/// Provides the error types for tokenizing and evaluating.
///
/// This module defines every error that can be raised while lexing or
/// evaluating an expression, with the offending character or fragment and its
/// position where one exists.
///
/// # Responsibilities
/// - Defines error enums for all failure modes (lexer, evaluator).
/// - Implements `Display` with messages suitable for end users.
/// - Supports integration with standard error handling traits.
pub mod error;
/// Ties together tokenizing and evaluation.
///
/// # Responsibilities
/// - Converts expression text into tokens.
/// - Reduces tokens to a single number, honouring parentheses and precedence.
pub mod interpreter;

pub use error::{EvalError, LexError};
pub use interpreter::{
    evaluator::core::{evaluate, reduce},
    lexer::{Token, render, tokenize},
};
