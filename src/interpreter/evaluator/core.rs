use log::debug;

use crate::{
    ast::Chain,
    error::EvalError,
    interpreter::{
        evaluator::{
            binary::{reduce_additive, reduce_multiplicative},
            group::resolve_groups,
        },
        lexer::{Token, tokenize},
    },
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or an
/// `EvalError` describing the failure.
pub type EvalResult<T> = Result<T, EvalError>;

/// Evaluates an arithmetic expression string.
///
/// The expression is tokenized and then reduced with [`reduce`].
///
/// # Errors
/// - `EvalError::Lex` if the expression cannot be tokenized.
/// - Any error returned by [`reduce`].
///
/// # Example
/// ```
/// use infixcalc::{error::EvalError, interpreter::evaluator::core::evaluate};
///
/// assert_eq!(evaluate("5*3+12/4-1").unwrap(), 17.0);
/// assert_eq!(evaluate("((1+1)+1)*2").unwrap(), 6.0);
/// assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
/// ```
pub fn evaluate(source: &str) -> EvalResult<f64> {
    let tokens = tokenize(source)?;
    let value = reduce(tokens)?;
    debug!("{source:?} = {value}");
    Ok(value)
}

/// Reduces a token sequence to a single number.
///
/// Runs three passes in order:
/// 1. Parentheses are collapsed, innermost first.
/// 2. `*` and `/` are applied left to right.
/// 3. `+` and `-` are applied left to right.
///
/// Between the first and second pass the remaining tokens must form a
/// [`Chain`]: a number, then any number of operator and number pairs.
///
/// # Errors
/// - `EvalError::UnmatchedParen` for a `(` with no `)` after it, or a stray
///   `)`.
/// - `EvalError::MalformedExpression` for empty input or misplaced operators.
/// - `EvalError::DivisionByZero` if a divisor is zero.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::core::reduce, lexer::Token};
///
/// let tokens = vec![Token::Number(2.0), Token::Plus, Token::Number(3.0), Token::Multiply, Token::Number(4.0)];
/// assert_eq!(reduce(tokens).unwrap(), 14.0);
/// ```
pub fn reduce(tokens: Vec<Token>) -> EvalResult<f64> {
    let tokens = resolve_groups(tokens)?;
    reduce_flat(&tokens)
}

/// Reduces a token sequence that contains no parentheses.
pub(in crate::interpreter::evaluator) fn reduce_flat(tokens: &[Token]) -> EvalResult<f64> {
    let chain = Chain::from_tokens(tokens)?;
    let chain = reduce_multiplicative(chain)?;
    reduce_additive(&chain)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::error::LexError;

    #[test]
    fn multiplication_binds_tighter_than_addition() {
        assert_eq!(evaluate("2+3*4"), Ok(14.0));
        assert_eq!(evaluate("20-8/4"), Ok(18.0));
        assert_eq!(evaluate("5*3+12/4-1"), Ok(17.0));
    }

    #[test]
    fn equal_precedence_is_left_associative() {
        assert_eq!(evaluate("10-4-3"), Ok(3.0));
        assert_eq!(evaluate("64/4/2"), Ok(8.0));
        assert_eq!(evaluate("8/2*4"), Ok(16.0));
    }

    #[test]
    fn parentheses_override_precedence() {
        assert_eq!(evaluate("(2+3)*4"), Ok(20.0));
        assert_eq!(evaluate("((1+1)+1)*2"), Ok(6.0));
        assert_eq!(evaluate("2*(3+(4-1)*2)/(1+1)"), Ok(9.0));
    }

    #[test]
    fn signed_numbers() {
        assert_eq!(evaluate("-1/-1"), Ok(1.0));
        assert_eq!(evaluate("-1*+5/-5"), Ok(1.0));
        assert_eq!(evaluate("3--2"), Ok(5.0));
        assert_eq!(evaluate("(-2)*(-.5)"), Ok(1.0));
    }

    #[test]
    fn signs_inside_groups() {
        assert_eq!(evaluate("2*(- 3)"), Ok(-6.0));
        assert_eq!(evaluate("(1 + - 3)"), Ok(-2.0));
        assert_eq!(evaluate("- (3)"), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn decimals() {
        assert_eq!(evaluate("12.5+3.75"), Ok(16.25));
    }

    #[test]
    fn whitespace_is_ignored() {
        assert_eq!(evaluate("  ( 2 + 3 ) *\t4 "), Ok(20.0));
    }

    #[test]
    fn empty_input_is_malformed() {
        assert_eq!(evaluate(""), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("   "), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("()"), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn misplaced_operators_are_malformed() {
        assert_eq!(evaluate("2+"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("*2"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("2**3"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("- 5"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("2 3"), Err(EvalError::MalformedExpression));
        assert_eq!(evaluate("2(3)"), Err(EvalError::MalformedExpression));
    }

    #[test]
    fn lexical_errors_are_wrapped() {
        assert_eq!(evaluate("2&3"),
                   Err(EvalError::Lex(LexError::UnknownCharacter { character: '&',
                                                                   position:  1, })));
        assert!(matches!(evaluate("1.2.3+4"),
                         Err(EvalError::Lex(LexError::InvalidNumberFormat { .. }))));
    }

    #[test]
    fn division_by_zero_is_rejected() {
        assert_eq!(evaluate("5/0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("5/-0.0"), Err(EvalError::DivisionByZero));
        assert_eq!(evaluate("1/(2-2)"), Err(EvalError::DivisionByZero));
    }

    #[test]
    fn overflow_is_not_rejected() {
        let huge = format!("1{}", "0".repeat(300));
        assert_eq!(evaluate(&format!("{huge}*{huge}")), Ok(f64::INFINITY));
    }
}
