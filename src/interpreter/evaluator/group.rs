use log::debug;

use crate::{
    error::EvalError,
    interpreter::{
        evaluator::core::{EvalResult, reduce_flat},
        lexer::Token,
    },
};

/// Collapses every parenthesised group into a single number token.
///
/// Repeatedly pairs the right-most `(` with the first `)` after it. The tokens
/// strictly between them contain no parentheses. They are read as a fresh
/// expression, so a `+` or `-` at the start of the group or after an operator
/// becomes the sign of the number that follows it (see [`fold_signs`]). The
/// whole `( ... )` span is then replaced by the resulting number. The loop
/// ends when no `(` remains.
///
/// # Errors
/// - `EvalError::UnmatchedParen { paren: '(' }` if a `(` has no `)` after it.
/// - `EvalError::UnmatchedParen { paren: ')' }` if a `)` is left once every
///   `(` has been resolved.
/// - Any error from reducing the group's contents.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::group::resolve_groups, lexer::tokenize};
///
/// let tokens = resolve_groups(tokenize("(1+(2*3))-4").unwrap()).unwrap();
/// assert_eq!(tokens, tokenize("7-4").unwrap());
/// ```
pub fn resolve_groups(mut tokens: Vec<Token>) -> EvalResult<Vec<Token>> {
    while let Some(open) = tokens.iter().rposition(|t| matches!(t, Token::LeftParen)) {
        let close = tokens[open + 1..].iter()
                                      .position(|t| matches!(t, Token::RightParen))
                                      .map(|offset| open + 1 + offset)
                                      .ok_or(EvalError::UnmatchedParen { paren: '(' })?;

        let value = reduce_flat(&fold_signs(&tokens[open + 1..close]))?;
        debug!("group at tokens {open}..={close} = {value}");

        tokens[open] = Token::Number(value);
        tokens.drain(open + 1..=close);
    }

    if tokens.iter().any(|t| matches!(t, Token::RightParen)) {
        return Err(EvalError::UnmatchedParen { paren: ')' });
    }

    Ok(tokens)
}

/// Merges each `+` or `-` in sign position with the number after it.
///
/// A sign position is the start of the sequence or directly after an
/// operator. Only a non-negative number absorbs a sign: in `- -3` the first
/// `-` is left as an operator, exactly as the tokenizer would read the text
/// `--3`.
///
/// # Example
/// ```
/// use infixcalc::interpreter::{evaluator::group::fold_signs, lexer::Token};
///
/// let folded = fold_signs(&[Token::Number(1.0), Token::Plus, Token::Minus, Token::Number(3.0)]);
/// assert_eq!(folded, vec![Token::Number(1.0), Token::Plus, Token::Number(-3.0)]);
/// ```
#[must_use]
pub fn fold_signs(tokens: &[Token]) -> Vec<Token> {
    let mut folded: Vec<Token> = Vec::with_capacity(tokens.len());
    let mut rest = tokens.iter().copied().peekable();

    while let Some(token) = rest.next() {
        let sign = match token {
            Token::Plus => 1.0,
            Token::Minus => -1.0,
            _ => {
                folded.push(token);
                continue;
            },
        };
        if folded.last().is_none_or(Token::admits_sign)
           && let Some(&Token::Number(value)) = rest.peek()
           && !value.is_sign_negative()
        {
            rest.next();
            folded.push(Token::Number(sign * value));
        } else {
            folded.push(token);
        }
    }

    folded
}
