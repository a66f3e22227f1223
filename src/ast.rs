use crate::{
    error::EvalError,
    interpreter::{evaluator::core::EvalResult, lexer::Token},
};

/// Represents a binary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Division (`/`)
    Div,
}

impl BinaryOperator {
    /// Returns `true` for `*` and `/`, which bind tighter than `+` and `-`.
    #[must_use]
    pub const fn is_multiplicative(self) -> bool {
        matches!(self, Self::Mul | Self::Div)
    }

    /// Returns the operator a token stands for, if it is an operator token.
    #[must_use]
    pub const fn from_token(token: &Token) -> Option<Self> {
        match token {
            Token::Plus => Some(Self::Add),
            Token::Minus => Some(Self::Sub),
            Token::Multiply => Some(Self::Mul),
            Token::Divide => Some(Self::Div),
            Token::Number(_) | Token::LeftParen | Token::RightParen => None,
        }
    }
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let operator = match self {
            Self::Add => "+",
            Self::Sub => "-",
            Self::Mul => "*",
            Self::Div => "/",
        };
        write!(f, "{operator}")
    }
}

/// A parenthesis-free expression: a number followed by zero or more
/// `(operator, number)` links, read left to right.
///
/// A chain is the well-formed shape of a token sequence once every
/// parenthesised group has been collapsed: `n (op n)*`.
#[derive(Debug, Clone, PartialEq)]
pub struct Chain {
    /// The leftmost operand.
    pub first: f64,
    /// The remaining operators and their right-hand operands.
    pub links: Vec<(BinaryOperator, f64)>,
}

impl Chain {
    /// Checks that a parenthesis-free token sequence alternates numbers and
    /// operators, starting and ending with a number, and builds the chain.
    ///
    /// # Errors
    /// Returns `EvalError::MalformedExpression` if the sequence is empty, has
    /// an even length, does not end on a number, or has an operator or number
    /// out of place.
    ///
    /// # Example
    /// ```
    /// use infixcalc::{
    ///     ast::{BinaryOperator, Chain},
    ///     interpreter::lexer::Token,
    /// };
    ///
    /// let chain = Chain::from_tokens(&[Token::Number(1.0), Token::Plus, Token::Number(2.0)]).unwrap();
    /// assert_eq!(chain.links, vec![(BinaryOperator::Add, 2.0)]);
    ///
    /// assert!(Chain::from_tokens(&[Token::Number(1.0), Token::Plus]).is_err());
    /// ```
    pub fn from_tokens(tokens: &[Token]) -> EvalResult<Self> {
        if tokens.is_empty()
           || tokens.len() % 2 == 0
           || !matches!(tokens.last(), Some(Token::Number(_)))
        {
            return Err(EvalError::MalformedExpression);
        }

        let Token::Number(first) = tokens[0] else {
            return Err(EvalError::MalformedExpression);
        };

        let links = tokens[1..].chunks_exact(2)
                               .map(|pair| match (BinaryOperator::from_token(&pair[0]), pair[1]) {
                                   (Some(op), Token::Number(value)) => Ok((op, value)),
                                   _ => Err(EvalError::MalformedExpression),
                               })
                               .collect::<EvalResult<Vec<_>>>()?;

        Ok(Self { first, links })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn single_number_is_a_chain() {
        let chain = Chain::from_tokens(&[Token::Number(4.0)]).unwrap();
        assert_eq!(chain, Chain { first: 4.0, links: vec![] });
    }

    #[test]
    fn empty_even_and_trailing_sequences_are_malformed() {
        assert_eq!(Chain::from_tokens(&[]), Err(EvalError::MalformedExpression));
        assert_eq!(Chain::from_tokens(&[Token::Minus, Token::Number(5.0)]),
                   Err(EvalError::MalformedExpression));
        assert_eq!(Chain::from_tokens(&[Token::Number(2.0), Token::Plus, Token::Plus]),
                   Err(EvalError::MalformedExpression));
    }

    #[test]
    fn misplaced_tokens_are_malformed() {
        assert_eq!(Chain::from_tokens(&[Token::Number(2.0), Token::Number(3.0), Token::Number(4.0)]),
                   Err(EvalError::MalformedExpression));
        assert_eq!(Chain::from_tokens(&[Token::Plus, Token::Number(2.0), Token::Number(3.0)]),
                   Err(EvalError::MalformedExpression));
        assert_eq!(Chain::from_tokens(&[Token::Number(2.0), Token::Plus, Token::Minus, Token::Plus, Token::Number(3.0)]),
                   Err(EvalError::MalformedExpression));
    }

    #[test]
    fn operators_display_as_symbols() {
        let rendered: Vec<String> = [BinaryOperator::Add,
                                     BinaryOperator::Sub,
                                     BinaryOperator::Mul,
                                     BinaryOperator::Div].iter()
                                                          .map(ToString::to_string)
                                                          .collect();
        assert_eq!(rendered, ["+", "-", "*", "/"]);
    }
}
