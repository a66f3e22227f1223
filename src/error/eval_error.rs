use crate::error::LexError;

#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur while evaluating an expression.
pub enum EvalError {
    /// The expression could not be tokenized.
    Lex(LexError),
    /// A parenthesis has no partner: either a `(` with no `)` after it, or a
    /// `)` left over once every `(` has been resolved.
    UnmatchedParen {
        /// The parenthesis that is missing its partner.
        paren: char,
    },
    /// After parentheses are resolved, the tokens do not alternate between
    /// numbers and operators, starting and ending with a number. This covers
    /// empty input as well as leading, trailing, or doubled operators.
    MalformedExpression,
    /// The right-hand operand of a division is zero.
    DivisionByZero,
}

impl std::fmt::Display for EvalError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Lex(e) => write!(f, "{e}"),
            Self::UnmatchedParen { paren: '(' } => {
                write!(f, "Missing closing parantheses: '(' has no matching ')'.")
            },
            Self::UnmatchedParen { paren } => {
                write!(f, "UnmatchedParen: '{paren}' has no matching '('.")
            },
            Self::MalformedExpression => write!(f, "Malformed expression."),
            Self::DivisionByZero => write!(f, "Division by 0 is undefined."),
        }
    }
}

impl std::error::Error for EvalError {
    fn source(&self) -> Option<&(dyn std::error::Error + 'static)> {
        match self {
            Self::Lex(e) => Some(e),
            _ => None,
        }
    }
}

impl From<LexError> for EvalError {
    fn from(e: LexError) -> Self {
        Self::Lex(e)
    }
}
