use std::ops::Range;

use log::trace;
use logos::Logos;

use crate::error::LexError;

/// Result type used by the tokenizer.
pub type LexResult<T> = Result<T, LexError>;

/// Raw character classes recognised in an expression.
///
/// Lexemes are context free: a `-` is always `Lexeme::Minus` here. Whether it
/// is a binary operator or the sign of a number is decided by [`tokenize`],
/// which looks at the previously emitted token.
#[derive(Logos, Debug, PartialEq, Eq, Clone, Copy)]
#[logos(skip r"[ \t\r\n\f]+")]
enum Lexeme {
    /// A run of digits and decimal points, such as `12`, `.5` or `1.2.3`.
    /// Malformed runs are rejected when the run is read as a number.
    #[regex(r"[0-9.]+")]
    Numeral,
    /// `+`
    #[token("+")]
    Plus,
    /// `-`
    #[token("-")]
    Minus,
    /// `*`
    #[token("*")]
    Star,
    /// `/`
    #[token("/")]
    Slash,
    /// `(`
    #[token("(")]
    LParen,
    /// `)`
    #[token(")")]
    RParen,
}

/// Represents a lexical token of an arithmetic expression.
///
/// Only `Number` carries a payload; every other variant is a fixed symbol.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum Token {
    /// Numeric literal, including its sign when the sign was read as part of
    /// the number (`-1` in `2*-1`).
    Number(f64),
    /// `+`
    Plus,
    /// `-`
    Minus,
    /// `*`
    Multiply,
    /// `/`
    Divide,
    /// `(`
    LeftParen,
    /// `)`
    RightParen,
}

impl Token {
    /// Returns `true` for the four binary operator tokens.
    #[must_use]
    pub const fn is_operator(&self) -> bool {
        matches!(self, Self::Plus | Self::Minus | Self::Multiply | Self::Divide)
    }

    /// Returns `true` if a `+` or `-` directly after this token is the sign of
    /// a number rather than a binary operator.
    pub(crate) const fn admits_sign(&self) -> bool {
        self.is_operator() || matches!(self, Self::LeftParen)
    }
}

impl std::fmt::Display for Token {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Number(value) => write!(f, "{value}"),
            Self::Plus => write!(f, "+"),
            Self::Minus => write!(f, "-"),
            Self::Multiply => write!(f, "*"),
            Self::Divide => write!(f, "/"),
            Self::LeftParen => write!(f, "("),
            Self::RightParen => write!(f, ")"),
        }
    }
}

/// Converts an expression string into tokens.
///
/// The scan is a single left-to-right pass with one lexeme of lookahead.
/// A `+` or `-` becomes part of a number when it is immediately followed by a
/// digit or a decimal point and the previous token is absent, an operator, or
/// `(`. Whitespace is skipped.
///
/// # Errors
/// - `LexError::UnknownCharacter` for a character outside the calculator's
///   alphabet, or a decimal point that starts a number without a digit after
///   it.
/// - `LexError::InvalidNumberFormat` for a literal with more than one decimal
///   point.
///
/// # Example
/// ```
/// use infixcalc::interpreter::lexer::{Token, tokenize};
///
/// let tokens = tokenize("2*-1.5").unwrap();
/// assert_eq!(tokens, vec![Token::Number(2.0), Token::Multiply, Token::Number(-1.5)]);
///
/// assert!(tokenize("").unwrap().is_empty());
/// assert!(tokenize("2&3").is_err());
/// ```
pub fn tokenize(source: &str) -> LexResult<Vec<Token>> {
    let mut tokens: Vec<Token> = Vec::new();
    let mut lexemes = Lexeme::lexer(source).spanned().peekable();

    while let Some((lexeme, span)) = lexemes.next() {
        let Ok(lexeme) = lexeme else {
            return Err(unknown_character(source, span.start));
        };

        let token = match lexeme {
            Lexeme::Numeral => read_number(source, span)?,
            Lexeme::Plus | Lexeme::Minus
                if tokens.last().is_none_or(Token::admits_sign) =>
            {
                let signed_end = match lexemes.peek() {
                    Some((Ok(Lexeme::Numeral), next)) if next.start == span.end => Some(next.end),
                    _ => None,
                };
                match signed_end {
                    Some(end) => {
                        lexemes.next();
                        read_number(source, span.start..end)?
                    },
                    None if lexeme == Lexeme::Plus => Token::Plus,
                    None => Token::Minus,
                }
            },
            Lexeme::Plus => Token::Plus,
            Lexeme::Minus => Token::Minus,
            Lexeme::Star => Token::Multiply,
            Lexeme::Slash => Token::Divide,
            Lexeme::LParen => Token::LeftParen,
            Lexeme::RParen => Token::RightParen,
        };

        trace!("token {token:?}");
        tokens.push(token);
    }

    Ok(tokens)
}

/// Renders tokens back into expression text.
///
/// Numbers are written as their shortest round-tripping decimal value and
/// symbols as themselves, with no separators.
///
/// # Example
/// ```
/// use infixcalc::interpreter::lexer::{render, tokenize};
///
/// let tokens = tokenize("( 1 + -2.50 ) * 3").unwrap();
/// assert_eq!(render(&tokens), "(1+-2.5)*3");
/// ```
#[must_use]
pub fn render(tokens: &[Token]) -> String {
    tokens.iter().map(ToString::to_string).collect()
}

/// Reads the literal at `span`, optionally prefixed by a sign, as a number.
///
/// # Errors
/// - `UnknownCharacter` if an unsigned literal starts with a decimal point
///   that is not followed by a digit.
/// - `InvalidNumberFormat` if the literal contains a second decimal point or
///   otherwise fails to parse (a sign followed by a lone `.`).
fn read_number(source: &str, span: Range<usize>) -> LexResult<Token> {
    let position = char_offset(source, span.start);
    let literal = &source[span];

    if let Some(rest) = literal.strip_prefix('.')
       && !rest.starts_with(|c: char| c.is_ascii_digit())
    {
        return Err(LexError::UnknownCharacter { character: '.', position });
    }

    if let Some((second_dot, _)) = literal.match_indices('.').nth(1) {
        return Err(LexError::InvalidNumberFormat { fragment: literal[..=second_dot].to_string(),
                                                   position });
    }

    literal.parse()
           .map(Token::Number)
           .map_err(|_| LexError::InvalidNumberFormat { fragment: literal.to_string(),
                                                        position })
}

fn unknown_character(source: &str, byte: usize) -> LexError {
    let character = source[byte..].chars().next().unwrap_or(char::REPLACEMENT_CHARACTER);
    LexError::UnknownCharacter { character,
                                 position: char_offset(source, byte) }
}

/// Converts a byte offset into a character offset.
fn char_offset(source: &str, byte: usize) -> usize {
    source[..byte].chars().count()
}
