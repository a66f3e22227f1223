#[derive(Debug, Clone, PartialEq, Eq)]
/// Represents all errors that can occur during tokenization.
pub enum LexError {
    /// Found a character that is not whitespace, a digit, a decimal point, an
    /// operator or a parenthesis.
    UnknownCharacter {
        /// The offending character.
        character: char,
        /// Zero-based character offset into the expression.
        position:  usize,
    },
    /// A numeric literal could not be read, usually because it contains more
    /// than one decimal point.
    InvalidNumberFormat {
        /// The malformed literal, up to and including the point where reading
        /// failed.
        fragment: String,
        /// Zero-based character offset of the literal's first character.
        position: usize,
    },
}

impl LexError {
    /// Returns the character offset at which the error was detected.
    #[must_use]
    pub const fn position(&self) -> usize {
        match self {
            Self::UnknownCharacter { position, .. } | Self::InvalidNumberFormat { position, .. } => {
                *position
            },
        }
    }
}

impl std::fmt::Display for LexError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::UnknownCharacter { character, position } => {
                write!(f, "Unknown character '{character}' at position {position}.")
            },
            Self::InvalidNumberFormat { fragment, position } => {
                write!(f, "Invalid number format near '{fragment}' at position {position}.")
            },
        }
    }
}

impl std::error::Error for LexError {}
