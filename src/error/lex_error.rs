/// Represents all errors that can occur during lexing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum LexError {
    /// A character that starts no token and is not whitespace.
    #[error("Lex error on line {line}: Unexpected character '{character}'.")]
    UnexpectedCharacter {
        /// The offending character.
        character: char,
        /// The source line where the error occurred.
        line:      usize,
    },
    /// A `'` comment was opened but the input ended before it closed.
    #[error("Lex error on line {line}: Comment is never closed; expected a closing '.")]
    UnterminatedComment {
        /// The source line of the opening `'`.
        line: usize,
    },
    /// An integer literal does not fit in a 64-bit signed integer.
    #[error("Lex error on line {line}: Integer literal {literal} is too large.")]
    IntegerTooLarge {
        /// The literal as written in the source.
        literal: String,
        /// The source line where the error occurred.
        line:    usize,
    },
}
