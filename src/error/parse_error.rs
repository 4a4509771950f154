/// Represents all errors that can occur during parsing.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum ParseError {
    /// Found a token that does not fit the grammar at this position.
    #[error("Parse error on line {line}: Unexpected token {token}, expected {expected}.")]
    UnexpectedToken {
        /// The token encountered.
        token:    String,
        /// What the grammar required here.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Reached the end of input while a construct was still open.
    #[error("Parse error on line {line}: Unexpected end of input, expected {expected}.")]
    UnexpectedEndOfInput {
        /// What the grammar required here.
        expected: &'static str,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// A definition header lists something other than a bare identifier.
    #[error("Parse error on line {line}: Invalid parameter {token}; parameters must be identifiers. Example: f(x, y) = x + y")]
    InvalidParameter {
        /// The token found in parameter position.
        token: String,
        /// The source line where the error occurred.
        line:  usize,
    },
}
