/// Lexing errors.
///
/// Defines the errors raised while turning source text into tokens: stray
/// characters, comments that never close and integer literals that do not fit
/// a 64-bit signed integer.
pub mod lex_error;
/// Parsing errors.
///
/// Defines all error types that can occur while building the syntax tree from
/// tokens. Parse errors include unexpected tokens, missing delimiters and
/// malformed definition headers.
pub mod parse_error;
/// Runtime errors.
///
/// Contains all error types that can be raised during evaluation. Runtime
/// errors include unknown identifiers, bad indices, type mismatches, arity
/// mismatches, overflow and division by zero.
pub mod runtime_error;

pub use lex_error::LexError;
pub use parse_error::ParseError;
pub use runtime_error::RuntimeError;

/// Any failure produced by running a source text through the pipeline.
///
/// Every category is terminal: the first error encountered aborts the run and
/// is the one reported. Each inner message already names its stage and line,
/// so the wrapper displays it unchanged.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum Error {
    /// The source text could not be tokenized.
    #[error(transparent)]
    Lex(#[from] LexError),
    /// The token sequence did not match the grammar.
    #[error(transparent)]
    Parse(#[from] ParseError),
    /// Evaluation of a well-formed program failed.
    #[error(transparent)]
    Runtime(#[from] RuntimeError),
}
