/// Parser state and entry points.
///
/// Holds the token slice and cursor, the lookahead helpers, and the program
/// and expression entry points.
pub mod core;

/// Prefix, postfix and atom parsing.
///
/// Handles unary minus, chained calls and index accesses, literals,
/// identifiers, groupings and vector literals.
pub mod unary;

/// Binary operator parsing.
///
/// Implements every left-associative precedence level from `|` down to `*`
/// and `/`.
pub mod binary;

/// Utility functions for the parser.
///
/// Provides comma-separated list parsing and identifier extraction shared by
/// calls, vector literals and definition headers.
pub mod utils;

/// Statement parsing.
///
/// Decides between a definition and a plain expression with a non-destructive
/// probe, then parses whichever was found.
pub mod statement;

pub use self::core::{ParseResult, Parser, parse};
