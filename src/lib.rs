//! # mexpr
//!
//! mexpr is an interpreter for a minimal expression language written in Rust.
//! A source text is a sequence of function definitions and expressions over
//! 64-bit integers, booleans-as-integers and vectors. Functions are
//! first-class closures with lexical scoping and may recurse.
//!
//! ```
//! use mexpr::{get_result, render_result};
//!
//! let value = get_result("fact(n) = [1, n * fact(n - 1)][n > 0] fact(4)").unwrap();
//! assert_eq!(render_result(&value), "24");
//! ```

#![warn(
    clippy::redundant_clone,
    clippy::needless_pass_by_value,
    clippy::similar_names,
    clippy::large_enum_variant,
    clippy::string_lit_as_bytes,
    clippy::match_same_arms,
    clippy::cargo,
    clippy::nursery,
    clippy::perf,
    clippy::style,
    clippy::suspicious,
    clippy::correctness,
    clippy::complexity,
    clippy::pedantic,
    //missing_docs,
)]
#![allow(clippy::missing_errors_doc)]

use crate::{
    error::Error,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalConfig},
        lexer::tokenize,
        parser::parse,
        value::core::Value,
    },
};

/// Defines the structure of parsed code.
///
/// This module declares the `Program`, `Statement` and `Expr` types that
/// represent the syntactic structure of source code as a tree. The tree is
/// built by the parser and walked by the evaluator.
///
/// # Responsibilities
/// - Defines expression and statement types for all language constructs.
/// - Attaches source lines to nodes for error reporting.
pub mod ast;
/// Provides unified error types for lexing, parsing and evaluation.
///
/// Every failure carries the line it was detected on. The umbrella `Error`
/// type tags which stage failed.
pub mod error;
/// Orchestrates the entire process of code execution.
///
/// This module ties together lexing, parsing, evaluation, value
/// representations and scope frames.
///
/// # Responsibilities
/// - Coordinates all core components: lexer, parser, evaluator, and value
///   types.
/// - Provides entry points for parsing and evaluating user code.
pub mod interpreter;
/// General utilities for safe numeric conversion and stack growth.
pub mod util;

/// Runs a source text and returns the value of its last statement.
///
/// The text is tokenized, parsed and evaluated in a fresh top-level scope
/// using the default [`EvalConfig`]. An empty program evaluates to `0`. No
/// state survives between calls.
///
/// # Errors
/// Returns the first lexical, syntactic or runtime error encountered.
///
/// # Examples
/// ```
/// use mexpr::{get_result, interpreter::value::core::Value};
///
/// assert_eq!(get_result("f(x, y) = x + y f(2, 3)").unwrap(), Value::Integer(5));
///
/// // Calling with the wrong number of arguments fails.
/// assert!(get_result("f(x, y) = x + y f(2)").is_err());
/// ```
pub fn get_result(source: &str) -> Result<Value, Error> {
    get_result_with_config(source, &EvalConfig::default())
}

/// Like [`get_result`], with explicit evaluation limits.
///
/// # Example
/// ```
/// use mexpr::{get_result_with_config, interpreter::evaluator::core::EvalConfig};
///
/// let source = "down(n) = [0, down(n - 1)][n > 0] down(10)";
///
/// assert!(get_result_with_config(source, &EvalConfig::default()).is_ok());
/// assert!(get_result_with_config(source, &EvalConfig { max_call_depth: 3 }).is_err());
/// ```
pub fn get_result_with_config(source: &str, config: &EvalConfig) -> Result<Value, Error> {
    let tokens = tokenize(source)?;
    let program = parse(&tokens)?;

    let env = Environment::root();
    let value = Context::with_config(*config).eval_program(&program, &env)?;
    Ok(value)
}

/// Renders a result value as text.
///
/// Integers print in decimal. Vectors print their integer elements separated
/// by single spaces, leaving out any element that is not an integer. Functions
/// print as `<function name(params)>`.
///
/// # Example
/// ```
/// use mexpr::{get_result, render_result};
///
/// assert_eq!(render_result(&get_result("[1, [2], 3]").unwrap()), "1 3");
/// ```
#[must_use]
pub fn render_result(value: &Value) -> String {
    value.to_string()
}
