/// Binary operator evaluation logic.
///
/// Handles arithmetic, comparisons and the bitwise `&`/`|` tests, all of which
/// are defined on integers only.
pub mod binary;

/// Unary operator evaluation logic.
///
/// Implements arithmetic negation.
pub mod unary;

/// Core evaluation logic and context management.
///
/// Contains the evaluation configuration, the runtime context, the main
/// dispatch over expressions and the program and statement entry points.
pub mod core;

/// Function definitions and calls.
///
/// Builds closures from definitions and applies them with fresh call frames
/// parented to the captured environment.
pub mod function;

/// Vector literals and index access.
///
/// Evaluates vector literals eagerly and resolves index expressions, including
/// the shortcut for indexing a vector literal directly.
pub mod vector;
