/// Operator dispatch and operand evaluation.
pub mod core;

/// Checked integer arithmetic.
pub mod scalar;

/// Equality and ordering comparisons.
pub mod comparison;

/// Bitwise `&` and `|` tests.
pub mod logic;
