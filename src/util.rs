/// Numeric conversion helpers.
///
/// This module provides safe functions for converting between the
/// interpreter's `i64` integers and Rust's `usize` offsets without risking
/// silent wrap-around.
pub mod num;
/// Stack safety for deep recursion.
///
/// Grows the native stack on demand so that deeply nested expressions and
/// long chains of user-function calls do not overflow it.
pub mod stack;
