/// Function values.
///
/// Defines the closure type produced by evaluating a definition: parameter
/// names, the shared body, and the environment captured at the definition
/// site.
pub mod function;

pub mod core;
