/// Represents all errors that can occur during evaluation.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RuntimeError {
    /// The name is bound in neither the current scope nor any ancestor.
    #[error("Evaluation error on line {line}: Unknown identifier '{name}'.")]
    UnknownIdentifier {
        /// The unresolved name.
        name: String,
        /// The source line where the error occurred.
        line: usize,
    },
    /// The index expression did not produce an integer.
    #[error("Evaluation error on line {line}: Index must be an integer, found {found}.")]
    IndexNotInteger {
        /// Description of the value that was found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to access a vector element outside its bounds.
    #[error("Evaluation error on line {line}: Index out of bounds. Length is {len}, but found {index} instead.")]
    IndexOutOfBounds {
        /// The index that was requested.
        index: i64,
        /// The length of the indexed vector.
        len:   usize,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// Tried to index something that is not a vector.
    #[error("Evaluation error on line {line}: Expected a vector to index into, found {found}.")]
    NotIndexable {
        /// Description of the value that was found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// A unary operator was applied to a value it does not support.
    #[error("Evaluation error on line {line}: Cannot apply '{op}' to {operand}.")]
    InvalidUnaryOperand {
        /// The operator symbol.
        op:      String,
        /// Description of the operand.
        operand: String,
        /// The source line where the error occurred.
        line:    usize,
    },
    /// A binary operator was applied to values it does not support.
    #[error("Evaluation error on line {line}: Cannot apply '{op}' to {left} and {right}.")]
    InvalidBinaryOperands {
        /// The operator symbol.
        op:    String,
        /// Description of the left operand.
        left:  String,
        /// Description of the right operand.
        right: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The callee of a call expression is not a function.
    #[error("Evaluation error on line {line}: Expected a function to call, found {found}.")]
    NotCallable {
        /// Description of the value that was found.
        found: String,
        /// The source line where the error occurred.
        line:  usize,
    },
    /// The wrong number of arguments was supplied to a function.
    #[error("Evaluation error on line {line}: Argument count mismatch. Expected {expected}, but found {found}.")]
    ArgumentCountMismatch {
        /// Number of declared parameters.
        expected: usize,
        /// Number of supplied arguments.
        found:    usize,
        /// The source line where the error occurred.
        line:     usize,
    },
    /// Attempted integer division by zero.
    #[error("Evaluation error on line {line}: Division by zero.")]
    DivisionByZero {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Arithmetic overflowed the 64-bit integer range.
    #[error("Evaluation error on line {line}: Integer overflow while trying to compute result.")]
    Overflow {
        /// The source line where the error occurred.
        line: usize,
    },
    /// Nested function calls exceeded the configured depth.
    #[error("Evaluation error on line {line}: Maximum call depth of {limit} exceeded.")]
    RecursionLimit {
        /// The configured maximum depth.
        limit: usize,
        /// The source line where the error occurred.
        line:  usize,
    },
}
