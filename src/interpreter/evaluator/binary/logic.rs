use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Evaluates a bitwise test between two integers.
    ///
    /// `a & b` is `1` if the bitwise and of the operands is non-zero, and
    /// `a | b` is `1` if their bitwise or is non-zero; otherwise `0`. With
    /// `1`/`0` operands this behaves like logical and/or.
    ///
    /// # Example
    /// ```
    /// use mexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, 3, 0), Value::Integer(0));
    /// assert_eq!(Context::eval_logic(BinaryOperator::And, 2, 1), Value::Integer(0));
    /// assert_eq!(Context::eval_logic(BinaryOperator::Or, 3, 0), Value::Integer(1));
    /// ```
    #[must_use]
    pub fn eval_logic(op: BinaryOperator, a: i64, b: i64) -> Value {
        use BinaryOperator::{And, Or};

        Value::from(match op {
                        And => a & b != 0,
                        Or => a | b != 0,
                        _ => unreachable!(),
                    })
    }
}
