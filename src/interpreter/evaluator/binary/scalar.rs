use crate::{
    ast::BinaryOperator,
    error::RuntimeError,
    interpreter::{
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates an arithmetic operation between two integers.
    ///
    /// All arithmetic is checked: a result outside the `i64` range is an
    /// `Overflow` error rather than a wrapped value. Division truncates toward
    /// zero.
    ///
    /// # Errors
    /// - `DivisionByZero` when dividing by `0`.
    /// - `Overflow` when the result does not fit in an `i64`.
    ///
    /// # Example
    /// ```
    /// use mexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let result = Context::eval_scalar_op(BinaryOperator::Div, -7, 2, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(-3));
    ///
    /// assert!(Context::eval_scalar_op(BinaryOperator::Div, 1, 0, 1).is_err());
    /// assert!(Context::eval_scalar_op(BinaryOperator::Add, i64::MAX, 1, 1).is_err());
    /// ```
    pub fn eval_scalar_op(op: BinaryOperator, a: i64, b: i64, line: usize) -> EvalResult<Value> {
        use BinaryOperator::{Add, Div, Mul, Sub};

        let result = match op {
            Add => a.checked_add(b),
            Sub => a.checked_sub(b),
            Mul => a.checked_mul(b),
            Div => {
                if b == 0 {
                    return Err(RuntimeError::DivisionByZero { line });
                }
                a.checked_div(b)
            },
            _ => unreachable!(),
        };

        result.map(Value::Integer)
              .ok_or(RuntimeError::Overflow { line })
    }
}
