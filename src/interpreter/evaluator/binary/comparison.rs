use crate::{
    ast::BinaryOperator,
    interpreter::{evaluator::core::Context, value::core::Value},
};

impl Context {
    /// Compares two integers.
    ///
    /// `^` tests equality, `>` and `<` test ordering. The result is `1` when
    /// the comparison holds and `0` otherwise.
    ///
    /// # Example
    /// ```
    /// use mexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// assert_eq!(Context::eval_comparison(BinaryOperator::Equal, 4, 4), Value::Integer(1));
    /// assert_eq!(Context::eval_comparison(BinaryOperator::Less, 4, 4), Value::Integer(0));
    /// ```
    #[must_use]
    pub fn eval_comparison(op: BinaryOperator, a: i64, b: i64) -> Value {
        use BinaryOperator::{Equal, Greater, Less};

        Value::from(match op {
                        Equal => a == b,
                        Greater => a > b,
                        Less => a < b,
                        _ => unreachable!(),
                    })
    }
}
