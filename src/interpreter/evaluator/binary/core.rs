use std::rc::Rc;

use crate::{
    ast::{BinaryOperator, Expr},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a binary operation between two values.
    ///
    /// Every operator is defined on integers only. Arithmetic goes to
    /// `eval_scalar_op`, `^ > <` go to `eval_comparison` and `& |` go to
    /// `eval_logic`.
    ///
    /// # Parameters
    /// - `op`: The operator.
    /// - `left`: Left operand.
    /// - `right`: Right operand.
    /// - `line`: Line number for error reporting.
    ///
    /// # Returns
    /// An `EvalResult<Value>` containing the evaluated result.
    ///
    /// # Example
    /// ```
    /// use mexpr::{
    ///     ast::BinaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let left = Value::Integer(3);
    /// let right = Value::Integer(4);
    ///
    /// let result = Context::eval_binary(BinaryOperator::Add, &left, &right, 1);
    /// assert_eq!(result.unwrap(), Value::Integer(7));
    ///
    /// let vector = Value::from(vec![Value::Integer(1)]);
    /// assert!(Context::eval_binary(BinaryOperator::Add, &vector, &right, 1).is_err());
    /// ```
    pub fn eval_binary(op: BinaryOperator,
                       left: &Value,
                       right: &Value,
                       line: usize)
                       -> EvalResult<Value> {
        use BinaryOperator::{Add, And, Div, Equal, Greater, Less, Mul, Or, Sub};

        let (Value::Integer(a), Value::Integer(b)) = (left, right) else {
            return Err(RuntimeError::InvalidBinaryOperands { op: op.to_string(),
                                                             left: left.describe(),
                                                             right: right.describe(),
                                                             line });
        };

        match op {
            Add | Sub | Mul | Div => Self::eval_scalar_op(op, *a, *b, line),
            Equal | Greater | Less => Ok(Self::eval_comparison(op, *a, *b)),
            And | Or => Ok(Self::eval_logic(op, *a, *b)),
        }
    }

    /// Evaluates both operand expressions, left first, then applies the
    /// operator. Neither `&` nor `|` short-circuits.
    pub(crate) fn eval_binary_op(&mut self,
                                 left: &Expr,
                                 op: BinaryOperator,
                                 right: &Expr,
                                 line: usize,
                                 env: &Rc<Environment>)
                                 -> EvalResult<Value> {
        let left = self.eval(left, env)?;
        let right = self.eval(right, env)?;
        Self::eval_binary(op, &left, &right, line)
    }
}
