use std::rc::Rc;

use crate::{
    ast::{Expr, UnaryOperator},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
};

impl Context {
    /// Evaluates a unary operation on a value.
    ///
    /// Negation is defined on integers only and fails loudly on overflow
    /// (`-(-9223372036854775808)`).
    ///
    /// # Example
    /// ```
    /// use mexpr::{
    ///     ast::UnaryOperator,
    ///     interpreter::{evaluator::core::Context, value::core::Value},
    /// };
    ///
    /// let v = Context::eval_unary(UnaryOperator::Negate, &Value::Integer(5), 1).unwrap();
    /// assert_eq!(v, Value::Integer(-5));
    ///
    /// assert!(Context::eval_unary(UnaryOperator::Negate, &Value::from(vec![]), 1).is_err());
    /// ```
    pub fn eval_unary(op: UnaryOperator, value: &Value, line: usize) -> EvalResult<Value> {
        match (op, value) {
            (UnaryOperator::Negate, Value::Integer(n)) => {
                n.checked_neg()
                 .map(Value::Integer)
                 .ok_or(RuntimeError::Overflow { line })
            },
            (op, operand) => {
                Err(RuntimeError::InvalidUnaryOperand { op: op.to_string(),
                                                        operand: operand.describe(),
                                                        line })
            },
        }
    }

    /// Evaluates the operand expression, then applies the operator with
    /// [`Context::eval_unary`].
    pub(crate) fn eval_unary_op(&mut self,
                                op: UnaryOperator,
                                expr: &Expr,
                                line: usize,
                                env: &Rc<Environment>)
                                -> EvalResult<Value> {
        let value = self.eval(expr, env)?;
        Self::eval_unary(op, &value, line)
    }
}
