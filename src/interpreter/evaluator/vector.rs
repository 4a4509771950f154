use std::rc::Rc;

use crate::{
    ast::Expr,
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::core::Value,
    },
    util::num::checked_offset,
};

impl Context {
    /// Evaluates every element of a vector literal, left to right.
    pub(crate) fn eval_vector_literal(&mut self,
                                      elements: &[Expr],
                                      env: &Rc<Environment>)
                                      -> EvalResult<Value> {
        let values = elements.iter()
                             .map(|element| self.eval(element, env))
                             .collect::<EvalResult<Vec<_>>>()?;
        Ok(Value::from(values))
    }

    /// Evaluates an index expression `target[index]`.
    ///
    /// The index is evaluated first and must be an integer. When the target is
    /// written as a vector literal, only the selected element expression is
    /// evaluated, so `[1, 1 / 0][0]` is `1`. Any other target is evaluated in
    /// full and must produce a vector.
    ///
    /// # Errors
    /// - `IndexNotInteger` if the index is not an integer.
    /// - `NotIndexable` if the target is not a vector.
    /// - `IndexOutOfBounds` if the index is negative or past the end.
    ///
    /// # Example
    /// ```
    /// use mexpr::get_result;
    /// use mexpr::interpreter::value::core::Value;
    ///
    /// assert_eq!(get_result("[1, 2, 3][1]").unwrap(), Value::Integer(2));
    /// assert_eq!(get_result("[1, 1 / 0][0]").unwrap(), Value::Integer(1));
    /// assert!(get_result("v() = [1, 1 / 0] v()[0]").is_err());
    /// ```
    pub fn eval_index(&mut self,
                      target: &Expr,
                      index: &Expr,
                      line: usize,
                      env: &Rc<Environment>)
                      -> EvalResult<Value> {
        let index_value = self.eval(index, env)?;
        let Some(index) = index_value.as_integer() else {
            return Err(RuntimeError::IndexNotInteger { found: index_value.describe(),
                                                       line });
        };

        if let Expr::VectorLiteral { elements, .. } = target {
            let element = element_at(elements, index, line)?;
            return self.eval(element, env);
        }

        match self.eval(target, env)? {
            Value::Vector(values) => element_at(values.as_slice(), index, line).cloned(),
            other => Err(RuntimeError::NotIndexable { found: other.describe(),
                                                      line }),
        }
    }
}

/// Borrows `items[index]`, rejecting negative and past-the-end indices.
fn element_at<T>(items: &[T], index: i64, line: usize) -> EvalResult<&T> {
    checked_offset(index, items.len()).and_then(|offset| items.get(offset))
                                      .ok_or(RuntimeError::IndexOutOfBounds { index,
                                                                              len: items.len(),
                                                                              line })
}
