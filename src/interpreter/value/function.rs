use std::{fmt, rc::Rc};

use crate::{ast::Expr, interpreter::environment::Environment};

/// A closure: a user-defined function together with the environment that was
/// current when its definition was evaluated.
///
/// The parameter list is fixed here; every call must supply exactly
/// [`Function::arity`] arguments.
pub struct Function {
    /// The name the definition bound.
    pub name:   String,
    /// Parameter names, in declaration order.
    pub params: Vec<String>,
    /// Body expression, shared with the definition node.
    pub body:   Rc<Expr>,
    /// The frame free variables (and the function's own name) resolve in.
    pub env:    Rc<Environment>,
}

impl Function {
    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }
}

impl fmt::Display for Function {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "<function {}({})>", self.name, self.params.join(", "))
    }
}

impl fmt::Debug for Function {
    // The captured frame usually binds this function, so it is left out.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("Function")
         .field("name", &self.name)
         .field("params", &self.params)
         .field("body", &self.body)
         .finish_non_exhaustive()
    }
}
