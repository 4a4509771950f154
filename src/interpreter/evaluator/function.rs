use std::rc::Rc;

use tracing::trace;

use crate::{
    ast::{Expr, FunctionDef},
    error::RuntimeError,
    interpreter::{
        environment::Environment,
        evaluator::core::{Context, EvalResult},
        value::{core::Value, function::Function},
    },
};

impl Context {
    /// Evaluates a function definition.
    ///
    /// Builds a closure over `env`, binds it under the definition's name in
    /// `env` (replacing any earlier binding there) and returns it. Because the
    /// closure captures the frame it is bound in, the body can call the
    /// function by name.
    ///
    /// # Example
    /// ```
    /// use mexpr::interpreter::{
    ///     environment::Environment, evaluator::core::Context, lexer::tokenize, parser::parse,
    /// };
    /// use mexpr::ast::Statement;
    ///
    /// let program = parse(&tokenize("id(x) = x").unwrap()).unwrap();
    /// let Statement::Definition(def) = &program.statements[0] else { unreachable!() };
    ///
    /// let env = Environment::root();
    /// let value = Context::eval_definition(def, &env);
    /// assert_eq!(value.to_string(), "<function id(x)>");
    /// assert!(env.contains_local("id"));
    /// ```
    pub fn eval_definition(def: &FunctionDef, env: &Rc<Environment>) -> Value {
        let function = Value::from(Function { name:   def.name.clone(),
                                              params: def.params.clone(),
                                              body:   Rc::clone(&def.body),
                                              env:    Rc::clone(env), });

        env.define(def.name.clone(), function.clone());
        trace!(name = %def.name, arity = def.params.len(), line = def.line, "defined function");
        function
    }

    /// Evaluates a call expression.
    ///
    /// The callee is evaluated first and must produce a function. The
    /// argument count is checked before any argument is evaluated. Arguments
    /// are then evaluated left to right in the caller's scope and bound to the
    /// parameters in a fresh frame whose parent is the function's captured
    /// frame, so the body never sees the caller's bindings.
    ///
    /// # Parameters
    /// - `callee`: Expression producing the function.
    /// - `arguments`: Argument expressions.
    /// - `line`: Line number for error reporting.
    /// - `env`: The caller's scope.
    ///
    /// # Errors
    /// - `NotCallable` if the callee is not a function.
    /// - `ArgumentCountMismatch` if the argument count differs from the arity.
    /// - `RecursionLimit` if the call would exceed the configured call depth.
    pub fn eval_call(&mut self,
                     callee: &Expr,
                     arguments: &[Expr],
                     line: usize,
                     env: &Rc<Environment>)
                     -> EvalResult<Value> {
        let function = match self.eval(callee, env)? {
            Value::Function(function) => function,
            other => {
                return Err(RuntimeError::NotCallable { found: other.describe(),
                                                       line });
            },
        };

        if arguments.len() != function.arity() {
            return Err(RuntimeError::ArgumentCountMismatch { expected: function.arity(),
                                                             found: arguments.len(),
                                                             line });
        }

        let frame = Environment::child(&function.env);
        for (param, argument) in function.params.iter().zip(arguments) {
            let value = self.eval(argument, env)?;
            frame.define(param.as_str(), value);
        }

        self.call_body(&function, &frame, line)
    }

    /// Evaluates the body of `function` in `frame`, tracking call depth.
    fn call_body(&mut self,
                 function: &Function,
                 frame: &Rc<Environment>,
                 line: usize)
                 -> EvalResult<Value> {
        let limit = self.config().max_call_depth;
        if self.depth() >= limit {
            return Err(RuntimeError::RecursionLimit { limit, line });
        }

        self.enter_call();
        trace!(name = %function.name, depth = self.depth(), "calling function");
        let result = self.eval(&function.body, frame);
        self.exit_call();

        result
    }
}
