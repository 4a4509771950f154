use std::rc::Rc;

use tracing::{debug, trace};

use crate::{
    ast::{Expr, Program, Statement},
    error::RuntimeError,
    interpreter::{environment::Environment, value::core::Value},
    util::stack::ensure_sufficient_stack,
};

/// Result type used by the evaluator.
///
/// All evaluation functions return either a value of type `T` or a
/// `RuntimeError` describing the failure.
pub type EvalResult<T> = Result<T, RuntimeError>;

/// Default limit on nested user-function calls.
pub const MAX_CALL_DEPTH: usize = 10_000;

/// Tunable limits for an evaluation run.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct EvalConfig {
    /// Maximum number of user-function calls that may be active at once.
    /// Exceeding it fails the run with `RuntimeError::RecursionLimit`.
    pub max_call_depth: usize,
}

impl Default for EvalConfig {
    fn default() -> Self {
        Self { max_call_depth: MAX_CALL_DEPTH }
    }
}

/// Stores the runtime evaluation context.
///
/// Bindings do not live here; they live in the [`Environment`] chain passed
/// to every evaluation method. The context only tracks the configuration and
/// how many user-function calls are currently active.
///
/// ## Usage
///
/// A `Context` is created per run. Evaluation is single-threaded and runs to
/// completion; the first error aborts the run.
pub struct Context {
    config: EvalConfig,
    depth:  usize,
}

#[allow(clippy::new_without_default)]
impl Context {
    /// Creates a new evaluation context with the default configuration.
    #[must_use]
    pub fn new() -> Self {
        Self::with_config(EvalConfig::default())
    }

    /// Creates a new evaluation context with the given configuration.
    #[must_use]
    pub const fn with_config(config: EvalConfig) -> Self {
        Self { config, depth: 0 }
    }

    /// The configuration this context enforces.
    #[must_use]
    pub const fn config(&self) -> &EvalConfig {
        &self.config
    }

    /// Number of user-function calls currently being evaluated.
    #[must_use]
    pub const fn depth(&self) -> usize {
        self.depth
    }

    pub(crate) const fn enter_call(&mut self) {
        self.depth += 1;
    }

    pub(crate) const fn exit_call(&mut self) {
        self.depth -= 1;
    }

    /// Evaluates a program in `env`.
    ///
    /// Statements run in order in the same environment, so a definition is
    /// visible to every statement after it.
    ///
    /// # Returns
    /// The value of the last statement, or the integer `0` for an empty
    /// program.
    pub fn eval_program(&mut self, program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
        let mut result = Value::Integer(0);

        for statement in &program.statements {
            result = self.eval_statement(statement, env)?;
        }

        debug!(result = %result, "evaluated program");
        Ok(result)
    }

    /// Evaluates a single statement.
    ///
    /// A definition binds its function in `env` and evaluates to that
    /// function; an expression statement evaluates to the expression's value.
    pub fn eval_statement(&mut self, statement: &Statement, env: &Rc<Environment>)
                          -> EvalResult<Value> {
        trace!(line = statement.line_number(), "evaluating statement");
        match statement {
            Statement::Definition(def) => Ok(Self::eval_definition(def, env)),
            Statement::Expression { expr, .. } => self.eval(expr, env),
        }
    }

    /// Evaluates an expression and returns the resulting value.
    ///
    /// This is the main entry point for expression evaluation. The evaluator
    /// dispatches on the expression variant; every variant has exactly one
    /// handler.
    ///
    /// # Parameters
    /// - `expr`: Expression to evaluate.
    /// - `env`: Innermost scope; identifiers resolve outward from here.
    pub fn eval(&mut self, expr: &Expr, env: &Rc<Environment>) -> EvalResult<Value> {
        ensure_sufficient_stack(|| match expr {
            Expr::Literal { value, .. } => Ok(Value::from(value)),
            Expr::Identifier { name, line } => Self::eval_identifier(name, *line, env),
            Expr::UnaryOp { op, expr, line } => self.eval_unary_op(*op, expr, *line, env),
            Expr::BinaryOp { left, op, right, line } => {
                self.eval_binary_op(left, *op, right, *line, env)
            },
            Expr::Call { callee,
                         arguments,
                         line, } => self.eval_call(callee, arguments, *line, env),
            Expr::VectorLiteral { elements, .. } => self.eval_vector_literal(elements, env),
            Expr::Index { target, index, line } => self.eval_index(target, index, *line, env),
        })
    }

    /// Looks up an identifier through the scope chain.
    ///
    /// # Errors
    /// `UnknownIdentifier` if neither `env` nor any of its ancestors binds
    /// `name`.
    pub fn eval_identifier(name: &str, line: usize, env: &Environment) -> EvalResult<Value> {
        env.lookup(name)
           .ok_or_else(|| RuntimeError::UnknownIdentifier { name: name.to_string(),
                                                            line })
    }
}

/// Evaluates `program` in `env` with the default configuration.
///
/// # Example
/// ```
/// use mexpr::interpreter::{
///     environment::Environment, evaluator::core::evaluate, lexer::tokenize, parser::parse,
///     value::core::Value,
/// };
///
/// let program = parse(&tokenize("f(x, y) = x + y f(2, 3)").unwrap()).unwrap();
/// let value = evaluate(&program, &Environment::root()).unwrap();
/// assert_eq!(value, Value::Integer(5));
/// ```
pub fn evaluate(program: &Program, env: &Rc<Environment>) -> EvalResult<Value> {
    Context::new().eval_program(program, env)
}
