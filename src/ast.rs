use std::{mem, rc::Rc};

/// Represents a literal value in the language.
///
/// `LiteralValue` covers the raw constants that can appear directly in source
/// code. Booleans are kept distinct here so the tree mirrors the source; the
/// evaluator reduces them to the integers `1` and `0`.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LiteralValue {
    /// A 64-bit signed integer literal.
    Integer(i64),
    /// A boolean literal: `!` (true) or `?` (false).
    Bool(bool),
}

impl From<i64> for LiteralValue {
    fn from(value: i64) -> Self {
        Self::Integer(value)
    }
}

impl From<bool> for LiteralValue {
    fn from(value: bool) -> Self {
        Self::Bool(value)
    }
}

/// An abstract syntax tree (AST) node representing an expression in the
/// language.
///
/// Every node owns its children exclusively. The only shared piece of the tree
/// is a definition body (see [`FunctionDef`]), which function values hold on
/// to after the definition has been evaluated.
#[derive(Debug, Clone, PartialEq)]
pub enum Expr {
    /// An integer or boolean literal.
    Literal {
        /// The constant value.
        value: LiteralValue,
        /// Line number in the source code.
        line:  usize,
    },
    /// Reference to a binding by name.
    Identifier {
        /// Name of the binding.
        name: String,
        /// Line number in the source code.
        line: usize,
    },
    /// A unary operation (negation).
    UnaryOp {
        /// The unary operator to apply.
        op:   UnaryOperator,
        /// The operand expression.
        expr: Box<Self>,
        /// Line number in the source code.
        line: usize,
    },
    /// A binary operation (arithmetic, comparison or bitwise test).
    BinaryOp {
        /// Left operand.
        left:  Box<Self>,
        /// The operator.
        op:    BinaryOperator,
        /// Right operand.
        right: Box<Self>,
        /// Line number in the source code.
        line:  usize,
    },
    /// Call of an arbitrary callee expression (e.g. `f(x)` or `f(1)(2)`).
    Call {
        /// Expression producing the function to call.
        callee:    Box<Self>,
        /// Arguments to the function, evaluated in the caller's scope.
        arguments: Vec<Self>,
        /// Line number in the source code.
        line:      usize,
    },
    /// Vector literal expression (e.g. `[1, 2, 3]`).
    VectorLiteral {
        /// Elements of the vector.
        elements: Vec<Self>,
        /// Line number in the source code.
        line:     usize,
    },
    /// Index expression (e.g. `v[2]`).
    Index {
        /// The expression being indexed.
        target: Box<Self>,
        /// The index to access.
        index:  Box<Self>,
        /// Line number in the source code.
        line:   usize,
    },
}

impl Expr {
    /// Gets the line number from `self`.
    /// ## Example
    /// ```
    /// use mexpr::ast::Expr;
    ///
    /// let expr = Expr::Identifier { name: "x".to_string(),
    ///                               line: 5, };
    ///
    /// assert_eq!(expr.line_number(), 5);
    /// ```
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Literal { line, .. }
            | Self::Identifier { line, .. }
            | Self::UnaryOp { line, .. }
            | Self::BinaryOp { line, .. }
            | Self::Call { line, .. }
            | Self::VectorLiteral { line, .. }
            | Self::Index { line, .. } => *line,
        }
    }
}

/// Expressions nest as deep as the source does, so the default drop glue
/// could exhaust the native stack. Children are detached onto a work list and
/// dropped one level at a time instead.
impl Drop for Expr {
    fn drop(&mut self) {
        let mut pending = Vec::new();
        self.detach_children(&mut pending);

        while let Some(mut expr) = pending.pop() {
            expr.detach_children(&mut pending);
        }
    }
}

impl Expr {
    const fn has_children(&self) -> bool {
        !matches!(self, Self::Literal { .. } | Self::Identifier { .. })
    }

    /// Moves every child that has children of its own into `pending`, leaving
    /// a leaf in its place.
    fn detach_children(&mut self, pending: &mut Vec<Self>) {
        let mut detach = |child: &mut Self| {
            if child.has_children() {
                let line = child.line_number();
                pending.push(mem::replace(child, Self::Literal { value: LiteralValue::Integer(0),
                                                                 line }));
            }
        };

        match self {
            Self::Literal { .. } | Self::Identifier { .. } => {},
            Self::UnaryOp { expr, .. } => detach(&mut **expr),
            Self::BinaryOp { left, right, .. } => {
                detach(&mut **left);
                detach(&mut **right);
            },
            Self::Call { callee, arguments, .. } => {
                detach(&mut **callee);
                arguments.iter_mut().for_each(&mut detach);
            },
            Self::VectorLiteral { elements, .. } => elements.iter_mut().for_each(&mut detach),
            Self::Index { target, index, .. } => {
                detach(&mut **target);
                detach(&mut **index);
            },
        }
    }
}

/// Represents a user-defined function definition, `name(a, b) = body`.
///
/// The body sits behind an `Rc` so that every function value created from
/// this definition can keep it alive without copying the subtree.
#[derive(Debug, Clone, PartialEq)]
pub struct FunctionDef {
    /// The name of the function.
    pub name:   String,
    /// The parameter names, in declaration order.
    pub params: Vec<String>,
    /// The body expression evaluated when the function is called.
    pub body:   Rc<Expr>,
    /// Line number in the source code.
    pub line:   usize,
}

/// Represents a top-level statement.
#[derive(Debug, Clone, PartialEq)]
pub enum Statement {
    /// A function definition. Evaluates to the function value it binds.
    Definition(FunctionDef),
    /// A standalone expression evaluated for its result.
    Expression {
        /// The expression to evaluate.
        expr: Expr,
        /// Line number in the source code.
        line: usize,
    },
}

impl Statement {
    /// Gets the line number the statement starts on.
    #[must_use]
    pub const fn line_number(&self) -> usize {
        match self {
            Self::Definition(def) => def.line,
            Self::Expression { line, .. } => *line,
        }
    }
}

/// The root of a parsed source text: its statements in source order.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Program {
    /// Statements evaluated one after another in a shared top-level scope.
    pub statements: Vec<Statement>,
}

/// Represents a binary operator.
///
/// Every operator works on integers only. Comparisons and the bitwise tests
/// produce `1` or `0`.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum BinaryOperator {
    /// Addition (`+`)
    Add,
    /// Subtraction (`-`)
    Sub,
    /// Multiplication (`*`)
    Mul,
    /// Truncating division (`/`)
    Div,
    /// Equality (`^`)
    Equal,
    /// Greater than (`>`)
    Greater,
    /// Less than (`<`)
    Less,
    /// Bitwise-and test (`&`): `1` if `a & b` is non-zero.
    And,
    /// Bitwise-or test (`|`): `1` if `a | b` is non-zero.
    Or,
}

/// Represents a unary operator.
#[derive(Debug, Copy, Clone, PartialEq, Eq)]
pub enum UnaryOperator {
    /// Arithmetic negation (e.g. `-x`).
    Negate,
}

impl std::fmt::Display for BinaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        use BinaryOperator::{Add, And, Div, Equal, Greater, Less, Mul, Or, Sub};
        let operator = match self {
            Add => "+",
            Sub => "-",
            Mul => "*",
            Div => "/",
            Equal => "^",
            Greater => ">",
            Less => "<",
            And => "&",
            Or => "|",
        };
        write!(f, "{operator}")
    }
}

impl std::fmt::Display for UnaryOperator {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Negate => write!(f, "-"),
        }
    }
}
