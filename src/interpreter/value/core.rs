use std::rc::Rc;

use crate::{ast::LiteralValue, interpreter::value::function::Function};

/// Represents a runtime value in the interpreter.
///
/// Booleans have no runtime form of their own: `!` and `?` evaluate to the
/// integers `1` and `0`, and comparisons produce those same integers.
#[derive(Debug, Clone)]
pub enum Value {
    /// A 64-bit signed integer.
    Integer(i64),
    /// A fixed-size vector of values.
    Vector(Rc<Vec<Self>>),
    /// A first-class function with its captured environment.
    Function(Rc<Function>),
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Integer(v)
    }
}

impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Integer(i64::from(v))
    }
}

impl From<Vec<Self>> for Value {
    fn from(v: Vec<Self>) -> Self {
        Self::Vector(Rc::new(v))
    }
}

impl From<Function> for Value {
    fn from(f: Function) -> Self {
        Self::Function(Rc::new(f))
    }
}

impl From<&LiteralValue> for Value {
    fn from(literal: &LiteralValue) -> Self {
        match literal {
            LiteralValue::Integer(n) => Self::Integer(*n),
            LiteralValue::Bool(b) => Self::from(*b),
        }
    }
}

/// Integers and vectors compare structurally; functions compare by identity.
impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Self::Integer(a), Self::Integer(b)) => a == b,
            (Self::Vector(a), Self::Vector(b)) => a == b,
            (Self::Function(a), Self::Function(b)) => Rc::ptr_eq(a, b),
            _ => false,
        }
    }
}

impl Value {
    /// Extracts the integer, if the value is one.
    ///
    /// # Example
    /// ```
    /// use mexpr::interpreter::value::core::Value;
    ///
    /// assert_eq!(Value::Integer(10).as_integer(), Some(10));
    /// assert_eq!(Value::from(vec![]).as_integer(), None);
    /// ```
    #[must_use]
    pub const fn as_integer(&self) -> Option<i64> {
        match self {
            Self::Integer(n) => Some(*n),
            _ => None,
        }
    }

    /// Short human description used in error messages, such as
    /// `integer 3`, `vector of length 2` or `function f`.
    #[must_use]
    pub fn describe(&self) -> String {
        match self {
            Self::Integer(n) => format!("integer {n}"),
            Self::Vector(v) => format!("vector of length {}", v.len()),
            Self::Function(f) => format!("function {}", f.name),
        }
    }
}

/// Renders a value the way a finished run prints it.
///
/// - integers in decimal,
/// - vectors as their integer elements separated by single spaces; elements
///   that are not integers are left out,
/// - functions as `<function name(params)>`.
impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Integer(n) => write!(f, "{n}"),
            Self::Vector(v) => {
                let mut first = true;
                for value in v.iter() {
                    if let Self::Integer(n) = value {
                        if !first {
                            write!(f, " ")?;
                        }
                        write!(f, "{n}")?;
                        first = false;
                    }
                }
                Ok(())
            },
            Self::Function(func) => write!(f, "{func}"),
        }
    }
}
