use std::{cell::RefCell, collections::HashMap, fmt, rc::Rc};

use crate::interpreter::value::core::Value;

/// A lexical scope frame: name-to-value bindings plus an optional parent.
///
/// Frames are always handled through `Rc<Environment>`. Function values keep
/// the frame they were defined in alive, and every call frame keeps its
/// parent (the callee's captured frame) alive. Lookups walk outward through
/// the parents; definitions always write into the frame they are called on.
///
/// A function stored in the very frame it captures forms an `Rc` cycle. Such
/// frames live until the process exits.
pub struct Environment {
    values: RefCell<HashMap<String, Value>>,
    parent: Option<Rc<Self>>,
}

impl Environment {
    /// Creates the root frame of a program run. It has no parent.
    #[must_use]
    pub fn root() -> Rc<Self> {
        Rc::new(Self { values: RefCell::new(HashMap::new()),
                       parent: None, })
    }

    /// Creates an empty frame whose lookups fall back to `parent`.
    #[must_use]
    pub fn child(parent: &Rc<Self>) -> Rc<Self> {
        Rc::new(Self { values: RefCell::new(HashMap::new()),
                       parent: Some(Rc::clone(parent)), })
    }

    /// Binds `name` in this frame, replacing an earlier binding of the same
    /// name in this frame only.
    pub fn define(&self, name: impl Into<String>, value: Value) {
        self.values.borrow_mut().insert(name.into(), value);
    }

    /// Resolves `name`, starting in this frame and walking outward.
    ///
    /// # Returns
    /// The bound value, or `None` if no frame in the chain binds `name`.
    ///
    /// # Example
    /// ```
    /// use mexpr::interpreter::{environment::Environment, value::core::Value};
    ///
    /// let root = Environment::root();
    /// root.define("x", Value::Integer(5));
    /// let inner = Environment::child(&root);
    ///
    /// assert_eq!(inner.lookup("x"), Some(Value::Integer(5)));
    /// assert_eq!(inner.lookup("y"), None);
    /// ```
    #[must_use]
    pub fn lookup(&self, name: &str) -> Option<Value> {
        let mut frame = self;
        loop {
            if let Some(value) = frame.values.borrow().get(name) {
                return Some(value.clone());
            }
            frame = frame.parent.as_deref()?;
        }
    }

    /// Returns `true` if `name` is bound in this frame itself.
    #[must_use]
    pub fn contains_local(&self, name: &str) -> bool {
        self.values.borrow().contains_key(name)
    }

    /// The enclosing frame, if any.
    #[must_use]
    pub fn parent(&self) -> Option<&Rc<Self>> {
        self.parent.as_ref()
    }
}

impl fmt::Debug for Environment {
    // Bindings may hold functions capturing this very frame, so only the
    // names are printed.
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let values = self.values.borrow();
        let mut names: Vec<&String> = values.keys().collect();
        names.sort();
        f.debug_struct("Environment")
         .field("names", &names)
         .field("has_parent", &self.parent.is_some())
         .finish()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn child_sees_parent_bindings() {
        let root = Environment::root();
        root.define("x", Value::Integer(1));
        let child = Environment::child(&root);
        assert_eq!(child.lookup("x"), Some(Value::Integer(1)));
        assert!(!child.contains_local("x"));
    }

    #[test]
    fn child_bindings_shadow_without_touching_parent() {
        let root = Environment::root();
        root.define("x", Value::Integer(1));
        let child = Environment::child(&root);
        child.define("x", Value::Integer(2));
        assert_eq!(child.lookup("x"), Some(Value::Integer(2)));
        assert_eq!(root.lookup("x"), Some(Value::Integer(1)));
    }

    #[test]
    fn parent_does_not_see_child_bindings() {
        let root = Environment::root();
        let child = Environment::child(&root);
        child.define("y", Value::Integer(3));
        assert_eq!(root.lookup("y"), None);
        assert!(root.parent().is_none());
        assert!(child.parent().is_some());
    }

    #[test]
    fn later_bindings_are_visible_through_shared_frames() {
        let root = Environment::root();
        let child = Environment::child(&root);
        root.define("late", Value::Integer(7));
        assert_eq!(child.lookup("late"), Some(Value::Integer(7)));
    }
}
