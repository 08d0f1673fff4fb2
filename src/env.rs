// ABOUTME: Symbol-to-value bindings with a mutable parent chain rooted at the global scope.

use crate::error::LispError;
use crate::value::Value;
use std::cell::RefCell;
use std::collections::HashMap;
use std::rc::Rc;

/// A lexical frame. `parent` is mutable because a lambda's working
/// environment is reparented to the caller's environment at the moment a
/// call is fully saturated (see `eval::call_lambda`) rather than at the
/// point the lambda was defined.
#[derive(Debug)]
pub struct Environment {
    bindings: RefCell<HashMap<String, Value>>,
    parent: RefCell<Option<Rc<Environment>>>,
}

impl Environment {
    pub fn new() -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(None),
        })
    }

    pub fn with_parent(parent: Rc<Environment>) -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(HashMap::new()),
            parent: RefCell::new(Some(parent)),
        })
    }

    /// Walks the chain toward the root; returns a copy of the bound value,
    /// or an `Error` naming the unbound symbol.
    pub fn get(&self, name: &str) -> Value {
        if let Some(value) = self.bindings.borrow().get(name) {
            return value.clone();
        }
        match self.parent.borrow().as_ref() {
            Some(parent) => parent.get(name),
            None => LispError::UnboundSymbol(name.to_string()).into(),
        }
    }

    /// Binds in *this* environment, overwriting any existing local value.
    pub fn put(&self, name: &str, value: Value) {
        self.bindings.borrow_mut().insert(name.to_string(), value);
    }

    /// Walks to the root environment and binds there.
    pub fn def(self: &Rc<Environment>, name: &str, value: Value) {
        self.root().put(name, value);
    }

    pub fn set_parent(&self, parent: Rc<Environment>) {
        *self.parent.borrow_mut() = Some(parent);
    }

    /// An independent deep copy of this environment's bindings; the parent
    /// pointer is shared, not copied, per the Environment.copy contract.
    pub fn deep_clone(&self) -> Rc<Environment> {
        Rc::new(Environment {
            bindings: RefCell::new(self.bindings.borrow().clone()),
            parent: RefCell::new(self.parent.borrow().clone()),
        })
    }

    fn root(self: &Rc<Environment>) -> Rc<Environment> {
        let mut current = Rc::clone(self);
        loop {
            let next = current.parent.borrow().clone();
            match next {
                Some(parent) => current = parent,
                None => return current,
            }
        }
    }
}
