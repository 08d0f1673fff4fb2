//! List operations: list, head, tail, join, cons, len.
//!
//! All of these operate on (and return) `Q-Expression`s; `SExpr`-valued
//! arguments are rejected by type error like any other wrong-typed argument.

use super::{check_arity_exact, check_arity_min, expect_nonempty_qexpr, expect_qexpr};
use crate::env::Environment;
use crate::value::Value;
use std::rc::Rc;

/// Retags its argv as a Q-Expression.
pub fn builtin_list(_env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    Value::QExpr(argv)
}

/// Returns a Q-Expression containing only the first element.
pub fn builtin_head(_env: &Rc<Environment>, mut argv: Vec<Value>) -> Value {
    if let Err(e) = check_arity_exact("head", &argv, 1) {
        return e;
    }
    let items = match expect_nonempty_qexpr("head", argv.remove(0), 0) {
        Ok(items) => items,
        Err(e) => return e,
    };
    Value::QExpr(vec![items.into_iter().next().unwrap()])
}

/// Returns the input Q-Expression with its first element removed.
pub fn builtin_tail(_env: &Rc<Environment>, mut argv: Vec<Value>) -> Value {
    if let Err(e) = check_arity_exact("tail", &argv, 1) {
        return e;
    }
    let mut items = match expect_nonempty_qexpr("tail", argv.remove(0), 0) {
        Ok(items) => items,
        Err(e) => return e,
    };
    items.remove(0);
    Value::QExpr(items)
}

/// Concatenates one or more Q-Expressions, preserving order.
pub fn builtin_join(_env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    if let Err(e) = check_arity_min("join", &argv, 1) {
        return e;
    }
    let mut joined = Vec::new();
    for (i, v) in argv.into_iter().enumerate() {
        match expect_qexpr("join", v, i) {
            Ok(items) => joined.extend(items),
            Err(e) => return e,
        }
    }
    Value::QExpr(joined)
}

/// Prepends the first argument onto the second (a Q-Expression).
pub fn builtin_cons(_env: &Rc<Environment>, mut argv: Vec<Value>) -> Value {
    if let Err(e) = check_arity_exact("cons", &argv, 2) {
        return e;
    }
    let tail = match expect_qexpr("cons", argv.pop().unwrap(), 1) {
        Ok(items) => items,
        Err(e) => return e,
    };
    let head = argv.pop().unwrap();
    let mut result = vec![head];
    result.extend(tail);
    Value::QExpr(result)
}

/// Returns the number of elements in a Q-Expression.
pub fn builtin_len(_env: &Rc<Environment>, mut argv: Vec<Value>) -> Value {
    if let Err(e) = check_arity_exact("len", &argv, 1) {
        return e;
    }
    match expect_qexpr("len", argv.remove(0), 0) {
        Ok(items) => Value::Number(items.len() as i64),
        Err(e) => e,
    }
}

pub fn register(env: &Rc<Environment>) {
    env.put("list", Value::builtin("list", builtin_list));
    env.put("head", Value::builtin("head", builtin_head));
    env.put("tail", Value::builtin("tail", builtin_tail));
    env.put("join", Value::builtin("join", builtin_join));
    env.put("cons", Value::builtin("cons", builtin_cons));
    env.put("len", Value::builtin("len", builtin_len));
}
