//! The evaluator-facing built-ins: eval, def, =, \.

use super::{check_arity_exact, check_arity_min, expect_qexpr};
use crate::env::Environment;
use crate::error::LispError;
use crate::value::{Function, Lambda, Value};
use std::rc::Rc;

/// Retags a Q-Expression as an S-Expression and evaluates it in the calling
/// environment.
pub fn builtin_eval(env: &Rc<Environment>, mut argv: Vec<Value>) -> Value {
    if let Err(e) = check_arity_exact("eval", &argv, 1) {
        return e;
    }
    let items = match expect_qexpr("eval", argv.remove(0), 0) {
        Ok(items) => items,
        Err(e) => return e,
    };
    crate::eval::eval(Value::SExpr(items), env)
}

enum BindTarget {
    Global,
    Local,
}

fn bind(env: &Rc<Environment>, mut argv: Vec<Value>, name: &'static str, target: BindTarget) -> Value {
    if let Err(e) = check_arity_min(name, &argv, 2) {
        return e;
    }
    let symbols = match expect_qexpr(name, argv.remove(0), 0) {
        Ok(items) => items,
        Err(e) => return e,
    };
    for symbol in &symbols {
        if !matches!(symbol, Value::Symbol(_)) {
            return LispError::non_symbol_formal(name).into();
        }
    }
    if symbols.len() != argv.len() {
        return LispError::definition_count_mismatch(name, symbols.len(), argv.len()).into();
    }
    for (symbol, value) in symbols.into_iter().zip(argv.into_iter()) {
        if let Value::Symbol(name_sym) = symbol {
            match target {
                BindTarget::Global => env.def(&name_sym, value),
                BindTarget::Local => env.put(&name_sym, value),
            }
        }
    }
    Value::unit()
}

/// Binds each symbol in the first argument to the matching subsequent
/// value, in the global (root) environment.
pub fn builtin_def(env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    bind(env, argv, "def", BindTarget::Global)
}

/// Same as `def`, but binds in the calling (local) environment.
pub fn builtin_put(env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    bind(env, argv, "=", BindTarget::Local)
}

/// Constructs a lambda from a Q-Expression of formal symbols and a
/// Q-Expression body. The lambda's own environment starts out empty and
/// parentless; see `eval::call_lambda` for when it is populated and
/// reparented.
pub fn builtin_lambda(_env: &Rc<Environment>, mut argv: Vec<Value>) -> Value {
    if let Err(e) = check_arity_exact("\\", &argv, 2) {
        return e;
    }
    let body = argv.pop().unwrap();
    let formals = argv.pop().unwrap();

    let formals_items = match expect_qexpr("\\", formals, 0) {
        Ok(items) => items,
        Err(e) => return e,
    };
    let body_items = match expect_qexpr("\\", body, 1) {
        Ok(items) => items,
        Err(e) => return e,
    };

    for symbol in &formals_items {
        if !matches!(symbol, Value::Symbol(_)) {
            return LispError::non_symbol_formal("\\").into();
        }
    }
    if let Some(amp_pos) = formals_items
        .iter()
        .position(|s| matches!(s, Value::Symbol(name) if name == "&"))
    {
        if formals_items.len() < 2 || amp_pos != formals_items.len() - 2 {
            return LispError::malformed_rest_binder("\\").into();
        }
    }

    Value::Function(Function::Lambda(Lambda {
        formals: Box::new(Value::QExpr(formals_items)),
        body: Box::new(Value::QExpr(body_items)),
        env: Environment::new(),
    }))
}

pub fn register(env: &Rc<Environment>) {
    env.put("eval", Value::builtin("eval", builtin_eval));
    env.put("def", Value::builtin("def", builtin_def));
    env.put("=", Value::builtin("=", builtin_put));
    env.put("\\", Value::builtin("\\", builtin_lambda));
}
