// ABOUTME: Expression evaluation: symbol lookup, s-expression dispatch, call semantics.

use crate::env::Environment;
use crate::error::LispError;
use crate::value::{Function, Value};
use std::rc::Rc;

/// Evaluates a value in an environment. Anything other than a `Symbol` or
/// an `SExpr` is returned unchanged - including `QExpr`, which is inert.
pub fn eval(expr: Value, env: &Rc<Environment>) -> Value {
    match expr {
        Value::Symbol(name) => env.get(&name),
        Value::SExpr(items) => eval_sexpr(items, env),
        other => other,
    }
}

fn eval_sexpr(items: Vec<Value>, env: &Rc<Environment>) -> Value {
    let mut evaluated: Vec<Value> = Vec::with_capacity(items.len());
    for item in items {
        evaluated.push(eval(item, env));
    }

    if let Some(pos) = evaluated.iter().position(Value::is_error) {
        return evaluated.swap_remove(pos);
    }

    if evaluated.is_empty() {
        return Value::SExpr(evaluated);
    }

    if evaluated.len() == 1 {
        return evaluated.pop().unwrap();
    }

    let mut rest = evaluated.into_iter();
    let head = rest.next().unwrap();
    let argv: Vec<Value> = rest.collect();

    match head {
        Value::Function(f) => call_function(f, argv, env),
        _ => LispError::NotCallable.into(),
    }
}

fn call_function(f: Function, argv: Vec<Value>, caller_env: &Rc<Environment>) -> Value {
    match f {
        Function::Builtin(b) => (b.func)(caller_env, argv),
        Function::Lambda(lambda) => call_lambda(lambda, argv, caller_env),
    }
}

/// Performs one call step against a lambda, per the call semantics: binds as
/// many formals as argv supplies (including the `&` rest binder), then either
/// evaluates the body (call fully saturated) or returns a new, partially
/// applied lambda.
///
/// The lambda's stored environment is always deep-cloned before any binding
/// happens, so a partial-application chain never mutates - or shares state
/// with - the lambda value it started from.
pub fn call_lambda(lambda: crate::value::Lambda, mut argv: Vec<Value>, caller_env: &Rc<Environment>) -> Value {
    let given = argv.len();

    let mut formals = match *lambda.formals {
        Value::QExpr(items) => items,
        other => return LispError::type_mismatch("\\", crate::value::TYPE_QEXPR, &other, 0).into(),
    };
    let total = formals.len();
    let working_env = lambda.env.deep_clone();

    while !argv.is_empty() {
        if formals.is_empty() {
            return LispError::TooManyArguments { given, total }.into();
        }

        let symbol = match formals.remove(0) {
            Value::Symbol(s) => s,
            _ => unreachable!("lambda formals invariant: every formal is a Symbol"),
        };

        if symbol == "&" {
            if formals.len() != 1 {
                return LispError::malformed_rest_binder("\\").into();
            }
            let rest_name = match formals.remove(0) {
                Value::Symbol(s) => s,
                _ => unreachable!("lambda formals invariant: every formal is a Symbol"),
            };
            working_env.put(&rest_name, Value::QExpr(std::mem::take(&mut argv)));
            break;
        }

        let value = argv.remove(0);
        working_env.put(&symbol, value);
    }

    // No rest arguments were supplied but a `& rest` pair remains: bind an
    // empty Q-Expression and consume the sentinel pair.
    if matches!(formals.first(), Some(Value::Symbol(s)) if s == "&") {
        formals.remove(0);
        if let Some(Value::Symbol(rest_name)) = formals.first().cloned() {
            formals.remove(0);
            working_env.put(&rest_name, Value::QExpr(Vec::new()));
        }
    }

    if formals.is_empty() {
        working_env.set_parent(Rc::clone(caller_env));
        let body_items = match *lambda.body {
            Value::QExpr(items) => items,
            other => return LispError::type_mismatch("\\", crate::value::TYPE_QEXPR, &other, 1).into(),
        };
        eval(Value::SExpr(body_items), &working_env)
    } else {
        Value::Function(Function::Lambda(crate::value::Lambda {
            formals: Box::new(Value::QExpr(formals)),
            body: lambda.body,
            env: working_env,
        }))
    }
}
