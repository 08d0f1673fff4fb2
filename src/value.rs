// ABOUTME: The runtime value model: the tagged sum every other component operates on.

use crate::env::Environment;
use std::fmt;
use std::rc::Rc;

pub const TYPE_NUMBER: &str = "Number";
pub const TYPE_SYMBOL: &str = "Symbol";
pub const TYPE_ERROR: &str = "Error";
pub const TYPE_SEXPR: &str = "S-Expression";
pub const TYPE_QEXPR: &str = "Q-Expression";
pub const TYPE_FUNCTION: &str = "Function";

pub type BuiltinFn = fn(&Rc<Environment>, Vec<Value>) -> Value;

#[derive(Clone, Copy)]
pub struct Builtin {
    pub name: &'static str,
    pub func: BuiltinFn,
}

impl fmt::Debug for Builtin {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Builtin({})", self.name)
    }
}

// formals/body are always Value::QExpr; env starts empty and parentless,
// populated and reparented by eval::call_lambda at call time.
#[derive(Debug, Clone)]
pub struct Lambda {
    pub formals: Box<Value>,
    pub body: Box<Value>,
    pub env: Rc<Environment>,
}

#[derive(Debug, Clone)]
pub enum Function {
    Builtin(Builtin),
    Lambda(Lambda),
}

#[derive(Debug, Clone)]
pub enum Value {
    Number(i64),
    Symbol(String),
    Error(String),
    SExpr(Vec<Value>),
    QExpr(Vec<Value>),
    Function(Function),
}

impl Value {
    pub fn error(message: impl Into<String>) -> Value {
        Value::Error(message.into())
    }

    pub fn unit() -> Value {
        Value::SExpr(Vec::new())
    }

    pub fn builtin(name: &'static str, func: BuiltinFn) -> Value {
        Value::Function(Function::Builtin(Builtin { name, func }))
    }

    pub fn is_error(&self) -> bool {
        matches!(self, Value::Error(_))
    }

    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Number(_) => TYPE_NUMBER,
            Value::Symbol(_) => TYPE_SYMBOL,
            Value::Error(_) => TYPE_ERROR,
            Value::SExpr(_) => TYPE_SEXPR,
            Value::QExpr(_) => TYPE_QEXPR,
            Value::Function(_) => TYPE_FUNCTION,
        }
    }

    pub fn append(&mut self, child: Value) {
        match self {
            Value::SExpr(items) | Value::QExpr(items) => items.push(child),
            _ => {}
        }
    }
}

fn join_items(items: &[Value]) -> String {
    items
        .iter()
        .map(|v| v.to_string())
        .collect::<Vec<_>>()
        .join(" ")
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Symbol(s) => write!(f, "{}", s),
            Value::Error(msg) => write!(f, "Error: {}", msg),
            Value::SExpr(items) => write!(f, "({})", join_items(items)),
            Value::QExpr(items) => write!(f, "{{{}}}", join_items(items)),
            Value::Function(Function::Builtin(_)) => write!(f, "<builtin>"),
            Value::Function(Function::Lambda(l)) => write!(f, "(\\ {} {})", l.formals, l.body),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn number_display() {
        assert_eq!(Value::Number(42).to_string(), "42");
        assert_eq!(Value::Number(-7).to_string(), "-7");
    }

    #[test]
    fn symbol_display() {
        assert_eq!(Value::Symbol("foo".into()).to_string(), "foo");
    }

    #[test]
    fn error_display() {
        assert_eq!(Value::error("bad number").to_string(), "Error: bad number");
    }

    #[test]
    fn sexpr_display_nested() {
        let v = Value::SExpr(vec![
            Value::Symbol("+".into()),
            Value::Number(1),
            Value::QExpr(vec![Value::Number(2), Value::Number(3)]),
        ]);
        assert_eq!(v.to_string(), "(+ 1 {2 3})");
    }

    #[test]
    fn unit_display_is_empty_parens() {
        assert_eq!(Value::unit().to_string(), "()");
    }

    #[test]
    fn type_names_match_diagnostic_labels() {
        assert_eq!(Value::Number(1).type_name(), "Number");
        assert_eq!(Value::Symbol("x".into()).type_name(), "Symbol");
        assert_eq!(Value::error("e").type_name(), "Error");
        assert_eq!(Value::SExpr(vec![]).type_name(), "S-Expression");
        assert_eq!(Value::QExpr(vec![]).type_name(), "Q-Expression");
    }

    #[test]
    fn append_pushes_onto_sequence() {
        let mut v = Value::QExpr(vec![Value::Number(1)]);
        v.append(Value::Number(2));
        assert_eq!(v.to_string(), "{1 2}");
    }
}
