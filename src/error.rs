// ABOUTME: Diagnostic message formatting shared by the built-ins and the evaluator.
//
// Every diagnostic in this module is folded into a `Value::Error` at the
// point it arises, rather than threaded as a `Result::Err` - in this
// language errors are themselves runtime values (see eval::eval_sexpr).

use crate::value::Value;
use thiserror::Error;

#[derive(Error, Debug, Clone, PartialEq, Eq)]
pub enum LispError {
    #[error("bad number")]
    BadNumber,

    #[error("Unbound symbol '{0}'!")]
    UnboundSymbol(String),

    #[error("first element is not a function")]
    NotCallable,

    #[error("Function '{function}' expects {expected} argument but got {actual}.")]
    Arity {
        function: String,
        expected: usize,
        actual: usize,
    },

    #[error("Function '{function}' expects a {expected} but got {article} {actual} at index {index} instead.")]
    TypeMismatch {
        function: String,
        expected: &'static str,
        actual: &'static str,
        article: &'static str,
        index: usize,
    },

    #[error("Function '{function}' passed {{}}!")]
    EmptySequence { function: String },

    #[error("cannot divide by zero")]
    DivideByZero,

    #[error("Function '{function}' cannot define {given} symbols for {values} values!")]
    DefinitionCountMismatch {
        function: String,
        given: usize,
        values: usize,
    },

    #[error("Function '{function}' cannot define non-symbol!")]
    NonSymbolFormal { function: String },

    #[error("Function passed too many arguments. Got {given} but expected {total}")]
    TooManyArguments { given: usize, total: usize },

    #[error("Function '{function}' formals invalid: '&' must be followed by exactly one symbol!")]
    MalformedRestBinder { function: String },
}

impl From<LispError> for Value {
    fn from(err: LispError) -> Value {
        Value::Error(err.to_string())
    }
}

fn article(word: &str) -> &'static str {
    match word.chars().next() {
        Some(c) if "AEIOUaeiou".contains(c) => "an",
        _ => "a",
    }
}

impl LispError {
    pub fn type_mismatch(function: &str, expected: &'static str, actual: &Value, index: usize) -> LispError {
        let actual_name = actual.type_name();
        LispError::TypeMismatch {
            function: function.to_string(),
            expected,
            actual: actual_name,
            article: article(actual_name),
            index,
        }
    }

    pub fn arity(function: &str, expected: usize, actual: usize) -> LispError {
        LispError::Arity {
            function: function.to_string(),
            expected,
            actual,
        }
    }

    pub fn empty_sequence(function: &str) -> LispError {
        LispError::EmptySequence {
            function: function.to_string(),
        }
    }

    pub fn definition_count_mismatch(function: &str, given: usize, values: usize) -> LispError {
        LispError::DefinitionCountMismatch {
            function: function.to_string(),
            given,
            values,
        }
    }

    pub fn non_symbol_formal(function: &str) -> LispError {
        LispError::NonSymbolFormal {
            function: function.to_string(),
        }
    }

    pub fn malformed_rest_binder(function: &str) -> LispError {
        LispError::MalformedRestBinder {
            function: function.to_string(),
        }
    }
}
