//! Arithmetic operations: +, -, *, /
//!
//! Each operator takes the first operand as its accumulator and folds left
//! across the rest, requiring at least one operand.
//!
//! - `+`: Sum of all operands
//! - `-`: Subtract subsequent operands from the first, or negate if single
//! - `*`: Product of all operands
//! - `/`: Divide the first operand by each subsequent operand in turn
//!
//! Overflow wraps (two's-complement) rather than panicking; there is no `%`
//! in the fixed builtin table.

use super::check_arity_min;
use crate::env::Environment;
use crate::error::LispError;
use crate::value::Value;
use std::rc::Rc;

fn numbers(name: &str, argv: Vec<Value>) -> Result<Vec<i64>, Value> {
    check_arity_min(name, &argv, 1)?;
    let mut nums = Vec::with_capacity(argv.len());
    for (i, v) in argv.into_iter().enumerate() {
        match v {
            Value::Number(n) => nums.push(n),
            other => return Err(LispError::type_mismatch(name, crate::value::TYPE_NUMBER, &other, i).into()),
        }
    }
    Ok(nums)
}

/// Sums all operands.
///
/// # Examples
///
/// ```lisp
/// (+ 1 2 3) => 6
/// (+ 10) => 10
/// ```
///
/// # See Also
///
/// -, *, /
pub fn builtin_add(_env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    let nums = match numbers("+", argv) {
        Ok(n) => n,
        Err(e) => return e,
    };
    let mut acc = nums[0];
    for &n in &nums[1..] {
        acc = acc.wrapping_add(n);
    }
    Value::Number(acc)
}

/// Subtracts subsequent operands from the first.
///
/// With one operand, returns its negation.
///
/// # Examples
///
/// ```lisp
/// (- 10 3 2) => 5
/// (- 5) => -5
/// ```
///
/// # See Also
///
/// +, *, /
pub fn builtin_sub(_env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    let nums = match numbers("-", argv) {
        Ok(n) => n,
        Err(e) => return e,
    };
    if nums.len() == 1 {
        return Value::Number(nums[0].wrapping_neg());
    }
    let mut acc = nums[0];
    for &n in &nums[1..] {
        acc = acc.wrapping_sub(n);
    }
    Value::Number(acc)
}

/// Returns the product of all operands.
///
/// # Examples
///
/// ```lisp
/// (* 2 3 4) => 24
/// (* 5) => 5
/// ```
///
/// # See Also
///
/// +, -, /
pub fn builtin_mul(_env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    let nums = match numbers("*", argv) {
        Ok(n) => n,
        Err(e) => return e,
    };
    let mut acc = nums[0];
    for &n in &nums[1..] {
        acc = acc.wrapping_mul(n);
    }
    Value::Number(acc)
}

/// Divides the first operand by each subsequent operand in turn.
///
/// Integer division; truncates toward zero.
///
/// # Examples
///
/// ```lisp
/// (/ 20 4) => 5
/// (/ 100 2 5) => 10
/// ```
///
/// # See Also
///
/// +, -, *
pub fn builtin_div(_env: &Rc<Environment>, argv: Vec<Value>) -> Value {
    let nums = match numbers("/", argv) {
        Ok(n) => n,
        Err(e) => return e,
    };
    let mut acc = nums[0];
    for &n in &nums[1..] {
        if n == 0 {
            return LispError::DivideByZero.into();
        }
        acc = acc.wrapping_div(n);
    }
    Value::Number(acc)
}

pub fn register(env: &Rc<Environment>) {
    env.put("+", Value::builtin("+", builtin_add));
    env.put("-", Value::builtin("-", builtin_sub));
    env.put("*", Value::builtin("*", builtin_mul));
    env.put("/", Value::builtin("/", builtin_div));
}
