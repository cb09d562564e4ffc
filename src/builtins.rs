//! Ready-made operators.
//!
//! These cover common arithmetic, logic, and text transformations and
//! double as realistic fixtures for tests and benchmarks. Each
//! constructor returns a fresh [`Operator`]; the preset functions bundle
//! them into an [`OperatorSet`].
//!
//! Integer arithmetic is checked: overflow and division by zero are
//! reported as [`OperatorError`]s, which dispatch surfaces unchanged.

use crate::error::OperatorError;
use crate::operator::{Operator, OperatorSet};
use crate::signature::Signature;
use crate::value::{Value, ValueType};

fn int_binary(
    f: impl Fn(i64, i64) -> Result<i64, OperatorError> + Send + Sync + 'static,
) -> Operator {
    Operator::new(
        Signature::binary(ValueType::Int, ValueType::Int, ValueType::Int),
        move |args| match (&args[0], &args[1]) {
            (Value::Int(a), Value::Int(b)) => f(*a, *b).map(Value::Int),
            _ => Err(OperatorError::new("expected two int arguments")),
        },
    )
}

fn int_unary(f: impl Fn(i64) -> Result<i64, OperatorError> + Send + Sync + 'static) -> Operator {
    Operator::new(
        Signature::unary(ValueType::Int, ValueType::Int),
        move |args| match &args[0] {
            Value::Int(a) => f(*a).map(Value::Int),
            _ => Err(OperatorError::new("expected an int argument")),
        },
    )
}

/// `add(a, b) = a + b` over ints.
#[must_use]
pub fn add() -> Operator {
    int_binary(|a, b| {
        a.checked_add(b)
            .ok_or_else(|| OperatorError::new("integer overflow in add"))
    })
}

/// `sub(a, b) = a - b` over ints.
#[must_use]
pub fn sub() -> Operator {
    int_binary(|a, b| {
        a.checked_sub(b)
            .ok_or_else(|| OperatorError::new("integer overflow in sub"))
    })
}

/// `mul(a, b) = a * b` over ints.
#[must_use]
pub fn mul() -> Operator {
    int_binary(|a, b| {
        a.checked_mul(b)
            .ok_or_else(|| OperatorError::new("integer overflow in mul"))
    })
}

/// `div(a, b) = a / b` over ints. Division by zero is an operator
/// failure.
#[must_use]
pub fn div() -> Operator {
    int_binary(|a, b| {
        if b == 0 {
            return Err(OperatorError::new("division by zero"));
        }
        a.checked_div(b)
            .ok_or_else(|| OperatorError::new("integer overflow in div"))
    })
}

/// `double(a) = a * 2` over ints.
#[must_use]
pub fn double() -> Operator {
    int_unary(|a| {
        a.checked_mul(2)
            .ok_or_else(|| OperatorError::new("integer overflow in double"))
    })
}

/// `neg(a) = -a` over ints.
#[must_use]
pub fn neg() -> Operator {
    int_unary(|a| {
        a.checked_neg()
            .ok_or_else(|| OperatorError::new("integer overflow in neg"))
    })
}

/// `to_bool(a)`: zero is false, everything else is true.
#[must_use]
pub fn to_bool() -> Operator {
    Operator::new(
        Signature::unary(ValueType::Int, ValueType::Bool),
        |args| match &args[0] {
            Value::Int(a) => Ok(Value::Bool(*a != 0)),
            _ => Err(OperatorError::new("expected an int argument")),
        },
    )
}

/// `not(b) = !b`.
#[must_use]
pub fn not() -> Operator {
    Operator::new(
        Signature::unary(ValueType::Bool, ValueType::Bool),
        |args| match &args[0] {
            Value::Bool(b) => Ok(Value::Bool(!b)),
            _ => Err(OperatorError::new("expected a bool argument")),
        },
    )
}

/// `to_int(b)`: true is 1, false is 0.
#[must_use]
pub fn to_int() -> Operator {
    Operator::new(
        Signature::unary(ValueType::Bool, ValueType::Int),
        |args| match &args[0] {
            Value::Bool(b) => Ok(Value::Int(i64::from(*b))),
            _ => Err(OperatorError::new("expected a bool argument")),
        },
    )
}

/// `concat(a, b)`: text concatenation.
#[must_use]
pub fn concat() -> Operator {
    Operator::new(
        Signature::binary(ValueType::Text, ValueType::Text, ValueType::Text),
        |args| match (&args[0], &args[1]) {
            (Value::Text(a), Value::Text(b)) => {
                let mut out = String::with_capacity(a.len() + b.len());
                out.push_str(a);
                out.push_str(b);
                Ok(Value::Text(out))
            }
            _ => Err(OperatorError::new("expected two text arguments")),
        },
    )
}

/// `length(s)`: byte length of the text.
#[must_use]
pub fn length() -> Operator {
    Operator::new(
        Signature::unary(ValueType::Text, ValueType::Int),
        |args| match &args[0] {
            Value::Text(s) => Ok(Value::Int(
                i64::try_from(s.len()).unwrap_or(i64::MAX),
            )),
            _ => Err(OperatorError::new("expected a text argument")),
        },
    )
}

/// The integer arithmetic operators: `add`, `sub`, `mul`, `div`,
/// `double`, `neg`.
#[must_use]
pub fn arithmetic() -> OperatorSet {
    OperatorSet::new()
        .with("add", add())
        .with("sub", sub())
        .with("mul", mul())
        .with("div", div())
        .with("double", double())
        .with("neg", neg())
}

/// The logic operators: `to_bool`, `not`, `to_int`.
#[must_use]
pub fn logic() -> OperatorSet {
    OperatorSet::new()
        .with("to_bool", to_bool())
        .with("not", not())
        .with("to_int", to_int())
}

/// The text operators: `concat`, `length`.
#[must_use]
pub fn text() -> OperatorSet {
    OperatorSet::new()
        .with("concat", concat())
        .with("length", length())
}

/// All built-in operators in one set.
#[must_use]
pub fn standard() -> OperatorSet {
    let mut set = arithmetic();
    set.extend(logic());
    set.extend(text());
    set
}
