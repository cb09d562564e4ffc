//! Operator signatures.
//!
//! A signature declares an operator's parameter types in call order plus
//! its return type. Dispatch checks arguments against the signature
//! before the operator runs, and nested handles use the first parameter
//! to decide which operators chain from a given value type.

use std::fmt;

use serde::{Deserialize, Serialize};

use crate::error::DispatchError;
use crate::value::{Value, ValueType};

/// Declared parameter and return types of an operator.
///
/// # Examples
///
/// ```
/// use fluentseq::{Signature, ValueType};
///
/// let sig = Signature::binary(ValueType::Int, ValueType::Int, ValueType::Int);
/// assert_eq!(sig.arity(), 2);
/// assert!(sig.chains_from(ValueType::Int));
/// assert!(!sig.chains_from(ValueType::Bool));
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Signature {
    params: Vec<ValueType>,
    returns: ValueType,
}

impl Signature {
    /// Creates a signature from a parameter list and a return type.
    #[must_use]
    pub fn new(params: Vec<ValueType>, returns: ValueType) -> Self {
        Self { params, returns }
    }

    /// Creates a one-parameter signature.
    #[must_use]
    pub fn unary(param: ValueType, returns: ValueType) -> Self {
        Self::new(vec![param], returns)
    }

    /// Creates a two-parameter signature.
    #[must_use]
    pub fn binary(first: ValueType, second: ValueType, returns: ValueType) -> Self {
        Self::new(vec![first, second], returns)
    }

    /// Number of declared parameters.
    #[must_use]
    pub fn arity(&self) -> usize {
        self.params.len()
    }

    /// Declared parameter types, in call order.
    #[must_use]
    pub fn params(&self) -> &[ValueType] {
        &self.params
    }

    /// Declared return type.
    #[must_use]
    pub const fn returns(&self) -> ValueType {
        self.returns
    }

    /// The first declared parameter, if any.
    ///
    /// A nullary signature has none and can never be chained onto a
    /// wrapped value.
    #[must_use]
    pub fn first_param(&self) -> Option<ValueType> {
        self.params.first().copied()
    }

    /// Returns true if an operator with this signature can consume a
    /// wrapped value of type `current` as its first argument.
    #[must_use]
    pub fn chains_from(&self, current: ValueType) -> bool {
        self.first_param().is_some_and(|p| p.accepts(current))
    }

    /// Checks a full argument list against this signature.
    ///
    /// `name` is used for error context only. Indices in
    /// [`DispatchError::ArgumentType`] refer to positions in the full
    /// parameter list; for chained calls the wrapped value occupies
    /// position 0.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::ArityMismatch` on a wrong argument count
    /// and `DispatchError::ArgumentType` on the first unassignable
    /// argument.
    pub fn check(&self, name: &str, args: &[Value]) -> Result<(), DispatchError> {
        if args.len() != self.params.len() {
            return Err(DispatchError::ArityMismatch {
                name: name.to_string(),
                expected: self.params.len(),
                actual: args.len(),
            });
        }
        for (index, (param, arg)) in self.params.iter().zip(args).enumerate() {
            let actual = arg.value_type();
            if !param.accepts(actual) {
                return Err(DispatchError::ArgumentType {
                    name: name.to_string(),
                    index,
                    expected: *param,
                    actual,
                });
            }
        }
        Ok(())
    }
}

impl fmt::Display for Signature {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "(")?;
        for (i, param) in self.params.iter().enumerate() {
            if i > 0 {
                write!(f, ", ")?;
            }
            write!(f, "{param}")?;
        }
        write!(f, ") -> {}", self.returns)
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_arity_and_params() {
        let sig = Signature::binary(ValueType::Int, ValueType::Int, ValueType::Int);
        assert_eq!(sig.arity(), 2);
        assert_eq!(sig.params(), &[ValueType::Int, ValueType::Int]);
        assert_eq!(sig.returns(), ValueType::Int);
        assert_eq!(sig.first_param(), Some(ValueType::Int));
    }

    #[test]
    fn test_chains_from_widening() {
        let sig = Signature::unary(ValueType::Float, ValueType::Float);
        assert!(sig.chains_from(ValueType::Float));
        assert!(sig.chains_from(ValueType::Int));
        assert!(!sig.chains_from(ValueType::Text));
    }

    #[test]
    fn test_nullary_never_chains() {
        let sig = Signature::new(vec![], ValueType::Int);
        assert_eq!(sig.first_param(), None);
        assert!(!sig.chains_from(ValueType::Int));
        assert!(!sig.chains_from(ValueType::Null));
    }

    #[test]
    fn test_check_accepts_valid_args() {
        let sig = Signature::binary(ValueType::Int, ValueType::Int, ValueType::Int);
        let args = [Value::Int(1), Value::Int(2)];
        assert!(sig.check("add", &args).is_ok());
    }

    #[test]
    fn test_check_rejects_wrong_arity() {
        let sig = Signature::binary(ValueType::Int, ValueType::Int, ValueType::Int);
        let err = sig.check("add", &[Value::Int(1)]).unwrap_err();
        assert_eq!(
            err,
            DispatchError::ArityMismatch {
                name: "add".to_string(),
                expected: 2,
                actual: 1,
            }
        );
    }

    #[test]
    fn test_check_rejects_wrong_type() {
        let sig = Signature::binary(ValueType::Int, ValueType::Int, ValueType::Int);
        let args = [Value::Int(1), Value::Text("two".into())];
        let err = sig.check("add", &args).unwrap_err();
        assert_eq!(
            err,
            DispatchError::ArgumentType {
                name: "add".to_string(),
                index: 1,
                expected: ValueType::Int,
                actual: ValueType::Text,
            }
        );
    }

    #[test]
    fn test_check_applies_widening() {
        let sig = Signature::unary(ValueType::Float, ValueType::Float);
        assert!(sig.check("half", &[Value::Int(4)]).is_ok());
        assert!(sig.check("half", &[Value::Float(4.0)]).is_ok());
    }

    #[test]
    fn test_display() {
        let sig = Signature::binary(ValueType::Int, ValueType::Float, ValueType::Bool);
        assert_eq!(sig.to_string(), "(int, float) -> bool");

        let nullary = Signature::new(vec![], ValueType::Null);
        assert_eq!(nullary.to_string(), "() -> null");
    }

    #[test]
    fn test_serialization_roundtrip() {
        let sig = Signature::binary(ValueType::Text, ValueType::Text, ValueType::Text);
        let json = serde_json::to_string(&sig).unwrap();
        let decoded: Signature = serde_json::from_str(&json).unwrap();
        assert_eq!(sig, decoded);
    }
}
