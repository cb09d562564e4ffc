//! Operators and operator sets.
//!
//! An [`Operator`] pairs a declared [`Signature`] with the function that
//! implements it. Operators are collected into an [`OperatorSet`], the
//! fixed named mapping a sequence is built from. Names in the set double
//! as the fluent member names on every handle.

use std::collections::BTreeMap;
use std::fmt;
use std::sync::Arc;

use crate::error::{OperatorError, SequenceError};
use crate::signature::Signature;
use crate::value::Value;

/// The function type operators implement.
///
/// Arguments arrive already checked against the declared signature, in
/// the declared order. For chained calls the wrapped value is the first
/// element. Failures are reported as [`OperatorError`] and surface to
/// the caller unchanged.
pub type OperatorFn = dyn Fn(&[Value]) -> Result<Value, OperatorError> + Send + Sync;

/// A named transformation over values.
///
/// Operators are pure by contract: for the same arguments they are
/// expected to produce the same result. The library never enforces
/// this, but the determinism guarantees of sequence handles assume it.
#[derive(Clone)]
pub struct Operator {
    signature: Signature,
    func: Arc<OperatorFn>,
}

impl Operator {
    /// Creates an operator from a signature and its implementation.
    pub fn new(
        signature: Signature,
        func: impl Fn(&[Value]) -> Result<Value, OperatorError> + Send + Sync + 'static,
    ) -> Self {
        Self {
            signature,
            func: Arc::new(func),
        }
    }

    /// The declared signature.
    #[must_use]
    pub const fn signature(&self) -> &Signature {
        &self.signature
    }

    /// Invokes the operator with a full argument list.
    ///
    /// `name` is used for error context only. The arguments are checked
    /// against the signature first; an operator's own failure propagates
    /// unchanged.
    ///
    /// # Errors
    ///
    /// Returns a dispatch error if `args` does not satisfy the
    /// signature, or the operator's [`OperatorError`] if the function
    /// itself fails.
    pub fn invoke(&self, name: &str, args: &[Value]) -> Result<Value, SequenceError> {
        self.signature.check(name, args)?;
        Ok((self.func)(args)?)
    }
}

impl fmt::Debug for Operator {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "Operator{}", self.signature)
    }
}

/// A fixed, named collection of operators.
///
/// Registration follows ordinary mapping semantics: inserting a name
/// that is already present replaces the existing operator, and the
/// displaced operator is returned so callers that consider duplicates a
/// mistake can detect them. An empty set is valid.
///
/// Iteration order is the sorted name order, so member listings are
/// deterministic.
#[derive(Debug, Clone, Default)]
pub struct OperatorSet {
    ops: BTreeMap<String, Operator>,
}

impl OperatorSet {
    /// Creates an empty set.
    #[must_use]
    pub fn new() -> Self {
        Self::default()
    }

    /// Registers an operator under `name`.
    ///
    /// Returns the operator previously registered under the same name,
    /// if any (last write wins).
    pub fn insert(&mut self, name: impl Into<String>, op: Operator) -> Option<Operator> {
        self.ops.insert(name.into(), op)
    }

    /// Registers an operator and returns the set, for fluent
    /// construction. Any displaced operator is discarded.
    #[must_use]
    pub fn with(mut self, name: impl Into<String>, op: Operator) -> Self {
        self.ops.insert(name.into(), op);
        self
    }

    /// Looks up an operator by name.
    #[must_use]
    pub fn get(&self, name: &str) -> Option<&Operator> {
        self.ops.get(name)
    }

    /// Returns true if `name` is registered.
    #[must_use]
    pub fn contains(&self, name: &str) -> bool {
        self.ops.contains_key(name)
    }

    /// Number of registered operators.
    #[must_use]
    pub fn len(&self) -> usize {
        self.ops.len()
    }

    /// Returns true if no operators are registered.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.ops.is_empty()
    }

    /// Registered names, in sorted order.
    pub fn names(&self) -> impl Iterator<Item = &str> + '_ {
        self.ops.keys().map(String::as_str)
    }

    /// Registered name/operator pairs, in sorted name order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Operator)> + '_ {
        self.ops.iter().map(|(name, op)| (name.as_str(), op))
    }

    /// Merges another set into this one. On name collisions the other
    /// set's operator wins.
    pub fn extend(&mut self, other: OperatorSet) {
        self.ops.extend(other.ops);
    }
}

impl FromIterator<(String, Operator)> for OperatorSet {
    fn from_iter<I: IntoIterator<Item = (String, Operator)>>(iter: I) -> Self {
        Self {
            ops: iter.into_iter().collect(),
        }
    }
}
