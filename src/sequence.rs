//! Sequence handles: construction and fluent dispatch.
//!
//! [`build`] turns an [`OperatorSet`] into a [`Sequence`], the reusable
//! root handle. Calling an operator on the root wraps its result in an
//! immutable [`Step`]; a step exposes exactly the operators whose first
//! parameter accepts the wrapped value's type, plus the result accessor.
//!
//! Handles are snapshots. Dispatch never mutates the receiver, so a
//! handle can be branched any number of times and each branch carries
//! its own independent value.

use std::collections::BTreeSet;
use std::sync::Arc;

use crate::error::{DispatchError, SequenceResult};
use crate::operator::OperatorSet;
use crate::value::Value;

/// Builds the root handle for an operator set.
///
/// No operator is invoked during construction. An empty set builds
/// successfully and yields a root with no callable members.
///
/// # Examples
///
/// ```
/// use fluentseq::{build, builtins, Value};
///
/// let seq = build(builtins::arithmetic());
/// let result = seq
///     .call("add", &[Value::Int(2), Value::Int(4)])?
///     .call("add", &[Value::Int(10)])?
///     .calculate();
/// assert_eq!(result, Value::Int(16));
/// # Ok::<(), fluentseq::SequenceError>(())
/// ```
#[must_use]
pub fn build(operators: OperatorSet) -> Sequence {
    Sequence::new(operators)
}

/// Root handle: the stateless entry point of a sequence.
///
/// One dispatchable operation per registered operator name, each taking
/// that operator's full argument list. The root wraps no value and is
/// reusable indefinitely; dispatch never mutates it.
#[derive(Debug, Clone)]
pub struct Sequence {
    set: Arc<OperatorSet>,
}

impl Sequence {
    /// Creates a root handle over the given operators.
    #[must_use]
    pub fn new(operators: OperatorSet) -> Self {
        Self {
            set: Arc::new(operators),
        }
    }

    /// Names of all registered operators, in sorted order.
    pub fn operators(&self) -> impl Iterator<Item = &str> + '_ {
        self.set.names()
    }

    /// Invokes operator `name` with its full argument list and wraps
    /// the result in a new [`Step`].
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownOperator` if `name` is not
    /// registered, a dispatch error if `args` does not satisfy the
    /// operator's signature, or the operator's own error unchanged if
    /// the function fails.
    pub fn call(&self, name: &str, args: &[Value]) -> SequenceResult<Step> {
        let op = self
            .set
            .get(name)
            .ok_or_else(|| DispatchError::UnknownOperator {
                name: name.to_string(),
            })?;
        let value = op.invoke(name, args)?;
        Ok(Step::new(Arc::clone(&self.set), value))
    }
}

/// Nested handle: an immutable snapshot of one computed value.
///
/// The wrapped value is write-once at construction and never changes;
/// chaining produces new steps and leaves the receiver untouched. The
/// member set is computed at construction time from the wrapped value's
/// type, so only type-compatible operators are reachable.
#[derive(Debug, Clone)]
pub struct Step {
    set: Arc<OperatorSet>,
    value: Value,
    members: BTreeSet<String>,
}

impl Step {
    fn new(set: Arc<OperatorSet>, value: Value) -> Self {
        let current = value.value_type();
        let members = set
            .iter()
            .filter(|(_, op)| op.signature().chains_from(current))
            .map(|(name, _)| name.to_string())
            .collect();
        Self {
            set,
            value,
            members,
        }
    }

    /// Borrows the wrapped value.
    #[must_use]
    pub const fn value(&self) -> &Value {
        &self.value
    }

    /// The result accessor: returns the wrapped value.
    ///
    /// Pure and repeatable; calling it any number of times yields the
    /// same value and changes nothing.
    #[must_use]
    pub fn calculate(&self) -> Value {
        self.value.clone()
    }

    /// Member names visible on this handle, in sorted order.
    ///
    /// This is exactly the set of operators whose first parameter
    /// accepts the wrapped value's type.
    pub fn members(&self) -> impl Iterator<Item = &str> + '_ {
        self.members.iter().map(String::as_str)
    }

    /// Returns true if `name` is callable on this handle.
    #[must_use]
    pub fn has_member(&self, name: &str) -> bool {
        self.members.contains(name)
    }

    /// Chains operator `name` onto the wrapped value.
    ///
    /// The wrapped value is passed as the operator's first argument;
    /// `args` supplies the parameters after the first. Returns a new
    /// independent step wrapping the result.
    ///
    /// # Errors
    ///
    /// Returns `DispatchError::UnknownMember` if `name` is not in this
    /// handle's member set (unregistered, or registered but unable to
    /// consume the wrapped value's type), a dispatch error if `args`
    /// does not satisfy the remaining parameters, or the operator's own
    /// error unchanged if the function fails.
    pub fn call(&self, name: &str, args: &[Value]) -> SequenceResult<Step> {
        let unknown = || DispatchError::UnknownMember {
            name: name.to_string(),
            value_type: self.value.value_type(),
        };
        if !self.members.contains(name) {
            return Err(unknown().into());
        }
        let op = self.set.get(name).ok_or_else(unknown)?;

        // Report the explicit-argument count, not the full list's.
        let expected = op.signature().arity().saturating_sub(1);
        if args.len() != expected {
            return Err(DispatchError::ArityMismatch {
                name: name.to_string(),
                expected,
                actual: args.len(),
            }
            .into());
        }

        let mut full = Vec::with_capacity(args.len() + 1);
        full.push(self.value.clone());
        full.extend_from_slice(args);
        let value = op.invoke(name, &full)?;
        Ok(Self::new(Arc::clone(&self.set), value))
    }
}
