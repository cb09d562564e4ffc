//! # fluentseq - Type-Filtered Fluent Sequences
//!
//! fluentseq builds a fluent call surface from a named collection of
//! typed transformation functions ("operators"). The root handle exposes
//! one operation per operator; each invocation wraps its result in an
//! immutable nested handle that exposes exactly the operators able to
//! consume the wrapped value's type, plus a result accessor.
//!
//! ## Core Concepts
//!
//! - **Operator**: a named pure function with a declared [`Signature`]
//! - **OperatorSet**: the fixed name-to-operator mapping a sequence is built from
//! - **Sequence**: the reusable, stateless root handle
//! - **Step**: an immutable snapshot of one computed value, with type-filtered members
//!
//! ## Usage
//!
//! ```rust
//! use fluentseq::{build, builtins, Value};
//!
//! let seq = build(builtins::standard());
//! let result = seq
//!     .call("add", &[Value::Int(2), Value::Int(4)])?
//!     .call("add", &[Value::Int(10)])?
//!     .calculate();
//! assert_eq!(result, Value::Int(16));
//! # Ok::<(), fluentseq::SequenceError>(())
//! ```
//!
//! Handles are snapshots: branching from the same step twice gives two
//! independent results, and the original step's value is untouched.

#![warn(missing_docs)]
#![warn(clippy::all)]
#![warn(clippy::pedantic)]
#![allow(clippy::module_name_repetitions)]

pub mod builtins;
pub mod error;
pub mod operator;
pub mod sequence;
pub mod serialization;
pub mod signature;
pub mod value;

// Re-export primary types at crate root for convenience
pub use error::{DispatchError, OperatorError, SequenceError, SequenceResult};
pub use operator::{Operator, OperatorFn, OperatorSet};
pub use sequence::{build, Sequence, Step};
pub use signature::Signature;
pub use value::{Value, ValueType};
