//! Value types carried between operator calls.
//!
//! A sequence moves a single [`Value`] from step to step. Operators
//! declare the types they consume and produce as [`ValueType`]s, and
//! dispatch compares a value's type against those declarations.

use serde::{Deserialize, Serialize};

/// The closed set of types a [`Value`] can have.
///
/// Operator signatures are declared in terms of `ValueType`. The type of
/// a nested handle's wrapped value decides which operators it exposes.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ValueType {
    /// A boolean.
    Bool,
    /// A 64-bit signed integer.
    Int,
    /// A 64-bit float.
    Float,
    /// A UTF-8 string.
    Text,
    /// Arbitrary structured JSON data.
    Structured,
    /// The absence of a value.
    Null,
}

impl ValueType {
    /// Returns true if a parameter declared with this type accepts a
    /// value of type `actual`.
    ///
    /// Equal types always match. The single widening rule is numeric:
    /// a `Float` parameter accepts an `Int` value. The reverse does not
    /// hold.
    #[must_use]
    pub const fn accepts(self, actual: ValueType) -> bool {
        matches!(
            (self, actual),
            (Self::Bool, Self::Bool)
                | (Self::Int, Self::Int)
                | (Self::Float, Self::Float | Self::Int)
                | (Self::Text, Self::Text)
                | (Self::Structured, Self::Structured)
                | (Self::Null, Self::Null)
        )
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn name(self) -> &'static str {
        match self {
            Self::Bool => "bool",
            Self::Int => "int",
            Self::Float => "float",
            Self::Text => "text",
            Self::Structured => "structured",
            Self::Null => "null",
        }
    }
}

impl std::fmt::Display for ValueType {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Possible values a sequence step can wrap.
///
/// # Examples
///
/// ```
/// use fluentseq::Value;
///
/// let bool_val = Value::Bool(true);
/// let int_val = Value::Int(42);
/// let text_val = Value::Text("hello".to_string());
///
/// assert!(bool_val.is_bool());
/// assert!(int_val.is_int());
/// assert!(text_val.is_text());
/// ```
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(tag = "type", content = "value", rename_all = "snake_case")]
pub enum Value {
    Bool(bool),
    Int(i64),
    Float(f64),
    Text(String),
    Structured(serde_json::Value),
    Null,
}

impl Value {
    pub const fn is_bool(&self) -> bool {
        matches!(self, Self::Bool(_))
    }

    pub const fn is_int(&self) -> bool {
        matches!(self, Self::Int(_))
    }

    pub const fn is_float(&self) -> bool {
        matches!(self, Self::Float(_))
    }

    pub const fn is_text(&self) -> bool {
        matches!(self, Self::Text(_))
    }

    pub const fn is_structured(&self) -> bool {
        matches!(self, Self::Structured(_))
    }

    pub const fn is_null(&self) -> bool {
        matches!(self, Self::Null)
    }

    pub const fn as_bool(&self) -> Option<bool> {
        match self {
            Self::Bool(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_int(&self) -> Option<i64> {
        match self {
            Self::Int(v) => Some(*v),
            _ => None,
        }
    }

    pub const fn as_float(&self) -> Option<f64> {
        match self {
            Self::Float(v) => Some(*v),
            Self::Int(v) => Some(*v as f64),
            _ => None,
        }
    }

    pub fn as_text(&self) -> Option<&str> {
        match self {
            Self::Text(v) => Some(v),
            _ => None,
        }
    }

    pub const fn as_structured(&self) -> Option<&serde_json::Value> {
        match self {
            Self::Structured(v) => Some(v),
            _ => None,
        }
    }

    /// Returns this value's [`ValueType`].
    #[must_use]
    pub const fn value_type(&self) -> ValueType {
        match self {
            Self::Bool(_) => ValueType::Bool,
            Self::Int(_) => ValueType::Int,
            Self::Float(_) => ValueType::Float,
            Self::Text(_) => ValueType::Text,
            Self::Structured(_) => ValueType::Structured,
            Self::Null => ValueType::Null,
        }
    }

    /// Returns a human-readable type name.
    #[must_use]
    pub const fn type_name(&self) -> &'static str {
        self.value_type().name()
    }
}

impl Default for Value {
    fn default() -> Self {
        Self::Null
    }
}

impl std::fmt::Display for Value {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Bool(v) => write!(f, "{v}"),
            Self::Int(v) => write!(f, "{v}"),
            Self::Float(v) => write!(f, "{v}"),
            Self::Text(v) => write!(f, "{v:?}"),
            Self::Structured(v) => write!(f, "{v}"),
            Self::Null => write!(f, "null"),
        }
    }
}

// Convenient From implementations
impl From<bool> for Value {
    fn from(v: bool) -> Self {
        Self::Bool(v)
    }
}

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Self::Int(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Self::Int(v)
    }
}

impl From<f32> for Value {
    fn from(v: f32) -> Self {
        Self::Float(f64::from(v))
    }
}

impl From<f64> for Value {
    fn from(v: f64) -> Self {
        Self::Float(v)
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Self::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Self::Text(v.to_string())
    }
}

impl From<serde_json::Value> for Value {
    fn from(v: serde_json::Value) -> Self {
        Self::Structured(v)
    }
}
