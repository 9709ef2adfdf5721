//! Typed values produced by marshalers.

use std::fmt;

use serde::{Deserialize, Serialize};

/// Kind of value a flag carries.
///
/// # Examples
///
/// ```
/// use flagschema_core::ValueKind;
///
/// assert_eq!(ValueKind::Double.to_string(), "double");
/// assert!(!ValueKind::Bool.takes_parameter());
/// assert!(ValueKind::String.takes_parameter());
/// ```
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum ValueKind {
    /// Presence flag, no parameter.
    Bool,
    /// Verbatim string parameter.
    String,
    /// Base-10 signed 32-bit integer parameter.
    Int,
    /// Decimal real-number parameter.
    Double,
}

impl ValueKind {
    /// Returns `true` if a flag of this kind consumes the next token.
    pub fn takes_parameter(self) -> bool {
        !matches!(self, Self::Bool)
    }

    /// Returns the zero value of this kind.
    pub fn zero(self) -> ArgValue {
        match self {
            Self::Bool => ArgValue::Bool(false),
            Self::String => ArgValue::String(String::new()),
            Self::Int => ArgValue::Int(0),
            Self::Double => ArgValue::Double(0.0),
        }
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let name = match self {
            Self::Bool => "boolean",
            Self::String => "string",
            Self::Int => "integer",
            Self::Double => "double",
        };
        f.pad(name)
    }
}

/// Value held by a marshaler after scanning.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum ArgValue {
    Bool(bool),
    String(String),
    Int(i32),
    Double(f64),
}

impl ArgValue {
    /// Returns the kind of this value.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagschema_core::{ArgValue, ValueKind};
    ///
    /// assert_eq!(ArgValue::Int(42).kind(), ValueKind::Int);
    /// ```
    pub fn kind(&self) -> ValueKind {
        match self {
            Self::Bool(_) => ValueKind::Bool,
            Self::String(_) => ValueKind::String,
            Self::Int(_) => ValueKind::Int,
            Self::Double(_) => ValueKind::Double,
        }
    }
}

impl fmt::Display for ArgValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Bool(value) => write!(f, "{value}"),
            Self::String(value) => f.write_str(value),
            Self::Int(value) => write!(f, "{value}"),
            Self::Double(value) => write!(f, "{value}"),
        }
    }
}
