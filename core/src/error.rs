//! Error types for schema compilation, argument scanning and typed access.
//!
//! Every variant carries the flag id it is attributed to, so a caller never
//! sees a failure without knowing which argument caused it. The `Display`
//! impl provides the human-readable message.

use serde::{Deserialize, Serialize};
use thiserror::Error;

use crate::ValueKind;

/// Placeholder reported by [`ArgsError::error_parameter`] when no raw
/// parameter applies to the error.
pub const NO_PARAMETER: &str = "TILT";

/// Errors raised while compiling a schema, scanning arguments, or reading a
/// typed value back out of [`Args`](crate::Args).
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ArgsError {
    /// Schema flag id is not an alphabetic character.
    #[error("Bad character: {id} in Args format.")]
    InvalidArgumentName { id: char },
    /// Schema type tag is not known to the registry.
    #[error("'{tag}' is not a valid argument format for -{id}.")]
    InvalidArgumentFormat { id: char, tag: String },
    /// A token names a flag that the schema does not declare.
    #[error("Argument -{id} unexpected.")]
    UnexpectedArgument { id: char },
    /// A string flag was the last token.
    #[error("Could not find string parameter for -{id}.")]
    MissingString { id: char },
    /// An integer flag was the last token.
    #[error("Could not find integer parameter for -{id}.")]
    MissingInteger { id: char },
    /// The parameter of an integer flag is not a base-10 `i32`.
    #[error("Argument -{id} expects an integer but was '{parameter}'.")]
    InvalidInteger { id: char, parameter: String },
    /// A double flag was the last token.
    #[error("Could not find double parameter for -{id}.")]
    MissingDouble { id: char },
    /// The parameter of a double flag is not a decimal number.
    #[error("Argument -{id} expects a double but was '{parameter}'.")]
    InvalidDouble { id: char, parameter: String },
    /// A typed getter asked for a flag the schema does not declare.
    #[error("No argument -{id} in schema.")]
    UnknownArgument { id: char },
    /// A typed getter asked for a different type than the schema declares.
    #[error("Argument -{id} is declared as {declared} but was read as {requested}.")]
    WrongArgumentType {
        id: char,
        declared: ValueKind,
        requested: ValueKind,
    },
}

/// Discriminant of [`ArgsError`], convenient for matching and reporting.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum ErrorCode {
    InvalidArgumentName,
    InvalidArgumentFormat,
    UnexpectedArgument,
    MissingString,
    MissingInteger,
    InvalidInteger,
    MissingDouble,
    InvalidDouble,
    UnknownArgument,
    WrongArgumentType,
}

impl ArgsError {
    /// Returns the kind of this error.
    ///
    /// # Examples
    ///
    /// ```
    /// use flagschema_core::{ArgsError, ErrorCode};
    ///
    /// let err = ArgsError::MissingString { id: 'x' };
    /// assert_eq!(err.code(), ErrorCode::MissingString);
    /// ```
    pub fn code(&self) -> ErrorCode {
        match self {
            Self::InvalidArgumentName { .. } => ErrorCode::InvalidArgumentName,
            Self::InvalidArgumentFormat { .. } => ErrorCode::InvalidArgumentFormat,
            Self::UnexpectedArgument { .. } => ErrorCode::UnexpectedArgument,
            Self::MissingString { .. } => ErrorCode::MissingString,
            Self::MissingInteger { .. } => ErrorCode::MissingInteger,
            Self::InvalidInteger { .. } => ErrorCode::InvalidInteger,
            Self::MissingDouble { .. } => ErrorCode::MissingDouble,
            Self::InvalidDouble { .. } => ErrorCode::InvalidDouble,
            Self::UnknownArgument { .. } => ErrorCode::UnknownArgument,
            Self::WrongArgumentType { .. } => ErrorCode::WrongArgumentType,
        }
    }

    /// Returns the flag id the error is attributed to.
    ///
    /// Every current variant names a flag; the `Option` leaves room for
    /// errors raised outside of any flag.
    pub fn argument_id(&self) -> Option<char> {
        match self {
            Self::InvalidArgumentName { id }
            | Self::InvalidArgumentFormat { id, .. }
            | Self::UnexpectedArgument { id }
            | Self::MissingString { id }
            | Self::MissingInteger { id }
            | Self::InvalidInteger { id, .. }
            | Self::MissingDouble { id }
            | Self::InvalidDouble { id, .. }
            | Self::UnknownArgument { id }
            | Self::WrongArgumentType { id, .. } => Some(*id),
        }
    }

    /// Returns the offending raw text: the bad parameter token for
    /// `Invalid*` errors, the bad type tag for `InvalidArgumentFormat`.
    pub fn parameter(&self) -> Option<&str> {
        match self {
            Self::InvalidInteger { parameter, .. } | Self::InvalidDouble { parameter, .. } => {
                Some(parameter)
            }
            Self::InvalidArgumentFormat { tag, .. } => Some(tag),
            _ => None,
        }
    }

    /// Like [`parameter`](Self::parameter), but falls back to
    /// [`NO_PARAMETER`] when nothing applies.
    pub fn error_parameter(&self) -> &str {
        self.parameter().unwrap_or(NO_PARAMETER)
    }
}

/// Convenience alias for results with [`ArgsError`].
pub type Result<T> = std::result::Result<T, ArgsError>;

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_unexpected_message() {
        let err = ArgsError::UnexpectedArgument { id: 'x' };
        assert_eq!(err.to_string(), "Argument -x unexpected.");
    }

    #[test]
    fn test_missing_string_message() {
        let err = ArgsError::MissingString { id: 'x' };
        assert_eq!(err.to_string(), "Could not find string parameter for -x.");
    }

    #[test]
    fn test_invalid_integer_message() {
        let err = ArgsError::InvalidInteger {
            id: 'x',
            parameter: "Forty two".to_string(),
        };
        assert_eq!(
            err.to_string(),
            "Argument -x expects an integer but was 'Forty two'."
        );
        assert_eq!(err.parameter(), Some("Forty two"));
    }

    #[test]
    fn test_missing_integer_message() {
        let err = ArgsError::MissingInteger { id: 'x' };
        assert_eq!(err.to_string(), "Could not find integer parameter for -x.");
    }

    #[test]
    fn test_double_messages() {
        let missing = ArgsError::MissingDouble { id: 'd' };
        assert_eq!(missing.to_string(), "Could not find double parameter for -d.");

        let invalid = ArgsError::InvalidDouble {
            id: 'd',
            parameter: "1,5".to_string(),
        };
        assert_eq!(
            invalid.to_string(),
            "Argument -d expects a double but was '1,5'."
        );
    }

    #[test]
    fn test_invalid_format_names_flag_and_tag() {
        let err = ArgsError::InvalidArgumentFormat {
            id: 'x',
            tag: "$".to_string(),
        };
        assert_eq!(err.to_string(), "'$' is not a valid argument format for -x.");
        assert_eq!(err.argument_id(), Some('x'));
        assert_eq!(err.parameter(), Some("$"));
    }

    #[test]
    fn test_invalid_name_message() {
        let err = ArgsError::InvalidArgumentName { id: '*' };
        assert_eq!(err.to_string(), "Bad character: * in Args format.");
    }

    #[test]
    fn test_wrong_type_message() {
        let err = ArgsError::WrongArgumentType {
            id: 'x',
            declared: ValueKind::Int,
            requested: ValueKind::Bool,
        };
        assert_eq!(
            err.to_string(),
            "Argument -x is declared as integer but was read as boolean."
        );
    }

    #[test]
    fn test_error_parameter_defaults_to_placeholder() {
        let err = ArgsError::MissingInteger { id: 'n' };
        assert_eq!(err.parameter(), None);
        assert_eq!(err.error_parameter(), NO_PARAMETER);
    }

    #[test]
    fn test_code_serializes_snake_case() {
        let json = serde_json::to_string(&ErrorCode::UnexpectedArgument).unwrap();
        assert_eq!(json, "\"unexpected_argument\"");
    }
}
