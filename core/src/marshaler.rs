//! Per-type marshalers that turn zero or one tokens into a typed value.
//!
//! A marshaler is created fresh for every flag in a compiled schema. During
//! the scan it receives the flag id together with the shared [`Cursor`], so
//! any error it raises is attributed to the flag at the point of failure.

use std::fmt;

use crate::{ArgValue, ArgsError, Cursor, Result, ValueKind};

/// Consumes the parameter of one flag and holds its value.
///
/// Implement this trait and register a factory on a
/// [`MarshalerRegistry`](crate::MarshalerRegistry) to add a new value type.
///
/// # Examples
///
/// ```
/// use flagschema_core::*;
///
/// #[derive(Debug, Default)]
/// struct HexMarshaler(i32);
///
/// impl ArgumentMarshaler for HexMarshaler {
///     fn kind(&self) -> ValueKind {
///         ValueKind::Int
///     }
///
///     fn set(&mut self, id: char, cursor: &mut Cursor<'_>) -> Result<()> {
///         let parameter = cursor.advance().ok_or(ArgsError::MissingInteger { id })?;
///         self.0 = i32::from_str_radix(parameter, 16).map_err(|_| ArgsError::InvalidInteger {
///             id,
///             parameter: parameter.to_string(),
///         })?;
///         Ok(())
///     }
///
///     fn get(&self) -> ArgValue {
///         ArgValue::Int(self.0)
///     }
/// }
///
/// let mut registry = MarshalerRegistry::default();
/// registry.register("%", || Box::new(HexMarshaler::default()));
///
/// let args = Args::parse_with(&registry, "m%", &["-m", "ff"]).unwrap();
/// assert_eq!(args.get_int('m').unwrap(), 255);
/// ```
pub trait ArgumentMarshaler: fmt::Debug {
    /// Kind of value this marshaler produces.
    fn kind(&self) -> ValueKind;

    /// Records that flag `id` was seen, taking its parameter from `cursor`
    /// if the kind needs one.
    fn set(&mut self, id: char, cursor: &mut Cursor<'_>) -> Result<()>;

    /// Current value; the zero value if [`set`](Self::set) never ran.
    fn get(&self) -> ArgValue;
}

/// Presence flag. Consumes no token.
#[derive(Debug, Default)]
pub struct BoolMarshaler {
    value: bool,
}

impl ArgumentMarshaler for BoolMarshaler {
    fn kind(&self) -> ValueKind {
        ValueKind::Bool
    }

    fn set(&mut self, _id: char, _cursor: &mut Cursor<'_>) -> Result<()> {
        self.value = true;
        Ok(())
    }

    fn get(&self) -> ArgValue {
        ArgValue::Bool(self.value)
    }
}

/// Takes the next token verbatim.
#[derive(Debug, Default)]
pub struct StringMarshaler {
    value: String,
}

impl ArgumentMarshaler for StringMarshaler {
    fn kind(&self) -> ValueKind {
        ValueKind::String
    }

    fn set(&mut self, id: char, cursor: &mut Cursor<'_>) -> Result<()> {
        let parameter = cursor.advance().ok_or(ArgsError::MissingString { id })?;
        self.value = parameter.to_string();
        Ok(())
    }

    fn get(&self) -> ArgValue {
        ArgValue::String(self.value.clone())
    }
}

/// Parses the next token as a base-10 `i32`.
///
/// The token must be exact: surrounding whitespace such as `" 42 "` is an
/// [`InvalidInteger`](ArgsError::InvalidInteger) error, not trimmed.
#[derive(Debug, Default)]
pub struct IntMarshaler {
    value: i32,
}

impl ArgumentMarshaler for IntMarshaler {
    fn kind(&self) -> ValueKind {
        ValueKind::Int
    }

    fn set(&mut self, id: char, cursor: &mut Cursor<'_>) -> Result<()> {
        let parameter = cursor.advance().ok_or(ArgsError::MissingInteger { id })?;
        self.value = parameter
            .parse::<i32>()
            .map_err(|_| ArgsError::InvalidInteger {
                id,
                parameter: parameter.to_string(),
            })?;
        Ok(())
    }

    fn get(&self) -> ArgValue {
        ArgValue::Int(self.value)
    }
}

/// Parses the next token as a decimal real number.
///
/// Accepted grammar, independent of locale:
/// `[+-] digits [. digits] [(e|E) [+-] digits]`, where either side of the
/// decimal point may be empty but not both. Literals that overflow `f64`
/// are rejected.
#[derive(Debug, Default)]
pub struct DoubleMarshaler {
    value: f64,
}

impl ArgumentMarshaler for DoubleMarshaler {
    fn kind(&self) -> ValueKind {
        ValueKind::Double
    }

    fn set(&mut self, id: char, cursor: &mut Cursor<'_>) -> Result<()> {
        let parameter = cursor.advance().ok_or(ArgsError::MissingDouble { id })?;
        self.value = parse_decimal(parameter).ok_or_else(|| ArgsError::InvalidDouble {
            id,
            parameter: parameter.to_string(),
        })?;
        Ok(())
    }

    fn get(&self) -> ArgValue {
        ArgValue::Double(self.value)
    }
}

/// Parses `text` as a finite decimal literal, rejecting `inf`, `NaN`,
/// overflowing values and anything else outside the plain decimal grammar.
fn parse_decimal(text: &str) -> Option<f64> {
    if !is_decimal_literal(text) {
        return None;
    }
    text.parse::<f64>().ok().filter(|value| value.is_finite())
}

fn is_decimal_literal(text: &str) -> bool {
    let bytes = text.as_bytes();
    let mut i = 0;

    if matches!(bytes.first(), Some(b'+' | b'-')) {
        i += 1;
    }

    let integer_digits = count_digits(&bytes[i..]);
    i += integer_digits;

    let mut fraction_digits = 0;
    if bytes.get(i) == Some(&b'.') {
        i += 1;
        fraction_digits = count_digits(&bytes[i..]);
        i += fraction_digits;
    }

    if integer_digits == 0 && fraction_digits == 0 {
        return false;
    }

    if matches!(bytes.get(i), Some(b'e' | b'E')) {
        i += 1;
        if matches!(bytes.get(i), Some(b'+' | b'-')) {
            i += 1;
        }
        let exponent_digits = count_digits(&bytes[i..]);
        if exponent_digits == 0 {
            return false;
        }
        i += exponent_digits;
    }

    i == bytes.len()
}

fn count_digits(bytes: &[u8]) -> usize {
    bytes.iter().take_while(|b| b.is_ascii_digit()).count()
}

#[cfg(test)]
mod tests {
    use super::*;

    fn set_with(marshaler: &mut dyn ArgumentMarshaler, tokens: &[&str]) -> Result<()> {
        let mut cursor = Cursor::new(tokens);
        marshaler.set('x', &mut cursor)
    }

    #[test]
    fn test_bool_consumes_nothing() {
        let tokens = ["param"];
        let mut cursor = Cursor::new(&tokens);
        let mut marshaler = BoolMarshaler::default();
        assert_eq!(marshaler.get(), ArgValue::Bool(false));

        marshaler.set('x', &mut cursor).unwrap();
        assert_eq!(marshaler.get(), ArgValue::Bool(true));
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_string_takes_one_token() {
        let tokens = ["alpha", "beta"];
        let mut cursor = Cursor::new(&tokens);
        let mut marshaler = StringMarshaler::default();

        marshaler.set('x', &mut cursor).unwrap();
        assert_eq!(marshaler.get(), ArgValue::String("alpha".into()));
        assert_eq!(cursor.consumed(), 1);
    }

    #[test]
    fn test_string_missing_parameter() {
        let mut marshaler = StringMarshaler::default();
        assert_eq!(
            set_with(&mut marshaler, &[]),
            Err(ArgsError::MissingString { id: 'x' })
        );
        assert_eq!(marshaler.get(), ArgValue::String(String::new()));
    }

    #[test]
    fn test_int_parses_signed_values() {
        let mut marshaler = IntMarshaler::default();
        set_with(&mut marshaler, &["-17"]).unwrap();
        assert_eq!(marshaler.get(), ArgValue::Int(-17));

        set_with(&mut marshaler, &["+8"]).unwrap();
        assert_eq!(marshaler.get(), ArgValue::Int(8));
    }

    #[test]
    fn test_int_rejects_garbage_and_overflow() {
        let mut marshaler = IntMarshaler::default();
        for bad in ["Forty two", "4.2", "", "2147483648", " 1", " 42 "] {
            assert_eq!(
                set_with(&mut marshaler, &[bad]),
                Err(ArgsError::InvalidInteger {
                    id: 'x',
                    parameter: bad.to_string(),
                })
            );
        }
        assert_eq!(
            set_with(&mut marshaler, &[]),
            Err(ArgsError::MissingInteger { id: 'x' })
        );
    }

    #[test]
    fn test_double_accepts_decimal_grammar() {
        let cases = [
            ("42.3", 42.3),
            ("-1", -1.0),
            ("+.5", 0.5),
            ("5.", 5.0),
            ("1e3", 1000.0),
            ("2.5E-2", 0.025),
        ];
        for (text, expected) in cases {
            let mut marshaler = DoubleMarshaler::default();
            set_with(&mut marshaler, &[text]).unwrap();
            assert_eq!(marshaler.get(), ArgValue::Double(expected), "{text}");
        }
    }

    #[test]
    fn test_double_rejects_non_decimal_text() {
        let long_mantissa = "9".repeat(400);
        for bad in [
            "Forty two",
            "inf",
            "NaN",
            ".",
            "1e",
            "1,5",
            "--1",
            "1.2.3",
            "",
            "1e400",
            "-1e400",
            long_mantissa.as_str(),
        ] {
            let mut marshaler = DoubleMarshaler::default();
            assert_eq!(
                set_with(&mut marshaler, &[bad]),
                Err(ArgsError::InvalidDouble {
                    id: 'x',
                    parameter: bad.to_string(),
                }),
                "{bad}"
            );
        }
    }

    #[test]
    fn test_double_missing_parameter() {
        let mut marshaler = DoubleMarshaler::default();
        assert_eq!(
            set_with(&mut marshaler, &[]),
            Err(ArgsError::MissingDouble { id: 'x' })
        );
    }
}
