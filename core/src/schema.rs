//! Schema compilation.
//!
//! A schema is a comma-separated list of elements. Each element is a single
//! letter (the flag id) followed by a type tag that selects the marshaler:
//!
//! ```text
//! "l,p#,d*,r##"   -l boolean, -p integer, -d string, -r double
//! ```
//!
//! Whitespace around elements and empty elements are ignored. A flag id that
//! appears twice is compiled twice and the later element wins.

use std::collections::BTreeMap;

use tracing::debug;

use crate::{ArgsError, ArgumentMarshaler, MarshalerRegistry, Result};

/// Compiled schema: one fresh marshaler per declared flag id.
pub type MarshalerMap = BTreeMap<char, Box<dyn ArgumentMarshaler>>;

/// Compiles `schema` into a marshaler per flag using `registry`.
///
/// # Errors
///
/// Returns [`InvalidArgumentName`](ArgsError::InvalidArgumentName) if an
/// element does not start with a letter, or
/// [`InvalidArgumentFormat`](ArgsError::InvalidArgumentFormat) if its tag is
/// not registered.
///
/// # Examples
///
/// ```
/// use flagschema_core::*;
///
/// let marshalers = compile_schema("l, p#, d*", &MarshalerRegistry::default()).unwrap();
/// assert_eq!(marshalers.len(), 3);
/// assert_eq!(marshalers[&'p'].kind(), ValueKind::Int);
///
/// let err = compile_schema("f~", &MarshalerRegistry::default()).unwrap_err();
/// assert_eq!(err.code(), ErrorCode::InvalidArgumentFormat);
/// ```
pub fn compile_schema(schema: &str, registry: &MarshalerRegistry) -> Result<MarshalerMap> {
    let mut marshalers = MarshalerMap::new();

    for element in schema.split(',').map(str::trim) {
        let mut chars = element.chars();
        let Some(id) = chars.next() else {
            continue;
        };
        let tag = chars.as_str();

        if !id.is_alphabetic() {
            return Err(ArgsError::InvalidArgumentName { id });
        }

        let factory = registry
            .lookup(tag)
            .ok_or_else(|| ArgsError::InvalidArgumentFormat {
                id,
                tag: tag.to_string(),
            })?;
        let marshaler = factory();
        debug!(flag = %id, tag, kind = %marshaler.kind(), "compiled schema element");

        if marshalers.insert(id, marshaler).is_some() {
            debug!(flag = %id, "schema element overrides an earlier declaration");
        }
    }

    Ok(marshalers)
}
