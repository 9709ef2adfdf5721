//! Argument scanning.

use std::collections::BTreeSet;

use tracing::trace;

use crate::{ArgsError, Cursor, MarshalerMap, Result};

/// Walks `tokens` and feeds every flag to its marshaler.
///
/// A token starting with `-` is a cluster: each following character is a
/// flag id on its own, so `-xy` is the same as `-x -y`. Value flags take
/// their parameter from the token after the cluster, in the order the flags
/// appear. Other tokens are skipped unless a flag consumed them.
///
/// Returns the set of flag ids that were seen.
///
/// # Errors
///
/// Stops at the first failure: [`UnexpectedArgument`](ArgsError::UnexpectedArgument)
/// for an undeclared flag, or whatever the flag's marshaler reports.
///
/// # Examples
///
/// ```
/// use flagschema_core::*;
///
/// let mut marshalers = compile_schema("x,y*", &MarshalerRegistry::default()).unwrap();
/// let found = scan(&["-xy", "alpha", "beta"], &mut marshalers).unwrap();
/// assert_eq!(found.len(), 2);
/// assert_eq!(marshalers[&'y'].get(), ArgValue::String("alpha".into()));
/// ```
pub fn scan(tokens: &[&str], marshalers: &mut MarshalerMap) -> Result<BTreeSet<char>> {
    let mut cursor = Cursor::new(tokens);
    let mut found = BTreeSet::new();

    while let Some(token) = cursor.advance() {
        let Some(cluster) = token.strip_prefix('-') else {
            trace!(token, "skipping non-flag token");
            continue;
        };

        for id in cluster.chars() {
            let marshaler = marshalers
                .get_mut(&id)
                .ok_or(ArgsError::UnexpectedArgument { id })?;
            trace!(flag = %id, kind = %marshaler.kind(), position = cursor.consumed(), "dispatching flag");
            marshaler.set(id, &mut cursor)?;
            found.insert(id);
        }
    }

    Ok(found)
}
