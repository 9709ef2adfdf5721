//! Parsed arguments and typed accessors.

use std::collections::BTreeSet;

use crate::{
    ArgValue, ArgsError, MarshalerMap, MarshalerRegistry, Result, ValueKind, compile_schema, scan,
};

/// Result of parsing a token list against a schema.
///
/// Built once by [`Args::parse`] or [`Args::parse_with`] and read-only
/// afterwards. Parsing is fail-fast: any schema or scan error aborts
/// construction, so an `Args` value always describes a successful parse.
///
/// Typed getters are strict. They return the zero value for a flag that is
/// declared but absent from the tokens, and fail for a flag that is not
/// declared ([`UnknownArgument`](ArgsError::UnknownArgument)) or is declared
/// with another type ([`WrongArgumentType`](ArgsError::WrongArgumentType)).
///
/// # Examples
///
/// ```
/// use flagschema_core::Args;
///
/// let args = Args::parse("l,p#,d*", &["-lp", "8080", "-d", "/srv"]).unwrap();
/// assert!(args.get_boolean('l').unwrap());
/// assert_eq!(args.get_int('p').unwrap(), 8080);
/// assert_eq!(args.get_string('d').unwrap(), "/srv");
/// assert_eq!(args.cardinality(), 3);
/// assert_eq!(args.usage(), "-[l,p#,d*]");
/// ```
#[derive(Debug)]
pub struct Args {
    schema: String,
    marshalers: MarshalerMap,
    found: BTreeSet<char>,
}

impl Args {
    /// Parses `args` against `schema` using the built-in type tags.
    ///
    /// # Errors
    ///
    /// Returns the first schema or scan error; see [`ArgsError`].
    pub fn parse<S: AsRef<str>>(schema: &str, args: &[S]) -> Result<Self> {
        Self::parse_with(&MarshalerRegistry::default(), schema, args)
    }

    /// Parses `args` against `schema`, resolving type tags through
    /// `registry`.
    ///
    /// # Errors
    ///
    /// Returns the first schema or scan error; see [`ArgsError`].
    pub fn parse_with<S: AsRef<str>>(
        registry: &MarshalerRegistry,
        schema: &str,
        args: &[S],
    ) -> Result<Self> {
        let mut marshalers = compile_schema(schema, registry)?;
        let tokens: Vec<&str> = args.iter().map(AsRef::as_ref).collect();
        let found = scan(&tokens, &mut marshalers)?;

        Ok(Self {
            schema: schema.to_string(),
            marshalers,
            found,
        })
    }

    /// Number of distinct flags found in the tokens.
    pub fn cardinality(&self) -> usize {
        self.found.len()
    }

    /// Returns `true` if flag `id` appeared in the tokens.
    pub fn has(&self, id: char) -> bool {
        self.found.contains(&id)
    }

    /// Flags found in the tokens, in ascending order.
    pub fn found(&self) -> impl Iterator<Item = char> + '_ {
        self.found.iter().copied()
    }

    /// Declared flags and their kinds, in ascending order of flag id.
    pub fn declared(&self) -> impl Iterator<Item = (char, ValueKind)> + '_ {
        self.marshalers.iter().map(|(id, m)| (*id, m.kind()))
    }

    /// Schema text this result was parsed with.
    pub fn schema(&self) -> &str {
        &self.schema
    }

    /// Short usage line, `-[<schema>]`, or empty for an empty schema.
    pub fn usage(&self) -> String {
        if self.schema.is_empty() {
            String::new()
        } else {
            format!("-[{}]", self.schema)
        }
    }

    /// Untyped value of flag `id`, or `None` if it is not declared.
    pub fn get(&self, id: char) -> Option<ArgValue> {
        self.marshalers.get(&id).map(|m| m.get())
    }

    /// Value of boolean flag `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is undeclared or not a boolean flag.
    pub fn get_boolean(&self, id: char) -> Result<bool> {
        self.typed(id, ValueKind::Bool, |value| match value {
            ArgValue::Bool(value) => Some(value),
            _ => None,
        })
    }

    /// Value of string flag `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is undeclared or not a string flag.
    pub fn get_string(&self, id: char) -> Result<String> {
        self.typed(id, ValueKind::String, |value| match value {
            ArgValue::String(value) => Some(value),
            _ => None,
        })
    }

    /// Value of integer flag `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is undeclared or not an integer flag.
    pub fn get_int(&self, id: char) -> Result<i32> {
        self.typed(id, ValueKind::Int, |value| match value {
            ArgValue::Int(value) => Some(value),
            _ => None,
        })
    }

    /// Value of double flag `id`.
    ///
    /// # Errors
    ///
    /// Fails if `id` is undeclared or not a double flag.
    pub fn get_double(&self, id: char) -> Result<f64> {
        self.typed(id, ValueKind::Double, |value| match value {
            ArgValue::Double(value) => Some(value),
            _ => None,
        })
    }

    fn typed<T>(
        &self,
        id: char,
        requested: ValueKind,
        extract: impl FnOnce(ArgValue) -> Option<T>,
    ) -> Result<T> {
        let value = self
            .get(id)
            .ok_or(ArgsError::UnknownArgument { id })?;
        let declared = value.kind();
        extract(value).ok_or(ArgsError::WrongArgumentType {
            id,
            declared,
            requested,
        })
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    const NO_ARGS: &[&str] = &[];

    #[test]
    fn test_empty_schema_and_args() {
        let args = Args::parse("", NO_ARGS).unwrap();
        assert_eq!(args.cardinality(), 0);
        assert_eq!(args.usage(), "");
        assert_eq!(args.declared().count(), 0);
    }

    #[test]
    fn test_accepts_owned_strings() {
        let tokens = vec!["-x".to_string(), "7".to_string()];
        let args = Args::parse("x#", &tokens).unwrap();
        assert_eq!(args.get_int('x').unwrap(), 7);
    }

    #[test]
    fn test_declared_but_absent_returns_zero_values() {
        let args = Args::parse("b,s*,i#,d##", NO_ARGS).unwrap();
        assert!(!args.get_boolean('b').unwrap());
        assert_eq!(args.get_string('s').unwrap(), "");
        assert_eq!(args.get_int('i').unwrap(), 0);
        assert_eq!(args.get_double('d').unwrap(), 0.0);
        assert!(!args.has('s'));
    }

    #[test]
    fn test_undeclared_getter_fails() {
        let args = Args::parse("x", &["-x"]).unwrap();
        assert_eq!(
            args.get_int('q').unwrap_err(),
            ArgsError::UnknownArgument { id: 'q' }
        );
        assert_eq!(args.get('q'), None);
    }

    #[test]
    fn test_mismatched_getter_fails() {
        let args = Args::parse("x#", &["-x", "42"]).unwrap();
        assert_eq!(
            args.get_boolean('x').unwrap_err(),
            ArgsError::WrongArgumentType {
                id: 'x',
                declared: ValueKind::Int,
                requested: ValueKind::Bool,
            }
        );
        assert!(args.get_string('x').is_err());
        assert!(args.get_double('x').is_err());
    }

    #[test]
    fn test_found_and_declared_are_ordered() {
        let args = Args::parse("z,a*,m", &["-mz"]).unwrap();
        assert_eq!(args.found().collect::<Vec<_>>(), vec!['m', 'z']);
        assert_eq!(
            args.declared().collect::<Vec<_>>(),
            vec![
                ('a', ValueKind::String),
                ('m', ValueKind::Bool),
                ('z', ValueKind::Bool),
            ]
        );
        assert_eq!(args.schema(), "z,a*,m");
    }
}
