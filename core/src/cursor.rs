//! Forward-only reader over the raw argument tokens.

/// A single forward-only position in the token list.
///
/// The scanner owns the cursor for one parse and lends it to each marshaler
/// for the duration of one `set` call. The position never moves backwards,
/// so every token is handed out at most once.
///
/// # Examples
///
/// ```
/// use flagschema_core::Cursor;
///
/// let tokens = ["-x", "42"];
/// let mut cursor = Cursor::new(&tokens);
/// assert_eq!(cursor.advance(), Some("-x"));
/// assert!(cursor.has_next());
/// assert_eq!(cursor.advance(), Some("42"));
/// assert_eq!(cursor.advance(), None);
/// ```
#[derive(Debug, Clone)]
pub struct Cursor<'a> {
    tokens: &'a [&'a str],
    position: usize,
}

impl<'a> Cursor<'a> {
    /// Creates a cursor positioned before the first token.
    pub fn new(tokens: &'a [&'a str]) -> Self {
        Self {
            tokens,
            position: 0,
        }
    }

    /// Returns `true` if another token can be taken.
    pub fn has_next(&self) -> bool {
        self.position < self.tokens.len()
    }

    /// Takes the next token, or `None` once the list is exhausted.
    pub fn advance(&mut self) -> Option<&'a str> {
        let token = self.tokens.get(self.position).copied()?;
        self.position += 1;
        Some(token)
    }

    /// Number of tokens taken so far.
    pub fn consumed(&self) -> usize {
        self.position
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_empty_cursor_is_exhausted() {
        let mut cursor = Cursor::new(&[]);
        assert!(!cursor.has_next());
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.consumed(), 0);
    }

    #[test]
    fn test_exhausted_cursor_stays_put() {
        let tokens = ["a"];
        let mut cursor = Cursor::new(&tokens);
        assert_eq!(cursor.advance(), Some("a"));
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.advance(), None);
        assert_eq!(cursor.consumed(), 1);
    }
}
