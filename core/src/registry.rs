//! Table mapping schema type tags to marshaler factories.

use std::collections::HashMap;

use crate::{ArgumentMarshaler, BoolMarshaler, DoubleMarshaler, IntMarshaler, StringMarshaler};

/// Constructor for a fresh marshaler.
pub type MarshalerFactory = fn() -> Box<dyn ArgumentMarshaler>;

/// Maps a type tag (the part of a schema element after the flag id) to the
/// factory that builds its marshaler.
///
/// [`MarshalerRegistry::default`] knows the built-in tags:
///
/// | Tag  | Kind    |
/// |------|---------|
/// | `""` | boolean |
/// | `*`  | string  |
/// | `#`  | integer |
/// | `##` | double  |
///
/// # Examples
///
/// ```
/// use flagschema_core::MarshalerRegistry;
///
/// let registry = MarshalerRegistry::default();
/// assert_eq!(registry.tags(), vec!["", "#", "##", "*"]);
/// assert!(registry.lookup("##").is_some());
/// assert!(registry.lookup("~").is_none());
/// ```
#[derive(Debug, Clone)]
pub struct MarshalerRegistry {
    factories: HashMap<String, MarshalerFactory>,
}

impl MarshalerRegistry {
    /// Creates a registry with no tags at all.
    pub fn empty() -> Self {
        Self {
            factories: HashMap::new(),
        }
    }

    /// Registers `factory` under `tag`, replacing any previous entry.
    pub fn register(&mut self, tag: impl Into<String>, factory: MarshalerFactory) -> &mut Self {
        self.factories.insert(tag.into(), factory);
        self
    }

    /// Returns the factory registered under `tag`.
    pub fn lookup(&self, tag: &str) -> Option<MarshalerFactory> {
        self.factories.get(tag).copied()
    }

    /// Registered tags in sorted order.
    pub fn tags(&self) -> Vec<&str> {
        let mut tags: Vec<&str> = self.factories.keys().map(String::as_str).collect();
        tags.sort_unstable();
        tags
    }
}

impl Default for MarshalerRegistry {
    fn default() -> Self {
        let mut registry = Self::empty();
        registry
            .register("", || Box::new(BoolMarshaler::default()))
            .register("*", || Box::new(StringMarshaler::default()))
            .register("#", || Box::new(IntMarshaler::default()))
            .register("##", || Box::new(DoubleMarshaler::default()));
        registry
    }
}
