use std::collections::HashMap;
use tracing::trace;

/// Append-only mapping from distinct names to stable integer positions.
///
/// Positions are handed out in first-seen order starting at `0` and are never
/// reused or removed, which gives the owning store a schema that can only grow.
#[derive(Debug, Clone, Default)]
pub struct NameRegistry {
    names: Vec<String>,
    positions: HashMap<String, usize>,
}

impl NameRegistry {
    pub fn new() -> Self {
        Self::default()
    }

    /// Registry whose position `0` is taken by `name`.
    pub fn with_first<N: Into<String>>(name: N) -> Self {
        let mut registry = Self::new();
        registry.resolve_or_create(&name.into());
        registry
    }

    /// Returns the position of `name`, appending it first when unseen.
    pub fn resolve_or_create(&mut self, name: &str) -> usize {
        if let Some(&index) = self.positions.get(name) {
            return index;
        }
        let index = self.names.len();
        self.names.push(name.to_string());
        self.positions.insert(name.to_string(), index);
        trace!(name, index, "registered name");
        index
    }

    pub fn index_of(&self, name: &str) -> Option<usize> {
        self.positions.get(name).copied()
    }

    pub fn name_at(&self, index: usize) -> Option<&str> {
        self.names.get(index).map(String::as_str)
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    /// Names in registration order.
    pub fn names(&self) -> &[String] {
        &self.names
    }

    /// Registered names joined by `delimiter`, registration order.
    pub fn join(&self, delimiter: &str) -> String {
        self.names.join(delimiter)
    }
}
