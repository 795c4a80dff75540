use crate::evaluation::preview::MISSING_VALUE;
use crate::evaluation::{NameRegistry, Vote};
use std::collections::HashMap;
use tracing::debug;

/// Latest named prediction values, rendered against every vote name ever seen.
///
/// Each [`set_vote`](Self::set_vote) replaces the previous snapshot in full;
/// names absent from the latest call render as missing.
#[derive(Debug, Clone, Default)]
pub struct VoteSnapshot {
    names: NameRegistry,
    current: HashMap<String, String>,
}

impl VoteSnapshot {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn set_vote(&mut self, votes: &[Vote]) {
        let mut next = HashMap::with_capacity(votes.len());
        for vote in votes {
            self.names.resolve_or_create(&vote.name);
            next.insert(vote.name.clone(), vote.value.clone());
        }
        self.current = next;
        debug!(
            supplied = votes.len(),
            known = self.names.len(),
            "replaced vote snapshot"
        );
    }

    /// Value set for `name` by the most recent update.
    pub fn value(&self, name: &str) -> Option<&str> {
        self.current.get(name).map(String::as_str)
    }

    /// Every vote name seen across all updates, registration order.
    pub fn names(&self) -> &[String] {
        self.names.names()
    }

    #[inline]
    pub fn len(&self) -> usize {
        self.names.len()
    }

    #[inline]
    pub fn is_empty(&self) -> bool {
        self.names.is_empty()
    }

    pub fn header_to_string(&self) -> String {
        self.names.join(",")
    }

    pub fn entry_to_string(&self) -> String {
        self.render(",")
    }

    pub(crate) fn render(&self, delimiter: &str) -> String {
        self.names
            .names()
            .iter()
            .map(|name| self.value(name).unwrap_or(MISSING_VALUE))
            .collect::<Vec<_>>()
            .join(delimiter)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::testing::votes;

    #[test]
    fn empty_snapshot_renders_nothing() {
        let s = VoteSnapshot::new();
        assert!(s.is_empty());
        assert_eq!(s.header_to_string(), "");
        assert_eq!(s.entry_to_string(), "");
    }

    #[test]
    fn renders_latest_values_in_registry_order() {
        let mut s = VoteSnapshot::new();
        s.set_vote(&votes(&[("true", "A"), ("predicted", "B")]));
        assert_eq!(s.header_to_string(), "true,predicted");
        assert_eq!(s.entry_to_string(), "A,B");
    }

    #[test]
    fn update_replaces_rather_than_merges() {
        let mut s = VoteSnapshot::new();
        s.set_vote(&votes(&[("a", "1"), ("b", "2")]));
        s.set_vote(&votes(&[("b", "3")]));
        assert_eq!(s.entry_to_string(), "?,3");
        assert_eq!(s.value("a"), None);
        assert_eq!(s.value("b"), Some("3"));
    }

    #[test]
    fn names_outside_a_prefix_are_placed_by_name() {
        let mut s = VoteSnapshot::new();
        s.set_vote(&votes(&[("a", "1"), ("b", "2"), ("c", "3")]));
        s.set_vote(&votes(&[("c", "9"), ("d", "4")]));
        assert_eq!(s.header_to_string(), "a,b,c,d");
        assert_eq!(s.entry_to_string(), "?,?,9,4");
    }

    #[test]
    fn duplicate_vote_names_keep_last_value() {
        let mut s = VoteSnapshot::new();
        s.set_vote(&votes(&[("a", "1"), ("a", "2")]));
        assert_eq!(s.len(), 1);
        assert_eq!(s.entry_to_string(), "2");
    }

    #[test]
    fn empty_update_clears_values_but_keeps_names() {
        let mut s = VoteSnapshot::new();
        s.set_vote(&votes(&[("a", "1"), ("b", "2")]));
        s.set_vote(&[]);
        assert_eq!(s.header_to_string(), "a,b");
        assert_eq!(s.entry_to_string(), "?,?");
    }
}
