//! Ordered, case-insensitive, multi-valued key/value collection.
//!
//! This is the storage behind both authentication parameters
//! ([`AuthFacade`](crate::auth::AuthFacade)) and request headers
//! ([`HeaderResolver`](crate::http::headers::HeaderResolver)).
//!
//! Entries are kept in a plain vector so insertion order is exactly the
//! enumeration order. Several entries may share a key, whatever their casing:
//! the collection never deduplicates nor merges on insert. Lookups scan from
//! the front and return the first match.
//!
//! Merging same-key entries into one value is not done here. Consumers such
//! as the header resolver apply their own rules on top of enumeration.

use crate::params::{Entry, ParamSpec};

#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ParameterCollection {
    entries: Vec<Entry>,
}

impl ParameterCollection {
    pub fn new() -> Self {
        Self {
            entries: Vec::new(),
        }
    }

    /// Appends a new entry built from `spec`. Existing entries are untouched,
    /// even when one of them already carries the same key.
    pub fn add(&mut self, spec: ParamSpec) {
        self.entries.push(Entry::from(spec));
    }

    /// First entry, in insertion order, whose key matches ignoring case.
    pub fn one(&self, key: &str) -> Option<&Entry> {
        self.entries.iter().find(|e| e.matches(key))
    }

    pub fn one_mut(&mut self, key: &str) -> Option<&mut Entry> {
        self.entries.iter_mut().find(|e| e.matches(key))
    }

    /// Every matching entry, in insertion order.
    pub fn all<'a>(&'a self, key: &'a str) -> impl Iterator<Item = &'a Entry> + 'a {
        self.entries.iter().filter(move |e| e.matches(key))
    }

    pub fn iter(&self) -> std::slice::Iter<'_, Entry> {
        self.entries.iter()
    }

    /// Entries that are not disabled, in insertion order.
    pub fn enabled(&self) -> impl Iterator<Item = &Entry> {
        self.entries.iter().filter(|e| e.is_enabled())
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }
}

impl From<Vec<ParamSpec>> for ParameterCollection {
    fn from(specs: Vec<ParamSpec>) -> Self {
        specs.into_iter().collect()
    }
}

impl FromIterator<ParamSpec> for ParameterCollection {
    fn from_iter<I: IntoIterator<Item = ParamSpec>>(iter: I) -> Self {
        Self {
            entries: iter.into_iter().map(Entry::from).collect(),
        }
    }
}

impl<'a> IntoIterator for &'a ParameterCollection {
    type Item = &'a Entry;
    type IntoIter = std::slice::Iter<'a, Entry>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn keys(list: &ParameterCollection) -> Vec<&str> {
        list.iter().map(|e| e.key.as_str()).collect()
    }

    fn mixed_case() -> ParameterCollection {
        ParameterCollection::from(vec![
            ParamSpec::new("Alpha", Some("1")),
            ParamSpec::new("beta", Some("2")),
            ParamSpec::new("ALPHA", Some("3")),
            ParamSpec::new("alpha", None),
        ])
    }

    #[test]
    fn test_add_preserves_insertion_order() {
        let mut list = ParameterCollection::new();
        list.add(ParamSpec::new("b", Some("1")));
        list.add(ParamSpec::new("A", Some("2")));
        list.add(ParamSpec::new("a", Some("3")));
        list.add(ParamSpec::new("c", None));
        assert_eq!(keys(&list), ["b", "A", "a", "c"]);
    }

    #[test]
    fn test_add_never_merges() {
        let mut list = mixed_case();
        list.add(ParamSpec::new("alpha", Some("4")));
        assert_eq!(list.len(), 5);
        assert_eq!(list.one("alpha").and_then(Entry::get), Some("1"));
    }

    #[test]
    fn test_one_is_case_insensitive_first_match() {
        let list = mixed_case();
        for key in ["Alpha", "ALPHA", "alpha"] {
            let entry = list.one(key).unwrap();
            assert_eq!(entry.key, "Alpha");
            assert_eq!(entry.get(), Some("1"));
        }
        assert!(list.one("gamma").is_none());
    }

    #[test]
    fn test_lookup_does_not_mutate() {
        let list = mixed_case();
        let snapshot = list.clone();
        for _ in 0..3 {
            let _ = list.one("ALPHA");
            let _ = list.all("beta").count();
            let _ = list.one("missing");
        }
        assert_eq!(list, snapshot);
    }

    #[test]
    fn test_all_in_insertion_order() {
        let list = mixed_case();
        let values: Vec<_> = list.all("alpha").map(Entry::get).collect();
        assert_eq!(values, [Some("1"), Some("3"), None]);
        assert_eq!(list.all("gamma").count(), 0);
    }

    #[test]
    fn test_enabled_skips_disabled() {
        let list = ParameterCollection::from(vec![
            ParamSpec::new("a", Some("1")),
            ParamSpec::new("b", Some("2")).disabled(),
            ParamSpec::new("c", Some("3")),
        ]);
        let enabled: Vec<_> = list.enabled().map(|e| e.key.as_str()).collect();
        assert_eq!(enabled, ["a", "c"]);
        assert_eq!(list.len(), 3);
    }
}
