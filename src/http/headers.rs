//! Header resolution for [`RequestDefinition`](crate::http::request::RequestDefinition)
//! and [`HttpResponse`](crate::http::response::HttpResponse).
//!
//! Header entries live in a [`ParameterCollection`], where one name may
//! appear many times with different casings, and some entries may be
//! disabled. Before a request goes out those entries are reduced to one
//! value per name:
//!
//! - entries are grouped by case-insensitive name, groups ordered by the
//!   first appearance of the name;
//! - inside a group, the values of enabled entries are joined with the
//!   separator in insertion order, an absent value counting as empty;
//! - disabled entries contribute nothing, not even a separator;
//! - a group without enabled entries is left out.
//!
//! With the default [`ResolverConfig`], `alpha: foo`, `Alpha: baz` and a
//! value-less `ALPHA` resolve to `alpha: "foo, baz, "`.

use indexmap::IndexMap;
use std::fmt::Write;

use crate::config::{KeyCase, ResolverConfig};
use crate::params::collection::ParameterCollection;
use crate::params::{Entry, canonical_key, key_matches};

/// Final name/value mapping handed to the transport.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct ResolvedHeaders {
    headers: IndexMap<String, String>,
}

impl ResolvedHeaders {
    /// Value of a header, looked up ignoring case.
    pub fn get(&self, name: &str) -> Option<&str> {
        self.headers
            .iter()
            .find(|(key, _)| key_matches(key, name))
            .map(|(_, value)| value.as_str())
    }

    pub fn iter(&self) -> indexmap::map::Iter<'_, String, String> {
        self.headers.iter()
    }

    pub fn len(&self) -> usize {
        self.headers.len()
    }

    pub fn is_empty(&self) -> bool {
        self.headers.is_empty()
    }

    pub fn into_inner(self) -> IndexMap<String, String> {
        self.headers
    }

    /// Renders one `name: value` line per header, CRLF terminated.
    pub fn stringify(&self) -> String {
        self.headers
            .iter()
            .fold(String::new(), |mut block, (name, value)| {
                let _ = write!(block, "{name}: {value}\r\n");
                block
            })
    }
}

#[derive(Debug, Clone, Default)]
pub struct HeaderResolver {
    config: ResolverConfig,
}

impl HeaderResolver {
    pub fn new(config: ResolverConfig) -> Self {
        Self { config }
    }

    pub fn config(&self) -> &ResolverConfig {
        &self.config
    }

    pub fn resolve(&self, list: &ParameterCollection) -> ResolvedHeaders {
        // Slots are opened by any entry so that a name keeps the position of
        // its first appearance, disabled or not.
        let mut groups: IndexMap<String, Vec<&Entry>> = list
            .iter()
            .map(|entry| (canonical_key(&entry.key), Vec::new()))
            .collect();
        for entry in list.enabled() {
            if let Some(group) = groups.get_mut(&canonical_key(&entry.key)) {
                group.push(entry);
            }
        }

        let headers = groups
            .into_iter()
            .filter_map(|(canonical, entries)| {
                let name = match self.config.key_case {
                    KeyCase::Lowercase => canonical,
                    KeyCase::FirstSeen => entries.first()?.key.clone(),
                };
                let value = self.merge(entries.into_iter())?;
                Some((name, value))
            })
            .collect();

        ResolvedHeaders { headers }
    }

    /// Merged value of a single header, as [`resolve`](Self::resolve) would
    /// produce it.
    pub fn resolve_one(&self, list: &ParameterCollection, name: &str) -> Option<String> {
        self.merge(list.all(name).filter(|entry| entry.is_enabled()))
    }

    /// Joins the values of already-enabled entries, `None` when there are none.
    fn merge<'e>(&self, mut entries: impl Iterator<Item = &'e Entry>) -> Option<String> {
        let mut merged = entries.next()?.get().unwrap_or("").to_string();
        for entry in entries {
            merged.push_str(&self.config.separator);
            merged.push_str(entry.get().unwrap_or(""));
        }
        Some(merged)
    }
}
