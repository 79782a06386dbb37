//! Key/value entries shared by authentication parameters and request headers.
//!
//! An [`Entry`] keeps its key exactly as it was written so it can be shown
//! back to the user, but every lookup compares keys without regard to letter
//! case (see [`key_matches`]). Values are optional: an entry declared without
//! a value is not the same thing as an entry whose value is the empty string.

use serde::Deserialize;

pub mod collection;

/// Declarative form of an entry, as found in request definitions.
///
/// Fields left out take the defaults documented on [`Entry`].
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct ParamSpec {
    pub key: String,
    #[serde(default)]
    pub value: Option<String>,
    #[serde(default)]
    pub disabled: bool,
    #[serde(default)]
    pub system: bool,
}

impl ParamSpec {
    pub fn new(key: &str, value: Option<&str>) -> Self {
        Self {
            key: key.to_string(),
            value: value.map(str::to_string),
            ..Self::default()
        }
    }

    pub fn disabled(mut self) -> Self {
        self.disabled = true;
        self
    }

    pub fn system(mut self) -> Self {
        self.system = true;
        self
    }
}

/// One record of a [`ParameterCollection`](collection::ParameterCollection).
///
/// `disabled` defaults to false. `system` marks entries injected by the
/// runtime rather than authored by the user, and also defaults to false.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Entry {
    pub key: String,
    pub value: Option<String>,
    pub disabled: bool,
    pub system: bool,
}

impl Entry {
    pub fn get(&self) -> Option<&str> {
        self.value.as_deref()
    }

    pub fn set(&mut self, value: Option<String>) {
        self.value = value;
    }

    pub fn is_enabled(&self) -> bool {
        !self.disabled
    }

    pub fn matches(&self, key: &str) -> bool {
        key_matches(&self.key, key)
    }
}

impl From<ParamSpec> for Entry {
    fn from(spec: ParamSpec) -> Self {
        Self {
            key: spec.key,
            value: spec.value,
            disabled: spec.disabled,
            system: spec.system,
        }
    }
}

/// Compares two keys ignoring letter case.
///
/// Uses Unicode lowercase mapping rather than ASCII folding, without
/// allocating.
pub fn key_matches(a: &str, b: &str) -> bool {
    a.chars()
        .flat_map(char::to_lowercase)
        .eq(b.chars().flat_map(char::to_lowercase))
}

/// Canonical (lowercased) form of a key, used to group entries. Lowercases
/// char by char so that it agrees with [`key_matches`].
pub fn canonical_key(key: &str) -> String {
    key.chars().flat_map(char::to_lowercase).collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_key_matches_ignores_case() {
        assert!(key_matches("Alpha", "ALPHA"));
        assert!(key_matches("alpha", "aLpHa"));
        assert!(!key_matches("alpha", "alphas"));
        assert!(!key_matches("alpha", "beta"));
    }

    #[test]
    fn test_key_matches_unicode() {
        assert!(key_matches("ÜBER", "über"));
        assert!(key_matches("", ""));
    }

    #[test]
    fn test_entry_from_spec_defaults() {
        let entry = Entry::from(ParamSpec::new("token", None));
        assert_eq!(entry.key, "token");
        assert_eq!(entry.get(), None);
        assert!(entry.is_enabled());
        assert!(!entry.system);
    }

    #[test]
    fn test_absent_value_differs_from_empty() {
        let absent = Entry::from(ParamSpec::new("k", None));
        let empty = Entry::from(ParamSpec::new("k", Some("")));
        assert_ne!(absent.get(), empty.get());
        assert_eq!(empty.get(), Some(""));
    }

    #[test]
    fn test_spec_deserialize_defaults() {
        let spec: ParamSpec = toml::from_str("key = \"Accept\"").unwrap();
        assert_eq!(spec, ParamSpec::new("Accept", None));

        let spec: ParamSpec =
            toml::from_str("key = \"Accept\"\nvalue = \"*/*\"\ndisabled = true").unwrap();
        assert_eq!(spec, ParamSpec::new("Accept", Some("*/*")).disabled());
    }

    #[test]
    fn test_spec_rejects_non_string_value() {
        assert!(toml::from_str::<ParamSpec>("key = \"n\"\nvalue = 3").is_err());
    }
}
