use serde::Deserialize;
use std::path::Path;
use std::str::FromStr;
use tracing::warn;

use crate::error::ParamError;

/// Letter case used for header names in the resolved mapping.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Deserialize)]
#[serde(rename_all = "kebab-case")]
pub enum KeyCase {
    /// Lowercased canonical form shared by every entry of the group.
    #[default]
    Lowercase,
    /// Casing of the first enabled entry of the group.
    FirstSeen,
}

#[derive(Debug, Clone, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct ResolverConfig {
    /// Placed between the values of a header's enabled entries.
    pub separator: String,

    pub key_case: KeyCase,
}

impl Default for ResolverConfig {
    fn default() -> Self {
        Self {
            separator: ", ".to_string(),
            key_case: KeyCase::Lowercase,
        }
    }
}

impl FromStr for ResolverConfig {
    type Err = ParamError;

    fn from_str(content: &str) -> Result<Self, Self::Err> {
        Ok(toml::from_str::<ResolverConfig>(content)?)
    }
}

impl ResolverConfig {
    /// Loads the config from a TOML file, falling back to the defaults when
    /// the file cannot be read or parsed.
    pub fn from_file(path: impl AsRef<Path>) -> Self {
        let path = path.as_ref();
        let content = match std::fs::read_to_string(path) {
            Ok(content) => content,
            Err(err) => {
                warn!("Fail to read {}: {err}", path.display());
                warn!("Fall back to default config");
                return ResolverConfig::default();
            }
        };

        match content.parse::<ResolverConfig>() {
            Ok(config) => config,
            Err(err) => {
                warn!("Fail to deserialize config file {}: {err}", path.display());
                warn!("Fall back to default config");
                ResolverConfig::default()
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use std::io::Write;

    #[test]
    fn test_defaults() {
        let config = ResolverConfig::default();
        assert_eq!(config.separator, ", ");
        assert_eq!(config.key_case, KeyCase::Lowercase);
    }

    #[test]
    fn test_partial_file_keeps_defaults() {
        let config: ResolverConfig = "key_case = \"first-seen\"".parse().unwrap();
        assert_eq!(config.key_case, KeyCase::FirstSeen);
        assert_eq!(config.separator, ", ");
    }

    #[test]
    fn test_from_str_reports_errors() {
        let err = "separator = 1".parse::<ResolverConfig>().unwrap_err();
        assert!(matches!(err, ParamError::Definition(_)));
    }

    #[test]
    fn test_from_file() {
        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "separator = \"; \"\nkey_case = \"first-seen\"").unwrap();

        let config = ResolverConfig::from_file(file.path());
        assert_eq!(config.separator, "; ");
        assert_eq!(config.key_case, KeyCase::FirstSeen);
    }

    #[test]
    fn test_from_file_falls_back() {
        let dir = tempfile::tempdir().unwrap();
        let config = ResolverConfig::from_file(dir.path().join("missing.toml"));
        assert_eq!(config, ResolverConfig::default());

        let mut file = tempfile::NamedTempFile::new().unwrap();
        writeln!(file, "key_case = \"upper\"").unwrap();
        assert_eq!(
            ResolverConfig::from_file(file.path()),
            ResolverConfig::default()
        );
    }
}
