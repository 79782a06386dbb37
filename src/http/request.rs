//! Declarative request definitions.
//!
//! A definition is a TOML document describing one request:
//!
//! ```toml
//! url = "https://postman-echo.com/get"
//! method = "GET"
//!
//! [[header]]
//! key = "Accept"
//! value = "application/json"
//!
//! [auth]
//! type = "apikey"
//!
//! [[auth.apikey]]
//! key = "value"
//! value = "secret"
//! ```
//!
//! The definition owns its header and auth collections for the whole
//! preparation phase. Signing code borrows the auth context through
//! [`auth_mut`](RequestDefinition::auth_mut), the serializer resolves the
//! headers once the request is ready to go.

use serde::Deserialize;
use std::path::Path;

use crate::auth::RequestAuth;
use crate::error::Result;
use crate::http::HttpMethod;
use crate::http::headers::{HeaderResolver, ResolvedHeaders};
use crate::params::ParamSpec;
use crate::params::collection::ParameterCollection;

#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
pub struct RequestDefinition {
    pub url: String,

    #[serde(default)]
    pub method: HttpMethod,

    #[serde(default, rename = "header", deserialize_with = "deserialize_params")]
    pub headers: ParameterCollection,

    #[serde(default)]
    pub auth: Option<RequestAuth>,
}

impl RequestDefinition {
    pub fn new(method: HttpMethod, url: &str) -> Self {
        Self {
            url: url.to_string(),
            method,
            headers: ParameterCollection::new(),
            auth: None,
        }
    }

    pub fn from_toml(content: &str) -> Result<Self> {
        Ok(toml::from_str::<RequestDefinition>(content)?)
    }

    pub fn from_file(path: impl AsRef<Path>) -> Result<Self> {
        let content = std::fs::read_to_string(path)?;
        Self::from_toml(&content)
    }

    pub fn add_header(&mut self, spec: ParamSpec) {
        self.headers.add(spec);
    }

    pub fn auth_mut(&mut self) -> Option<&mut RequestAuth> {
        self.auth.as_mut()
    }

    pub fn resolve_headers(&self, resolver: &HeaderResolver) -> ResolvedHeaders {
        resolver.resolve(&self.headers)
    }
}

fn deserialize_params<'de, D>(deserializer: D) -> std::result::Result<ParameterCollection, D::Error>
where
    D: serde::Deserializer<'de>,
{
    let specs = Vec::<ParamSpec>::deserialize(deserializer)?;
    Ok(ParameterCollection::from(specs))
}
