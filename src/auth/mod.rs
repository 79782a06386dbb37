//! Read/write access to authentication parameters.
//!
//! An authentication context ([`RequestAuth`] for requests loaded from a
//! definition) owns one [`ParameterCollection`] per authentication method.
//! Signing code reaches those parameters through an [`AuthFacade`], which
//! borrows the active collection for as long as the facade lives.
//!
//! The facade never clobbers what the user wrote: [`AuthFacade::set`] only
//! overwrites entries marked `system`, and appends a new system entry when
//! the key is not present at all. Runtime-computed values (signatures,
//! refreshed tokens) can therefore be written again and again without
//! touching user-declared credentials.

use indexmap::IndexMap;
use serde::Deserialize;
use tracing::{debug, trace};

use crate::error::{ParamError, Result};
use crate::params::collection::ParameterCollection;
use crate::params::{Entry, ParamSpec};

/// Capability of exposing an authentication parameter collection.
///
/// Returning `None` means the context has nothing a facade could work on,
/// and [`AuthFacade::new`] refuses it.
pub trait AuthContext {
    fn parameters_mut(&mut self) -> Option<&mut ParameterCollection>;
}

impl AuthContext for ParameterCollection {
    fn parameters_mut(&mut self) -> Option<&mut ParameterCollection> {
        Some(self)
    }
}

/// Authentication block of a request: the active method plus the
/// parameters declared for each method.
#[derive(Debug, Clone, Default, PartialEq, Eq, Deserialize)]
#[serde(from = "RawRequestAuth")]
pub struct RequestAuth {
    auth_type: String,
    methods: IndexMap<String, ParameterCollection>,
}

#[derive(Deserialize)]
struct RawRequestAuth {
    #[serde(rename = "type")]
    auth_type: String,
    #[serde(flatten)]
    methods: IndexMap<String, Vec<ParamSpec>>,
}

impl From<RawRequestAuth> for RequestAuth {
    fn from(raw: RawRequestAuth) -> Self {
        Self {
            auth_type: raw.auth_type,
            methods: raw
                .methods
                .into_iter()
                .map(|(name, specs)| (name, ParameterCollection::from(specs)))
                .collect(),
        }
    }
}

impl RequestAuth {
    pub fn new(auth_type: &str) -> Self {
        Self {
            auth_type: auth_type.to_string(),
            methods: IndexMap::new(),
        }
    }

    /// Registers the parameters of one method, replacing earlier ones.
    pub fn with_method(mut self, name: &str, parameters: ParameterCollection) -> Self {
        self.methods.insert(name.to_string(), parameters);
        self
    }

    pub fn auth_type(&self) -> &str {
        &self.auth_type
    }

    pub fn use_type(&mut self, auth_type: &str) {
        self.auth_type = auth_type.to_string();
    }

    /// Parameters of the active method, if any were declared.
    pub fn parameters(&self) -> Option<&ParameterCollection> {
        self.methods.get(&self.auth_type)
    }
}

impl AuthContext for RequestAuth {
    fn parameters_mut(&mut self) -> Option<&mut ParameterCollection> {
        self.methods.get_mut(&self.auth_type)
    }
}

/// Input accepted by [`AuthFacade::apply`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum SetInput {
    One(String, Option<String>),
    Many(IndexMap<String, Option<String>>),
}

impl SetInput {
    /// Builds an input from loosely typed values, as handed over by
    /// scripts. A string key sets one value, a table sets each of its pairs.
    /// Any other key shape is rejected, and so are array or table values:
    /// a parameter holds a single string.
    pub fn from_value(key: &toml::Value, value: Option<&toml::Value>) -> Result<Self> {
        match key {
            toml::Value::String(key) => Ok(SetInput::One(
                key.clone(),
                value.map(render).transpose()?,
            )),
            toml::Value::Table(pairs) => Ok(SetInput::Many(
                pairs
                    .iter()
                    .map(|(k, v)| render(v).map(|v| (k.clone(), Some(v))))
                    .collect::<Result<_>>()?,
            )),
            other => Err(ParamError::InvalidInput(other.type_str().to_string())),
        }
    }
}

/// Scalars become strings: strings verbatim, the rest by their TOML display.
fn render(value: &toml::Value) -> Result<String> {
    match value {
        toml::Value::String(s) => Ok(s.clone()),
        toml::Value::Array(_) | toml::Value::Table(_) => {
            Err(ParamError::InvalidValue(value.type_str().to_string()))
        }
        other => Ok(other.to_string()),
    }
}

pub struct AuthFacade<'a> {
    parameters: &'a mut ParameterCollection,
}

impl<'a> AuthFacade<'a> {
    pub fn new<C: AuthContext + ?Sized>(context: &'a mut C) -> Result<Self> {
        let parameters = context
            .parameters_mut()
            .ok_or(ParamError::InvalidAuthContext)?;
        Ok(Self { parameters })
    }

    /// Value of the first entry matching `key`. Both a missing entry and an
    /// entry without value yield `None`.
    pub fn get(&self, key: &str) -> Option<&str> {
        self.parameters.one(key).and_then(Entry::get)
    }

    /// Values for several keys at once, keyed as requested.
    ///
    /// Keys without a matching entry are left out. A matching entry that
    /// has no value is present with `None`.
    pub fn get_many<'k, I>(&self, keys: I) -> IndexMap<String, Option<String>>
    where
        I: IntoIterator<Item = &'k str>,
    {
        keys.into_iter()
            .filter_map(|key| {
                self.parameters
                    .one(key)
                    .map(|entry| (key.to_string(), entry.value.clone()))
            })
            .collect()
    }

    pub fn set(&mut self, key: &str, value: Option<&str>) -> &mut Self {
        self.set_entry(key, value.map(str::to_string));
        self
    }

    pub fn set_many<K, I>(&mut self, pairs: I) -> &mut Self
    where
        K: AsRef<str>,
        I: IntoIterator<Item = (K, Option<String>)>,
    {
        for (key, value) in pairs {
            self.set_entry(key.as_ref(), value);
        }
        self
    }

    pub fn apply(&mut self, input: SetInput) -> &mut Self {
        match input {
            SetInput::One(key, value) => {
                self.set_entry(&key, value);
                self
            }
            SetInput::Many(pairs) => self.set_many(pairs),
        }
    }

    /// Like [`apply`](Self::apply) for loosely typed input. The collection is
    /// left untouched when the key shape is rejected.
    pub fn set_value(
        &mut self,
        key: &toml::Value,
        value: Option<&toml::Value>,
    ) -> Result<&mut Self> {
        let input = SetInput::from_value(key, value)?;
        Ok(self.apply(input))
    }

    fn set_entry(&mut self, key: &str, value: Option<String>) {
        match self.parameters.one_mut(key) {
            Some(entry) if entry.system => {
                debug!(key = %entry.key, "Overwriting system auth parameter");
                entry.set(value);
            }
            Some(entry) => {
                trace!(key = %entry.key, "Keeping user auth parameter");
            }
            None => {
                debug!(key, "Injecting system auth parameter");
                self.parameters.add(ParamSpec {
                    key: key.to_string(),
                    value,
                    disabled: false,
                    system: true,
                });
            }
        }
    }
}
