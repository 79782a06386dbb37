//! Ordered, case-insensitive, multi-valued parameter lists, with the two
//! views a request runtime needs on them: authentication parameters
//! ([`auth`]) and outbound headers ([`http::headers`]).

pub mod auth;
pub mod config;
pub mod error;
pub mod http;
pub mod params;

pub use auth::{AuthContext, AuthFacade, RequestAuth, SetInput};
pub use config::{KeyCase, ResolverConfig};
pub use error::{ParamError, Result};
pub use http::headers::{HeaderResolver, ResolvedHeaders};
pub use http::request::RequestDefinition;
pub use http::response::HttpResponse;
pub use params::collection::ParameterCollection;
pub use params::{Entry, ParamSpec};
