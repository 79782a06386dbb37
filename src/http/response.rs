use crate::http::headers::{HeaderResolver, ResolvedHeaders};
use crate::params::ParamSpec;
use crate::params::collection::ParameterCollection;

/// Response as seen by test scripts once it has been received.
///
/// Headers are kept exactly as received, repeated names included. Lookups by
/// name ignore case and return the merged value, the same way request
/// headers are resolved before sending.
#[derive(Debug, Clone, Default)]
pub struct HttpResponse {
    pub status: u16,
    pub headers: ParameterCollection,
    resolver: HeaderResolver,
}

impl HttpResponse {
    pub fn new(status: u16, resolver: HeaderResolver) -> Self {
        Self {
            status,
            headers: ParameterCollection::new(),
            resolver,
        }
    }

    pub fn add_header(&mut self, name: &str, value: &str) {
        self.headers.add(ParamSpec::new(name, Some(value)));
    }

    pub fn header(&self, name: &str) -> Option<String> {
        self.resolver.resolve_one(&self.headers, name)
    }

    pub fn resolved_headers(&self) -> ResolvedHeaders {
        self.resolver.resolve(&self.headers)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::config::ResolverConfig;

    #[test]
    fn test_header_lookup_ignores_case() {
        let mut res = HttpResponse::default();
        res.add_header("Content-Type", "application/json; charset=utf-8");

        assert_eq!(
            res.header("contenT-TypE").as_deref(),
            Some("application/json; charset=utf-8")
        );
        assert_eq!(res.header("content-length"), None);
    }

    #[test]
    fn test_repeated_headers_merge() {
        let resolver = HeaderResolver::new(ResolverConfig {
            separator: "; ".to_string(),
            ..ResolverConfig::default()
        });
        let mut res = HttpResponse::new(200, resolver);
        res.add_header("Set-Cookie", "a=1");
        res.add_header("set-cookie", "b=2");

        assert_eq!(res.header("SET-COOKIE").as_deref(), Some("a=1; b=2"));
        assert_eq!(res.resolved_headers().len(), 1);
        assert_eq!(res.headers.len(), 2);
    }
}
