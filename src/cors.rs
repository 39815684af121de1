use http::{Method, Uri};
use tower_http::cors::{AllowOrigin, Any, CorsLayer};
use tracing::warn;

pub const DEFAULT_CORS_ORIGINS: &str =
    "http://localhost,https://localhost,http://127.0.0.1,https://127.0.0.1";

/// One configured origin. A rule without a port matches the host on any port.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct OriginRule {
    scheme: String,
    host: String,
    port: Option<u16>,
}

impl OriginRule {
    /// Parse `scheme://host[:port]`; `None` if either part is missing.
    #[must_use]
    pub fn parse(origin: &str) -> Option<Self> {
        let uri: Uri = origin.parse().ok()?;
        Some(Self {
            scheme: uri.scheme_str()?.to_ascii_lowercase(),
            host: uri.host()?.to_ascii_lowercase(),
            port: uri.port_u16(),
        })
    }

    /// Whether a request's `Origin` value falls under this rule.
    #[must_use]
    pub fn matches(&self, origin: &Self) -> bool {
        self.scheme == origin.scheme
            && self.host == origin.host
            && match self.port {
                Some(port) => origin.port == Some(port),
                None => true,
            }
    }
}

/// Whether `origin` is allowed by any of `rules`.
#[must_use]
pub fn origin_allowed(rules: &[OriginRule], origin: &str) -> bool {
    OriginRule::parse(origin).is_some_and(|origin| rules.iter().any(|rule| rule.matches(&origin)))
}

/// Build a CORS layer for the REST API with the given allowed origins.
///
/// Scheme and host must match exactly. Pass "*" in the origins list to allow
/// all origins.
pub fn build_cors_layer(cors_origins: Vec<String>) -> CorsLayer {
    let allow_all_origins = cors_origins.iter().any(|o| o == "*");
    let rules: Vec<OriginRule> = cors_origins
        .iter()
        .filter(|o| o.as_str() != "*")
        .filter_map(|o| {
            let rule = OriginRule::parse(o);
            if rule.is_none() {
                warn!("Ignoring unparseable CORS origin: {o}");
            }
            rule
        })
        .collect();

    CorsLayer::new()
        .allow_origin(AllowOrigin::predicate(move |origin, _| {
            if allow_all_origins {
                return true;
            }
            origin
                .to_str()
                .is_ok_and(|origin_str| origin_allowed(&rules, origin_str))
        }))
        .allow_methods([
            Method::GET,
            Method::POST,
            Method::PUT,
            Method::DELETE,
            Method::OPTIONS,
        ])
        .allow_headers(Any)
}

/// Split a comma-separated origin list, dropping blanks.
#[must_use]
pub fn parse_origins(origins: &[String]) -> Vec<String> {
    origins
        .iter()
        .map(|s| s.trim().to_string())
        .filter(|s| !s.is_empty())
        .collect()
}
