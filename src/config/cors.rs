use actix_cors::Cors;
use std::env;

/// Cross-origin policy: an explicit allow-list plus a single wildcard host
/// suffix for preview deployments.
#[derive(Debug, Clone)]
pub struct CorsConfig {
    pub allowed_origins: Vec<String>,
    pub allowed_origin_suffix: String,
}

impl CorsConfig {
    pub fn from_env() -> Self {
        let allowed_origins = env::var("CORS_ALLOWED_ORIGINS")
            .unwrap_or_else(|_| "http://localhost:5173".to_string())
            .split(',')
            .map(|origin| origin.trim().to_string())
            .filter(|origin| !origin.is_empty())
            .collect();

        let allowed_origin_suffix =
            env::var("CORS_ALLOWED_ORIGIN_SUFFIX").unwrap_or_else(|_| ".vercel.app".to_string());

        CorsConfig {
            allowed_origins,
            allowed_origin_suffix,
        }
    }

    /// Decide whether a request origin may use the API.
    ///
    /// Exact allow-list entries match the whole origin; the wildcard suffix
    /// matches against the origin's host only, so ports and schemes do not
    /// defeat it.
    pub fn is_allowed(&self, origin: &str) -> bool {
        if self.allowed_origins.iter().any(|allowed| allowed == origin) {
            return true;
        }

        if self.allowed_origin_suffix.is_empty() {
            return false;
        }

        origin_host(origin).ends_with(self.allowed_origin_suffix.as_str())
    }

    /// Build the actix middleware enforcing this policy
    pub fn middleware(&self) -> Cors {
        let policy = self.clone();
        Cors::default()
            .allowed_origin_fn(move |origin, _req_head| {
                origin
                    .to_str()
                    .map(|value| policy.is_allowed(value))
                    .unwrap_or(false)
            })
            .allow_any_method()
            .allow_any_header()
            .max_age(3600)
    }
}

fn origin_host(origin: &str) -> &str {
    let without_scheme = origin
        .split_once("://")
        .map(|(_, rest)| rest)
        .unwrap_or(origin);
    without_scheme
        .split(['/', ':'])
        .next()
        .unwrap_or(without_scheme)
}
