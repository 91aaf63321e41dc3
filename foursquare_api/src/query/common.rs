//! Shared query infrastructure: the [`Query`] trait and the [`Credentials`] every call carries.

use url::Url;

/// Version date sent as `v` on every request unless overridden.
pub const DEFAULT_API_VERSION: &str = "20140806";

/// Trait implemented by parameter sets sent to the API. The same pairs are
/// used as a query string for GET and as a form body for POST.
pub trait Query {
    /// Returns the set parameters as `(name, value)` pairs in a stable order.
    /// Unset fields are omitted.
    fn to_query_pairs(&self) -> Vec<(String, String)>;

    /// Appends this query's parameters to the given URL, returning the modified URL.
    fn add_to_url(&self, url: &Url) -> Url {
        let mut url = url.clone();
        let pairs = self.to_query_pairs();
        if !pairs.is_empty() {
            url.query_pairs_mut().extend_pairs(pairs);
        }
        url
    }
}

/// OAuth token and version date attached to each request.
#[derive(Clone)]
pub struct Credentials {
    pub oauth_token: String,
    pub api_version: String,
}

impl Credentials {
    pub fn new(oauth_token: &str) -> Self {
        Self {
            oauth_token: oauth_token.to_string(),
            api_version: DEFAULT_API_VERSION.to_string(),
        }
    }

    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.api_version = api_version.to_string();
        self
    }
}

impl std::fmt::Debug for Credentials {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Credentials")
            .field("oauth_token", &"<redacted>")
            .field("api_version", &self.api_version)
            .finish()
    }
}

impl Query for Credentials {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        vec![
            ("oauth_token".to_string(), self.oauth_token.clone()),
            ("v".to_string(), self.api_version.clone()),
        ]
    }
}
