use serde::Deserialize;
use serde_json::Value;

/// The `meta` block Foursquare attaches to every v2 response.
#[derive(Deserialize, Debug, Clone, PartialEq)]
#[serde(rename_all = "camelCase")]
pub struct Meta {
    pub code: u16,
    #[serde(default)]
    pub error_type: Option<String>,
    #[serde(default)]
    pub error_detail: Option<String>,
    #[serde(default)]
    pub request_id: Option<String>,
}

/// Top-level v2 response body: `{"meta": {...}, "response": {...}}`.
#[derive(Deserialize, Debug, Clone)]
pub struct Envelope {
    pub meta: Meta,
    #[serde(default)]
    pub response: Value,
}
