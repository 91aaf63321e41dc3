//! Error types for the API client.

/// Errors that can occur when configuring the client or making API requests.
#[derive(thiserror::Error, Debug)]
pub enum Error {
    /// A caller-supplied argument was rejected before any request was sent.
    #[error("Invalid argument: {0}")]
    InvalidArgument(String),
    /// The status filter is not one of the values the campaigns API accepts.
    #[error("Invalid campaign status: {0}")]
    InvalidCampaignStatus(String),
    /// A date string could not be converted to epoch seconds.
    #[error("Invalid date: {0}")]
    InvalidDate(String),
    /// An HTTP request failed (network error, timeout, or undecodable response).
    #[error("Request failed")]
    RequestFailed,
    /// The API returned a non-success status with a body snippet.
    #[error("Request failed with status {status}")]
    HttpStatus { status: u16, body: String },
    /// The API returned a non-success status with a Foursquare error block.
    #[error("API error {status} ({error_type}): {detail}")]
    Api {
        status: u16,
        error_type: String,
        detail: String,
    },
}
