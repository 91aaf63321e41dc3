//! Client for the Foursquare v2 campaigns API.
//!
//! ```no_run
//! use foursquare_api::{CampaignClient, CampaignStatus};
//!
//! # async fn example() -> Result<(), foursquare_api::Error> {
//! let mut client = CampaignClient::new("OAUTH_TOKEN")?;
//! client
//!     .set_status(CampaignStatus::Active)
//!     .set_group_id("group-id")
//!     .set_start_time("2024-01-15")?;
//! let campaigns = client.get_list().await?;
//! println!("{}", campaigns["response"]);
//! # Ok(())
//! # }
//! ```
mod client;
mod date;
mod endpoint;
mod errors;
mod query;
mod transport;
pub mod types;
pub use self::client::CampaignClient;
pub use self::date::parse_epoch_seconds;
pub use self::endpoint::{CampaignEndpoint, DEFAULT_BASE_URL};
pub use self::errors::Error;
pub use self::query::{CampaignQuery, CampaignStatus, Credentials, Query, DEFAULT_API_VERSION};
pub use self::transport::{HttpTransport, Transport, REQUEST_TIMEOUT};
