mod common;
pub use self::common::{Credentials, Query, DEFAULT_API_VERSION};

mod campaign;
pub use self::campaign::{CampaignQuery, CampaignStatus};
