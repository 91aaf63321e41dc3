use std::str::FromStr;

use chrono::{DateTime, Utc};

use crate::{date::parse_epoch_seconds, Error};

use super::Query;

/// Parameters accumulated for the campaigns endpoints.
///
/// `start_at` and `end_at` are independent; no ordering between them is
/// enforced.
#[derive(Clone, Debug, Default, PartialEq)]
pub struct CampaignQuery {
    /// When the campaign starts, in seconds since the epoch. Sent as `startAt`.
    pub start_at: Option<i64>,
    /// When the campaign is deactivated, in seconds since the epoch. Sent as `endAt`.
    pub end_at: Option<i64>,
    /// Existing campaign to copy. Sent as `campaignId`.
    pub campaign_id: Option<String>,
    /// Special the campaign runs. Sent as `specialId`.
    pub special_id: Option<String>,
    /// Venue group the campaign runs at. Sent as `groupId`.
    pub group_id: Option<String>,
    /// Single venue the campaign runs at. Sent as `venueId`.
    pub venue_id: Option<String>,
    /// Status filter for listings. Sent as `status`.
    pub status: Option<CampaignStatus>,
}

impl Query for CampaignQuery {
    fn to_query_pairs(&self) -> Vec<(String, String)> {
        let mut params = Vec::new();

        if let Some(start_at) = self.start_at {
            params.push(("startAt".to_string(), start_at.to_string()));
        }
        if let Some(end_at) = self.end_at {
            params.push(("endAt".to_string(), end_at.to_string()));
        }
        if let Some(ref campaign_id) = self.campaign_id {
            params.push(("campaignId".to_string(), campaign_id.clone()));
        }
        if let Some(ref special_id) = self.special_id {
            params.push(("specialId".to_string(), special_id.clone()));
        }
        if let Some(ref group_id) = self.group_id {
            params.push(("groupId".to_string(), group_id.clone()));
        }
        if let Some(ref venue_id) = self.venue_id {
            params.push(("venueId".to_string(), venue_id.clone()));
        }
        if let Some(status) = self.status {
            params.push(("status".to_string(), status.to_string()));
        }

        params
    }
}

impl CampaignQuery {
    /// Sets `startAt` from a date string such as `2024-01-15`.
    pub fn with_start_time(mut self, start_time: &str) -> Result<Self, Error> {
        self.start_at = Some(parse_epoch_seconds(start_time)?);
        Ok(self)
    }

    /// Sets `endAt` from a date string such as `2024-02-15`.
    pub fn with_end_time(mut self, end_time: &str) -> Result<Self, Error> {
        self.end_at = Some(parse_epoch_seconds(end_time)?);
        Ok(self)
    }

    pub fn with_start_at(mut self, start_at: DateTime<Utc>) -> Self {
        self.start_at = Some(start_at.timestamp());
        self
    }

    pub fn with_end_at(mut self, end_at: DateTime<Utc>) -> Self {
        self.end_at = Some(end_at.timestamp());
        self
    }

    pub fn with_campaign_id(mut self, campaign_id: &str) -> Self {
        self.campaign_id = Some(campaign_id.to_string());
        self
    }

    pub fn with_special_id(mut self, special_id: &str) -> Self {
        self.special_id = Some(special_id.to_string());
        self
    }

    pub fn with_group_id(mut self, group_id: &str) -> Self {
        self.group_id = Some(group_id.to_string());
        self
    }

    pub fn with_venue_id(mut self, venue_id: &str) -> Self {
        self.venue_id = Some(venue_id.to_string());
        self
    }

    pub fn with_status(mut self, status: CampaignStatus) -> Self {
        self.status = Some(status);
        self
    }
}

/// Campaign lifecycle states accepted by the `status` filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum CampaignStatus {
    Pending,
    Scheduled,
    Active,
    Expired,
    Depleted,
    Stopped,
    NotStarted,
    Ended,
    /// Matches campaigns in any state.
    All,
}

impl CampaignStatus {
    pub const ALL_VALUES: [CampaignStatus; 9] = [
        CampaignStatus::Pending,
        CampaignStatus::Scheduled,
        CampaignStatus::Active,
        CampaignStatus::Expired,
        CampaignStatus::Depleted,
        CampaignStatus::Stopped,
        CampaignStatus::NotStarted,
        CampaignStatus::Ended,
        CampaignStatus::All,
    ];

    /// The value as the API spells it.
    pub fn as_str(&self) -> &'static str {
        match self {
            CampaignStatus::Pending => "pending",
            CampaignStatus::Scheduled => "scheduled",
            CampaignStatus::Active => "active",
            CampaignStatus::Expired => "expired",
            CampaignStatus::Depleted => "depleted",
            CampaignStatus::Stopped => "stopped",
            CampaignStatus::NotStarted => "notStarted",
            CampaignStatus::Ended => "ended",
            CampaignStatus::All => "all",
        }
    }
}

impl std::fmt::Display for CampaignStatus {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.as_str())
    }
}

impl FromStr for CampaignStatus {
    type Err = Error;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        CampaignStatus::ALL_VALUES
            .into_iter()
            .find(|status| status.as_str() == s)
            .ok_or_else(|| Error::InvalidCampaignStatus(s.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use chrono::{TimeZone, Utc};
    use url::Url;

    use crate::{
        query::{CampaignQuery, CampaignStatus, Query},
        Error,
    };

    #[test]
    fn test_campaign_query() {
        let url = Url::parse("https://example.com").unwrap();

        insta::assert_snapshot!(CampaignQuery::default()
            .with_start_time("2024-01-15")
            .unwrap()
            .with_end_at(Utc.with_ymd_and_hms(2024, 2, 15, 0, 0, 0).unwrap())
            .with_campaign_id("c1")
            .with_special_id("s1")
            .with_group_id("g1")
            .with_venue_id("v 1")
            .with_status(CampaignStatus::NotStarted)
            .add_to_url(&url)
            .to_string(), @"https://example.com/?startAt=1705276800&endAt=1707955200&campaignId=c1&specialId=s1&groupId=g1&venueId=v+1&status=notStarted");

        insta::assert_snapshot!(CampaignQuery::default().add_to_url(&url).to_string(), @"https://example.com/");
    }

    #[test]
    fn status_round_trips_every_wire_value() {
        let wire = [
            "pending",
            "scheduled",
            "active",
            "expired",
            "depleted",
            "stopped",
            "notStarted",
            "ended",
            "all",
        ];
        for value in wire {
            let status: CampaignStatus = value.parse().unwrap();
            assert_eq!(status.to_string(), value);
        }
    }

    #[test]
    fn status_rejects_unknown_and_case_variants() {
        for value in ["bogus", "Active", "not_started", ""] {
            match value.parse::<CampaignStatus>() {
                Err(Error::InvalidCampaignStatus(bad)) => assert_eq!(bad, value),
                other => panic!("expected InvalidCampaignStatus, got {:?}", other),
            }
        }
    }

    #[test]
    fn bad_start_time_is_an_error() {
        let result = CampaignQuery::default().with_start_time("not a date");
        assert!(matches!(result, Err(Error::InvalidDate(_))));
    }
}
