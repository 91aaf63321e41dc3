//! Client for the Foursquare v2 campaigns API.

use chrono::{DateTime, Utc};
use serde_json::Value;
use url::Url;

use crate::{
    date::parse_epoch_seconds,
    endpoint::{is_dot_segment, CampaignEndpoint, DEFAULT_BASE_URL},
    query::{CampaignQuery, CampaignStatus, Credentials, Query},
    transport::{HttpTransport, Transport},
    Error,
};

/// Client for the campaigns resource.
///
/// Setters accumulate parameters into a [`CampaignQuery`] that is sent with
/// every later call that carries a body or query string. The accumulator is
/// not cleared after a request; use [`CampaignClient::reset_query`] or a fresh
/// client per logical request.
///
/// Setters take `&mut self`, so one client serves one call sequence at a
/// time. Callers that share a client across tasks must wrap it themselves
/// (e.g. in a `tokio::sync::Mutex`).
pub struct CampaignClient<T = HttpTransport> {
    credentials: Credentials,
    base_url: Url,
    query: CampaignQuery,
    transport: T,
}

impl CampaignClient<HttpTransport> {
    /// Creates a client for the production API authenticated with `token`.
    pub fn new(token: &str) -> Result<Self, Error> {
        Self::with_transport(token, HttpTransport::new()?)
    }
}

impl<T: Transport> CampaignClient<T> {
    /// Creates a client that sends its requests through `transport`.
    pub fn with_transport(token: &str, transport: T) -> Result<Self, Error> {
        if token.trim().is_empty() {
            tracing::warn!("Rejected empty OAuth token");
            return Err(Error::InvalidArgument("token must not be empty".to_string()));
        }
        let base_url = Url::parse(DEFAULT_BASE_URL).map_err(|e| {
            tracing::error!("Invalid default base URL: {}", e);
            Error::InvalidArgument(format!("base URL: {}", e))
        })?;
        Ok(Self {
            credentials: Credentials::new(token),
            base_url,
            query: CampaignQuery::default(),
            transport,
        })
    }

    /// Points the client at another API root. Used for testing with wiremock.
    pub fn with_base_url(mut self, base_url: &str) -> Result<Self, Error> {
        self.base_url = Url::parse(base_url).map_err(|e| {
            tracing::warn!("Rejected base URL {}: {}", base_url, e);
            Error::InvalidArgument(format!("base URL {}: {}", base_url, e))
        })?;
        Ok(self)
    }

    /// Overrides the `v` version date sent with each request.
    pub fn with_api_version(mut self, api_version: &str) -> Self {
        self.credentials = self.credentials.with_api_version(api_version);
        self
    }

    /// Replaces the accumulated parameters.
    pub fn with_query(mut self, query: CampaignQuery) -> Self {
        self.query = query;
        self
    }

    /// Parameters accumulated so far.
    pub fn query(&self) -> &CampaignQuery {
        &self.query
    }

    /// OAuth token sent as `oauth_token`.
    pub fn token(&self) -> &str {
        &self.credentials.oauth_token
    }

    /// Clears every accumulated parameter.
    pub fn reset_query(&mut self) -> &mut Self {
        self.query = CampaignQuery::default();
        self
    }

    /// When the campaign starts. Without it the campaign stays pending until
    /// started explicitly; a past time starts it immediately.
    pub fn set_start_time(&mut self, start_time: &str) -> Result<&mut Self, Error> {
        self.query.start_at = Some(parse_date(start_time)?);
        Ok(self)
    }

    /// When the campaign is automatically deactivated.
    pub fn set_end_time(&mut self, end_time: &str) -> Result<&mut Self, Error> {
        self.query.end_at = Some(parse_date(end_time)?);
        Ok(self)
    }

    /// Sets `startAt` from a typed timestamp.
    pub fn set_start_at(&mut self, start_at: DateTime<Utc>) -> &mut Self {
        self.query.start_at = Some(start_at.timestamp());
        self
    }

    /// Sets `endAt` from a typed timestamp.
    pub fn set_end_at(&mut self, end_at: DateTime<Utc>) -> &mut Self {
        self.query.end_at = Some(end_at.timestamp());
        self
    }

    /// ID of an existing campaign to copy.
    pub fn set_campaign_id(&mut self, campaign_id: &str) -> &mut Self {
        self.query.campaign_id = Some(campaign_id.to_string());
        self
    }

    /// Limits results to campaigns involving the given special.
    pub fn set_special_id(&mut self, special_id: &str) -> &mut Self {
        self.query.special_id = Some(special_id.to_string());
        self
    }

    /// Limits results to campaigns involving the given venue group.
    pub fn set_group_id(&mut self, group_id: &str) -> &mut Self {
        self.query.group_id = Some(group_id.to_string());
        self
    }

    /// Filters listings by campaign status.
    pub fn set_status(&mut self, status: CampaignStatus) -> &mut Self {
        self.query.status = Some(status);
        self
    }

    /// Like [`set_status`](Self::set_status) for a raw string. Values outside
    /// the accepted set fail with [`Error::InvalidCampaignStatus`] and leave
    /// the query unchanged.
    pub fn set_status_str(&mut self, status: &str) -> Result<&mut Self, Error> {
        let status = status.parse::<CampaignStatus>().map_err(|e| {
            tracing::warn!("Rejected campaign status {:?}", status);
            e
        })?;
        Ok(self.set_status(status))
    }

    /// Creates a campaign. The special must be started before users see it.
    ///
    /// The three ids overwrite the accumulated `specialId`, `groupId` and
    /// `venueId`; `None` removes the field. Everything else accumulated so
    /// far is sent along.
    pub async fn create_campaign(
        &mut self,
        special_id: Option<&str>,
        group_id: Option<&str>,
        venue_id: Option<&str>,
    ) -> Result<Value, Error> {
        self.query.special_id = special_id.map(str::to_string);
        self.query.group_id = group_id.map(str::to_string);
        self.query.venue_id = venue_id.map(str::to_string);

        let params = self.params_with_query();
        self.post(CampaignEndpoint::Add, &params).await
    }

    /// Lists campaigns matching the accumulated filters.
    pub async fn get_list(&self) -> Result<Value, Error> {
        let url = CampaignEndpoint::List.url(&self.base_url)?;
        self.transport.get(url, &self.params_with_query()).await
    }

    /// Daily stats for a campaign over the accumulated time range.
    pub async fn get_time_series(&self, campaign_id: &str) -> Result<Value, Error> {
        check_campaign_id(campaign_id)?;
        self.post(
            CampaignEndpoint::TimeSeries(campaign_id),
            &self.params_with_query(),
        )
        .await
    }

    /// Deletes a campaign that has never been activated.
    pub async fn delete_campaign(&self, campaign_id: &str) -> Result<Value, Error> {
        check_campaign_id(campaign_id)?;
        self.post(
            CampaignEndpoint::Delete(campaign_id),
            &self.credentials.to_query_pairs(),
        )
        .await
    }

    /// Ends a running campaign.
    pub async fn end_campaign(&self, campaign_id: &str) -> Result<Value, Error> {
        check_campaign_id(campaign_id)?;
        self.post(
            CampaignEndpoint::End(campaign_id),
            &self.credentials.to_query_pairs(),
        )
        .await
    }

    /// Starts a campaign, sending the accumulated parameters.
    pub async fn start_campaign(&self, campaign_id: &str) -> Result<Value, Error> {
        check_campaign_id(campaign_id)?;
        self.post(
            CampaignEndpoint::Start(campaign_id),
            &self.params_with_query(),
        )
        .await
    }

    async fn post(
        &self,
        endpoint: CampaignEndpoint<'_>,
        params: &[(String, String)],
    ) -> Result<Value, Error> {
        let url = endpoint.url(&self.base_url)?;
        self.transport.post(url, params).await
    }

    fn params_with_query(&self) -> Vec<(String, String)> {
        let mut params = self.query.to_query_pairs();
        params.extend(self.credentials.to_query_pairs());
        params
    }
}

fn parse_date(input: &str) -> Result<i64, Error> {
    parse_epoch_seconds(input).map_err(|e| {
        tracing::warn!("Rejected date {:?}", input);
        e
    })
}

fn check_campaign_id(campaign_id: &str) -> Result<(), Error> {
    if campaign_id.trim().is_empty() {
        tracing::warn!("Rejected empty campaign id");
        return Err(Error::InvalidArgument(
            "campaign id must not be empty".to_string(),
        ));
    }
    if is_dot_segment(campaign_id) {
        tracing::warn!("Rejected campaign id {:?}", campaign_id);
        return Err(Error::InvalidArgument(format!(
            "campaign id {:?} is not a valid path segment",
            campaign_id
        )));
    }
    Ok(())
}
