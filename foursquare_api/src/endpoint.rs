//! Campaign endpoint routing: HTTP method and URL for each operation.

use reqwest::Method;
use url::Url;

use crate::Error;

/// Production API root. Appending an endpoint path yields the full URL.
pub const DEFAULT_BASE_URL: &str = "https://api.foursquare.com/v2";

/// One of the six campaign operations, with the campaign id where the path needs one.
#[derive(Clone, Debug, PartialEq, Eq)]
pub enum CampaignEndpoint<'a> {
    Add,
    List,
    TimeSeries(&'a str),
    Delete(&'a str),
    End(&'a str),
    Start(&'a str),
}

impl CampaignEndpoint<'_> {
    pub fn method(&self) -> Method {
        match self {
            CampaignEndpoint::List => Method::GET,
            _ => Method::POST,
        }
    }

    /// Path segments below the API root.
    fn segments(&self) -> Vec<&str> {
        match self {
            CampaignEndpoint::Add => vec!["campaigns", "add"],
            CampaignEndpoint::List => vec!["campaigns", "list"],
            CampaignEndpoint::TimeSeries(id) => vec!["campaigns", *id, "timeseries"],
            CampaignEndpoint::Delete(id) => vec!["campaigns", *id, "delete"],
            CampaignEndpoint::End(id) => vec!["campaigns", *id, "end"],
            CampaignEndpoint::Start(id) => vec!["campaigns", *id, "start"],
        }
    }

    fn campaign_id(&self) -> Option<&str> {
        match self {
            CampaignEndpoint::Add | CampaignEndpoint::List => None,
            CampaignEndpoint::TimeSeries(id)
            | CampaignEndpoint::Delete(id)
            | CampaignEndpoint::End(id)
            | CampaignEndpoint::Start(id) => Some(*id),
        }
    }

    /// Builds the endpoint URL under `base_url`. The campaign id is
    /// percent-encoded as a single path segment; `.` and `..` are rejected
    /// since URL normalization would drop them.
    pub fn url(&self, base_url: &Url) -> Result<Url, Error> {
        if let Some(id) = self.campaign_id() {
            if is_dot_segment(id) {
                tracing::warn!("Rejected campaign id {:?}", id);
                return Err(Error::InvalidArgument(format!(
                    "campaign id {:?} is not a valid path segment",
                    id
                )));
            }
        }
        let mut url = base_url.clone();
        url.set_query(None);
        url.path_segments_mut()
            .map_err(|_| {
                tracing::error!("Base URL cannot hold a path: {}", base_url);
                Error::InvalidArgument(format!("base URL {} cannot be a base", base_url))
            })?
            .pop_if_empty()
            .extend(self.segments());
        Ok(url)
    }
}

pub(crate) fn is_dot_segment(id: &str) -> bool {
    id == "." || id == ".."
}

#[cfg(test)]
mod tests {
    use reqwest::Method;
    use url::Url;

    use super::{CampaignEndpoint, DEFAULT_BASE_URL};
    use crate::Error;

    fn base() -> Url {
        Url::parse(DEFAULT_BASE_URL).unwrap()
    }

    #[test]
    fn production_urls_match_api_routes() {
        let cases = [
            (
                CampaignEndpoint::Add,
                Method::POST,
                "https://api.foursquare.com/v2/campaigns/add",
            ),
            (
                CampaignEndpoint::List,
                Method::GET,
                "https://api.foursquare.com/v2/campaigns/list",
            ),
            (
                CampaignEndpoint::TimeSeries("abc123"),
                Method::POST,
                "https://api.foursquare.com/v2/campaigns/abc123/timeseries",
            ),
            (
                CampaignEndpoint::Delete("abc123"),
                Method::POST,
                "https://api.foursquare.com/v2/campaigns/abc123/delete",
            ),
            (
                CampaignEndpoint::End("abc123"),
                Method::POST,
                "https://api.foursquare.com/v2/campaigns/abc123/end",
            ),
            (
                CampaignEndpoint::Start("abc123"),
                Method::POST,
                "https://api.foursquare.com/v2/campaigns/abc123/start",
            ),
        ];
        for (endpoint, method, expected) in cases {
            assert_eq!(endpoint.method(), method);
            assert_eq!(endpoint.url(&base()).unwrap().as_str(), expected);
        }
    }

    #[test]
    fn trailing_slash_on_base_is_tolerated() {
        let base = Url::parse("http://127.0.0.1:8080/v2/").unwrap();
        assert_eq!(
            CampaignEndpoint::List.url(&base).unwrap().as_str(),
            "http://127.0.0.1:8080/v2/campaigns/list"
        );
    }

    #[test]
    fn campaign_id_cannot_escape_its_segment() {
        insta::assert_snapshot!(
            CampaignEndpoint::End("a/b?c").url(&base()).unwrap().to_string(),
            @"https://api.foursquare.com/v2/campaigns/a%2Fb%3Fc/end"
        );
    }

    #[test]
    fn dot_campaign_ids_are_rejected() {
        for endpoint in [
            CampaignEndpoint::End(".."),
            CampaignEndpoint::TimeSeries("."),
            CampaignEndpoint::Delete(".."),
            CampaignEndpoint::Start("."),
        ] {
            assert!(matches!(
                endpoint.url(&base()),
                Err(Error::InvalidArgument(_))
            ));
        }
        assert_eq!(
            CampaignEndpoint::End("...").url(&base()).unwrap().as_str(),
            "https://api.foursquare.com/v2/campaigns/.../end"
        );
    }
}
