use thiserror::Error;
use tracing::debug;

use crate::{
    params::OsrmClientParams,
    response::{OsrmRoute, OsrmTable, parse_route, parse_table},
};

#[derive(Debug, Error)]
pub enum OsrmError {
    #[error("HTTP request failed: {0}")]
    Request(#[from] reqwest::Error),

    #[error("API error: {status} - {message}")]
    Api { status: u16, message: String },

    #[error("OSRM returned {code}: {message}")]
    Code { code: String, message: String },

    #[error("Deserialization error: {0}")]
    Deserialize(#[from] serde_json::Error),

    #[error("Incomplete response: {0}")]
    IncompleteResponse(&'static str),
}

pub const OSRM_TABLE_API_PATH: &str = "/table/v1/";
pub const OSRM_ROUTE_API_PATH: &str = "/route/v1/";

/// Formats points as the `lon,lat;lon,lat` path segment OSRM expects.
pub fn coordinates_path<P>(points: &[P]) -> String
where
    for<'a> &'a P: Into<geo_types::Point>,
{
    points
        .iter()
        .map(|point| {
            let point: geo_types::Point = point.into();
            format!("{},{}", point.x(), point.y())
        })
        .collect::<Vec<_>>()
        .join(";")
}

pub struct OsrmClient {
    params: OsrmClientParams,
    client: reqwest::Client,
}

impl OsrmClient {
    pub fn new(params: OsrmClientParams) -> Result<Self, OsrmError> {
        let client = reqwest::Client::builder().timeout(params.timeout).build()?;

        Ok(Self { params, client })
    }

    pub fn params(&self) -> &OsrmClientParams {
        &self.params
    }

    fn service_url<P>(&self, api_path: &str, points: &[P]) -> String
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let mut url = self.params.osrm_url.clone();
        url.push_str(api_path);
        url.push_str(&self.params.profile);
        url.push('/');
        url.push_str(&coordinates_path(points));
        url
    }

    /// Fetches the all-pairs distance and duration table.
    /// Fewer than two points yield an empty table without any request.
    pub async fn fetch_table<P>(&self, points: &[P]) -> Result<OsrmTable, OsrmError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        if points.len() < 2 {
            return Ok(OsrmTable::empty());
        }

        let url = self.service_url(OSRM_TABLE_API_PATH, points);
        debug!("OsrmApi: Requesting table for {} points", points.len());

        let response = self
            .client
            .get(url)
            .query(&[("annotations", "distance,duration")])
            .send()
            .await?;

        let body = Self::handle_response(response).await?;
        parse_table(&body, points.len())
    }

    /// Fetches the driving route visiting `points` in the given order.
    pub async fn fetch_route<P>(&self, points: &[P]) -> Result<OsrmRoute, OsrmError>
    where
        for<'a> &'a P: Into<geo_types::Point>,
    {
        let url = self.service_url(OSRM_ROUTE_API_PATH, points);
        debug!("OsrmApi: Requesting route through {} points", points.len());

        let response = self
            .client
            .get(url)
            .query(&[("overview", "full"), ("geometries", "geojson")])
            .send()
            .await?;

        let body = Self::handle_response(response).await?;
        parse_route(&body)
    }

    async fn handle_response(response: reqwest::Response) -> Result<Vec<u8>, OsrmError> {
        if response.status().is_success() {
            Ok(response.bytes().await?.to_vec())
        } else {
            let status = response.status().as_u16();
            let message = response.text().await.unwrap_or_default();
            Err(OsrmError::Api { status, message })
        }
    }
}
