//! Place lookups against a geosearch-capable knowledge source.
//!
//! Each lookup is two API round trips: a geosearch for entries near the
//! query coordinate, then one batched detail request for the plain-text
//! intro extract, canonical URL, and metadata of every hit. The default
//! source is the English Wikipedia `api.php` endpoint, but anything
//! speaking the same shape works (the endpoint is constructor-injectable,
//! which is also how the tests point the client at a local mock).

use std::collections::HashMap;

use reqwest::Client;
use serde::{Deserialize, Serialize};

use crate::error::Result;
use crate::geo::Coordinate;

/// Default knowledge-source endpoint.
pub const DEFAULT_ENDPOINT: &str = "https://en.wikipedia.org/w/api.php";

/// Search radius around the query coordinate, in meters.
pub const SEARCH_RADIUS_METERS: u32 = 10_000;

/// Maximum number of places returned per lookup.
pub const RESULT_LIMIT: usize = 5;

/// Extracts are cut to this many characters before the ellipsis suffix.
pub const SUMMARY_MAX_CHARS: usize = 300;

/// A short description of a notable place near a coordinate.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[cfg_attr(feature = "openapi", derive(utoipa::ToSchema))]
pub struct PlaceSummary {
    /// Entry title.
    pub title: String,
    /// Intro extract truncated to [`SUMMARY_MAX_CHARS`] characters, always
    /// followed by a literal `"..."` (even when the extract was shorter).
    pub summary: String,
    /// Canonical URL of the entry.
    pub url: String,
    /// The entry's own coordinate, which may differ slightly from the
    /// query point.
    pub coordinates: Coordinate,
}

/// Client for nearby-place lookups.
///
/// Holds a single [`reqwest::Client`]; cheap to clone via the inner
/// connection pool, but one instance shared through application state is
/// the expected usage.
pub struct PlaceLookupClient {
    client: Client,
    endpoint: String,
}

// --- Wire types ------------------------------------------------------------
//
// Missing keys deserialize to empty defaults rather than failing: the
// source omits `query`/`geosearch`/`pages` entirely for empty result sets,
// and that case must come back as "no places", not as a parse error.

#[derive(Debug, Deserialize)]
struct GeosearchResponse {
    #[serde(default)]
    query: Option<GeosearchQuery>,
}

#[derive(Debug, Deserialize)]
struct GeosearchQuery {
    #[serde(default)]
    geosearch: Vec<GeosearchHit>,
}

#[derive(Debug, Deserialize)]
struct GeosearchHit {
    pageid: u64,
    #[serde(default)]
    lat: Option<f64>,
    #[serde(default)]
    lon: Option<f64>,
}

#[derive(Debug, Deserialize)]
struct DetailResponse {
    #[serde(default)]
    query: Option<DetailQuery>,
}

#[derive(Debug, Deserialize)]
struct DetailQuery {
    #[serde(default)]
    pages: HashMap<String, DetailPage>,
}

#[derive(Debug, Deserialize)]
struct DetailPage {
    #[serde(default)]
    title: String,
    #[serde(default)]
    extract: String,
    #[serde(default)]
    fullurl: String,
}

impl PlaceLookupClient {
    /// Create a client against the default Wikipedia endpoint.
    pub fn new() -> Self {
        Self::with_endpoint(DEFAULT_ENDPOINT)
    }

    /// Create a client against a custom endpoint.
    pub fn with_endpoint(endpoint: impl Into<String>) -> Self {
        Self {
            client: Client::builder()
                .user_agent(concat!(
                    "antipode/",
                    env!("CARGO_PKG_VERSION"),
                    " (antipode map explorer)"
                ))
                .build()
                .expect("Failed to create HTTP client"),
            endpoint: endpoint.into(),
        }
    }

    /// Look up notable places within [`SEARCH_RADIUS_METERS`] of `coord`.
    ///
    /// Returns at most [`RESULT_LIMIT`] summaries. An empty geosearch
    /// result short-circuits without the detail round trip. Result order
    /// follows the detail-response map iteration, which is not guaranteed
    /// to match the geosearch ranking.
    pub async fn places_near(&self, coord: Coordinate) -> Result<Vec<PlaceSummary>> {
        let hits = self.geosearch(coord).await?;
        if hits.is_empty() {
            return Ok(Vec::new());
        }

        let page_ids: Vec<String> = hits.iter().map(|hit| hit.pageid.to_string()).collect();
        let pages = self.page_details(&page_ids).await?;

        tracing::debug!(
            lat = coord.lat,
            lon = coord.lon,
            hits = hits.len(),
            pages = pages.len(),
            "Place lookup complete"
        );

        Ok(assemble_summaries(coord, &hits, pages))
    }

    /// Geosearch round trip: entries near `coord`, radius and limit fixed.
    async fn geosearch(&self, coord: Coordinate) -> Result<Vec<GeosearchHit>> {
        let params = [
            ("action", "query".to_string()),
            ("format", "json".to_string()),
            ("list", "geosearch".to_string()),
            ("gscoord", format!("{}|{}", coord.lat, coord.lon)),
            ("gsradius", SEARCH_RADIUS_METERS.to_string()),
            ("gslimit", RESULT_LIMIT.to_string()),
        ];

        let body = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        let parsed: GeosearchResponse = serde_json::from_str(&body)?;
        Ok(parsed.query.map(|q| q.geosearch).unwrap_or_default())
    }

    /// Detail round trip: one batched request for all page ids.
    async fn page_details(&self, page_ids: &[String]) -> Result<HashMap<String, DetailPage>> {
        let params = [
            ("action", "query".to_string()),
            ("format", "json".to_string()),
            ("pageids", page_ids.join("|")),
            ("prop", "extracts|info|coordinates".to_string()),
            ("exintro", "true".to_string()),
            ("explaintext", "true".to_string()),
            ("inprop", "url".to_string()),
        ];

        let body = self
            .client
            .get(&self.endpoint)
            .query(&params)
            .send()
            .await?
            .text()
            .await?;

        let parsed: DetailResponse = serde_json::from_str(&body)?;
        Ok(parsed.query.map(|q| q.pages).unwrap_or_default())
    }
}

impl Default for PlaceLookupClient {
    fn default() -> Self {
        Self::new()
    }
}

/// Build one [`PlaceSummary`] per detail page, resolving each page's
/// coordinate from the geosearch hit with the same pageid. A page absent
/// from the geosearch hits (or a hit without coordinates) falls back to
/// the original query coordinate.
fn assemble_summaries(
    query: Coordinate,
    hits: &[GeosearchHit],
    pages: HashMap<String, DetailPage>,
) -> Vec<PlaceSummary> {
    pages
        .into_iter()
        .take(RESULT_LIMIT)
        .map(|(page_id, page)| {
            let coordinates = hits
                .iter()
                .find(|hit| hit.pageid.to_string() == page_id)
                .map(|hit| {
                    Coordinate::new(hit.lat.unwrap_or(query.lat), hit.lon.unwrap_or(query.lon))
                })
                .unwrap_or(query);

            PlaceSummary {
                title: page.title,
                summary: truncate_summary(&page.extract),
                url: page.fullurl,
                coordinates,
            }
        })
        .collect()
}

/// First [`SUMMARY_MAX_CHARS`] characters of `extract` plus a literal
/// `"..."`. The suffix is appended unconditionally, so short extracts end
/// with it too.
fn truncate_summary(extract: &str) -> String {
    let mut summary: String = extract.chars().take(SUMMARY_MAX_CHARS).collect();
    summary.push_str("...");
    summary
}
