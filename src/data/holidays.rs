//! Public holiday API client
//!
//! Fetches per-country holiday lists from a Nager.Date compatible API
//! (`GET {base}/PublicHolidays/{year}/{countryCode}`) and normalizes them
//! into `Holiday` values.

use chrono::NaiveDate;
use reqwest::Client;
use serde::Deserialize;
use serde_json::Value;
use std::time::Duration;
use thiserror::Error;

use super::Holiday;

/// Base URL for the Nager.Date public holiday API
pub const NAGER_BASE_URL: &str = "https://date.nager.at/api/v3";

/// Default timeout applied to every upstream request
pub const DEFAULT_REQUEST_TIMEOUT: Duration = Duration::from_secs(10);

/// Errors that can occur when fetching holidays for one country
#[derive(Debug, Error)]
pub enum HolidayClientError {
    /// HTTP request failed, timed out, returned a non-2xx status or an unreadable body
    #[error("HTTP request failed: {0}")]
    RequestFailed(#[from] reqwest::Error),

    /// The response body was valid JSON but not an array
    #[error("Expected a JSON array of holidays, got {0}")]
    NotAList(&'static str),
}

/// A single holiday record as returned by the upstream API
///
/// Other upstream fields (`fixed`, `global`, `counties`, `launchYear`, `types`)
/// are ignored.
#[derive(Debug, Deserialize)]
#[serde(rename_all = "camelCase")]
struct PublicHolidayRecord {
    date: NaiveDate,
    #[serde(default)]
    local_name: Option<String>,
    name: String,
    #[serde(default)]
    country_code: Option<String>,
}

/// Client for fetching public holidays from the upstream API
#[derive(Debug, Clone)]
pub struct HolidayClient {
    client: Client,
    base_url: String,
}

impl HolidayClient {
    /// Create a client for `base_url` whose requests give up after `timeout`
    ///
    /// # Returns
    /// * `Err(HolidayClientError)` if the HTTP client cannot be built
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, HolidayClientError> {
        let client = Client::builder().timeout(timeout).build()?;
        Ok(Self::with_client(client, base_url))
    }

    /// Create a client with a preconfigured HTTP client
    pub fn with_client(client: Client, base_url: impl Into<String>) -> Self {
        Self {
            client,
            base_url: base_url.into().trim_end_matches('/').to_string(),
        }
    }

    /// Base URL requests are sent to
    pub fn base_url(&self) -> &str {
        &self.base_url
    }

    fn url(&self, year: i32, country_code: &str) -> String {
        format!("{}/PublicHolidays/{}/{}", self.base_url, year, country_code)
    }

    /// Fetch and normalize the public holidays of one country for one year
    ///
    /// # Arguments
    /// * `year` - Calendar year
    /// * `country_code` - ISO 3166-1 alpha-2 country code
    ///
    /// # Returns
    /// * `Ok(Vec<Holiday>)` - Normalized holidays in upstream order; malformed records are skipped
    /// * `Err(HolidayClientError)` - If the request fails or the body is not a list
    #[tracing::instrument(level = "debug", skip(self))]
    pub async fn fetch_public_holidays(
        &self,
        year: i32,
        country_code: &str,
    ) -> Result<Vec<Holiday>, HolidayClientError> {
        let body: Value = self
            .client
            .get(self.url(year, country_code))
            .send()
            .await?
            .error_for_status()?
            .json()
            .await?;

        parse_holidays(body, country_code)
    }
}

/// Normalize an upstream response body
///
/// Individual records that do not match the expected shape are logged and
/// skipped; the rest of the list is kept.
fn parse_holidays(body: Value, country_code: &str) -> Result<Vec<Holiday>, HolidayClientError> {
    let records = match body {
        Value::Array(records) => records,
        other => return Err(HolidayClientError::NotAList(json_kind(&other))),
    };

    let holidays = records
        .into_iter()
        .filter_map(|record| match serde_json::from_value::<PublicHolidayRecord>(record) {
            Ok(record) => Some(record),
            Err(e) => {
                tracing::warn!(%country_code, error = %e, "skipping malformed holiday record");
                None
            }
        })
        .map(|record| {
            let code = record.country_code.as_deref().unwrap_or(country_code);
            Holiday::new(record.date, code, &record.name, record.local_name.as_deref())
        })
        .collect();

    Ok(holidays)
}

fn json_kind(value: &Value) -> &'static str {
    match value {
        Value::Null => "null",
        Value::Bool(_) => "a boolean",
        Value::Number(_) => "a number",
        Value::String(_) => "a string",
        Value::Array(_) => "an array",
        Value::Object(_) => "an object",
    }
}
