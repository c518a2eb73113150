//! Worldwide holiday aggregation
//!
//! Combines the public holidays of a fixed set of countries into one sorted
//! list. Both the per-country lists and the combined lists are cached, so a
//! repeated request within the TTL never reaches the upstream API.

use futures::future::join_all;
use std::sync::Arc;
use std::time::Duration;

use crate::cache::TtlCache;
use crate::data::{dedup_by_id, retain_month, sort_holidays, Holiday, HolidayClient};

/// Countries aggregated when no list is configured
pub const DEFAULT_COUNTRIES: &[&str] = &[
    "US", "GB", "CA", "AU", "DE", "FR", "IT", "ES", "NL", "PL", "UA", "JP", "KR", "CN", "IN",
    "BR", "MX", "AR", "ZA", "EG", "NG", "NZ", "SE", "NO",
];

/// Holiday calendars for a given year do not change, so entries live for a day
pub const DEFAULT_CACHE_TTL: Duration = Duration::from_secs(24 * 60 * 60);

/// Cache shared between the aggregator and whoever constructed it
pub type HolidayCache = TtlCache<Vec<Holiday>>;

/// Fetches, merges and caches public holidays across countries
#[derive(Debug)]
pub struct HolidayAggregator {
    client: HolidayClient,
    cache: Arc<HolidayCache>,
    countries: Vec<String>,
    ttl: Duration,
}

impl HolidayAggregator {
    /// Creates an aggregator over `DEFAULT_COUNTRIES` with `DEFAULT_CACHE_TTL`
    pub fn new(client: HolidayClient, cache: Arc<HolidayCache>) -> Self {
        Self {
            client,
            cache,
            countries: DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect(),
            ttl: DEFAULT_CACHE_TTL,
        }
    }

    /// Replaces the aggregated country list
    pub fn with_countries<I, S>(mut self, countries: I) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        self.countries = countries.into_iter().map(Into::into).collect();
        self
    }

    /// Replaces the cache TTL
    pub fn with_ttl(mut self, ttl: Duration) -> Self {
        self.ttl = ttl;
        self
    }

    /// Countries included in worldwide results
    pub fn countries(&self) -> &[String] {
        &self.countries
    }

    /// Public holidays of one country, sorted by date then title
    ///
    /// Never fails: an upstream error is logged and yields an empty list.
    /// Only successful fetches are cached, so a failed country is retried on
    /// the next cache miss.
    pub async fn country(&self, year: i32, country_code: &str) -> Vec<Holiday> {
        let key = country_key(year, country_code);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(%key, "cache hit");
            return cached;
        }
        tracing::debug!(%key, "cache miss");

        match self.client.fetch_public_holidays(year, country_code).await {
            Ok(mut holidays) => {
                sort_holidays(&mut holidays);
                self.cache.set(key, holidays.clone(), self.ttl);
                holidays
            }
            Err(e) => {
                tracing::warn!(year, %country_code, error = %e, "failed to fetch holidays, using empty list");
                Vec::new()
            }
        }
    }

    /// Holidays of every configured country for `year`, optionally limited to `month`
    ///
    /// All countries are fetched concurrently and the join waits for every one
    /// of them; a failing country contributes nothing instead of failing the
    /// whole result. The output is deduplicated by id and sorted by date, then
    /// title.
    ///
    /// # Arguments
    /// * `year` - Calendar year
    /// * `month` - Month in `1..=12`; `None` returns the whole year
    #[tracing::instrument(skip(self))]
    pub async fn worldwide(&self, year: i32, month: Option<u32>) -> Vec<Holiday> {
        let key = worldwide_key(year, month);

        if let Some(cached) = self.cache.get(&key) {
            tracing::debug!(%key, "cache hit");
            return cached;
        }
        tracing::debug!(%key, countries = self.countries.len(), "cache miss");

        let per_country = join_all(
            self.countries
                .iter()
                .map(|country_code| self.country(year, country_code)),
        )
        .await;

        let mut holidays: Vec<Holiday> = per_country.into_iter().flatten().collect();
        dedup_by_id(&mut holidays);
        if let Some(month) = month {
            retain_month(&mut holidays, month);
        }
        sort_holidays(&mut holidays);

        self.cache.set(key, holidays.clone(), self.ttl);
        holidays
    }
}

fn country_key(year: i32, country_code: &str) -> String {
    format!("holidays:{}:{}", year, country_code)
}

fn worldwide_key(year: i32, month: Option<u32>) -> String {
    match month {
        Some(month) => format!("worldwide:{}:{}", year, month),
        None => format!("worldwide:{}:all", year),
    }
}
