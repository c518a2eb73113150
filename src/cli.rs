//! Command-line interface parsing for the holiday service
//!
//! Every option can also be supplied through an environment variable, which
//! is how the service is usually configured when deployed.

use clap::Parser;
use std::net::{IpAddr, Ipv4Addr, SocketAddr};
use std::time::Duration;
use thiserror::Error;

use crate::aggregator::DEFAULT_COUNTRIES;
use crate::data::holidays::NAGER_BASE_URL;
use crate::data::normalize_country_code;
use crate::server::ServerOpts;

/// Error types for CLI argument parsing
#[derive(Debug, Error)]
pub enum CliError {
    /// The country code is not two ASCII letters
    #[error("Invalid country code: '{0}'. Expected an ISO 3166-1 alpha-2 code such as UA or US")]
    InvalidCountryCode(String),
}

/// Holiday service - aggregates public holidays for the calendar app
#[derive(Parser, Debug)]
#[command(name = "calendar-holidays")]
#[command(about = "Serves cached public holidays for the calendar app")]
#[command(version)]
pub struct Cli {
    /// Address to bind the HTTP server to
    #[arg(long, env = "HOST", default_value_t = IpAddr::V4(Ipv4Addr::LOCALHOST))]
    pub host: IpAddr,

    /// Port to listen on
    #[arg(long, env = "PORT", default_value_t = 3001)]
    pub port: u16,

    /// Base URL of the public holiday API
    #[arg(long, env = "HOLIDAYS_API_URL", default_value = NAGER_BASE_URL)]
    pub holidays_api_url: String,

    /// How long fetched holidays stay cached, in seconds
    #[arg(long, env = "CACHE_TTL_SECS", default_value_t = 86_400)]
    pub cache_ttl_secs: u64,

    /// Timeout for each upstream request, in seconds
    #[arg(long, env = "REQUEST_TIMEOUT_SECS", default_value_t = 10)]
    pub request_timeout_secs: u64,

    /// Comma separated country codes to aggregate (defaults to a list covering major regions)
    ///
    /// Example: --countries UA,US,DE
    #[arg(
        long,
        env = "HOLIDAY_COUNTRIES",
        value_delimiter = ',',
        value_parser = parse_country_code
    )]
    pub countries: Vec<String>,
}

/// Parses a country code argument into its uppercased form.
///
/// # Returns
/// * `Ok(String)` if the code is two ASCII letters
/// * `Err(CliError::InvalidCountryCode)` otherwise
pub fn parse_country_code(s: &str) -> Result<String, CliError> {
    normalize_country_code(s).ok_or_else(|| CliError::InvalidCountryCode(s.to_string()))
}

impl Cli {
    /// Countries to aggregate, falling back to `DEFAULT_COUNTRIES`
    pub fn countries(&self) -> Vec<String> {
        if self.countries.is_empty() {
            DEFAULT_COUNTRIES.iter().map(|c| c.to_string()).collect()
        } else {
            self.countries.clone()
        }
    }

    /// Converts parsed arguments into server options
    pub fn into_opts(self) -> ServerOpts {
        ServerOpts {
            addr: SocketAddr::new(self.host, self.port),
            countries: self.countries(),
            holidays_api_url: self.holidays_api_url,
            cache_ttl: Duration::from_secs(self.cache_ttl_secs),
            request_timeout: Duration::from_secs(self.request_timeout_secs),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_country_code_uppercases() {
        assert_eq!(parse_country_code("ua").unwrap(), "UA");
        assert_eq!(parse_country_code("US").unwrap(), "US");
    }

    #[test]
    fn test_parse_country_code_invalid() {
        let result = parse_country_code("usa");
        assert!(result.is_err());
        let err = result.unwrap_err();
        assert!(err.to_string().contains("Invalid country code"));
        assert!(err.to_string().contains("usa"));
    }

    #[test]
    fn test_cli_parse_no_args() {
        let cli = Cli::parse_from(["calendar-holidays"]);
        assert_eq!(cli.holidays_api_url, NAGER_BASE_URL);
        assert_eq!(cli.cache_ttl_secs, 86_400);
        assert_eq!(cli.request_timeout_secs, 10);
        assert!(cli.countries.is_empty());
    }

    #[test]
    fn test_cli_default_countries() {
        let cli = Cli::parse_from(["calendar-holidays"]);
        assert_eq!(cli.countries().len(), DEFAULT_COUNTRIES.len());
    }

    #[test]
    fn test_cli_parse_countries() {
        let cli = Cli::parse_from(["calendar-holidays", "--countries", "ua,us,DE"]);
        assert_eq!(cli.countries(), vec!["UA", "US", "DE"]);
    }

    #[test]
    fn test_cli_parse_invalid_country_fails() {
        let result = Cli::try_parse_from(["calendar-holidays", "--countries", "UA,Ukraine"]);
        assert!(result.is_err());
    }

    #[test]
    fn test_into_opts() {
        let cli = Cli::parse_from([
            "calendar-holidays",
            "--host",
            "0.0.0.0",
            "--port",
            "8080",
            "--holidays-api-url",
            "http://localhost:9000/api/v3",
            "--cache-ttl-secs",
            "60",
            "--request-timeout-secs",
            "2",
            "--countries",
            "PL",
        ]);

        let opts = cli.into_opts();

        assert_eq!(opts.addr, "0.0.0.0:8080".parse::<SocketAddr>().unwrap());
        assert_eq!(opts.holidays_api_url, "http://localhost:9000/api/v3");
        assert_eq!(opts.cache_ttl, Duration::from_secs(60));
        assert_eq!(opts.request_timeout, Duration::from_secs(2));
        assert_eq!(opts.countries, vec!["PL"]);
    }
}
