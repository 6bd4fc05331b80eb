//! Country data source: the provider contract and its implementations.

use std::time::Duration;

use async_trait::async_trait;
use tracing::{debug, info, instrument, warn};

use crate::country::Country;
use crate::error::{FetchError, LookupError, NotFoundError};

/// Where the explorer gets its countries.
///
/// Fetch failure means "no countries available"; callers surface the error
/// instead of entering search or game flows.
#[async_trait]
pub trait CountryProvider: Send + Sync {
    /// Fetches the full country list.
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError>;

    /// Fetches one country by its alpha-3 code.
    async fn fetch_by_code(&self, code: &str) -> Result<Country, LookupError>;
}

/// Client for a REST-countries style HTTP API.
#[derive(Debug, Clone)]
pub struct RestCountriesClient {
    /// Base URL of the API, no trailing slash.
    base_url: String,
    /// HTTP client.
    client: reqwest::Client,
}

impl RestCountriesClient {
    /// Creates a client against `base_url` with the given request timeout.
    ///
    /// # Errors
    ///
    /// Returns [`FetchError`] when the underlying HTTP client cannot be
    /// built.
    #[instrument(skip(base_url), fields(timeout_secs = timeout.as_secs()))]
    pub fn new(base_url: impl Into<String>, timeout: Duration) -> Result<Self, FetchError> {
        let base_url = base_url.into().trim_end_matches('/').to_string();
        debug!(base_url = %base_url, "Building REST client");
        let client = reqwest::Client::builder().timeout(timeout).build()?;
        Ok(Self { base_url, client })
    }
}

#[async_trait]
impl CountryProvider for RestCountriesClient {
    #[instrument(skip(self), fields(base_url = %self.base_url))]
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        let url = format!("{}/all", self.base_url);
        debug!(url = %url, "Fetching full country list");

        let response = self.client.get(&url).send().await?;
        if !response.status().is_success() {
            warn!(status = %response.status(), "Country list request failed");
            return Err(FetchError::new(format!(
                "HTTP {} fetching {}",
                response.status(),
                url
            )));
        }

        let countries: Vec<Country> = response.json().await?;
        info!(count = countries.len(), "Country list fetched");
        Ok(countries)
    }

    #[instrument(skip(self), fields(code = %code))]
    async fn fetch_by_code(&self, code: &str) -> Result<Country, LookupError> {
        let url = format!("{}/alpha/{}", self.base_url, code.trim().to_lowercase());
        debug!(url = %url, "Fetching country by code");

        let response = self
            .client
            .get(&url)
            .send()
            .await
            .map_err(FetchError::from)?;
        if response.status() == reqwest::StatusCode::NOT_FOUND {
            warn!("No country matched the code");
            return Err(NotFoundError::new(format!("No country with code '{}'", code)).into());
        }
        if !response.status().is_success() {
            warn!(status = %response.status(), "Country request failed");
            return Err(FetchError::new(format!(
                "HTTP {} fetching {}",
                response.status(),
                url
            ))
            .into());
        }

        let country: Country = response.json().await.map_err(FetchError::from)?;
        info!(name = %country.name(), "Country fetched");
        Ok(country)
    }
}

/// In-memory provider for tests and offline runs.
#[derive(Debug, Clone)]
pub struct StaticProvider {
    countries: Vec<Country>,
}

impl StaticProvider {
    /// Creates a provider serving the given countries.
    #[instrument(skip(countries), fields(count = countries.len()))]
    pub fn new(countries: Vec<Country>) -> Self {
        Self { countries }
    }
}

#[async_trait]
impl CountryProvider for StaticProvider {
    #[instrument(skip(self))]
    async fn fetch_all(&self) -> Result<Vec<Country>, FetchError> {
        Ok(self.countries.clone())
    }

    #[instrument(skip(self), fields(code = %code))]
    async fn fetch_by_code(&self, code: &str) -> Result<Country, LookupError> {
        self.countries
            .iter()
            .find(|c| c.alpha3_code().eq_ignore_ascii_case(code.trim()))
            .cloned()
            .ok_or_else(|| {
                NotFoundError::new(format!("No country with code '{}'", code)).into()
            })
    }
}
