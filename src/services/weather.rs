//! Current-condition lookup against weatherapi.com.

use async_trait::async_trait;
use reqwest::{Client, StatusCode};
use serde::Deserialize;
use tracing::{debug, warn};

use crate::error::{ApiError, Result};

/// Condition text used when the weather service is unreachable or responds
/// with an unexpected shape.
pub const UNKNOWN_CONDITION: &str = "Unknown";

/// Source of the current weather condition text.
///
/// The recommender only needs a condition string; implementations absorb
/// their own failures so callers never see an error.
#[async_trait]
pub trait WeatherProvider: Send + Sync {
    /// Current condition text for the configured location, or
    /// [`UNKNOWN_CONDITION`].
    async fn current_condition(&self) -> String;
}

#[derive(Debug, Deserialize)]
struct WeatherResponse {
    current: CurrentWeather,
}

#[derive(Debug, Deserialize)]
struct CurrentWeather {
    condition: WeatherCondition,
}

#[derive(Debug, Deserialize)]
struct WeatherCondition {
    text: String,
}

/// weatherapi.com client for a fixed city. One fresh lookup per call; no
/// retry and no caching.
#[derive(Debug, Clone)]
pub struct WeatherApiClient {
    client: Client,
    api_key: String,
    api_url: String,
    city: String,
}

impl WeatherApiClient {
    pub fn new(api_key: &str, api_url: &str, city: &str) -> Self {
        Self {
            client: Client::new(),
            api_key: api_key.to_string(),
            api_url: api_url.to_string(),
            city: city.to_string(),
        }
    }

    /// One GET against `current.json`. Failures are errors here and become
    /// the sentinel in [`WeatherProvider::current_condition`].
    async fn fetch_condition(&self) -> Result<String> {
        let response = self
            .client
            .get(&self.api_url)
            .query(&[
                ("key", self.api_key.as_str()),
                ("q", self.city.as_str()),
                ("aqi", "yes"),
            ])
            .send()
            .await?;

        // Only an exact 200 carries a condition; every other status,
        // 2xx included, degrades to the sentinel.
        if response.status() != StatusCode::OK {
            return Err(ApiError::ExternalServiceError(format!(
                "weather API returned status {}",
                response.status()
            )));
        }

        let body: WeatherResponse = response.json().await?;
        Ok(body.current.condition.text)
    }
}

#[async_trait]
impl WeatherProvider for WeatherApiClient {
    async fn current_condition(&self) -> String {
        match self.fetch_condition().await {
            Ok(condition) => {
                debug!("Current condition for {}: {}", self.city, condition);
                condition
            }
            Err(e) => {
                warn!("Weather lookup failed, using {:?}: {}", UNKNOWN_CONDITION, e);
                UNKNOWN_CONDITION.to_string()
            }
        }
    }
}
