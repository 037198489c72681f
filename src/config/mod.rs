use anyhow::Result;
use std::env;

/// Application configuration.
///
/// Every value has a compiled-in default matching the deployment this
/// service was written for, so it runs with no environment at all; set the
/// corresponding variable to override a value.
#[derive(Debug, Clone)]
pub struct Config {
    /// Host name used in log output; the server itself binds 0.0.0.0.
    pub host: String,
    pub port: u16,
    /// weatherapi.com API key.
    pub weather_api_key: String,
    /// Endpoint for current-conditions lookups.
    pub weather_api_url: String,
    /// City the weather lookup is keyed to.
    pub weather_city: String,
    /// The single origin allowed to call the API with credentials.
    pub allowed_origin: String,
}

const DEFAULT_HOST: &str = "127.0.0.1";
const DEFAULT_PORT: u16 = 8000;
const DEFAULT_WEATHER_API_KEY: &str = "0e82a6e070924250b39101720250402";
const DEFAULT_WEATHER_API_URL: &str = "http://api.weatherapi.com/v1/current.json";
const DEFAULT_WEATHER_CITY: &str = "seoul";
const DEFAULT_ALLOWED_ORIGIN: &str = "http://localhost:5173";

impl Config {
    /// Load configuration from environment variables, falling back to the
    /// built-in defaults for anything unset or unparsable.
    pub fn load() -> Result<Self> {
        Ok(Config {
            host: env::var("HOST").unwrap_or_else(|_| DEFAULT_HOST.to_string()),
            port: env::var("PORT")
                .unwrap_or_else(|_| DEFAULT_PORT.to_string())
                .parse()
                .unwrap_or(DEFAULT_PORT),
            weather_api_key: env::var("APP_WEATHER_API_KEY")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_KEY.to_string()),
            weather_api_url: env::var("APP_WEATHER_API_URL")
                .unwrap_or_else(|_| DEFAULT_WEATHER_API_URL.to_string()),
            weather_city: env::var("APP_WEATHER_CITY")
                .unwrap_or_else(|_| DEFAULT_WEATHER_CITY.to_string()),
            allowed_origin: env::var("APP_ALLOWED_ORIGIN")
                .unwrap_or_else(|_| DEFAULT_ALLOWED_ORIGIN.to_string()),
        })
    }
}
