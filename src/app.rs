use crate::{
    catalog::{builtin_artworks, EncodedCatalog},
    config::Config,
    error::{ApiError, Result},
    routes,
    services::{RecommendationService, WeatherApiClient, WeatherProvider},
};
use actix_cors::Cors;
use actix_web::{middleware::Logger, web, App, HttpServer};
use log::info;
use std::net::TcpListener;
use std::sync::Arc;

pub struct Application {
    port: u16,
    host: String,
    config: Config,
}

/// Query-string deserialization failures surface as
/// [`ApiError::InvalidInput`] so rejected requests share the JSON error
/// body of every other error.
pub fn query_config() -> web::QueryConfig {
    web::QueryConfig::default()
        .error_handler(|err, _req| ApiError::InvalidInput(err.to_string()).into())
}

impl Application {
    /// Create a new application instance
    pub fn new(config: &Config) -> Self {
        Self {
            port: config.port,
            host: config.host.clone(),
            config: config.clone(),
        }
    }

    /// Build and run the server
    pub async fn run(&self) -> Result<()> {
        // Always bind to 0.0.0.0 for Docker compatibility
        let bind_address = format!("0.0.0.0:{}", self.port);
        let listener = TcpListener::bind(&bind_address)?;
        info!("Starting server at http://{}:{}", self.host, self.port);

        self.run_with_listener(listener).await
    }

    /// Run the server with a specific TCP listener
    /// This is useful for testing where we want to use a random port
    pub async fn run_with_listener(&self, listener: TcpListener) -> Result<()> {
        // The catalog and its encoding are fixed for the lifetime of the
        // process; every worker shares the same read-only service.
        let catalog = EncodedCatalog::encode(&builtin_artworks());
        info!(
            "Encoded catalog: {} artworks, {} feature columns",
            catalog.len(),
            catalog.columns().len()
        );

        let weather: Arc<dyn WeatherProvider> = Arc::new(WeatherApiClient::new(
            &self.config.weather_api_key,
            &self.config.weather_api_url,
            &self.config.weather_city,
        ));
        let recommendation_service = web::Data::new(RecommendationService::new(catalog, weather));

        let allowed_origin = self.config.allowed_origin.clone();

        HttpServer::new(move || {
            let cors = Cors::default()
                .allowed_origin(&allowed_origin)
                .allow_any_method()
                .allow_any_header()
                .supports_credentials();

            App::new()
                .wrap(cors)
                .wrap(Logger::default())
                .app_data(query_config())
                .app_data(recommendation_service.clone())
                .configure(routes::configure)
        })
        .listen(listener)?
        .run()
        .await?;

        Ok(())
    }
}
