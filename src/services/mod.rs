pub mod mapping;
pub mod recommendation;
pub mod weather;

// Re-export public types
pub use recommendation::RecommendationService;
pub use weather::{WeatherApiClient, WeatherProvider};
