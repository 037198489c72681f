//! Artwork recommendation pipeline: translate environment attributes into
//! catalog vocabulary, build the one-hot query vector, score every catalog
//! row by cosine similarity and keep the best three.

use ndarray::{Array1, ArrayView1};
use std::sync::Arc;
use tracing::{debug, info};

use crate::catalog::{EncodedCatalog, FeatureColumn};
use crate::models::RankedArtwork;
use crate::services::mapping::{self, EnvironmentInput, MappedFeatures};
use crate::services::weather::WeatherProvider;

/// Number of artworks returned per request.
const TOP_K: usize = 3;

pub struct RecommendationService {
    catalog: EncodedCatalog,
    weather: Arc<dyn WeatherProvider>,
}

impl RecommendationService {
    pub fn new(catalog: EncodedCatalog, weather: Arc<dyn WeatherProvider>) -> Self {
        Self { catalog, weather }
    }

    /// Produce up to [`TOP_K`] scored artworks for the given environment.
    ///
    /// Never fails: a degraded weather lookup, unrecognized attribute
    /// values and an all-zero query vector all fall through to defined
    /// defaults.
    pub async fn recommend(&self, input: &EnvironmentInput) -> Vec<RankedArtwork> {
        let condition = self.weather.current_condition().await;
        let mapped = mapping::map_environment(input, &condition);
        debug!(?mapped, condition = %condition, "Mapped environment attributes");

        let query = self.catalog.align(&query_indicators(&mapped));
        let ranked = rank(&self.catalog, &query);

        info!(
            "Returning {} recommendations, best: {:?}",
            ranked.len(),
            ranked.first().map(|r| r.title.as_str())
        );
        ranked
    }
}

/// Indicator columns for one mapped environment.
///
/// `mood` carries both the interior-tone mood and the weather mood; when
/// they agree the two indicators collapse into one.
fn query_indicators(mapped: &MappedFeatures) -> Vec<FeatureColumn> {
    vec![
        FeatureColumn::new("mood", mapped.mood),
        FeatureColumn::new("genre", mapped.genre),
        FeatureColumn::new("medium", mapped.medium),
        FeatureColumn::new("mood", mapped.mood_weather),
        // The genre value is written under a style indicator as well.
        // Catalog style values come from a different vocabulary, so this
        // key never survives alignment; whether it was ever meant to
        // carry a real style value is unconfirmed, and changing it
        // changes every score.
        FeatureColumn::new("style", mapped.genre),
        FeatureColumn::new("region", mapped.region),
        FeatureColumn::new("message", mapped.message),
    ]
}

/// Score every catalog row against the query and keep the [`TOP_K`] best.
/// The sort is stable, so equal scores keep catalog row order.
fn rank(catalog: &EncodedCatalog, query: &Array1<f32>) -> Vec<RankedArtwork> {
    let mut ranked: Vec<RankedArtwork> = catalog
        .titles()
        .iter()
        .enumerate()
        .map(|(row, title)| RankedArtwork {
            title: title.to_string(),
            similarity: cosine_similarity(query.view(), catalog.row(row)),
        })
        .collect();

    ranked.sort_by(|a, b| {
        b.similarity
            .partial_cmp(&a.similarity)
            .unwrap_or(std::cmp::Ordering::Equal)
    });
    ranked.truncate(TOP_K);
    ranked
}

/// Cosine similarity between two vectors, 0.0 when either has zero
/// magnitude.
fn cosine_similarity(a: ArrayView1<f32>, b: ArrayView1<f32>) -> f32 {
    let dot = a.dot(&b);
    let norm_a = a.dot(&a).sqrt();
    let norm_b = b.dot(&b).sqrt();

    if norm_a == 0.0 || norm_b == 0.0 {
        0.0
    } else {
        dot / (norm_a * norm_b)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::catalog::builtin_artworks;
    use async_trait::async_trait;
    use ndarray::array;

    struct StubWeather(&'static str);

    #[async_trait]
    impl WeatherProvider for StubWeather {
        async fn current_condition(&self) -> String {
            self.0.to_string()
        }
    }

    fn service(condition: &'static str) -> RecommendationService {
        RecommendationService::new(
            EncodedCatalog::encode(&builtin_artworks()),
            Arc::new(StubWeather(condition)),
        )
    }

    fn environment(interior_tone: &str, department: &str) -> EnvironmentInput {
        EnvironmentInput {
            interior_tone: interior_tone.to_string(),
            department: department.to_string(),
            ..Default::default()
        }
    }

    #[test]
    fn test_cosine_similarity_of_identical_vectors_is_one() {
        let a = array![1.0_f32, 0.0, 1.0];
        assert!((cosine_similarity(a.view(), a.view()) - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_cosine_similarity_of_orthogonal_vectors_is_zero() {
        let a = array![1.0_f32, 0.0];
        let b = array![0.0_f32, 1.0];
        assert_eq!(cosine_similarity(a.view(), b.view()), 0.0);
    }

    #[test]
    fn test_cosine_similarity_with_zero_vector_is_zero() {
        let zero = array![0.0_f32, 0.0];
        let b = array![1.0_f32, 1.0];
        assert_eq!(cosine_similarity(zero.view(), b.view()), 0.0);
    }

    #[test]
    fn test_query_identical_to_catalog_row_scores_one() {
        let artworks = builtin_artworks();
        let catalog = EncodedCatalog::encode(&artworks);

        let query = catalog.row(1).to_owned();
        let ranked = rank(&catalog, &query);

        assert_eq!(ranked[0].title, "Artwork B");
        assert!((ranked[0].similarity - 1.0).abs() < 1e-6);
    }

    #[test]
    fn test_zero_query_returns_first_three_rows_in_catalog_order() {
        let catalog = EncodedCatalog::encode(&builtin_artworks());

        let query = Array1::zeros(catalog.columns().len());
        let ranked = rank(&catalog, &query);

        let titles: Vec<&str> = ranked.iter().map(|r| r.title.as_str()).collect();
        assert_eq!(titles, ["Artwork A", "Artwork B", "Artwork C"]);
        assert!(ranked.iter().all(|r| r.similarity == 0.0));
    }

    #[test]
    fn test_equal_scores_are_broken_by_catalog_order() {
        let catalog = EncodedCatalog::encode(&builtin_artworks());

        // One genre hit for Artwork B, one medium hit for Artwork C; both
        // score identically, so insertion order decides.
        let query = catalog.align(&[
            FeatureColumn::new("genre", "인물화"),
            FeatureColumn::new("medium", "미디어아트"),
        ]);
        let ranked = rank(&catalog, &query);

        assert_eq!(ranked[0].title, "Artwork B");
        assert_eq!(ranked[1].title, "Artwork C");
        assert!((ranked[0].similarity - ranked[1].similarity).abs() < 1e-6);
    }

    #[test]
    fn test_result_length_never_exceeds_catalog_size() {
        let artworks = builtin_artworks();

        let full_catalog = EncodedCatalog::encode(&artworks);
        let full = rank(&full_catalog, &Array1::zeros(full_catalog.columns().len()));
        assert_eq!(full.len(), TOP_K);

        let small_catalog = EncodedCatalog::encode(&artworks[..2]);
        let small = rank(&small_catalog, &Array1::zeros(small_catalog.columns().len()));
        assert_eq!(small.len(), 2);
    }

    #[tokio::test]
    async fn test_warm_tone_and_dermatology_on_a_clear_day_rank_artwork_a_first() {
        let service = service("Clear");
        let ranked = service.recommend(&environment("화이트", "피부과")).await;

        assert_eq!(ranked.len(), 3);
        assert_eq!(ranked[0].title, "Artwork A");
        assert!(ranked[0].similarity >= ranked[1].similarity);
        assert!(ranked[1].similarity >= ranked[2].similarity);

        // Five aligned indicators, three of them matching Artwork A's six.
        let expected = 3.0 / (5.0_f32 * 6.0).sqrt();
        assert!((ranked[0].similarity - expected).abs() < 1e-6);
    }

    #[tokio::test]
    async fn test_unmapped_condition_behaves_like_unknown_sentinel() {
        let input = environment("화이트", "피부과");

        let with_sentinel = service("Unknown").recommend(&input).await;
        let with_unmapped = service("Drizzle").recommend(&input).await;

        assert_eq!(with_sentinel, with_unmapped);
    }
}
