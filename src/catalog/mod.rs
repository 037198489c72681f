//! Fixed artwork catalog and its one-hot feature encoding.
//!
//! The encoding is built once at startup: one row per artwork in insertion
//! order, one column per `(attribute, value)` pair observed in the catalog.
//! Query vectors must be aligned to this column space before scoring, and
//! alignment is the only place indicator keys can be dropped, so it lives
//! here next to the column definition.

use ndarray::{Array1, Array2, ArrayView1};
use std::collections::{BTreeSet, HashMap};
use std::fmt;
use tracing::debug;

use crate::models::Artwork;

/// Attribute order of the feature space. Value columns are grouped by
/// attribute in this order and sorted within each group, which keeps the
/// column layout deterministic across restarts.
pub const ATTRIBUTES: [&str; 6] = ["style", "genre", "medium", "mood", "region", "message"];

/// The built-in artwork catalog, in insertion order. Row order is also the
/// tie-break order for equal similarity scores.
pub fn builtin_artworks() -> Vec<Artwork> {
    vec![
        Artwork {
            title: "Artwork A",
            style: "인상주의",
            genre: "풍경화",
            medium: "회화",
            mood: "따뜻함",
            region: "서양",
            message: "감정 표현",
        },
        Artwork {
            title: "Artwork B",
            style: "팝아트",
            genre: "인물화",
            medium: "사진",
            mood: "경쾌함",
            region: "동양",
            message: "사회 비판",
        },
        Artwork {
            title: "Artwork C",
            style: "초현실주의",
            genre: "추상화",
            medium: "미디어아트",
            mood: "신비로움",
            region: "아프리카",
            message: "개념",
        },
        Artwork {
            title: "Artwork D",
            style: "미니멀리즘",
            genre: "정물화",
            medium: "설치미술",
            mood: "차가움",
            region: "남미",
            message: "실험",
        },
    ]
}

/// One column of the feature space: an `(attribute, value)` pair.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub struct FeatureColumn {
    pub attribute: &'static str,
    pub value: &'static str,
}

impl FeatureColumn {
    pub fn new(attribute: &'static str, value: &'static str) -> Self {
        Self { attribute, value }
    }
}

impl fmt::Display for FeatureColumn {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}_{}", self.attribute, self.value)
    }
}

/// The catalog's one-hot encoding: column labels plus one indicator row per
/// artwork. Immutable after construction.
#[derive(Debug, Clone)]
pub struct EncodedCatalog {
    titles: Vec<&'static str>,
    columns: Vec<FeatureColumn>,
    column_index: HashMap<FeatureColumn, usize>,
    matrix: Array2<f32>,
}

/// The artwork's features in [`ATTRIBUTES`] order.
fn feature_pairs(artwork: &Artwork) -> [FeatureColumn; 6] {
    [
        FeatureColumn::new("style", artwork.style),
        FeatureColumn::new("genre", artwork.genre),
        FeatureColumn::new("medium", artwork.medium),
        FeatureColumn::new("mood", artwork.mood),
        FeatureColumn::new("region", artwork.region),
        FeatureColumn::new("message", artwork.message),
    ]
}

impl EncodedCatalog {
    /// One-hot encode a catalog. Columns are derived from the values the
    /// catalog actually contains and never change afterwards.
    pub fn encode(artworks: &[Artwork]) -> Self {
        let mut columns: Vec<FeatureColumn> = Vec::new();
        for (position, attribute) in ATTRIBUTES.iter().copied().enumerate() {
            let values: BTreeSet<&'static str> = artworks
                .iter()
                .map(|artwork| feature_pairs(artwork)[position].value)
                .collect();
            columns.extend(values.into_iter().map(|value| FeatureColumn::new(attribute, value)));
        }

        let column_index: HashMap<FeatureColumn, usize> = columns
            .iter()
            .enumerate()
            .map(|(index, column)| (*column, index))
            .collect();

        let mut matrix = Array2::zeros((artworks.len(), columns.len()));
        for (row, artwork) in artworks.iter().enumerate() {
            for pair in feature_pairs(artwork) {
                matrix[[row, column_index[&pair]]] = 1.0;
            }
        }

        Self {
            titles: artworks.iter().map(|artwork| artwork.title).collect(),
            columns,
            column_index,
            matrix,
        }
    }

    /// Align a sparse indicator set to the catalog's column space.
    ///
    /// Indicators without a matching catalog column are dropped; catalog
    /// columns without an indicator stay zero. Duplicate indicators are
    /// harmless since the encoding is binary.
    pub fn align(&self, indicators: &[FeatureColumn]) -> Array1<f32> {
        let mut query = Array1::zeros(self.columns.len());
        for indicator in indicators {
            match self.column_index.get(indicator) {
                Some(&index) => query[index] = 1.0,
                None => debug!("Indicator {} has no catalog column, dropped", indicator),
            }
        }
        query
    }

    /// Encoded feature row for the artwork at `index`, in catalog order.
    pub fn row(&self, index: usize) -> ArrayView1<'_, f32> {
        self.matrix.row(index)
    }

    /// Artwork titles in row order.
    pub fn titles(&self) -> &[&'static str] {
        &self.titles
    }

    pub fn columns(&self) -> &[FeatureColumn] {
        &self.columns
    }

    pub fn len(&self) -> usize {
        self.titles.len()
    }

    pub fn is_empty(&self) -> bool {
        self.titles.is_empty()
    }
}
