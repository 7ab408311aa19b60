//! Cinerec Recommendation Engine
//!
//! Builds a dense user x movie ratings matrix from raw rating triples and
//! layers three techniques on top of it: content-based similarity over
//! catalog metadata, latent-factor collaborative filtering, and a
//! least-squares rating predictor, plus the catalog analytics reports.
//!
//! Every model is recomputed from scratch on each operation; the engine
//! holds only an immutable snapshot of the catalog, the ratings, and the
//! matrix built from them.

pub mod analytics;
pub mod content_based;
pub mod latent;
pub mod matrix;
pub mod regression;
pub mod store;

// Re-export key types
pub use analytics::{top_by_average_rating, top_by_rating_count, top_in_genre, MovieReportRow};
pub use content_based::{ContentBasedEngine, SimilarMovie, DEFAULT_SIMILAR_COUNT};
pub use latent::{TruncatedSvd, DEFAULT_RANK};
pub use matrix::RatingsMatrix;
pub use regression::RatingPredictor;
pub use store::{CatalogSource, InMemoryDataset, RatingsSource};

use cinerec_core::{Movie, Rating, RecError, Result};

/// Engine configuration
#[derive(Debug, Clone)]
pub struct EngineConfig {
    /// Similar movies returned per content query (default: 3)
    pub similar_count: usize,
    /// Latent decomposition rank (default: 2)
    pub latent_rank: usize,
    /// Collaborative recommendations returned per user (default: 3)
    pub top_n: usize,
    /// Seed for the decomposition's power-iteration start vectors
    /// (default: 7)
    pub svd_seed: u64,
}

impl Default for EngineConfig {
    fn default() -> Self {
        Self {
            similar_count: DEFAULT_SIMILAR_COUNT,
            latent_rank: DEFAULT_RANK,
            top_n: 3,
            svd_seed: 7,
        }
    }
}

/// Recommendation engine over an immutable snapshot of catalog and
/// ratings.
///
/// The ratings matrix is built once at construction and threaded through
/// every consumer, so all components agree on one row/column ordering.
/// Embedders serving concurrent requests should give each request its own
/// engine rather than share a mutable one.
pub struct RecEngine {
    config: EngineConfig,
    catalog: Vec<Movie>,
    ratings: Vec<Rating>,
    matrix: RatingsMatrix,
}

impl RecEngine {
    /// Build an engine from explicit data.
    pub fn new(config: EngineConfig, catalog: Vec<Movie>, ratings: Vec<Rating>) -> Self {
        let matrix = RatingsMatrix::from_ratings(&ratings);
        Self {
            config,
            catalog,
            ratings,
            matrix,
        }
    }

    /// Build an engine by fetching from capability sources.
    pub fn from_sources(
        config: EngineConfig,
        catalog: &impl CatalogSource,
        ratings: &impl RatingsSource,
    ) -> Result<Self> {
        Ok(Self::new(
            config,
            catalog.fetch_catalog()?,
            ratings.fetch_ratings()?,
        ))
    }

    pub fn config(&self) -> &EngineConfig {
        &self.config
    }

    /// The shared ratings matrix and its position lookups.
    pub fn matrix(&self) -> &RatingsMatrix {
        &self.matrix
    }

    /// Top similar movies for a catalog movie, by content features.
    pub fn similar_movies(&self, movie_id: i64) -> Result<Vec<SimilarMovie>> {
        let content = ContentBasedEngine::new(&self.catalog)?;
        content.similar_movies(movie_id, self.config.similar_count)
    }

    /// Collaborative recommendations for a user identifier.
    pub fn recommend_for_user(&self, user_id: i64) -> Result<Vec<i64>> {
        let row = self
            .matrix
            .user_position(user_id)
            .ok_or_else(|| RecError::not_found("user", user_id))?;
        let svd = TruncatedSvd::fit(&self.matrix, self.config.latent_rank, self.config.svd_seed)?;
        svd.recommend(row, self.config.top_n)
    }

    /// Predict the rating a rated user would give a rated movie.
    ///
    /// Both identifiers are resolved through the matrix lookups; arbitrary
    /// positions, including ones outside the observed range, remain
    /// available on [`RatingPredictor::predict`] directly.
    pub fn predict_rating(&self, user_id: i64, movie_id: i64) -> Result<f64> {
        let row = self
            .matrix
            .user_position(user_id)
            .ok_or_else(|| RecError::not_found("user", user_id))?;
        let col = self
            .matrix
            .movie_position(movie_id)
            .ok_or_else(|| RecError::not_found("movie", movie_id))?;
        let predictor = RatingPredictor::fit(&self.matrix)?;
        Ok(predictor.predict(row, col))
    }

    /// Movies ranked by mean rating.
    pub fn top_by_average_rating(&self, limit: usize) -> Vec<MovieReportRow> {
        top_by_average_rating(&self.catalog, &self.ratings, limit)
    }

    /// Movies ranked by rating count.
    pub fn top_by_rating_count(&self, limit: usize) -> Vec<MovieReportRow> {
        top_by_rating_count(&self.catalog, &self.ratings, limit)
    }

    /// Movies of one genre ranked by mean rating.
    pub fn top_in_genre(&self, genre: &str, limit: usize) -> Vec<MovieReportRow> {
        top_in_genre(&self.catalog, &self.ratings, genre, limit)
    }
}

#[cfg(test)]
mod tests;
