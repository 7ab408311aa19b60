//! Ratings matrix construction
//!
//! Pivots raw (user, movie, rating) triples into a dense user x movie
//! matrix and owns the position<->identifier lookups that every downstream
//! consumer shares.

use cinerec_core::Rating;
use ndarray::Array2;
use std::collections::HashMap;

/// Dense user x movie ratings matrix.
///
/// Rows and columns are dense 0-based positions over the distinct user and
/// movie identifiers observed in the ratings input, in first-seen order.
/// Cells with no observed rating hold 0.0, which is indistinguishable from
/// a genuine zero rating; downstream components treat strictly positive
/// cells as observed. Duplicate (user, movie) pairs are last-write-wins.
#[derive(Debug, Clone)]
pub struct RatingsMatrix {
    values: Array2<f64>,
    /// User ID to row position
    user_positions: HashMap<i64, usize>,
    /// Movie ID to column position
    movie_positions: HashMap<i64, usize>,
    /// Row position to user ID
    user_ids: Vec<i64>,
    /// Column position to movie ID
    movie_ids: Vec<i64>,
}

impl RatingsMatrix {
    /// Build the matrix from raw rating triples.
    ///
    /// Empty input yields a 0x0 matrix rather than an error.
    pub fn from_ratings(ratings: &[Rating]) -> Self {
        let mut user_positions = HashMap::new();
        let mut movie_positions = HashMap::new();
        let mut user_ids = Vec::new();
        let mut movie_ids = Vec::new();

        for rating in ratings {
            user_positions.entry(rating.user_id).or_insert_with(|| {
                user_ids.push(rating.user_id);
                user_ids.len() - 1
            });
            movie_positions.entry(rating.movie_id).or_insert_with(|| {
                movie_ids.push(rating.movie_id);
                movie_ids.len() - 1
            });
        }

        let mut values = Array2::<f64>::zeros((user_ids.len(), movie_ids.len()));
        for rating in ratings {
            let row = user_positions[&rating.user_id];
            let col = movie_positions[&rating.movie_id];
            values[[row, col]] = rating.value;
        }

        Self {
            values,
            user_positions,
            movie_positions,
            user_ids,
            movie_ids,
        }
    }

    /// Number of distinct rated users (matrix rows).
    pub fn n_users(&self) -> usize {
        self.user_ids.len()
    }

    /// Number of distinct rated movies (matrix columns).
    pub fn n_movies(&self) -> usize {
        self.movie_ids.len()
    }

    pub fn is_empty(&self) -> bool {
        self.user_ids.is_empty() || self.movie_ids.is_empty()
    }

    /// The dense cell values.
    pub fn values(&self) -> &Array2<f64> {
        &self.values
    }

    /// Cell value at a (row, col) position; 0.0 outside the matrix.
    pub fn get(&self, row: usize, col: usize) -> f64 {
        self.values.get([row, col]).copied().unwrap_or(0.0)
    }

    /// Row position of a user identifier, if it was observed.
    pub fn user_position(&self, user_id: i64) -> Option<usize> {
        self.user_positions.get(&user_id).copied()
    }

    /// Column position of a movie identifier, if it was observed.
    pub fn movie_position(&self, movie_id: i64) -> Option<usize> {
        self.movie_positions.get(&movie_id).copied()
    }

    /// User identifier at a row position.
    pub fn user_id_at(&self, row: usize) -> Option<i64> {
        self.user_ids.get(row).copied()
    }

    /// Movie identifier at a column position.
    pub fn movie_id_at(&self, col: usize) -> Option<i64> {
        self.movie_ids.get(col).copied()
    }

    /// Movie identifiers in column order.
    pub fn movie_ids(&self) -> &[i64] {
        &self.movie_ids
    }

    /// User identifiers in row order.
    pub fn user_ids(&self) -> &[i64] {
        &self.user_ids
    }
}
