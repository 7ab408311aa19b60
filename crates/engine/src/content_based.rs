//! Content-based filtering
//!
//! Encodes catalog metadata (genre, year) into feature vectors and ranks
//! movies by cosine similarity to a query movie.

use cinerec_core::{cosine_similarity, Movie, RecError, Result};
use serde::Serialize;
use std::collections::HashMap;

/// Default number of similar movies returned per query.
pub const DEFAULT_SIMILAR_COUNT: usize = 3;

/// A movie ranked by similarity to a query movie.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SimilarMovie {
    pub movie_id: i64,
    pub title: String,
    pub score: f64,
}

/// Content-based similarity engine over the full movie catalog.
///
/// Feature rows follow ascending movie-id order; columns are one 0/1
/// indicator per distinct genre (ascending alphabetical order) followed by
/// the raw release year. The year is left unnormalized, so it dwarfs the
/// genre indicators and pushes every cosine toward 1.0, leaving genre
/// overlap as the effective discriminator; this mirrors the behavior of
/// dummy-encoding a genre/year frame directly and is kept as the reference
/// behavior.
#[derive(Debug)]
pub struct ContentBasedEngine {
    /// Catalog in ascending-id order, aligned with `features`
    movies: Vec<Movie>,
    /// One feature vector per movie
    features: Vec<Vec<f64>>,
}

impl ContentBasedEngine {
    /// Encode the catalog into the feature space.
    pub fn new(catalog: &[Movie]) -> Result<Self> {
        if catalog.is_empty() {
            return Err(RecError::degenerate(
                "content engine requires a non-empty catalog",
            ));
        }

        let mut movies = catalog.to_vec();
        movies.sort_by_key(|m| m.id);

        let mut genres: Vec<String> = movies.iter().map(|m| m.genre.clone()).collect();
        genres.sort_unstable();
        genres.dedup();
        let genre_columns: HashMap<&str, usize> = genres
            .iter()
            .enumerate()
            .map(|(col, genre)| (genre.as_str(), col))
            .collect();

        let year_column = genres.len();
        let features = movies
            .iter()
            .map(|movie| {
                let mut row = vec![0.0; genres.len() + 1];
                row[genre_columns[movie.genre.as_str()]] = 1.0;
                row[year_column] = f64::from(movie.year);
                row
            })
            .collect();

        Ok(Self { movies, features })
    }

    /// Pairwise similarity between two catalog movies.
    pub fn similarity(&self, movie_a: i64, movie_b: i64) -> Result<f64> {
        let a = self.row_of(movie_a)?;
        let b = self.row_of(movie_b)?;
        Ok(cosine_similarity(&self.features[a], &self.features[b]))
    }

    /// Top-`n` most similar movies to `movie_id`, excluding the query movie
    /// itself.
    ///
    /// Ordered by descending similarity; ties broken by ascending movie
    /// identifier so output stays deterministic.
    pub fn similar_movies(&self, movie_id: i64, n: usize) -> Result<Vec<SimilarMovie>> {
        let query_row = self.row_of(movie_id)?;
        let query = &self.features[query_row];

        let mut ranked: Vec<SimilarMovie> = self
            .movies
            .iter()
            .enumerate()
            .filter(|(row, _)| *row != query_row)
            .map(|(row, movie)| SimilarMovie {
                movie_id: movie.id,
                title: movie.title.clone(),
                score: cosine_similarity(query, &self.features[row]),
            })
            .collect();

        ranked.sort_by(|a, b| {
            b.score
                .total_cmp(&a.score)
                .then(a.movie_id.cmp(&b.movie_id))
        });
        ranked.truncate(n);
        Ok(ranked)
    }

    fn row_of(&self, movie_id: i64) -> Result<usize> {
        self.movies
            .iter()
            .position(|m| m.id == movie_id)
            .ok_or_else(|| RecError::not_found("movie", movie_id))
    }
}
