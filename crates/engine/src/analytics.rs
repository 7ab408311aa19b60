//! Catalog analytics
//!
//! In-memory counterparts of the seed database's reporting queries:
//! average-rating and rating-count rankings plus per-genre filtering.
//! Movies without ratings are omitted from every report, matching an inner
//! join between the catalog and the ratings table.

use cinerec_core::{Movie, Rating};
use serde::Serialize;
use std::collections::HashMap;

/// One row of a ranked movie report.
///
/// `value` is the ranking metric: a mean rating or a rating count,
/// depending on the report.
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct MovieReportRow {
    pub movie_id: i64,
    pub title: String,
    pub value: f64,
}

/// Movies ranked by mean rating, descending (ties by ascending id).
pub fn top_by_average_rating(
    catalog: &[Movie],
    ratings: &[Rating],
    limit: usize,
) -> Vec<MovieReportRow> {
    let averages = average_by_movie(ratings);
    rank(catalog, |movie| averages.get(&movie.id).copied(), limit)
}

/// Movies ranked by how many ratings they received, descending (ties by
/// ascending id).
pub fn top_by_rating_count(
    catalog: &[Movie],
    ratings: &[Rating],
    limit: usize,
) -> Vec<MovieReportRow> {
    let mut counts: HashMap<i64, usize> = HashMap::new();
    for rating in ratings {
        *counts.entry(rating.movie_id).or_insert(0) += 1;
    }
    rank(
        catalog,
        |movie| counts.get(&movie.id).map(|&count| count as f64),
        limit,
    )
}

/// Movies of one genre ranked by mean rating, descending (ties by ascending
/// id).
pub fn top_in_genre(
    catalog: &[Movie],
    ratings: &[Rating],
    genre: &str,
    limit: usize,
) -> Vec<MovieReportRow> {
    let averages = average_by_movie(ratings);
    rank(
        catalog,
        |movie| {
            if movie.genre == genre {
                averages.get(&movie.id).copied()
            } else {
                None
            }
        },
        limit,
    )
}

fn average_by_movie(ratings: &[Rating]) -> HashMap<i64, f64> {
    let mut sums: HashMap<i64, (f64, usize)> = HashMap::new();
    for rating in ratings {
        let entry = sums.entry(rating.movie_id).or_insert((0.0, 0));
        entry.0 += rating.value;
        entry.1 += 1;
    }
    sums.into_iter()
        .map(|(movie_id, (sum, count))| (movie_id, sum / count as f64))
        .collect()
}

fn rank(
    catalog: &[Movie],
    metric: impl Fn(&Movie) -> Option<f64>,
    limit: usize,
) -> Vec<MovieReportRow> {
    let mut rows: Vec<MovieReportRow> = catalog
        .iter()
        .filter_map(|movie| {
            metric(movie).map(|value| MovieReportRow {
                movie_id: movie.id,
                title: movie.title.clone(),
                value,
            })
        })
        .collect();
    rows.sort_by(|a, b| {
        b.value
            .total_cmp(&a.value)
            .then(a.movie_id.cmp(&b.movie_id))
    });
    rows.truncate(limit);
    rows
}

#[cfg(test)]
mod tests {
    use super::*;

    fn catalog() -> Vec<Movie> {
        vec![
            Movie::new(1, "Inception", "Sci-Fi", 2010),
            Movie::new(2, "The Dark Knight", "Action", 2008),
            Movie::new(3, "Interstellar", "Sci-Fi", 2014),
            Movie::new(4, "Avengers: Endgame", "Action", 2019),
        ]
    }

    fn ratings() -> Vec<Rating> {
        vec![
            Rating::new(1, 1, 5.0),
            Rating::new(2, 1, 4.0),
            Rating::new(1, 2, 4.0),
            Rating::new(2, 3, 5.0),
        ]
    }

    #[test]
    fn test_average_ranking_breaks_ties_by_id() {
        let rows = top_by_average_rating(&catalog(), &ratings(), 5);
        // Movie 3 averages 5.0; movies 1 and 2 tie at 4.5 and 4.0.
        let ids: Vec<i64> = rows.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![3, 1, 2]);
        assert_eq!(rows[1].value, 4.5);
    }

    #[test]
    fn test_unrated_movies_are_omitted() {
        let rows = top_by_average_rating(&catalog(), &ratings(), 10);
        assert!(rows.iter().all(|r| r.movie_id != 4));
    }

    #[test]
    fn test_count_ranking() {
        let rows = top_by_rating_count(&catalog(), &ratings(), 2);
        assert_eq!(rows[0].movie_id, 1);
        assert_eq!(rows[0].value, 2.0);
        assert_eq!(rows.len(), 2);
    }

    #[test]
    fn test_genre_filter() {
        let rows = top_in_genre(&catalog(), &ratings(), "Sci-Fi", 5);
        let ids: Vec<i64> = rows.iter().map(|r| r.movie_id).collect();
        assert_eq!(ids, vec![3, 1]);

        assert!(top_in_genre(&catalog(), &ratings(), "Romance", 5).is_empty());
    }

    #[test]
    fn test_empty_ratings_yield_empty_reports() {
        assert!(top_by_average_rating(&catalog(), &[], 5).is_empty());
        assert!(top_by_rating_count(&catalog(), &[], 5).is_empty());
    }
}
