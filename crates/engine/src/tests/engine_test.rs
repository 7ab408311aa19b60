//! End-to-end scenarios against the seeded reference dataset

use crate::{EngineConfig, InMemoryDataset, RecEngine};
use cinerec_core::RecError;

fn seeded_engine() -> RecEngine {
    let dataset = InMemoryDataset::seed().unwrap();
    RecEngine::from_sources(EngineConfig::default(), &dataset, &dataset).unwrap()
}

#[test]
fn test_matrix_covers_all_seed_users_and_movies() {
    let engine = seeded_engine();
    let matrix = engine.matrix();

    assert_eq!(matrix.n_users(), 5);
    assert_eq!(matrix.n_movies(), 10);
    // First-seen order coincides with ascending ids in the seed data.
    assert_eq!(matrix.user_ids(), &[1, 2, 3, 4, 5]);
    assert_eq!(matrix.movie_id_at(9), Some(10));
    assert_eq!(matrix.get(0, 0), 5.0);
    assert_eq!(matrix.get(4, 9), 4.0);
}

#[test]
fn test_content_recommendations_for_inception() {
    let engine = seeded_engine();
    let similar = engine.similar_movies(1).unwrap();

    // Both other Sci-Fi titles outrank every different-genre neighbor.
    // Among the rest the 2019 releases score highest and the tie breaks
    // to the lower identifier, Avengers: Endgame.
    let ids: Vec<i64> = similar.iter().map(|s| s.movie_id).collect();
    assert_eq!(ids, vec![3, 9, 6]);
    assert!(similar[0].score > similar[1].score);
    assert!(similar.iter().all(|s| s.score <= 1.0 + 1e-12));
}

#[test]
fn test_collaborative_recommendations_for_user_2() {
    let engine = seeded_engine();
    let recs = engine.recommend_for_user(2).unwrap();

    assert!(recs.len() <= 3);
    let mut unique = recs.clone();
    unique.sort_unstable();
    unique.dedup();
    assert_eq!(unique.len(), recs.len());
    for movie_id in &recs {
        assert!(engine.matrix().movie_position(*movie_id).is_some());
    }

    // Same snapshot and seed, same output.
    assert_eq!(recs, engine.recommend_for_user(2).unwrap());
    assert_eq!(recs, seeded_engine().recommend_for_user(2).unwrap());
}

#[test]
fn test_predicted_rating_for_user_3_on_movie_5() {
    let engine = seeded_engine();
    let predicted = engine.predict_rating(3, 5).unwrap();

    // Least squares over the 15 seed cells puts this pair near 4.46.
    assert!((predicted - 4.46).abs() < 0.1, "got {predicted}");
    assert_eq!(predicted, engine.predict_rating(3, 5).unwrap());
}

#[test]
fn test_unknown_identifiers_are_not_found() {
    let engine = seeded_engine();
    assert!(matches!(
        engine.recommend_for_user(99).unwrap_err(),
        RecError::NotFound { .. }
    ));
    assert!(matches!(
        engine.predict_rating(1, 999).unwrap_err(),
        RecError::NotFound { .. }
    ));
    assert!(matches!(
        engine.similar_movies(42).unwrap_err(),
        RecError::NotFound { .. }
    ));
}

#[test]
fn test_average_rating_report_matches_seed() {
    let engine = seeded_engine();
    let rows = engine.top_by_average_rating(5);

    let ids: Vec<i64> = rows.iter().map(|r| r.movie_id).collect();
    // Three perfect 5.0 averages, then the 4.5 tie broken by id.
    assert_eq!(ids, vec![4, 7, 8, 1, 2]);
    assert_eq!(rows[0].value, 5.0);
    assert_eq!(rows[3].value, 4.5);
}

#[test]
fn test_rating_count_report_matches_seed() {
    let engine = seeded_engine();
    let rows = engine.top_by_rating_count(5);

    let ids: Vec<i64> = rows.iter().map(|r| r.movie_id).collect();
    // Movies 1, 2, 3, 5, 6 each carry two ratings; everything else one.
    assert_eq!(ids, vec![1, 2, 3, 5, 6]);
    assert!(rows.iter().all(|r| r.value == 2.0));
}

#[test]
fn test_genre_report_matches_seed() {
    let engine = seeded_engine();
    let rows = engine.top_in_genre("Action", 5);

    assert_eq!(rows.len(), 2);
    assert_eq!(rows[0].movie_id, 2);
    assert_eq!(rows[0].value, 4.5);
    assert_eq!(rows[1].movie_id, 6);
    assert_eq!(rows[1].value, 4.0);
}

#[test]
fn test_engine_with_empty_ratings() {
    let dataset = InMemoryDataset::seed().unwrap();
    let engine = RecEngine::new(
        EngineConfig::default(),
        dataset.movies().to_vec(),
        Vec::new(),
    );

    // Content similarity needs only the catalog.
    assert_eq!(engine.similar_movies(1).unwrap().len(), 3);
    // Rating-driven operations fail on the empty matrix.
    assert!(engine.recommend_for_user(1).is_err());
    assert!(engine.predict_rating(1, 1).is_err());
    assert!(engine.top_by_average_rating(5).is_empty());
}
