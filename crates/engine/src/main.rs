//! Cinerec demo
//!
//! Seeds the reference dataset and walks through every report and
//! recommendation technique the engine offers. All printing lives here;
//! the engine itself only returns typed results.

use anyhow::Result;
use cinerec_engine::{EngineConfig, InMemoryDataset, RecEngine};
use tracing::info;

fn main() -> Result<()> {
    tracing_subscriber::fmt()
        .with_max_level(tracing::Level::INFO)
        .init();

    let dataset = InMemoryDataset::seed()?;
    info!(
        "seeded {} movies, {} users, {} ratings",
        dataset.movies().len(),
        dataset.users().len(),
        dataset.ratings().len()
    );

    let engine = RecEngine::from_sources(EngineConfig::default(), &dataset, &dataset)?;

    println!("Top movies by average rating:");
    for row in engine.top_by_average_rating(5) {
        println!("  {} ({:.2})", row.title, row.value);
    }

    println!("\nTop movies by number of ratings:");
    for row in engine.top_by_rating_count(5) {
        println!("  {} ({} ratings)", row.title, row.value as usize);
    }

    println!("\nBest Action movies:");
    for row in engine.top_in_genre("Action", 5) {
        println!("  {} ({:.2})", row.title, row.value);
    }

    let similar = engine.similar_movies(1)?;
    println!("\nContent-based recommendations for movie 1:");
    for movie in &similar {
        println!("  {} (score: {:.2})", movie.title, movie.score);
    }

    let collaborative = engine.recommend_for_user(2)?;
    println!("\nCollaborative filtering picks for user 2:");
    for movie_id in &collaborative {
        println!("  movie {movie_id}");
    }

    let predicted = engine.predict_rating(3, 5)?;
    println!("\nPredicted rating for user 3 on movie 5: {predicted:.2}");

    let summary = serde_json::json!({
        "similar_to_movie_1": similar,
        "collaborative_user_2": collaborative,
        "predicted_user_3_movie_5": predicted,
    });
    println!("\n{summary}");

    Ok(())
}
