//! Dataset sources
//!
//! Persistence proper belongs to an external collaborator; the engine only
//! needs capabilities to fetch the movie catalog and the ratings
//! collection. The in-memory implementation validates records on insertion
//! and carries the reference seed dataset.

use cinerec_core::validation::validate_record;
use cinerec_core::{Movie, Rating, Result, User};

/// Capability to fetch the full movie catalog.
pub trait CatalogSource {
    fn fetch_catalog(&self) -> Result<Vec<Movie>>;
}

/// Capability to fetch the ratings collection.
pub trait RatingsSource {
    fn fetch_ratings(&self) -> Result<Vec<Rating>>;
}

/// Validated in-memory dataset of movies, users, and ratings.
#[derive(Debug, Clone, Default)]
pub struct InMemoryDataset {
    movies: Vec<Movie>,
    users: Vec<User>,
    ratings: Vec<Rating>,
}

impl InMemoryDataset {
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a movie after validating it.
    pub fn add_movie(&mut self, movie: Movie) -> Result<()> {
        validate_record("movie", &movie)?;
        self.movies.push(movie);
        Ok(())
    }

    /// Add a user after validating it.
    pub fn add_user(&mut self, user: User) -> Result<()> {
        validate_record("user", &user)?;
        self.users.push(user);
        Ok(())
    }

    /// Add a rating after validating it.
    pub fn add_rating(&mut self, rating: Rating) -> Result<()> {
        validate_record("rating", &rating)?;
        self.ratings.push(rating);
        Ok(())
    }

    pub fn movies(&self) -> &[Movie] {
        &self.movies
    }

    pub fn users(&self) -> &[User] {
        &self.users
    }

    pub fn ratings(&self) -> &[Rating] {
        &self.ratings
    }

    /// The reference dataset: ten movies, five users, fifteen ratings.
    pub fn seed() -> Result<Self> {
        let mut dataset = Self::new();

        let movies = [
            (1, "Inception", "Sci-Fi", 2010),
            (2, "The Dark Knight", "Action", 2008),
            (3, "Interstellar", "Sci-Fi", 2014),
            (4, "3 Idiots", "Comedy", 2009),
            (5, "Dangal", "Drama", 2016),
            (6, "Avengers: Endgame", "Action", 2019),
            (7, "PK", "Comedy", 2014),
            (8, "Parasite", "Thriller", 2019),
            (9, "The Matrix", "Sci-Fi", 1999),
            (10, "Titanic", "Romance", 1997),
        ];
        for (id, title, genre, year) in movies {
            dataset.add_movie(Movie::new(id, title, genre, year))?;
        }

        let users = [
            (1, "Alice", "USA"),
            (2, "Bob", "India"),
            (3, "Charlie", "UK"),
            (4, "David", "India"),
            (5, "Eva", "Germany"),
        ];
        for (id, name, country) in users {
            dataset.add_user(User::new(id, name, country))?;
        }

        let ratings = [
            (1, 1, 5.0),
            (1, 2, 4.0),
            (1, 3, 5.0),
            (2, 4, 5.0),
            (2, 5, 4.0),
            (2, 6, 3.0),
            (3, 1, 4.0),
            (3, 7, 5.0),
            (3, 8, 5.0),
            (4, 2, 5.0),
            (4, 5, 5.0),
            (4, 9, 4.0),
            (5, 3, 4.0),
            (5, 6, 5.0),
            (5, 10, 4.0),
        ];
        for (user_id, movie_id, value) in ratings {
            dataset.add_rating(Rating::new(user_id, movie_id, value))?;
        }

        Ok(dataset)
    }
}

impl CatalogSource for InMemoryDataset {
    fn fetch_catalog(&self) -> Result<Vec<Movie>> {
        Ok(self.movies.clone())
    }
}

impl RatingsSource for InMemoryDataset {
    fn fetch_ratings(&self) -> Result<Vec<Rating>> {
        Ok(self.ratings.clone())
    }
}
