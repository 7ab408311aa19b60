//! Movie catalog model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A movie in the catalog.
///
/// Records are immutable once created; the identifier is assigned by the
/// seeding collaborator and stays stable for the lifetime of the dataset.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct Movie {
    /// Stable positive identifier
    #[validate(range(min = 1))]
    pub id: i64,

    /// Display title
    #[validate(length(min = 1, max = 200))]
    pub title: String,

    /// Categorical genre label (e.g., "Sci-Fi", "Drama")
    #[validate(length(min = 1, max = 50))]
    pub genre: String,

    /// Release year
    pub year: i32,
}

impl Movie {
    pub fn new(id: i64, title: impl Into<String>, genre: impl Into<String>, year: i32) -> Self {
        Self {
            id,
            title: title.into(),
            genre: genre.into(),
            year,
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_movie() {
        let movie = Movie::new(1, "Inception", "Sci-Fi", 2010);
        assert!(movie.validate().is_ok());
    }

    #[test]
    fn test_movie_requires_positive_id() {
        let movie = Movie::new(0, "Inception", "Sci-Fi", 2010);
        assert!(movie.validate().is_err());
    }

    #[test]
    fn test_movie_requires_title() {
        let movie = Movie::new(1, "", "Sci-Fi", 2010);
        assert!(movie.validate().is_err());
    }
}
