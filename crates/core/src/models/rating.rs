//! Rating model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A single user-movie rating on the 0-5 scale.
///
/// At most one rating per (user, movie) pair is assumed; when duplicates
/// slip through, the matrix builder applies last-write-wins. A value of
/// zero becomes indistinguishable from "unrated" once the dense matrix is
/// built.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize, Validate)]
pub struct Rating {
    /// Identifier of the rating user
    #[validate(range(min = 1))]
    pub user_id: i64,

    /// Identifier of the rated movie
    #[validate(range(min = 1))]
    pub movie_id: i64,

    /// Rating value in [0.0, 5.0]
    #[validate(range(min = 0.0, max = 5.0))]
    pub value: f64,
}

impl Rating {
    pub fn new(user_id: i64, movie_id: i64, value: f64) -> Self {
        Self {
            user_id,
            movie_id,
            value,
        }
    }
}
