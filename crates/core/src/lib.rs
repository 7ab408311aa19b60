//! # Cinerec Core
//!
//! Domain models and shared utilities for the cinerec recommendation
//! sandbox.
//!
//! ## Modules
//!
//! - `models`: movies, users, and ratings
//! - `error`: the typed error enum shared across the workspace
//! - `math`: vector operations used by the similarity engines
//! - `validation`: record-level validation helpers

pub mod error;
pub mod math;
pub mod models;
pub mod validation;

// Re-export commonly used types
pub use error::RecError;
pub use math::{cosine_similarity, dot_product, l2_norm};
pub use models::{Movie, Rating, User};

/// Result type alias for cinerec operations
pub type Result<T> = std::result::Result<T, RecError>;
