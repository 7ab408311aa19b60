//! Validation helpers for ingestion-time record checks
//!
//! Models carry `validator` derives; this module maps their failures onto
//! the core error type so data sources reject bad records uniformly.

use crate::error::RecError;
use validator::Validate;

/// Validate any model deriving [`Validate`], mapping failures to
/// [`RecError::InvalidRecord`].
///
/// # Examples
///
/// ```
/// use cinerec_core::models::Rating;
/// use cinerec_core::validation::validate_record;
///
/// assert!(validate_record("rating", &Rating::new(1, 2, 4.5)).is_ok());
/// assert!(validate_record("rating", &Rating::new(1, 2, 9.0)).is_err());
/// ```
pub fn validate_record<T: Validate>(entity: &'static str, record: &T) -> Result<(), RecError> {
    record
        .validate()
        .map_err(|errors| RecError::invalid_record(entity, &errors))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::{Movie, Rating};

    #[test]
    fn test_validate_record_passes_good_records() {
        assert!(validate_record("movie", &Movie::new(1, "Parasite", "Thriller", 2019)).is_ok());
        assert!(validate_record("rating", &Rating::new(3, 8, 5.0)).is_ok());
    }

    #[test]
    fn test_validate_record_names_the_entity() {
        let err = validate_record("movie", &Movie::new(0, "", "Thriller", 2019))
            .expect_err("invalid movie must be rejected");
        assert!(err.to_string().contains("invalid movie record"));
    }
}
