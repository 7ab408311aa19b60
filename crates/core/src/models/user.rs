//! User model

use serde::{Deserialize, Serialize};
use validator::Validate;

/// A user known to the sandbox.
///
/// Immutable; only the identifier participates in the recommendation
/// pipeline, the rest is presentation data.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize, Validate)]
pub struct User {
    /// Stable positive identifier
    #[validate(range(min = 1))]
    pub id: i64,

    /// Display name
    #[validate(length(min = 1, max = 100))]
    pub name: String,

    /// Free-text country label
    pub country: String,
}

impl User {
    pub fn new(id: i64, name: impl Into<String>, country: impl Into<String>) -> Self {
        Self {
            id,
            name: name.into(),
            country: country.into(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use validator::Validate;

    #[test]
    fn test_valid_user() {
        let user = User::new(1, "Alice", "USA");
        assert!(user.validate().is_ok());
    }

    #[test]
    fn test_user_requires_positive_id() {
        assert!(User::new(-3, "Alice", "USA").validate().is_err());
    }
}
