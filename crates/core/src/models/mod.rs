//! Domain models for the cinerec sandbox

pub mod movie;
pub mod rating;
pub mod user;

pub use movie::Movie;
pub use rating::Rating;
pub use user::User;
