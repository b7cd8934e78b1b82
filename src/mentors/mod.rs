//! Mentor Discovery Module
//! Mission: Public mentor directory with authenticated admin-style mutation

pub mod api;
pub mod models;
pub mod seed;
pub mod store;

pub use models::Mentor;
pub use store::MentorStore;
