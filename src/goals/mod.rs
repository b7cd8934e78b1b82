//! Learning Goals Module
//! Mission: Owner-scoped goal tracking with progress-derived status

pub mod api;
pub mod models;
pub mod store;

pub use models::{derive_status, Goal, GoalStatus};
pub use store::GoalStore;
