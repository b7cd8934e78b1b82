//! HTTP API Module
//! Mission: Router assembly and shared error mapping

pub mod error;
pub mod routes;

pub use error::ApiError;
pub use routes::{create_router, AppState};
