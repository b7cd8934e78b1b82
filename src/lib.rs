//! Goaltrack Backend Library
//!
//! Exposes core modules for use by binaries and tests.

pub mod api;
pub mod auth;
pub mod goals;
pub mod mentors;
pub mod middleware;
pub mod models;
