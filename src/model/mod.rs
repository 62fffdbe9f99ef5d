//! Application state, API DTOs, and session models.

pub mod ad;
pub mod api;
pub mod app;
pub mod session;
pub mod user;
