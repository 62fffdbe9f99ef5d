//! Data access layer repositories.
//!
//! Repositories own query construction for the marketplace and user domains.
//! Controllers decide HTTP status codes from the results; repositories only
//! report rows and affected-row counts.

pub mod ad;
pub mod category;
pub mod user;
