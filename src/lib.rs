//! Souk classifieds marketplace web API.
//!
//! This crate provides the HTTP surface for a classifieds/marketplace
//! application: listing, searching, posting, and archiving ads, plus user
//! profile management and admin user administration. Controllers handle HTTP
//! requests, repositories own query construction, and the error module maps
//! failures to HTTP responses.

pub mod config;
pub mod controller;
pub mod data;
pub mod error;
pub mod model;
pub mod router;
pub mod startup;
