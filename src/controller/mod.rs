//! HTTP controller endpoints for the Souk web API.
//!
//! This module contains Axum handlers for the marketplace and user domains.
//! Controllers handle HTTP requests, validate inputs, call into repositories,
//! and return appropriate HTTP responses. Endpoints are annotated with utoipa
//! for OpenAPI documentation.

pub mod marketplace;
pub mod user;
