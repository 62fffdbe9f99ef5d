//! HTTP routing and OpenAPI documentation configuration.
//!
//! This module defines the application's HTTP routes and generates OpenAPI
//! documentation using utoipa. All API endpoints are registered here with
//! their OpenAPI specifications, and Swagger UI is configured to provide
//! interactive API documentation at `/api/docs`.

use axum::Router;
use utoipa::OpenApi;
use utoipa_axum::{router::OpenApiRouter, routes};
use utoipa_swagger_ui::SwaggerUi;

use crate::{controller, model::app::AppState};

/// Builds the application's HTTP router with all API endpoints and Swagger UI.
///
/// # Registered Endpoints
/// - `GET /api/ads` - List ads with optional filters and sorting
/// - `POST /api/ads` - Post a new ad
/// - `GET /api/ads/search` - Search ads by product title
/// - `GET /api/ads/categories` - List the available ad categories
/// - `PUT /api/ads/{id}/archive` - Archive an ad
/// - `GET /api/user/profile` - Get the logged in user's profile
/// - `PUT /api/user/profile` - Update the logged in user's profile
/// - `PUT /api/user/profile/archive` - Archive the logged in user's account
/// - `GET /api/admin/users` - List every user, active and archived
/// - `PUT /api/admin/users/{id}/archive` - Archive a user by id
/// - `PUT /api/admin/users/{id}/activate` - Reactivate an archived user
///
/// # Returns
/// An Axum `Router<AppState>` configured with all routes, ready to be merged
/// into the main application router. The OpenAPI specification is served at
/// `/api/docs/openapi.json`.
pub fn routes() -> Router<AppState> {
    #[derive(OpenApi)]
    #[openapi(info(title = "Souk", description = "Souk classifieds marketplace API"), tags(
        (name = controller::marketplace::MARKETPLACE_TAG, description = "Marketplace ad routes"),
        (name = controller::user::USER_TAG, description = "User profile routes"),
        (name = controller::user::ADMIN_TAG, description = "Admin user management routes"),
    ))]
    struct ApiDoc;

    let (routes, api) = OpenApiRouter::with_openapi(ApiDoc::openapi())
        .routes(routes!(
            controller::marketplace::get_all_ads,
            controller::marketplace::post_ad
        ))
        .routes(routes!(controller::marketplace::search_products))
        .routes(routes!(controller::marketplace::get_categories))
        .routes(routes!(controller::marketplace::archive_ad))
        .routes(routes!(
            controller::user::get_user_profile,
            controller::user::update_user_profile
        ))
        .routes(routes!(controller::user::archive_own_user))
        .routes(routes!(controller::user::get_all_users))
        .routes(routes!(controller::user::archive_user))
        .routes(routes!(controller::user::activate_user))
        .split_for_parts();

    let routes = routes.merge(SwaggerUi::new("/api/docs").url("/api/docs/openapi.json", api));

    routes
}
