use axum::{
    extract::{Path, Query, State},
    http::StatusCode,
    response::IntoResponse,
};

use crate::{
    data::{ad::AdRepository, category::CategoryDataRepository},
    error::Error,
    model::{
        ad::{AdDto, AdFilterParams, PostAdRequest, SearchParams, CATEGORIES},
        api::{DetailedErrorDto, ErrorDto, MessageDto},
        app::AppState,
    },
};

pub static MARKETPLACE_TAG: &str = "marketplace";

/// List ads with optional filtering and sorting
///
/// # Responses
/// - 200 (OK): The ads matching every supplied filter, archived ads excluded
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/ads",
    tag = MARKETPLACE_TAG,
    params(AdFilterParams),
    responses(
        (status = 200, description = "Success when retrieving ads", body = Vec<AdDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_ads(
    State(state): State<AppState>,
    Query(params): Query<AdFilterParams>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let ad_repository = AdRepository::new(&state.db);

    let ads = ad_repository
        .fetch_all(
            params.category.as_deref(),
            params.min_price,
            params.max_price,
            params.sort_by.as_deref(),
            params.user_location.as_deref(),
        )
        .await?;

    let ad_dtos: Vec<AdDto> = ads.into_iter().map(AdDto::from).collect();

    Ok((StatusCode::OK, axum::Json(ad_dtos)).into_response())
}

/// Search ads by product title
///
/// # Responses
/// - 200 (OK): The ads whose title contains the search term
/// - 400 (Bad Request): The search term was missing or empty
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/ads/search",
    tag = MARKETPLACE_TAG,
    params(SearchParams),
    responses(
        (status = 200, description = "Success when searching for products", body = Vec<AdDto>),
        (status = 400, description = "Search term is required", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn search_products(
    State(state): State<AppState>,
    Query(params): Query<SearchParams>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let search_term = match params.search_term.as_deref() {
        Some(term) if !term.is_empty() => term,
        _ => return Err(Error::ValidationError("Search term is required".to_string())),
    };

    let ad_repository = AdRepository::new(&state.db);
    let products = ad_repository.search_by_title(search_term).await?;

    let product_dtos: Vec<AdDto> = products.into_iter().map(AdDto::from).collect();

    Ok((StatusCode::OK, axum::Json(product_dtos)).into_response())
}

/// List the available ad categories
///
/// # Responses
/// - 200 (OK): The fixed list of six category names
#[utoipa::path(
    get,
    path = "/api/ads/categories",
    tag = MARKETPLACE_TAG,
    responses(
        (status = 200, description = "The available ad categories", body = Vec<String>),
    ),
)]
pub async fn get_categories() -> impl IntoResponse {
    (StatusCode::OK, axum::Json(CATEGORIES)).into_response()
}

/// Post a new ad
///
/// Inserts the category-specific attributes first to obtain a category id,
/// then inserts the ad referencing it. The two writes are not wrapped in a
/// transaction: a failure between them leaves the category row behind.
///
/// # Responses
/// - 201 (Created): The ad was posted
/// - 500 (Internal Server Error): Either write failed; the body carries the
///   underlying error detail
#[utoipa::path(
    post,
    path = "/api/ads",
    tag = MARKETPLACE_TAG,
    request_body = PostAdRequest,
    responses(
        (status = 201, description = "Ad posted successfully", body = MessageDto),
        (status = 500, description = "Server error while posting ad", body = DetailedErrorDto)
    ),
)]
pub async fn post_ad(
    State(state): State<AppState>,
    axum::Json(body): axum::Json<PostAdRequest>,
) -> Result<impl IntoResponse, Error> {
    let category_repository = CategoryDataRepository::new(&state.db);
    let ad_repository = AdRepository::new(&state.db);

    let result = async {
        let category = category_repository
            .create(&body.category_type, body.category_data)
            .await?;

        ad_repository
            .create(&body.category_type, category.id, body.ad_data)
            .await
    }
    .await;

    match result {
        Ok(_) => Ok((
            StatusCode::CREATED,
            axum::Json(MessageDto {
                message: "Ad posted successfully!".to_string(),
            }),
        )
            .into_response()),
        Err(err) => Ok((
            StatusCode::INTERNAL_SERVER_ERROR,
            axum::Json(DetailedErrorDto {
                message: "Server error while posting ad".to_string(),
                error: err.to_string(),
            }),
        )
            .into_response()),
    }
}

/// Archive an ad
///
/// # Responses
/// - 200 (OK): The ad's archival flag was set
/// - 404 (Not Found): No ad matched the given id
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    put,
    path = "/api/ads/{id}/archive",
    tag = MARKETPLACE_TAG,
    params(("id" = i32, Path, description = "The ad id")),
    responses(
        (status = 200, description = "Ad archived successfully", body = MessageDto),
        (status = 404, description = "Ad not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_ad(
    State(state): State<AppState>,
    Path(ad_id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let ad_repository = AdRepository::new(&state.db);

    let result = ad_repository.archive(ad_id).await?;

    if result.rows_affected == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "Ad not found".to_string(),
            }),
        )
            .into_response());
    }

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Ad archived successfully".to_string(),
        }),
    )
        .into_response())
}
