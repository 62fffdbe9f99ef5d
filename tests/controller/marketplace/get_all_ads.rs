//! Tests for the get_all_ads endpoint.

use axum::{
    extract::{Query, State},
    http::StatusCode,
    response::IntoResponse,
};
use souk::{controller::marketplace::get_all_ads, model::ad::AdFilterParams};
use souk_test_utils::prelude::*;

fn no_filters() -> AdFilterParams {
    AdFilterParams {
        category: None,
        min_price: None,
        max_price: None,
        sort_by: None,
        user_location: None,
    }
}

/// Expect 200 OK with an empty list when no ads exist
#[tokio::test]
async fn success_with_empty_list() -> Result<(), TestError> {
    let test = test_setup_with_marketplace_tables!()?;

    let result = get_all_ads(State(test.state()), Query(no_filters())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect 200 OK when every filter is supplied
#[tokio::test]
async fn success_with_all_filters() -> Result<(), TestError> {
    let test = test_setup_with_marketplace_tables!()?;
    fixtures::ad::insert_ad(&test.db, "Vehicles", "Corolla", 4500, "Galway").await?;

    let params = AdFilterParams {
        category: Some("Vehicles".to_string()),
        min_price: Some(4000),
        max_price: Some(5000),
        sort_by: Some("price_asc".to_string()),
        user_location: Some("Galway".to_string()),
    };
    let result = get_all_ads(State(test.state()), Query(params)).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    Ok(())
}

/// Expect Err when required tables have not been created
#[tokio::test]
async fn error_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = get_all_ads(State(test.state()), Query(no_filters())).await;

    assert!(result.is_err());
    let resp = result.unwrap_err().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    Ok(())
}
