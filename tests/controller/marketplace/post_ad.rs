//! Tests for the post_ad endpoint.
//!
//! Posting is a two-step write: the category data row is inserted first and
//! the ad row second, referencing the generated category id. The steps are
//! not wrapped in a transaction.

use axum::{extract::State, http::StatusCode, response::IntoResponse};
use sea_orm::EntityTrait;
use souk::{
    controller::marketplace::post_ad,
    model::ad::{AdPayload, PostAdRequest},
};
use souk_test_utils::prelude::*;

fn vehicle_request() -> PostAdRequest {
    PostAdRequest {
        category_type: "Vehicles".to_string(),
        category_data: serde_json::json!({ "make": "Toyota", "model": "Corolla", "year": 2015 }),
        ad_data: AdPayload {
            title: "Toyota Corolla".to_string(),
            description: "One owner, full service history".to_string(),
            price: 4500,
            location: "Galway".to_string(),
        },
    }
}

/// Expect 201 and an ad row linked to the category row created in the same call
#[tokio::test]
async fn success_creates_linked_rows() -> Result<(), TestError> {
    let test = test_setup_with_marketplace_tables!()?;

    let result = post_ad(State(test.state()), axum::Json(vehicle_request())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::CREATED);

    let ads = entity::prelude::Ad::find().all(&test.db).await?;
    assert_eq!(ads.len(), 1);

    let category = entity::prelude::CategoryData::find_by_id(ads[0].category_id)
        .one(&test.db)
        .await?;
    assert!(category.is_some());

    let category = category.unwrap();
    assert_eq!(category.category_type, "Vehicles");
    assert_eq!(ads[0].category_type, "Vehicles");
    assert_eq!(category.attributes["make"], "Toyota");

    Ok(())
}

/// Expect the new ad to appear when listing its category afterwards
#[tokio::test]
async fn posted_ad_appears_in_filtered_listing() -> Result<(), TestError> {
    use axum::extract::Query;
    use souk::{controller::marketplace::get_all_ads, model::ad::AdFilterParams};

    let test = test_setup_with_marketplace_tables!()?;
    fixtures::ad::insert_ad(&test.db, "Furniture", "Oak table", 120, "Dublin").await?;

    let result = post_ad(State(test.state()), axum::Json(vehicle_request())).await;
    assert!(result.is_ok());

    let params = AdFilterParams {
        category: Some("Vehicles".to_string()),
        min_price: None,
        max_price: None,
        sort_by: None,
        user_location: None,
    };
    let resp = get_all_ads(State(test.state()), Query(params))
        .await
        .unwrap()
        .into_response();
    assert_eq!(resp.status(), StatusCode::OK);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let ads: Vec<serde_json::Value> = serde_json::from_slice(&body).unwrap();

    assert_eq!(ads.len(), 1);
    assert_eq!(ads[0]["title"], "Toyota Corolla");

    Ok(())
}

/// Expect 500 with error detail in the body when the write fails
#[tokio::test]
async fn error_without_tables() -> Result<(), TestError> {
    let test = test_setup_with_tables!()?;

    let result = post_ad(State(test.state()), axum::Json(vehicle_request())).await;

    assert!(result.is_ok());
    let resp = result.unwrap().into_response();
    assert_eq!(resp.status(), StatusCode::INTERNAL_SERVER_ERROR);

    let body = axum::body::to_bytes(resp.into_body(), usize::MAX)
        .await
        .unwrap();
    let error: serde_json::Value = serde_json::from_slice(&body).unwrap();

    assert_eq!(error["message"], "Server error while posting ad");
    assert!(error["error"].as_str().is_some());

    Ok(())
}
