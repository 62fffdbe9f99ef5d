use serde::{Deserialize, Serialize};
use utoipa::{IntoParams, ToSchema};

/// The fixed set of ad categories offered by the marketplace.
pub static CATEGORIES: [&str; 6] = [
    "Vehicles",
    "Accommodation",
    "Services",
    "Electronics",
    "Furniture",
    "Appliances",
];

/// A marketplace ad as returned by listing and search endpoints
#[derive(Serialize, Deserialize, ToSchema)]
pub struct AdDto {
    pub ad_id: i32,
    pub category_type: String,
    /// References the category data row created alongside this ad
    pub category_id: i32,
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
    pub created_at: chrono::NaiveDateTime,
}

impl From<entity::ad::Model> for AdDto {
    fn from(ad: entity::ad::Model) -> Self {
        Self {
            ad_id: ad.ad_id,
            category_type: ad.category_type,
            category_id: ad.category_id,
            title: ad.title,
            description: ad.description,
            price: ad.price,
            location: ad.location,
            created_at: ad.created_at,
        }
    }
}

/// Optional filters and sorting for the ad listing endpoint
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct AdFilterParams {
    pub category: Option<String>,
    #[serde(rename = "minPrice")]
    pub min_price: Option<i64>,
    #[serde(rename = "maxPrice")]
    pub max_price: Option<i64>,
    /// `price_asc` or `price_desc`; anything else sorts newest-first
    #[serde(rename = "sortBy")]
    pub sort_by: Option<String>,
    #[serde(rename = "userLocation")]
    pub user_location: Option<String>,
}

/// Query parameters for the ad search endpoint
#[derive(Deserialize, IntoParams)]
#[into_params(parameter_in = Query)]
pub struct SearchParams {
    #[serde(rename = "searchTerm")]
    pub search_term: Option<String>,
}

/// Request body for posting a new ad
#[derive(Deserialize, ToSchema)]
pub struct PostAdRequest {
    pub category_type: String,
    /// Category-specific attributes, schemaless by design
    #[serde(rename = "categoryData")]
    pub category_data: serde_json::Value,
    #[serde(rename = "adData")]
    pub ad_data: AdPayload,
}

/// The general ad fields supplied when posting a new ad
#[derive(Deserialize, ToSchema)]
pub struct AdPayload {
    pub title: String,
    pub description: String,
    pub price: i64,
    pub location: String,
}
