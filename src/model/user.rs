use chrono::NaiveDateTime;
use serde::{Deserialize, Serialize};
use utoipa::ToSchema;

/// A user's own profile; projection excludes the archival flag
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserProfileDto {
    pub user_id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_student: Option<bool>,
    pub created_at: NaiveDateTime,
}

impl From<entity::user_details::Model> for UserProfileDto {
    fn from(user: entity::user_details::Model) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            address: user.address,
            phone_number: user.phone_number,
            email: user.email,
            is_student: user.is_student,
            created_at: user.created_at,
        }
    }
}

/// A full user record as returned by the admin listing, archival flag included
#[derive(Clone, Serialize, Deserialize, ToSchema)]
pub struct UserDto {
    pub user_id: i32,
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_student: Option<bool>,
    pub is_archived: bool,
    pub created_at: NaiveDateTime,
}

impl From<entity::user_details::Model> for UserDto {
    fn from(user: entity::user_details::Model) -> Self {
        Self {
            user_id: user.user_id,
            name: user.name,
            address: user.address,
            phone_number: user.phone_number,
            email: user.email,
            is_student: user.is_student,
            is_archived: user.is_archived,
            created_at: user.created_at,
        }
    }
}

/// Request body for the profile update endpoint.
///
/// Every field is optional on the wire, but all five columns are overwritten
/// on update; omitted fields are written as NULL.
#[derive(Deserialize, ToSchema)]
pub struct UpdateProfileRequest {
    pub name: Option<String>,
    pub address: Option<String>,
    pub phone_number: Option<String>,
    pub email: Option<String>,
    pub is_student: Option<bool>,
}
