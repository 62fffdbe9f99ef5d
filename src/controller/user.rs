use axum::{
    extract::{Path, State},
    http::StatusCode,
    response::IntoResponse,
};
use tower_sessions::Session;

use crate::{
    data::user::UserRepository,
    error::Error,
    model::{
        api::{ErrorDto, MessageDto},
        app::AppState,
        session::SessionUserId,
        user::{UpdateProfileRequest, UserDto, UserProfileDto},
    },
};

pub static USER_TAG: &str = "user";
pub static ADMIN_TAG: &str = "admin";

/// Get the logged in user's profile
///
/// The subject is always the authenticated caller; this endpoint cannot be
/// pointed at an arbitrary user id. The projection excludes the archival flag.
///
/// # Responses
/// - 200 (OK): The user's profile
/// - 404 (Not Found): No session user, or no matching row
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/user/profile",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Success when retrieving user profile", body = UserProfileDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_user_profile(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let user_id = SessionUserId::get(&session).await?;

    let user_id = if let Some(user_id) = user_id {
        user_id
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    let user = if let Some(user) = user_repository.get_by_id(user_id).await? {
        user
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    };

    Ok((StatusCode::OK, axum::Json(UserProfileDto::from(user))).into_response())
}

/// Update the logged in user's profile
///
/// All five profile fields are overwritten unconditionally; fields omitted
/// from the request body are written as NULL.
///
/// # Responses
/// - 200 (OK): The profile was updated
/// - 404 (Not Found): No session user, or no row matched
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    put,
    path = "/api/user/profile",
    tag = USER_TAG,
    request_body = UpdateProfileRequest,
    responses(
        (status = 200, description = "Profile updated successfully", body = MessageDto),
        (status = 404, description = "User not found or no changes made", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn update_user_profile(
    State(state): State<AppState>,
    session: Session,
    axum::Json(body): axum::Json<UpdateProfileRequest>,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let user_id = SessionUserId::get(&session).await?;

    let user_id = if let Some(user_id) = user_id {
        user_id
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found or no changes made".to_string(),
            }),
        )
            .into_response());
    };

    let result = user_repository
        .update_profile(
            user_id,
            body.name,
            body.address,
            body.phone_number,
            body.email,
            body.is_student,
        )
        .await?;

    if result.rows_affected == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found or no changes made".to_string(),
            }),
        )
            .into_response());
    }

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Profile updated successfully".to_string(),
        }),
    )
        .into_response())
}

/// Archive the logged in user's own account
///
/// # Responses
/// - 200 (OK): The account's archival flag was set
/// - 404 (Not Found): No session user, no matching row, or already archived
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    put,
    path = "/api/user/profile/archive",
    tag = USER_TAG,
    responses(
        (status = 200, description = "Account archived successfully", body = MessageDto),
        (status = 404, description = "User not found or already archived", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_own_user(
    State(state): State<AppState>,
    session: Session,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let user_id = SessionUserId::get(&session).await?;

    let user_id = if let Some(user_id) = user_id {
        user_id
    } else {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found or already archived".to_string(),
            }),
        )
            .into_response());
    };

    let result = user_repository.set_archived(user_id, true).await?;

    if result.rows_affected == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found or already archived".to_string(),
            }),
        )
            .into_response());
    }

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "Account archived successfully".to_string(),
        }),
    )
        .into_response())
}

/// Archive a user by id (admin)
///
/// No affected-row check is performed: archiving an id with no matching row
/// still reports success, unlike the self-service archival endpoint.
///
/// # Responses
/// - 200 (OK): The archival update executed, whether or not a row matched
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/archive",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "The target user id")),
    responses(
        (status = 200, description = "User archived successfully", body = MessageDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn archive_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let user_repository = UserRepository::new(&state.db);

    let _ = user_repository.set_archived(user_id, true).await?;

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "User archived successfully".to_string(),
        }),
    )
        .into_response())
}

/// List every user, active and archived (admin)
///
/// # Responses
/// - 200 (OK): All user rows, archival flag included
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    get,
    path = "/api/admin/users",
    tag = ADMIN_TAG,
    responses(
        (status = 200, description = "Success when retrieving users", body = Vec<UserDto>),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn get_all_users(
    State(state): State<AppState>,
) -> Result<impl IntoResponse + std::fmt::Debug, Error> {
    let user_repository = UserRepository::new(&state.db);

    let users = user_repository.fetch_all().await?;

    let user_dtos: Vec<UserDto> = users.into_iter().map(UserDto::from).collect();

    Ok((StatusCode::OK, axum::Json(user_dtos)).into_response())
}

/// Reactivate an archived user (admin)
///
/// # Responses
/// - 200 (OK): The user's archival flag was cleared
/// - 404 (Not Found): No user matched the given id
/// - 500 (Internal Server Error): A database-related error occurred
#[utoipa::path(
    put,
    path = "/api/admin/users/{id}/activate",
    tag = ADMIN_TAG,
    params(("id" = i32, Path, description = "The target user id")),
    responses(
        (status = 200, description = "User activated successfully", body = MessageDto),
        (status = 404, description = "User not found", body = ErrorDto),
        (status = 500, description = "Internal server error", body = ErrorDto)
    ),
)]
pub async fn activate_user(
    State(state): State<AppState>,
    Path(user_id): Path<i32>,
) -> Result<impl IntoResponse, Error> {
    let user_repository = UserRepository::new(&state.db);

    let result = user_repository.set_archived(user_id, false).await?;

    if result.rows_affected == 0 {
        return Ok((
            StatusCode::NOT_FOUND,
            axum::Json(ErrorDto {
                error: "User not found".to_string(),
            }),
        )
            .into_response());
    }

    Ok((
        StatusCode::OK,
        axum::Json(MessageDto {
            message: "User activated successfully".to_string(),
        }),
    )
        .into_response())
}
