use serde::{Deserialize, Serialize};

/// The response when an error occurs with an API request
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct ErrorDto {
    /// The error message
    pub error: String,
}

/// The response for a successful write operation
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct MessageDto {
    /// A human-readable confirmation message
    pub message: String,
}

/// The response when posting an ad fails; carries the underlying error detail
#[derive(Serialize, Deserialize, utoipa::ToSchema)]
pub struct DetailedErrorDto {
    /// The error message
    pub message: String,
    /// The underlying error detail
    pub error: String,
}
