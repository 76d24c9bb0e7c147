//! Users API handlers.
//!
//! ```text
//! POST /api/users {"user":{"username":"jake","email":"jake@jake.jake","password":"jakejake"}}
//! ```

use actix_web::{HttpResponse, post, web};
use serde::{Deserialize, Serialize};
use serde_json::json;

use crate::domain::ports::RegistrationError;
use crate::domain::{Error, RegistrationCommand, UserProfile, UserValidationError};
use crate::inbound::http::ApiResult;
use crate::inbound::http::state::HttpState;

/// Registration request body for `POST /api/users`.
///
/// Example JSON:
/// `{"user":{"username":"jake","email":"jake@jake.jake","password":"jakejake"}}`
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct RegistrationRequest {
    /// Registration fields wrapped in the `user` envelope.
    pub user: NewUser,
}

/// Raw registration fields inside the request envelope.
#[derive(Debug, Clone, Deserialize, Serialize, utoipa::ToSchema)]
pub struct NewUser {
    /// Requested username.
    pub username: String,
    /// Requested email address.
    pub email: String,
    /// Plaintext password; hashing happens behind the registration port.
    pub password: String,
}

/// Response envelope wrapping the registered user.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserResponse {
    /// The registered user as returned by the registration handler.
    pub user: UserPayload,
}

/// Wire shape of a registered user.
///
/// `bio` and `image` serialise as explicit JSON `null` when absent; clients
/// rely on the keys always being present.
#[derive(Debug, Clone, Serialize, utoipa::ToSchema)]
pub struct UserPayload {
    /// Email address the user registered with.
    pub email: String,
    /// Authentication token issued for the user.
    pub token: String,
    /// Public handle the user registered under.
    pub username: String,
    /// Short biography, `null` until the user sets one.
    pub bio: Option<String>,
    /// Avatar image URL, `null` until the user sets one.
    pub image: Option<String>,
}

impl From<UserProfile> for UserResponse {
    fn from(profile: UserProfile) -> Self {
        Self {
            user: UserPayload {
                email: profile.email().as_ref().to_owned(),
                token: profile.token().to_owned(),
                username: profile.username().as_ref().to_owned(),
                bio: profile.bio().map(ToOwned::to_owned),
                image: profile.image().map(ToOwned::to_owned),
            },
        }
    }
}

/// Register a new user.
///
/// Uses the centralised `Error` type so clients get a consistent error
/// schema across all endpoints.
#[utoipa::path(
    post,
    path = "/api/users",
    request_body = RegistrationRequest,
    responses(
        (status = 201, description = "User registered", body = UserResponse),
        (status = 400, description = "Invalid request"),
        (status = 409, description = "Username or email already registered"),
        (status = 500, description = "Internal server error")
    ),
    tags = ["users"],
    operation_id = "register"
)]
#[post("/users")]
pub async fn register(
    state: web::Data<HttpState>,
    payload: web::Json<RegistrationRequest>,
) -> ApiResult<HttpResponse> {
    let NewUser {
        username,
        email,
        password,
    } = payload.into_inner().user;

    let registration = RegistrationCommand::try_from_parts(&username, &email, &password)
        .map_err(map_validation_error)?;
    let profile = state
        .registration
        .register(&registration)
        .await
        .map_err(map_registration_error)?;

    created_json(&UserResponse::from(profile))
}

/// Serialise a 201 response with the content type clients expect.
///
/// The API contract pins the charset parameter on successful responses, so
/// the header is set explicitly rather than left to the JSON responder.
fn created_json<T: Serialize>(body: &T) -> ApiResult<HttpResponse> {
    let body = serde_json::to_string(body)
        .map_err(|err| Error::internal(format!("response serialisation failed: {err}")))?;
    Ok(HttpResponse::Created()
        .content_type("application/json; charset=utf-8")
        .body(body))
}

fn map_validation_error(err: UserValidationError) -> Error {
    let (field, code) = match &err {
        UserValidationError::EmptyUsername => ("username", "empty_username"),
        UserValidationError::UsernameTooLong { .. } => ("username", "username_too_long"),
        UserValidationError::UsernameInvalidCharacters => {
            ("username", "username_invalid_characters")
        }
        UserValidationError::EmptyEmail => ("email", "empty_email"),
        UserValidationError::InvalidEmail => ("email", "invalid_email"),
        UserValidationError::EmptyPassword => ("password", "empty_password"),
    };
    Error::invalid_request(err.to_string()).with_details(json!({ "field": field, "code": code }))
}

fn map_registration_error(err: RegistrationError) -> Error {
    match err {
        err @ RegistrationError::AlreadyExists => Error::conflict(err.to_string()),
        RegistrationError::Rejected { message } => Error::invalid_request(message),
        RegistrationError::Failure { message } => Error::internal(message),
    }
}
