//! Credential HTTP handlers: register, login, token verification, user listing.

use axum::{
    extract::{Query, State},
    Json,
};
use axum_extra::extract::WithRejection;
use serde::{Deserialize, Serialize};
use tracing::{info, warn};

use crate::auth::jwt::Claims;
use crate::auth::service::{hash_password, verify_password};
use crate::db::{user_create, user_find_by_email, users_list_all, UserRow};
use crate::error::AppError;
use crate::handlers::http::AppState;

#[derive(Debug, Deserialize)]
pub struct RegisterRequest {
    pub name: String,
    pub email: String,
    pub password: String,
    pub role: String,
}

/// Stored user as serialized back to clients, password hash included.
#[derive(Debug, Serialize)]
pub struct UserResponse {
    pub id: i32,
    pub name: String,
    pub email: String,
    pub password_hash: String,
    pub role: String,
}

impl From<UserRow> for UserResponse {
    fn from(row: UserRow) -> Self {
        Self {
            id: row.id,
            name: row.name,
            email: row.email,
            password_hash: row.password_hash,
            role: row.role,
        }
    }
}

#[derive(Debug, Serialize)]
pub struct RegisterResponse {
    pub user: UserResponse,
}

#[derive(Debug, Deserialize)]
pub struct LoginRequest {
    pub email: String,
    pub password: String,
}

#[derive(Debug, Serialize)]
pub struct LoginResponse {
    pub token: String,
}

#[derive(Debug, Deserialize)]
pub struct SecretQuery {
    pub token: String,
}

/// POST /register/
///
/// No duplicate-email check is performed: registering the same address
/// twice creates two rows with distinct ids.
pub async fn register(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<RegisterRequest>, AppError>,
) -> Result<Json<RegisterResponse>, AppError> {
    info!(email = %body.email, "registering user");

    let password_hash = hash_password(&body.password)?;
    let user = user_create(
        state.db(),
        &body.name,
        &body.email,
        &password_hash,
        &body.role,
    )
    .await?;

    Ok(Json(RegisterResponse { user: user.into() }))
}

/// POST /login
///
/// Unknown email is 404, bad password 401; otherwise a signed token
/// carrying the user snapshot.
pub async fn login(
    State(state): State<AppState>,
    WithRejection(Json(body), _): WithRejection<Json<LoginRequest>, AppError>,
) -> Result<Json<LoginResponse>, AppError> {
    let user = user_find_by_email(state.db(), &body.email)
        .await?
        .ok_or_else(|| AppError::NotFound("User not found".to_string()))?;

    if !verify_password(&body.password, &user.password_hash)? {
        warn!(user_id = user.id, "login with invalid password");
        return Err(AppError::Auth("Invalid password".to_string()));
    }

    info!(user_id = user.id, email = %user.email, "user logged in");
    let token = state.jwt_secret().issue(&user)?;
    Ok(Json(LoginResponse { token }))
}

/// GET /secret
///
/// Decodes `?token=` and echoes its claims. Any structural or signature
/// failure collapses to 401 "Invalid token".
pub async fn secret(
    State(state): State<AppState>,
    Query(query): Query<SecretQuery>,
) -> Result<Json<Claims>, AppError> {
    let claims = state
        .jwt_secret()
        .validate(&query.token)
        .map_err(|_| AppError::Auth("Invalid token".to_string()))?;
    Ok(Json(claims))
}

/// GET /users
///
/// Every stored user, hashes included. An empty table is reported as
/// 401 "No users found".
pub async fn list_users(
    State(state): State<AppState>,
) -> Result<Json<Vec<UserResponse>>, AppError> {
    let users = users_list_all(state.db()).await?;
    if users.is_empty() {
        return Err(AppError::Auth("No users found".to_string()));
    }
    Ok(Json(users.into_iter().map(Into::into).collect()))
}
