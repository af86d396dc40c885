// src/api/handlers/users.rs
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use crate::api::AppState;
use crate::database;
use super::error_response;

#[derive(Deserialize)]
pub struct CredentialsRequest {
    pub username: String,
    pub password: String,
}

#[derive(Serialize)]
pub struct UserResponse {
    pub username: String,
}

/// POST /api/v1/users/register
pub async fn register(
    state: web::Data<AppState>,
    req: web::Json<CredentialsRequest>,
) -> Result<HttpResponse> {
    match database::register_user(state.pool(), &req.username, &req.password).await {
        Ok(username) => Ok(HttpResponse::Created().json(UserResponse { username })),
        Err(e) => Ok(error_response(&e)),
    }
}

/// POST /api/v1/users/login
pub async fn login(
    state: web::Data<AppState>,
    req: web::Json<CredentialsRequest>,
) -> Result<HttpResponse> {
    match database::authenticate(state.pool(), &req.username, &req.password).await {
        Ok(username) => Ok(HttpResponse::Ok().json(UserResponse { username })),
        Err(e) => Ok(error_response(&e)),
    }
}
