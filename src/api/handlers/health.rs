// src/api/handlers/health.rs
use actix_web::{web, HttpResponse, Result};
use serde_json::json;
use crate::api::AppState;
use crate::store::QuizStore;
use super::error_response;

/// GET /api/v1/health - Service version plus a live count of stored quizzes
pub async fn health_check(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.store.load().await {
        Ok(quizzes) => Ok(HttpResponse::Ok().json(json!({
            "status": "healthy",
            "service": "quizbook-api",
            "version": env!("CARGO_PKG_VERSION"),
            "listen": format!("{}:{}", state.config.host, state.config.port),
            "quiz_count": quizzes.len()
        }))),
        Err(e) => Ok(error_response(&e)),
    }
}
