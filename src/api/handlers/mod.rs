// src/api/handlers/mod.rs
mod health;
mod quizzes;
mod users;

use actix_web::HttpResponse;
use serde_json::json;

use crate::errors::QuizError;

pub use health::health_check;
pub use quizzes::{create_quiz, get_quiz, list_quizzes, submit_attempt};
pub use users::{login, register};

/// Maps a failed operation onto an HTTP status with an `{"error": ...}` body.
pub(crate) fn error_response(e: &QuizError) -> HttpResponse {
    let body = json!({ "error": e.reason().map(str::to_string).unwrap_or_else(|| e.to_string()) });

    match e {
        QuizError::InvalidInput(_) | QuizError::PreconditionViolation(_) => {
            HttpResponse::BadRequest().json(body)
        }
        QuizError::InvalidCredentials => HttpResponse::Unauthorized().json(body),
        QuizError::QuizNotFound(_) => HttpResponse::NotFound().json(body),
        QuizError::UsernameTaken(_) => HttpResponse::Conflict().json(body),
        _ => {
            log::error!("Request failed: {:?}", e);
            HttpResponse::InternalServerError().json(json!({ "error": "Internal server error" }))
        }
    }
}
