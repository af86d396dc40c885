// src/api/handlers/quizzes.rs
use actix_web::{web, HttpResponse, Result};
use serde::{Deserialize, Serialize};
use crate::api::AppState;
use crate::builder::QuizDraft;
use crate::grading;
use crate::models::{AnswerSubmission, QuizSummary};
use crate::store::{self, QuizStore};
use super::error_response;

#[derive(Serialize)]
pub struct QuizListResponse {
    pub quizzes: Vec<QuizSummary>,
}

#[derive(Deserialize)]
pub struct AttemptRequest {
    #[serde(default)]
    pub answers: Vec<AnswerSubmission>,
}

/// GET /api/v1/quizzes - Every saved quiz, in the order it was created
pub async fn list_quizzes(state: web::Data<AppState>) -> Result<HttpResponse> {
    match state.store.load().await {
        Ok(quizzes) => Ok(HttpResponse::Ok().json(QuizListResponse {
            quizzes: QuizSummary::list(&quizzes),
        })),
        Err(e) => Ok(error_response(&e)),
    }
}

/// POST /api/v1/quizzes - Validate and save a new quiz
pub async fn create_quiz(
    state: web::Data<AppState>,
    req: web::Json<QuizDraft>,
) -> Result<HttpResponse> {
    match store::publish(&state.store, &req).await {
        Ok(quiz) => Ok(HttpResponse::Created().json(quiz)),
        Err(e) => {
            log::info!("Rejected quiz '{}': {}", req.title.trim(), e);
            Ok(error_response(&e))
        }
    }
}

/// GET /api/v1/quizzes/{index} - The quiz as shown to someone taking it
pub async fn get_quiz(
    state: web::Data<AppState>,
    path: web::Path<usize>,
) -> Result<HttpResponse> {
    match state.store.get(path.into_inner()).await {
        Ok(quiz) => Ok(HttpResponse::Ok().json(quiz.sheet())),
        Err(e) => Ok(error_response(&e)),
    }
}

/// POST /api/v1/quizzes/{index}/attempts - Grade a set of answers
pub async fn submit_attempt(
    state: web::Data<AppState>,
    path: web::Path<usize>,
    req: web::Json<AttemptRequest>,
) -> Result<HttpResponse> {
    let index = path.into_inner();

    let quiz = match state.store.get(index).await {
        Ok(quiz) => quiz,
        Err(e) => return Ok(error_response(&e)),
    };

    let graded = grading::align_submissions(quiz.questions().len(), req.into_inner().answers)
        .and_then(|answers| grading::grade(&quiz, &answers));

    match graded {
        Ok(result) => {
            log::info!("Quiz {} ('{}'): {}", index, quiz.title(), result);
            Ok(HttpResponse::Ok().json(result))
        }
        Err(e) => Ok(error_response(&e)),
    }
}
