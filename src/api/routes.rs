// src/api/routes.rs
use actix_web::{error, web, HttpRequest, HttpResponse};
use serde_json::json;
use super::handlers;

/// Rejects bodies that do not deserialize with the same `{"error": ...}`
/// shape the handlers use.
fn json_error_handler(err: error::JsonPayloadError, _req: &HttpRequest) -> actix_web::Error {
    let response = HttpResponse::BadRequest().json(json!({ "error": err.to_string() }));
    error::InternalError::from_response(err, response).into()
}

pub fn configure_routes(cfg: &mut web::ServiceConfig) {
    cfg.service(
        web::scope("/api/v1")
            .app_data(web::JsonConfig::default().error_handler(json_error_handler))
            .route("/health", web::get().to(handlers::health_check))
            .service(
                web::scope("/users")
                    .route("/register", web::post().to(handlers::register))
                    .route("/login", web::post().to(handlers::login))
            )
            .service(
                web::scope("/quizzes")
                    .route("", web::get().to(handlers::list_quizzes))
                    .route("", web::post().to(handlers::create_quiz))
                    .route("/{index}", web::get().to(handlers::get_quiz))
                    .route("/{index}/attempts", web::post().to(handlers::submit_attempt))
            )
    );
}
