use actix_cors::Cors;
use actix_web::{middleware, web, App, HttpServer};
use quizbook::api::{configure_routes, AppState};
use quizbook::{banner, config, database, seed};

#[actix_web::main]
async fn main() -> std::io::Result<()> {
    banner::print_banner();

    if let Err(e) = dotenvy::dotenv() {
        eprintln!("⚠️  Warning: Could not load .env file: {}", e);
    }

    env_logger::init_from_env(env_logger::Env::new().default_filter_or("info"));

    let app_config = config::AppConfig::from_env().map_err(std::io::Error::other)?;

    let pool = database::init_db(&app_config.database_url)
        .await
        .map_err(std::io::Error::other)?;
    let state = AppState::new(app_config.clone(), pool);

    if let Some(path) = &app_config.seed_file {
        let drafts = seed::load_seed_file(path).map_err(std::io::Error::other)?;
        let saved = seed::seed_store(&state.store, &drafts)
            .await
            .map_err(std::io::Error::other)?;
        log::info!("Seeded {} quiz(zes) from {}", saved, path.display());
    }

    println!("🚀 Starting server on http://{}:{}", app_config.host, app_config.port);

    HttpServer::new(move || {
        let cors = Cors::permissive();

        App::new()
            .app_data(web::Data::new(state.clone()))
            .wrap(cors)
            .wrap(middleware::Logger::default())
            .configure(configure_routes)
    })
    .bind((app_config.host.as_str(), app_config.port))?
    .run()
    .await
}
