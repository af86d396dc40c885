// src/database.rs
use crate::errors::{QuizError, Result};
use crate::models::Quiz;
use crate::store::QuizStore;
use sqlx::{sqlite::SqlitePoolOptions, Row, SqlitePool};
use std::path::PathBuf;

/// Opens the SQLite database named by `database_url` and applies migrations.
///
/// `sqlite::memory:` gives a private in-memory database held by a single
/// connection that is never recycled.
pub async fn init_db(database_url: &str) -> Result<SqlitePool> {
    let pool = if database_url.contains(":memory:") {
        SqlitePoolOptions::new()
            .max_connections(1)
            .idle_timeout(None)
            .max_lifetime(None)
            .connect(database_url)
            .await?
    } else {
        let db_path = get_db_path(database_url)?;

        // Create parent directory BEFORE attempting to connect
        if let Some(parent) = db_path.parent().filter(|p| !p.as_os_str().is_empty()) {
            std::fs::create_dir_all(parent)?;
            log::info!("Created database directory: {}", parent.display());
        }

        let absolute_path = if db_path.is_relative() {
            std::env::current_dir()?.join(&db_path)
        } else {
            db_path
        };

        let db_url = format!("sqlite://{}?mode=rwc", absolute_path.display());
        log::info!("Connecting to: {}", db_url);

        SqlitePoolOptions::new()
            .max_connections(5)
            .connect(&db_url)
            .await?
    };

    sqlx::migrate!("./migrations").run(&pool).await?;
    log::info!("Database migrations completed");

    Ok(pool)
}

fn get_db_path(database_url: &str) -> Result<PathBuf> {
    let db_path_str = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))
        .ok_or_else(|| QuizError::Config("DATABASE_URL must start with 'sqlite:'".into()))?;

    if db_path_str.is_empty() {
        return Err(QuizError::Config("DATABASE_URL has no file path".into()));
    }

    Ok(PathBuf::from(db_path_str))
}

/// Quiz collection persisted in the `quizzes` table, one JSON document per row.
#[derive(Clone)]
pub struct SqliteQuizStore {
    pool: SqlitePool,
}

impl SqliteQuizStore {
    pub fn new(pool: SqlitePool) -> Self {
        Self { pool }
    }

    pub fn pool(&self) -> &SqlitePool {
        &self.pool
    }
}

impl QuizStore for SqliteQuizStore {
    async fn load(&self) -> Result<Vec<Quiz>> {
        let rows = sqlx::query("SELECT body FROM quizzes ORDER BY id ASC")
            .fetch_all(&self.pool)
            .await?;

        rows.into_iter()
            .map(|row| {
                let body: String = row.get(0);
                serde_json::from_str::<Quiz>(&body).map_err(QuizError::from)
            })
            .collect()
    }

    async fn append(&self, quiz: Quiz) -> Result<()> {
        let body = serde_json::to_string(&quiz)?;

        sqlx::query(
            r#"
            INSERT INTO quizzes (title, creator, body, created_at)
            VALUES (?, ?, ?, ?)
            "#,
        )
        .bind(quiz.title())
        .bind(quiz.creator())
        .bind(&body)
        .bind(chrono::Utc::now().to_rfc3339())
        .execute(&self.pool)
        .await?;

        Ok(())
    }

    async fn get(&self, index: usize) -> Result<Quiz> {
        let offset = i64::try_from(index).map_err(|_| QuizError::QuizNotFound(index))?;

        let row = sqlx::query("SELECT body FROM quizzes ORDER BY id ASC LIMIT 1 OFFSET ?")
            .bind(offset)
            .fetch_optional(&self.pool)
            .await?
            .ok_or(QuizError::QuizNotFound(index))?;

        let body: String = row.get(0);
        Ok(serde_json::from_str(&body)?)
    }
}

/// Creates an account. Passwords are stored as given.
pub async fn register_user(pool: &SqlitePool, username: &str, password: &str) -> Result<String> {
    let username = username.trim();
    if username.is_empty() {
        return Err(QuizError::invalid("missing username"));
    }
    if password.is_empty() {
        return Err(QuizError::invalid("missing password"));
    }

    let inserted = sqlx::query(
        r#"
        INSERT INTO users (username, password, created_at)
        VALUES (?, ?, ?)
        "#,
    )
    .bind(username)
    .bind(password)
    .bind(chrono::Utc::now().to_rfc3339())
    .execute(pool)
    .await;

    match inserted {
        Ok(_) => {
            log::info!("Registered user '{}'", username);
            Ok(username.to_string())
        }
        Err(sqlx::Error::Database(e)) if e.is_unique_violation() => {
            Err(QuizError::UsernameTaken(username.to_string()))
        }
        Err(e) => Err(e.into()),
    }
}

/// Checks a username/password pair and returns the canonical username.
pub async fn authenticate(pool: &SqlitePool, username: &str, password: &str) -> Result<String> {
    let username = username.trim();

    let stored: Option<String> = sqlx::query("SELECT password FROM users WHERE username = ?")
        .bind(username)
        .fetch_optional(pool)
        .await?
        .map(|row| row.get(0));

    match stored {
        Some(stored) if stored == password => Ok(username.to_string()),
        _ => {
            log::warn!("Failed login attempt for '{}'", username);
            Err(QuizError::InvalidCredentials)
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::{build_quiz, QuestionInput};

    #[test]
    fn test_get_db_path() {
        assert_eq!(get_db_path("sqlite:data/quiz.db").unwrap(), PathBuf::from("data/quiz.db"));
        assert_eq!(get_db_path("sqlite:///tmp/quiz.db").unwrap(), PathBuf::from("/tmp/quiz.db"));
        assert!(matches!(get_db_path("postgres://x"), Err(QuizError::Config(_))));
        assert!(matches!(get_db_path("sqlite:"), Err(QuizError::Config(_))));
    }

    #[tokio::test]
    async fn test_sqlite_store_round_trip() {
        let store = SqliteQuizStore::new(init_db("sqlite::memory:").await.unwrap());
        let quiz = build_quiz(
            "Colors",
            &[
                QuestionInput::choice("Pick a color", &[("Red", false), ("Blue", true), ("Green", false)]),
                QuestionInput::text("Sky at noon?", "  Blue  "),
            ],
            None,
        )
        .unwrap();

        store.append(quiz.clone()).await.unwrap();
        let loaded = store.load().await.unwrap();

        assert_eq!(loaded, vec![quiz]);
        assert_eq!(loaded[0].creator(), None);
    }

    #[tokio::test]
    async fn test_sqlite_get_reads_one_row() {
        let store = SqliteQuizStore::new(init_db("sqlite::memory:").await.unwrap());
        for title in ["First", "Second"] {
            let quiz = build_quiz(title, &[QuestionInput::text("Q", "A")], None).unwrap();
            store.append(quiz).await.unwrap();
        }

        // A corrupt row elsewhere in the table does not affect lookups by index.
        sqlx::query("INSERT INTO quizzes (title, creator, body, created_at) VALUES ('Bad', NULL, '{}', '')")
            .execute(store.pool())
            .await
            .unwrap();

        assert_eq!(store.get(1).await.unwrap().title(), "Second");
        assert!(matches!(store.get(2).await, Err(QuizError::JsonParse(_))));
        assert!(matches!(store.get(3).await, Err(QuizError::QuizNotFound(3))));
        assert!(store.load().await.is_err());
    }

    #[tokio::test]
    async fn test_register_and_authenticate() {
        let pool = init_db("sqlite::memory:").await.unwrap();

        assert_eq!(register_user(&pool, " alice ", "secret").await.unwrap(), "alice");
        assert!(matches!(
            register_user(&pool, "alice", "other").await,
            Err(QuizError::UsernameTaken(_))
        ));

        assert_eq!(authenticate(&pool, "alice", "secret").await.unwrap(), "alice");
        assert!(matches!(
            authenticate(&pool, "alice", "Secret").await,
            Err(QuizError::InvalidCredentials)
        ));
        assert!(matches!(
            authenticate(&pool, "bob", "secret").await,
            Err(QuizError::InvalidCredentials)
        ));
    }

    #[tokio::test]
    async fn test_register_requires_fields() {
        let pool = init_db("sqlite::memory:").await.unwrap();

        let err = register_user(&pool, "  ", "secret").await.unwrap_err();
        assert_eq!(err.reason(), Some("missing username"));
        let err = register_user(&pool, "bob", "").await.unwrap_err();
        assert_eq!(err.reason(), Some("missing password"));
    }
}
