use thiserror::Error;

#[derive(Error, Debug)]
pub enum QuizError {
    #[error("Invalid input: {0}")]
    InvalidInput(String),

    #[error("Precondition violated: {0}")]
    PreconditionViolation(String),

    #[error("Quiz {0} not found")]
    QuizNotFound(usize),

    #[error("Username '{0}' already exists")]
    UsernameTaken(String),

    #[error("Invalid username or password")]
    InvalidCredentials,

    #[error("Failed to read file: {0}")]
    FileRead(#[from] std::io::Error),

    #[error("Failed to parse TOML seed file: {0}")]
    TomlParse(#[from] toml::de::Error),

    #[error("Failed to encode or decode JSON: {0}")]
    JsonParse(#[from] serde_json::Error),

    #[error("Database error: {0}")]
    Database(#[from] sqlx::Error),

    #[error("Database migration failed: {0}")]
    Migration(#[from] sqlx::migrate::MigrateError),

    #[error("Configuration error: {0}")]
    Config(String),
}

impl QuizError {
    pub fn invalid(reason: &str) -> Self {
        QuizError::InvalidInput(reason.to_string())
    }

    /// The bare reason carried by validation errors, without the display prefix.
    pub fn reason(&self) -> Option<&str> {
        match self {
            QuizError::InvalidInput(reason) | QuizError::PreconditionViolation(reason) => {
                Some(reason)
            }
            _ => None,
        }
    }
}

pub type Result<T> = std::result::Result<T, QuizError>;
