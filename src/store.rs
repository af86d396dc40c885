// src/store.rs

use tokio::sync::RwLock;

use crate::builder::QuizDraft;
use crate::errors::{QuizError, Result};
use crate::models::Quiz;

/// The ordered collection that owns every saved quiz.
///
/// Quizzes are addressed only by their position in the collection.
pub trait QuizStore: Send + Sync {
    /// Returns every quiz in insertion order.
    fn load(&self) -> impl std::future::Future<Output = Result<Vec<Quiz>>> + Send;

    /// Adds a quiz at the end of the collection.
    fn append(&self, quiz: Quiz) -> impl std::future::Future<Output = Result<()>> + Send;

    /// Fetches the quiz at `index`.
    fn get(&self, index: usize) -> impl std::future::Future<Output = Result<Quiz>> + Send {
        async move {
            self.load()
                .await?
                .into_iter()
                .nth(index)
                .ok_or(QuizError::QuizNotFound(index))
        }
    }
}

/// Validates `draft` and appends the resulting quiz. Nothing is stored when
/// validation fails.
pub async fn publish<S: QuizStore>(store: &S, draft: &QuizDraft) -> Result<Quiz> {
    let quiz = draft.build()?;
    store.append(quiz.clone()).await?;
    log::info!(
        "Saved quiz '{}' with {} question(s) by {}",
        quiz.title(),
        quiz.questions().len(),
        quiz.creator().unwrap_or("anonymous")
    );
    Ok(quiz)
}

/// A store that lives only as long as the process.
#[derive(Default)]
pub struct MemoryQuizStore {
    quizzes: RwLock<Vec<Quiz>>,
}

impl MemoryQuizStore {
    pub fn new() -> Self {
        Self::default()
    }
}

impl QuizStore for MemoryQuizStore {
    async fn load(&self) -> Result<Vec<Quiz>> {
        Ok(self.quizzes.read().await.clone())
    }

    async fn append(&self, quiz: Quiz) -> Result<()> {
        self.quizzes.write().await.push(quiz);
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::builder::QuestionInput;

    fn draft(title: &str, questions: Vec<QuestionInput>) -> QuizDraft {
        QuizDraft {
            title: title.to_string(),
            questions,
            creator: Some("alice".to_string()),
        }
    }

    #[tokio::test]
    async fn test_publish_appends_in_order() {
        let store = MemoryQuizStore::new();
        publish(&store, &draft("First", vec![QuestionInput::text("Q1", "A1")])).await.unwrap();
        publish(&store, &draft("Second", vec![QuestionInput::text("Q2", "A2")])).await.unwrap();

        let quizzes = store.load().await.unwrap();
        assert_eq!(quizzes.len(), 2);
        assert_eq!(quizzes[0].title(), "First");
        assert_eq!(store.get(1).await.unwrap().title(), "Second");
    }

    #[tokio::test]
    async fn test_publish_rejected_draft_is_not_stored() {
        let store = MemoryQuizStore::new();
        let err = publish(&store, &draft("Geo", vec![QuestionInput::text("Q", "  ")]))
            .await
            .unwrap_err();

        assert_eq!(err.reason(), Some("no valid questions"));
        assert!(store.load().await.unwrap().is_empty());
    }

    #[tokio::test]
    async fn test_get_missing_index() {
        let store = MemoryQuizStore::new();
        assert!(matches!(store.get(0).await, Err(QuizError::QuizNotFound(0))));
    }
}
