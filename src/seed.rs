// src/seed.rs
use serde::Deserialize;
use std::path::Path;

use crate::builder::QuizDraft;
use crate::errors::Result;
use crate::store::{publish, QuizStore};

/// Top-level shape of a seed file: a list of `[[quizzes]]` tables.
#[derive(Deserialize, Debug)]
pub struct SeedFile {
    #[serde(default)]
    pub quizzes: Vec<QuizDraft>,
}

pub fn parse_seed(contents: &str) -> Result<Vec<QuizDraft>> {
    let seed: SeedFile = toml::from_str(contents)?;
    Ok(seed.quizzes)
}

pub fn load_seed_file(path: &Path) -> Result<Vec<QuizDraft>> {
    let contents = std::fs::read_to_string(path)?;
    parse_seed(&contents)
}

/// Publishes `drafts` into an empty store and returns how many were saved.
/// A store that already holds quizzes is left untouched.
pub async fn seed_store<S: QuizStore>(store: &S, drafts: &[QuizDraft]) -> Result<usize> {
    if !store.load().await?.is_empty() {
        log::info!("Quiz collection already populated, skipping seed");
        return Ok(0);
    }

    let mut saved = 0;
    for draft in drafts {
        match publish(store, draft).await {
            Ok(_) => saved += 1,
            Err(e) if e.reason().is_some() => {
                log::warn!("Skipping seed quiz '{}': {}", draft.title, e);
            }
            Err(e) => return Err(e),
        }
    }

    Ok(saved)
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::Question;
    use crate::store::MemoryQuizStore;

    const SEED: &str = r#"
[[quizzes]]
title = "Geo"
creator = "alice"

[[quizzes.questions]]
type = "text"
prompt = "Capital of France?"
answer = "Paris"

[[quizzes.questions]]
type = "mc"
prompt = "Pick a color"
options = [
    { text = "Red" },
    { text = "Blue", correct = true },
]

[[quizzes]]
title = "   "

[[quizzes.questions]]
type = "text"
prompt = "Orphan"
answer = "Skipped"
"#;

    #[test]
    fn test_parse_seed() {
        let drafts = parse_seed(SEED).unwrap();
        assert_eq!(drafts.len(), 2);
        assert_eq!(drafts[0].creator.as_deref(), Some("alice"));

        let quiz = drafts[0].build().unwrap();
        assert_eq!(
            quiz.questions()[1],
            Question::Choice {
                prompt: "Pick a color".to_string(),
                options: vec!["Red".to_string(), "Blue".to_string()],
                correct_answer: "Blue".to_string(),
            }
        );
    }

    #[test]
    fn test_parse_seed_rejects_bad_toml() {
        assert!(parse_seed("[[quizzes]\ntitle = ").is_err());
    }

    #[tokio::test]
    async fn test_seed_store_skips_invalid_and_only_runs_once() {
        let store = MemoryQuizStore::new();
        let drafts = parse_seed(SEED).unwrap();

        assert_eq!(seed_store(&store, &drafts).await.unwrap(), 1);
        assert_eq!(seed_store(&store, &drafts).await.unwrap(), 0);
        assert_eq!(store.load().await.unwrap().len(), 1);
    }
}
