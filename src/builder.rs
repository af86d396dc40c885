// src/builder.rs
use serde::{Deserialize, Serialize};

use crate::errors::{QuizError, Result};
use crate::models::{Question, Quiz};

/// Raw authoring input for one question block, before validation.
#[derive(Deserialize, Serialize, Debug, Clone)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum QuestionInput {
    Text {
        #[serde(default)]
        prompt: String,
        #[serde(default)]
        answer: String,
    },
    #[serde(rename = "mc")]
    Choice {
        #[serde(default)]
        prompt: String,
        #[serde(default)]
        options: Vec<ChoiceInput>,
    },
}

#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct ChoiceInput {
    #[serde(default)]
    pub text: String,
    #[serde(default)]
    pub correct: bool,
}

impl ChoiceInput {
    pub fn new(text: &str, correct: bool) -> Self {
        Self {
            text: text.to_string(),
            correct,
        }
    }
}

impl QuestionInput {
    pub fn text(prompt: &str, answer: &str) -> Self {
        QuestionInput::Text {
            prompt: prompt.to_string(),
            answer: answer.to_string(),
        }
    }

    pub fn choice(prompt: &str, options: &[(&str, bool)]) -> Self {
        QuestionInput::Choice {
            prompt: prompt.to_string(),
            options: options
                .iter()
                .map(|(text, correct)| ChoiceInput::new(text, *correct))
                .collect(),
        }
    }
}

/// A complete quiz as submitted by an author.
#[derive(Deserialize, Serialize, Debug, Clone)]
pub struct QuizDraft {
    #[serde(default)]
    pub title: String,
    #[serde(default)]
    pub questions: Vec<QuestionInput>,
    #[serde(default)]
    pub creator: Option<String>,
}

impl QuizDraft {
    pub fn build(&self) -> Result<Quiz> {
        build_quiz(&self.title, &self.questions, self.creator.as_deref())
    }
}

/// Validates one question block and produces a trimmed `Question`.
pub fn build_question(input: &QuestionInput) -> Result<Question> {
    match input {
        QuestionInput::Text { prompt, answer } => {
            let prompt = required(prompt, "missing question text")?;
            let answer = required(answer, "missing answer")?;
            Ok(Question::Text {
                prompt,
                correct_answer: answer,
            })
        }
        QuestionInput::Choice { prompt, options } => {
            let prompt = required(prompt, "missing question text")?;

            let options: Vec<(String, bool)> = options
                .iter()
                .map(|option| (option.text.trim().to_string(), option.correct))
                .filter(|(text, _)| !text.is_empty())
                .collect();

            if options.len() < 2 {
                return Err(QuizError::invalid("need at least two options"));
            }

            let mut flagged = options.iter().filter(|(_, correct)| *correct);
            let correct_answer = match (flagged.next(), flagged.next()) {
                (Some((text, _)), None) => text.clone(),
                _ => return Err(QuizError::invalid("no option marked correct")),
            };

            Ok(Question::Choice {
                prompt,
                options: options.into_iter().map(|(text, _)| text).collect(),
                correct_answer,
            })
        }
    }
}

/// Builds a quiz, skipping malformed question blocks.
///
/// Fails only when the title is blank or no question survives validation.
pub fn build_quiz(title: &str, inputs: &[QuestionInput], creator: Option<&str>) -> Result<Quiz> {
    let title = required(title, "missing title")?;

    let questions: Vec<Question> = inputs
        .iter()
        .enumerate()
        .filter_map(|(index, input)| match build_question(input) {
            Ok(question) => Some(question),
            Err(e) => {
                log::debug!("Skipping question block {} of '{}': {}", index + 1, title, e);
                None
            }
        })
        .collect();

    if questions.is_empty() {
        return Err(QuizError::invalid("no valid questions"));
    }

    Ok(Quiz::new(title, questions, creator.map(str::to_string)))
}

fn required(value: &str, reason: &str) -> Result<String> {
    let trimmed = value.trim();
    if trimmed.is_empty() {
        Err(QuizError::invalid(reason))
    } else {
        Ok(trimmed.to_string())
    }
}
