// src/models.rs
use serde::{Deserialize, Serialize};
use std::fmt;

use crate::errors::{QuizError, Result};

/// A single prompt together with the rule used to grade it.
///
/// Values are produced by [`crate::builder::build_question`], which enforces
/// that prompts and answers are non-empty and that a choice question has at
/// least two options with exactly one of them correct.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(tag = "type", rename_all = "snake_case")]
pub enum Question {
    Text {
        prompt: String,
        correct_answer: String,
    },
    #[serde(rename = "mc")]
    Choice {
        prompt: String,
        options: Vec<String>,
        correct_answer: String,
    },
}

impl Question {
    pub fn prompt(&self) -> &str {
        match self {
            Question::Text { prompt, .. } | Question::Choice { prompt, .. } => prompt,
        }
    }

    pub fn correct_answer(&self) -> &str {
        match self {
            Question::Text { correct_answer, .. } | Question::Choice { correct_answer, .. } => {
                correct_answer
            }
        }
    }

    /// Checks the shape rules a stored question must already satisfy.
    fn check(&self) -> Result<()> {
        if self.prompt().trim().is_empty() {
            return Err(QuizError::invalid("missing question text"));
        }
        match self {
            Question::Text { correct_answer, .. } => {
                if correct_answer.trim().is_empty() {
                    return Err(QuizError::invalid("missing answer"));
                }
            }
            Question::Choice { options, correct_answer, .. } => {
                if options.len() < 2 || options.iter().any(|o| o.trim().is_empty()) {
                    return Err(QuizError::invalid("need at least two options"));
                }
                if !options.contains(correct_answer) {
                    return Err(QuizError::invalid("no option marked correct"));
                }
            }
        }
        Ok(())
    }
}

/// An immutable, titled collection of questions attributed to a creator.
///
/// Deserialized quizzes are re-checked, so a stored record that breaks the
/// authoring rules is rejected instead of reaching the grader.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(try_from = "QuizRecord")]
pub struct Quiz {
    title: String,
    questions: Vec<Question>,
    creator: Option<String>,
}

#[derive(Deserialize)]
struct QuizRecord {
    title: String,
    questions: Vec<Question>,
    #[serde(default)]
    creator: Option<String>,
}

impl TryFrom<QuizRecord> for Quiz {
    type Error = QuizError;

    fn try_from(record: QuizRecord) -> Result<Self> {
        if record.title.trim().is_empty() {
            return Err(QuizError::invalid("missing title"));
        }
        if record.questions.is_empty() {
            return Err(QuizError::invalid("no valid questions"));
        }
        for question in &record.questions {
            question.check()?;
        }
        Ok(Quiz::new(record.title, record.questions, record.creator))
    }
}

impl Quiz {
    /// Callers outside the crate go through `build_quiz`.
    pub(crate) fn new(title: String, questions: Vec<Question>, creator: Option<String>) -> Self {
        Self {
            title,
            questions,
            creator,
        }
    }

    pub fn title(&self) -> &str {
        &self.title
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn creator(&self) -> Option<&str> {
        self.creator.as_deref()
    }

    /// The view handed to someone taking the quiz, with every answer stripped.
    pub fn sheet(&self) -> QuizSheet {
        QuizSheet {
            title: self.title.clone(),
            creator: self.creator.clone(),
            questions: self
                .questions
                .iter()
                .enumerate()
                .map(|(index, question)| SheetQuestion {
                    number: index + 1,
                    prompt: question.prompt().to_string(),
                    options: match question {
                        Question::Text { .. } => None,
                        Question::Choice { options, .. } => Some(options.clone()),
                    },
                })
                .collect(),
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizSheet {
    pub title: String,
    pub creator: Option<String>,
    pub questions: Vec<SheetQuestion>,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct SheetQuestion {
    /// 1-based position, as shown to the quiz taker.
    pub number: usize,
    pub prompt: String,
    #[serde(skip_serializing_if = "Option::is_none", default)]
    pub options: Option<Vec<String>>,
}

/// Entry in the list of quizzes a user can pick from.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct QuizSummary {
    pub index: usize,
    pub title: String,
    pub creator: Option<String>,
    pub question_count: usize,
}

impl QuizSummary {
    pub fn list(quizzes: &[Quiz]) -> Vec<QuizSummary> {
        quizzes
            .iter()
            .enumerate()
            .map(|(index, quiz)| QuizSummary {
                index,
                title: quiz.title.clone(),
                creator: quiz.creator.clone(),
                question_count: quiz.questions.len(),
            })
            .collect()
    }
}

/// What the quiz taker entered for one question.
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
#[serde(rename_all = "snake_case")]
pub enum Answer {
    /// Free text typed into an input field.
    Text(String),
    /// The option picked from a choice group.
    Selected(String),
    /// Nothing entered or selected.
    Unanswered,
}

impl Answer {
    pub fn value(&self) -> Option<&str> {
        match self {
            Answer::Text(value) | Answer::Selected(value) => Some(value),
            Answer::Unanswered => None,
        }
    }
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct AnswerSubmission {
    pub question_index: usize,
    pub answer: Answer,
}

#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, Eq)]
pub struct GradeResult {
    pub per_question: Vec<bool>,
    pub score: usize,
    pub total: usize,
}

impl fmt::Display for GradeResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "You scored {} out of {}.", self.score, self.total)
    }
}
