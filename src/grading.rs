// src/grading.rs
use crate::errors::{QuizError, Result};
use crate::models::{Answer, AnswerSubmission, GradeResult, Question, Quiz};

/// Trims surrounding whitespace, then lowercases.
pub fn normalize(value: &str) -> String {
    value.trim().to_lowercase()
}

fn matches(given: &str, expected: &str) -> bool {
    normalize(given) == normalize(expected)
}

/// Grades `answers` against `quiz`. Answers are aligned with the quiz's
/// questions by position; a missing answer counts as wrong.
pub fn grade(quiz: &Quiz, answers: &[Answer]) -> Result<GradeResult> {
    let questions = quiz.questions();
    if answers.len() != questions.len() {
        return Err(QuizError::PreconditionViolation(
            "submission count mismatch".to_string(),
        ));
    }

    let per_question: Vec<bool> = questions
        .iter()
        .zip(answers)
        .map(|(question, answer)| match question {
            Question::Text { correct_answer, .. } => {
                answer.value().is_some_and(|value| matches(value, correct_answer))
            }
            Question::Choice { correct_answer, .. } => {
                answer.value().is_some_and(|selected| matches(selected, correct_answer))
            }
        })
        .collect();

    let score = per_question.iter().filter(|correct| **correct).count();
    log::debug!("Graded '{}': {}/{}", quiz.title(), score, questions.len());

    Ok(GradeResult {
        total: per_question.len(),
        per_question,
        score,
    })
}

/// Lays index-keyed submissions out in question order.
///
/// Questions without a submission are `Unanswered`.
pub fn align_submissions(total: usize, submissions: Vec<AnswerSubmission>) -> Result<Vec<Answer>> {
    let mut slots: Vec<Option<Answer>> = vec![None; total];

    for submission in submissions {
        let index = submission.question_index;
        let slot = slots.get_mut(index).ok_or_else(|| {
            QuizError::PreconditionViolation(format!(
                "question index {} out of range for {} questions",
                index, total
            ))
        })?;
        if slot.is_some() {
            return Err(QuizError::PreconditionViolation(format!(
                "question index {} answered twice",
                index
            )));
        }
        *slot = Some(submission.answer);
    }

    Ok(slots
        .into_iter()
        .map(|slot| slot.unwrap_or(Answer::Unanswered))
        .collect())
}
