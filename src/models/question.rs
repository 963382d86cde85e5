//! A single multiple-choice question with exactly four options.
use crate::errors::ValidationError;
use serde::{Deserialize, Serialize};
use std::collections::HashSet;

pub const OPTION_COUNT: usize = 4;

#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    pub text: String,
    pub options: [String; OPTION_COUNT],
    pub correct_answer: String,
}

impl Question {
    pub fn is_correct(&self, choice: &str) -> bool {
        self.correct_answer == choice
    }
}

/// Builds a question from raw form input.
///
/// Rules are checked in order and the first failure is returned:
/// text, then options (non-empty and pairwise distinct), then the correct answer.
/// All fields are trimmed in the returned question.
pub fn validate_question(
    text: &str,
    options: &[String; OPTION_COUNT],
    correct_answer: &str,
) -> Result<Question, ValidationError> {
    let text = text.trim();
    if text.is_empty() {
        return Err(ValidationError::EmptyText);
    }

    let options = options.clone().map(|option| option.trim().to_string());
    let distinct: HashSet<&str> = options.iter().map(String::as_str).collect();
    if options.iter().any(|option| option.is_empty()) || distinct.len() < OPTION_COUNT {
        return Err(ValidationError::DuplicateOrEmptyOption);
    }

    let correct_answer = correct_answer.trim();
    if correct_answer.is_empty() || !options.iter().any(|option| option == correct_answer) {
        return Err(ValidationError::InvalidCorrectAnswer);
    }

    Ok(Question {
        text: text.to_string(),
        options,
        correct_answer: correct_answer.to_string(),
    })
}

/// Non-empty options in form order, offered in the correct answer dropdown.
pub fn correct_answer_choices(options: &[String; OPTION_COUNT]) -> Vec<String> {
    options
        .iter()
        .map(|option| option.trim())
        .filter(|option| !option.is_empty())
        .map(str::to_string)
        .collect()
}
