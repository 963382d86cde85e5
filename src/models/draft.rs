//! Question set under construction in the authoring window.
use super::question::{OPTION_COUNT, validate_question};
use super::question_set::validate_question_set;
use super::{Question, QuestionSet};
use crate::errors::ValidationError;

const SUMMARY_LEN: usize = 50;

#[derive(Clone, Debug, Default)]
pub struct QuestionSetDraft {
    questions: Vec<Question>,
}

impl QuestionSetDraft {
    pub fn new() -> Self {
        Self::default()
    }

    /// Validates the form input and appends it. On error the draft is unchanged.
    pub fn add_question(
        &mut self,
        text: &str,
        options: &[String; OPTION_COUNT],
        correct_answer: &str,
    ) -> Result<&Question, ValidationError> {
        let question = validate_question(text, options, correct_answer)?;
        self.questions.push(question);
        Ok(&self.questions[self.questions.len() - 1])
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    /// Short labels for the "Added Questions" list.
    pub fn summaries(&self) -> Vec<String> {
        self.questions
            .iter()
            .map(|question| {
                let head: String = question.text.chars().take(SUMMARY_LEN).collect();
                format!("{}...", head)
            })
            .collect()
    }

    /// Turns the draft into a named set, if the name and contents are acceptable.
    pub fn finish(&self, name: &str) -> Result<QuestionSet, ValidationError> {
        validate_question_set(name, &self.questions)?;
        Ok(QuestionSet::new(name.trim(), self.questions.clone()))
    }
}
