//! A named, ordered collection of questions. On disk only the questions are
//! stored; the name comes from the file name.
use super::Question;
use crate::errors::ValidationError;

#[derive(Clone, Debug, PartialEq, Eq)]
pub struct QuestionSet {
    pub name: String,
    pub questions: Vec<Question>,
}

impl QuestionSet {
    pub fn new(name: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            name: name.into(),
            questions,
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}

/// Checks a set is ready to be saved. Duplicate question text is allowed.
pub fn validate_question_set(name: &str, questions: &[Question]) -> Result<(), ValidationError> {
    if name.trim().is_empty() {
        return Err(ValidationError::EmptyName);
    }
    if questions.is_empty() {
        return Err(ValidationError::EmptySet);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample_question() -> Question {
        Question {
            text: "2+2=?".to_string(),
            options: ["3", "4", "5", "6"].map(str::to_string),
            correct_answer: "4".to_string(),
        }
    }

    #[test]
    fn test_valid_set() {
        assert_eq!(validate_question_set("Maths", &[sample_question()]), Ok(()));
    }

    #[test]
    fn test_blank_name_rejected() {
        assert_eq!(
            validate_question_set("  ", &[sample_question()]),
            Err(ValidationError::EmptyName)
        );
    }

    #[test]
    fn test_name_checked_before_questions() {
        assert_eq!(validate_question_set("", &[]), Err(ValidationError::EmptyName));
    }

    #[test]
    fn test_empty_set_rejected() {
        assert_eq!(validate_question_set("Maths", &[]), Err(ValidationError::EmptySet));
    }

    #[test]
    fn test_duplicate_questions_allowed() {
        let questions = vec![sample_question(), sample_question()];
        assert!(validate_question_set("Maths", &questions).is_ok());

        let set = QuestionSet::new("Maths", questions);
        assert_eq!(set.len(), 2);
        assert!(!set.is_empty());
    }
}
