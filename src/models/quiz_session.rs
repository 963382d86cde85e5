//! Quiz session: a shuffled pass over one question set.
//! Tracks the current position and score, and produces the final result.

use super::{Question, QuizResult};
use crate::errors::SessionError;
use rand::Rng;
use rand::seq::SliceRandom;

#[derive(Clone, Copy, Debug, PartialEq, Eq)]
pub enum SessionState {
    InProgress,
    Complete,
}

/// What happened to a submitted answer.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct AnswerOutcome {
    pub correct: bool,
    pub correct_answer: String,
}

/// One attempt at a question set.
/// The order is shuffled once at the start and never changes afterwards.
#[derive(Clone, Debug)]
pub struct QuizSession {
    questions: Vec<Question>,
    current_index: usize,
    score: usize,
}

impl QuizSession {
    /// Starts a session over a shuffled copy of `questions`.
    pub fn start(questions: &[Question]) -> Result<Self, SessionError> {
        Self::start_with_rng(questions, &mut rand::thread_rng())
    }

    /// Same as [`QuizSession::start`] with a caller-provided random source.
    pub fn start_with_rng<R: Rng + ?Sized>(
        questions: &[Question],
        rng: &mut R,
    ) -> Result<Self, SessionError> {
        if questions.is_empty() {
            return Err(SessionError::EmptySet);
        }

        let mut questions = questions.to_vec();
        questions.shuffle(rng);
        log::debug!("Started quiz session with {} questions", questions.len());

        Ok(Self {
            questions,
            current_index: 0,
            score: 0,
        })
    }

    pub fn current_question(&self) -> Result<&Question, SessionError> {
        self.questions
            .get(self.current_index)
            .ok_or(SessionError::SessionComplete)
    }

    /// Scores `choice` against the current question and moves to the next one.
    /// An empty choice is rejected and the session stays where it is.
    pub fn submit_answer(&mut self, choice: &str) -> Result<AnswerOutcome, SessionError> {
        if choice.trim().is_empty() {
            return Err(SessionError::NoSelection);
        }

        let question = self.current_question()?;
        let outcome = AnswerOutcome {
            correct: question.is_correct(choice),
            correct_answer: question.correct_answer.clone(),
        };

        if outcome.correct {
            self.score += 1;
        }
        self.current_index += 1;
        log::debug!(
            "Answer {} ({}/{} answered, score {})",
            if outcome.correct { "correct" } else { "wrong" },
            self.current_index,
            self.questions.len(),
            self.score
        );

        Ok(outcome)
    }

    pub fn is_complete(&self) -> bool {
        self.current_index == self.questions.len()
    }

    pub fn state(&self) -> SessionState {
        if self.is_complete() {
            SessionState::Complete
        } else {
            SessionState::InProgress
        }
    }

    pub fn result(&self) -> Result<QuizResult, SessionError> {
        if !self.is_complete() {
            return Err(SessionError::SessionIncomplete);
        }
        Ok(QuizResult::new(self.score, self.questions.len()))
    }

    /// One-based position of the current question and the total, for
    /// "Question X of Y" labels.
    pub fn progress(&self) -> (usize, usize) {
        let total = self.questions.len();
        ((self.current_index + 1).min(total), total)
    }

    pub fn questions(&self) -> &[Question] {
        &self.questions
    }

    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn score(&self) -> usize {
        self.score
    }

    pub fn total(&self) -> usize {
        self.questions.len()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::PerformanceTier;
    use rand::SeedableRng;
    use rand::rngs::StdRng;

    fn question(text: &str, correct: &str) -> Question {
        Question {
            text: text.to_string(),
            options: ["A", "B", "C", "D"].map(str::to_string),
            correct_answer: correct.to_string(),
        }
    }

    fn numbered_questions(count: usize) -> Vec<Question> {
        (0..count).map(|i| question(&format!("Q{}", i), "A")).collect()
    }

    fn sorted_texts(questions: &[Question]) -> Vec<String> {
        let mut texts: Vec<String> = questions.iter().map(|q| q.text.clone()).collect();
        texts.sort();
        texts
    }

    #[test]
    fn test_start_empty_set_fails() {
        let result = QuizSession::start(&[]);
        assert_eq!(result.unwrap_err(), SessionError::EmptySet);
    }

    #[test]
    fn test_start_initial_state() {
        let questions = numbered_questions(3);
        let session = QuizSession::start(&questions).unwrap();

        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
        assert_eq!(session.total(), 3);
        assert_eq!(session.state(), SessionState::InProgress);
        assert_eq!(session.progress(), (1, 3));
    }

    #[test]
    fn test_shuffle_is_permutation() {
        let questions = numbered_questions(20);
        for seed in 0..10 {
            let mut rng = StdRng::seed_from_u64(seed);
            let session = QuizSession::start_with_rng(&questions, &mut rng).unwrap();
            assert_eq!(sorted_texts(session.questions()), sorted_texts(&questions));
        }
    }

    #[test]
    fn test_start_does_not_mutate_input() {
        let questions = numbered_questions(10);
        let before = questions.clone();
        let mut rng = StdRng::seed_from_u64(7);
        let _session = QuizSession::start_with_rng(&questions, &mut rng).unwrap();
        assert_eq!(questions, before);
    }

    #[test]
    fn test_same_seed_same_order() {
        let questions = numbered_questions(15);
        let a = QuizSession::start_with_rng(&questions, &mut StdRng::seed_from_u64(42)).unwrap();
        let b = QuizSession::start_with_rng(&questions, &mut StdRng::seed_from_u64(42)).unwrap();
        assert_eq!(a.questions(), b.questions());
    }

    #[test]
    fn test_shuffle_reaches_other_orders() {
        let questions = numbered_questions(6);
        let moved = (0..20).any(|seed| {
            let session =
                QuizSession::start_with_rng(&questions, &mut StdRng::seed_from_u64(seed)).unwrap();
            session.questions() != questions.as_slice()
        });
        assert!(moved);
    }

    #[test]
    fn test_empty_choice_does_not_advance() {
        let mut session = QuizSession::start(&numbered_questions(2)).unwrap();

        assert_eq!(session.submit_answer("").unwrap_err(), SessionError::NoSelection);
        assert_eq!(session.submit_answer("   ").unwrap_err(), SessionError::NoSelection);
        assert_eq!(session.current_index(), 0);
        assert_eq!(session.score(), 0);
    }

    #[test]
    fn test_wrong_answer_still_advances() {
        let mut session = QuizSession::start(&[question("Only", "B")]).unwrap();

        let outcome = session.submit_answer("C").unwrap();
        assert!(!outcome.correct);
        assert_eq!(outcome.correct_answer, "B");
        assert_eq!(session.score(), 0);
        assert!(session.is_complete());
    }

    #[test]
    fn test_answer_comparison_is_exact() {
        let mut session = QuizSession::start(&[question("Only", "B")]).unwrap();
        let outcome = session.submit_answer("b").unwrap();
        assert!(!outcome.correct);
    }

    #[test]
    fn test_len_submissions_complete_session() {
        let questions = numbered_questions(5);
        let mut session = QuizSession::start(&questions).unwrap();

        for i in 0..questions.len() {
            assert!(!session.is_complete());
            let choice = if i % 2 == 0 { "A" } else { "D" };
            session.submit_answer(choice).unwrap();
            assert_eq!(session.current_index(), i + 1);
        }

        assert!(session.is_complete());
        assert_eq!(session.state(), SessionState::Complete);
        assert_eq!(session.score(), 3);
        assert_eq!(session.progress(), (5, 5));
    }

    #[test]
    fn test_complete_session_rejects_more_answers() {
        let mut session = QuizSession::start(&numbered_questions(1)).unwrap();
        session.submit_answer("A").unwrap();

        assert_eq!(session.current_question().unwrap_err(), SessionError::SessionComplete);
        assert_eq!(session.submit_answer("A").unwrap_err(), SessionError::SessionComplete);
        assert_eq!(session.score(), 1);
        assert_eq!(session.current_index(), 1);
    }

    #[test]
    fn test_result_before_completion_fails() {
        let mut session = QuizSession::start(&numbered_questions(2)).unwrap();
        assert_eq!(session.result().unwrap_err(), SessionError::SessionIncomplete);

        session.submit_answer("A").unwrap();
        assert_eq!(session.result().unwrap_err(), SessionError::SessionIncomplete);
    }

    #[test]
    fn test_three_of_four() {
        let questions = vec![
            question("Q1", "A"),
            question("Q2", "A"),
            question("Q3", "A"),
            question("Q4", "B"),
        ];
        let mut session = QuizSession::start(&questions).unwrap();

        // Answer "A" to everything: only the question expecting "B" is missed.
        while !session.is_complete() {
            session.submit_answer("A").unwrap();
        }

        let result = session.result().unwrap();
        assert_eq!(result.score, 3);
        assert_eq!(result.total, 4);
        assert_eq!(result.percentage, 75.0);
        assert_eq!(result.percentage_label(), "75.00%");
    }

    #[test]
    fn test_all_correct_is_excellent() {
        let questions = vec![question("2+2=?", "C"), question("3+3=?", "D")];
        let mut session = QuizSession::start(&questions).unwrap();

        while let Ok(current) = session.current_question() {
            let answer = current.correct_answer.clone();
            assert!(session.submit_answer(&answer).unwrap().correct);
        }

        let result = session.result().unwrap();
        assert_eq!(result.score, 2);
        assert_eq!(result.total, 2);
        assert_eq!(result.percentage, 100.0);
        assert_eq!(result.tier(), PerformanceTier::Excellent);
    }
}
