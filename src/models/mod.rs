pub mod draft;
pub mod question;
pub mod question_set;
pub mod quiz_result;
pub mod quiz_session;

pub use draft::QuestionSetDraft;
pub use question::{Question, correct_answer_choices, validate_question};
pub use question_set::{QuestionSet, validate_question_set};
pub use quiz_result::{PerformanceTier, QuizResult};
pub use quiz_session::{AnswerOutcome, QuizSession, SessionState};
