pub mod config;
pub mod errors;
pub mod models;
pub mod store;

pub use config::{AppConfig, SkinKind};
pub use errors::{QuizError, SessionError, StoreError, ValidationError};
pub use models::{PerformanceTier, Question, QuestionSet, QuestionSetDraft, QuizResult, QuizSession};
pub use store::QuestionSetStore;
