pub mod json_store;

pub use json_store::{DEFAULT_SETS_DIR, QuestionSetStore};
