pub mod quiz_engine;
pub mod quiz_state;

pub use quiz_engine::{QuizEngine, UnknownQuestionPolicy};
pub use quiz_state::{QuizPhase, QuizState, StateChanges};
