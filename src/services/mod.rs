pub mod grading;
pub mod question_provider;
pub mod result_writer;

pub use question_provider::{InMemoryQuestionProvider, QuestionProvider, TomlQuestionProvider};
pub use result_writer::ResultWriter;
