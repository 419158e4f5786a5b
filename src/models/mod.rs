pub mod answer;
pub mod loaders;
pub mod question;
pub mod question_bank;
pub mod result;
pub mod sample;

pub use answer::{AnswerValue, Answers};
pub use loaders::{load_question_bank, parse_question_bank};
pub use question::{validate_questions, Question, QuestionId, QuestionKind, TRUE_FALSE_OPTIONS};
pub use question_bank::QuestionBank;
pub use result::QuizResult;
pub use sample::{sample_questions, SAMPLE_TITLE};
