use crate::error::QuestionBankError;
use crate::models::question::{validate_questions, Question};
use serde::{Deserialize, Serialize};

/// 题库：一套有序题目
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct QuestionBank {
    pub title: String,
    #[serde(default)]
    pub questions: Vec<Question>,
    #[serde(skip_serializing, skip_deserializing)]
    pub file_path: Option<String>,
}

impl QuestionBank {
    pub fn new(title: impl Into<String>, questions: Vec<Question>) -> Self {
        Self {
            title: title.into(),
            questions,
            file_path: None,
        }
    }

    pub fn with_file_path(mut self, file_path: String) -> Self {
        self.file_path = Some(file_path);
        self
    }

    /// 校验题库中的所有题目
    pub fn validate(&self) -> Result<(), QuestionBankError> {
        validate_questions(&self.questions)
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }
}
