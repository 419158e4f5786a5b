use crate::error::QuestionBankError;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeSet, HashSet};
use std::fmt;

/// 判断题的固定选项
pub const TRUE_FALSE_OPTIONS: [&str; 2] = ["True", "False"];

/// 题目 ID
///
/// 作为答案表的键使用，与导航索引相互独立。
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(transparent)]
pub struct QuestionId(pub u32);

impl fmt::Display for QuestionId {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.0)
    }
}

impl From<u32> for QuestionId {
    fn from(id: u32) -> Self {
        QuestionId(id)
    }
}

/// 题型
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum QuestionKind {
    TrueFalse,
    MultipleChoice,
    MultipleSelection,
    OpenEnded,
}

impl QuestionKind {
    /// 获取题型名称
    pub fn name(self) -> &'static str {
        match self {
            QuestionKind::TrueFalse => "判断题",
            QuestionKind::MultipleChoice => "单选题",
            QuestionKind::MultipleSelection => "多选题",
            QuestionKind::OpenEnded => "问答题",
        }
    }

    /// 该题型的答案是否为集合
    pub fn takes_multiple_answers(self) -> bool {
        matches!(self, QuestionKind::MultipleSelection)
    }
}

impl fmt::Display for QuestionKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.name())
    }
}

/// 题目
///
/// TOML 中以 `kind` 字段区分题型：
///
/// ```toml
/// [[questions]]
/// kind = "multiple_selection"
/// id = 3
/// text = "Which are the main languages for Android coding"
/// options = ["Kotlin", "Java", "C++", "Javascript"]
/// correct_answer = ["Kotlin", "Java"]
/// ```
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(tag = "kind", rename_all = "snake_case")]
pub enum Question {
    /// 判断题，正确答案为 "True" 或 "False"
    TrueFalse {
        id: QuestionId,
        text: String,
        correct_answer: String,
    },
    /// 单选题
    MultipleChoice {
        id: QuestionId,
        text: String,
        options: Vec<String>,
        correct_answer: String,
    },
    /// 多选题，正确答案为选项的非空子集
    MultipleSelection {
        id: QuestionId,
        text: String,
        options: Vec<String>,
        correct_answer: BTreeSet<String>,
    },
    /// 问答题，按参考答案精确匹配
    OpenEnded {
        id: QuestionId,
        text: String,
        correct_answer: String,
    },
}

impl Question {
    pub fn true_false(id: u32, text: impl Into<String>, correct: bool) -> Self {
        let correct_answer = if correct {
            TRUE_FALSE_OPTIONS[0]
        } else {
            TRUE_FALSE_OPTIONS[1]
        };
        Question::TrueFalse {
            id: QuestionId(id),
            text: text.into(),
            correct_answer: correct_answer.to_string(),
        }
    }

    pub fn multiple_choice<I, S>(
        id: u32,
        text: impl Into<String>,
        options: I,
        correct_answer: impl Into<String>,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
    {
        Question::MultipleChoice {
            id: QuestionId(id),
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn multiple_selection<I, S, C, T>(
        id: u32,
        text: impl Into<String>,
        options: I,
        correct_answer: C,
    ) -> Self
    where
        I: IntoIterator<Item = S>,
        S: Into<String>,
        C: IntoIterator<Item = T>,
        T: Into<String>,
    {
        Question::MultipleSelection {
            id: QuestionId(id),
            text: text.into(),
            options: options.into_iter().map(Into::into).collect(),
            correct_answer: correct_answer.into_iter().map(Into::into).collect(),
        }
    }

    pub fn open_ended(id: u32, text: impl Into<String>, correct_answer: impl Into<String>) -> Self {
        Question::OpenEnded {
            id: QuestionId(id),
            text: text.into(),
            correct_answer: correct_answer.into(),
        }
    }

    pub fn id(&self) -> QuestionId {
        match self {
            Question::TrueFalse { id, .. }
            | Question::MultipleChoice { id, .. }
            | Question::MultipleSelection { id, .. }
            | Question::OpenEnded { id, .. } => *id,
        }
    }

    pub fn text(&self) -> &str {
        match self {
            Question::TrueFalse { text, .. }
            | Question::MultipleChoice { text, .. }
            | Question::MultipleSelection { text, .. }
            | Question::OpenEnded { text, .. } => text,
        }
    }

    pub fn kind(&self) -> QuestionKind {
        match self {
            Question::TrueFalse { .. } => QuestionKind::TrueFalse,
            Question::MultipleChoice { .. } => QuestionKind::MultipleChoice,
            Question::MultipleSelection { .. } => QuestionKind::MultipleSelection,
            Question::OpenEnded { .. } => QuestionKind::OpenEnded,
        }
    }

    /// 获取可选项（问答题没有选项）
    pub fn options(&self) -> Vec<&str> {
        match self {
            Question::TrueFalse { .. } => TRUE_FALSE_OPTIONS.to_vec(),
            Question::MultipleChoice { options, .. }
            | Question::MultipleSelection { options, .. } => {
                options.iter().map(String::as_str).collect()
            }
            Question::OpenEnded { .. } => Vec::new(),
        }
    }

    /// 校验单道题目的数据约束
    pub fn validate(&self) -> Result<(), QuestionBankError> {
        let id = self.id();
        match self {
            Question::TrueFalse { correct_answer, .. } => {
                if !TRUE_FALSE_OPTIONS.contains(&correct_answer.as_str()) {
                    return Err(QuestionBankError::AnswerNotInOptions {
                        id,
                        answer: correct_answer.clone(),
                    });
                }
            }
            Question::MultipleChoice {
                options,
                correct_answer,
                ..
            } => {
                check_unique_options(id, options)?;
                if !options.contains(correct_answer) {
                    return Err(QuestionBankError::AnswerNotInOptions {
                        id,
                        answer: correct_answer.clone(),
                    });
                }
            }
            Question::MultipleSelection {
                options,
                correct_answer,
                ..
            } => {
                check_unique_options(id, options)?;
                if correct_answer.is_empty() {
                    return Err(QuestionBankError::EmptyCorrectSet { id });
                }
                if let Some(stray) = correct_answer.iter().find(|a| !options.contains(*a)) {
                    return Err(QuestionBankError::AnswerNotInOptions {
                        id,
                        answer: stray.clone(),
                    });
                }
            }
            Question::OpenEnded { .. } => {}
        }
        Ok(())
    }
}

fn check_unique_options(id: QuestionId, options: &[String]) -> Result<(), QuestionBankError> {
    let mut seen = HashSet::with_capacity(options.len());
    for option in options {
        if !seen.insert(option.as_str()) {
            return Err(QuestionBankError::DuplicateOption {
                id,
                option: option.clone(),
            });
        }
    }
    Ok(())
}

/// 校验整套题目：逐题校验并保证 ID 唯一
pub fn validate_questions(questions: &[Question]) -> Result<(), QuestionBankError> {
    let mut ids = HashSet::with_capacity(questions.len());
    for question in questions {
        question.validate()?;
        if !ids.insert(question.id()) {
            return Err(QuestionBankError::DuplicateId { id: question.id() });
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_true_false_options_are_fixed() {
        let q = Question::true_false(1, "Android is better than iOS", true);
        assert_eq!(q.options(), vec!["True", "False"]);
        assert_eq!(q.kind(), QuestionKind::TrueFalse);
        assert!(q.validate().is_ok());
    }

    #[test]
    fn test_validate_rejects_bad_questions() {
        let q = Question::multiple_choice(2, "Q", ["A", "B"], "C");
        assert_eq!(
            q.validate(),
            Err(QuestionBankError::AnswerNotInOptions {
                id: QuestionId(2),
                answer: "C".to_string()
            })
        );

        let q = Question::multiple_choice(2, "Q", ["A", "A"], "A");
        assert!(matches!(
            q.validate(),
            Err(QuestionBankError::DuplicateOption { .. })
        ));

        let q = Question::multiple_selection(3, "Q", ["A", "B"], Vec::<String>::new());
        assert_eq!(
            q.validate(),
            Err(QuestionBankError::EmptyCorrectSet { id: QuestionId(3) })
        );

        let q = Question::TrueFalse {
            id: QuestionId(4),
            text: "Q".to_string(),
            correct_answer: "Maybe".to_string(),
        };
        assert!(q.validate().is_err());
    }

    #[test]
    fn test_validate_questions_detects_duplicate_ids() {
        let questions = vec![
            Question::open_ended(1, "Q1", "x"),
            Question::true_false(1, "Q2", false),
        ];
        assert_eq!(
            validate_questions(&questions),
            Err(QuestionBankError::DuplicateId { id: QuestionId(1) })
        );
    }
}
