use crate::error::QuizError;
use crate::models::question::QuestionId;
use serde::{Deserialize, Serialize};
use std::collections::{BTreeMap, BTreeSet};

/// 单道题的作答
///
/// 判断题、单选题、问答题使用 `Single`，多选题使用 `Multi`。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum AnswerValue {
    Single(String),
    Multi(BTreeSet<String>),
}

impl From<&str> for AnswerValue {
    fn from(value: &str) -> Self {
        AnswerValue::Single(value.to_string())
    }
}

impl From<String> for AnswerValue {
    fn from(value: String) -> Self {
        AnswerValue::Single(value)
    }
}

impl From<BTreeSet<String>> for AnswerValue {
    fn from(value: BTreeSet<String>) -> Self {
        AnswerValue::Multi(value)
    }
}

/// 答案表：题目 ID → 作答
///
/// 没有键即为未作答；空字符串也是一个有效答案。
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct Answers {
    values: BTreeMap<QuestionId, AnswerValue>,
}

impl Answers {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, id: QuestionId) -> Option<&AnswerValue> {
        self.values.get(&id)
    }

    pub fn contains(&self, id: QuestionId) -> bool {
        self.values.contains_key(&id)
    }

    pub fn len(&self) -> usize {
        self.values.len()
    }

    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    /// 写入单值答案，返回答案是否发生变化
    pub fn set_single(&mut self, id: QuestionId, value: String) -> bool {
        let value = AnswerValue::Single(value);
        if self.values.get(&id) == Some(&value) {
            return false;
        }
        self.values.insert(id, value);
        true
    }

    /// 切换多选答案中的某个选项
    ///
    /// 尚未作答时从空集合开始；已存单值答案时返回 `TypeMismatch`，原答案保持不变。
    pub fn toggle(&mut self, id: QuestionId, option: String) -> Result<(), QuizError> {
        match self
            .values
            .entry(id)
            .or_insert_with(|| AnswerValue::Multi(BTreeSet::new()))
        {
            AnswerValue::Multi(selected) => {
                if !selected.remove(&option) {
                    selected.insert(option);
                }
                Ok(())
            }
            AnswerValue::Single(_) => Err(QuizError::TypeMismatch {
                id,
                expected: "多选",
                found: "单值",
            }),
        }
    }

    pub fn clear(&mut self) {
        self.values.clear();
    }
}

impl FromIterator<(QuestionId, AnswerValue)> for Answers {
    fn from_iter<I: IntoIterator<Item = (QuestionId, AnswerValue)>>(iter: I) -> Self {
        Self {
            values: iter.into_iter().collect(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_toggle_adds_then_removes() {
        let mut answers = Answers::new();
        let id = QuestionId(1);

        answers.toggle(id, "A".to_string()).unwrap();
        answers.toggle(id, "B".to_string()).unwrap();
        answers.toggle(id, "A".to_string()).unwrap();

        let expected: BTreeSet<String> = ["B".to_string()].into_iter().collect();
        assert_eq!(answers.get(id), Some(&AnswerValue::Multi(expected)));
    }

    #[test]
    fn test_toggle_on_single_value_is_type_mismatch() {
        let mut answers = Answers::new();
        let id = QuestionId(7);
        answers.set_single(id, "True".to_string());

        let err = answers.toggle(id, "A".to_string()).unwrap_err();
        assert_eq!(
            err,
            QuizError::TypeMismatch {
                id,
                expected: "多选",
                found: "单值"
            }
        );
        assert_eq!(answers.get(id), Some(&AnswerValue::from("True")));
    }

    #[test]
    fn test_set_single_reports_changes() {
        let mut answers = Answers::new();
        let id = QuestionId(2);
        assert!(answers.set_single(id, String::new()));
        assert!(!answers.set_single(id, String::new()));
        assert!(answers.contains(id), "空字符串也算作答");
    }

    #[test]
    fn test_serializes_as_json_object() {
        let mut answers = Answers::new();
        answers.set_single(QuestionId(1), "Kotlin".to_string());
        answers.toggle(QuestionId(3), "Java".to_string()).unwrap();

        let json = serde_json::to_string(&answers).unwrap();
        assert_eq!(json, r#"{"1":"Kotlin","3":["Java"]}"#);
    }
}
