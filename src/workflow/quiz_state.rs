//! 测验会话状态
//!
//! 封装"题目列表 + 当前位置 + 作答 + 得分"这一整体快照

use crate::models::{Answers, Question, QuizResult};
use std::fmt::Display;

/// 测验阶段
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum QuizPhase {
    /// 作答中（尚未判分）
    InProgress,
    /// 已判分，导航冻结
    Graded,
}

/// 一次操作实际改动了哪些字段
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct StateChanges {
    pub questions: bool,
    pub current_index: bool,
    pub answers: bool,
    pub score: bool,
}

impl StateChanges {
    pub fn any(&self) -> bool {
        self.questions || self.current_index || self.answers || self.score
    }

    pub(crate) fn current_index() -> Self {
        Self {
            current_index: true,
            ..Self::default()
        }
    }

    pub(crate) fn answers() -> Self {
        Self {
            answers: true,
            ..Self::default()
        }
    }
}

/// 测验会话状态快照
///
/// 订阅者每次收到通知时读到的都是一次操作完成后的完整状态。
#[derive(Debug, Clone, Default, PartialEq)]
pub struct QuizState {
    /// 题目列表（来自题目来源的最新快照）
    pub questions: Vec<Question>,

    /// 当前题目索引（从0开始），题目列表为空时为 0
    pub current_index: usize,

    /// 作答
    pub answers: Answers,

    /// 得分，`None` 表示尚未判分
    pub score: Option<u32>,

    /// 判分时的题目总数，与 `score` 同时写入
    pub graded_total: usize,

    /// 最近一次通知所对应的改动
    pub last_change: StateChanges,

    /// 每次通知递增
    pub version: u64,
}

impl QuizState {
    pub fn phase(&self) -> QuizPhase {
        match self.score {
            Some(_) => QuizPhase::Graded,
            None => QuizPhase::InProgress,
        }
    }

    pub fn current_question(&self) -> Option<&Question> {
        self.questions.get(self.current_index)
    }

    pub fn question_count(&self) -> usize {
        self.questions.len()
    }

    pub fn is_last_question(&self) -> bool {
        !self.questions.is_empty() && self.current_index == self.questions.len() - 1
    }

    pub fn result(&self) -> Option<QuizResult> {
        self.score.map(|score| QuizResult {
            score,
            total: self.graded_total,
        })
    }

    /// 记录本次改动；没有任何改动时返回 `false`，不通知订阅者
    pub(crate) fn commit(&mut self, changes: StateChanges) -> bool {
        if !changes.any() {
            return false;
        }
        self.last_change = changes;
        self.version += 1;
        true
    }
}

impl Display for QuizState {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let position = if self.questions.is_empty() {
            "-".to_string()
        } else {
            format!("{}/{}", self.current_index + 1, self.questions.len())
        };
        match self.result() {
            Some(result) => write!(
                f,
                "[题目 {} 已答 {} 题 得分 {}]",
                position,
                self.answers.len(),
                result
            ),
            None => write!(f, "[题目 {} 已答 {} 题]", position, self.answers.len()),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_commit_skips_empty_changes() {
        let mut state = QuizState::default();
        assert!(!state.commit(StateChanges::default()));
        assert_eq!(state.version, 0);

        assert!(state.commit(StateChanges::answers()));
        assert_eq!(state.version, 1);
        assert!(state.last_change.answers);
    }

    #[test]
    fn test_display() {
        let mut state = QuizState::default();
        assert_eq!(state.to_string(), "[题目 - 已答 0 题]");

        state.questions = vec![Question::open_ended(1, "Q", "A")];
        state.score = Some(0);
        state.graded_total = 1;
        assert_eq!(state.to_string(), "[题目 1/1 已答 0 题 得分 0 / 1]");
        assert!(state.is_last_question());
    }

    #[test]
    fn test_result_uses_graded_total() {
        let state = QuizState {
            questions: vec![
                Question::open_ended(1, "Q1", "A"),
                Question::open_ended(2, "Q2", "B"),
            ],
            score: Some(1),
            graded_total: 1,
            ..QuizState::default()
        };
        assert_eq!(state.result(), Some(QuizResult { score: 1, total: 1 }));
    }
}
