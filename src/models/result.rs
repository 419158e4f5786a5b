use serde::{Deserialize, Serialize};
use std::fmt;

/// 判分结果
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizResult {
    /// 答对题数
    pub score: u32,
    /// 题目总数
    pub total: usize,
}

impl QuizResult {
    /// 是否全部答对（空题目列表不算）
    pub fn is_perfect(&self) -> bool {
        self.total > 0 && self.score as usize == self.total
    }
}

impl fmt::Display for QuizResult {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} / {}", self.score, self.total)
    }
}
