//! 内置示例题库
//!
//! 未配置题库文件时使用，每种题型各一道。

use crate::models::question::Question;

/// 示例题库标题
pub const SAMPLE_TITLE: &str = "Android 小测验";

/// 获取内置示例题目
pub fn sample_questions() -> Vec<Question> {
    vec![
        Question::true_false(1, "Android is better than iOS", true),
        Question::multiple_choice(
            2,
            "Which is the best language for Android coding",
            ["Kotlin", "Java", "C++", "Javascript"],
            "Kotlin",
        ),
        Question::multiple_selection(
            3,
            "Which are the main languages for Android coding",
            ["Kotlin", "Java", "C++", "Javascript"],
            ["Kotlin", "Java"],
        ),
        Question::open_ended(4, "Which company develops Android?", "Google"),
    ]
}
