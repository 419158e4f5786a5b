//! 判分服务 - 业务能力层
//!
//! 只负责"一道题答得对不对"和"一套题得几分"，不关心导航和状态通知

use crate::models::{AnswerValue, Answers, Question};

/// 判断单道题的作答是否正确
///
/// - 单值答案：字符串相等
/// - 集合答案：集合完全相等，子集或超集都不得分
/// - 答案形态与题型不符：不得分
pub fn is_correct(question: &Question, answer: &AnswerValue) -> bool {
    match (question, answer) {
        (Question::TrueFalse { correct_answer, .. }, AnswerValue::Single(given))
        | (Question::MultipleChoice { correct_answer, .. }, AnswerValue::Single(given))
        | (Question::OpenEnded { correct_answer, .. }, AnswerValue::Single(given)) => {
            given == correct_answer
        }
        (Question::MultipleSelection { correct_answer, .. }, AnswerValue::Multi(given)) => {
            given == correct_answer
        }
        _ => false,
    }
}

/// 计算得分
///
/// 以题目列表为准逐题判分：未作答的题不得分，题目列表之外的答案被忽略。
pub fn score(questions: &[Question], answers: &Answers) -> u32 {
    questions
        .iter()
        .filter(|q| answers.get(q.id()).is_some_and(|a| is_correct(q, a)))
        .count() as u32
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;
    use std::collections::BTreeSet;

    fn set(items: &[&str]) -> AnswerValue {
        AnswerValue::Multi(items.iter().map(|s| s.to_string()).collect::<BTreeSet<_>>())
    }

    #[test]
    fn test_single_value_questions() {
        let tf = Question::true_false(1, "Q", false);
        assert!(is_correct(&tf, &"False".into()));
        assert!(!is_correct(&tf, &"false".into()));

        let open = Question::open_ended(2, "Q", "Google");
        assert!(is_correct(&open, &"Google".into()));
        assert!(!is_correct(&open, &"Google ".into()));
    }

    #[test]
    fn test_selection_requires_exact_set() {
        let q = Question::multiple_selection(1, "Q", ["A", "B", "C"], ["A", "B"]);
        assert!(is_correct(&q, &set(&["B", "A"])));
        assert!(!is_correct(&q, &set(&["A"])), "子集不得分");
        assert!(!is_correct(&q, &set(&["A", "B", "C"])), "超集不得分");
        assert!(!is_correct(&q, &set(&[])));
    }

    #[test]
    fn test_shape_mismatch_scores_zero() {
        let mc = Question::multiple_choice(1, "Q", ["A", "B"], "A");
        assert!(!is_correct(&mc, &set(&["A"])));

        let ms = Question::multiple_selection(2, "Q", ["A", "B"], ["A"]);
        assert!(!is_correct(&ms, &"A".into()));
    }

    #[test]
    fn test_score_ignores_unanswered_and_stray_answers() {
        let questions = vec![
            Question::multiple_choice(1, "Q1", ["A", "B"], "A"),
            Question::open_ended(2, "Q2", "x"),
        ];
        let answers: Answers = [
            (QuestionId(1), AnswerValue::from("A")),
            (QuestionId(99), AnswerValue::from("x")),
        ]
        .into_iter()
        .collect();

        assert_eq!(score(&questions, &answers), 1);
        assert_eq!(score(&[], &answers), 0);
    }

    #[test]
    fn test_empty_string_is_a_real_answer() {
        let questions = vec![Question::open_ended(1, "Q", "")];
        let answers: Answers = [(QuestionId(1), AnswerValue::from(""))].into_iter().collect();
        assert_eq!(score(&questions, &answers), 1);
        assert_eq!(score(&questions, &Answers::new()), 0);
    }
}
