//! 成绩记录服务 - 业务能力层
//!
//! 只负责"把一次判分结果追加到记录文件"，不关心流程，也从不回读

use crate::error::{AppError, AppResult};
use crate::models::{Answers, QuizResult};
use serde::Serialize;
use tokio::fs::OpenOptions;
use tokio::io::AsyncWriteExt;
use tracing::debug;

/// 单条成绩记录（JSON Lines 中的一行）
#[derive(Debug, Serialize)]
struct ResultRecord<'a> {
    graded_at: String,
    title: &'a str,
    score: u32,
    total: usize,
    answers: &'a Answers,
}

/// 成绩记录服务
pub struct ResultWriter {
    result_file_path: String,
}

impl ResultWriter {
    /// 使用自定义文件路径创建
    pub fn with_path(path: impl Into<String>) -> Self {
        Self {
            result_file_path: path.into(),
        }
    }

    pub fn path(&self) -> &str {
        &self.result_file_path
    }

    /// 追加一条成绩记录
    ///
    /// # 参数
    /// - `title`: 题库标题
    /// - `result`: 判分结果
    /// - `answers`: 判分时的作答
    pub async fn write(&self, title: &str, result: QuizResult, answers: &Answers) -> AppResult<()> {
        debug!(
            "写入成绩: {} | 得分 {} | 作答 {} 题",
            title,
            result,
            answers.len()
        );

        let record = ResultRecord {
            graded_at: chrono::Local::now().format("%Y-%m-%d %H:%M:%S").to_string(),
            title,
            score: result.score,
            total: result.total,
            answers,
        };
        let mut line = serde_json::to_string(&record)
            .map_err(|e| AppError::file_write_failed(&self.result_file_path, e.into()))?;
        line.push('\n');

        let mut file = OpenOptions::new()
            .create(true)
            .append(true)
            .open(&self.result_file_path)
            .await
            .map_err(|e| AppError::file_write_failed(&self.result_file_path, e))?;

        file.write_all(line.as_bytes())
            .await
            .map_err(|e| AppError::file_write_failed(&self.result_file_path, e))?;
        file.flush()
            .await
            .map_err(|e| AppError::file_write_failed(&self.result_file_path, e))?;

        Ok(())
    }
}

impl Default for ResultWriter {
    fn default() -> Self {
        Self::with_path("quiz_results.txt")
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::models::QuestionId;

    #[tokio::test]
    async fn test_appends_json_lines() {
        let path = std::env::temp_dir().join(format!("quiz_results_{}.txt", std::process::id()));
        let _ = std::fs::remove_file(&path);
        let writer = ResultWriter::with_path(path.display().to_string());

        let mut answers = Answers::new();
        answers.set_single(QuestionId(1), "True".to_string());
        let result = QuizResult { score: 1, total: 2 };

        writer.write("小测验", result, &answers).await.unwrap();
        writer.write("小测验", result, &Answers::new()).await.unwrap();

        let content = std::fs::read_to_string(&path).unwrap();
        let lines: Vec<&str> = content.lines().collect();
        assert_eq!(lines.len(), 2);

        let first: serde_json::Value = serde_json::from_str(lines[0]).unwrap();
        assert_eq!(first["score"], 1);
        assert_eq!(first["total"], 2);
        assert_eq!(first["answers"]["1"], "True");

        std::fs::remove_file(&path).unwrap();
    }

    #[tokio::test]
    async fn test_write_to_missing_directory_fails() {
        let writer = ResultWriter::with_path("/nonexistent/dir/quiz_results.txt");
        let result = QuizResult { score: 0, total: 1 };
        let err = writer.write("小测验", result, &Answers::new()).await;
        assert!(matches!(err, Err(AppError::File(_))));
    }
}
