use crate::error::{AppError, AppResult, FileError};
use crate::models::question_bank::QuestionBank;
use std::path::Path;
use tokio::fs;

/// 从 TOML 文本解析题库并校验
pub fn parse_question_bank(content: &str) -> AppResult<QuestionBank> {
    let bank: QuestionBank = toml::from_str(content)?;
    bank.validate()?;
    Ok(bank)
}

/// 从 TOML 文件加载题库
pub async fn load_question_bank(toml_file_path: &Path) -> AppResult<QuestionBank> {
    let path_display = toml_file_path.display().to_string();

    let content = fs::read_to_string(toml_file_path)
        .await
        .map_err(|e| AppError::file_read_failed(&path_display, e))?;

    let bank: QuestionBank = toml::from_str(&content).map_err(|source| {
        AppError::File(FileError::TomlParseFailed {
            path: path_display.clone(),
            source,
        })
    })?;
    bank.validate()?;

    tracing::info!("成功加载题库 {}: {} 个题目", bank.title, bank.len());

    Ok(bank.with_file_path(path_display))
}
