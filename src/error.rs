use crate::models::QuestionId;
use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 测验引擎错误
    #[error("测验错误: {0}")]
    Quiz(#[from] QuizError),
    /// 题库校验错误
    #[error("题库错误: {0}")]
    QuestionBank(#[from] QuestionBankError),
    /// 文件操作错误
    #[error("文件错误: {0}")]
    File(#[from] FileError),
    /// 配置错误
    #[error("配置错误: {0}")]
    Config(#[from] ConfigError),
}

/// 测验引擎错误
///
/// 引擎对越界导航、空题目列表等误用一律静默处理，只有这两类情况会返回错误。
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuizError {
    /// 题目 ID 不在当前题目列表中（仅在 `UnknownQuestionPolicy::Reject` 下出现）
    #[error("未知题目 ID: {id}")]
    UnknownQuestion { id: QuestionId },
    /// 已存答案的形态与操作不符
    #[error("题目 {id} 的答案类型不匹配: 期望 {expected}, 实际 {found}")]
    TypeMismatch {
        id: QuestionId,
        expected: &'static str,
        found: &'static str,
    },
}

/// 题库校验错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum QuestionBankError {
    /// 题目 ID 重复
    #[error("题目 ID 重复: {id}")]
    DuplicateId { id: QuestionId },
    /// 选项重复
    #[error("题目 {id} 的选项重复: {option}")]
    DuplicateOption { id: QuestionId, option: String },
    /// 正确答案不在选项中
    #[error("题目 {id} 的正确答案 {answer:?} 不在选项中")]
    AnswerNotInOptions { id: QuestionId, answer: String },
    /// 多选题正确答案为空
    #[error("题目 {id} 的正确答案集合为空")]
    EmptyCorrectSet { id: QuestionId },
}

/// 文件操作错误
#[derive(Debug, Error)]
pub enum FileError {
    /// 文件不存在
    #[error("文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入文件失败
    #[error("写入文件失败 ({path}): {source}")]
    WriteFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
}

/// 配置错误
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ConfigError {
    /// 环境变量解析失败
    #[error("环境变量 {var_name} 解析失败: 值 '{value}' 无法转换为 {expected_type}")]
    EnvVarParseFailed {
        var_name: String,
        value: String,
        expected_type: String,
    },
}

// ========== 从常见错误类型转换 ==========

impl From<toml::de::Error> for AppError {
    fn from(err: toml::de::Error) -> Self {
        AppError::File(FileError::TomlParseFailed {
            path: String::new(), // TOML错误通常不包含路径信息
            source: err,
        })
    }
}

// ========== 便捷构造函数 ==========

impl AppError {
    /// 创建文件读取错误
    pub fn file_read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        let path = path.into();
        if source.kind() == std::io::ErrorKind::NotFound {
            AppError::File(FileError::NotFound { path })
        } else {
            AppError::File(FileError::ReadFailed { path, source })
        }
    }

    /// 创建文件写入错误
    pub fn file_write_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        AppError::File(FileError::WriteFailed {
            path: path.into(),
            source,
        })
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;
