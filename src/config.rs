use crate::error::{AppResult, ConfigError};
use crate::workflow::UnknownQuestionPolicy;
use std::str::FromStr;

/// 程序配置
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct Config {
    /// TOML题库文件，未设置时使用内置示例题库
    pub question_file: Option<String>,
    /// 是否显示详细日志
    pub verbose_logging: bool,
    /// 是否拒绝不在题目列表中的作答
    pub reject_unknown_questions: bool,
    /// 成绩记录文件
    pub result_log_file: String,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            question_file: None,
            verbose_logging: false,
            reject_unknown_questions: false,
            result_log_file: "quiz_results.txt".to_string(),
        }
    }
}

impl Config {
    /// 从环境变量加载配置，未设置的项使用默认值
    pub fn from_env() -> AppResult<Self> {
        Self::from_lookup(|name| std::env::var(name).ok())
    }

    /// 从任意键值来源加载配置
    pub fn from_lookup(lookup: impl Fn(&str) -> Option<String>) -> AppResult<Self> {
        let default = Self::default();
        Ok(Self {
            question_file: lookup("QUIZ_QUESTION_FILE")
                .filter(|v| !v.trim().is_empty())
                .or(default.question_file),
            verbose_logging: parse_var(&lookup, "VERBOSE_LOGGING", "bool")?
                .unwrap_or(default.verbose_logging),
            reject_unknown_questions: parse_var(&lookup, "REJECT_UNKNOWN_QUESTIONS", "bool")?
                .unwrap_or(default.reject_unknown_questions),
            result_log_file: lookup("RESULT_LOG_FILE").unwrap_or(default.result_log_file),
        })
    }

    /// 作答策略
    pub fn unknown_question_policy(&self) -> UnknownQuestionPolicy {
        if self.reject_unknown_questions {
            UnknownQuestionPolicy::Reject
        } else {
            UnknownQuestionPolicy::Record
        }
    }
}

fn parse_var<T: FromStr>(
    lookup: &impl Fn(&str) -> Option<String>,
    var_name: &str,
    expected_type: &str,
) -> AppResult<Option<T>> {
    match lookup(var_name) {
        None => Ok(None),
        Some(value) => value.trim().parse().map(Some).map_err(|_| {
            ConfigError::EnvVarParseFailed {
                var_name: var_name.to_string(),
                value,
                expected_type: expected_type.to_string(),
            }
            .into()
        }),
    }
}
