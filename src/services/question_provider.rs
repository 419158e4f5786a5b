//! 题目来源 - 业务能力层
//!
//! 引擎只依赖 `QuestionProvider`：能拿到当前题目快照，能收到整表替换通知

use crate::infrastructure::Observable;
use crate::models::{load_question_bank, Question};
use std::path::PathBuf;
use std::sync::Arc;
use tokio::sync::watch;
use tokio::task::JoinHandle;
use tracing::{error, info};

/// 题目来源
///
/// 返回的接收端既可 `borrow()` 当前快照，也可 `changed().await` 等待整表替换。
pub trait QuestionProvider: Send + Sync {
    fn questions(&self) -> watch::Receiver<Vec<Question>>;
}

/// 内存题目来源
///
/// 快照可随时整体替换，测试中用作替身。
#[derive(Debug, Default)]
pub struct InMemoryQuestionProvider {
    questions: Observable<Vec<Question>>,
}

impl InMemoryQuestionProvider {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions: Observable::new(questions),
        }
    }

    /// 整体替换题目列表
    pub fn set_questions(&self, questions: Vec<Question>) {
        info!("📋 题目来源更新: {} 个题目", questions.len());
        self.questions.replace(questions);
    }
}

impl QuestionProvider for InMemoryQuestionProvider {
    fn questions(&self) -> watch::Receiver<Vec<Question>> {
        self.questions.subscribe()
    }
}

/// TOML 题库来源
///
/// 创建时为空，后台加载完成后发布题目；加载失败时保持为空并记录错误。
pub struct TomlQuestionProvider {
    inner: Arc<InMemoryQuestionProvider>,
    loader: JoinHandle<()>,
}

impl TomlQuestionProvider {
    /// 启动后台加载
    ///
    /// 需要在 tokio 运行时内调用。
    pub fn spawn(path: impl Into<PathBuf>) -> Self {
        let path = path.into();
        let inner = Arc::new(InMemoryQuestionProvider::default());
        let target = inner.clone();

        let loader = tokio::spawn(async move {
            match load_question_bank(&path).await {
                Ok(bank) => target.set_questions(bank.questions),
                Err(e) => error!("题库加载失败 {}: {}", path.display(), e),
            }
        });

        Self { inner, loader }
    }

    /// 后台加载是否已结束
    pub fn is_loaded(&self) -> bool {
        self.loader.is_finished()
    }
}

impl QuestionProvider for TomlQuestionProvider {
    fn questions(&self) -> watch::Receiver<Vec<Question>> {
        self.inner.questions()
    }
}

impl Drop for TomlQuestionProvider {
    fn drop(&mut self) {
        self.loader.abort();
    }
}
