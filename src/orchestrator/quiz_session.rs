//! 测验会话 - 编排层
//!
//! 把题目来源接到测验引擎上：
//!
//! 1. **立即载入**：绑定时先载入来源的当前快照（可能为空）
//! 2. **持续同步**：后台任务等待来源的整表替换并推送给引擎
//! 3. **生命周期**：会话销毁时停止后台任务

use crate::services::QuestionProvider;
use crate::workflow::{QuizEngine, UnknownQuestionPolicy};
use std::sync::Arc;
use tokio::task::JoinHandle;
use tracing::{debug, info};

/// 测验会话
///
/// 持有引擎和同步任务，界面通过 `engine()` 读取状态、发出命令。
pub struct QuizSession {
    engine: Arc<QuizEngine>,
    sync_task: JoinHandle<()>,
}

impl QuizSession {
    /// 绑定题目来源并启动同步
    ///
    /// 需要在 tokio 运行时内调用。
    pub fn bind<P>(provider: &P, policy: UnknownQuestionPolicy) -> Self
    where
        P: QuestionProvider + ?Sized,
    {
        let engine = Arc::new(QuizEngine::with_policy(policy));
        let mut questions = provider.questions();

        let initial = questions.borrow_and_update().clone();
        info!("🔗 绑定题目来源，当前 {} 个题目", initial.len());
        engine.ingest(initial);

        let target = engine.clone();
        let sync_task = tokio::spawn(async move {
            while questions.changed().await.is_ok() {
                let latest = questions.borrow_and_update().clone();
                target.ingest(latest);
            }
            debug!("题目来源已关闭，停止同步");
        });

        Self { engine, sync_task }
    }

    pub fn engine(&self) -> &Arc<QuizEngine> {
        &self.engine
    }

    /// 同步任务是否已结束（来源关闭后结束）
    pub fn is_detached(&self) -> bool {
        self.sync_task.is_finished()
    }
}

impl Drop for QuizSession {
    fn drop(&mut self) {
        self.sync_task.abort();
    }
}
