//! 编排层（Orchestration Layer）
//!
//! ## 模块划分
//!
//! ### `quiz_session` - 测验会话
//! - 把题目来源接到测验引擎
//! - 持有同步任务，来源每次整表替换都推送给引擎
//!
//! ### `app` - 终端测验程序
//! - 读取配置、载入题库
//! - 把标准输入的命令转成引擎命令
//! - 判分后记录成绩
//!
//! ## 层次关系
//!
//! ```text
//! app (命令行交互)
//!     ↓
//! quiz_session (来源 → 引擎)
//!     ↓
//! workflow::QuizEngine (导航 / 作答 / 判分 / 重置)
//!     ↓
//! services (能力层：grading / question_provider / result_writer)
//!     ↓
//! infrastructure (基础设施：Observable)
//! ```

pub mod app;
pub mod quiz_session;

pub use app::{App, Command};
pub use quiz_session::QuizSession;
