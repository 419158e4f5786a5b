//! # Quiz Engine
//!
//! 一个多题型测验的状态机与判分引擎
//!
//! ## 架构设计
//!
//! 本系统采用严格的四层架构：
//!
//! ### ① 基础设施层（Infrastructure）
//! - `infrastructure/` - 持有状态，只暴露能力
//! - `Observable` - 唯一的状态写端，提供原子修改和订阅
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"
//! - `grading` - 逐题判分，集合题要求完全相等
//! - `QuestionProvider` - 题目来源（当前快照 + 整表替换通知）
//! - `ResultWriter` - 追加成绩记录
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义一次测验的完整状态机
//! - `QuizState` - 会话状态快照
//! - `QuizEngine` - 导航 → 作答 → 判分 → 重置
//!
//! ### ④ 编排层（Orchestration）
//! - `orchestrator/quiz_session` - 把题目来源接到引擎上
//! - `orchestrator/app` - 终端逐行交互程序
//!
//! ## 模块结构

pub mod config;
pub mod error;
pub mod infrastructure;

pub mod models;
pub mod orchestrator;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use config::Config;
pub use error::{AppError, AppResult, QuizError};
pub use infrastructure::Observable;
pub use models::{AnswerValue, Answers, Question, QuestionBank, QuestionId, QuizResult};
pub use orchestrator::{App, QuizSession};
pub use services::{InMemoryQuestionProvider, QuestionProvider, TomlQuestionProvider};
pub use workflow::{QuizEngine, QuizPhase, QuizState, StateChanges, UnknownQuestionPolicy};
