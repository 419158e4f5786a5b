//! 测验引擎 - 流程层
//!
//! 核心职责：导航、记录作答、判分、重置
//!
//! 所有操作都在同一把锁内原子完成，对误用（越界导航、空题目列表）一律静默处理：
//! 1. 题目列表为空时，导航和判分都是安全的空操作（判分得 0）
//! 2. 已判分后导航为空操作，作答仍可修改，得分保留到下一次判分或重置
//! 3. 多选切换遇到已存单值答案时返回 `TypeMismatch`

use tokio::sync::watch;
use tracing::{debug, info, warn};

use crate::error::QuizError;
use crate::infrastructure::Observable;
use crate::models::{AnswerValue, Answers, Question, QuestionId, QuizResult};
use crate::services::grading;
use crate::utils::logging::truncate_text;
use crate::workflow::quiz_state::{QuizPhase, QuizState, StateChanges};

/// 题目 ID 不在当前列表时的处理方式
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum UnknownQuestionPolicy {
    /// 照常记录，判分时忽略
    #[default]
    Record,
    /// 拒绝并返回 `QuizError::UnknownQuestion`
    Reject,
}

/// 测验引擎
///
/// - 持有会话状态的唯一写端
/// - 可放进 `Arc` 在界面和题目同步任务之间共享
/// - 不持有题目来源，由 `QuizSession` 负责推送题目
#[derive(Debug)]
pub struct QuizEngine {
    state: Observable<QuizState>,
    policy: UnknownQuestionPolicy,
}

impl QuizEngine {
    /// 创建新的测验引擎（空题目列表）
    pub fn new() -> Self {
        Self::with_policy(UnknownQuestionPolicy::default())
    }

    pub fn with_policy(policy: UnknownQuestionPolicy) -> Self {
        Self {
            state: Observable::new(QuizState::default()),
            policy,
        }
    }

    // ========== 命令 ==========

    /// 整体替换题目列表
    ///
    /// 不清空作答和得分；当前索引保留，但会收紧到新列表范围内。
    /// 已判分时得分和判分总数仍对应旧列表，直到下一次 `submit` 或 `restart`。
    pub fn ingest(&self, questions: Vec<Question>) {
        let count = questions.len();
        let notified = self.state.update(|state| {
            let mut changes = StateChanges::default();
            if state.questions != questions {
                state.questions = questions;
                changes.questions = true;
            }
            let clamped = state.current_index.min(state.questions.len().saturating_sub(1));
            if clamped != state.current_index {
                state.current_index = clamped;
                changes.current_index = true;
            }
            state.commit(changes)
        });

        if notified {
            info!("📥 载入题目: {} 个", count);
        } else {
            debug!("题目列表未变化，跳过载入");
        }
    }

    /// 记录单值答案（判断题、单选题、问答题）
    ///
    /// 不校验答案是否在选项中，错误答案只影响判分。
    pub fn record_single_answer(
        &self,
        id: QuestionId,
        value: impl Into<String>,
    ) -> Result<(), QuizError> {
        let value = value.into();
        let mut outcome = Ok(());

        self.state.update(|state| {
            if let Err(e) = self.check_known(state, id) {
                outcome = Err(e);
                return false;
            }
            debug!("题目 {} 作答: {:?}", id, truncate_text(&value, 40));
            let changed = state.answers.set_single(id, value);
            changed && state.commit(StateChanges::answers())
        });

        outcome
    }

    /// 切换多选答案中的某个选项：没选则加上，已选则去掉
    pub fn toggle_multi_answer(
        &self,
        id: QuestionId,
        option: impl Into<String>,
    ) -> Result<(), QuizError> {
        let option = option.into();
        let mut outcome = Ok(());

        self.state.update(|state| {
            if let Err(e) = self.check_known(state, id) {
                outcome = Err(e);
                return false;
            }
            debug!("题目 {} 切换选项: {:?}", id, option);
            match state.answers.toggle(id, option) {
                Ok(()) => state.commit(StateChanges::answers()),
                Err(e) => {
                    warn!("⚠️ {}", e);
                    outcome = Err(e);
                    false
                }
            }
        });

        outcome
    }

    /// 前往下一题
    ///
    /// # 返回
    /// 返回索引是否发生变化；已在最后一题、题目为空或已判分时返回 `false`
    pub fn advance(&self) -> bool {
        self.state.update(|state| {
            if state.score.is_some() {
                debug!("已判分，忽略导航");
                return false;
            }
            if state.current_index + 1 >= state.questions.len() {
                return false;
            }
            state.current_index += 1;
            state.commit(StateChanges::current_index())
        })
    }

    /// 返回上一题
    ///
    /// # 返回
    /// 返回索引是否发生变化；已在第一题或已判分时返回 `false`
    pub fn retreat(&self) -> bool {
        self.state.update(|state| {
            if state.score.is_some() {
                debug!("已判分，忽略导航");
                return false;
            }
            if state.current_index == 0 {
                return false;
            }
            state.current_index -= 1;
            state.commit(StateChanges::current_index())
        })
    }

    /// 判分
    ///
    /// 得分为答对的题目数；题目列表为空时得 0。
    pub fn submit(&self) -> u32 {
        let mut result = QuizResult { score: 0, total: 0 };

        self.state.update(|state| {
            let score = grading::score(&state.questions, &state.answers);
            result = QuizResult {
                score,
                total: state.questions.len(),
            };
            let changes = StateChanges {
                score: state.score != Some(score) || state.graded_total != result.total,
                ..StateChanges::default()
            };
            state.score = Some(score);
            state.graded_total = result.total;
            state.commit(changes)
        });

        info!("📊 判分完成: {}", result);
        result.score
    }

    /// 重新开始：清空作答、回到第一题、清除得分，题目列表不变
    pub fn restart(&self) {
        self.state.update(|state| {
            let changes = StateChanges {
                questions: false,
                current_index: state.current_index != 0,
                answers: !state.answers.is_empty(),
                score: state.score.is_some(),
            };
            state.answers.clear();
            state.current_index = 0;
            state.score = None;
            state.graded_total = 0;
            state.commit(changes)
        });

        info!("🔄 测验已重置");
    }

    // ========== 查询 ==========

    pub fn questions(&self) -> Vec<Question> {
        self.state.read(|s| s.questions.clone())
    }

    pub fn answers(&self) -> Answers {
        self.state.read(|s| s.answers.clone())
    }

    pub fn current_index(&self) -> usize {
        self.state.read(|s| s.current_index)
    }

    pub fn score(&self) -> Option<u32> {
        self.state.read(|s| s.score)
    }

    /// 当前题目，题目列表为空时为 `None`
    pub fn current_question(&self) -> Option<Question> {
        self.state.read(|s| s.current_question().cloned())
    }

    pub fn question_count(&self) -> usize {
        self.state.read(QuizState::question_count)
    }

    pub fn phase(&self) -> QuizPhase {
        self.state.read(QuizState::phase)
    }

    /// 是否停在最后一题（界面据此把"下一题"换成"提交"）
    pub fn is_last_question(&self) -> bool {
        self.state.read(QuizState::is_last_question)
    }

    pub fn can_advance(&self) -> bool {
        self.state
            .read(|s| s.score.is_none() && s.current_index + 1 < s.questions.len())
    }

    pub fn can_retreat(&self) -> bool {
        self.state.read(|s| s.score.is_none() && s.current_index > 0)
    }

    pub fn answer_for(&self, id: QuestionId) -> Option<AnswerValue> {
        self.state.read(|s| s.answers.get(id).cloned())
    }

    /// 判分结果，尚未判分时为 `None`
    pub fn result(&self) -> Option<QuizResult> {
        self.state.read(QuizState::result)
    }

    /// 获取完整状态快照
    pub fn snapshot(&self) -> QuizState {
        self.state.get()
    }

    /// 订阅状态变化
    pub fn subscribe(&self) -> watch::Receiver<QuizState> {
        self.state.subscribe()
    }

    fn check_known(&self, state: &QuizState, id: QuestionId) -> Result<(), QuizError> {
        if state.questions.iter().any(|q| q.id() == id) {
            return Ok(());
        }
        match self.policy {
            UnknownQuestionPolicy::Record => {
                debug!("题目 {} 不在当前列表中，仍然记录", id);
                Ok(())
            }
            UnknownQuestionPolicy::Reject => {
                warn!("⚠️ 拒绝未知题目 {} 的作答", id);
                Err(QuizError::UnknownQuestion { id })
            }
        }
    }
}

impl Default for QuizEngine {
    fn default() -> Self {
        Self::new()
    }
}
