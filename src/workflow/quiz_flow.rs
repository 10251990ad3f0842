//! 答题流程 - 流程层
//!
//! 核心职责：推进一次答题会话
//!
//! 流程顺序：
//! 1. 启动时尝试从会话存储恢复已完成的结果
//! 2. start → set_real_age → submit_answer × N
//! 3. 最后一题提交后评分，并把结果快照写入会话存储
//! 4. reset 清空会话和快照
//!
//! 存储失败只记录日志，内存中的会话始终是唯一可信来源。

use tracing::{debug, info, warn};

use crate::error::StorageError;
use crate::models::{Answer, Question, QuestionCatalog};
use crate::services::scoring_service::{compute_result, ScoringScale};
use crate::services::SessionStore;
use crate::workflow::quiz_session::{SavedResult, Session};

/// 答题流程控制器
///
/// - 持有题库、评分表和会话存储
/// - 独占会话状态，只通过下面的方法修改
/// - 不做任何输入校验（年龄范围等由界面层负责）
pub struct QuizController<S: SessionStore> {
    catalog: QuestionCatalog,
    scale: ScoringScale,
    store: S,
    storage_key: String,
    session: Session,
}

impl<S: SessionStore> QuizController<S> {
    /// 创建控制器，并尝试一次从存储恢复
    ///
    /// 评分表未通过校验时记录警告并改用默认评分表。
    pub fn new(
        catalog: QuestionCatalog,
        scale: ScoringScale,
        store: S,
        storage_key: impl Into<String>,
    ) -> Self {
        let scale = match scale.validate() {
            Ok(()) => scale,
            Err(e) => {
                warn!("⚠️ 评分表无效，改用默认评分表: {}", e);
                ScoringScale::default()
            }
        };

        let mut controller = Self {
            catalog,
            scale,
            store,
            storage_key: storage_key.into(),
            session: Session::default(),
        };
        controller.restore();
        controller
    }

    /// 从存储恢复已完成的结果
    ///
    /// 快照损坏或读取失败时静默回退到新会话。
    fn restore(&mut self) {
        let saved = match self.store.get(&self.storage_key) {
            Ok(Some(saved)) => saved,
            Ok(None) => return,
            Err(e) => {
                warn!("⚠️ 读取会话快照失败，使用新会话: {}", e);
                return;
            }
        };

        match serde_json::from_str::<SavedResult>(&saved) {
            Ok(data) => {
                info!(
                    "♻️ 已恢复上次的结果: 心理年龄 {} (实际年龄 {})",
                    data.result.mental_age, data.real_age
                );
                self.session = Session::restored(data);
            }
            Err(e) => {
                warn!("⚠️ 会话快照已损坏，使用新会话: {}", e);
                if let Err(e) = self.store.remove(&self.storage_key) {
                    warn!("⚠️ 删除损坏的会话快照失败: {}", e);
                }
            }
        }
    }

    /// 标记会话已开始（幂等）
    pub fn start(&mut self) {
        self.session.is_started = true;
    }

    /// 记录实际年龄，原样保存
    pub fn set_real_age(&mut self, age: i32) {
        self.session.real_age = Some(age);
    }

    /// 提交当前题目的答案
    ///
    /// 没有当前题目（越界或已完成）时不做任何事。
    ///
    /// # 参数
    /// - `option_id`: 选中的选项ID
    /// - `score`: 选项的分数权重
    pub fn submit_answer(&mut self, option_id: &str, score: u32) {
        let Some(question_id) = self.current_question().map(|q| q.id.clone()) else {
            debug!("没有当前题目，忽略提交: {}", option_id);
            return;
        };

        self.session
            .answers
            .push(Answer::new(question_id, option_id, score));

        if self.session.current_index + 1 < self.total_questions() {
            self.session.current_index += 1;
            return;
        }

        self.session.is_completed = true;
        let Some(real_age) = self.session.real_age else {
            info!("✓ 全部题目已作答，但尚未提供实际年龄，暂不生成结果");
            return;
        };

        let result = compute_result(&self.session.answers, real_age, &self.scale);
        info!(
            "✓ 全部题目已作答: 心理年龄 {} / 实际年龄 {}",
            result.mental_age, real_age
        );
        self.persist(&SavedResult {
            result: result.clone(),
            real_age,
        });
        self.session.result = Some(result);
    }

    /// 按选项ID作答，分数从当前题目中查找
    ///
    /// # 返回
    /// 当前题目中不存在该选项（或没有当前题目）时返回 `false`
    pub fn select_option(&mut self, option_id: &str) -> bool {
        let score = self
            .current_question()
            .and_then(|q| q.option(option_id))
            .map(|o| o.score);

        match score {
            Some(score) => {
                self.submit_answer(option_id, score);
                true
            }
            None => false,
        }
    }

    /// 重置会话并删除快照（幂等）
    pub fn reset(&mut self) {
        self.session = Session::default();
        if let Err(e) = self.store.remove(&self.storage_key) {
            warn!("⚠️ 删除会话快照失败: {}", e);
        }
    }

    /// 写入结果快照，失败只记录日志
    fn persist(&self, saved: &SavedResult) {
        let outcome = serde_json::to_string(saved)
            .map_err(StorageError::from)
            .and_then(|serialized| self.store.set(&self.storage_key, &serialized));

        if let Err(e) = outcome {
            warn!("⚠️ 保存会话快照失败: {}", e);
        }
    }

    // ========== 派生状态 ==========

    /// 当前题目；越界或会话已完成时为 `None`
    pub fn current_question(&self) -> Option<&Question> {
        if self.session.is_completed {
            return None;
        }
        self.catalog.get(self.session.current_index)
    }

    /// 进度百分比：`round(current_index / total * 100)`
    ///
    /// 只统计已完成的题目：第一题时为 0，完成后也不会变成 100，
    /// 完成状态请看 `Session::is_completed`。
    pub fn progress(&self) -> u32 {
        let total = self.total_questions();
        if total == 0 {
            return 0;
        }
        (self.session.current_index as f64 / total as f64 * 100.0).round() as u32
    }

    pub fn total_questions(&self) -> usize {
        self.catalog.len()
    }

    pub fn session(&self) -> &Session {
        &self.session
    }

    pub fn catalog(&self) -> &QuestionCatalog {
        &self.catalog
    }

    pub fn store(&self) -> &S {
        &self.store
    }
}
