//! 答题会话
//!
//! 封装"答到第几题、选了什么、结果是什么"这一状态。
//! 字段只能由 `QuizController` 修改，外部只读。

use serde::{Deserialize, Serialize};

use crate::models::{Answer, QuizResult};

/// 答题会话
///
/// 不变量：
/// - `0 <= current_index <= 题目总数`
/// - 完成前 `answers.len() == current_index`
/// - `is_completed` 当且仅当作答数等于题目总数（或从快照恢复）
/// - `result` 只在完成且提供过实际年龄时存在
#[derive(Debug, Clone, Default, PartialEq)]
pub struct Session {
    pub(crate) current_index: usize,
    pub(crate) answers: Vec<Answer>,
    pub(crate) real_age: Option<i32>,
    pub(crate) result: Option<QuizResult>,
    pub(crate) is_started: bool,
    pub(crate) is_completed: bool,
}

impl Session {
    pub fn current_index(&self) -> usize {
        self.current_index
    }

    pub fn answers(&self) -> &[Answer] {
        &self.answers
    }

    pub fn real_age(&self) -> Option<i32> {
        self.real_age
    }

    pub fn result(&self) -> Option<&QuizResult> {
        self.result.as_ref()
    }

    pub fn is_started(&self) -> bool {
        self.is_started
    }

    pub fn is_completed(&self) -> bool {
        self.is_completed
    }

    /// 从快照恢复：直接进入已完成状态，跳过答题过程
    pub(crate) fn restored(saved: SavedResult) -> Self {
        Self {
            real_age: Some(saved.real_age),
            result: Some(saved.result),
            is_started: true,
            is_completed: true,
            ..Self::default()
        }
    }
}

/// 持久化的结果快照
///
/// JSON 形如 `{"result": {...}, "realAge": 20}`。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SavedResult {
    pub result: QuizResult,
    pub real_age: i32,
}
