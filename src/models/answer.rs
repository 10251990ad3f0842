use serde::{Deserialize, Serialize};

/// 一次作答记录
///
/// 分数在选择时记录，之后题库变化不会影响已作答的分数。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct Answer {
    pub question_id: String,
    pub option_id: String,
    pub score: u32,
}

impl Answer {
    pub fn new(question_id: impl Into<String>, option_id: impl Into<String>, score: u32) -> Self {
        Self {
            question_id: question_id.into(),
            option_id: option_id.into(),
            score,
        }
    }
}
