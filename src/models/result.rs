use serde::{Deserialize, Serialize};

use crate::models::question::CatalogTexts;

/// 心理年龄段
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeCategory {
    /// 童心未泯
    Child,
    /// 青春期
    Teen,
    /// 青年
    YoungAdult,
    /// 成年
    Adult,
    /// 老成持重
    Sage,
}

impl AgeCategory {
    /// 获取本地化名称
    pub fn label<'a>(&self, texts: &'a CatalogTexts) -> &'a str {
        match self {
            AgeCategory::Child => &texts.categories.child,
            AgeCategory::Teen => &texts.categories.teen,
            AgeCategory::YoungAdult => &texts.categories.young_adult,
            AgeCategory::Adult => &texts.categories.adult,
            AgeCategory::Sage => &texts.categories.sage,
        }
    }
}

/// 心理年龄与实际年龄的比较
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum AgeComparison {
    Younger,
    Same,
    Older,
}

/// 测试结果
///
/// 每个完成的会话只生成一次，生成后不再修改。
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct QuizResult {
    pub mental_age: u32,
    pub real_age: i32,
    /// 心理年龄 - 实际年龄
    pub age_gap: i32,
    pub category: AgeCategory,
    pub comparison: AgeComparison,
    pub total_score: u32,
    pub average_score: f64,
}

impl QuizResult {
    /// 结果页的描述文本
    pub fn describe(&self, texts: &CatalogTexts) -> String {
        let gap = self.age_gap.unsigned_abs().to_string();
        let headline = texts
            .result_headline
            .replace("{age}", &self.mental_age.to_string());
        let detail = match self.comparison {
            AgeComparison::Younger => texts.younger.replace("{gap}", &gap),
            AgeComparison::Same => texts.same.clone(),
            AgeComparison::Older => texts.older.replace("{gap}", &gap),
        };

        format!("{}\n[{}] {}", headline, self.category.label(texts), detail)
    }
}
