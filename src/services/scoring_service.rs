//! 评分服务 - 业务能力层
//!
//! 只负责"答案 + 实际年龄 → 测试结果"的计算，不关心流程。
//!
//! 评分表（`ScoringScale`）是数据而不是逻辑：可以从 TOML 文件替换，
//! 计算函数本身不需要改动。

use serde::{Deserialize, Serialize};

use crate::error::ScaleError;
use crate::models::{AgeCategory, AgeComparison, Answer, QuizResult};

/// 一个年龄段
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct AgeBand {
    pub category: AgeCategory,
    /// 平均分上界（不含）；最后一个年龄段以 `max_score` 为上界
    pub up_to: f64,
    pub min_age: u32,
    pub max_age: u32,
}

/// 评分表
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct ScoringScale {
    /// 单题最低分
    pub min_score: f64,
    /// 单题最高分
    pub max_score: f64,
    /// 年龄差在此范围内视为"一致"
    #[serde(default = "default_tolerance")]
    pub same_age_tolerance: u32,
    pub bands: Vec<AgeBand>,
}

fn default_tolerance() -> u32 {
    2
}

impl Default for ScoringScale {
    fn default() -> Self {
        Self {
            min_score: 1.0,
            max_score: 5.0,
            same_age_tolerance: default_tolerance(),
            bands: vec![
                AgeBand {
                    category: AgeCategory::Child,
                    up_to: 1.8,
                    min_age: 6,
                    max_age: 12,
                },
                AgeBand {
                    category: AgeCategory::Teen,
                    up_to: 2.6,
                    min_age: 13,
                    max_age: 19,
                },
                AgeBand {
                    category: AgeCategory::YoungAdult,
                    up_to: 3.4,
                    min_age: 20,
                    max_age: 29,
                },
                AgeBand {
                    category: AgeCategory::Adult,
                    up_to: 4.2,
                    min_age: 30,
                    max_age: 44,
                },
                AgeBand {
                    category: AgeCategory::Sage,
                    up_to: 5.0,
                    min_age: 45,
                    max_age: 70,
                },
            ],
        }
    }
}

impl ScoringScale {
    /// 校验评分表
    ///
    /// - 至少一个年龄段
    /// - `min_score < max_score`
    /// - 年龄段上界严格递增，且位于 `(min_score, max_score]`
    /// - 每个年龄段 `min_age <= max_age`
    pub fn validate(&self) -> Result<(), ScaleError> {
        if self.bands.is_empty() {
            return Err(ScaleError::NoBands);
        }
        if !(self.min_score < self.max_score) {
            return Err(ScaleError::InvalidScoreRange {
                min: self.min_score,
                max: self.max_score,
            });
        }

        let mut lower = self.min_score;
        for (index, band) in self.bands.iter().enumerate() {
            if !(band.up_to > lower) || band.up_to > self.max_score {
                return Err(ScaleError::UnorderedBands { index });
            }
            if band.min_age > band.max_age {
                return Err(ScaleError::InvalidAgeRange {
                    index,
                    min_age: band.min_age,
                    max_age: band.max_age,
                });
            }
            lower = band.up_to;
        }

        Ok(())
    }

    /// 找到平均分所在的年龄段及其分数区间 `[lower, upper]`
    ///
    /// 没有任何年龄段时返回 `None`。
    fn locate(&self, average: f64) -> Option<(&AgeBand, f64, f64)> {
        let (last, rest) = self.bands.split_last()?;
        let mut lower = self.min_score;
        for band in rest {
            if average < band.up_to {
                return Some((band, lower, band.up_to));
            }
            lower = band.up_to;
        }
        Some((last, lower, self.max_score))
    }
}

/// 计算测试结果
///
/// 纯函数：相同的 `(answers, real_age, scale)` 总是得到相同的结果。
/// 答案数量是否等于题目数量由调用方保证。
///
/// # 参数
/// - `answers`: 全部作答记录
/// - `real_age`: 实际年龄（原样记录，不做校验）
/// - `scale`: 评分表；分数区间无效或没有年龄段时改用默认评分表，
///   倒置的年龄范围按下限计算
///
/// # 返回
/// 心理年龄、年龄段和与实际年龄的比较
pub fn compute_result(answers: &[Answer], real_age: i32, scale: &ScoringScale) -> QuizResult {
    if !(scale.min_score <= scale.max_score) {
        return compute_result(answers, real_age, &ScoringScale::default());
    }

    let total_score: u32 = answers.iter().map(|a| a.score).sum();
    let average_score = if answers.is_empty() {
        scale.min_score
    } else {
        f64::from(total_score) / answers.len() as f64
    };

    let clamped = average_score.clamp(scale.min_score, scale.max_score);
    let Some((band, lower, upper)) = scale.locate(clamped) else {
        return compute_result(answers, real_age, &ScoringScale::default());
    };

    let position = if upper > lower {
        ((clamped - lower) / (upper - lower)).clamp(0.0, 1.0)
    } else {
        0.0
    };
    let span = f64::from(band.max_age.saturating_sub(band.min_age));
    let mental_age = band.min_age.saturating_add((position * span).round() as u32);

    // real_age 不做校验，极端值下差值饱和而不是溢出
    let age_gap = i32::try_from(mental_age)
        .unwrap_or(i32::MAX)
        .saturating_sub(real_age);
    let comparison = if age_gap.unsigned_abs() <= scale.same_age_tolerance {
        AgeComparison::Same
    } else if age_gap < 0 {
        AgeComparison::Younger
    } else {
        AgeComparison::Older
    };

    QuizResult {
        mental_age,
        real_age,
        age_gap,
        category: band.category,
        comparison,
        total_score,
        average_score,
    }
}
