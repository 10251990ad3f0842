use std::collections::HashSet;

use serde::{Deserialize, Serialize};

use crate::error::CatalogError;

/// 单个选项
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuizOption {
    /// 选项ID（在所属题目内唯一）
    pub id: String,
    pub text: String,
    /// 分数权重
    pub score: u32,
}

/// 题目
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Question {
    /// 题目ID（在题库内唯一）
    pub id: String,
    pub text: String,
    pub options: Vec<QuizOption>,
}

impl Question {
    /// 按 ID 查找选项
    pub fn option(&self, option_id: &str) -> Option<&QuizOption> {
        self.options.iter().find(|o| o.id == option_id)
    }
}

/// 终端界面使用的本地化文本
///
/// 题库文件中的 `[texts]` 段，缺省字段回退到英文。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CatalogTexts {
    pub age_prompt: String,
    pub invalid_age: String,
    pub option_prompt: String,
    pub invalid_option: String,
    /// `{age}` 会被替换为心理年龄
    pub result_headline: String,
    /// `{gap}` 会被替换为年龄差的绝对值
    pub younger: String,
    pub same: String,
    pub older: String,
    pub missing_age: String,
    pub restart_prompt: String,
    pub categories: CategoryLabels,
}

/// 年龄段名称
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(default)]
pub struct CategoryLabels {
    pub child: String,
    pub teen: String,
    pub young_adult: String,
    pub adult: String,
    pub sage: String,
}

impl Default for CatalogTexts {
    fn default() -> Self {
        Self {
            age_prompt: "How old are you?".to_string(),
            invalid_age: "Please enter an age between 1 and 120.".to_string(),
            option_prompt: "Choose an option".to_string(),
            invalid_option: "Please pick one of the listed numbers.".to_string(),
            result_headline: "Your mental age is {age}!".to_string(),
            younger: "You are {gap} years younger at heart.".to_string(),
            same: "Your mind matches your age.".to_string(),
            older: "You are {gap} years older at heart.".to_string(),
            missing_age: "We need your real age before we can show a result.".to_string(),
            restart_prompt: "Take the test again? (y/n)".to_string(),
            categories: CategoryLabels::default(),
        }
    }
}

impl Default for CategoryLabels {
    fn default() -> Self {
        Self {
            child: "Playful Child".to_string(),
            teen: "Free-spirited Teen".to_string(),
            young_adult: "Energetic Young Adult".to_string(),
            adult: "Steady Adult".to_string(),
            sage: "Wise Sage".to_string(),
        }
    }
}

/// 题库
///
/// 启动时加载一次，之后只读。
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct QuestionCatalog {
    pub questions: Vec<Question>,
    #[serde(default)]
    pub texts: CatalogTexts,
}

impl QuestionCatalog {
    pub fn new(questions: Vec<Question>) -> Self {
        Self {
            questions,
            texts: CatalogTexts::default(),
        }
    }

    pub fn len(&self) -> usize {
        self.questions.len()
    }

    pub fn is_empty(&self) -> bool {
        self.questions.is_empty()
    }

    pub fn get(&self, index: usize) -> Option<&Question> {
        self.questions.get(index)
    }

    /// 校验题库结构
    ///
    /// - 至少一道题
    /// - 题目ID唯一
    /// - 每道题至少一个选项，且选项ID在题内唯一
    pub fn validate(&self, path: &str) -> Result<(), CatalogError> {
        if self.questions.is_empty() {
            return Err(CatalogError::Empty {
                path: path.to_string(),
            });
        }

        let mut question_ids = HashSet::new();
        for question in &self.questions {
            if !question_ids.insert(question.id.as_str()) {
                return Err(CatalogError::DuplicateQuestionId {
                    id: question.id.clone(),
                });
            }

            if question.options.is_empty() {
                return Err(CatalogError::NoOptions {
                    question_id: question.id.clone(),
                });
            }

            let mut option_ids = HashSet::new();
            for option in &question.options {
                if !option_ids.insert(option.id.as_str()) {
                    return Err(CatalogError::DuplicateOptionId {
                        question_id: question.id.clone(),
                        option_id: option.id.clone(),
                    });
                }
            }
        }

        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn question(id: &str, option_ids: &[&str]) -> Question {
        Question {
            id: id.to_string(),
            text: format!("题目 {}", id),
            options: option_ids
                .iter()
                .enumerate()
                .map(|(i, o)| QuizOption {
                    id: o.to_string(),
                    text: o.to_string(),
                    score: i as u32 + 1,
                })
                .collect(),
        }
    }

    #[test]
    fn test_validate_accepts_well_formed_catalog() {
        let catalog = QuestionCatalog::new(vec![
            question("q1", &["a", "b"]),
            question("q2", &["a", "b"]),
        ]);
        assert!(catalog.validate("mem").is_ok());
    }

    #[test]
    fn test_validate_rejects_empty_catalog() {
        let catalog = QuestionCatalog::new(Vec::new());
        assert!(matches!(
            catalog.validate("mem"),
            Err(CatalogError::Empty { .. })
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_question_id() {
        let catalog =
            QuestionCatalog::new(vec![question("q1", &["a"]), question("q1", &["b"])]);
        assert!(matches!(
            catalog.validate("mem"),
            Err(CatalogError::DuplicateQuestionId { id }) if id == "q1"
        ));
    }

    #[test]
    fn test_validate_rejects_duplicate_option_id() {
        let catalog = QuestionCatalog::new(vec![question("q1", &["a", "a"])]);
        assert!(matches!(
            catalog.validate("mem"),
            Err(CatalogError::DuplicateOptionId { option_id, .. }) if option_id == "a"
        ));
    }

    #[test]
    fn test_validate_rejects_question_without_options() {
        let catalog = QuestionCatalog::new(vec![question("q1", &[])]);
        assert!(matches!(
            catalog.validate("mem"),
            Err(CatalogError::NoOptions { .. })
        ));
    }

    #[test]
    fn test_option_lookup() {
        let q = question("q1", &["a", "b"]);
        assert_eq!(q.option("b").map(|o| o.score), Some(2));
        assert!(q.option("z").is_none());
    }
}
