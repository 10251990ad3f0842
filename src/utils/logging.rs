//! 日志工具模块
//!
//! 提供日志格式化和输出的辅助函数

use tracing::info;

use crate::config::Config;
use crate::models::{Locale, QuizResult};

/// 记录程序启动信息
///
/// # 参数
/// - `config`: 程序配置
/// - `locale`: 解析后的语言
pub fn log_startup(config: &Config, locale: Locale) {
    info!("{}", "=".repeat(60));
    info!("🚀 {} - {}", locale.title(), locale.subtitle());
    info!(
        "启动时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("🌐 语言: {} | 📁 题库目录: {}", locale, config.data_folder);
    info!("💾 会话存储: {}", config.storage_folder);
    info!("{}", "=".repeat(60));
}

/// 记录题库加载信息
///
/// # 参数
/// - `locale`: 实际加载的语言
/// - `total`: 题目总数
pub fn log_catalog_loaded(locale: Locale, total: usize) {
    info!("✓ 已加载 {} 语言题库，共 {} 道题", locale, total);
}

/// 记录最终结果
///
/// # 参数
/// - `result`: 测试结果
pub fn log_result(result: &QuizResult) {
    info!("\n{}", "─".repeat(60));
    info!(
        "📊 心理年龄 {} | 实际年龄 {} | 差值 {:+}",
        result.mental_age, result.real_age, result.age_gap
    );
    info!(
        "总分 {} | 平均分 {:.2} | 年龄段 {:?}",
        result.total_score, result.average_score, result.category
    );
    info!(
        "完成时间: {}",
        chrono::Local::now().format("%Y-%m-%d %H:%M:%S")
    );
    info!("{}", "─".repeat(60));
}

/// 截断长文本用于日志显示
///
/// # 参数
/// - `text`: 原始文本
/// - `max_len`: 最大长度
///
/// # 返回
/// 返回截断后的文本
pub fn truncate_text(text: &str, max_len: usize) -> String {
    if text.chars().count() > max_len {
        text.chars().take(max_len).collect::<String>() + "..."
    } else {
        text.to_string()
    }
}
