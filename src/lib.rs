//! # Mental Age Test
//!
//! 心理年龄测试的答题核心：按顺序作答、评分、保存可分享的结果
//!
//! ## 架构设计
//!
//! 本系统采用分层架构：
//!
//! ### ① 数据层（Models）
//! - `models/` - 题库、作答记录、测试结果、语言
//! - `loaders` - 从 TOML 文件加载题库和评分表
//!
//! ### ② 业务能力层（Services）
//! - `services/` - 描述"我能做什么"，不关心流程
//! - `scoring_service` - 答案 + 实际年龄 → 心理年龄（纯函数）
//! - `SessionStore` - 会话级键值存储（内存 / 文件）
//!
//! ### ③ 流程层（Workflow）
//! - `workflow/` - 定义"一次答题"的完整状态流转
//! - `Session` - 会话状态（只读视图）
//! - `QuizController` - start / set_real_age / submit_answer / reset
//!
//! ### ④ 界面层（App）
//! - `app` - 终端界面，负责输入输出和年龄校验
//!
//! ## 模块结构

pub mod app;
pub mod config;
pub mod error;
pub mod logger;
pub mod models;
pub mod services;
pub mod utils;
pub mod workflow;

// 重新导出常用类型
pub use app::App;
pub use config::Config;
pub use error::{AppError, AppResult};
pub use models::{Answer, Locale, Question, QuestionCatalog, QuizOption, QuizResult};
pub use services::{
    compute_result, FileSessionStore, MemorySessionStore, ScoringScale, SessionStore,
};
pub use workflow::{QuizController, SavedResult, Session};
