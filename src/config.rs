use std::path::PathBuf;

use crate::models::Locale;

/// 程序配置
#[derive(Clone, Debug)]
pub struct Config {
    /// 界面与题库语言代码
    pub locale: String,
    /// 题库 TOML 文件存放目录
    pub data_folder: String,
    /// 自定义评分表文件（为空时使用内置评分表）
    pub scale_file: Option<String>,
    /// 会话存储目录
    pub storage_folder: String,
    /// 结果快照的存储键
    pub storage_key: String,
    /// 是否显示详细日志
    pub verbose_logging: bool,
}

impl Default for Config {
    fn default() -> Self {
        Self {
            locale: "en".to_string(),
            data_folder: "data".to_string(),
            scale_file: None,
            storage_folder: std::env::temp_dir()
                .join("mental-age-test")
                .to_string_lossy()
                .to_string(),
            storage_key: "mentalage-result".to_string(),
            verbose_logging: false,
        }
    }
}

impl Config {
    pub fn from_env() -> Self {
        let default = Self::default();
        Self {
            locale: std::env::var("MENTAL_AGE_LOCALE").unwrap_or(default.locale),
            data_folder: std::env::var("MENTAL_AGE_DATA_FOLDER").unwrap_or(default.data_folder),
            scale_file: std::env::var("MENTAL_AGE_SCALE_FILE")
                .ok()
                .filter(|v| !v.is_empty())
                .or(default.scale_file),
            storage_folder: std::env::var("MENTAL_AGE_STORAGE_FOLDER")
                .unwrap_or(default.storage_folder),
            storage_key: std::env::var("MENTAL_AGE_STORAGE_KEY").unwrap_or(default.storage_key),
            verbose_logging: std::env::var("VERBOSE_LOGGING")
                .ok()
                .and_then(|v| v.parse().ok())
                .unwrap_or(default.verbose_logging),
        }
    }

    /// 指定语言的题库文件路径：`<data_folder>/questions.<code>.toml`
    pub fn catalog_path(&self, locale: Locale) -> PathBuf {
        PathBuf::from(&self.data_folder).join(format!("questions.{}.toml", locale.code()))
    }
}
