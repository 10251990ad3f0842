use thiserror::Error;

/// 应用程序错误类型
#[derive(Debug, Error)]
pub enum AppError {
    /// 题库相关错误
    #[error("题库错误: {0}")]
    Catalog(#[from] CatalogError),
    /// 会话存储错误
    #[error("存储错误: {0}")]
    Storage(#[from] StorageError),
    /// 评分表错误
    #[error("评分表错误: {0}")]
    Scale(#[from] ScaleError),
}

/// 题库（及评分表）数据文件的加载与校验错误
#[derive(Debug, Error)]
pub enum CatalogError {
    /// 题库文件不存在
    #[error("数据文件不存在: {path}")]
    NotFound { path: String },
    /// 读取文件失败
    #[error("读取数据文件失败 ({path}): {source}")]
    ReadFailed {
        path: String,
        #[source]
        source: std::io::Error,
    },
    /// TOML 解析失败
    #[error("TOML解析失败 ({path}): {source}")]
    TomlParseFailed {
        path: String,
        #[source]
        source: toml::de::Error,
    },
    /// 题库为空
    #[error("题库中没有任何题目: {path}")]
    Empty { path: String },
    /// 题目 ID 重复
    #[error("题目ID重复: {id}")]
    DuplicateQuestionId { id: String },
    /// 同一题目下选项 ID 重复
    #[error("题目 {question_id} 的选项ID重复: {option_id}")]
    DuplicateOptionId {
        question_id: String,
        option_id: String,
    },
    /// 题目没有选项
    #[error("题目 {question_id} 没有任何选项")]
    NoOptions { question_id: String },
}

/// 会话存储错误
#[derive(Debug, Error)]
pub enum StorageError {
    /// 读取失败
    #[error("读取存储项 {key} 失败: {source}")]
    ReadFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// 写入失败（配额不足、存储不可用等）
    #[error("写入存储项 {key} 失败: {source}")]
    WriteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// 删除失败
    #[error("删除存储项 {key} 失败: {source}")]
    DeleteFailed {
        key: String,
        #[source]
        source: std::io::Error,
    },
    /// 存储键不能作为文件名（含路径分隔符、为空或是 `.`/`..`）
    #[error("存储键无效: {key:?}")]
    InvalidKey { key: String },
    /// 快照序列化失败
    #[error("结果快照序列化失败: {0}")]
    SerializeFailed(#[from] serde_json::Error),
}

/// 评分表校验错误
#[derive(Debug, Error)]
pub enum ScaleError {
    /// 没有任何年龄段
    #[error("评分表至少需要一个年龄段")]
    NoBands,
    /// 分数区间无效
    #[error("分数区间无效: min={min}, max={max}")]
    InvalidScoreRange { min: f64, max: f64 },
    /// 年龄段上界未递增
    #[error("第 {index} 个年龄段的上界未按升序排列")]
    UnorderedBands { index: usize },
    /// 年龄段的年龄范围倒置
    #[error("第 {index} 个年龄段的年龄范围无效: {min_age} > {max_age}")]
    InvalidAgeRange {
        index: usize,
        min_age: u32,
        max_age: u32,
    },
}

// ========== 便捷构造函数 ==========

impl CatalogError {
    /// 创建文件读取错误
    pub fn read_failed(path: impl Into<String>, source: std::io::Error) -> Self {
        CatalogError::ReadFailed {
            path: path.into(),
            source,
        }
    }

    /// 创建 TOML 解析错误
    pub fn toml_parse_failed(path: impl Into<String>, source: toml::de::Error) -> Self {
        CatalogError::TomlParseFailed {
            path: path.into(),
            source,
        }
    }
}

// ========== Result 类型别名 ==========

/// 应用程序结果类型
pub type AppResult<T> = Result<T, AppError>;

/// 存储操作结果类型
pub type StorageResult<T> = Result<T, StorageError>;
