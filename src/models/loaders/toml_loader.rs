use crate::config::Config;
use crate::error::{AppResult, CatalogError};
use crate::models::locale::Locale;
use crate::models::question::QuestionCatalog;
use crate::services::scoring_service::ScoringScale;
use std::path::Path;
use tokio::fs;

/// 读取数据文件，区分"不存在"和其他读取错误
async fn read_data_file(path: &Path) -> Result<String, CatalogError> {
    let path_str = path.display().to_string();
    match fs::read_to_string(path).await {
        Ok(content) => Ok(content),
        Err(e) if e.kind() == std::io::ErrorKind::NotFound => {
            Err(CatalogError::NotFound { path: path_str })
        }
        Err(e) => Err(CatalogError::read_failed(path_str, e)),
    }
}

/// 从 TOML 文件加载题库并校验
pub async fn load_catalog(path: &Path) -> AppResult<QuestionCatalog> {
    let path_str = path.display().to_string();
    let content = read_data_file(path).await?;

    let catalog: QuestionCatalog = toml::from_str(&content)
        .map_err(|e| CatalogError::toml_parse_failed(&path_str, e))?;
    catalog.validate(&path_str)?;

    tracing::debug!("题库 {} 校验通过", path_str);
    Ok(catalog)
}

/// 按语言加载题库
///
/// 该语言没有题库文件时回退到英语题库。
///
/// # 返回
/// 实际加载的语言和题库
pub async fn load_catalog_for_locale(
    config: &Config,
    locale: Locale,
) -> AppResult<(Locale, QuestionCatalog)> {
    let path = config.catalog_path(locale);
    tracing::info!("正在加载题库: {}", path.display());

    match load_catalog(&path).await {
        Ok(catalog) => Ok((locale, catalog)),
        Err(crate::error::AppError::Catalog(CatalogError::NotFound { .. }))
            if locale != Locale::En =>
        {
            tracing::warn!("⚠️ 没有 {} 语言的题库，回退到英语题库", locale);
            let fallback = config.catalog_path(Locale::En);
            Ok((Locale::En, load_catalog(&fallback).await?))
        }
        Err(e) => Err(e),
    }
}

/// 从 TOML 文件加载评分表并校验
pub async fn load_scale(path: &Path) -> AppResult<ScoringScale> {
    let path_str = path.display().to_string();
    let content = read_data_file(path).await?;

    let scale: ScoringScale = toml::from_str(&content)
        .map_err(|e| CatalogError::toml_parse_failed(&path_str, e))?;
    scale.validate()?;

    tracing::info!("已加载评分表: {} ({} 个年龄段)", path_str, scale.bands.len());
    Ok(scale)
}
