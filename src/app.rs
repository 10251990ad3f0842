use crate::config::Config;
use crate::models::{load_catalog_for_locale, load_scale, Locale, Question};
use crate::services::{FileSessionStore, ScoringScale, SessionStore};
use crate::utils::logging::{log_catalog_loaded, log_result, log_startup};
use crate::utils::truncate_text;
use crate::workflow::QuizController;
use anyhow::Result;
use regex::Regex;
use std::path::Path;
use std::sync::OnceLock;
use tokio::io::{AsyncBufRead, AsyncBufReadExt, AsyncWrite, AsyncWriteExt, BufReader};
use tracing::{debug, info};

/// 界面层允许的年龄范围
const MIN_AGE: i32 = 1;
const MAX_AGE: i32 = 120;

/// 应用主结构（终端界面）
///
/// 只负责输入输出和年龄校验，答题状态全部交给 `QuizController`。
pub struct App<S: SessionStore = FileSessionStore> {
    locale: Locale,
    controller: QuizController<S>,
}

impl App<FileSessionStore> {
    /// 初始化应用
    pub async fn initialize(config: Config) -> Result<Self> {
        let requested = Locale::resolve(&config.locale);
        log_startup(&config, requested);

        let (locale, catalog) = load_catalog_for_locale(&config, requested).await?;
        log_catalog_loaded(locale, catalog.len());

        let scale = match &config.scale_file {
            Some(path) => load_scale(Path::new(path)).await?,
            None => ScoringScale::default(),
        };

        let store = FileSessionStore::new(&config.storage_folder);
        let controller = QuizController::new(catalog, scale, store, config.storage_key.clone());

        Ok(Self { locale, controller })
    }

    /// 使用标准输入输出运行
    pub async fn run(&mut self) -> Result<()> {
        let stdin = BufReader::new(tokio::io::stdin());
        let stdout = tokio::io::stdout();
        self.run_with(stdin, stdout).await
    }
}

impl<S: SessionStore> App<S> {
    /// 使用已有的控制器创建
    pub fn with_controller(locale: Locale, controller: QuizController<S>) -> Self {
        Self { locale, controller }
    }

    pub fn controller(&self) -> &QuizController<S> {
        &self.controller
    }

    /// 运行应用主逻辑
    ///
    /// 输入结束（EOF）时正常返回。
    pub async fn run_with<R, W>(&mut self, input: R, mut output: W) -> Result<()>
    where
        R: AsyncBufRead + Unpin,
        W: AsyncWrite + Unpin,
    {
        let mut lines = input.lines();
        let texts = self.controller.catalog().texts.clone();

        say(
            &mut output,
            &format!("{}\n{}\n", self.locale.title(), self.locale.subtitle()),
        )
        .await?;

        loop {
            if !self.controller.session().is_completed() {
                // ========== 年龄 ==========
                let age = loop {
                    say(&mut output, &texts.age_prompt).await?;
                    let Some(line) = lines.next_line().await? else {
                        return Ok(());
                    };
                    match parse_age(&line) {
                        Some(age) => break age,
                        None => say(&mut output, &texts.invalid_age).await?,
                    }
                };
                self.controller.set_real_age(age);
                self.controller.start();

                // ========== 答题 ==========
                while let Some(question) = self.controller.current_question().cloned() {
                    say(&mut output, &self.render_question(&question)).await?;
                    let Some(line) = lines.next_line().await? else {
                        return Ok(());
                    };

                    let selected = parse_choice(&line, &question)
                        .map(|option_id| self.controller.select_option(&option_id))
                        .unwrap_or(false);
                    if !selected {
                        say(&mut output, &texts.invalid_option).await?;
                    }
                }
            }

            // ========== 结果 ==========
            match self.controller.session().result() {
                Some(result) => {
                    log_result(result);
                    say(&mut output, &result.describe(&texts)).await?;
                }
                None => say(&mut output, &texts.missing_age).await?,
            }

            say(&mut output, &texts.restart_prompt).await?;
            let Some(line) = lines.next_line().await? else {
                return Ok(());
            };
            if !is_yes(&line) {
                return Ok(());
            }

            info!("🔄 重新开始测试");
            self.controller.reset();
        }
    }

    fn render_question(&self, question: &Question) -> String {
        debug!(
            "显示题目 {}: {}",
            question.id,
            truncate_text(&question.text, 40)
        );

        let mut text = format!(
            "\n[{}%] {}/{} {}\n",
            self.controller.progress(),
            self.controller.session().current_index() + 1,
            self.controller.total_questions(),
            question.text
        );
        for (i, option) in question.options.iter().enumerate() {
            text.push_str(&format!("  {}) {}\n", i + 1, option.text));
        }
        text.push_str(&self.controller.catalog().texts.option_prompt);
        text
    }
}

async fn say<W: AsyncWrite + Unpin>(output: &mut W, text: &str) -> std::io::Result<()> {
    output.write_all(text.as_bytes()).await?;
    output.write_all(b"\n").await?;
    output.flush().await
}

fn number_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| Regex::new(r"\d+").expect("固定的正则表达式"))
}

/// 从输入中提取年龄（如 "25"、"25세"、"I am 25"）
///
/// 只接受 1..=120，其余返回 `None`。
pub fn parse_age(input: &str) -> Option<i32> {
    let digits = number_regex().find(input)?;
    let age: i32 = digits.as_str().parse().ok()?;
    (MIN_AGE..=MAX_AGE).contains(&age).then_some(age)
}

/// 从输入中解析选项
///
/// 优先按选项ID精确匹配，否则取第一个数字作为从 1 开始的序号。
///
/// # 返回
/// 选中选项的ID
pub fn parse_choice(input: &str, question: &Question) -> Option<String> {
    let trimmed = input.trim();
    if let Some(option) = question.option(trimmed) {
        return Some(option.id.clone());
    }

    let digits = number_regex().find(trimmed)?;
    let index: usize = digits.as_str().parse().ok()?;
    question
        .options
        .get(index.checked_sub(1)?)
        .map(|o| o.id.clone())
}

fn is_yes(input: &str) -> bool {
    matches!(
        input.trim().to_lowercase().as_str(),
        "y"
            | "yes"
            | "예"
            | "네"
            | "是"
            | "はい"
            | "да"
            | "sí"
            | "si"
            | "oui"
            | "ja"
            | "sim"
            | "ya"
            | "có"
            | "evet"
    )
}
