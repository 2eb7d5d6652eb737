use crate::adapters::{ConsoleLogger, EnvironmentLogger, FileLogger};
use crate::core::pipeline::{Transform, TransformKind, TransformingLogger};
use crate::domain::model::{Background, Color, Effect, Environment, Style};
use crate::domain::ports::Logger;
use crate::utils::error::{LogError, Result};
use crate::utils::validation::{self, Validate};
use regex::Regex;
use serde::{Deserialize, Serialize};
use std::path::Path;
use std::sync::OnceLock;

pub type BoxedLogger = Box<dyn Logger + Send + Sync>;

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct LoggerConfig {
    #[serde(default)]
    pub sink: SinkConfig,
    pub style: Option<StyleConfig>,
    pub environment: Option<String>,
    pub transforms: Option<Vec<String>>,
    pub diagnostics: Option<DiagnosticsConfig>,
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum SinkKind {
    #[default]
    Console,
    File,
    Environment,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct SinkConfig {
    #[serde(default)]
    pub kind: SinkKind,
    pub path: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct StyleConfig {
    pub color: Option<String>,
    pub background: Option<String>,
    pub effect: Option<String>,
}

#[derive(Debug, Clone, Default, Serialize, Deserialize)]
pub struct DiagnosticsConfig {
    pub verbose: Option<bool>,
    pub format: Option<String>,
}

fn env_var_pattern() -> &'static Regex {
    static PATTERN: OnceLock<Regex> = OnceLock::new();
    PATTERN.get_or_init(|| Regex::new(r"\$\{([^}]+)\}").expect("env var pattern is a valid regex"))
}

impl StyleConfig {
    pub fn to_style(&self) -> Result<Style> {
        Ok(Style {
            color: self.color.as_deref().map(str::parse::<Color>).transpose()?,
            background: self
                .background
                .as_deref()
                .map(str::parse::<Background>)
                .transpose()?,
            effect: self.effect.as_deref().map(str::parse::<Effect>).transpose()?,
        })
    }
}

impl LoggerConfig {
    /// 從 TOML 檔案載入配置
    pub fn from_file<P: AsRef<Path>>(path: P) -> Result<Self> {
        tracing::debug!("Loading logger configuration from {}", path.as_ref().display());
        let content = std::fs::read_to_string(&path).map_err(LogError::IoError)?;
        Self::from_toml_str(&content)
    }

    /// 從 TOML 字串解析配置
    pub fn from_toml_str(content: &str) -> Result<Self> {
        // 處理環境變數替換
        let processed_content = Self::substitute_env_vars(content);

        toml::from_str(&processed_content).map_err(|e| LogError::ConfigValidationError {
            field: "toml_parsing".to_string(),
            message: format!("TOML parsing error: {}", e),
        })
    }

    /// 替換環境變數 (例如 ${LOG_DIR})，未定義的變數保持原樣
    fn substitute_env_vars(content: &str) -> String {
        env_var_pattern()
            .replace_all(content, |caps: &regex::Captures| {
                let var_name = &caps[1];
                std::env::var(var_name).unwrap_or_else(|_| format!("${{{}}}", var_name))
            })
            .into_owned()
    }

    /// 取得樣式；未設定時為無樣式
    pub fn style(&self) -> Result<Style> {
        self.style
            .as_ref()
            .map(StyleConfig::to_style)
            .transpose()
            .map(Option::unwrap_or_default)
    }

    /// 取得執行環境；未設定時讀取 APP_ENVIRONMENT
    pub fn environment(&self) -> Result<Environment> {
        match &self.environment {
            Some(name) => name.parse(),
            None => Ok(crate::adapters::environment::environment_from_env()),
        }
    }

    pub fn transform_kinds(&self) -> Result<Vec<TransformKind>> {
        self.transforms
            .iter()
            .flatten()
            .map(|name| name.parse::<TransformKind>())
            .collect()
    }

    pub fn verbose(&self) -> bool {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.verbose)
            .unwrap_or(false)
    }

    pub fn json_diagnostics(&self) -> bool {
        self.diagnostics
            .as_ref()
            .and_then(|d| d.format.as_deref())
            .map(|format| format.eq_ignore_ascii_case("json"))
            .unwrap_or(false)
    }

    /// Configured transforms followed by the style, in that order.
    fn message_transform(&self, include_style: bool) -> Result<Transform> {
        let mut transform = Transform::identity();
        for kind in self.transform_kinds()? {
            transform = transform.then(kind);
        }

        if include_style {
            let style = self.style()?;
            if !style.is_plain() {
                transform = transform.then(move |message: &str| style.paint(message));
            }
        }

        Ok(transform)
    }

    /// Wraps an arbitrary sink with this configuration's transforms and style.
    pub fn build_with_sink<L>(&self, sink: L) -> Result<BoxedLogger>
    where
        L: Logger + Send + Sync + 'static,
    {
        self.validate()?;
        let transform = self.message_transform(true)?;
        Ok(Self::wrap(sink, transform))
    }

    /// 依配置建立 logger
    pub fn build(&self) -> Result<BoxedLogger> {
        self.validate()?;

        let logger = match self.sink.kind {
            SinkKind::Console => {
                let transform = self.message_transform(false)?;
                Self::wrap(ConsoleLogger::with_style(self.style()?), transform)
            }
            SinkKind::File => {
                let path = validation::validate_required_field("sink.path", &self.sink.path)?;
                Self::wrap(FileLogger::new(path), self.message_transform(true)?)
            }
            SinkKind::Environment => Self::wrap(
                EnvironmentLogger::new(self.environment()?),
                self.message_transform(true)?,
            ),
        };

        tracing::debug!("Built {:?} logger", self.sink.kind);
        Ok(logger)
    }

    fn wrap<L>(sink: L, transform: Transform) -> BoxedLogger
    where
        L: Logger + Send + Sync + 'static,
    {
        if transform.is_empty() {
            Box::new(sink)
        } else {
            Box::new(TransformingLogger::new(sink, transform))
        }
    }

    /// 驗證配置的合理性
    pub fn validate_config(&self) -> Result<()> {
        if self.sink.kind == SinkKind::File {
            let path = validation::validate_required_field("sink.path", &self.sink.path)?;
            validation::validate_path("sink.path", path)?;
        }

        self.style()?;

        if let Some(environment) = &self.environment {
            validation::validate_one_of("environment", environment, &["production", "development"])?;
        }

        self.transform_kinds()?;

        if let Some(format) = self.diagnostics.as_ref().and_then(|d| d.format.as_deref()) {
            validation::validate_one_of("diagnostics.format", format, &["compact", "json"])?;
        }

        Ok(())
    }
}

impl Validate for LoggerConfig {
    fn validate(&self) -> Result<()> {
        self.validate_config()
    }
}
