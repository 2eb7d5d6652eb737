use crate::config::toml_config::{LoggerConfig, SinkKind, StyleConfig};
use crate::domain::model::{Background, Color, Effect, Emoji, Environment};
use crate::utils::error::Result;
use crate::utils::validation::{self, Validate};
use clap::{Parser, Subcommand};

/// `time` 指令模擬工作的上限（毫秒）
pub const MAX_SIMULATED_MILLIS: u64 = 60_000;

#[derive(Debug, Clone, Parser)]
#[command(name = "logsmith")]
#[command(about = "Transform messages and write them to the console, a file or an environment-aware sink")]
pub struct CliConfig {
    /// Path to a TOML logger configuration
    #[arg(short, long, global = true)]
    pub config: Option<String>,

    /// Where logged lines go (overrides the config file)
    #[arg(long, value_enum, global = true)]
    pub sink: Option<SinkKind>,

    /// Log file used by the file sink
    #[arg(long, global = true)]
    pub file: Option<String>,

    /// Environment for the environment sink (defaults to APP_ENVIRONMENT)
    #[arg(long, value_enum, global = true)]
    pub environment: Option<Environment>,

    /// Foreground color applied to every line
    #[arg(long, value_enum, global = true)]
    pub color: Option<Color>,

    /// Background color applied to every line
    #[arg(long, value_enum, global = true)]
    pub background: Option<Background>,

    /// Text effect applied to every line
    #[arg(long, value_enum, global = true)]
    pub effect: Option<Effect>,

    #[arg(short, long, global = true, help = "Enable verbose diagnostics on stderr")]
    pub verbose: bool,

    #[command(subcommand)]
    pub command: Command,
}

#[derive(Debug, Clone, Subcommand)]
pub enum Command {
    /// Log the message unchanged
    Log { message: String },
    /// Log as "<prefix>: <message>"
    Prefix { prefix: String, message: String },
    Upper { message: String },
    Leet { message: String },
    Reverse { message: String },
    /// Log the message in a single color
    Paint {
        #[arg(value_enum)]
        paint: Color,
        message: String,
    },
    /// Log with foreground, background and effect
    Style {
        #[arg(value_enum)]
        fg: Color,
        #[arg(value_enum)]
        bg: Background,
        #[arg(value_enum)]
        fx: Effect,
        message: String,
    },
    NoVowels { message: String },
    /// Translate a known phrase (en, es, fr)
    Translate { language: String, message: String },
    /// Green for positive, red for negative messages
    Sentiment { message: String },
    Timestamp { message: String },
    /// Re-emit a JSON document in compact form
    Json { payload: String },
    Details { message: String },
    Emoji {
        #[arg(value_enum)]
        emoji: Emoji,
        message: String,
    },
    /// Wrap the message in an inline-styled <span>
    Html { css: String, message: String },
    Category { category: String, message: String },
    /// Highlight palindromic words
    Palindromes {
        message: String,
        #[arg(long, value_enum, default_value = "yellow")]
        highlight: Color,
    },
    /// Log only the palindromic words
    PalindromeWords { message: String },
    Base64Encode { message: String },
    Base64Decode { message: String },
    Morse { message: String },
    PigLatin { message: String },
    Rot13 { message: String },
    Caesar {
        message: String,
        #[arg(long, default_value_t = 3, allow_hyphen_values = true)]
        shift: i32,
    },
    /// Count words (case-insensitive)
    Frequency { message: String },
    /// Group words by length, shuffled inside each group
    ScrambleLength { message: String },
    /// Shuffle inner letters of each word
    ScrambleChars { message: String },
    /// Reverse words longer than the threshold
    ReverseLong {
        message: String,
        #[arg(long, default_value_t = 5)]
        threshold: usize,
    },
    Synonyms { message: String },
    /// Sleep for the given time and log how long it took
    Time {
        #[arg(long, default_value_t = 150)]
        millis: u64,
    },
    /// Run through a showcase of the built-in loggers
    Demo,
}

impl CliConfig {
    /// 載入 TOML 配置 (若有) 並套用命令列覆蓋設定
    pub fn logger_config(&self) -> Result<LoggerConfig> {
        let mut config = match &self.config {
            Some(path) => LoggerConfig::from_file(path)?,
            None => LoggerConfig::default(),
        };

        if let Some(kind) = self.sink {
            config.sink.kind = kind;
        }
        if let Some(file) = &self.file {
            config.sink.path = Some(file.clone());
            // --file alone implies the file sink
            if self.sink.is_none() {
                config.sink.kind = SinkKind::File;
            }
        }
        if let Some(environment) = self.environment {
            config.environment = Some(environment_name(environment).to_string());
        }

        if self.color.is_some() || self.background.is_some() || self.effect.is_some() {
            let style = config.style.get_or_insert_with(StyleConfig::default);
            if let Some(color) = self.color {
                style.color = Some(color.name().to_string());
            }
            if let Some(background) = self.background {
                style.background = Some(background.name().to_string());
            }
            if let Some(effect) = self.effect {
                style.effect = Some(effect.name().to_string());
            }
        }

        config.validate()?;
        Ok(config)
    }
}

fn environment_name(environment: Environment) -> &'static str {
    match environment {
        Environment::Production => "production",
        Environment::Development => "development",
    }
}

impl Validate for CliConfig {
    fn validate(&self) -> Result<()> {
        if let Some(path) = &self.config {
            validation::validate_path("config", path)?;
        }
        if let Some(file) = &self.file {
            validation::validate_path("file", file)?;
        }

        match &self.command {
            Command::Translate { language, .. } => {
                validation::validate_non_empty_string("language", language)
            }
            Command::Category { category, .. } => {
                validation::validate_non_empty_string("category", category)
            }
            Command::Time { millis } => {
                validation::validate_range("millis", *millis, 0, MAX_SIMULATED_MILLIS)
            }
            _ => Ok(()),
        }
    }
}
