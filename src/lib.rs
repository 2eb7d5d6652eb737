pub mod adapters;
pub mod app;
pub mod config;
pub mod core;
pub mod domain;
pub mod utils;

#[cfg(feature = "cli")]
pub use config::CliConfig;

pub use adapters::{caesar_logger, leet_logger, ConsoleLogger, EnvironmentLogger, FileLogger, MemoryLogger};
pub use config::toml_config::LoggerConfig;
pub use core::pipeline::{time_async, FilteredLogger, Transform, TransformKind, TransformingLogger};
pub use domain::model::{Background, Color, Effect, Emoji, Environment, Sentiment, Style, RESET};
pub use domain::ports::{from_fn, FnLogger, Logger};
pub use utils::error::{LogError, Result};
