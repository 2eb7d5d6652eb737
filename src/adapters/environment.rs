use crate::adapters::console::ConsoleLogger;
use crate::core::text;
use crate::domain::model::Environment;
use crate::domain::ports::Logger;

pub const ENVIRONMENT_VAR: &str = "APP_ENVIRONMENT";

/// Production lines get a terse `[INFO]` tag, everything else a `[DEV]` tag and
/// a timestamp.
#[derive(Debug, Clone)]
pub struct EnvironmentLogger<L = ConsoleLogger> {
    environment: Environment,
    inner: L,
}

impl EnvironmentLogger<ConsoleLogger> {
    pub fn new(environment: Environment) -> Self {
        Self::with_sink(environment, ConsoleLogger::new())
    }

    /// 依 APP_ENVIRONMENT 決定格式，未設定時視為 development
    pub fn from_env() -> Self {
        Self::new(environment_from_env())
    }
}

impl<L: Logger> EnvironmentLogger<L> {
    pub fn with_sink(environment: Environment, inner: L) -> Self {
        Self { environment, inner }
    }

    pub fn environment(&self) -> Environment {
        self.environment
    }

    pub fn format(&self, message: &str) -> String {
        match self.environment {
            Environment::Production => format!("[INFO] {}", message),
            Environment::Development => {
                format!("[DEV] {} - {}", text::current_timestamp(), message)
            }
        }
    }
}

impl<L: Logger> Logger for EnvironmentLogger<L> {
    fn log(&self, message: &str) {
        self.inner.log(&self.format(message));
    }
}

pub fn environment_from_env() -> Environment {
    std::env::var(ENVIRONMENT_VAR)
        .map(|value| Environment::from_name(&value))
        .unwrap_or_default()
}
