use crate::core::{cipher, language, text};
use crate::domain::ports::Logger;
use crate::utils::error::LogError;
use std::future::Future;
use std::str::FromStr;
use std::time::Instant;

type TransformFn = dyn Fn(&str) -> String + Send + Sync;

/// A message rewrite step. Steps compose left to right with [`Transform::then`].
pub struct Transform {
    steps: Vec<Box<TransformFn>>,
}

impl Transform {
    pub fn identity() -> Self {
        Self { steps: Vec::new() }
    }

    pub fn new<F>(step: F) -> Self
    where
        F: Fn(&str) -> String + Send + Sync + 'static,
    {
        Self {
            steps: vec![Box::new(step)],
        }
    }

    pub fn then(mut self, next: impl Into<Transform>) -> Self {
        self.steps.extend(next.into().steps);
        self
    }

    pub fn apply(&self, message: &str) -> String {
        let mut current = message.to_string();
        for step in &self.steps {
            current = step(&current);
        }
        current
    }

    pub fn len(&self) -> usize {
        self.steps.len()
    }

    pub fn is_empty(&self) -> bool {
        self.steps.is_empty()
    }
}

impl Default for Transform {
    fn default() -> Self {
        Self::identity()
    }
}

impl std::fmt::Debug for Transform {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.debug_struct("Transform")
            .field("steps", &self.steps.len())
            .finish()
    }
}

/// Named, configurable rewrites usable from config files and the command line.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum TransformKind {
    Uppercase,
    Leet,
    Reverse,
    NoVowels,
    Rot13,
    Caesar(i32),
    Morse,
    PigLatin,
    Sentiment,
    Timestamp,
}

impl TransformKind {
    pub fn apply(self, message: &str) -> String {
        match self {
            TransformKind::Uppercase => text::uppercase(message),
            TransformKind::Leet => text::leet(message),
            TransformKind::Reverse => text::reverse(message),
            TransformKind::NoVowels => text::remove_vowels(message),
            TransformKind::Rot13 => cipher::rot13(message),
            TransformKind::Caesar(shift) => cipher::caesar(message, shift),
            TransformKind::Morse => cipher::morse(message),
            TransformKind::PigLatin => language::pig_latin(message),
            TransformKind::Sentiment => language::highlight_sentiment(message),
            TransformKind::Timestamp => text::with_timestamp(message),
        }
    }
}

impl FromStr for TransformKind {
    type Err = LogError;

    /// Accepts `upper`, `leet`, `reverse`, `no-vowels`, `rot13`, `caesar:<shift>`, `morse`,
    /// `pig-latin`, `sentiment` and `timestamp`.
    fn from_str(s: &str) -> Result<Self, Self::Err> {
        let normalized = s.trim().to_lowercase().replace('_', "-");
        let kind = match normalized.as_str() {
            "upper" | "uppercase" => TransformKind::Uppercase,
            "leet" => TransformKind::Leet,
            "reverse" => TransformKind::Reverse,
            "no-vowels" => TransformKind::NoVowels,
            "rot13" => TransformKind::Rot13,
            "morse" => TransformKind::Morse,
            "pig-latin" => TransformKind::PigLatin,
            "sentiment" => TransformKind::Sentiment,
            "timestamp" => TransformKind::Timestamp,
            other => match other.strip_prefix("caesar:") {
                Some(shift) => {
                    let shift = shift.trim().parse::<i32>().map_err(|e| {
                        LogError::InvalidConfigValueError {
                            field: "transform".to_string(),
                            value: s.to_string(),
                            reason: format!("Invalid Caesar shift: {}", e),
                        }
                    })?;
                    TransformKind::Caesar(shift)
                }
                None => {
                    return Err(LogError::InvalidConfigValueError {
                        field: "transform".to_string(),
                        value: s.to_string(),
                        reason: "Unknown transform".to_string(),
                    })
                }
            },
        };
        Ok(kind)
    }
}

impl From<TransformKind> for Transform {
    fn from(kind: TransformKind) -> Self {
        Transform::new(move |message| kind.apply(message))
    }
}

impl<F> From<F> for Transform
where
    F: Fn(&str) -> String + Send + Sync + 'static,
{
    fn from(step: F) -> Self {
        Transform::new(step)
    }
}

/// Rewrites every message before passing it on to the inner logger.
#[derive(Debug)]
pub struct TransformingLogger<L> {
    inner: L,
    transform: Transform,
}

impl<L: Logger> TransformingLogger<L> {
    pub fn new(inner: L, transform: impl Into<Transform>) -> Self {
        Self {
            inner,
            transform: transform.into(),
        }
    }

    pub fn inner(&self) -> &L {
        &self.inner
    }
}

impl<L: Logger> Logger for TransformingLogger<L> {
    fn log(&self, message: &str) {
        self.inner.log(&self.transform.apply(message));
    }
}

/// Drops messages for which the predicate returns false.
pub struct FilteredLogger<L, P> {
    inner: L,
    predicate: P,
}

impl<L, P> FilteredLogger<L, P>
where
    L: Logger,
    P: Fn(&str) -> bool,
{
    pub fn new(inner: L, predicate: P) -> Self {
        Self { inner, predicate }
    }
}

impl<L, P> Logger for FilteredLogger<L, P>
where
    L: Logger,
    P: Fn(&str) -> bool,
{
    fn log(&self, message: &str) {
        if (self.predicate)(message) {
            self.inner.log(message);
        } else {
            tracing::trace!("Message filtered out");
        }
    }
}

/// Awaits `work`, logs its wall-clock duration and returns its output.
pub async fn time_async<L, F>(logger: &L, work: F) -> F::Output
where
    L: Logger + ?Sized,
    F: Future,
{
    let start = Instant::now();
    let output = work.await;
    logger.log(&text::execution_time(start.elapsed()));
    output
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::memory::MemoryLogger;

    #[test]
    fn test_then_composes_left_to_right() {
        let chain = Transform::new(|m: &str| m.to_uppercase()).then(TransformKind::Leet);
        // Leet only rewrites lowercase letters, so uppercase first leaves nothing to swap.
        assert_eq!(chain.apply("Hello leetspeak"), "HELLO LEETSPEAK");

        let chain = Transform::from(TransformKind::Leet).then(|m: &str| m.to_uppercase());
        assert_eq!(chain.apply("Hello leetspeak"), "HELL0 LEET5PEAK");
        assert_eq!(chain.len(), 2);
    }

    #[test]
    fn test_identity_is_noop() {
        let identity = Transform::identity();
        assert!(identity.is_empty());
        assert_eq!(identity.apply("same"), "same");
    }

    #[test]
    fn test_transforming_logger() {
        let memory = MemoryLogger::new();
        let logger = TransformingLogger::new(memory.clone(), |m: &str| m.replace("Hello", "Hi"));

        logger.log("Hello world!");

        assert_eq!(memory.lines(), vec!["Hi world!".to_string()]);
    }

    #[test]
    fn test_filtered_logger() {
        let memory = MemoryLogger::new();
        let logger = FilteredLogger::new(memory.clone(), |m: &str| !m.contains("error"));

        logger.log("This is a normal message.");
        logger.log("an error occurred");
        logger.log_with_prefix("WARN", "disk error");

        assert_eq!(memory.lines(), vec!["This is a normal message.".to_string()]);
    }

    #[test]
    fn test_transform_kinds() {
        assert_eq!(TransformKind::Caesar(3).apply("abc"), "def");
        assert_eq!(TransformKind::Morse.apply("sos"), "... --- ...");
        assert_eq!(TransformKind::NoVowels.apply("queue"), "q");
    }

    #[test]
    fn test_parse_transform_kinds() {
        assert_eq!("Upper".parse::<TransformKind>().unwrap(), TransformKind::Uppercase);
        assert_eq!("pig_latin".parse::<TransformKind>().unwrap(), TransformKind::PigLatin);
        assert_eq!("caesar:-3".parse::<TransformKind>().unwrap(), TransformKind::Caesar(-3));
        assert!("caesar:x".parse::<TransformKind>().is_err());
        assert!("shout".parse::<TransformKind>().is_err());
    }

    #[tokio::test]
    async fn test_time_async() {
        let memory = MemoryLogger::new();

        let value = time_async(&memory, async {
            tokio::time::sleep(std::time::Duration::from_millis(20)).await;
            "done"
        })
        .await;

        assert_eq!(value, "done");
        let lines = memory.lines();
        assert_eq!(lines.len(), 1);
        let millis: u128 = lines[0]
            .trim_start_matches("Execution took ")
            .trim_end_matches("ms.")
            .parse()
            .unwrap();
        assert!(millis >= 20);
    }
}
