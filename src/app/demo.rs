use crate::core::pipeline::{FilteredLogger, Transform, TransformKind, TransformingLogger};
use crate::domain::model::{Background, Color, Effect, Emoji};
use crate::domain::ports::Logger;
use std::time::Duration;

/// Walks through the built-in transformations, writing everything to `logger`.
pub fn run<L: Logger>(logger: &L) {
    logger.log("This is a plain message!");

    TransformingLogger::new(logger, TransformKind::Leet).log("Hello world!");
    TransformingLogger::new(logger, TransformKind::Caesar(3)).log("attack at dawn");

    logger.log_with_style(
        "This is a bold green message on a blue background",
        Color::Green,
        Background::Blue,
        Effect::Bold,
    );

    TransformingLogger::new(logger, |m: &str| m.replace("Hello", "Hi")).log("Hello world!");

    let filtered = FilteredLogger::new(logger, |m: &str| !m.contains("error"));
    filtered.log("This is a normal message.");
    filtered.log("This error message is dropped.");

    let shout_in_leet = Transform::new(|m: &str| m.to_lowercase())
        .then(TransformKind::Leet)
        .then(TransformKind::Uppercase);
    logger.log_with_transformation(|m| shout_in_leet.apply(m), "Hello leetspeak");

    logger.log_with_timestamp("This message has a timestamp.");
    logger.log_execution_time(|| std::thread::sleep(Duration::from_millis(50)));

    for (phrase, language) in [
        ("Hello", "en"),
        ("Hello", "es"),
        ("Goodbye", "es"),
        ("Unknown", "fr"),
        ("Hello", "de"),
    ] {
        logger.log_in_language(phrase, language);
    }

    logger.log_with_sentiment_highlight("This is a fantastic day!");
    logger.log_with_sentiment_highlight("This is a terrible mistake.");

    logger.log_with_emoji("Deployment finished", Emoji::Correct);
    logger.log_with_html_style("Rendered as HTML", "color: purple; font-weight: bold");
    logger.log_as_json(&serde_json::json!({ "event": "demo", "steps": 3 }));
    logger.log_in_morse_code("SOS");
    logger.log_in_pig_latin("Hello world");
    logger.log_and_highlight_palindromes("Anna saw a racecar", Color::Yellow);
}
