use logsmith::{
    from_fn, time_async, Background, Color, Effect, Emoji, EnvironmentLogger, Environment,
    FilteredLogger, Logger, MemoryLogger, Transform, TransformKind, TransformingLogger, RESET,
};
use std::sync::Arc;

#[test]
fn test_every_message_operation_reaches_the_sink() {
    let memory = MemoryLogger::new();
    let logger = memory.clone();

    logger.log_with_prefix("INFO", "This is a prefixed message");
    logger.log_in_uppercase("This is a simple message");
    logger.log_in_leet_speak("Hello world!");
    logger.log_in_reverse("stressed");
    logger.log_with_style("styled", Color::Green, Background::Blue, Effect::Bold);
    logger.log_without_vowels("Hello world");
    logger.log_in_language("Goodbye", "es");
    logger.log_in_language("Hello", "de");
    logger.log_with_details("cache warmed");
    logger.log_with_emoji("all good", Emoji::Smile);
    logger.log_with_html_style("<b>", "color: red");
    logger.log_with_category("slow query", "db");
    logger.log_base64_encoded("Hello world!");
    logger.log_in_morse_code("SOS");
    logger.log_in_pig_latin("Hello world");
    logger.log_with_rot13("Hello");
    logger.log_with_caesar_cipher("attack at dawn", 3);
    logger.log_palindrome_words("wow that level is high");
    logger.log_word_frequency("b a B");
    logger.log_with_conditional_reversed_words("short reversed", 5);
    logger.log_with_synonyms("happy and sad");

    assert_eq!(
        memory.lines(),
        vec![
            "INFO: This is a prefixed message".to_string(),
            "THIS IS A SIMPLE MESSAGE".to_string(),
            "Hell0 w0rld!".to_string(),
            "desserts".to_string(),
            format!("\u{1b}[32m\u{1b}[44m\u{1b}[1mstyled{}", RESET),
            "Hll wrld".to_string(),
            "Adios".to_string(),
            "Hello (Translation unavailable)".to_string(),
            "Detailed Log: cache warmed".to_string(),
            "😎 all good".to_string(),
            r#"<span style="color: red">&lt;b&gt;</span>"#.to_string(),
            "[DB] slow query".to_string(),
            "SGVsbG8gd29ybGQh".to_string(),
            "... --- ...".to_string(),
            "Ellohay orldway".to_string(),
            "Uryyb".to_string(),
            "dwwdfn dw gdzq".to_string(),
            "wow level".to_string(),
            "a: 1, b: 2".to_string(),
            "short desrever".to_string(),
            "content and unhappy".to_string(),
        ]
    );
}

#[test]
fn test_sentiment_highlighting() {
    let memory = MemoryLogger::new();

    memory.log_with_sentiment_highlight("This is a fantastic day!");
    memory.log_with_sentiment_highlight("This is a terrible mistake.");
    memory.log_with_sentiment_highlight("This is just a normal message.");

    assert_eq!(
        memory.lines(),
        vec![
            format!("{}This is a fantastic day!{}", Color::Green.code(), RESET),
            format!("{}This is a terrible mistake.{}", Color::Red.code(), RESET),
            "This is just a normal message.".to_string(),
        ]
    );
}

#[test]
fn test_base64_round_trip_through_loggers() {
    let memory = MemoryLogger::new();

    memory.log_base64_encoded("päss wörd");
    let encoded = memory.last().unwrap();
    memory.log_base64_decoded(&encoded).unwrap();

    assert_eq!(memory.last().as_deref(), Some("päss wörd"));
}

#[test]
fn test_scrambles_keep_the_words() {
    let memory = MemoryLogger::new();

    memory.log_with_length_scrambled_words("bb a ccc dd");
    memory.log_with_character_scrambled_words("scramble me");

    let lines = memory.lines();
    let mut words: Vec<&str> = lines[0].split(' ').collect();
    assert_eq!(words[0], "a");
    assert_eq!(words[3], "ccc");
    words.sort();
    assert_eq!(words, vec!["a", "bb", "ccc", "dd"]);

    let scrambled: Vec<&str> = lines[1].split(' ').collect();
    assert_eq!(scrambled[1], "me");
    assert!(scrambled[0].starts_with('s') && scrambled[0].ends_with('e'));
}

#[test]
fn test_decorators_stack() {
    let memory = MemoryLogger::new();
    let logger = FilteredLogger::new(
        TransformingLogger::new(
            memory.clone(),
            Transform::from(TransformKind::Uppercase).then(TransformKind::Reverse),
        ),
        |m: &str| !m.is_empty(),
    );

    logger.log("");
    logger.log("abc");
    logger.log_with_category("x", "io");

    assert_eq!(memory.lines(), vec!["CBA", "X ]OI["]);
}

#[test]
fn test_closure_and_shared_loggers() {
    let memory = MemoryLogger::new();
    let sink = memory.clone();
    let custom = from_fn(move |m: &str| sink.log(&format!("custom> {}", m)));

    let shared: Arc<dyn Logger + Send + Sync> = Arc::new(custom);
    shared.log_in_uppercase("hi");
    shared.log_with_emoji("warn", Emoji::Warning);

    assert_eq!(memory.lines(), vec!["custom> HI", "custom> ⚠️ warn"]);
}

#[test]
fn test_environment_logger_over_custom_sink() {
    let memory = MemoryLogger::new();
    let logger = EnvironmentLogger::with_sink(Environment::Production, memory.clone());

    logger.log_with_emoji("ready", Emoji::Info);

    assert_eq!(memory.lines(), vec!["[INFO] ℹ️ ready"]);
}

#[tokio::test]
async fn test_time_async_on_trait_object() {
    let memory = MemoryLogger::new();
    let logger: &dyn Logger = &memory;

    let answer = time_async(logger, async { 42 }).await;

    assert_eq!(answer, 42);
    assert!(memory.last().unwrap().starts_with("Execution took "));
}
