use crate::domain::model::Emoji;
use chrono::Local;

pub const TIMESTAMP_FORMAT: &str = "%Y-%m-%d %H:%M:%S";

pub fn with_prefix(prefix: &str, message: &str) -> String {
    format!("{}: {}", prefix, message)
}

pub fn uppercase(message: &str) -> String {
    message.to_uppercase()
}

/// Only lowercase `o` and `s` are substituted.
pub fn leet(message: &str) -> String {
    message.replace('o', "0").replace('s', "5")
}

pub fn reverse(message: &str) -> String {
    message.chars().rev().collect()
}

pub fn remove_vowels(message: &str) -> String {
    message
        .chars()
        .filter(|c| !matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U'))
        .collect()
}

pub fn with_details(message: &str) -> String {
    format!("Detailed Log: {}", message)
}

pub fn with_emoji(message: &str, emoji: Emoji) -> String {
    format!("{} {}", emoji.symbol(), message)
}

pub fn with_category(message: &str, category: &str) -> String {
    format!("[{}] {}", category.to_uppercase(), message)
}

pub fn current_timestamp() -> String {
    Local::now().format(TIMESTAMP_FORMAT).to_string()
}

pub fn with_timestamp(message: &str) -> String {
    format!("[{}] {}", current_timestamp(), message)
}

pub fn execution_time(elapsed: std::time::Duration) -> String {
    format!("Execution took {}ms.", elapsed.as_millis())
}

/// Reverses every whitespace-separated word longer than `length_threshold` chars.
pub fn conditional_reverse(message: &str, length_threshold: usize) -> String {
    message
        .split_whitespace()
        .map(|word| {
            if word.chars().count() > length_threshold {
                reverse(word)
            } else {
                word.to_string()
            }
        })
        .collect::<Vec<_>>()
        .join(" ")
}

pub fn synonym(word: &str) -> Option<&'static str> {
    match word {
        "happy" => Some("content"),
        "sad" => Some("unhappy"),
        _ => None,
    }
}

/// Exact-token replacement; whitespace runs collapse to single spaces.
pub fn synonyms(message: &str) -> String {
    message
        .split_whitespace()
        .map(|word| synonym(word).unwrap_or(word))
        .collect::<Vec<_>>()
        .join(" ")
}
