use crate::core::{cipher, html, language, text, words};
use crate::domain::model::{Background, Color, Effect, Emoji, Style};
use crate::utils::error::Result;
use serde::Serialize;
use std::sync::Arc;
use std::time::Instant;

/// A sink for finished log lines.
///
/// Only [`Logger::log`] has to be implemented; every other method rewrites the
/// message and hands the result to `log`.
pub trait Logger {
    fn log(&self, message: &str);

    fn log_with_prefix(&self, prefix: &str, message: &str) {
        self.log(&text::with_prefix(prefix, message));
    }

    fn log_in_uppercase(&self, message: &str) {
        self.log(&text::uppercase(message));
    }

    fn log_with_transformation<F>(&self, transformer: F, message: &str)
    where
        F: FnOnce(&str) -> String,
        Self: Sized,
    {
        self.log(&transformer(message));
    }

    fn log_in_leet_speak(&self, message: &str) {
        self.log(&text::leet(message));
    }

    fn log_in_reverse(&self, message: &str) {
        self.log(&text::reverse(message));
    }

    fn log_in_color(&self, message: &str, color: Color) {
        self.log(&Style::color(color).paint(message));
    }

    fn log_with_style(&self, message: &str, color: Color, background: Background, effect: Effect) {
        self.log(&Style::new(color, background, effect).paint(message));
    }

    fn log_without_vowels(&self, message: &str) {
        self.log(&text::remove_vowels(message));
    }

    fn log_in_language(&self, message: &str, language_code: &str) {
        self.log(&language::translate(message, language_code));
    }

    fn log_with_sentiment_highlight(&self, message: &str) {
        self.log(&language::highlight_sentiment(message));
    }

    fn log_with_timestamp(&self, message: &str) {
        self.log(&text::with_timestamp(message));
    }

    /// Runs `action`, logs how long it took and hands back its result.
    fn log_execution_time<T, F>(&self, action: F) -> T
    where
        F: FnOnce() -> T,
        Self: Sized,
    {
        let start = Instant::now();
        let result = action();
        self.log(&text::execution_time(start.elapsed()));
        result
    }

    /// Logs `data` as compact JSON, or its `Debug` form when it cannot be serialized.
    fn log_as_json<T>(&self, data: &T)
    where
        T: Serialize + std::fmt::Debug + ?Sized,
        Self: Sized,
    {
        match serde_json::to_string(data) {
            Ok(json) => self.log(&json),
            Err(e) => {
                tracing::debug!("JSON serialization failed, falling back to Debug: {}", e);
                self.log(&format!("{:?}", data));
            }
        }
    }

    fn log_with_details(&self, message: &str) {
        self.log(&text::with_details(message));
    }

    fn log_with_emoji(&self, message: &str, emoji: Emoji) {
        self.log(&text::with_emoji(message, emoji));
    }

    fn log_with_html_style(&self, message: &str, css_styles: &str) {
        self.log(&html::span(message).with_style(css_styles).render());
    }

    fn log_with_category(&self, message: &str, category: &str) {
        self.log(&text::with_category(message, category));
    }

    fn log_and_highlight_palindromes(&self, message: &str, highlight: Color) {
        self.log(&words::highlight_palindromes(message, highlight));
    }

    fn log_base64_encoded(&self, message: &str) {
        self.log(&cipher::base64_encode(message));
    }

    /// Nothing is logged when `message` is not valid base64.
    fn log_base64_decoded(&self, message: &str) -> Result<()> {
        let decoded = cipher::base64_decode(message)?;
        self.log(&decoded);
        Ok(())
    }

    fn log_in_morse_code(&self, message: &str) {
        self.log(&cipher::morse(message));
    }

    fn log_in_pig_latin(&self, message: &str) {
        self.log(&language::pig_latin(message));
    }

    fn log_with_rot13(&self, message: &str) {
        self.log(&cipher::rot13(message));
    }

    fn log_with_caesar_cipher(&self, message: &str, shift: i32) {
        self.log(&cipher::caesar(message, shift));
    }

    fn log_palindrome_words(&self, message: &str) {
        self.log(&words::palindrome_words(message));
    }

    fn log_word_frequency(&self, message: &str) {
        self.log(&words::word_frequency(message));
    }

    fn log_with_length_scrambled_words(&self, message: &str) {
        self.log(&words::scramble_by_length(message, &mut rand::thread_rng()));
    }

    fn log_with_conditional_reversed_words(&self, message: &str, length_threshold: usize) {
        self.log(&text::conditional_reverse(message, length_threshold));
    }

    fn log_with_character_scrambled_words(&self, message: &str) {
        self.log(&words::scramble_characters(message, &mut rand::thread_rng()));
    }

    fn log_with_synonyms(&self, message: &str) {
        self.log(&text::synonyms(message));
    }

    fn log_if<P>(&self, predicate: P, message: &str)
    where
        P: FnOnce(&str) -> bool,
        Self: Sized,
    {
        if predicate(message) {
            self.log(message);
        }
    }
}

impl<L: Logger + ?Sized> Logger for &L {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<L: Logger + ?Sized> Logger for Box<L> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

impl<L: Logger + ?Sized> Logger for Arc<L> {
    fn log(&self, message: &str) {
        (**self).log(message);
    }
}

/// Adapts a closure into a [`Logger`].
#[derive(Clone)]
pub struct FnLogger<F> {
    sink: F,
}

impl<F> Logger for FnLogger<F>
where
    F: Fn(&str),
{
    fn log(&self, message: &str) {
        (self.sink)(message);
    }
}

pub fn from_fn<F>(sink: F) -> FnLogger<F>
where
    F: Fn(&str),
{
    FnLogger { sink }
}
