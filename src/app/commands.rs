use crate::app::demo;
use crate::config::cli::Command;
use crate::domain::ports::Logger;
use crate::utils::error::Result;
use std::time::Duration;

/// Runs one CLI command against `logger`.
pub fn execute<L: Logger>(command: &Command, logger: &L) -> Result<()> {
    tracing::debug!("Executing {:?}", command);

    match command {
        Command::Log { message } => logger.log(message),
        Command::Prefix { prefix, message } => logger.log_with_prefix(prefix, message),
        Command::Upper { message } => logger.log_in_uppercase(message),
        Command::Leet { message } => logger.log_in_leet_speak(message),
        Command::Reverse { message } => logger.log_in_reverse(message),
        Command::Paint { paint, message } => logger.log_in_color(message, *paint),
        Command::Style {
            fg,
            bg,
            fx,
            message,
        } => logger.log_with_style(message, *fg, *bg, *fx),
        Command::NoVowels { message } => logger.log_without_vowels(message),
        Command::Translate { language, message } => logger.log_in_language(message, language),
        Command::Sentiment { message } => logger.log_with_sentiment_highlight(message),
        Command::Timestamp { message } => logger.log_with_timestamp(message),
        Command::Json { payload } => {
            let value: serde_json::Value = serde_json::from_str(payload)?;
            logger.log_as_json(&value);
        }
        Command::Details { message } => logger.log_with_details(message),
        Command::Emoji { emoji, message } => logger.log_with_emoji(message, *emoji),
        Command::Html { css, message } => logger.log_with_html_style(message, css),
        Command::Category { category, message } => logger.log_with_category(message, category),
        Command::Palindromes { message, highlight } => {
            logger.log_and_highlight_palindromes(message, *highlight)
        }
        Command::PalindromeWords { message } => logger.log_palindrome_words(message),
        Command::Base64Encode { message } => logger.log_base64_encoded(message),
        Command::Base64Decode { message } => logger.log_base64_decoded(message)?,
        Command::Morse { message } => logger.log_in_morse_code(message),
        Command::PigLatin { message } => logger.log_in_pig_latin(message),
        Command::Rot13 { message } => logger.log_with_rot13(message),
        Command::Caesar { message, shift } => logger.log_with_caesar_cipher(message, *shift),
        Command::Frequency { message } => logger.log_word_frequency(message),
        Command::ScrambleLength { message } => logger.log_with_length_scrambled_words(message),
        Command::ScrambleChars { message } => logger.log_with_character_scrambled_words(message),
        Command::ReverseLong { message, threshold } => {
            logger.log_with_conditional_reversed_words(message, *threshold)
        }
        Command::Synonyms { message } => logger.log_with_synonyms(message),
        Command::Time { millis } => {
            let millis = *millis;
            logger.log_execution_time(|| std::thread::sleep(Duration::from_millis(millis)));
        }
        Command::Demo => demo::run(logger),
    }

    Ok(())
}
