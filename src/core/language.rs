use crate::domain::model::{Color, Sentiment, Style};

const POSITIVE_WORDS: [&str; 4] = ["good", "great", "happy", "fantastic"];
const NEGATIVE_WORDS: [&str; 4] = ["bad", "sad", "hate", "terrible"];

const SPANISH: [(&str, &str); 5] = [
    ("Hello", "Hola"),
    ("Goodbye", "Adios"),
    ("Yes", "Sí"),
    ("No", "No"),
    ("Thank you", "Gracias"),
];

const FRENCH: [(&str, &str); 2] = [("Hello", "Bonjour"), ("Thank you", "Merci")];

fn is_vowel(c: char) -> bool {
    matches!(c, 'a' | 'e' | 'i' | 'o' | 'u' | 'A' | 'E' | 'I' | 'O' | 'U')
}

fn pig_latin_word(word: &str) -> String {
    let first = match word.chars().next() {
        Some(c) => c,
        None => return String::new(),
    };

    if is_vowel(first) {
        return format!("{}way", word);
    }

    // 子音群移到字尾
    let split_at = word.find(is_vowel).unwrap_or(word.len());
    let (cluster, rest) = word.split_at(split_at);
    let converted = format!("{}{}ay", rest, cluster);

    if first.is_ascii_uppercase() {
        let lowered = converted.to_lowercase();
        let mut chars = lowered.chars();
        match chars.next() {
            Some(head) => head.to_ascii_uppercase().to_string() + chars.as_str(),
            None => lowered,
        }
    } else {
        converted
    }
}

/// Converts every purely alphabetic token, keeping whitespace and punctuation-bearing
/// tokens as they are.
pub fn pig_latin(message: &str) -> String {
    let mut converted = String::with_capacity(message.len() + 8);
    let mut token = String::new();

    let flush = |token: &mut String, out: &mut String| {
        if token.is_empty() {
            return;
        }
        if token.chars().all(|c| c.is_ascii_alphabetic()) {
            out.push_str(&pig_latin_word(token));
        } else {
            out.push_str(token);
        }
        token.clear();
    };

    for c in message.chars() {
        if c.is_whitespace() {
            flush(&mut token, &mut converted);
            converted.push(c);
        } else {
            token.push(c);
        }
    }
    flush(&mut token, &mut converted);

    converted.trim().to_string()
}

/// `en` is returned unchanged, `es` and `fr` are looked up phrase by phrase (unknown phrases pass
/// through) and any other language code is flagged as unavailable.
pub fn translate(message: &str, language_code: &str) -> String {
    let table: &[(&str, &str)] = match language_code {
        "en" => return message.to_string(),
        "es" => &SPANISH,
        "fr" => &FRENCH,
        _ => return format!("{} (Translation unavailable)", message),
    };

    table
        .iter()
        .find(|(source, _)| *source == message)
        .map(|(_, translated)| translated.to_string())
        .unwrap_or_else(|| message.to_string())
}

/// Substring match on the lowercased message; positive wins when both kinds match.
pub fn sentiment(message: &str) -> Sentiment {
    let lowered = message.to_lowercase();
    if POSITIVE_WORDS.iter().any(|word| lowered.contains(word)) {
        Sentiment::Positive
    } else if NEGATIVE_WORDS.iter().any(|word| lowered.contains(word)) {
        Sentiment::Negative
    } else {
        Sentiment::Neutral
    }
}

pub fn highlight_sentiment(message: &str) -> String {
    match sentiment(message) {
        Sentiment::Positive => Style::color(Color::Green).paint(message),
        Sentiment::Negative => Style::color(Color::Red).paint(message),
        Sentiment::Neutral => message.to_string(),
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RESET;

    #[test]
    fn test_pig_latin_words() {
        assert_eq!(pig_latin("apple"), "appleway");
        assert_eq!(pig_latin("string"), "ingstray");
        assert_eq!(pig_latin("Hello"), "Ellohay");
        assert_eq!(pig_latin("rhythm"), "rhythmay");
    }

    #[test]
    fn test_pig_latin_keeps_spacing_and_punctuation() {
        assert_eq!(pig_latin("Hello  world, friend"), "Ellohay  world, iendfray");
        assert_eq!(pig_latin("  eat pie  "), "eatway iepay");
    }

    #[test]
    fn test_translate() {
        assert_eq!(translate("Hello", "es"), "Hola");
        assert_eq!(translate("Goodbye", "es"), "Adios");
        assert_eq!(translate("Hello", "fr"), "Bonjour");
        assert_eq!(translate("Unknown", "fr"), "Unknown");
        assert_eq!(translate("Hello", "en"), "Hello");
        assert_eq!(translate("Hello", "de"), "Hello (Translation unavailable)");
    }

    #[test]
    fn test_sentiment() {
        assert_eq!(sentiment("This is a fantastic day!"), Sentiment::Positive);
        assert_eq!(sentiment("This is a TERRIBLE mistake."), Sentiment::Negative);
        assert_eq!(sentiment("good and bad"), Sentiment::Positive);
        assert_eq!(sentiment("This is just a normal message."), Sentiment::Neutral);
    }

    #[test]
    fn test_highlight_sentiment() {
        assert_eq!(
            highlight_sentiment("great"),
            format!("{}great{}", Color::Green.code(), RESET)
        );
        assert_eq!(
            highlight_sentiment("sad"),
            format!("{}sad{}", Color::Red.code(), RESET)
        );
        assert_eq!(highlight_sentiment("meh"), "meh");
    }
}
