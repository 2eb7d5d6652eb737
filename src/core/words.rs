use crate::domain::model::{Color, RESET};
use rand::seq::SliceRandom;
use rand::Rng;
use regex::Regex;
use std::collections::BTreeMap;
use std::sync::OnceLock;

fn word_pattern() -> &'static Regex {
    static WORD: OnceLock<Regex> = OnceLock::new();
    WORD.get_or_init(|| Regex::new(r"\b\w+\b").expect("word pattern is a valid regex"))
}

/// Single characters never count as palindromes.
pub fn is_palindrome(word: &str) -> bool {
    word.chars().count() > 1 && word.chars().eq(word.chars().rev())
}

pub fn palindrome_words(message: &str) -> String {
    message
        .split_whitespace()
        .filter(|word| is_palindrome(word))
        .collect::<Vec<_>>()
        .join(" ")
}

/// Wraps each word whose letters read the same both ways (ignoring case, digits and
/// underscores) in `color`, leaving the rest of the text untouched.
pub fn highlight_palindromes(message: &str, color: Color) -> String {
    let mut highlighted = String::with_capacity(message.len());
    let mut last_index = 0;

    for found in word_pattern().find_iter(message) {
        let word = found.as_str();
        let letters: String = word
            .chars()
            .filter(|c| c.is_ascii_alphabetic())
            .map(|c| c.to_ascii_lowercase())
            .collect();

        if is_palindrome(&letters) {
            highlighted.push_str(&message[last_index..found.start()]);
            highlighted.push_str(color.code());
            highlighted.push_str(word);
            highlighted.push_str(RESET);
            last_index = found.end();
        }
    }

    highlighted.push_str(&message[last_index..]);
    highlighted
}

/// Case-insensitive word counts, alphabetically ordered: `"a: 2, b: 1"`.
pub fn word_frequency(message: &str) -> String {
    let mut counts: BTreeMap<String, usize> = BTreeMap::new();
    for word in message.split_whitespace() {
        *counts.entry(word.to_lowercase()).or_insert(0) += 1;
    }

    counts
        .iter()
        .map(|(word, count)| format!("{}: {}", word, count))
        .collect::<Vec<_>>()
        .join(", ")
}

/// Groups words by length (shortest group first) and shuffles the order inside each group.
pub fn scramble_by_length<R: Rng + ?Sized>(message: &str, rng: &mut R) -> String {
    let mut groups: BTreeMap<usize, Vec<&str>> = BTreeMap::new();
    for word in message.split_whitespace() {
        groups.entry(word.chars().count()).or_default().push(word);
    }

    groups
        .into_values()
        .flat_map(|mut group| {
            group.shuffle(&mut *rng);
            group
        })
        .collect::<Vec<_>>()
        .join(" ")
}

/// Shuffles the inner characters of every word longer than two characters.
pub fn scramble_characters<R: Rng + ?Sized>(message: &str, rng: &mut R) -> String {
    message
        .split_whitespace()
        .map(|word| {
            let mut chars: Vec<char> = word.chars().collect();
            if chars.len() > 2 {
                let last = chars.len() - 1;
                chars[1..last].shuffle(&mut *rng);
            }
            chars.into_iter().collect::<String>()
        })
        .collect::<Vec<_>>()
        .join(" ")
}

#[cfg(test)]
mod tests {
    use super::*;
    use rand::rngs::StdRng;
    use rand::SeedableRng;

    #[test]
    fn test_is_palindrome() {
        assert!(is_palindrome("level"));
        assert!(is_palindrome("noon"));
        assert!(!is_palindrome("a"));
        assert!(!is_palindrome("Level"));
        assert!(!is_palindrome(""));
    }

    #[test]
    fn test_palindrome_words() {
        assert_eq!(palindrome_words("wow mom said level up"), "wow mom level");
        assert_eq!(palindrome_words("nothing here"), "");
    }

    #[test]
    fn test_highlight_palindromes() {
        let red = Color::Red.code();
        assert_eq!(
            highlight_palindromes("Anna saw a racecar, wow!", Color::Red),
            format!("{red}Anna{RESET} saw a {red}racecar{RESET}, {red}wow{RESET}!")
        );
        assert_eq!(highlight_palindromes("no match", Color::Red), "no match");
    }

    #[test]
    fn test_word_frequency() {
        assert_eq!(
            word_frequency("the cat and The hat"),
            "and: 1, cat: 1, hat: 1, the: 2"
        );
        assert_eq!(word_frequency("   "), "");
    }

    #[test]
    fn test_scramble_by_length_keeps_groups_in_order() {
        let mut rng = StdRng::seed_from_u64(7);
        let scrambled = scramble_by_length("ccc a bb dd b eee", &mut rng);
        let words: Vec<&str> = scrambled.split(' ').collect();

        assert_eq!(words.len(), 6);
        let lengths: Vec<usize> = words.iter().map(|w| w.len()).collect();
        assert_eq!(lengths, vec![1, 1, 2, 2, 3, 3]);

        let mut sorted = words.clone();
        sorted.sort();
        assert_eq!(sorted, vec!["a", "b", "bb", "ccc", "dd", "eee"]);
    }

    #[test]
    fn test_scramble_characters_keeps_edges() {
        let mut rng = StdRng::seed_from_u64(42);
        let scrambled = scramble_characters("according to research", &mut rng);
        let words: Vec<&str> = scrambled.split(' ').collect();

        assert_eq!(words[1], "to");
        for (original, shuffled) in ["according", "to", "research"].iter().zip(&words) {
            assert_eq!(original.len(), shuffled.len());
            assert_eq!(original.chars().next(), shuffled.chars().next());
            assert_eq!(original.chars().last(), shuffled.chars().last());

            let mut a: Vec<char> = original.chars().collect();
            let mut b: Vec<char> = shuffled.chars().collect();
            a.sort_unstable();
            b.sort_unstable();
            assert_eq!(a, b);
        }
    }
}
