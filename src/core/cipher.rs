use crate::utils::error::Result;
use base64::{engine::general_purpose::STANDARD, Engine as _};

/// Shifts ASCII letters by `shift` places, wrapping within the alphabet and keeping case.
/// Any `i32` works, including negative shifts.
pub fn caesar(message: &str, shift: i32) -> String {
    let shift = shift.rem_euclid(26) as u8;
    message
        .chars()
        .map(|c| {
            if c.is_ascii_alphabetic() {
                let base = if c.is_ascii_lowercase() { b'a' } else { b'A' };
                ((c as u8 - base + shift) % 26 + base) as char
            } else {
                c
            }
        })
        .collect()
}

pub fn rot13(message: &str) -> String {
    caesar(message, 13)
}

pub fn morse_symbol(c: char) -> Option<&'static str> {
    let code = match c {
        'a' => ".-",
        'b' => "-...",
        'c' => "-.-.",
        'd' => "-..",
        'e' => ".",
        'f' => "..-.",
        'g' => "--.",
        'h' => "....",
        'i' => "..",
        'j' => ".---",
        'k' => "-.-",
        'l' => ".-..",
        'm' => "--",
        'n' => "-.",
        'o' => "---",
        'p' => ".--.",
        'q' => "--.-",
        'r' => ".-.",
        's' => "...",
        't' => "-",
        'u' => "..-",
        'v' => "...-",
        'w' => ".--",
        'x' => "-..-",
        'y' => "-.--",
        'z' => "--..",
        '0' => "-----",
        '1' => ".----",
        '2' => "..---",
        '3' => "...--",
        '4' => "....-",
        '5' => ".....",
        '6' => "-....",
        '7' => "--...",
        '8' => "---..",
        '9' => "----.",
        '.' => ".-.-.-",
        ',' => "--..--",
        '?' => "..--..",
        '!' => "-.-.--",
        _ => return None,
    };
    Some(code)
}

/// Letters are separated by a space and words by `/`. Characters without a Morse
/// code are dropped.
pub fn morse(message: &str) -> String {
    let mut encoded = String::new();

    for c in message.to_lowercase().chars() {
        if c == ' ' {
            encoded.push_str("/ ");
        } else if let Some(code) = morse_symbol(c) {
            encoded.push_str(code);
            encoded.push(' ');
        } else {
            tracing::warn!("Character '{}' could not be translated to Morse code", c);
        }
    }

    encoded.trim().to_string()
}

pub fn base64_encode(message: &str) -> String {
    STANDARD.encode(message.as_bytes())
}

/// Bytes that are not valid UTF-8 are replaced with U+FFFD.
pub fn base64_decode(encoded: &str) -> Result<String> {
    let bytes = STANDARD.decode(encoded.trim())?;
    Ok(String::from_utf8_lossy(&bytes).into_owned())
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::utils::error::LogError;

    #[test]
    fn test_caesar_classic() {
        assert_eq!(caesar("attack at dawn", 3), "dwwdfn dw gdzq");
        assert_eq!(caesar("XYZ abc", 3), "ABC def");
    }

    #[test]
    fn test_caesar_negative_and_large_shift() {
        assert_eq!(caesar("dwwdfn", -3), "attack");
        assert_eq!(caesar("abc", 29), "def");
        assert_eq!(caesar("héllo!", 1), "iémmp!");
    }

    #[test]
    fn test_rot13_is_an_involution() {
        assert_eq!(rot13("Hello, World"), "Uryyb, Jbeyq");
        assert_eq!(rot13(&rot13("Hello, World")), "Hello, World");
    }

    #[test]
    fn test_morse() {
        assert_eq!(morse("SOS"), "... --- ...");
        assert_eq!(morse("hi there"), ".... .. / - .... . .-. .");
        assert_eq!(morse("a#b"), ".- -...");
        assert_eq!(morse(""), "");
    }

    #[test]
    fn test_base64() {
        assert_eq!(base64_encode("Hello world!"), "SGVsbG8gd29ybGQh");
        assert_eq!(base64_decode("SGVsbG8gd29ybGQh").unwrap(), "Hello world!");
        assert!(matches!(
            base64_decode("not base64!"),
            Err(LogError::DecodeError(_))
        ));
    }
}
