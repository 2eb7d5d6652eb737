use crate::utils::error::LogError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

pub const RESET: &str = "\u{1b}[0m";

/// Foreground ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Color {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Color {
    pub const ALL: [Color; 8] = [
        Color::Black,
        Color::Red,
        Color::Green,
        Color::Yellow,
        Color::Blue,
        Color::Purple,
        Color::Cyan,
        Color::White,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Color::Black => "\u{1b}[30m",
            Color::Red => "\u{1b}[31m",
            Color::Green => "\u{1b}[32m",
            Color::Yellow => "\u{1b}[33m",
            Color::Blue => "\u{1b}[34m",
            Color::Purple => "\u{1b}[35m",
            Color::Cyan => "\u{1b}[36m",
            Color::White => "\u{1b}[37m",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Color::Black => "black",
            Color::Red => "red",
            Color::Green => "green",
            Color::Yellow => "yellow",
            Color::Blue => "blue",
            Color::Purple => "purple",
            Color::Cyan => "cyan",
            Color::White => "white",
        }
    }
}

/// Background ANSI colors.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Background {
    Black,
    Red,
    Green,
    Yellow,
    Blue,
    Purple,
    Cyan,
    White,
}

impl Background {
    pub const ALL: [Background; 8] = [
        Background::Black,
        Background::Red,
        Background::Green,
        Background::Yellow,
        Background::Blue,
        Background::Purple,
        Background::Cyan,
        Background::White,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Background::Black => "\u{1b}[40m",
            Background::Red => "\u{1b}[41m",
            Background::Green => "\u{1b}[42m",
            Background::Yellow => "\u{1b}[43m",
            Background::Blue => "\u{1b}[44m",
            Background::Purple => "\u{1b}[45m",
            Background::Cyan => "\u{1b}[46m",
            Background::White => "\u{1b}[47m",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Background::Black => "black",
            Background::Red => "red",
            Background::Green => "green",
            Background::Yellow => "yellow",
            Background::Blue => "blue",
            Background::Purple => "purple",
            Background::Cyan => "cyan",
            Background::White => "white",
        }
    }
}

/// Text effects (SGR attributes).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Effect {
    Bold,
    Dim,
    Italic,
    Underline,
    Blink,
    Reversed,
}

impl Effect {
    pub const ALL: [Effect; 6] = [
        Effect::Bold,
        Effect::Dim,
        Effect::Italic,
        Effect::Underline,
        Effect::Blink,
        Effect::Reversed,
    ];

    pub fn code(self) -> &'static str {
        match self {
            Effect::Bold => "\u{1b}[1m",
            Effect::Dim => "\u{1b}[2m",
            Effect::Italic => "\u{1b}[3m",
            Effect::Underline => "\u{1b}[4m",
            Effect::Blink => "\u{1b}[5m",
            Effect::Reversed => "\u{1b}[7m",
        }
    }

    pub fn name(self) -> &'static str {
        match self {
            Effect::Bold => "bold",
            Effect::Dim => "dim",
            Effect::Italic => "italic",
            Effect::Underline => "underline",
            Effect::Blink => "blink",
            Effect::Reversed => "reversed",
        }
    }
}

macro_rules! ansi_display_and_parse {
    ($ty:ident, $field:literal) => {
        impl fmt::Display for $ty {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                f.write_str(self.code())
            }
        }

        impl FromStr for $ty {
            type Err = LogError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                let wanted = s.trim().to_lowercase();
                $ty::ALL
                    .iter()
                    .copied()
                    .find(|candidate| candidate.name() == wanted)
                    .ok_or_else(|| LogError::InvalidConfigValueError {
                        field: $field.to_string(),
                        value: s.to_string(),
                        reason: format!(
                            "Expected one of: {}",
                            $ty::ALL
                                .iter()
                                .map(|candidate| candidate.name())
                                .collect::<Vec<_>>()
                                .join(", ")
                        ),
                    })
            }
        }
    };
}

ansi_display_and_parse!(Color, "color");
ansi_display_and_parse!(Background, "background");
ansi_display_and_parse!(Effect, "effect");

/// A combination of foreground, background and effect. Missing parts are skipped.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
pub struct Style {
    pub color: Option<Color>,
    pub background: Option<Background>,
    pub effect: Option<Effect>,
}

impl Style {
    pub fn new(color: Color, background: Background, effect: Effect) -> Self {
        Self {
            color: Some(color),
            background: Some(background),
            effect: Some(effect),
        }
    }

    pub fn color(color: Color) -> Self {
        Self {
            color: Some(color),
            ..Self::default()
        }
    }

    pub fn is_plain(&self) -> bool {
        self.color.is_none() && self.background.is_none() && self.effect.is_none()
    }

    /// Wraps `message` in the style's escape codes followed by a reset.
    pub fn paint(&self, message: &str) -> String {
        if self.is_plain() {
            return message.to_string();
        }

        let mut painted = String::with_capacity(message.len() + 16);
        if let Some(color) = self.color {
            painted.push_str(color.code());
        }
        if let Some(background) = self.background {
            painted.push_str(background.code());
        }
        if let Some(effect) = self.effect {
            painted.push_str(effect.code());
        }
        painted.push_str(message);
        painted.push_str(RESET);
        painted
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Emoji {
    Smile,
    Warning,
    Error,
    Info,
    Correct,
}

impl Emoji {
    pub fn symbol(self) -> &'static str {
        match self {
            Emoji::Smile => "😎",
            Emoji::Warning => "⚠️",
            Emoji::Error => "❌",
            Emoji::Info => "ℹ️",
            Emoji::Correct => "✅",
        }
    }
}

impl fmt::Display for Emoji {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.symbol())
    }
}

#[derive(Debug, Clone, Copy, Default, PartialEq, Eq, Serialize, Deserialize)]
#[cfg_attr(feature = "cli", derive(clap::ValueEnum))]
#[serde(rename_all = "lowercase")]
pub enum Environment {
    Production,
    #[default]
    Development,
}

impl Environment {
    /// Anything other than "production" (any case) is treated as development.
    pub fn from_name(name: &str) -> Self {
        if name.trim().eq_ignore_ascii_case("production") {
            Environment::Production
        } else {
            Environment::Development
        }
    }
}

impl FromStr for Environment {
    type Err = LogError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.trim().to_lowercase().as_str() {
            "production" => Ok(Environment::Production),
            "development" => Ok(Environment::Development),
            _ => Err(LogError::InvalidConfigValueError {
                field: "environment".to_string(),
                value: s.to_string(),
                reason: "Expected one of: production, development".to_string(),
            }),
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Sentiment {
    Positive,
    Negative,
    Neutral,
}
