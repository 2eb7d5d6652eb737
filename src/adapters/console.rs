use crate::core::pipeline::{TransformKind, TransformingLogger};
use crate::domain::model::{Background, Color, Effect, Style};
use crate::domain::ports::Logger;
use std::io::Write;

/// Writes one line per message to stdout, optionally painted with a [`Style`].
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ConsoleLogger {
    style: Style,
}

impl ConsoleLogger {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn red() -> Self {
        Self::with_style(Style::color(Color::Red))
    }

    pub fn styled(color: Color, background: Background, effect: Effect) -> Self {
        Self::with_style(Style::new(color, background, effect))
    }

    pub fn with_style(style: Style) -> Self {
        Self { style }
    }

    pub fn style(&self) -> Style {
        self.style
    }

    /// The exact line that `log` would print, without the trailing newline.
    pub fn render(&self, message: &str) -> String {
        self.style.paint(message)
    }
}

impl Logger for ConsoleLogger {
    fn log(&self, message: &str) {
        let line = self.render(message);
        let mut stdout = std::io::stdout().lock();
        if let Err(e) = writeln!(stdout, "{}", line) {
            tracing::error!("Failed to write to stdout: {}", e);
        }
    }
}

pub fn leet_logger() -> TransformingLogger<ConsoleLogger> {
    TransformingLogger::new(ConsoleLogger::new(), TransformKind::Leet)
}

pub fn caesar_logger(shift: i32) -> TransformingLogger<ConsoleLogger> {
    TransformingLogger::new(ConsoleLogger::new(), TransformKind::Caesar(shift))
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::domain::model::RESET;

    #[test]
    fn test_render_styles() {
        assert_eq!(ConsoleLogger::new().render("plain"), "plain");
        assert_eq!(
            ConsoleLogger::red().render("This is a red message!"),
            format!("\u{1b}[31mThis is a red message!{}", RESET)
        );
        assert_eq!(
            ConsoleLogger::styled(Color::Green, Background::Blue, Effect::Bold).render("msg"),
            format!("\u{1b}[32m\u{1b}[44m\u{1b}[1mmsg{}", RESET)
        );
    }

    #[test]
    fn test_console_log_does_not_panic() {
        ConsoleLogger::new().log("smoke test line");
        leet_logger().log("Hello world!");
        caesar_logger(3).log("attack at dawn");
    }
}
