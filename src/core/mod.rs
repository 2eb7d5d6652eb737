pub mod cipher;
pub mod html;
pub mod language;
pub mod pipeline;
pub mod text;
pub mod words;

pub use crate::domain::model::{Background, Color, Effect, Emoji, Environment, Sentiment, Style};
pub use crate::domain::ports::Logger;
pub use crate::utils::error::Result;
