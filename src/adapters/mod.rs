// Adapters layer: concrete sinks that decide where a finished line ends up.

pub mod console;
pub mod environment;
pub mod file;
pub mod memory;

pub use console::{caesar_logger, leet_logger, ConsoleLogger};
pub use environment::EnvironmentLogger;
pub use file::FileLogger;
pub use memory::MemoryLogger;
