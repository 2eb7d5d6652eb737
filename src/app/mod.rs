// Application layer: wires CLI commands to a configured logger.

#[cfg(feature = "cli")]
pub mod commands;
pub mod demo;
