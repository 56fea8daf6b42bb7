//! Input/output operations and error handling

/// Command-line interface for one-shot world generation
pub mod cli;
/// Generation constants and runtime configuration defaults
pub mod configuration;
/// Error types for configuration and output operations
pub mod error;
/// PNG export for finished worlds
pub mod image;
/// ASCII rendering of finished worlds
pub mod render;
