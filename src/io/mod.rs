/// Command-line front end
pub mod cli;
/// Reference constants and defaults
pub mod configuration;
/// Rendering and parsing of the pattern document
pub mod document;
/// Error types
pub mod error;
/// Terminal progress display
pub mod progress;
