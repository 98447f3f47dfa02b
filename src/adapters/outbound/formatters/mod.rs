/// Formatter adapters for the supported output formats
mod env_formatter;
mod json_formatter;
mod text_formatter;

pub use env_formatter::EnvFormatter;
pub use json_formatter::JsonFormatter;
pub use text_formatter::TextFormatter;
