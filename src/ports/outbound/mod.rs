/// Outbound ports (Driven ports) - Infrastructure interfaces
pub mod environment_reader;
pub mod image_formatter;

pub use environment_reader::EnvironmentReader;
pub use image_formatter::ImageFormatter;
