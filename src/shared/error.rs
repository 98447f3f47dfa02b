use thiserror::Error;

/// Exit codes for the CLI application.
///
/// Argument errors exit with 2 from clap itself.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
#[repr(u8)]
pub enum ExitCode {
    /// Images were resolved and printed
    Success = 0,
    /// Application error (unknown component, bad config file, etc.)
    ApplicationError = 3,
}

impl ExitCode {
    /// Convert to u8 for use with std::process::ExitCode
    pub fn as_u8(self) -> u8 {
        self as u8
    }
}

/// Errors raised while resolving component images.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ImageError {
    /// An ordinal outside the known component set was requested.
    #[error("Invalid component ordinal: {ordinal}\n\n💡 Hint: Valid ordinals are 0 (openscap), 1 (operator) and 2 (content)")]
    InvalidComponent { ordinal: u32 },

    #[error("Unknown component: {name}\n\n💡 Hint: Use one of 'openscap', 'operator' or 'content'")]
    UnknownComponentName { name: String },

    #[error("Invalid registry: {reason}\n\n💡 Hint: Specify a registry such as 'quay.io/compliance-operator'")]
    InvalidRegistry { reason: String },

    #[error("Invalid config: {message}")]
    InvalidConfig { message: String },
}
