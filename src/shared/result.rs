/// Type alias for Result with anyhow::Error as the error type.
/// Typed failures are `ImageError` values converted with `.into()`.
pub type Result<T> = std::result::Result<T, anyhow::Error>;
