use crate::images::domain::ResolvedImage;
use crate::shared::Result;

/// ImageFormatter port for rendering a resolution report
///
/// Implementations turn resolved images into the text printed by the CLI.
pub trait ImageFormatter {
    /// Formats the resolved images
    ///
    /// # Arguments
    /// * `images` - Resolved images, in component order
    ///
    /// # Errors
    /// Returns an error if serialization fails
    fn format(&self, images: &[ResolvedImage]) -> Result<String>;
}
