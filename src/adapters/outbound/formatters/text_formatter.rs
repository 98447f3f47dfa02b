use crate::images::domain::ResolvedImage;
use crate::ports::outbound::ImageFormatter;
use crate::shared::Result;

/// TextFormatter adapter producing one aligned line per component
///
/// ```text
/// openscap  quay.io/compliance-operator/openscap-ocp:1.3.3  (default)
/// ```
pub struct TextFormatter;

impl TextFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for TextFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFormatter for TextFormatter {
    fn format(&self, images: &[ResolvedImage]) -> Result<String> {
        let name_width = images
            .iter()
            .map(|image| image.component.name().chars().count())
            .max()
            .unwrap_or(0);
        let spec_width = images
            .iter()
            .map(|image| image.pull_spec.chars().count())
            .max()
            .unwrap_or(0);

        let mut output = String::new();
        for image in images {
            output.push_str(&format!(
                "{:<name_width$}  {:<spec_width$}  ({})\n",
                image.component.name(),
                image.pull_spec,
                image.source,
            ));
        }
        Ok(output)
    }
}
