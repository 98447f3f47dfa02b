use crate::images::domain::ResolvedImage;
use crate::ports::outbound::ImageFormatter;
use crate::shared::Result;

/// EnvFormatter adapter producing `NAME=value` lines
///
/// The output can be sourced by a shell or fed to `--env-file` style options.
pub struct EnvFormatter;

impl EnvFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for EnvFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFormatter for EnvFormatter {
    fn format(&self, images: &[ResolvedImage]) -> Result<String> {
        Ok(images
            .iter()
            .map(|image| format!("{}={}\n", image.env_var, image.pull_spec))
            .collect())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_images;

    #[test]
    fn test_format_lines() {
        let output = EnvFormatter::new().format(&sample_images()).unwrap();
        assert_eq!(
            output,
            "RELATED_IMAGE_OPENSCAP=quay.io/compliance-operator/openscap-ocp:1.3.3\n\
             RELATED_IMAGE_OPERATOR=myregistry/custom-operator:v9\n"
        );
    }
}
