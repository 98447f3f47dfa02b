use crate::images::domain::ResolvedImage;
use crate::ports::outbound::ImageFormatter;
use crate::shared::Result;

/// JsonFormatter adapter producing a pretty-printed JSON array
pub struct JsonFormatter;

impl JsonFormatter {
    pub fn new() -> Self {
        Self
    }
}

impl Default for JsonFormatter {
    fn default() -> Self {
        Self::new()
    }
}

impl ImageFormatter for JsonFormatter {
    fn format(&self, images: &[ResolvedImage]) -> Result<String> {
        serde_json::to_string_pretty(images).map_err(Into::into)
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::adapters::outbound::formatters::test_support::sample_images;
    use serde_json::Value;

    #[test]
    fn test_format_fields() {
        let output = JsonFormatter::new().format(&sample_images()).unwrap();
        let value: Value = serde_json::from_str(&output).unwrap();
        let rows = value.as_array().unwrap();
        assert_eq!(rows.len(), 2);

        assert_eq!(rows[0]["component"], "openscap");
        assert_eq!(rows[0]["env_var"], "RELATED_IMAGE_OPENSCAP");
        assert_eq!(
            rows[0]["pull_spec"],
            "quay.io/compliance-operator/openscap-ocp:1.3.3"
        );
        assert_eq!(rows[0]["source"], "default");

        assert_eq!(rows[1]["component"], "operator");
        assert_eq!(rows[1]["source"], "override");
    }

    #[test]
    fn test_format_empty_is_empty_array() {
        let output = JsonFormatter::new().format(&[]).unwrap();
        assert_eq!(output, "[]");
    }
}
