use super::component::Component;
use serde::Serialize;
use std::fmt;

/// Where a resolved pull spec came from.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize)]
#[serde(rename_all = "lowercase")]
pub enum ImageSource {
    /// The component's override variable was set and non-empty
    Override,
    Default,
}

impl fmt::Display for ImageSource {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            ImageSource::Override => f.write_str("override"),
            ImageSource::Default => f.write_str("default"),
        }
    }
}

/// One row of a resolution report.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ResolvedImage {
    pub component: Component,
    pub env_var: &'static str,
    pub pull_spec: String,
    pub source: ImageSource,
}
