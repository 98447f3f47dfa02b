use crate::shared::error::ImageError;
use serde::{Deserialize, Serialize};
use std::fmt;
use std::str::FromStr;

/// A deployable artifact whose image the operator needs to know.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Component {
    /// The OpenSCAP scanning engine
    #[serde(rename = "openscap")]
    ScanEngine,
    /// The compliance operator itself
    Operator,
    /// The compliance content (profile) bundle
    Content,
}

impl Component {
    /// Every component, in ordinal order.
    pub const ALL: [Component; 3] = [Component::ScanEngine, Component::Operator, Component::Content];

    /// Stable position of this component in the set.
    pub fn ordinal(self) -> u32 {
        match self {
            Component::ScanEngine => 0,
            Component::Operator => 1,
            Component::Content => 2,
        }
    }

    /// Looks a component up by ordinal.
    ///
    /// # Errors
    /// Returns `ImageError::InvalidComponent` for ordinals outside the set.
    pub fn from_ordinal(ordinal: u32) -> Result<Self, ImageError> {
        Self::ALL
            .get(ordinal as usize)
            .copied()
            .ok_or(ImageError::InvalidComponent { ordinal })
    }

    pub fn name(self) -> &'static str {
        match self {
            Component::ScanEngine => "openscap",
            Component::Operator => "operator",
            Component::Content => "content",
        }
    }

    /// Name of the environment variable that overrides this component's image.
    pub fn env_var(self) -> &'static str {
        match self {
            Component::ScanEngine => "RELATED_IMAGE_OPENSCAP",
            Component::Operator => "RELATED_IMAGE_OPERATOR",
            Component::Content => "RELATED_IMAGE_PROFILE",
        }
    }

    /// Repository and tag of the built-in image, without the registry prefix.
    pub fn default_repository(self) -> &'static str {
        match self {
            Component::ScanEngine => "openscap-ocp:1.3.3",
            Component::Operator => "compliance-operator:latest",
            Component::Content => "ocp4:latest",
        }
    }
}

impl TryFrom<u32> for Component {
    type Error = ImageError;

    fn try_from(ordinal: u32) -> Result<Self, Self::Error> {
        Self::from_ordinal(ordinal)
    }
}

impl FromStr for Component {
    type Err = ImageError;

    fn from_str(s: &str) -> Result<Self, Self::Err> {
        match s.to_lowercase().as_str() {
            "openscap" | "scan-engine" | "scanner" => Ok(Component::ScanEngine),
            "operator" => Ok(Component::Operator),
            "content" | "profile" => Ok(Component::Content),
            _ => Err(ImageError::UnknownComponentName {
                name: s.to_string(),
            }),
        }
    }
}

impl fmt::Display for Component {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.name())
    }
}
