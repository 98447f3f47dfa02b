use super::component::Component;
use crate::shared::error::ImageError;
use crate::shared::Result;
use std::sync::OnceLock;

/// Registry prefix used for built-in images.
///
/// Builds can bake in another registry by setting
/// `RELATED_IMAGES_DEFAULT_REGISTRY` at compile time.
pub const DEFAULT_REGISTRY: &str = match option_env!("RELATED_IMAGES_DEFAULT_REGISTRY") {
    Some(registry) if !registry.is_empty() => registry,
    _ => FALLBACK_REGISTRY,
};

const FALLBACK_REGISTRY: &str = "quay.io/compliance-operator";

/// Default pull spec and override variable for a single component.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ComponentDefault {
    pub default_image: String,
    pub env_var: &'static str,
}

impl ComponentDefault {
    fn for_component(component: Component, registry: &str) -> Self {
        Self {
            default_image: format!("{}/{}", registry, component.default_repository()),
            env_var: component.env_var(),
        }
    }
}

/// Defaults for every component.
///
/// One named field per component; lookups go through an exhaustive match,
/// so a new `Component` variant does not compile without an entry here.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct DefaultsTable {
    registry: String,
    scan_engine: ComponentDefault,
    operator: ComponentDefault,
    content: ComponentDefault,
}

impl DefaultsTable {
    /// Builds the table with all defaults under `registry`.
    ///
    /// A trailing `/` is dropped.
    ///
    /// # Errors
    /// Returns `ImageError::InvalidRegistry` if the registry is empty.
    pub fn with_registry(registry: &str) -> Result<Self> {
        let registry = normalize_registry(registry)?;
        Ok(Self::build(registry))
    }

    /// Process-wide table using [`DEFAULT_REGISTRY`].
    pub fn builtin() -> &'static DefaultsTable {
        static BUILTIN: OnceLock<DefaultsTable> = OnceLock::new();
        BUILTIN.get_or_init(|| Self::build(builtin_registry(DEFAULT_REGISTRY)))
    }

    fn build(registry: &str) -> Self {
        Self {
            registry: registry.to_string(),
            scan_engine: ComponentDefault::for_component(Component::ScanEngine, registry),
            operator: ComponentDefault::for_component(Component::Operator, registry),
            content: ComponentDefault::for_component(Component::Content, registry),
        }
    }

    pub fn registry(&self) -> &str {
        &self.registry
    }

    pub fn get(&self, component: Component) -> &ComponentDefault {
        match component {
            Component::ScanEngine => &self.scan_engine,
            Component::Operator => &self.operator,
            Component::Content => &self.content,
        }
    }

    fn get_mut(&mut self, component: Component) -> &mut ComponentDefault {
        match component {
            Component::ScanEngine => &mut self.scan_engine,
            Component::Operator => &mut self.operator,
            Component::Content => &mut self.content,
        }
    }

    /// Replaces the default pull spec of one component.
    ///
    /// The override variable is unchanged.
    ///
    /// # Errors
    /// Returns `ImageError::InvalidConfig` if `image` is empty.
    pub fn set_default_image(&mut self, component: Component, image: impl Into<String>) -> Result<()> {
        let image = image.into();
        if image.trim().is_empty() {
            return Err(ImageError::InvalidConfig {
                message: format!("default image for '{}' must not be empty", component),
            }
            .into());
        }
        self.get_mut(component).default_image = image;
        Ok(())
    }

    /// Entries in ordinal order.
    pub fn iter(&self) -> impl Iterator<Item = (Component, &ComponentDefault)> {
        Component::ALL.into_iter().map(move |c| (c, self.get(c)))
    }
}

impl Default for DefaultsTable {
    fn default() -> Self {
        Self::builtin().clone()
    }
}

/// Normalized baked-in registry, or the fallback when it normalizes to nothing.
fn builtin_registry(raw: &str) -> &str {
    normalize_registry(raw).unwrap_or(FALLBACK_REGISTRY)
}

fn normalize_registry(registry: &str) -> Result<&str> {
    let trimmed = registry.trim().trim_end_matches('/');
    if trimmed.is_empty() {
        return Err(ImageError::InvalidRegistry {
            reason: "registry must not be empty".to_string(),
        }
        .into());
    }
    Ok(trimmed)
}
