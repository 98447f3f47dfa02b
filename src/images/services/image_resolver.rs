use crate::adapters::outbound::environment::ProcessEnvironment;
use crate::images::domain::{Component, DefaultsTable, ImageSource, ResolvedImage};
use crate::ports::outbound::EnvironmentReader;
use crate::shared::Result;

/// ImageResolver - resolves the pull spec of each component
///
/// A non-empty override variable wins; otherwise the table default is used.
/// Override values are returned verbatim, without trimming or validation.
///
/// # Type Parameters
/// * `E` - EnvironmentReader implementation
#[derive(Debug, Clone)]
pub struct ImageResolver<E> {
    environment: E,
    defaults: DefaultsTable,
}

impl<E: EnvironmentReader> ImageResolver<E> {
    /// Creates a resolver over the built-in defaults
    pub fn new(environment: E) -> Self {
        Self::with_defaults(environment, DefaultsTable::default())
    }

    pub fn with_defaults(environment: E, defaults: DefaultsTable) -> Self {
        Self {
            environment,
            defaults,
        }
    }

    pub fn defaults(&self) -> &DefaultsTable {
        &self.defaults
    }

    /// Returns the pull spec for `component`
    pub fn resolve(&self, component: Component) -> String {
        self.resolve_detailed(component).pull_spec
    }

    /// Returns the pull spec for the component at `ordinal`
    ///
    /// # Errors
    /// Returns `ImageError::InvalidComponent` if `ordinal` names no component.
    pub fn resolve_ordinal(&self, ordinal: u32) -> Result<String> {
        let component = Component::from_ordinal(ordinal)?;
        Ok(self.resolve(component))
    }

    /// Resolves `component` and reports which source supplied the pull spec
    pub fn resolve_detailed(&self, component: Component) -> ResolvedImage {
        let entry = self.defaults.get(component);

        let (pull_spec, source) = match self.environment.var(entry.env_var) {
            Some(value) if !value.is_empty() => (value, ImageSource::Override),
            _ => (entry.default_image.clone(), ImageSource::Default),
        };

        tracing::debug!(
            component = component.name(),
            env_var = entry.env_var,
            %source,
            pull_spec = %pull_spec,
            "resolved component image"
        );

        ResolvedImage {
            component,
            env_var: entry.env_var,
            pull_spec,
            source,
        }
    }

    /// Resolves every component, in ordinal order
    pub fn resolve_all(&self) -> Vec<ResolvedImage> {
        Component::ALL
            .into_iter()
            .map(|component| self.resolve_detailed(component))
            .collect()
    }
}

/// Returns the pull spec for `component` from the process environment,
/// falling back to the built-in default.
pub fn component_image(component: Component) -> String {
    ImageResolver::with_defaults(ProcessEnvironment::new(), DefaultsTable::builtin().clone())
        .resolve(component)
}
