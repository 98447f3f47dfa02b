//! related-images - container image resolution for compliance operator components
//!
//! Each component (the OpenSCAP scan engine, the operator, the content bundle)
//! has a built-in default pull spec and an override environment variable.
//! A non-empty override wins; otherwise the default is used.
//!
//! # Architecture
//!
//! - **Images** (`images`): the component model, defaults table and resolver
//! - **Ports** (`ports`): interfaces for environment access and output formatting
//! - **Adapters** (`adapters`): concrete implementations of ports
//! - **Config** (`config`): optional YAML config file
//! - **Shared** (`shared`): error types and the `Result` alias
//!
//! # Example
//!
//! ```
//! use related_images::prelude::*;
//!
//! let env = MapEnvironment::new().with_var("RELATED_IMAGE_OPERATOR", "myregistry/custom-operator:v9");
//! let resolver = ImageResolver::new(env);
//!
//! assert_eq!(resolver.resolve(Component::Operator), "myregistry/custom-operator:v9");
//! assert!(resolver.resolve(Component::Content).ends_with("/ocp4:latest"));
//! ```

pub mod adapters;
pub mod config;
pub mod images;
pub mod ports;
pub mod shared;

/// Prelude module for convenient imports
pub mod prelude {
    pub use crate::adapters::outbound::environment::{MapEnvironment, ProcessEnvironment};
    pub use crate::adapters::outbound::formatters::{EnvFormatter, JsonFormatter, TextFormatter};
    pub use crate::images::component_image;
    pub use crate::images::domain::{
        Component, ComponentDefault, DefaultsTable, ImageSource, ResolvedImage, DEFAULT_REGISTRY,
    };
    pub use crate::images::services::ImageResolver;
    pub use crate::ports::outbound::{EnvironmentReader, ImageFormatter};
    pub use crate::shared::error::ImageError;
    pub use crate::shared::Result;
}
