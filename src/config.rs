//! Configuration file support for related-images.
//!
//! Provides YAML-based configuration through `related-images.config.yml`
//! files: the default registry and per-component default pull specs.
//! Environment overrides still take precedence over anything set here.

use anyhow::Context;
use serde::Deserialize;
use std::collections::{BTreeMap, HashMap};
use std::path::Path;

use crate::images::domain::{Component, DefaultsTable};
use crate::shared::error::ImageError;
use crate::shared::Result;

pub const CONFIG_FILENAME: &str = "related-images.config.yml";

/// Top-level configuration file schema.
#[derive(Debug, Deserialize, Default)]
pub struct ConfigFile {
    pub registry: Option<String>,
    /// Default pull spec per component name.
    pub images: Option<BTreeMap<String, String>>,
    /// Captures unknown fields for warnings.
    #[serde(flatten)]
    pub unknown_fields: HashMap<String, serde_yaml_ng::Value>,
}

/// Load config from an explicit path. Returns an error if the file is not found.
pub fn load_config_from_path(path: &Path) -> Result<ConfigFile> {
    let content = std::fs::read_to_string(path).with_context(|| {
        format!(
            "Failed to read config file: {}\n\n💡 Hint: Check that the file exists and is readable.",
            path.display()
        )
    })?;

    let config: ConfigFile = serde_yaml_ng::from_str(&content).with_context(|| {
        format!(
            "Failed to parse config file: {}\n\n💡 Hint: Ensure the file contains valid YAML syntax.",
            path.display()
        )
    })?;

    validate_config(&config)?;
    warn_unknown_fields(&config);

    Ok(config)
}

/// Auto-discover config in a directory. Returns `None` silently if not found.
pub fn discover_config(dir: &Path) -> Result<Option<ConfigFile>> {
    let config_path = dir.join(CONFIG_FILENAME);

    if !config_path.exists() {
        return Ok(None);
    }

    let config = load_config_from_path(&config_path)?;
    Ok(Some(config))
}

/// Builds the defaults table from the config file and an optional registry override.
///
/// Registry precedence: `registry_override`, then the config file, then the
/// built-in registry. Per-component `images` entries are applied last.
pub fn build_defaults(config: Option<&ConfigFile>, registry_override: Option<&str>) -> Result<DefaultsTable> {
    let registry = registry_override.or_else(|| config.and_then(|c| c.registry.as_deref()));

    let mut table = match registry {
        Some(registry) => DefaultsTable::with_registry(registry)?,
        None => DefaultsTable::default(),
    };

    if let Some(images) = config.and_then(|c| c.images.as_ref()) {
        for (name, image) in images {
            let component: Component = name.parse()?;
            table.set_default_image(component, image.as_str())?;
        }
    }

    Ok(table)
}

/// Validate the loaded configuration.
fn validate_config(config: &ConfigFile) -> Result<()> {
    if let Some(ref registry) = config.registry {
        if registry.trim().trim_end_matches('/').is_empty() {
            return Err(ImageError::InvalidConfig {
                message: "registry must not be empty.\n\n\
                          💡 Hint: Remove the 'registry' field to use the built-in registry."
                    .to_string(),
            }
            .into());
        }
    }

    if let Some(ref images) = config.images {
        for (name, image) in images {
            if name.parse::<Component>().is_err() {
                return Err(ImageError::InvalidConfig {
                    message: format!(
                        "images.{} is not a known component.\n\n\
                         💡 Hint: Use one of 'openscap', 'operator' or 'content'.",
                        name
                    ),
                }
                .into());
            }
            if image.trim().is_empty() {
                return Err(ImageError::InvalidConfig {
                    message: format!("images.{} must not be empty.", name),
                }
                .into());
            }
        }
    }
    Ok(())
}

/// Warn about unknown fields in the config file.
fn warn_unknown_fields(config: &ConfigFile) {
    for key in config.unknown_fields.keys() {
        eprintln!(
            "⚠️  Warning: Unknown config field '{}' will be ignored.",
            key
        );
    }
}
