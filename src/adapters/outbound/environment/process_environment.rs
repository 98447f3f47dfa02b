use crate::ports::outbound::EnvironmentReader;
use std::env::{self, VarError};

/// ProcessEnvironment adapter reading the real process environment
///
/// Reads are not atomic with respect to concurrent `set_var` calls;
/// override variables are expected to be set once at process start.
#[derive(Debug, Clone, Copy, Default)]
pub struct ProcessEnvironment;

impl ProcessEnvironment {
    pub fn new() -> Self {
        Self
    }
}

impl EnvironmentReader for ProcessEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        match env::var(name) {
            Ok(value) => Some(value),
            Err(VarError::NotPresent) => None,
            Err(VarError::NotUnicode(_)) => {
                tracing::warn!(variable = name, "ignoring environment variable with non UTF-8 value");
                None
            }
        }
    }
}
