use crate::ports::outbound::EnvironmentReader;
use std::collections::HashMap;

/// MapEnvironment adapter backed by an in-memory map
///
/// Lets callers resolve images against an explicit set of variables
/// instead of the process environment.
#[derive(Debug, Clone, Default)]
pub struct MapEnvironment {
    vars: HashMap<String, String>,
}

impl MapEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    /// Adds a variable, builder style.
    pub fn with_var(mut self, name: impl Into<String>, value: impl Into<String>) -> Self {
        self.set(name, value);
        self
    }

    pub fn set(&mut self, name: impl Into<String>, value: impl Into<String>) {
        self.vars.insert(name.into(), value.into());
    }

    pub fn remove(&mut self, name: &str) -> Option<String> {
        self.vars.remove(name)
    }
}

impl<K, V> FromIterator<(K, V)> for MapEnvironment
where
    K: Into<String>,
    V: Into<String>,
{
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        Self {
            vars: iter
                .into_iter()
                .map(|(k, v)| (k.into(), v.into()))
                .collect(),
        }
    }
}

impl EnvironmentReader for MapEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.vars.get(name).cloned()
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_with_var_and_lookup() {
        let env = MapEnvironment::new().with_var("A", "1").with_var("B", "");
        assert_eq!(env.var("A").as_deref(), Some("1"));
        assert_eq!(env.var("B").as_deref(), Some(""));
        assert_eq!(env.var("C"), None);
    }

    #[test]
    fn test_set_and_remove() {
        let mut env = MapEnvironment::new();
        env.set("A", "1");
        env.set("A", "2");
        assert_eq!(env.var("A").as_deref(), Some("2"));
        assert_eq!(env.remove("A").as_deref(), Some("2"));
        assert_eq!(env.var("A"), None);
    }

    #[test]
    fn test_from_iterator() {
        let env: MapEnvironment = [("X", "x"), ("Y", "y")].into_iter().collect();
        assert_eq!(env.var("X").as_deref(), Some("x"));
        assert_eq!(env.var("Y").as_deref(), Some("y"));
    }
}
