use related_images::prelude::*;
use std::cell::RefCell;
use std::collections::HashMap;

/// Mock EnvironmentReader that records every lookup
#[derive(Default)]
pub struct MockEnvironment {
    vars: HashMap<String, String>,
    reads: RefCell<Vec<String>>,
}

impl MockEnvironment {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_var(mut self, name: &str, value: &str) -> Self {
        self.vars.insert(name.to_string(), value.to_string());
        self
    }

    /// Variable names looked up so far, in order
    pub fn reads(&self) -> Vec<String> {
        self.reads.borrow().clone()
    }
}

impl EnvironmentReader for MockEnvironment {
    fn var(&self, name: &str) -> Option<String> {
        self.reads.borrow_mut().push(name.to_string());
        self.vars.get(name).cloned()
    }
}
