//! Session storage
//!
//! Key/value storage scoped to the process lifetime, standing in for a
//! browser session store. Nothing is written to disk.

use std::collections::HashMap;

/// Session-scoped key/value store
#[derive(Debug, Default)]
pub struct SessionStore {
    values: HashMap<String, String>,
}

impl SessionStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn get(&self, key: &str) -> Option<&str> {
        self.values.get(key).map(String::as_str)
    }

    pub fn set(&mut self, key: &str, value: &str) {
        self.values.insert(key.to_string(), value.to_string());
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn set_get_overwrite() {
        let mut store = SessionStore::new();
        assert_eq!(store.get("k"), None);
        store.set("k", "v1");
        store.set("k", "v2");
        assert_eq!(store.get("k"), Some("v2"));
    }
}
