use crate::traits::KeyValueStore;
use std::collections::HashMap;
use taskboard_core::BoardResult;

/// Process-local storage for headless sessions and tests
#[derive(Debug, Clone, Default)]
pub struct MemoryKeyValueStore {
    records: HashMap<String, String>,
}

impl MemoryKeyValueStore {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn with_record(key: impl Into<String>, value: impl Into<String>) -> Self {
        let mut records = HashMap::new();
        records.insert(key.into(), value.into());
        Self { records }
    }

    pub fn raw(&self, key: &str) -> Option<&str> {
        self.records.get(key).map(String::as_str)
    }
}

impl KeyValueStore for MemoryKeyValueStore {
    fn get(&self, key: &str) -> BoardResult<Option<String>> {
        Ok(self.records.get(key).cloned())
    }

    fn set(&mut self, key: &str, value: &str) -> BoardResult<()> {
        self.records.insert(key.to_string(), value.to_string());
        Ok(())
    }

    fn remove(&mut self, key: &str) -> BoardResult<()> {
        self.records.remove(key);
        Ok(())
    }
}
