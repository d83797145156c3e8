use taskboard_core::BoardResult;

/// Durable string-keyed storage for serialized records.
/// Implementations handle different backends (files, memory, etc.)
#[cfg_attr(test, mockall::automock)]
pub trait KeyValueStore {
    /// Read the record under `key`, `None` when nothing was stored
    fn get(&self, key: &str) -> BoardResult<Option<String>>;

    /// Replace the record under `key`
    fn set(&mut self, key: &str, value: &str) -> BoardResult<()>;

    /// Remove the record under `key`; removing a missing key is not an error
    fn remove(&mut self, key: &str) -> BoardResult<()>;
}

/// Trait for serialization/deserialization strategies
pub trait Serializer<T> {
    /// Serialize data to text
    fn serialize(&self, data: &T) -> BoardResult<String>;

    /// Deserialize data from text
    fn deserialize(&self, text: &str) -> BoardResult<T>;
}
