use crate::traits::Serializer;
use taskboard_core::{BoardError, BoardResult};

/// Compact JSON serializer for persisted records
pub struct JsonSerializer;

impl<T: serde::Serialize + serde::de::DeserializeOwned> Serializer<T> for JsonSerializer {
    fn serialize(&self, data: &T) -> BoardResult<String> {
        serde_json::to_string(data).map_err(|e| BoardError::Serialization(e.to_string()))
    }

    fn deserialize(&self, text: &str) -> BoardResult<T> {
        serde_json::from_str(text).map_err(|e| BoardError::Serialization(e.to_string()))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use taskboard_domain::{Board, Task, TaskId};

    #[test]
    fn test_board_wire_format() {
        let board = Board {
            todo: vec![Task::new(TaskId::from("1"), "Write spec", "")],
            ..Default::default()
        };
        let text = JsonSerializer.serialize(&board).unwrap();
        assert_eq!(
            text,
            r#"{"todo":[{"id":"1","title":"Write spec","desc":""}],"progress":[],"done":[]}"#
        );
    }

    #[test]
    fn test_deserialize_rejects_garbage() {
        let result: BoardResult<Board> = JsonSerializer.deserialize("{not json");
        assert!(matches!(result, Err(BoardError::Serialization(_))));
    }
}
