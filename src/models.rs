use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::TodoId;

/// A stored todo record as it appears on the wire.
/// The identifier keeps the store's historical field name `_id`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    #[serde(rename = "_id")]
    pub id: TodoId,
    pub text: String,
    pub completed: bool,
    pub created_at: DateTime<Utc>,
    pub updated_at: DateTime<Utc>,
}

#[derive(Debug, Deserialize)]
pub struct CreateTodoRequest {
    pub text: String,
    #[serde(default)]
    pub completed: bool,
}

/// PUT body: a full replacement of the mutable fields.
#[derive(Debug, Deserialize)]
pub struct UpdateTodoRequest {
    pub text: String,
    pub completed: bool,
}

#[derive(Debug, Serialize)]
pub struct DeleteTodoResponse {
    pub message: String,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn todo_serializes_id_under_wire_name() {
        let todo = Todo {
            id: TodoId::new(),
            text: "Test".to_string(),
            completed: false,
            created_at: Utc::now(),
            updated_at: Utc::now(),
        };

        let json = serde_json::to_value(&todo).unwrap();
        assert_eq!(json["_id"], todo.id.as_str());
        assert!(json.get("id").is_none());
        assert_eq!(json["text"], "Test");
        assert_eq!(json["completed"], false);
    }

    #[test]
    fn create_request_defaults_completed_to_false() {
        let input: CreateTodoRequest =
            serde_json::from_str(r#"{"text":"No completed field"}"#).unwrap();
        assert_eq!(input.text, "No completed field");
        assert!(!input.completed);
    }

    #[test]
    fn create_request_accepts_explicit_completed() {
        let input: CreateTodoRequest =
            serde_json::from_str(r#"{"text":"Done","completed":true}"#).unwrap();
        assert!(input.completed);
    }

    #[test]
    fn create_request_rejects_missing_text() {
        let result: Result<CreateTodoRequest, _> = serde_json::from_str(r#"{"completed":true}"#);
        assert!(result.is_err());
    }

    #[test]
    fn update_request_requires_both_fields() {
        let result: Result<UpdateTodoRequest, _> = serde_json::from_str(r#"{"text":"New text"}"#);
        assert!(result.is_err());

        let input: UpdateTodoRequest =
            serde_json::from_str(r#"{"text":"New text","completed":true}"#).unwrap();
        assert_eq!(input.text, "New text");
        assert!(input.completed);
    }
}
