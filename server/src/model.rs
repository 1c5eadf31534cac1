//! Wire and storage types for the todo resource.
//!
//! # Design
//! `TodoDraft` is what clients send; `Todo` is what the store keeps. They are
//! separate structs and `Todo::from_draft` is the only path from one to the
//! other, so the persisted shape never aliases request data.

use serde::{Deserialize, Serialize};

/// Identifier assigned by the store. Assigned ids are positive and start
/// at 1; any other integer is accepted on lookup and simply not found.
pub type TodoId = i64;

/// Message returned by a successful delete.
pub const DELETED_MESSAGE: &str = "Todo deleted successfully";

/// A persisted todo item.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct Todo {
    pub id: TodoId,
    pub title: String,
    pub completed: bool,
}

impl Todo {
    /// Build a fresh record from a draft. New todos always start incomplete.
    pub fn from_draft(id: TodoId, draft: TodoDraft) -> Self {
        Self {
            id,
            title: draft.title,
            completed: false,
        }
    }
}

/// Create/update payload.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct TodoDraft {
    pub title: String,
}

impl TodoDraft {
    pub fn new(title: impl Into<String>) -> Self {
        Self {
            title: title.into(),
        }
    }
}

/// Body of a successful delete.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct DeleteConfirmation {
    pub message: String,
}

impl Default for DeleteConfirmation {
    fn default() -> Self {
        Self {
            message: DELETED_MESSAGE.to_string(),
        }
    }
}

/// Body of every error response.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct ErrorBody {
    pub detail: String,
}
