// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

#[allow(clippy::doc_overindented_list_items)]
/// Represents a todo item as stored in the `todos` table.
///
/// Derivation attributes (derive):
/// - `Serialize`, `Deserialize`: Allows conversion to/from JSON on the RPC channel.
/// - `sqlx::FromRow`: Allows `sqlx` to build a `Todo` directly
///    from a database result row (`RETURNING *` and `SELECT *`).
#[derive(Serialize, Deserialize, Debug, Clone, PartialEq, sqlx::FromRow)]
pub struct Todo {
    pub id: i64,

    pub title: String,

    // `None` is stored as SQL NULL and is distinct from an empty string.
    pub description: Option<String>,

    pub completed: bool,

    pub created_at: DateTime<Utc>,

    // Equal to `created_at` on insert, refreshed by every completion update.
    pub updated_at: DateTime<Utc>,
}

/// Input of the `createTodo` procedure.
///
/// The server accepts any title, including an empty one. Rejecting blank
/// titles is left to the client form.
#[derive(Serialize, Deserialize, Debug, Clone, Default, PartialEq)]
pub struct CreateTodoInput {
    pub title: String,
    // Omitting the field is the same as sending `null`.
    #[serde(default)]
    pub description: Option<String>,
}

/// Input of the `updateTodoCompletion` procedure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct UpdateTodoCompletionInput {
    pub id: i64,
    pub completed: bool,
}

/// Input of the `deleteTodo` procedure.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTodoInput {
    pub id: i64,
}

/// Output of the `deleteTodo` procedure.
/// `success` is false when no todo had the requested id.
#[derive(Serialize, Deserialize, Debug, Clone, Copy, PartialEq, Eq)]
pub struct DeleteTodoOutput {
    pub success: bool,
}

/// Whether a procedure reads (`GET`) or mutates (`POST`).
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProcedureKind {
    Query,
    Mutation,
}

/// The closed set of remote procedures exposed by the server.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Procedure {
    GetTodos,
    CreateTodo,
    UpdateTodoCompletion,
    DeleteTodo,
}

impl Procedure {
    pub const ALL: [Procedure; 4] = [
        Procedure::GetTodos,
        Procedure::CreateTodo,
        Procedure::UpdateTodoCompletion,
        Procedure::DeleteTodo,
    ];

    /// Name of the procedure on the wire.
    pub fn name(self) -> &'static str {
        match self {
            Procedure::GetTodos => "getTodos",
            Procedure::CreateTodo => "createTodo",
            Procedure::UpdateTodoCompletion => "updateTodoCompletion",
            Procedure::DeleteTodo => "deleteTodo",
        }
    }

    pub fn kind(self) -> ProcedureKind {
        match self {
            Procedure::GetTodos => ProcedureKind::Query,
            _ => ProcedureKind::Mutation,
        }
    }

    /// Route path relative to the server root, e.g. `/rpc/getTodos`.
    pub fn path(self) -> String {
        format!("/rpc/{}", self.name())
    }
}
