// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use crate::database;
use crate::error::AppError;
use axum::{
    extract::{Json, State},
    http::StatusCode,
};
use common::{CreateTodoInput, DeleteTodoInput, DeleteTodoOutput, Todo, UpdateTodoCompletionInput};
use sqlx::SqlitePool;
use tracing::{debug, info, warn};

/// Handler for `getTodos`.
pub async fn get_todos(State(pool): State<SqlitePool>) -> Result<Json<Vec<Todo>>, AppError> {
    let todos = database::list_todos_from_db(&pool).await?;
    info!("Successfully retrieved {} todos.", todos.len());
    Ok(Json(todos))
}

/// Handler for `createTodo`.
///
/// No check on the title here: blank titles are filtered by the client form.
pub async fn create_todo(
    State(pool): State<SqlitePool>,
    Json(input): Json<CreateTodoInput>,
) -> Result<(StatusCode, Json<Todo>), AppError> {
    debug!("Received request to create todo: {}", input.title);

    let new_todo = database::create_todo_in_db(&pool, input).await?;

    info!("Todo created successfully with ID: {}", new_todo.id);
    Ok((StatusCode::CREATED, Json(new_todo)))
}

/// Handler for `updateTodoCompletion`.
/// A missing todo is an error here, unlike in `delete_todo`.
pub async fn update_todo_completion(
    State(pool): State<SqlitePool>,
    Json(input): Json<UpdateTodoCompletionInput>,
) -> Result<Json<Todo>, AppError> {
    debug!(
        "Received request to set completed={} on todo {}",
        input.completed, input.id
    );

    match database::update_todo_completion_in_db(&pool, input.id, input.completed).await? {
        Some(todo) => {
            info!("Todo {} completion set to {}.", todo.id, todo.completed);
            Ok(Json(todo))
        }
        None => {
            warn!("Todo with ID {} not found for completion update.", input.id);
            Err(AppError::not_found(input.id))
        }
    }
}

/// Handler for `deleteTodo`.
/// Deleting an unknown id reports `success: false` instead of failing.
pub async fn delete_todo(
    State(pool): State<SqlitePool>,
    Json(input): Json<DeleteTodoInput>,
) -> Result<Json<DeleteTodoOutput>, AppError> {
    debug!("Attempting to delete todo with ID: {}", input.id);

    let success = database::delete_todo_from_db(&pool, input.id).await?;

    if success {
        info!("Todo with ID {} deleted successfully.", input.id);
    } else {
        info!("Todo with ID {} did not exist, nothing deleted.", input.id);
    }
    Ok(Json(DeleteTodoOutput { success }))
}
