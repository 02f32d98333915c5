// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use crate::handlers;
use axum::{
    routing::{get, post, MethodRouter},
    Router,
};
use common::Procedure;
use sqlx::SqlitePool;

/// Binds one procedure to its handler.
/// Queries are served over `GET`, mutations over `POST` with a JSON body.
fn procedure_route(procedure: Procedure) -> MethodRouter<SqlitePool> {
    match procedure {
        Procedure::GetTodos => get(handlers::get_todos),
        Procedure::CreateTodo => post(handlers::create_todo),
        Procedure::UpdateTodoCompletion => post(handlers::update_todo_completion),
        Procedure::DeleteTodo => post(handlers::delete_todo),
    }
}

/// Creates and configures the application router.
pub fn create_router(pool: SqlitePool) -> Router {
    Procedure::ALL
        .into_iter()
        .fold(Router::<SqlitePool>::new(), |router, procedure| {
            router.route(&procedure.path(), procedure_route(procedure))
        })
        // Adds the database pool to the application state
        .with_state(pool)
}
