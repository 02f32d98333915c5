// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use std::path::PathBuf;

use anyhow::{Context, Result};
use chrono::Utc;
use common::{CreateTodoInput, Todo};
use sqlx::{migrate::MigrateDatabase, Sqlite, SqlitePool};
use tracing::{debug, info};

const CREATE_TODOS_TABLE: &str = r#"
    CREATE TABLE IF NOT EXISTS todos (
        id INTEGER PRIMARY KEY AUTOINCREMENT,
        title TEXT NOT NULL,
        description TEXT NULL,
        completed BOOLEAN NOT NULL DEFAULT FALSE,
        created_at TIMESTAMP NOT NULL,
        updated_at TIMESTAMP NOT NULL
    );
"#;

/// Establishes the database connection pool.
/// If the database does not exist, it creates it (and its parent directory).
/// It also ensures the `todos` table exists.
pub async fn establish_connection_pool(database_url: &str) -> Result<SqlitePool> {
    if let Some(dir) = sqlite_file_path(database_url).and_then(|p| p.parent().map(PathBuf::from)) {
        if !dir.as_os_str().is_empty() {
            std::fs::create_dir_all(&dir)
                .with_context(|| format!("Failed to create database directory {}", dir.display()))?;
        }
    }

    if !Sqlite::database_exists(database_url).await.unwrap_or(false) {
        info!("Creating database {}", database_url);
        Sqlite::create_database(database_url)
            .await
            .context("Failed to create database")?;
    } else {
        info!("Database already exists.");
    }

    let pool = SqlitePool::connect(database_url)
        .await
        .context("Failed to connect to database")?;

    init_schema(&pool).await?;

    Ok(pool)
}

/// Creates the `todos` table if it is missing.
pub async fn init_schema(pool: &SqlitePool) -> Result<()> {
    sqlx::query(CREATE_TODOS_TABLE)
        .execute(pool)
        .await
        .context("Failed to create 'todos' table")?;

    info!("'todos' table is ready.");
    Ok(())
}

/// Extracts the file path from a `sqlite:` URL, or `None` for in-memory databases.
fn sqlite_file_path(database_url: &str) -> Option<PathBuf> {
    let rest = database_url
        .strip_prefix("sqlite://")
        .or_else(|| database_url.strip_prefix("sqlite:"))?;
    let path = rest.split('?').next().unwrap_or_default();
    if path.is_empty() || path == ":memory:" {
        return None;
    }
    Some(PathBuf::from(path))
}

/// Retrieves every todo in insertion order.
pub async fn list_todos_from_db(pool: &SqlitePool) -> Result<Vec<Todo>> {
    let todos = sqlx::query_as::<_, Todo>(
        "SELECT id, title, description, completed, created_at, updated_at FROM todos ORDER BY id ASC",
    )
    .fetch_all(pool)
    .await
    .context("Failed to retrieve todos from DB")?;

    Ok(todos)
}

/// Inserts a new todo and returns the stored row, generated fields included.
pub async fn create_todo_in_db(pool: &SqlitePool, input: CreateTodoInput) -> Result<Todo> {
    let now = Utc::now();

    debug!(
        "Insert values: title={}, description={:?}, created_at={}",
        input.title, input.description, now
    );

    let todo = sqlx::query_as::<_, Todo>(
        "INSERT INTO todos (title, description, completed, created_at, updated_at) VALUES (?, ?, ?, ?, ?) RETURNING id, title, description, completed, created_at, updated_at",
    )
    .bind(&input.title)
    .bind(&input.description)
    .bind(false)
    .bind(now)
    .bind(now)
    .fetch_one(pool)
    .await
    .context("Failed to insert todo into DB")?;

    Ok(todo)
}

/// Sets `completed` and refreshes `updated_at` on one todo.
/// Returns `None` if no todo with the given ID exists.
pub async fn update_todo_completion_in_db(
    pool: &SqlitePool,
    todo_id: i64,
    completed: bool,
) -> Result<Option<Todo>> {
    debug!("Setting completed={} on todo {}", completed, todo_id);

    let todo = sqlx::query_as::<_, Todo>(
        "UPDATE todos SET completed = ?, updated_at = ? WHERE id = ? RETURNING id, title, description, completed, created_at, updated_at",
    )
    .bind(completed)
    .bind(Utc::now())
    .bind(todo_id)
    .fetch_optional(pool)
    .await
    .with_context(|| format!("Failed to update completion of todo with ID: {todo_id}"))?;

    Ok(todo)
}

/// Physically deletes a todo.
/// Returns true if a row was removed, false if no todo with the given ID was found.
pub async fn delete_todo_from_db(pool: &SqlitePool, todo_id: i64) -> Result<bool> {
    debug!("Attempting to delete todo with ID: {}", todo_id);

    let result = sqlx::query("DELETE FROM todos WHERE id = ?")
        .bind(todo_id)
        .execute(pool)
        .await
        .with_context(|| format!("Failed to delete todo with ID: {todo_id}"))?;

    let rows_affected = result.rows_affected();
    info!("Deleted {} rows for todo ID: {}", rows_affected, todo_id);

    Ok(rows_affected > 0)
}

#[cfg(test)]
mod tests {
    use super::*;
    use sqlx::sqlite::SqlitePoolOptions;
    use std::time::Duration;

    /// Helper function to set up an in-memory SQLite database for testing.
    /// A single connection keeps every query on the same in-memory database.
    async fn setup_test_db() -> Result<SqlitePool> {
        let pool = SqlitePoolOptions::new()
            .max_connections(1)
            .connect("sqlite::memory:")
            .await?;
        init_schema(&pool).await?;
        Ok(pool)
    }

    fn input(title: &str, description: Option<&str>) -> CreateTodoInput {
        CreateTodoInput {
            title: title.to_string(),
            description: description.map(str::to_string),
        }
    }

    #[tokio::test]
    async fn test_create_todo() {
        let pool = setup_test_db().await.unwrap();

        let todo = create_todo_in_db(&pool, input("T", Some("D"))).await.unwrap();

        assert!(todo.id > 0);
        assert_eq!(todo.title, "T");
        assert_eq!(todo.description.as_deref(), Some("D"));
        assert!(!todo.completed);
        assert_eq!(todo.created_at, todo.updated_at);
    }

    #[tokio::test]
    async fn test_create_todo_without_description() {
        let pool = setup_test_db().await.unwrap();

        let todo = create_todo_in_db(&pool, input("No description", None))
            .await
            .unwrap();
        assert_eq!(todo.description, None);

        let stored = list_todos_from_db(&pool).await.unwrap();
        assert_eq!(stored[0].description, None);
    }

    #[tokio::test]
    async fn test_empty_description_is_not_null() {
        let pool = setup_test_db().await.unwrap();

        create_todo_in_db(&pool, input("Empty", Some(""))).await.unwrap();

        let stored = list_todos_from_db(&pool).await.unwrap();
        assert_eq!(stored[0].description, Some(String::new()));
    }

    #[tokio::test]
    async fn test_list_keeps_insertion_order() {
        let pool = setup_test_db().await.unwrap();
        for title in ["Todo 1", "Todo 2", "Todo 3"] {
            create_todo_in_db(&pool, input(title, None)).await.unwrap();
        }

        let todos = list_todos_from_db(&pool).await.unwrap();
        let titles: Vec<&str> = todos.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Todo 1", "Todo 2", "Todo 3"]);

        let again = list_todos_from_db(&pool).await.unwrap();
        assert_eq!(todos, again);
    }

    #[tokio::test]
    async fn test_update_completion_refreshes_updated_at() {
        let pool = setup_test_db().await.unwrap();
        let created = create_todo_in_db(&pool, input("Toggle me", Some("desc")))
            .await
            .unwrap();

        tokio::time::sleep(Duration::from_millis(5)).await;
        let done = update_todo_completion_in_db(&pool, created.id, true)
            .await
            .unwrap()
            .expect("todo should exist");
        assert!(done.completed);
        assert_eq!(done.created_at, created.created_at);
        assert!(done.updated_at > created.updated_at);

        tokio::time::sleep(Duration::from_millis(5)).await;
        let undone = update_todo_completion_in_db(&pool, created.id, false)
            .await
            .unwrap()
            .expect("todo should exist");
        assert!(!undone.completed);
        assert!(undone.updated_at > done.updated_at);
        assert_eq!(undone.title, "Toggle me");
        assert_eq!(undone.description.as_deref(), Some("desc"));
    }

    #[tokio::test]
    async fn test_update_completion_missing_todo() {
        let pool = setup_test_db().await.unwrap();

        let result = update_todo_completion_in_db(&pool, 999, true).await.unwrap();
        assert!(result.is_none());
    }

    #[tokio::test]
    async fn test_delete_todo() {
        let pool = setup_test_db().await.unwrap();
        let todo = create_todo_in_db(&pool, input("Delete me", None))
            .await
            .unwrap();

        assert!(delete_todo_from_db(&pool, todo.id).await.unwrap());
        assert!(list_todos_from_db(&pool).await.unwrap().is_empty());

        // Second delete finds nothing.
        assert!(!delete_todo_from_db(&pool, todo.id).await.unwrap());
    }

    #[tokio::test]
    async fn test_delete_does_not_touch_other_todos() {
        let pool = setup_test_db().await.unwrap();
        create_todo_in_db(&pool, input("Todo 1", Some("First todo")))
            .await
            .unwrap();
        let middle = create_todo_in_db(&pool, input("Todo 2", Some("Second todo")))
            .await
            .unwrap();
        create_todo_in_db(&pool, input("Todo 3", Some("Third todo")))
            .await
            .unwrap();

        assert!(delete_todo_from_db(&pool, middle.id).await.unwrap());

        let remaining = list_todos_from_db(&pool).await.unwrap();
        let titles: Vec<&str> = remaining.iter().map(|t| t.title.as_str()).collect();
        assert_eq!(titles, ["Todo 1", "Todo 3"]);
    }

    #[tokio::test]
    async fn test_establish_pool_creates_file_and_directory() {
        let dir = tempfile::tempdir().unwrap();
        let db_path = dir.path().join("nested").join("todos.db");
        let url = format!("sqlite://{}", db_path.display());

        let pool = establish_connection_pool(&url).await.unwrap();
        create_todo_in_db(&pool, input("Persisted", None)).await.unwrap();
        pool.close().await;

        assert!(db_path.exists());
        let reopened = establish_connection_pool(&url).await.unwrap();
        let todos = list_todos_from_db(&reopened).await.unwrap();
        assert_eq!(todos.len(), 1);
        assert_eq!(todos[0].title, "Persisted");
    }

    #[test]
    fn test_sqlite_file_path() {
        assert_eq!(
            sqlite_file_path("sqlite://database/todos.db"),
            Some(PathBuf::from("database/todos.db"))
        );
        assert_eq!(
            sqlite_file_path("sqlite:todos.db?mode=rwc"),
            Some(PathBuf::from("todos.db"))
        );
        assert_eq!(sqlite_file_path("sqlite::memory:"), None);
        assert_eq!(sqlite_file_path("postgres://localhost/db"), None);
    }
}
