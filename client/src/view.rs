// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use common::{DeleteTodoInput, UpdateTodoCompletionInput};
use parking_lot::Mutex;
use tracing::{debug, error, info};

use crate::api::TodoApi;
use crate::state::{Action, ViewState};

/// Drives a [`ViewState`] from user actions and remote call results.
///
/// Several calls may be in flight at once: each one applies its own result
/// when it resolves, so the last call to finish wins. Remote failures are
/// logged and leave the state as it was.
pub struct TodoView<A> {
    api: A,
    state: Mutex<ViewState>,
}

impl<A: TodoApi> TodoView<A> {
    pub fn new(api: A) -> Self {
        Self {
            api,
            state: Mutex::new(ViewState::default()),
        }
    }

    /// The backend this view talks to, for inspecting it from the outside.
    pub fn api(&self) -> &A {
        &self.api
    }

    /// Copy of the current state, for rendering.
    pub fn snapshot(&self) -> ViewState {
        self.state.lock().clone()
    }

    fn dispatch(&self, action: Action) {
        self.state.lock().apply(action);
    }

    pub fn edit_title(&self, title: impl Into<String>) {
        self.dispatch(Action::TitleEdited(title.into()));
    }

    pub fn edit_description(&self, text: impl Into<String>) {
        self.dispatch(Action::DescriptionEdited(text.into()));
    }

    /// Replaces the local todos with the server's list.
    pub async fn load(&self) {
        self.dispatch(Action::LoadStarted);
        match self.api.get_todos().await {
            Ok(todos) => {
                debug!("Loaded {} todos.", todos.len());
                self.dispatch(Action::LoadSucceeded(todos));
            }
            Err(e) => error!("Failed to load todos: {}", e),
        }
        self.dispatch(Action::LoadFinished);
    }

    /// Submits the create form. Does nothing while the title is blank.
    pub async fn submit(&self) {
        let input = {
            let state = self.state.lock();
            if state.form.title.trim().is_empty() {
                return;
            }
            state.form.clone()
        };

        self.dispatch(Action::CreateStarted);
        match self.api.create_todo(input).await {
            Ok(todo) => {
                info!("Created todo {}.", todo.id);
                self.dispatch(Action::CreateSucceeded(todo));
            }
            Err(e) => error!("Failed to create todo: {}", e),
        }
        self.dispatch(Action::CreateFinished);
    }

    pub async fn toggle(&self, id: i64, completed: bool) {
        let input = UpdateTodoCompletionInput { id, completed };
        match self.api.update_todo_completion(input).await {
            Ok(todo) => self.dispatch(Action::CompletionUpdated {
                id,
                completed: todo.completed,
            }),
            Err(e) => error!("Failed to update todo: {}", e),
        }
    }

    pub async fn delete(&self, id: i64) {
        match self.api.delete_todo(DeleteTodoInput { id }).await {
            Ok(output) => {
                if !output.success {
                    debug!("Todo {} was already gone on the server.", id);
                }
                self.dispatch(Action::Deleted(id));
            }
            Err(e) => error!("Failed to delete todo: {}", e),
        }
    }
}
