// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use common::{CreateTodoInput, Todo};

/// Everything the todo view holds between renders.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct ViewState {
    pub todos: Vec<Todo>,
    pub is_loading: bool,
    pub is_creating: bool,
    pub form: CreateTodoInput,
}

/// A transition of [`ViewState`]. Applied through [`ViewState::apply`] only.
#[derive(Debug, Clone, PartialEq)]
pub enum Action {
    LoadStarted,
    LoadSucceeded(Vec<Todo>),
    LoadFinished,
    TitleEdited(String),
    /// Raw textarea content; empty text clears the description to `None`.
    DescriptionEdited(String),
    CreateStarted,
    CreateSucceeded(Todo),
    CreateFinished,
    CompletionUpdated { id: i64, completed: bool },
    Deleted(i64),
}

impl ViewState {
    pub fn apply(&mut self, action: Action) {
        match action {
            Action::LoadStarted => self.is_loading = true,
            Action::LoadSucceeded(todos) => self.todos = todos,
            Action::LoadFinished => self.is_loading = false,
            Action::TitleEdited(title) => self.form.title = title,
            Action::DescriptionEdited(text) => {
                self.form.description = if text.is_empty() { None } else { Some(text) };
            }
            Action::CreateStarted => self.is_creating = true,
            Action::CreateSucceeded(todo) => {
                self.todos.push(todo);
                self.form = CreateTodoInput::default();
            }
            Action::CreateFinished => self.is_creating = false,
            Action::CompletionUpdated { id, completed } => {
                // Only `completed` is merged; the rest of the local record is kept.
                if let Some(todo) = self.todos.iter_mut().find(|t| t.id == id) {
                    todo.completed = completed;
                }
            }
            Action::Deleted(id) => self.todos.retain(|t| t.id != id),
        }
    }

    /// Whether the create form may be submitted right now.
    pub fn can_submit(&self) -> bool {
        !self.is_creating && !self.form.title.trim().is_empty()
    }

    pub fn summary(&self) -> Summary {
        Summary {
            completed: self.todos.iter().filter(|t| t.completed).count(),
            total: self.todos.len(),
        }
    }
}

/// Progress figures derived from the current todos.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Summary {
    pub completed: usize,
    pub total: usize,
}

impl Summary {
    /// Completion percentage, rounded to the nearest integer. 0 for an empty list.
    pub fn percent(&self) -> u32 {
        if self.total == 0 {
            return 0;
        }
        (self.completed as f64 / self.total as f64 * 100.0).round() as u32
    }
}
