// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use std::fmt;

use crate::state::ViewState;

/// Renders the whole view as terminal text.
pub fn render(state: &ViewState) -> String {
    TodoPage(state).to_string()
}

/// Text layout of one [`ViewState`].
pub struct TodoPage<'a>(pub &'a ViewState);

impl fmt::Display for TodoPage<'_> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let state = self.0;

        writeln!(f, "✅ Todo App")?;
        writeln!(f, "Stay organized and get things done!")?;
        writeln!(f)?;

        writeln!(f, "Add New Todo")?;
        writeln!(f, "  Title:       {}", state.form.title)?;
        writeln!(
            f,
            "  Description: {}",
            state.form.description.as_deref().unwrap_or_default()
        )?;
        let label = if state.is_creating {
            "Creating..."
        } else {
            "✨ Add Todo"
        };
        let disabled = if state.can_submit() { "" } else { " (disabled)" };
        writeln!(f, "  [{label}]{disabled}")?;
        writeln!(f)?;

        let summary = state.summary();
        if summary.total > 0 {
            writeln!(
                f,
                "📊 Progress: {} / {} completed ({}%)",
                summary.completed,
                summary.total,
                summary.percent()
            )?;
            writeln!(f)?;
        }

        writeln!(f, "📋 Your Todos")?;
        if state.is_loading {
            return writeln!(f, "  Loading todos...");
        }
        if state.todos.is_empty() {
            writeln!(f, "  🎉 No todos yet!")?;
            return writeln!(f, "  Create your first todo above to get started.");
        }

        for todo in &state.todos {
            let mark = if todo.completed { 'x' } else { ' ' };
            write!(f, "  [{mark}] #{} {}", todo.id, todo.title)?;
            if todo.completed {
                write!(f, "  ✅ Completed")?;
            }
            writeln!(f)?;
            // An empty description is not shown.
            if let Some(description) = todo.description.as_deref().filter(|d| !d.is_empty()) {
                writeln!(f, "      {description}")?;
            }
            writeln!(f, "      Created: {}", todo.created_at.format("%Y-%m-%d"))?;
        }
        Ok(())
    }
}
