// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
pub mod api;
pub mod command;
pub mod error;
pub mod render;
pub mod state;
pub mod view;

pub use api::{HttpTodoApi, TodoApi};
pub use error::ClientError;
pub use state::{Action, Summary, ViewState};
pub use view::TodoView;
