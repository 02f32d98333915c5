// Copyright (c) 2025 sbksba
//
// This software is licensed under the terms of the MIT License.
// See the LICENSE file in the project root for the full license text.
use async_trait::async_trait;
use common::{
    CreateTodoInput, DeleteTodoInput, DeleteTodoOutput, Procedure, ProcedureKind, Todo,
    UpdateTodoCompletionInput,
};
use reqwest::{Client, Response};
use serde::{Serialize, de::DeserializeOwned};
use tracing::debug;

use crate::error::ClientError;

/// The typed remote procedures, one method per procedure.
#[async_trait]
pub trait TodoApi: Send + Sync {
    async fn get_todos(&self) -> Result<Vec<Todo>, ClientError>;

    async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, ClientError>;

    async fn update_todo_completion(
        &self,
        input: UpdateTodoCompletionInput,
    ) -> Result<Todo, ClientError>;

    async fn delete_todo(&self, input: DeleteTodoInput) -> Result<DeleteTodoOutput, ClientError>;
}

/// `TodoApi` over HTTP against a running todo server.
#[derive(Debug, Clone)]
pub struct HttpTodoApi {
    base_url: String,
    client: Client,
}

impl HttpTodoApi {
    /// `base_url` is the server root, e.g. `http://127.0.0.1:3000`.
    pub fn new(base_url: impl Into<String>) -> Self {
        Self {
            base_url: base_url.into().trim_end_matches('/').to_string(),
            client: Client::new(),
        }
    }

    fn url(&self, procedure: Procedure) -> String {
        format!("{}{}", self.base_url, procedure.path())
    }

    async fn query<O: DeserializeOwned>(&self, procedure: Procedure) -> Result<O, ClientError> {
        debug_assert_eq!(procedure.kind(), ProcedureKind::Query);
        debug!("Calling query {}", procedure.name());
        let response = self.client.get(self.url(procedure)).send().await?;
        decode(response).await
    }

    async fn mutate<I, O>(&self, procedure: Procedure, input: &I) -> Result<O, ClientError>
    where
        I: Serialize + Sync,
        O: DeserializeOwned,
    {
        debug_assert_eq!(procedure.kind(), ProcedureKind::Mutation);
        debug!("Calling mutation {}", procedure.name());
        let response = self
            .client
            .post(self.url(procedure))
            .json(input)
            .send()
            .await?;
        decode(response).await
    }
}

/// Turns a response into the procedure output, or into `ClientError::Server`
/// carrying the server's error message.
async fn decode<O: DeserializeOwned>(response: Response) -> Result<O, ClientError> {
    let status = response.status();
    let body = response.bytes().await?;

    if !status.is_success() {
        let message = serde_json::from_slice::<serde_json::Value>(&body)
            .ok()
            .and_then(|v| v.get("error").and_then(|e| e.as_str()).map(str::to_string))
            .unwrap_or_else(|| status.canonical_reason().unwrap_or("unknown error").to_string());
        return Err(ClientError::Server {
            status: status.as_u16(),
            message,
        });
    }

    Ok(serde_json::from_slice(&body)?)
}

#[async_trait]
impl TodoApi for HttpTodoApi {
    async fn get_todos(&self) -> Result<Vec<Todo>, ClientError> {
        self.query(Procedure::GetTodos).await
    }

    async fn create_todo(&self, input: CreateTodoInput) -> Result<Todo, ClientError> {
        self.mutate(Procedure::CreateTodo, &input).await
    }

    async fn update_todo_completion(
        &self,
        input: UpdateTodoCompletionInput,
    ) -> Result<Todo, ClientError> {
        self.mutate(Procedure::UpdateTodoCompletion, &input).await
    }

    async fn delete_todo(&self, input: DeleteTodoInput) -> Result<DeleteTodoOutput, ClientError> {
        self.mutate(Procedure::DeleteTodo, &input).await
    }
}
