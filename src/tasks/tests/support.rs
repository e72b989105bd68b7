// src/tasks/tests/support.rs
//! Shared test fixture: an in-memory stand-in for the task backend. Holds an
//! authoritative list, records every call, and can be told to fail or delay
//! specific operations.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex as StdMutex};
use std::time::Duration;

use async_trait::async_trait;
use chrono::Utc;

use crate::common::ClientError;
use crate::tasks::client::TaskApi;
use crate::tasks::models::*;

#[derive(Debug, Clone, PartialEq)]
pub enum Call {
    List,
    Create,
    Update(i64),
    Delete(i64),
    Validate,
}

#[derive(Default)]
pub struct FakeServer {
    tasks: StdMutex<Vec<Task>>,
    next_id: StdMutex<i64>,
    calls: StdMutex<Vec<Call>>,
    pub last_update: StdMutex<Option<TaskUpdate>>,
    list_failures: StdMutex<VecDeque<ClientError>>,
    create_failures: StdMutex<VecDeque<ClientError>>,
    update_failures: StdMutex<VecDeque<ClientError>>,
    delete_failures: StdMutex<VecDeque<ClientError>>,
    validate_failures: StdMutex<VecDeque<ClientError>>,
    /// Validations answered with `valid: false` instead of an error.
    invalid_validations: StdMutex<VecDeque<()>>,
    /// Per-update artificial latency, consumed in call order.
    update_delays: StdMutex<VecDeque<Duration>>,
}

impl FakeServer {
    pub fn with_tasks(tasks: Vec<Task>) -> Arc<Self> {
        let server = Self::default();
        *server.next_id.lock().unwrap() = tasks.iter().map(|t| t.id).max().unwrap_or(0) + 1;
        *server.tasks.lock().unwrap() = tasks;
        Arc::new(server)
    }

    pub fn fail_next_list(&self, err: ClientError) {
        self.list_failures.lock().unwrap().push_back(err);
    }

    pub fn fail_next_create(&self, err: ClientError) {
        self.create_failures.lock().unwrap().push_back(err);
    }

    pub fn fail_next_update(&self, err: ClientError) {
        self.update_failures.lock().unwrap().push_back(err);
    }

    pub fn fail_next_delete(&self, err: ClientError) {
        self.delete_failures.lock().unwrap().push_back(err);
    }

    pub fn fail_next_validate(&self, err: ClientError) {
        self.validate_failures.lock().unwrap().push_back(err);
    }

    pub fn invalidate_next_token(&self) {
        self.invalid_validations.lock().unwrap().push_back(());
    }

    pub fn delay_next_update(&self, delay: Duration) {
        self.update_delays.lock().unwrap().push_back(delay);
    }

    pub fn calls(&self) -> Vec<Call> {
        self.calls.lock().unwrap().clone()
    }

    pub fn count(&self, call: &Call) -> usize {
        self.calls().iter().filter(|c| *c == call).count()
    }

    fn record(&self, call: Call) {
        self.calls.lock().unwrap().push(call);
    }

    pub fn snapshot(&self) -> Vec<Task> {
        self.tasks.lock().unwrap().clone()
    }
}

#[async_trait]
impl TaskApi for FakeServer {
    async fn list_tasks(&self) -> Result<TaskListResponse, ClientError> {
        self.record(Call::List);
        if let Some(err) = self.list_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        let tasks = self.snapshot();
        let total = tasks.len() as i64;
        Ok(TaskListResponse { tasks, total })
    }

    async fn get_task(&self, id: i64) -> Result<Task, ClientError> {
        self.snapshot()
            .into_iter()
            .find(|t| t.id == id)
            .ok_or(ClientError::Api {
                status: 404,
                message: "Task not found".to_string(),
            })
    }

    async fn create_task(&self, payload: &TaskCreate) -> Result<Task, ClientError> {
        self.record(Call::Create);
        if let Some(err) = self.create_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        let id = {
            let mut next = self.next_id.lock().unwrap();
            let id = *next;
            *next += 1;
            id
        };
        let now = Utc::now();
        let task = Task {
            id,
            title: payload.title.clone(),
            description: payload.description.clone(),
            is_completed: false,
            user_id: 7,
            created_at: now,
            updated_at: now,
        };
        self.tasks.lock().unwrap().push(task.clone());
        Ok(task)
    }

    async fn update_task(&self, id: i64, payload: &TaskUpdate) -> Result<Task, ClientError> {
        self.record(Call::Update(id));
        *self.last_update.lock().unwrap() = Some(payload.clone());

        let delay = self.update_delays.lock().unwrap().pop_front();
        if let Some(delay) = delay {
            tokio::time::sleep(delay).await;
        }

        if let Some(err) = self.update_failures.lock().unwrap().pop_front() {
            return Err(err);
        }

        let mut tasks = self.tasks.lock().unwrap();
        let task = tasks
            .iter_mut()
            .find(|t| t.id == id)
            .ok_or(ClientError::Api {
                status: 404,
                message: "Task not found".to_string(),
            })?;
        if let Some(title) = &payload.title {
            task.title = title.clone();
        }
        if let Some(description) = &payload.description {
            task.description = description.clone();
        }
        if let Some(is_completed) = payload.is_completed {
            task.is_completed = is_completed;
        }
        task.updated_at = Utc::now();
        Ok(task.clone())
    }

    async fn delete_task(&self, id: i64) -> Result<(), ClientError> {
        self.record(Call::Delete(id));
        if let Some(err) = self.delete_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        self.tasks.lock().unwrap().retain(|t| t.id != id);
        Ok(())
    }

    async fn validate_token(&self) -> Result<TokenValidation, ClientError> {
        self.record(Call::Validate);
        if let Some(err) = self.validate_failures.lock().unwrap().pop_front() {
            return Err(err);
        }
        if self.invalid_validations.lock().unwrap().pop_front().is_some() {
            return Ok(TokenValidation {
                valid: false,
                user_id: String::new(),
                message: "Token has expired".to_string(),
            });
        }
        Ok(TokenValidation {
            valid: true,
            user_id: "7".to_string(),
            message: "Token is valid and user identity verified".to_string(),
        })
    }
}

pub fn task(id: i64, title: &str, is_completed: bool) -> Task {
    let now = Utc::now();
    Task {
        id,
        title: title.to_string(),
        description: None,
        is_completed,
        user_id: 7,
        created_at: now,
        updated_at: now,
    }
}

pub fn server_error() -> ClientError {
    ClientError::Api {
        status: 500,
        message: "Internal server error".to_string(),
    }
}
