//! Scripted in-memory backend for testing and offline development.

use std::collections::VecDeque;
use std::sync::{Arc, Mutex};

use ama_core::{AppError, AppResult};
use tokio::sync::Notify;

use crate::client::BackendClient;
use crate::types::{ChatResponse, HealthStatus, IndexingResponse, ServiceBanner};

/// A backend call recorded by [`MockBackend`].
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum MockCall {
    Chat(String),
    Index(String),
    Health,
    Banner,
}

/// Mock backend with queued replies.
///
/// Each `chat`/`index` call pops the next queued reply; an empty queue
/// yields a request error. With a gate installed, calls wait for
/// [`MockBackend::release`] before answering, which holds a request
/// in flight for as long as a test needs.
#[derive(Default)]
pub struct MockBackend {
    chat_replies: Mutex<VecDeque<AppResult<ChatResponse>>>,
    index_replies: Mutex<VecDeque<AppResult<IndexingResponse>>>,
    calls: Mutex<Vec<MockCall>>,
    gate: Option<Arc<Notify>>,
}

impl MockBackend {
    pub fn new() -> Self {
        Self::default()
    }

    /// Hold every call until [`release`](Self::release) is called.
    pub fn gated(mut self) -> Self {
        self.gate = Some(Arc::new(Notify::new()));
        self
    }

    /// Queue a successful `/chat` reply.
    pub fn with_chat(self, response: ChatResponse) -> Self {
        self.push_chat(Ok(response));
        self
    }

    /// Queue a failing `/chat` reply.
    pub fn with_chat_error(self, message: impl Into<String>) -> Self {
        self.push_chat(Err(AppError::Request(message.into())));
        self
    }

    /// Queue a successful `/indexing` reply.
    pub fn with_index(self, response: impl Into<String>) -> Self {
        self.push_index(Ok(IndexingResponse {
            response: response.into(),
        }));
        self
    }

    /// Queue a failing `/indexing` reply.
    pub fn with_index_error(self, message: impl Into<String>) -> Self {
        self.push_index(Err(AppError::Request(message.into())));
        self
    }

    /// Let one held call proceed.
    pub fn release(&self) {
        if let Some(gate) = &self.gate {
            gate.notify_one();
        }
    }

    /// Calls received so far, in order.
    pub fn calls(&self) -> Vec<MockCall> {
        lock(&self.calls).clone()
    }

    fn push_chat(&self, reply: AppResult<ChatResponse>) {
        lock(&self.chat_replies).push_back(reply);
    }

    fn push_index(&self, reply: AppResult<IndexingResponse>) {
        lock(&self.index_replies).push_back(reply);
    }

    fn record(&self, call: MockCall) {
        lock(&self.calls).push(call);
    }

    async fn wait_for_gate(&self) {
        if let Some(gate) = &self.gate {
            gate.notified().await;
        }
    }
}

/// Lock a mutex, recovering the data if a panicking test poisoned it.
fn lock<T>(mutex: &Mutex<T>) -> std::sync::MutexGuard<'_, T> {
    mutex.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
}

#[async_trait::async_trait]
impl BackendClient for MockBackend {
    fn base_url(&self) -> &str {
        "mock://backend"
    }

    async fn chat(&self, message: &str) -> AppResult<ChatResponse> {
        self.record(MockCall::Chat(message.to_string()));
        self.wait_for_gate().await;

        let reply = lock(&self.chat_replies).pop_front();
        reply.unwrap_or_else(|| Err(AppError::Request("No mock reply queued for /chat".into())))
    }

    async fn index(&self, url: &str) -> AppResult<IndexingResponse> {
        self.record(MockCall::Index(url.to_string()));
        self.wait_for_gate().await;

        let reply = lock(&self.index_replies).pop_front();
        reply.unwrap_or_else(|| {
            Err(AppError::Request(
                "No mock reply queued for /indexing".into(),
            ))
        })
    }

    async fn health(&self) -> AppResult<HealthStatus> {
        self.record(MockCall::Health);
        Ok(HealthStatus {
            status: "ok".to_string(),
        })
    }

    async fn banner(&self) -> AppResult<ServiceBanner> {
        self.record(MockCall::Banner);
        Ok(ServiceBanner {
            message: "RAG API is running".to_string(),
        })
    }
}
