//! The question form controller.

use std::sync::Arc;

use ama_client::{BackendClient, Document};
use ama_core::{AppError, AppResult};

use crate::expander::Expander;
use crate::state::{Action, FormEvent, FormState, Outcome};

/// Callback invoked after every state transition, with the updated form.
pub type FormObserver = Arc<dyn Fn(FormEvent, &QuestionForm) + Send + Sync>;

/// Interactive form: question in, answer and documents out.
///
/// Submits take `&mut self`, so a form never has two requests in flight.
/// There is no cancellation: a submit lasts as long as the backend call.
pub struct QuestionForm {
    client: Arc<dyn BackendClient>,
    state: FormState,
    expanders: Vec<Expander>,
    observer: Option<FormObserver>,
}

impl QuestionForm {
    pub fn new(client: Arc<dyn BackendClient>) -> Self {
        Self {
            client,
            state: FormState::default(),
            expanders: Vec::new(),
            observer: None,
        }
    }

    /// Register the callback that re-renders on state changes.
    pub fn with_observer(mut self, observer: FormObserver) -> Self {
        self.observer = Some(observer);
        self
    }

    pub fn state(&self) -> &FormState {
        &self.state
    }

    pub fn question(&self) -> &str {
        &self.state.question
    }

    pub fn answer(&self) -> &str {
        &self.state.answer
    }

    pub fn documents(&self) -> &[Document] {
        &self.state.documents
    }

    pub fn expanders(&self) -> &[Expander] {
        &self.expanders
    }

    pub fn is_loading(&self) -> bool {
        self.state.loading
    }

    pub fn set_question(&mut self, text: impl Into<String>) {
        self.state.question = text.into();
    }

    /// Send the question to `/chat`.
    ///
    /// On success the answer and documents are replaced; on failure the
    /// answer becomes `"Error: <message>"` and the document list stays empty.
    pub async fn submit_question(&mut self) -> Outcome {
        self.begin(Action::Ask);

        let question = self.state.question.clone();
        tracing::info!("Submitting question");
        tracing::debug!("Question: {}", question);

        let outcome = match self.client.chat(&question).await {
            Ok(response) => {
                tracing::debug!(
                    documents = response.documents.len(),
                    "Question answered"
                );
                self.state.answer = response.answer;
                self.set_documents(response.documents);
                Outcome::Success
            }
            Err(e) => self.fail(e),
        };

        self.finish(Action::Ask, outcome)
    }

    /// Send the text to `/indexing` as a URL to ingest.
    ///
    /// On success the answer is the backend's status text. Indexing never
    /// produces documents.
    pub async fn submit_indexing(&mut self) -> Outcome {
        self.begin(Action::Index);

        let url = self.state.question.clone();
        tracing::info!("Submitting URL for indexing: {}", url);

        let outcome = match self.client.index(&url).await {
            Ok(response) => {
                self.state.answer = response.response;
                Outcome::Success
            }
            Err(e) => self.fail(e),
        };

        self.finish(Action::Index, outcome)
    }

    /// Run `action` against the current question.
    pub async fn submit(&mut self, action: Action) -> Outcome {
        match action {
            Action::Ask => self.submit_question().await,
            Action::Index => self.submit_indexing().await,
        }
    }

    /// Open or close the document item at 0-based `index`.
    pub fn toggle_document(&mut self, index: usize) -> AppResult<bool> {
        let count = self.expanders.len();
        let item = self.expanders.get_mut(index).ok_or_else(|| {
            AppError::Ui(format!(
                "No document {} (the last answer has {} documents)",
                index + 1,
                count
            ))
        })?;

        let open = item.toggle();
        self.notify(FormEvent::Toggled { index, open });
        Ok(open)
    }

    fn begin(&mut self, action: Action) {
        self.state.answer.clear();
        self.set_documents(Vec::new());
        self.state.loading = true;
        tracing::debug!(action = action.as_str(), "Request dispatched");
        self.notify(FormEvent::Dispatched(action));
    }

    fn fail(&mut self, error: AppError) -> Outcome {
        tracing::error!("Error: {}", error);
        self.state.answer = format!("Error: {}", error);
        self.set_documents(Vec::new());
        Outcome::Failure
    }

    fn finish(&mut self, action: Action, outcome: Outcome) -> Outcome {
        self.state.loading = false;
        self.notify(FormEvent::Settled(action, outcome));
        outcome
    }

    fn set_documents(&mut self, documents: Vec<Document>) {
        self.expanders = documents
            .iter()
            .enumerate()
            .map(|(i, doc)| Expander::for_document(i, doc))
            .collect();
        self.state.documents = documents;
    }

    fn notify(&self, event: FormEvent) {
        if let Some(observer) = &self.observer {
            observer(event, self);
        }
    }
}
