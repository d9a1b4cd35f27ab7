//! Form state and the events emitted as it changes.

use ama_client::Document;

/// Everything the form displays.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct FormState {
    /// Text being edited. Kept across submits.
    pub question: String,

    /// Last answer (markdown). Empty means "no answer yet".
    pub answer: String,

    /// Documents from the last `/chat` reply, in server order
    pub documents: Vec<Document>,

    /// True strictly between dispatch and settle
    pub loading: bool,
}

impl FormState {
    pub fn has_answer(&self) -> bool {
        !self.answer.is_empty()
    }
}

/// The two submit buttons.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Action {
    /// Q&A: post the question to `/chat`
    Ask,
    /// Index: post the text as a URL to `/indexing`
    Index,
}

impl Action {
    pub fn as_str(&self) -> &'static str {
        match self {
            Self::Ask => "ask",
            Self::Index => "index",
        }
    }

    /// Button label.
    pub fn label(&self) -> &'static str {
        match self {
            Self::Ask => "Q&A",
            Self::Index => "Index",
        }
    }
}

/// How a submit settled.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Outcome {
    Success,
    /// The request failed; the answer holds the error text
    Failure,
}

impl Outcome {
    pub fn is_success(&self) -> bool {
        matches!(self, Self::Success)
    }
}

/// State transition reported to observers.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FormEvent {
    /// Request sent; loading turned on
    Dispatched(Action),
    /// Request finished; loading turned off
    Settled(Action, Outcome),
    /// A document item was opened or closed
    Toggled { index: usize, open: bool },
}
