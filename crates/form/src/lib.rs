//! Question form for the Ask Me Anything client.
//!
//! The form owns the only interactive state of the application: the
//! question being edited, the last answer, the last document list and the
//! loading flag. Submitting sends exactly one request through a
//! [`BackendClient`](ama_client::BackendClient) and folds the outcome back
//! into that state. The [`view`] module turns a form into page text.

pub mod expander;
pub mod form;
pub mod markdown;
pub mod state;
pub mod view;

pub use expander::Expander;
pub use form::{FormObserver, QuestionForm};
pub use state::{Action, FormEvent, FormState, Outcome};
pub use view::render_page;
