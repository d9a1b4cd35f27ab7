//! Loading indicator shown while a request is in flight.

use std::sync::{Arc, Mutex};
use std::time::Duration;

use ama_form::{Action, FormEvent, FormObserver, QuestionForm};
use indicatif::{ProgressBar, ProgressStyle};

/// Spinner on stderr driven by form events.
///
/// Starts on dispatch and clears on settle. indicatif hides it when stderr
/// is not a terminal.
#[derive(Clone)]
pub struct LoadingSpinner {
    bar: Arc<Mutex<Option<ProgressBar>>>,
    no_color: bool,
}

impl LoadingSpinner {
    pub fn new(no_color: bool) -> Self {
        Self {
            bar: Arc::new(Mutex::new(None)),
            no_color,
        }
    }

    /// Observer to register on the form.
    pub fn observer(&self) -> FormObserver {
        let spinner = self.clone();
        Arc::new(move |event: FormEvent, _form: &QuestionForm| match event {
            FormEvent::Dispatched(action) => spinner.start(action),
            FormEvent::Settled(..) => spinner.stop(),
            FormEvent::Toggled { .. } => {}
        })
    }

    fn start(&self, action: Action) {
        let template = if self.no_color {
            "{spinner} {msg}"
        } else {
            "{spinner:.blue} {msg}"
        };

        let bar = ProgressBar::new_spinner();
        bar.enable_steady_tick(Duration::from_millis(100));
        bar.set_style(
            ProgressStyle::with_template(template)
                .unwrap_or_else(|_| ProgressStyle::default_spinner()),
        );
        bar.set_message(match action {
            Action::Ask => "Waiting for an answer...",
            Action::Index => "Indexing...",
        });

        if let Some(previous) = self.slot().replace(bar) {
            previous.finish_and_clear();
        }
    }

    fn stop(&self) {
        if let Some(bar) = self.slot().take() {
            bar.finish_and_clear();
        }
    }

    fn slot(&self) -> std::sync::MutexGuard<'_, Option<ProgressBar>> {
        self.bar.lock().unwrap_or_else(|poisoned| poisoned.into_inner())
    }
}
