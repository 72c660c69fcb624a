//! Form controller: validation, submission and feedback.

use std::sync::Arc;
use std::time::Duration;

use tokio::task::JoinHandle;
use tracing::{debug, warn};

use crate::client::form::{ContactForm, validate_field};
use crate::client::transport::ContactTransport;
use crate::client::view::FormView;

/// How long the success notice stays visible.
pub const SUCCESS_NOTICE_DURATION: Duration = Duration::from_secs(5);

pub const LOADING_LABEL: &str = "Enviando...";

/// Shown for every relay-side failure; provider detail never reaches the user.
pub const FAILURE_NOTICE: &str =
    "Hubo un error al enviar el formulario. Por favor, inténtalo de nuevo.";

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SubmitStatus {
    /// A required field failed; nothing was sent.
    Invalid,
    Sent,
    Failed,
}

/// Keeps the submit control busy until dropped.
struct BusyGuard<V: FormView + ?Sized>(Arc<V>);

impl<V: FormView + ?Sized> BusyGuard<V> {
    fn engage(view: Arc<V>) -> Self {
        view.set_busy(LOADING_LABEL);
        Self(view)
    }
}

impl<V: FormView + ?Sized> Drop for BusyGuard<V> {
    fn drop(&mut self) {
        self.0.set_idle();
    }
}

/// Drives a [`ContactForm`] through a [`FormView`] and a [`ContactTransport`].
pub struct FormController<V, T>
where
    V: FormView + 'static,
    T: ContactTransport,
{
    form: ContactForm,
    view: Arc<V>,
    transport: T,
    hide_timer: Option<JoinHandle<()>>,
}

impl<V, T> FormController<V, T>
where
    V: FormView + 'static,
    T: ContactTransport,
{
    pub fn new(view: Arc<V>, transport: T) -> Self {
        Self {
            form: ContactForm::new(),
            view,
            transport,
            hide_timer: None,
        }
    }

    pub fn form(&self) -> &ContactForm {
        &self.form
    }

    /// Sets a field's value. Returns `false` for an unknown field.
    pub fn set_value(&mut self, field: &str, value: impl Into<String>) -> bool {
        self.form.set(field, value)
    }

    /// Validates one field and renders or clears its error.
    ///
    /// Unknown fields are treated as valid.
    pub fn on_blur(&self, field: &str) -> bool {
        let Some(field) = self.form.field(field) else {
            return true;
        };

        match validate_field(field) {
            Ok(()) => {
                self.view.clear_field_error(field.name);
                true
            }
            Err(message) => {
                self.view.clear_field_error(field.name);
                self.view.show_field_error(field.name, message);
                false
            }
        }
    }

    pub fn on_focus(&self, field: &str) {
        self.view.clear_field_error(field);
    }

    /// Validates every required field, rendering each failure.
    ///
    /// Does not stop at the first failure, so every bad field is marked.
    pub fn validate(&self) -> bool {
        self.form
            .required_fields()
            .fold(true, |valid, field| self.on_blur(field.name) && valid)
    }

    /// Submits the form once.
    ///
    /// Invalid forms are never sent. While the request is in flight the submit
    /// control is busy; it is restored on every exit path, including a panic
    /// in the transport.
    pub async fn submit(&mut self) -> SubmitStatus {
        if !self.validate() {
            debug!("Contact form has invalid fields, not submitting");
            return SubmitStatus::Invalid;
        }

        let _busy = BusyGuard::engage(Arc::clone(&self.view));

        let payload = self.form.payload();
        let result = self.transport.submit(&payload).await;

        match result {
            Ok(reply) => {
                debug!(id = ?reply.id, "Contact form sent");
                self.view.show_success();
                self.form.reset();
                self.view.reset_fields();
                self.schedule_hide();
                SubmitStatus::Sent
            }
            Err(e) => {
                warn!("Form submission error: {}", e);
                self.view.show_failure(FAILURE_NOTICE);
                SubmitStatus::Failed
            }
        }
    }

    /// Hides the success notice after [`SUCCESS_NOTICE_DURATION`].
    ///
    /// A pending hide from an earlier submission is cancelled first.
    fn schedule_hide(&mut self) {
        if let Some(previous) = self.hide_timer.take() {
            previous.abort();
        }

        let view = Arc::clone(&self.view);
        self.hide_timer = Some(tokio::spawn(async move {
            tokio::time::sleep(SUCCESS_NOTICE_DURATION).await;
            view.hide_success();
        }));
    }
}
