//! Contact form client.
//!
//! The browser-facing half of the contact pathway: field validation with
//! inline errors, a single JSON submission to the relay, and success or
//! failure feedback. Rendering is abstracted behind [`FormView`] so the same
//! controller drives a terminal (see the `contact` binary) or any other UI.
//!
//! # Modules
//!
//! - [`form`] - Field model, field checks and the posted payload
//! - [`view`] - [`FormView`] rendering trait
//! - [`transport`] - [`ContactTransport`] trait and the `reqwest` implementation
//! - [`controller`] - [`FormController`] tying them together

pub mod controller;
pub mod form;
pub mod transport;
pub mod view;

pub use controller::{FormController, SubmitStatus};
pub use form::{ContactForm, ContactPayload, FieldKind, FormField, validate_field};
pub use transport::{ContactTransport, HttpTransport, RelayReply, SubmitError};
pub use view::FormView;
