//! Presentation seam for the form controller.

/// What the controller asks of whatever renders the form.
///
/// Implementations own their rendering state and must tolerate calls from
/// a spawned task (the success notice is hidden from a timer).
pub trait FormView: Send + Sync {
    /// Shows `message` right after `field`, replacing any previous error there.
    fn show_field_error(&self, field: &str, message: &str);

    fn clear_field_error(&self, field: &str);

    /// Disables the submit control and shows `label` on it.
    fn set_busy(&self, label: &str);

    /// Re-enables the submit control with its original content.
    fn set_idle(&self);

    fn show_success(&self);

    fn hide_success(&self);

    fn show_failure(&self, message: &str);

    /// Clears every rendered input.
    fn reset_fields(&self);
}
