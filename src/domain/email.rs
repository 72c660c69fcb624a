//! Outbound email construction.
//!
//! Bodies come from `templates/contact.txt` and `templates/contact.html`.
//! The HTML template does no escaping of its own: every value is passed
//! through [`escape_html`] before it reaches the template.

use askama::Template;
use serde::Serialize;

use crate::domain::submission::{RequestContext, Submission};

/// Payload accepted by the provider's send endpoint.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct OutboundEmail {
    pub from: String,
    pub to: Vec<String>,
    pub subject: String,
    pub text: String,
    pub html: String,
    pub reply_to: String,
}

#[derive(Template)]
#[template(path = "contact.txt")]
struct TextBody<'a> {
    name: &'a str,
    email: &'a str,
    message: &'a str,
    client_ip: &'a str,
    user_agent: &'a str,
    referer: &'a str,
}

#[derive(Template)]
#[template(path = "contact.html", escape = "none")]
struct HtmlBody {
    name: String,
    email: String,
    message: String,
    client_ip: String,
    user_agent: String,
    referer: String,
}

/// Escapes the five HTML-reserved characters.
///
/// ```
/// use contact_relay::domain::email::escape_html;
///
/// assert_eq!(escape_html(r#"<a href="x">Tom & Jerry's</a>"#),
///     "&lt;a href=&quot;x&quot;&gt;Tom &amp; Jerry&#039;s&lt;/a&gt;");
/// ```
pub fn escape_html(input: &str) -> String {
    let mut out = String::with_capacity(input.len());
    for ch in input.chars() {
        match ch {
            '&' => out.push_str("&amp;"),
            '<' => out.push_str("&lt;"),
            '>' => out.push_str("&gt;"),
            '"' => out.push_str("&quot;"),
            '\'' => out.push_str("&#039;"),
            _ => out.push(ch),
        }
    }
    out
}

pub fn subject_for(name: &str) -> String {
    format!("Nueva solicitud — {name}")
}

/// Builds the email for a validated submission.
///
/// # Errors
///
/// Returns an error if a template fails to render.
pub fn compose(
    submission: &Submission,
    context: &RequestContext,
    sender: &str,
    recipient: &str,
) -> Result<OutboundEmail, askama::Error> {
    let text = TextBody {
        name: &submission.name,
        email: &submission.email,
        message: &submission.message,
        client_ip: &context.client_ip,
        user_agent: &context.user_agent,
        referer: &context.referer,
    }
    .render()?;

    let html = HtmlBody {
        name: escape_html(&submission.name),
        email: escape_html(&submission.email),
        message: escape_html(&submission.message),
        client_ip: escape_html(&context.client_ip),
        user_agent: escape_html(&context.user_agent),
        referer: escape_html(&context.referer),
    }
    .render()?;

    Ok(OutboundEmail {
        from: sender.to_string(),
        to: vec![recipient.to_string()],
        subject: subject_for(&submission.name),
        text,
        html,
        reply_to: submission.email.clone(),
    })
}
