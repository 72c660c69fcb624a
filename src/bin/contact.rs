//! Terminal client for the contact relay.
//!
//! Fills in the contact form from flags or interactive prompts, validates it
//! with the same rules as the web form, and submits it once to the relay.
//!
//! # Usage
//!
//! ```bash
//! # Fully interactive
//! cargo run --bin contact
//!
//! # Pre-filled, no confirmation
//! cargo run --bin contact -- -n "Ana" -e ana@example.com -m "Quiero una demo" -y
//!
//! # Against a deployed relay
//! cargo run --bin contact -- --endpoint https://automatech.cx/api/contact
//! ```
//!
//! # Environment Variables
//!
//! - `CONTACT_ENDPOINT` (optional): relay URL, same as `--endpoint`

use contact_relay::client::{
    FormController, FormView, HttpTransport, SubmitStatus, validate_field,
};

use anyhow::Result;
use clap::Parser;
use colored::*;
use dialoguer::{Confirm, Input};
use std::sync::Arc;
use url::Url;

/// Send a message through the contact relay.
#[derive(Parser)]
#[command(name = "contact")]
#[command(author, version, about, long_about = None)]
struct Cli {
    /// Relay endpoint
    #[arg(
        long,
        env = "CONTACT_ENDPOINT",
        default_value = "http://localhost:3000/api/contact"
    )]
    endpoint: Url,

    /// Your name
    #[arg(short, long)]
    name: Option<String>,

    /// Reply-to email address
    #[arg(short, long)]
    email: Option<String>,

    /// Phone number (optional)
    #[arg(short, long)]
    phone: Option<String>,

    /// Message body
    #[arg(short, long)]
    message: Option<String>,

    /// Skip confirmation prompt
    #[arg(short = 'y', long)]
    yes: bool,
}

/// Renders form feedback to the terminal.
///
/// Terminal output cannot be retracted, so clearing is a no-op.
struct TerminalView;

impl FormView for TerminalView {
    fn show_field_error(&self, field: &str, message: &str) {
        eprintln!("  {} {}", "✗".red().bold(), format!("{field}: {message}").red());
    }

    fn clear_field_error(&self, _field: &str) {}

    fn set_busy(&self, label: &str) {
        println!("{}", label.yellow());
    }

    fn set_idle(&self) {}

    fn show_success(&self) {
        println!(
            "{}",
            "✓ ¡Mensaje enviado! Te responderemos pronto.".green().bold()
        );
    }

    fn hide_success(&self) {}

    fn show_failure(&self, message: &str) {
        eprintln!("{}", message.red().bold());
    }

    fn reset_fields(&self) {}
}

type Controller = FormController<TerminalView, HttpTransport>;

#[tokio::main]
async fn main() -> Result<()> {
    dotenvy::dotenv().ok();

    let cli = Cli::parse();

    let mut controller = Controller::new(
        Arc::new(TerminalView),
        HttpTransport::new(cli.endpoint.clone()),
    );

    println!("{}", "✉  Contacto".bright_blue().bold());
    println!("  Relay: {}", cli.endpoint.as_str().cyan());
    println!();

    let preset = [
        ("name", cli.name),
        ("email", cli.email),
        ("phone", cli.phone),
        ("message", cli.message),
    ];
    for (field, value) in preset {
        if let Some(value) = value {
            controller.set_value(field, value);
        }
    }

    // The honeypot is never shown to a human.
    let visible: Vec<(&'static str, &'static str)> = controller
        .form()
        .fields()
        .iter()
        .filter(|f| f.name != "company")
        .map(|f| (f.name, f.label))
        .collect();

    for &(name, label) in &visible {
        if controller.form().value(name).is_empty() {
            prompt_field(&mut controller, name, label)?;
        }
    }

    loop {
        if !cli.yes {
            let confirmed = Confirm::new()
                .with_prompt("¿Enviar mensaje?")
                .default(true)
                .interact()?;

            if !confirmed {
                println!("{}", "Cancelado".red());
                return Ok(());
            }
        }

        match controller.submit().await {
            SubmitStatus::Sent => return Ok(()),
            SubmitStatus::Invalid => {
                for &(name, label) in &visible {
                    let invalid = controller
                        .form()
                        .field(name)
                        .is_some_and(|f| validate_field(f).is_err());
                    if invalid {
                        prompt_field(&mut controller, name, label)?;
                    }
                }
            }
            SubmitStatus::Failed => {
                let retry = !cli.yes
                    && Confirm::new()
                        .with_prompt("¿Reintentar?")
                        .default(false)
                        .interact()?;

                if !retry {
                    anyhow::bail!("the message was not sent");
                }
            }
        }
    }
}

/// Prompts for one field and validates it as if it had lost focus.
fn prompt_field(controller: &mut Controller, name: &str, label: &str) -> Result<()> {
    controller.on_focus(name);

    let value: String = Input::new()
        .with_prompt(label)
        .with_initial_text(controller.form().value(name))
        .allow_empty(true)
        .interact_text()?;

    controller.set_value(name, value);
    controller.on_blur(name);

    Ok(())
}
