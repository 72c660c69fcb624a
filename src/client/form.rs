//! Contact form model and field-level checks.

use serde::Serialize;

use crate::domain::validation::{is_email_shape, is_phone_shape};

pub const REQUIRED_MESSAGE: &str = "Este campo es obligatorio";
pub const EMAIL_MESSAGE: &str = "Por favor, introduce un email válido";
pub const PHONE_MESSAGE: &str = "Por favor, introduce un teléfono válido";

/// Input type, which decides the shape check applied to a non-empty value.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum FieldKind {
    Text,
    Email,
    Tel,
    TextArea,
}

#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FormField {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: FieldKind,
    pub required: bool,
    pub value: String,
}

impl FormField {
    fn new(name: &'static str, label: &'static str, kind: FieldKind, required: bool) -> Self {
        Self {
            name,
            label,
            kind,
            required,
            value: String::new(),
        }
    }
}

/// Checks one field against its kind and `required` flag.
///
/// Empty optional fields always pass. A shape failure takes precedence
/// over the required message, though an empty value never reaches it.
pub fn validate_field(field: &FormField) -> Result<(), &'static str> {
    let value = field.value.trim();

    if value.is_empty() {
        return if field.required {
            Err(REQUIRED_MESSAGE)
        } else {
            Ok(())
        };
    }

    match field.kind {
        FieldKind::Email if !is_email_shape(value) => Err(EMAIL_MESSAGE),
        FieldKind::Tel if !is_phone_shape(value) => Err(PHONE_MESSAGE),
        _ => Ok(()),
    }
}

/// JSON body posted to the relay. `company` is the honeypot and is always sent.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize)]
pub struct ContactPayload {
    pub name: String,
    pub email: String,
    pub phone: String,
    pub message: String,
    pub company: String,
}

/// The contact form: name, email, phone, message and the hidden `company` field.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct ContactForm {
    fields: Vec<FormField>,
}

impl Default for ContactForm {
    fn default() -> Self {
        Self::new()
    }
}

impl ContactForm {
    pub fn new() -> Self {
        Self {
            fields: vec![
                FormField::new("name", "Nombre", FieldKind::Text, true),
                FormField::new("email", "Email", FieldKind::Email, true),
                FormField::new("phone", "Teléfono", FieldKind::Tel, false),
                FormField::new("message", "Mensaje", FieldKind::TextArea, true),
                FormField::new("company", "Empresa", FieldKind::Text, false),
            ],
        }
    }

    pub fn fields(&self) -> &[FormField] {
        &self.fields
    }

    pub fn field(&self, name: &str) -> Option<&FormField> {
        self.fields.iter().find(|f| f.name == name)
    }

    /// Sets a field's value. Returns `false` for an unknown field.
    pub fn set(&mut self, name: &str, value: impl Into<String>) -> bool {
        match self.fields.iter_mut().find(|f| f.name == name) {
            Some(field) => {
                field.value = value.into();
                true
            }
            None => false,
        }
    }

    pub fn value(&self, name: &str) -> &str {
        self.field(name).map(|f| f.value.as_str()).unwrap_or("")
    }

    pub fn required_fields(&self) -> impl Iterator<Item = &FormField> {
        self.fields.iter().filter(|f| f.required)
    }

    pub fn reset(&mut self) {
        for field in &mut self.fields {
            field.value.clear();
        }
    }

    pub fn payload(&self) -> ContactPayload {
        ContactPayload {
            name: self.value("name").to_string(),
            email: self.value("email").to_string(),
            phone: self.value("phone").to_string(),
            message: self.value("message").to_string(),
            company: self.value("company").to_string(),
        }
    }
}
