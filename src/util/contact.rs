//! Contact form validation and submission.
//!
//! SYSTEM CONTEXT
//! ==============
//! The page's `#contact-form` posts to a form backend (Formspree by default,
//! or whatever the form's `action` names). Validation runs first so empty
//! or obviously broken submissions never leave the browser.

#[cfg(test)]
#[path = "contact_test.rs"]
mod contact_test;

use std::sync::OnceLock;

use regex::Regex;
use thiserror::Error;

static EMAIL_RE: OnceLock<Regex> = OnceLock::new();

pub const SENT_MESSAGE: &str = "Message sent!";
pub const SEND_FAILED_MESSAGE: &str = "Could not send your message. Please try again later.";

/// Validation failures. `Display` is the alert text shown to the visitor.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ContactError {
    #[error("Please fill in all fields.")]
    MissingField,

    #[error("Invalid email address.")]
    InvalidEmail,
}

/// A validated, trimmed contact submission.
#[derive(Clone, Debug, PartialEq, Eq)]
pub struct ContactMessage {
    pub name: String,
    pub email: String,
    pub message: String,
}

pub fn is_valid_email(email: &str) -> bool {
    let re = EMAIL_RE.get_or_init(|| Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").expect("email pattern compiles"));
    re.is_match(email)
}

/// Trim and validate raw form values.
///
/// # Errors
///
/// [`ContactError::MissingField`] when any field is absent or blank,
/// [`ContactError::InvalidEmail`] when the address fails the pattern.
pub fn validate(name: Option<&str>, email: Option<&str>, message: Option<&str>) -> Result<ContactMessage, ContactError> {
    let field = |v: Option<&str>| v.map(str::trim).filter(|v| !v.is_empty()).map(str::to_owned);
    let (Some(name), Some(email), Some(message)) = (field(name), field(email), field(message)) else {
        return Err(ContactError::MissingField);
    };
    if !is_valid_email(&email) {
        return Err(ContactError::InvalidEmail);
    }
    Ok(ContactMessage { name, email, message })
}

/// Submission endpoint: the form's own `action`, else the configured fallback.
pub fn endpoint<'a>(form_action: &'a str, fallback: &'a str) -> &'a str {
    let action = form_action.trim();
    if action.is_empty() { fallback } else { action }
}

/// Wire submit handling on the contact form, if the page has one.
#[cfg(feature = "csr")]
pub fn init(selector: &str, fallback_endpoint: &str) {
    use wasm_bindgen::JsCast;

    let Some(form) = crate::util::dom::query(selector).and_then(|el| el.dyn_into::<web_sys::HtmlFormElement>().ok())
    else {
        return;
    };
    let fallback = fallback_endpoint.to_owned();
    let target = form.clone();
    crate::util::dom::listen(&form, "submit", move |ev| {
        ev.prevent_default();
        let form = target.clone();
        let fallback = fallback.clone();
        leptos::task::spawn_local(async move {
            submit(form, &fallback).await;
        });
    });
}

#[cfg(feature = "csr")]
async fn submit(form: web_sys::HtmlFormElement, fallback: &str) {
    use crate::util::dom::alert;

    let Ok(data) = web_sys::FormData::new_with_form(&form) else {
        return;
    };
    let value = |key: &str| data.get(key).as_string();
    let (name, email, message) = (value("name"), value("email"), value("message"));
    if let Err(e) = validate(name.as_deref(), email.as_deref(), message.as_deref()) {
        alert(&e.to_string());
        return;
    }

    // `form.action()` resolves to the page URL when the attribute is absent.
    let action = form.get_attribute("action").unwrap_or_default();
    let url = endpoint(&action, fallback);
    let sent = async {
        gloo_net::http::Request::post(url)
            .header("Accept", "application/json")
            .body(data)?
            .send()
            .await
    }
    .await;
    match sent {
        Ok(_) => {
            alert(SENT_MESSAGE);
            form.reset();
        }
        Err(e) => {
            leptos::logging::error!("contact form submission failed: {e}");
            alert(SEND_FAILED_MESSAGE);
        }
    }
}
