//! Demo host: a signup form wired to the `.Field` components.
//!
//! The form state lives here, in signals; the components only receive
//! field bindings and the form-level validation state.

use std::collections::HashMap;

use dioxus::prelude::*;
use forms_ui::{ControlSize, FieldBinding, FormMeta, RadioButtonField, TextInputField};

fn main() {
    dioxus::launch(App);
}

fn validate_email(value: &str) -> Option<&'static str> {
    if value.is_empty() {
        Some("Required")
    } else if !value.contains('@') {
        Some("Enter a valid email address")
    } else {
        None
    }
}

#[component]
fn App() -> Element {
    let mut email = use_signal(String::new);
    let mut plan = use_signal(|| "basic".to_string());
    let mut touched = use_signal(HashMap::<String, bool>::new);
    let mut errors = use_signal(HashMap::<String, String>::new);

    let form = FormMeta {
        errors: errors(),
        touched: touched(),
    };

    let email_field = FieldBinding::new("email", email())
        .with_on_input(EventHandler::new(move |evt: FormEvent| {
            email.set(evt.value());
        }))
        .with_on_blur(EventHandler::new(move |_| {
            touched.write().insert("email".to_string(), true);
            match validate_email(&email.read()) {
                Some(message) => {
                    errors.write().insert("email".to_string(), message.to_string());
                }
                None => {
                    errors.write().remove("email");
                }
            }
        }));

    let plan_field = FieldBinding::new("plan", plan())
        .with_on_input(EventHandler::new(move |evt: FormEvent| {
            plan.set(evt.value());
        }))
        .with_on_blur(EventHandler::new(move |_| {
            touched.write().insert("plan".to_string(), true);
        }));

    rsx! {
        form {
            style: "max-width: 420px; margin: 48px auto; display: flex; flex-direction: column; gap: 16px;",
            onsubmit: move |evt: FormEvent| {
                evt.prevent_default();
                touched.write().insert("email".to_string(), true);
                if let Some(message) = validate_email(&email.read()) {
                    errors.write().insert("email".to_string(), message.to_string());
                    return;
                }
                tracing::info!(email = %email.read(), plan = %plan.read(), "signup submitted");
            },

            TextInputField {
                field: email_field,
                form: form.clone(),
                label: "Email",
                required: true,
                size: ControlSize::Large,
            }

            div {
                style: "display: flex; flex-direction: column; gap: 8px;",
                RadioButtonField {
                    field: plan_field.clone(),
                    form: form.clone(),
                    value: "basic",
                    id_prefix: "billing",
                    "Basic"
                }
                RadioButtonField {
                    field: plan_field,
                    form,
                    value: "pro",
                    id_prefix: "billing",
                    "Pro"
                }
            }

            button { r#type: "submit", "Sign up" }
        }
    }
}
