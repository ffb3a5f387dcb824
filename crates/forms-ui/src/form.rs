//! The host form container's field contract.
//!
//! The components in this crate do not manage form state. A host container
//! owns values, errors, and touched flags; it hands each input a
//! [`FieldBinding`] plus the form-level [`FormMeta`], and the `…Field`
//! adapters derive the per-field presentation props from them.

use std::collections::HashMap;

use dioxus::prelude::*;

/// Form-level validation state, read-only from the components' side.
#[derive(Clone, PartialEq, Default)]
pub struct FormMeta {
    /// Validation message per field name.
    pub errors: HashMap<String, String>,
    /// Whether a field has been visited (blurred) at least once.
    pub touched: HashMap<String, bool>,
}

impl FormMeta {
    pub fn new() -> Self {
        Self::default()
    }

    /// Record a validation message for `name`.
    pub fn with_error(mut self, name: impl Into<String>, message: impl Into<String>) -> Self {
        self.errors.insert(name.into(), message.into());
        self
    }

    /// Mark `name` as touched.
    pub fn with_touched(mut self, name: impl Into<String>) -> Self {
        self.touched.insert(name.into(), true);
        self
    }
}

/// The bindings a host form container supplies for a single field.
#[derive(Clone, PartialEq)]
pub struct FieldBinding {
    pub name: String,
    /// The controlled value. For a radio group this is the value of the
    /// currently selected option.
    pub value: String,
    pub on_input: EventHandler<FormEvent>,
    pub on_blur: EventHandler<FocusEvent>,
}

impl FieldBinding {
    /// A binding with no-op handlers; hosts replace them with closures that
    /// mutate their own state.
    pub fn new(name: impl Into<String>, value: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            value: value.into(),
            on_input: EventHandler::default(),
            on_blur: EventHandler::default(),
        }
    }

    pub fn with_on_input(mut self, handler: EventHandler<FormEvent>) -> Self {
        self.on_input = handler;
        self
    }

    pub fn with_on_blur(mut self, handler: EventHandler<FocusEvent>) -> Self {
        self.on_blur = handler;
        self
    }
}

/// Look up the reportable validation error for `name`.
///
/// Returns `None` while the field is untouched or has no recorded error,
/// so errors only surface after the user has visited the field.
pub fn field_error(name: &str, meta: &FormMeta) -> Option<String> {
    if !meta.touched.get(name).copied().unwrap_or(false) {
        return None;
    }
    meta.errors.get(name).cloned()
}
