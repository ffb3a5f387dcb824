//! Presentational form-input components.
//!
//! Each input ships in two flavors: the bare presentational component
//! (`RadioButton`, `TextInput`, `LabeledTextInput`) and a `…Field` variant
//! pre-wired to a host form container's field contract (see [`form`]).
//! Styling is driven by an explicit [`theme::Palette`] passed as a prop;
//! there is no implicit context lookup.

pub mod components;
pub mod form;
pub mod theme;

pub use components::*;
pub use form::{field_error, FieldBinding, FormMeta};
pub use theme::{transparentize, Color, ControlSize, Palette, Ramp};
