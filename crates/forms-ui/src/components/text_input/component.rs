use dioxus::prelude::*;

use crate::components::label::Label;
use crate::form::{field_error, FieldBinding, FormMeta};
use crate::theme::{transparentize, Color, ControlSize, Palette};

const FONT_STACK: &str = "-apple-system, BlinkMacSystemFont, \"Segoe UI\", Roboto, Oxygen-Sans, Ubuntu, Cantarell, \"Helvetica Neue\", sans-serif";

/// Resolve the text color for one variant combination.
///
/// `error` wins over `disabled`; `disabled` wins over the default.
fn text_color(palette: &Palette, error: bool, disabled: bool) -> Color {
    if error {
        palette.reds[1]
    } else if disabled {
        palette.darks[4]
    } else {
        palette.text
    }
}

/// Class name for one `(size, error, disabled)` variant combination.
fn variant_class(size: ControlSize, error: bool, disabled: bool) -> String {
    let size_key = match size {
        ControlSize::Medium => "md",
        ControlSize::Large => "lg",
    };
    let mut class = format!("text-input-{size_key}");
    if error {
        class.push_str("-error");
    }
    if disabled {
        class.push_str("-disabled");
    }
    class
}

/// The generated stylesheet for one variant combination.
///
/// Hover and focus rules are emitted only when the input is enabled; a
/// disabled input has no pseudo-state overrides at all.
fn text_input_css(palette: &Palette, size: ControlSize, error: bool, disabled: bool) -> String {
    let class = variant_class(size, error, disabled);
    let geometry = size.geometry();

    let color = text_color(palette, error, disabled).hex();
    let background = if disabled {
        palette.lights[2].hex()
    } else {
        "white".to_string()
    };
    let border = if error {
        palette.reds[1].hex()
    } else {
        palette.lights[0].hex()
    };
    let cursor = if disabled { "cursor: not-allowed; " } else { "" };

    let mut css = format!(
        "\
.{class} {{ width: 100%; font-family: {FONT_STACK}; outline: none; border-width: 1px; border-radius: 8px; border-style: solid; transition: border-color .2s ease, background .2s ease, box-shadow .2s ease; height: {height}px; padding: 0 {padding}px; font-size: {font_size}px; line-height: {line_height}; letter-spacing: {letter_spacing}px; {cursor}box-shadow: transparent 0 0 0 2px; color: {color}; background-color: {background}; border-color: {border}; }}
",
        height = geometry.height,
        padding = geometry.padding_x,
        font_size = geometry.font_size,
        line_height = geometry.line_height,
        letter_spacing = geometry.letter_spacing,
    );

    if !disabled {
        css.push_str(&format!(
            "\
.{class}:hover {{ border-color: {hover_border}; }}
.{class}:focus {{ border-color: {focus_border}; box-shadow: {halo} 0 0 0 2px; }}
",
            hover_border = palette.darks[4].hex(),
            focus_border = palette.primary[0].hex(),
            halo = transparentize(0.92, palette.primary[0]),
        ));
    }

    css
}

/// A styled single-line text input.
///
/// Style is a deterministic function of the `size`, `error`, and `disabled`
/// variant flags plus the palette.
#[component]
pub fn TextInput(
    #[props(default)] size: ControlSize,
    /// Validation message. Any truthy value switches text and border to the
    /// error color, even when `disabled` is also set.
    #[props(default)]
    error: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] value: String,
    #[props(default)] placeholder: String,
    #[props(default)] id: Option<String>,
    #[props(default)] name: Option<String>,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] palette: Palette,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
) -> Element {
    let has_error = error.is_some();
    let css = text_input_css(&palette, size, has_error, disabled);
    let base = vec![Attribute::new(
        "class",
        variant_class(size, has_error, disabled),
        None,
        false,
    )];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        style { {css} }
        input {
            r#type: "text",
            id,
            name,
            value,
            placeholder,
            disabled,
            aria_invalid: has_error.then_some("true"),
            oninput: move |evt| on_input.call(evt),
            onblur: move |evt| on_blur.call(evt),
            ..merged,
        }
    }
}

/// A [`TextInput`] with an optional caption above it.
///
/// The label is rendered only when non-empty and is bound to `name`; the
/// input gets `placeholder` defaulted to the label and both `id` and
/// `name` set to `name`.
#[component]
pub fn LabeledTextInput(
    name: String,
    #[props(default)] label: String,
    #[props(default)] required: bool,
    #[props(default)] size: ControlSize,
    #[props(default)] error: Option<String>,
    #[props(default)] disabled: bool,
    #[props(default)] value: String,
    /// Extra class for the wrapper element.
    #[props(default)]
    class: Option<String>,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] palette: Palette,
) -> Element {
    let wrapper_class = match class {
        Some(extra) => format!("text-input-wrapper {extra}"),
        None => "text-input-wrapper".to_string(),
    };

    rsx! {
        div {
            class: wrapper_class,
            style: "width: 100%;",
            if !label.is_empty() {
                Label {
                    html_for: name.clone(),
                    required,
                    size,
                    palette,
                    style: "padding-bottom: 10px; display: block;",
                    {label.clone()}
                }
            }
            TextInput {
                placeholder: label,
                id: name.clone(),
                name,
                size,
                error,
                disabled,
                value,
                on_input,
                on_blur,
                palette,
            }
        }
    }
}

/// [`LabeledTextInput`] pre-wired to the host form container's field
/// contract.
///
/// Forwards the field bindings and derives the validation error from the
/// form meta. Unlike [`RadioButtonField`](crate::RadioButtonField)'s
/// `checked`, an explicit `error` prop from the caller wins over the
/// derived one.
#[component]
pub fn TextInputField(
    field: FieldBinding,
    form: FormMeta,
    #[props(default)] label: String,
    #[props(default)] required: bool,
    #[props(default)] size: ControlSize,
    #[props(default)] disabled: bool,
    /// Overrides the error derived from `form` when supplied.
    #[props(default)]
    error: Option<String>,
    #[props(default)] palette: Palette,
) -> Element {
    let error = error.or_else(|| field_error(&field.name, &form));

    rsx! {
        LabeledTextInput {
            name: field.name,
            value: field.value,
            label,
            required,
            size,
            disabled,
            error,
            palette,
            on_input: field.on_input,
            on_blur: field.on_blur,
        }
    }
}
