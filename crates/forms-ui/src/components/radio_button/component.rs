use dioxus::prelude::*;
use dioxus_free_icons::icons::fa_solid_icons::FaCheck;
use dioxus_free_icons::Icon;

use crate::components::label::Label;
use crate::form::{field_error, FieldBinding, FormMeta};
use crate::theme::{ControlSize, Palette};

/// Derive the DOM identifier for one radio option.
///
/// Unique within a group sharing the same `name`, distinct per `value`.
pub fn radio_input_id(id_prefix: Option<&str>, name: &str, value: &str) -> String {
    match id_prefix {
        Some(prefix) => format!("{prefix}-{name}-{value}"),
        None => format!("{name}-{value}"),
    }
}

/// The generated stylesheet for radio buttons.
///
/// Visual states are pure CSS pseudo-state rules; the component itself
/// holds no interaction state.
fn radio_css(palette: &Palette) -> String {
    format!(
        "\
.radio-button {{ display: flex; align-items: center; position: relative; }}
.radio-button input {{ margin: 0; position: absolute; top: 50%; left: 0; appearance: none; width: 18px; height: 18px; outline: none; transform: translateY(-50%); }}
.radio-indicator {{ position: relative; display: flex; align-items: center; justify-content: center; pointer-events: none; width: 18px; height: 18px; border-radius: 50%; transition: background-color .2s ease; background-color: {lights0}; }}
.radio-indicator svg {{ opacity: 0; transition: opacity .2s ease; }}
.radio-indicator::after {{ pointer-events: none; content: \" \"; position: absolute; top: 0; left: 0; width: 18px; height: 18px; border-radius: 50%; background-color: white; transform: scale(0.85); transition: background-color .2s ease, transform .2s ease; }}
.radio-button input:hover + .radio-indicator {{ background-color: {primary0}; }}
.radio-button input:hover + .radio-indicator::after {{ background-color: {lights2}; transform: scale(0.75); }}
.radio-button input:checked + .radio-indicator {{ background-color: {primary0}; }}
.radio-button input:checked + .radio-indicator svg {{ opacity: 1; }}
.radio-button input:checked + .radio-indicator::after {{ background-color: white; transform: scale(0.4); }}
.radio-button input:checked:hover + .radio-indicator::after {{ background-color: white; transform: scale(0.3); }}
",
        lights0 = palette.lights[0].hex(),
        lights2 = palette.lights[2].hex(),
        primary0 = palette.primary[0].hex(),
    )
}

/// A styled radio-input control with its label.
///
/// Renders a native radio input, a decorative indicator circle, and a
/// [`Label`] bound to the derived identifier. Purely a function of props;
/// hover and checked visuals come from native pseudo-state.
#[component]
pub fn RadioButton(
    name: String,
    value: String,
    #[props(default)] checked: bool,
    #[props(default)] id_prefix: Option<String>,
    #[props(default)] size: ControlSize,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    /// Validation message, forwarded by the field adapter. Surfaces as
    /// `aria-invalid` on the native input.
    #[props(default)]
    error: Option<String>,
    /// Extra class for the container element.
    #[props(default)]
    class: Option<String>,
    #[props(default)] on_input: EventHandler<FormEvent>,
    #[props(default)] on_blur: EventHandler<FocusEvent>,
    #[props(default)] palette: Palette,
    /// Anything else goes straight onto the native radio input.
    #[props(extends = GlobalAttributes)]
    attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let id = radio_input_id(id_prefix.as_deref(), &name, &value);
    let css = radio_css(&palette);
    let container_class = match class {
        Some(extra) => format!("radio-button {extra}"),
        None => "radio-button".to_string(),
    };

    rsx! {
        style { {css} }
        div {
            class: container_class,
            input {
                r#type: "radio",
                id: "{id}",
                name: "{name}",
                value: "{value}",
                checked: checked.then_some("true"),
                disabled,
                aria_invalid: error.is_some().then_some("true"),
                oninput: move |evt| on_input.call(evt),
                onblur: move |evt| on_blur.call(evt),
                ..attributes,
            }
            div { class: "radio-indicator",
                Icon { icon: FaCheck, width: 10, height: 10, fill: "white" }
            }
            Label {
                html_for: id.clone(),
                size,
                required,
                palette,
                style: "padding-left: 10px;",
                {children}
            }
        }
    }
}

/// [`RadioButton`] pre-wired to the host form container's field contract.
///
/// Forwards the field bindings, derives the validation error from the form
/// meta, and derives `checked` by comparing the bound field value against
/// this option's `value`. The comparison is the only source of `checked`;
/// callers cannot supply their own.
#[component]
pub fn RadioButtonField(
    field: FieldBinding,
    form: FormMeta,
    /// The value this option represents within its group.
    value: String,
    #[props(default)] id_prefix: Option<String>,
    #[props(default)] size: ControlSize,
    #[props(default)] required: bool,
    #[props(default)] disabled: bool,
    #[props(default)] palette: Palette,
    children: Element,
) -> Element {
    let error = field_error(&field.name, &form);
    let checked = field.value == value;

    rsx! {
        RadioButton {
            name: field.name,
            value,
            checked,
            error,
            id_prefix,
            size,
            required,
            disabled,
            palette,
            on_input: field.on_input,
            on_blur: field.on_blur,
            {children}
        }
    }
}
