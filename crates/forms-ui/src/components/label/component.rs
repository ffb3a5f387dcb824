use dioxus::prelude::*;

use crate::theme::{ControlSize, Palette};

fn label_class(size: ControlSize) -> &'static str {
    match size {
        ControlSize::Medium => "label-md",
        ControlSize::Large => "label-lg",
    }
}

fn label_css(palette: &Palette, size: ControlSize) -> String {
    let geometry = size.geometry();
    format!(
        "\
.{class} {{ color: {color}; font-size: {font_size}px; line-height: {line_height}; }}
.label-required {{ color: {red}; padding-left: 2px; }}
",
        class = label_class(size),
        color = palette.text.hex(),
        font_size = geometry.font_size,
        line_height = geometry.line_height,
        red = palette.reds[1].hex(),
    )
}

/// A caption bound to an input element by identifier.
#[component]
pub fn Label(
    /// The `id` of the input this label describes.
    html_for: String,
    #[props(default)] required: bool,
    #[props(default)] size: ControlSize,
    #[props(default)] palette: Palette,
    #[props(extends = GlobalAttributes)] attributes: Vec<Attribute>,
    children: Element,
) -> Element {
    let css = label_css(&palette, size);
    let base = vec![Attribute::new("class", label_class(size), None, false)];
    let merged = dioxus_primitives::merge_attributes(vec![base, attributes]);

    rsx! {
        style { {css} }
        label {
            r#for: html_for,
            ..merged,
            {children}
            if required {
                span { class: "label-required", "*" }
            }
        }
    }
}
