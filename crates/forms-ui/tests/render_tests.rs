//! Render-to-string tests for the component surface.

use dioxus::prelude::*;
use forms_ui::{FieldBinding, FormMeta, LabeledTextInput, RadioButton, RadioButtonField, TextInputField};
use pretty_assertions::assert_eq;

fn render(app: impl Fn() -> Element + Clone + 'static) -> String {
    let mut dom = VirtualDom::new_with_props(app, ());
    dom.rebuild_in_place();
    dioxus_ssr::render(&dom)
}

#[test]
fn radio_button_derives_prefixed_identifier() {
    let html = render(|| rsx! {
        RadioButton { name: "plan", value: "pro", id_prefix: "billing", "Pro" }
    });

    assert!(html.contains(r#"id="billing-plan-pro""#), "html: {html}");
    assert!(html.contains(r#"for="billing-plan-pro""#), "html: {html}");
}

#[test]
fn radio_button_derives_identifier_without_prefix() {
    let html = render(|| rsx! {
        RadioButton { name: "plan", value: "pro", "Pro" }
    });

    assert!(html.contains(r#"id="plan-pro""#), "html: {html}");
    assert!(html.contains(r#"for="plan-pro""#), "html: {html}");
}

#[test]
fn radio_button_renders_label_text_and_required_marker() {
    let html = render(|| rsx! {
        RadioButton { name: "plan", value: "pro", required: true, "Pro plan" }
    });

    assert!(html.contains("Pro plan"), "html: {html}");
    assert!(
        html.contains(r#"<span class="label-required">*</span>"#),
        "html: {html}"
    );
}

#[test]
fn radio_button_omits_required_marker_by_default() {
    let html = render(|| rsx! {
        RadioButton { name: "plan", value: "pro", "Pro plan" }
    });

    assert!(
        !html.contains(r#"<span class="label-required">*</span>"#),
        "html: {html}"
    );
}

#[test]
fn radio_button_field_is_checked_when_field_value_matches() {
    let html = render(|| {
        let field = FieldBinding::new("plan", "pro");
        rsx! {
            RadioButtonField { field, form: FormMeta::new(), value: "pro", "Pro" }
        }
    });

    assert!(html.contains(r#"checked="true""#), "html: {html}");
}

#[test]
fn radio_button_field_is_unchecked_when_field_value_differs() {
    let html = render(|| {
        let field = FieldBinding::new("plan", "basic");
        rsx! {
            RadioButtonField { field, form: FormMeta::new(), value: "pro", "Pro" }
        }
    });

    assert!(!html.contains(r#"checked="true""#), "html: {html}");
}

#[test]
fn radio_button_field_surfaces_touched_errors() {
    let html = render(|| {
        let field = FieldBinding::new("plan", "");
        let form = FormMeta::new()
            .with_error("plan", "Pick a plan")
            .with_touched("plan");
        rsx! {
            RadioButtonField { field, form, value: "pro", "Pro" }
        }
    });

    assert!(html.contains(r#"aria-invalid="true""#), "html: {html}");
}

#[test]
fn labeled_text_input_binds_label_and_defaults_placeholder() {
    let html = render(|| rsx! {
        LabeledTextInput { label: "Email", name: "email" }
    });

    assert!(html.contains(r#"for="email""#), "html: {html}");
    assert!(html.contains(r#"id="email""#), "html: {html}");
    assert!(html.contains(r#"name="email""#), "html: {html}");
    assert!(html.contains(r#"placeholder="Email""#), "html: {html}");
    assert!(html.contains("Email"), "html: {html}");
}

#[test]
fn labeled_text_input_omits_label_element_when_empty() {
    let html = render(|| rsx! {
        LabeledTextInput { name: "email" }
    });

    assert!(!html.contains("<label"), "html: {html}");
    assert!(html.contains(r#"id="email""#), "html: {html}");
}

#[test]
fn text_input_field_derives_error_from_touched_form() {
    let html = render(|| {
        let field = FieldBinding::new("email", "");
        let form = FormMeta::new()
            .with_error("email", "Required")
            .with_touched("email");
        rsx! {
            TextInputField { field, form, label: "Email" }
        }
    });

    assert!(html.contains(r#"aria-invalid="true""#), "html: {html}");
}

#[test]
fn text_input_field_stays_clean_while_untouched() {
    let html = render(|| {
        let field = FieldBinding::new("email", "");
        let form = FormMeta::new().with_error("email", "Required");
        rsx! {
            TextInputField { field, form, label: "Email" }
        }
    });

    assert!(!html.contains("aria-invalid"), "html: {html}");
}

#[test]
fn text_input_field_explicit_error_wins_over_derived() {
    // The caller can force an error even when the form reports none.
    let html = render(|| {
        let field = FieldBinding::new("email", "");
        rsx! {
            TextInputField {
                field,
                form: FormMeta::new(),
                label: "Email",
                error: "Taken",
            }
        }
    });

    assert!(html.contains(r#"aria-invalid="true""#), "html: {html}");
}

#[test]
fn text_input_field_forwards_field_value() {
    let html = render(|| {
        let field = FieldBinding::new("email", "a@b.io");
        rsx! {
            TextInputField { field, form: FormMeta::new(), label: "Email" }
        }
    });

    assert!(html.contains(r#"value="a@b.io""#), "html: {html}");
}

#[test]
fn radio_group_identifiers_are_distinct_per_option() {
    let html = render(|| rsx! {
        RadioButtonField {
            field: FieldBinding::new("plan", "pro"),
            form: FormMeta::new(),
            value: "pro",
            "Pro"
        }
        RadioButtonField {
            field: FieldBinding::new("plan", "pro"),
            form: FormMeta::new(),
            value: "basic",
            "Basic"
        }
    });

    assert!(html.contains(r#"id="plan-pro""#), "html: {html}");
    assert!(html.contains(r#"id="plan-basic""#), "html: {html}");

    let checked_count = html.matches(r#"checked="true""#).count();
    assert_eq!(checked_count, 1, "only the matching option is checked: {html}");
}
