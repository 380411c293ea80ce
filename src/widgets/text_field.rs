use dioxus::prelude::*;
use crate::controls::FieldView;
use crate::theme::{spacing, AppColors};

/// Labeled input. Relays every input event upward; validation is the caller's job.
#[component]
pub fn TextField(
    view: FieldView,
    value: String,
    is_dark: bool,
    on_input: EventHandler<String>,
) -> Element {
    let on_surface = AppColors::on_surface(is_dark);
    let error_color = AppColors::error(is_dark);
    let border = if view.error.is_some() { error_color } else { AppColors::outline(is_dark) };
    let error_id = view.error_id();
    let described_by = view.described_by();

    rsx! {
        div { class: "input-group", style: "margin-bottom: {spacing::MD};",
            label {
                r#for: view.name,
                class: "input-label",
                style: "display: block; margin-bottom: {spacing::XS}; color: {on_surface}; font-size: 0.875rem;",
                "{view.label} "
                if view.required {
                    span { class: "required", style: "color: {error_color};", "*" }
                }
            }
            input {
                id: view.name,
                name: view.name,
                r#type: view.kind.as_html(),
                placeholder: view.placeholder,
                autocomplete: view.autocomplete,
                disabled: view.disabled,
                class: view.input_class(),
                "aria-invalid": view.aria_invalid(),
                "aria-describedby": described_by,
                value: "{value}",
                oninput: move |ev| on_input.call(ev.value()),
                style: "width: 100%; padding: 12px; border-radius: 8px; border: 1px solid {border}; background: transparent; color: {on_surface}; box-sizing: border-box;",
            }
            if let Some(err) = view.error.as_ref() {
                span {
                    id: "{error_id}",
                    class: "error-message",
                    style: "display: block; margin-top: {spacing::XS}; color: {error_color}; font-size: 0.8rem;",
                    "{err}"
                }
            }
        }
    }
}
