use dioxus::prelude::*;
use crate::controls::{ActionView, ButtonType, ButtonVariant};
use crate::theme::AppColors;

fn colors(variant: ButtonVariant, is_dark: bool) -> (&'static str, &'static str) {
    match variant {
        ButtonVariant::Primary => (AppColors::primary(is_dark), AppColors::on_primary(is_dark)),
        ButtonVariant::Secondary => ("#49454F", "#FFFFFF"),
        ButtonVariant::Danger => (AppColors::error(is_dark), "#FFFFFF"),
        ButtonVariant::Ghost => ("transparent", AppColors::primary(is_dark)),
    }
}

/// Button with disabled/loading display. Loading forces disabled and shows a busy marker.
#[component]
pub fn ActionButton(
    is_dark: bool,
    #[props(default)] variant: ButtonVariant,
    #[props(default)] button_type: ButtonType,
    #[props(default)] disabled: bool,
    #[props(default)] loading: bool,
    #[props(default)] class: String,
    onclick: Option<EventHandler<MouseEvent>>,
    children: Element,
) -> Element {
    let view = ActionView { variant, button_type, disabled, loading };
    let (bg, fg) = colors(variant, is_dark);
    let opacity = if view.is_disabled() { "0.6" } else { "1" };
    let cursor = if view.is_disabled() { "not-allowed" } else { "pointer" };

    rsx! {
        button {
            r#type: view.button_type.as_html(),
            class: view.class(&class),
            disabled: view.is_disabled(),
            "aria-busy": if view.loading { "true" } else { "false" },
            onclick: move |ev| {
                if !view.accepts_click() {
                    return;
                }
                if let Some(handler) = &onclick {
                    handler.call(ev);
                }
            },
            style: "width: 100%; padding: 12px; border-radius: 8px; background: {bg}; color: {fg}; font-weight: 600; border: none; cursor: {cursor}; opacity: {opacity};",
            if view.loading {
                span { class: "btn-loader", style: "margin-right: 6px;", "⏳" }
            }
            {children}
        }
    }
}
