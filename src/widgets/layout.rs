use dioxus::prelude::*;
use crate::theme::{spacing, AppColors};

#[component]
pub fn PageBackground(is_dark: bool, children: Element) -> Element {
    let (bg_start, bg_end) = if is_dark {
        (AppColors::DARK_SURFACE, "#2B2930")
    } else {
        ("#E7E0EC", AppColors::LIGHT_SURFACE)
    };
    rsx! {
        div {
            class: "login-container",
            style: "min-height: 100vh; display: flex; align-items: center; justify-content: center; background: linear-gradient(to bottom, {bg_start}, {bg_end});",
            {children}
        }
    }
}

#[component]
pub fn FormCard(is_dark: bool, children: Element) -> Element {
    let surface = if is_dark { "rgba(73,69,79,0.9)" } else { "rgba(255,255,255,0.95)" };
    rsx! {
        div {
            style: "width: 100%; max-width: 420px; background: {surface}; border-radius: 12px; padding: {spacing::CARD_PADDING}; margin: {spacing::MD}; box-sizing: border-box;",
            {children}
        }
    }
}
