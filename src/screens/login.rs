use dioxus::prelude::*;
use crate::app::SessionSignal;
use crate::auth::Authenticator;
use crate::config::FormConfig;
use crate::form::LoginForm;
use crate::theme::{spacing, AppColors};
use crate::validation::{Field, MIN_PASSWORD_LEN};
use crate::widgets::{ActionButton, FormCard, PageBackground, TextField};

#[component]
pub fn LoginScreen(is_dark: bool, config: FormConfig) -> Element {
    let mut session = use_context::<SessionSignal>();
    let mut form = use_signal(move || LoginForm::new(config));

    use_drop(move || {
        if let Ok(mut f) = form.try_write() {
            f.teardown();
        }
    });

    use_effect(move || {
        if let Some(user) = session.read().user() {
            tracing::info!(email = %user.email, name = %user.name, "user already logged in");
        }
    });

    let primary = AppColors::primary(is_dark);
    let on_surface = AppColors::on_surface(is_dark);
    let success_color = AppColors::success(is_dark);
    let error_color = AppColors::error(is_dark);

    let f = form.read().clone();
    let email_view = f.field_view(Field::Email);
    let password_view = f.field_view(Field::Password);
    let action = f.submit_action();
    let visible = f.password_visible();
    let submit_label = f.submit_label();
    let debug = f.debug_info(session.read().user(), session.read().is_loading());

    rsx! {
        PageBackground { is_dark,
            FormCard { is_dark,
                form {
                    class: "login-form",
                    onsubmit: move |ev| {
                        ev.prevent_default();
                        let Some(creds) = form.write().begin_submit() else {
                            return;
                        };
                        session.write().begin_login();
                        spawn(async move {
                            let authenticator = session.peek().authenticator().clone();
                            let result = authenticator.authenticate(&creds.email, &creds.password).await;
                            let outcome = session.write().finish_login(result);
                            let ticket = form.write().finish_submit(&outcome, session.peek().error());
                            if let Some(ticket) = ticket {
                                let ticket = ticket.wait().await;
                                form.write().expire_success(ticket);
                            }
                        });
                    },
                    div { style: "text-align: center; margin-bottom: {spacing::LG};",
                        div { style: "font-size: 48px; color: {primary};", "🔐" }
                        h2 { class: "login-title", style: "font-size: 1.5rem; font-weight: bold; color: {on_surface}; margin: 16px 0 8px;",
                            "Login ke Akun Anda"
                        }
                        p { class: "login-subtitle", style: "color: {on_surface}; opacity: 0.8; font-size: 0.9rem;",
                            "Masukkan email dan password Anda"
                        }
                    }

                    if let Some(msg) = f.success_message() {
                        div { class: "success-banner", role: "status",
                            style: "padding: 12px; border-radius: 8px; margin-bottom: {spacing::MD}; color: {success_color}; border: 1px solid {success_color};",
                            "✅ {msg}"
                        }
                    }
                    if let Some(msg) = f.error_message() {
                        div { class: "error-banner", role: "alert",
                            style: "padding: 12px; border-radius: 8px; margin-bottom: {spacing::MD}; color: {error_color}; border: 1px solid {error_color};",
                            "❌ {msg}"
                        }
                    }

                    TextField {
                        view: email_view,
                        value: f.value(Field::Email).to_string(),
                        is_dark,
                        on_input: move |v: String| form.write().set_field(Field::Email, v),
                    }

                    div { class: "password-group", style: "position: relative;",
                        TextField {
                            view: password_view,
                            value: f.value(Field::Password).to_string(),
                            is_dark,
                            on_input: move |v: String| form.write().set_field(Field::Password, v),
                        }
                        button {
                            r#type: "button",
                            class: "show-password-btn",
                            "aria-label": if visible { "Sembunyikan password" } else { "Tampilkan password" },
                            onclick: move |_| {
                                form.write().toggle_password_visibility();
                            },
                            style: "position: absolute; right: 8px; top: 30px; background: none; border: none; cursor: pointer; font-size: 1.1rem;",
                            if visible { "🙈" } else { "👁️" }
                        }
                    }

                    ActionButton {
                        is_dark,
                        variant: action.variant,
                        button_type: action.button_type,
                        disabled: action.disabled,
                        loading: action.loading,
                        class: "login-button".to_string(),
                        "{submit_label}"
                    }

                    div { class: "login-info", style: "margin-top: {spacing::LG}; color: {on_surface}; font-size: 0.85rem; opacity: 0.85;",
                        h4 { style: "margin: 0 0 {spacing::SM};", "💡 Informasi Login:" }
                        p { "Anda bisa menggunakan "
                            strong { "email dan password apa saja" }
                            " dengan ketentuan:"
                        }
                        ul {
                            li { "✅ Format email valid (contoh: user@domain.com)" }
                            li { "✅ Password minimal {MIN_PASSWORD_LEN} karakter" }
                        }
                    }

                    if let Some(info) = debug {
                        div { class: "debug-info", style: "margin-top: {spacing::MD}; padding: {spacing::SM}; border: 1px dashed {on_surface}; color: {on_surface}; font-size: 0.8rem;",
                            h4 { style: "margin: 0 0 {spacing::XS};", "🐛 Debug Info:" }
                            p { "Form Valid: " if info.form_valid { "✅" } else { "❌" } }
                            p { "Loading: " if info.loading { "✅" } else { "❌" } }
                            p { "User: {info.user}" }
                        }
                    }
                }
            }
        }
    }
}
