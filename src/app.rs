use dioxus::prelude::*;
use crate::auth::{self, AppAuthenticator, AuthSession};
use crate::config::FormConfig;
use crate::controls::ButtonVariant;
use crate::screens::LoginScreen;
use crate::theme::{spacing, AppColors};
use crate::widgets::ActionButton;

/// Auth session shared with every screen through context.
pub type SessionSignal = Signal<AuthSession<AppAuthenticator>>;

#[component]
pub fn App() -> Element {
    let config = use_hook(FormConfig::from_env);
    let is_dark = use_signal(|| true);
    let mut session: SessionSignal = use_context_provider(|| {
        Signal::new(AuthSession::restore(
            AppAuthenticator::from_config(&config),
            auth::default_store(),
        ))
    });

    let user = session.read().user().cloned();
    let on_surface = AppColors::on_surface(is_dark());
    let surface = AppColors::surface(is_dark());

    rsx! {
        div { style: "font-family: system-ui, sans-serif;",
            if let Some(user) = user {
                div { class: "session-bar",
                    style: "display: flex; align-items: center; justify-content: space-between; gap: {spacing::MD}; padding: {spacing::SM} {spacing::MD}; background: {surface}; color: {on_surface};",
                    span { "👤 {user.name} ({user.email})" }
                    div { style: "width: 120px;",
                        ActionButton {
                            is_dark: is_dark(),
                            variant: ButtonVariant::Ghost,
                            onclick: move |_| session.write().logout(),
                            "Logout"
                        }
                    }
                }
            }
            LoginScreen { is_dark: is_dark(), config: config.clone() }
        }
    }
}
