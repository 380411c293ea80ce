//! Display descriptors for the two UI primitives (text field, action button).
//!
//! The Dioxus widgets render these; keeping them free of UI types lets the
//! aria wiring and the disabled/loading rules be tested without a renderer.

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum InputKind {
    #[default]
    Text,
    Email,
    Password,
}

impl InputKind {
    /// Value for the `<input type=...>` attribute.
    pub fn as_html(self) -> &'static str {
        match self {
            InputKind::Text => "text",
            InputKind::Email => "email",
            InputKind::Password => "password",
        }
    }

    pub fn is_masked(self) -> bool {
        self == InputKind::Password
    }
}

/// A labeled input: what to show, and the error to show under it.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct FieldView {
    pub name: &'static str,
    pub label: &'static str,
    pub kind: InputKind,
    pub required: bool,
    pub placeholder: &'static str,
    pub autocomplete: &'static str,
    pub disabled: bool,
    pub error: Option<String>,
}

impl FieldView {
    pub fn error_id(&self) -> String {
        format!("{}-error", self.name)
    }

    /// `aria-invalid` value.
    pub fn aria_invalid(&self) -> &'static str {
        if self.error.is_some() {
            "true"
        } else {
            "false"
        }
    }

    /// `aria-describedby` value; only set while an error line is rendered.
    pub fn described_by(&self) -> Option<String> {
        self.error.as_ref().map(|_| self.error_id())
    }

    pub fn input_class(&self) -> &'static str {
        if self.error.is_some() {
            "input-field input-error"
        } else {
            "input-field"
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonVariant {
    #[default]
    Primary,
    Secondary,
    Danger,
    Ghost,
}

impl ButtonVariant {
    pub fn class_name(self) -> &'static str {
        match self {
            ButtonVariant::Primary => "btn-primary",
            ButtonVariant::Secondary => "btn-secondary",
            ButtonVariant::Danger => "btn-danger",
            ButtonVariant::Ghost => "btn-ghost",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum ButtonType {
    #[default]
    Button,
    Submit,
}

impl ButtonType {
    pub fn as_html(self) -> &'static str {
        match self {
            ButtonType::Button => "button",
            ButtonType::Submit => "submit",
        }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub struct ActionView {
    pub variant: ButtonVariant,
    pub button_type: ButtonType,
    pub disabled: bool,
    pub loading: bool,
}

impl ActionView {
    /// Loading always disables.
    pub fn is_disabled(&self) -> bool {
        self.disabled || self.loading
    }

    pub fn class(&self, extra: &str) -> String {
        let base = format!("btn {}", self.variant.class_name());
        if extra.is_empty() {
            base
        } else {
            format!("{base} {extra}")
        }
    }

    /// Whether a click should reach the handler.
    pub fn accepts_click(&self) -> bool {
        !self.is_disabled()
    }
}
