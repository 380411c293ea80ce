//! Colors and spacing for the login page.

/// Material Design 3–style colors. Light/dark selected at runtime.
#[derive(Clone, Copy)]
pub struct AppColors;

impl AppColors {
    // Light
    pub const LIGHT_PRIMARY: &'static str = "#6750A4";
    pub const LIGHT_ON_PRIMARY: &'static str = "#FFFFFF";
    pub const LIGHT_SURFACE: &'static str = "#FFFBFE";
    pub const LIGHT_ON_SURFACE: &'static str = "#1C1B1F";
    pub const LIGHT_OUTLINE: &'static str = "#79747E";
    pub const LIGHT_SUCCESS: &'static str = "#029C76";
    pub const LIGHT_ERROR: &'static str = "#BA1A1A";

    // Dark
    pub const DARK_PRIMARY: &'static str = "#D0BCFF";
    pub const DARK_ON_PRIMARY: &'static str = "#381E72";
    pub const DARK_SURFACE: &'static str = "#1C1B1F";
    pub const DARK_ON_SURFACE: &'static str = "#E6E1E5";
    pub const DARK_OUTLINE: &'static str = "#938F99";
    pub const DARK_SUCCESS: &'static str = "#029C76";
    pub const DARK_ERROR: &'static str = "#FFB4AB";

    fn pick(is_dark: bool, dark: &'static str, light: &'static str) -> &'static str {
        if is_dark {
            dark
        } else {
            light
        }
    }

    pub fn primary(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_PRIMARY, Self::LIGHT_PRIMARY)
    }
    pub fn on_primary(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_ON_PRIMARY, Self::LIGHT_ON_PRIMARY)
    }
    pub fn surface(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_SURFACE, Self::LIGHT_SURFACE)
    }
    pub fn on_surface(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_ON_SURFACE, Self::LIGHT_ON_SURFACE)
    }
    pub fn outline(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_OUTLINE, Self::LIGHT_OUTLINE)
    }
    pub fn success(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_SUCCESS, Self::LIGHT_SUCCESS)
    }
    pub fn error(is_dark: bool) -> &'static str {
        Self::pick(is_dark, Self::DARK_ERROR, Self::LIGHT_ERROR)
    }
}

/// 8dp grid spacing (Material 3).
pub mod spacing {
    pub const XS: &str = "4px";
    pub const SM: &str = "8px";
    pub const MD: &str = "16px";
    pub const LG: &str = "24px";
    pub const CARD_PADDING: &str = "24px";
}
