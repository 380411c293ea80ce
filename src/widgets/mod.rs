mod action_button;
mod layout;
mod text_field;

pub use action_button::ActionButton;
pub use layout::{FormCard, PageBackground};
pub use text_field::TextField;
