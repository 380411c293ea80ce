mod login;

pub use login::LoginScreen;
