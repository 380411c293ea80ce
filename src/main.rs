//! Login form - Dioxus app.
//! Default: web (cargo run). Desktop: cargo run --features desktop.

#[cfg(all(target_arch = "wasm32", feature = "web"))]
fn main() {
    dioxus::launch(login_form::app::App);
}

#[cfg(all(not(target_arch = "wasm32"), feature = "desktop"))]
fn main() -> anyhow::Result<()> {
    use tracing_subscriber::EnvFilter;

    let default_filter = if cfg!(debug_assertions) { "login_form=debug" } else { "login_form=info" };
    tracing_subscriber::fmt()
        .with_env_filter(
            EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(default_filter)),
        )
        .try_init()
        .map_err(|e| anyhow::anyhow!("failed to init logging: {e}"))?;

    tracing::info!("starting login form (desktop)");
    dioxus::launch(login_form::app::App);
    Ok(())
}

#[cfg(all(not(target_arch = "wasm32"), not(feature = "desktop")))]
fn main() -> anyhow::Result<()> {
    // Native `cargo run` on the web feature: hand off to the Dioxus CLI, which
    // builds the wasm bundle and serves it. RUSTFLAGS is exported in the same
    // shell because dx may not forward env to its cargo child.
    let rustflags = std::env::var("RUSTFLAGS").unwrap_or_default();
    let rustflags = if rustflags.is_empty() {
        "-C target-feature=-reference-types".to_string()
    } else {
        format!("{} -C target-feature=-reference-types", rustflags)
    };
    let status = std::process::Command::new("sh")
        .args(["-c", &format!("export RUSTFLAGS='{}'; exec dx serve", rustflags.replace('\'', "'\"'\"'"))])
        .status()
        .map_err(|e| {
            anyhow::anyhow!("could not run 'dx serve': {e}. Install the Dioxus CLI: cargo install dioxus-cli")
        })?;
    std::process::exit(status.code().unwrap_or(1));
}
