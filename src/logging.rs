//! Tracing subscriber setup for hosts embedding the client.

use tracing_subscriber::EnvFilter;

/// Default filter directive when the host passes none.
pub const DEFAULT_DIRECTIVE: &str = "resume_client=info";

/// Install a global fmt subscriber filtered by `directive`
/// (e.g. `"resume_client=debug"`).
///
/// The filter is taken from the argument only, never from the environment.
/// Calling this when a subscriber is already installed does nothing.
pub fn init(directive: &str) {
    let filter = EnvFilter::try_new(directive).unwrap_or_else(|err| {
        eprintln!("Invalid log directive {:?}: {}", directive, err);
        EnvFilter::new(DEFAULT_DIRECTIVE)
    });

    let _ = tracing_subscriber::fmt()
        .with_env_filter(filter)
        .with_target(true)
        .try_init();
}
