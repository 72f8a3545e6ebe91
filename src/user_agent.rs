//! User-Agent header sent with every API request.

use std::sync::OnceLock;

const NAME: &str = "turbot-provider";

const VERSION: &str = env!("CARGO_PKG_VERSION");

static USER_AGENT: OnceLock<String> = OnceLock::new();

/// Returns the User-Agent string.
///
/// Format: `turbot-provider/0.1.0 (rust/1.92; linux/x86_64)`. Computed once.
pub(crate) fn user_agent() -> &'static str {
    USER_AGENT.get_or_init(|| {
        format!(
            "{}/{} (rust/{}; {}/{})",
            NAME,
            VERSION,
            env!("CARGO_PKG_RUST_VERSION"),
            os_name(),
            std::env::consts::ARCH,
        )
    })
}

fn os_name() -> &'static str {
    match std::env::consts::OS {
        "macos" => "darwin",
        os => os,
    }
}
