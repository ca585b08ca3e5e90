pub mod persistence;

use std::sync::Once;

use tracing::debug;

static TRACING_INIT: Once = Once::new();

/// Initializes the global tracing subscriber with sensible defaults.
///
/// Logs go to stderr so chart JSON on stdout stays machine readable.
pub fn init_tracing() {
    TRACING_INIT.call_once(|| {
        install_subscriber();
    });
}

/// Returns `false` when another global subscriber was already in place.
fn install_subscriber() -> bool {
    use tracing_subscriber::{fmt, EnvFilter};

    let mut filter = EnvFilter::from_default_env();
    for raw in ["budget_chart=info", "chart_core=warn"] {
        if let Ok(directive) = raw.parse() {
            filter = filter.add_directive(directive);
        }
    }

    match fmt()
        .with_env_filter(filter)
        .with_writer(std::io::stderr)
        .try_init()
    {
        Ok(()) => true,
        Err(err) => {
            debug!("tracing subscriber already installed: {err}");
            false
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn second_subscriber_is_reported_not_installed() {
        init_tracing();
        assert!(!install_subscriber());
    }
}
