//! Tracing subscriber setup.

use tracing_subscriber::{layer::SubscriberExt, util::SubscriberInitExt, EnvFilter};

use crate::config::DEFAULT_LOG_FILTER;

/// Install the global subscriber with `directives`, normally
/// `ServerConfig::log_filter` (which already reflects `RUST_LOG`).
///
/// Returns `false` if a subscriber was already installed; the existing one
/// is left in place.
pub fn init_tracing(directives: &str) -> bool {
    tracing_subscriber::registry()
        .with(build_filter(directives))
        .with(tracing_subscriber::fmt::layer())
        .try_init()
        .is_ok()
}

/// Parse `directives`, falling back to `DEFAULT_LOG_FILTER` when they are
/// malformed.
fn build_filter(directives: &str) -> EnvFilter {
    EnvFilter::try_new(directives).unwrap_or_else(|err| {
        eprintln!("invalid log filter `{directives}` ({err}); using `{DEFAULT_LOG_FILTER}`");
        EnvFilter::new(DEFAULT_LOG_FILTER)
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn valid_directives_are_kept() {
        let filter = build_filter("todo_server=debug");
        assert_eq!(filter.to_string(), EnvFilter::new("todo_server=debug").to_string());
    }

    #[test]
    fn malformed_directives_fall_back_to_default() {
        let filter = build_filter("todo_server=verbose");
        assert_eq!(filter.to_string(), EnvFilter::new(DEFAULT_LOG_FILTER).to_string());
    }

    #[test]
    fn second_init_is_a_no_op() {
        init_tracing("todo_server=debug");
        assert!(!init_tracing("todo_server=debug"));
    }
}
