//! Internal diagnostics for the tools themselves.
//!
//! The facility reports its own housekeeping (directories created, rotations,
//! path fallbacks) through `tracing`. Nothing is shown unless a subscriber is
//! installed; [`init`] installs a stderr one filtered by
//! `MANAGEMENT_TOOLS_LOG`.

use once_cell::sync::OnceCell;
use tracing_subscriber::EnvFilter;

/// Environment variable holding the diagnostics filter directive.
pub const FILTER_ENV: &str = "MANAGEMENT_TOOLS_LOG";

/// Filter used when `MANAGEMENT_TOOLS_LOG` is unset or invalid.
pub const DEFAULT_FILTER: &str = "warn";

static INSTALLED: OnceCell<bool> = OnceCell::new();

/// Install the stderr diagnostics subscriber once per process.
///
/// Later calls are no-ops. Returns `false` if another global subscriber was
/// already in place, in which case that one is left alone.
pub fn init() -> bool {
    *INSTALLED.get_or_init(|| {
        let filter = EnvFilter::try_from_env(FILTER_ENV)
            .unwrap_or_else(|_| EnvFilter::new(DEFAULT_FILTER));

        tracing_subscriber::fmt()
            .with_env_filter(filter)
            .with_writer(std::io::stderr)
            .with_target(false)
            .with_level(true)
            .try_init()
            .is_ok()
    })
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_init_is_idempotent() {
        let first = init();
        let second = init();
        assert_eq!(first, second);
    }
}
