//! Logging initialization module
//!
//! Provides a single initialization point for the logging facility.

use std::sync::Once;
use tracing_subscriber::{util::SubscriberInitExt, EnvFilter};

/// Logging profile configuration
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Profile {
    /// Human-readable output for interactive use
    Development,
    /// JSON structured output for log collection
    Production,
    /// Test capture mode for deterministic testing
    Test,
}

impl Profile {
    /// Filter applied when `RUST_LOG` is not set
    pub fn default_filter(&self) -> &'static str {
        match self {
            // Interactive sessions share the terminal with the menu
            Profile::Development => "itemdb=warn",
            Profile::Production => "itemdb=info",
            Profile::Test => "off",
        }
    }
}

static INIT_ONCE: Once = Once::new();

fn env_filter(profile: Profile) -> EnvFilter {
    EnvFilter::try_from_default_env().unwrap_or_else(|_| EnvFilter::new(profile.default_filter()))
}

/// Initialize the logging facility
///
/// Call once at application startup; later calls are no-ops.
///
/// # Profiles
///
/// - **Development**: Human-readable logs, warnings and above
/// - **Production**: JSON structured logs with info level
/// - **Test**: Capture mode for test assertions
///
/// # Example
///
/// ```
/// use itemdb_core::logging_facility::{init, Profile};
///
/// init(Profile::Development);
/// ```
pub fn init(profile: Profile) {
    INIT_ONCE.call_once(|| match profile {
        Profile::Development => {
            tracing_subscriber::fmt()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Production => {
            tracing_subscriber::fmt()
                .json()
                .with_writer(std::io::stderr)
                .with_env_filter(env_filter(profile))
                .init();
        }
        Profile::Test => {
            // Test capture is installed separately via init_test_capture()
            tracing_subscriber::registry().init();
        }
    });
}
