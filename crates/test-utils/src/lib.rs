pub mod builders;
pub mod fakes;

use std::sync::Once;
use tracing_subscriber::{fmt, EnvFilter};

static INIT: Once = Once::new();

/// Install a per-test log subscriber once per test binary.
///
/// Output goes through the test writer, so it only shows up for failing
/// tests or with `--nocapture`. `RUST_LOG` overrides the default filter,
/// which keeps this crate at `debug` and everything else at `warn`.
pub fn init_tracing() {
    INIT.call_once(|| {
        let filter = EnvFilter::try_from_default_env()
            .unwrap_or_else(|_| EnvFilter::new("warn,clihelper=debug"));

        fmt()
            .with_env_filter(filter)
            .with_test_writer()
            .without_time()
            .init();
    });
}

/// Run a future with a 5-second timeout.
pub async fn with_timeout<F, T>(f: F) -> T
where
    F: std::future::Future<Output = T>,
{
    tokio::time::timeout(std::time::Duration::from_secs(5), f)
        .await
        .expect("Test timed out after 5 seconds")
}
