use std::str::FromStr;
use std::sync::Once;

use tracing::Level;

static INIT: Once = Once::new();

/// Install the stderr subscriber. Unknown level names fall back to INFO.
pub fn init(level: &str) {
    let level = Level::from_str(level.trim()).unwrap_or(Level::INFO);

    if !tracing::dispatcher::has_been_set() {
        INIT.call_once(|| {
            tracing_subscriber::fmt()
                .with_max_level(level)
                .with_writer(std::io::stderr)
                .with_target(false)
                .init();
        });
    }
}
