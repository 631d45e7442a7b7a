// Fri Oct 16 2026 - Alex

use crate::config::EnvSnapshot;
use log::LevelFilter;

pub fn level_for(env: &EnvSnapshot) -> LevelFilter {
    if env.debug {
        LevelFilter::Trace
    } else {
        LevelFilter::Warn
    }
}

/// Installs the stderr logger. `STRAP_LOG` takes env_logger filter syntax and
/// is applied on top of the debug toggle.
pub fn init(env: &EnvSnapshot) {
    let mut builder = env_logger::Builder::new();
    builder
        .filter_level(level_for(env))
        .format_timestamp(None);

    if let Some(filter) = &env.log_filter {
        builder.parse_filters(filter);
    }

    // A second init (tests, embedding) keeps the first logger.
    let _ = builder.try_init();
}
