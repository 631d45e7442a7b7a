// Fri Oct 16 2026 - Alex

pub mod errors;
pub mod logging;

pub use errors::ErrorDisplay;

use crate::config::EnvSnapshot;

/// Turns styling off for `NO_COLOR` or when stderr is not a terminal. Only
/// error prefixes are ever styled.
pub fn init_colors(env: &EnvSnapshot) {
    if env.no_color || !atty::is(atty::Stream::Stderr) {
        colored::control::set_override(false);
    }
}
