//! Logger installation behind the `log` facade.
//!
//! The browser build forwards records to the devtools console through
//! `console_log`. Native builds use `pretty_env_logger`, and `RUST_LOG`
//! overrides the requested level there.

use log::LevelFilter;

/// Install the logger for this target. Only the first call installs one;
/// if the host already set a logger, that one is kept.
#[cfg(target_arch = "wasm32")]
pub fn init(level: LevelFilter) {
    let Some(level) = level.to_level() else {
        log::set_max_level(LevelFilter::Off);
        return;
    };
    let _ = console_log::init_with_level(level);
}

/// Install the logger for this target. Only the first call installs one;
/// if the host already set a logger, that one is kept.
#[cfg(not(target_arch = "wasm32"))]
pub fn init(level: LevelFilter) {
    let mut builder = pretty_env_logger::formatted_builder();
    builder.filter_level(level);
    if let Ok(filters) = std::env::var("RUST_LOG") {
        builder.parse_filters(&filters);
    }
    let _ = builder.try_init();
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn init_twice_keeps_the_first_logger() {
        init(LevelFilter::Warn);
        init(LevelFilter::Debug);
        log::warn!("logger installed");
    }
}
