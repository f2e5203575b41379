use log::LevelFilter;

/// Initialize logging for wordgrid.
///
/// # Behavior
/// - Uses `Debug` level if `debug_enabled` is true, otherwise `Info`.
/// - `RUST_LOG`, when set, overrides these defaults.
/// - Calling it a second time is a no-op (the first logger stays installed).
pub fn init_logger(debug_enabled: bool) {
    let level = if debug_enabled {
        LevelFilter::Debug
    } else {
        LevelFilter::Info
    };

    let mut builder = env_logger::Builder::new();
    builder
        .filter(None, level)
        .format_timestamp(None)
        .format_module_path(false)
        .format_target(false);

    // Let RUST_LOG override our defaults if explicitly set
    if let Ok(spec) = std::env::var("RUST_LOG") {
        builder.parse_filters(&spec);
    }

    if builder.try_init().is_ok() {
        log::debug!("Logger initialized at {level:?} level");
    }
}
