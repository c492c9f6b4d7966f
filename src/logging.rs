use log::LevelFilter;

/// Install the stderr logger. `RUST_LOG` still overrides `level` when set.
pub fn init(level: LevelFilter) {
    let default = level.to_string().to_ascii_lowercase();
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or(default))
        .format_timestamp(None)
        .try_init();
}
