use env_logger::Env;
use log::LevelFilter;

/// Initialize the logger.
///
/// `RUST_LOG` is honored (defaulting to `info`); an explicit level from the
/// command line overrides it for every module.
pub fn init_logger(level: Option<LevelFilter>) {
    let mut builder = env_logger::Builder::from_env(Env::default().default_filter_or("info"));
    if let Some(level) = level {
        builder.filter_level(level);
    }
    builder.format_timestamp_millis().init();
}
