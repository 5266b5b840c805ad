// src/utils/mod.rs
pub mod formatter;
pub mod terminal;

/// Installs the stderr logger used by every binary. `RUST_LOG` overrides the
/// default `warn` filter.
pub fn init_logging() {
    let _ = env_logger::Builder::from_env(env_logger::Env::default().default_filter_or("warn"))
        .format_timestamp(None)
        .try_init();
}
