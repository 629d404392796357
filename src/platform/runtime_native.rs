/// `RUST_LOG` wins over `level` when set. Safe to call more than once.
pub fn init_logging(level: log::Level) {
    let _ = env_logger::Builder::from_env(
        env_logger::Env::default().default_filter_or(level.as_str().to_ascii_lowercase()),
    )
    .try_init();
}

pub fn install_panic_hook() {}
