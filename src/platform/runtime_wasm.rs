use std::sync::Once;

static LOGGER_INIT: Once = Once::new();

/// Route `log` records to the browser console.
pub fn init_logging(level: log::Level) {
    LOGGER_INIT.call_once(|| {
        wasm_logger::init(wasm_logger::Config::new(level));
    });
}

/// Report panics through `console.error` with a stack trace.
pub fn install_panic_hook() {
    console_error_panic_hook::set_once();
}
