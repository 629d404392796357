//! Platform runtime hooks (logging, panic reporting).

#[cfg(target_arch = "wasm32")]
mod runtime_wasm;
#[cfg(target_arch = "wasm32")]
pub use runtime_wasm::{init_logging, install_panic_hook};

#[cfg(not(target_arch = "wasm32"))]
mod runtime_native;
#[cfg(not(target_arch = "wasm32"))]
pub use runtime_native::{init_logging, install_panic_hook};
