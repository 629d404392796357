#![cfg_attr(target_arch = "wasm32", no_main)]

// DOM frontend for the registry account settings pages.
//
// JS side (the page loader generated by trunk/wasm-bindgen):
//   import init, { onSignIn } from "./registry-web.js";
//   await init();                 // runs wasm_start below
//   window.onSignIn = onSignIn;   // Google SDK calls it by name

#[cfg(target_arch = "wasm32")]
mod web {
    use wasm_bindgen::prelude::*;

    use registry_web::{debug, dom, platform};

    /// Mount the settings page controller once the module loads.
    ///
    /// Pages without the token dialogs (e.g. the login page, which only
    /// needs `onSignIn`) log the missing element and carry on.
    #[wasm_bindgen(start)]
    pub fn wasm_start() {
        platform::install_panic_hook();
        platform::init_logging(log::Level::Info);

        let Some(document) = web_sys::window().and_then(|w| w.document()) else {
            log::error!("[registry-web] no document; nothing to mount");
            return;
        };

        let config = dom::load_config(&document);
        debug::init_from_url_and_storage_once();
        if let Some(list) = &config.debug {
            debug::enable(debug::parse_list(list));
        }
        if debug::is(debug::cat::DOM) {
            config.print_summary();
        }

        match dom::mount(&config) {
            Ok(_) => {}
            Err(e @ dom::MountError::MissingElement { .. }) => {
                log::warn!("[registry-web] settings controller not mounted: {e}");
            }
            Err(e) => log::error!("[registry-web] mount failed: {e}"),
        }
    }
}

// Native builds: just provide a stub main so `cargo build` on the host doesn't explode.
#[cfg(not(target_arch = "wasm32"))]
fn main() {
    eprintln!("registry-web is only supported on the wasm32 (browser) target.");
}
