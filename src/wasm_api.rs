//! Minimal JS -> Rust surface.
//!
//! The Google sign-in button calls a global by name (`data-onsuccess="onSignIn"`),
//! so the page loader assigns these exports onto `window`:
//!
//! ```javascript
//! import init, { onSignIn, getCookie } from "./registry_web.js";
//! await init();
//! window.onSignIn = onSignIn;
//! window.getCookie = getCookie;
//! ```

#![cfg(target_arch = "wasm32")]

use wasm_bindgen::prelude::*;

use crate::config::Config;
use crate::cookie::{self, CookieJar};
use crate::dom::{self, BrowserHost};
use crate::signin;
use crate::webshim::GoogleUser;

/// Sign-in success callback for the Google SDK.
#[wasm_bindgen(js_name = onSignIn)]
pub fn on_sign_in(google_user: GoogleUser) {
    let Some(host) = BrowserHost::current() else {
        log::error!("[signin] no browser document; ignoring sign-in callback");
        return;
    };
    let config = web_sys::window()
        .and_then(|w| w.document())
        .map(|d| dom::load_config(&d))
        .unwrap_or_else(Config::default);
    signin::handle_sign_in(&host, &google_user, &config);
}

/// Value of cookie `name`, or `undefined` when absent.
#[wasm_bindgen(js_name = getCookie)]
pub fn get_cookie(name: String) -> Option<String> {
    let host = BrowserHost::current()?;
    cookie::get_cookie(&host.cookie_header(), &name)
}
