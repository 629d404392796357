//! JavaScript bridges for page libraries we do not own
//!
//! - Foundation modals, reached through `window.jQuery(el).foundation(...)`
//! - Google sign-in (`gapi.auth2`) and the `GoogleUser` object it passes to
//!   the sign-in callback
//!
//! Every call tolerates the library being absent: it logs and reports failure
//! instead of throwing.

#![cfg(target_arch = "wasm32")]

use js_sys::{Function, Reflect};
use wasm_bindgen::prelude::*;
use wasm_bindgen::JsCast;
use web_sys::window;

use crate::signin::SignedInUser;

#[wasm_bindgen]
extern "C" {
    // `catch` prevents a panic when jQuery is not loaded.
    #[wasm_bindgen(js_namespace = window, js_name = jQuery, catch)]
    fn jquery(target: &JsValue) -> Result<JsValue, JsValue>;

    /// Signed-in user handed to the `onSignIn` callback by the Google SDK.
    pub type GoogleUser;

    #[wasm_bindgen(method, js_name = getBasicProfile)]
    fn get_basic_profile(this: &GoogleUser) -> BasicProfile;

    pub type BasicProfile;

    #[wasm_bindgen(method, js_name = getName)]
    fn get_name(this: &BasicProfile) -> Option<String>;
}

impl SignedInUser for GoogleUser {
    fn display_name(&self) -> String {
        self.get_basic_profile().get_name().unwrap_or_default()
    }
}

fn get(target: &JsValue, key: &str) -> Option<JsValue> {
    Reflect::get(target, &JsValue::from_str(key))
        .ok()
        .filter(|v| !v.is_undefined() && !v.is_null())
}

// ----------------------- FOUNDATION (via jQuery) ----------------------------

/// `jQuery(target).foundation(...args)`. Returns false if either library is missing.
fn call_foundation(target: &JsValue, args: &[&str]) -> bool {
    let Ok(wrapped) = jquery(target) else {
        log::warn!("[webshim] jQuery not available");
        return false;
    };
    let Some(f) = get(&wrapped, "foundation").and_then(|f| f.dyn_into::<Function>().ok()) else {
        log::warn!("[webshim] Foundation plugin not available");
        return false;
    };
    let result = match args {
        [] => f.call0(&wrapped),
        [a] => f.call1(&wrapped, &JsValue::from_str(a)),
        [a, b, ..] => f.call2(&wrapped, &JsValue::from_str(a), &JsValue::from_str(b)),
    };
    match result {
        Ok(_) => true,
        Err(e) => {
            log::warn!("[webshim] foundation({args:?}) threw: {e:?}");
            false
        }
    }
}

/// `$(document).foundation()`: initialise Foundation plugins on the page.
pub fn foundation_init(document: &web_sys::Document) -> bool {
    call_foundation(document.as_ref(), &[])
}

/// `$(modal).foundation('open')`
pub fn foundation_open(modal: &web_sys::Element) -> bool {
    call_foundation(modal.as_ref(), &["open"])
}

/// `$(modal).foundation('close')`
pub fn foundation_close(modal: &web_sys::Element) -> bool {
    call_foundation(modal.as_ref(), &["close"])
}

// ----------------------- GOOGLE SIGN-IN (gapi.auth2) ------------------------

/// `gapi.auth2.getAuthInstance().signOut()`. The returned promise is not awaited.
pub fn gapi_sign_out() -> bool {
    let Some(win) = window() else {
        return false;
    };
    let Some(auth2) = get(win.as_ref(), "gapi").and_then(|gapi| get(&gapi, "auth2")) else {
        log::warn!("[webshim] gapi.auth2 not loaded; cannot sign out");
        return false;
    };
    let instance = get(&auth2, "getAuthInstance")
        .and_then(|f| f.dyn_into::<Function>().ok())
        .and_then(|f| f.call0(&auth2).ok())
        .filter(|v| !v.is_undefined() && !v.is_null());
    let Some(instance) = instance else {
        log::warn!("[webshim] gapi.auth2.getAuthInstance() unavailable");
        return false;
    };
    match get(&instance, "signOut").and_then(|f| f.dyn_into::<Function>().ok()) {
        Some(sign_out) => sign_out.call0(&instance).is_ok(),
        None => false,
    }
}
