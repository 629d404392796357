use wasm_bindgen::JsCast;
use web_sys::{HtmlDocument, Window};

use crate::cookie::CookieJar;
use crate::debug::{self, cat};
use crate::signin::SignInHost;
use crate::webshim;

/// Cookies, navigation and provider sign-out on the current page.
pub struct BrowserHost {
    window: Window,
    document: HtmlDocument,
}

impl BrowserHost {
    pub fn current() -> Option<Self> {
        let window = web_sys::window()?;
        let document = window.document()?.dyn_into::<HtmlDocument>().ok()?;
        Some(BrowserHost { window, document })
    }
}

impl CookieJar for BrowserHost {
    fn cookie_header(&self) -> String {
        self.document.cookie().unwrap_or_default()
    }

    fn set_cookie(&self, cookie: &str) {
        if let Err(e) = self.document.set_cookie(cookie) {
            log::warn!("[cookie] failed to write cookie: {e:?}");
        }
    }
}

impl SignInHost for BrowserHost {
    fn sign_out(&self) {
        if !webshim::gapi_sign_out() {
            debug::log(cat::SIGNIN, "provider sign-out unavailable");
        }
    }

    fn navigate(&self, url: &str) {
        if let Err(e) = self.window.location().set_href(url) {
            log::error!("[signin] navigation to {url} failed: {e:?}");
        }
    }
}
