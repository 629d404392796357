//! Identity-provider sign-in callback.
//!
//! The provider SDK calls back once an interactive sign-in completes. If the
//! server left a `sign_out=true` cookie (the user just logged out of the
//! registry) we end the provider session too and expire the cookie. Otherwise
//! the browser is sent to the server callback with the user's display name.

use crate::config::Config;
use crate::constants::cookies::SIGN_OUT;
use crate::cookie::{expired_cookie, get_cookie, CookieJar};
use crate::debug::{self, cat};

/// Browser side effects needed by the callback.
pub trait SignInHost: CookieJar {
    /// End the identity provider session.
    fn sign_out(&self);
    /// Navigate the current page.
    fn navigate(&self, url: &str);
}

/// The signed-in user handed over by the provider SDK.
pub trait SignedInUser {
    fn display_name(&self) -> String;
}

#[derive(Clone, Debug, PartialEq, Eq)]
pub enum SignInAction {
    /// Provider session ended, cookie expired, no navigation.
    SignedOut,
    Redirect { url: String },
}

/// Server callback URL carrying the display name as `?name=`.
pub fn callback_url(endpoint: &str, name: &str, encode: bool) -> String {
    if encode {
        format!("{endpoint}?name={}", urlencoding::encode(name))
    } else {
        format!("{endpoint}?name={name}")
    }
}

/// Handle a completed sign-in and report what was done.
///
/// The profile is only read on the redirect path.
pub fn handle_sign_in<H, U>(host: &H, user: &U, config: &Config) -> SignInAction
where
    H: SignInHost + ?Sized,
    U: SignedInUser + ?Sized,
{
    let flag = get_cookie(&host.cookie_header(), SIGN_OUT);
    debug::log(cat::COOKIE, format!("{SIGN_OUT}={flag:?}"));

    if flag.as_deref() == Some("true") {
        host.sign_out();
        host.set_cookie(&expired_cookie(SIGN_OUT));
        log::info!("[signin] sign-out flag set; provider session ended");
        return SignInAction::SignedOut;
    }

    let name = user.display_name();
    let url = callback_url(
        &config.endpoints.google_callback,
        &name,
        config.encode_callback_name,
    );
    debug::log(cat::SIGNIN, format!("redirecting to {url}"));
    host.navigate(&url);
    SignInAction::Redirect { url }
}
