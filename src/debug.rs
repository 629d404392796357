//! Filterable debug logging for the settings page frontend
//!
//! Categories: DIALOG, TOKENS, SIGNIN, COOKIE, DOM
//! Enable via: ?rwdebug=all or localStorage.setItem('registry.debug','tokens,signin')

use std::sync::atomic::{AtomicU32, Ordering};

pub mod cat {
    pub const DIALOG: u32 = 1 << 0;
    pub const TOKENS: u32 = 1 << 1;
    pub const SIGNIN: u32 = 1 << 2;
    pub const COOKIE: u32 = 1 << 3;
    pub const DOM: u32 = 1 << 4;
    pub const ALL: u32 = 0xffff_ffff;
}

static MASK: AtomicU32 = AtomicU32::new(0);

#[inline]
pub fn set(mask: u32) {
    MASK.store(mask, Ordering::Relaxed)
}

#[inline]
pub fn enable(bits: u32) {
    MASK.fetch_or(bits, Ordering::Relaxed);
}

#[inline]
pub fn is(cat: u32) -> bool {
    (MASK.load(Ordering::Relaxed) & cat) != 0
}

#[inline]
pub fn cat_name(cat: u32) -> &'static str {
    match cat {
        c if c == cat::DIALOG => "dialog",
        c if c == cat::TOKENS => "tokens",
        c if c == cat::SIGNIN => "signin",
        c if c == cat::COOKIE => "cookie",
        c if c == cat::DOM => "dom",
        _ => "misc",
    }
}

/// Parse a comma-separated category list. `none` resets, unknown names are ignored.
pub fn parse_list(list: &str) -> u32 {
    let mut m: u32 = 0;
    for tok in list.split(',').map(|s| s.trim().to_ascii_lowercase()) {
        match tok.as_str() {
            "" => {}
            "none" => m = 0,
            "all" => m = cat::ALL,
            "dialog" => m |= cat::DIALOG,
            "tokens" => m |= cat::TOKENS,
            "signin" => m |= cat::SIGNIN,
            "cookie" => m |= cat::COOKIE,
            "dom" => m |= cat::DOM,
            _ => {}
        }
    }
    m
}

#[inline]
pub fn set_from_list(list: &str) {
    set(parse_list(list));
}

#[cfg(target_arch = "wasm32")]
pub fn init_from_url_and_storage_once() {
    use crate::constants::config::{DEBUG_QUERY_KEY, DEBUG_STORAGE_KEY};
    use std::sync::Once;
    static INIT: Once = Once::new();
    INIT.call_once(|| {
        let Some(win) = web_sys::window() else {
            return;
        };
        // URL query: ?rwdebug=tokens,signin
        if let Ok(search) = win.location().search() {
            let qs = search.trim_start_matches('?');
            for part in qs.split('&') {
                let mut it = part.splitn(2, '=');
                let key = it.next().unwrap_or_default();
                let val = it.next().unwrap_or_default();
                if key.eq_ignore_ascii_case(DEBUG_QUERY_KEY) {
                    let decoded = urlencoding::decode(val)
                        .map(|v| v.into_owned())
                        .unwrap_or_else(|_| val.to_string());
                    enable(parse_list(&decoded));
                }
            }
        }
        if let Ok(Some(storage)) = win.local_storage() {
            if let Ok(Some(v)) = storage.get_item(DEBUG_STORAGE_KEY) {
                enable(parse_list(&v));
            }
        }
        log(cat::DOM, "debug init (wasm) complete");
    });
}

#[cfg(not(target_arch = "wasm32"))]
pub fn init_from_url_and_storage_once() {}

#[inline]
pub fn log(cat: u32, msg: impl AsRef<str>) {
    if !is(cat) {
        return;
    }
    log::info!("[registry][{}] {}", cat_name(cat), msg.as_ref());
}
