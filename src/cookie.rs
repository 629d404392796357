//! Reading and expiring cookies from the page's `document.cookie` string.

use crate::constants::cookies::EXPIRED;

/// Access to the ambient cookie store.
pub trait CookieJar {
    /// The full `document.cookie` string, e.g. `"a=1; sign_out=true"`.
    fn cookie_header(&self) -> String;
    /// Write one cookie (same semantics as assigning `document.cookie`).
    fn set_cookie(&self, cookie: &str);
}

/// Look up a cookie value by name.
///
/// Returns `None` when the name is absent or appears more than once. A value
/// that itself contains `"; <name>="` is not handled.
pub fn get_cookie(cookie_header: &str, name: &str) -> Option<String> {
    let value = format!("; {cookie_header}");
    let needle = format!("; {name}=");
    let mut parts = value.split(needle.as_str());
    let _before = parts.next()?;
    let rest = parts.next()?;
    if parts.next().is_some() {
        return None;
    }
    rest.split(';').next().map(str::to_string)
}

/// Cookie string that deletes `name` at the root path.
pub fn expired_cookie(name: &str) -> String {
    format!("{name}=; Path=/; Expires={EXPIRED};")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn reads_single_cookie() {
        assert_eq!(get_cookie("sign_out=true", "sign_out").as_deref(), Some("true"));
    }

    #[test]
    fn reads_cookie_among_others() {
        let header = "csrftoken=abc; sign_out=false; theme=dark";
        assert_eq!(get_cookie(header, "sign_out").as_deref(), Some("false"));
        assert_eq!(get_cookie(header, "csrftoken").as_deref(), Some("abc"));
        assert_eq!(get_cookie(header, "theme").as_deref(), Some("dark"));
    }

    #[test]
    fn missing_cookie_is_none() {
        assert_eq!(get_cookie("other=1", "sign_out"), None);
        assert_eq!(get_cookie("", "sign_out"), None);
    }

    #[test]
    fn suffix_match_is_not_a_match() {
        assert_eq!(get_cookie("not_sign_out=true", "sign_out"), None);
    }

    #[test]
    fn duplicate_cookie_is_none() {
        assert_eq!(get_cookie("sign_out=true; sign_out=false", "sign_out"), None);
    }

    #[test]
    fn empty_value_is_present() {
        assert_eq!(get_cookie("sign_out=; a=1", "sign_out").as_deref(), Some(""));
    }

    #[test]
    fn expired_cookie_targets_root_path() {
        assert_eq!(
            expired_cookie("sign_out"),
            "sign_out=; Path=/; Expires=Thu, 01 Jan 1970 00:00:01 GMT;"
        );
    }
}
