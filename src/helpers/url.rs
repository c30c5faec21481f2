//! URL helper functions

/// Link target for a social handle
///
/// Strips a single leading `@` and appends the rest of the handle to `base`
/// as written. Attribute escaping happens when the link is rendered.
///
/// # Examples
/// ```ignore
/// handle_url("https://twitter.com/", "@my3amclub") // -> "https://twitter.com/my3amclub"
/// ```
pub fn handle_url(base: &str, handle: &str) -> String {
    let handle = handle.strip_prefix('@').unwrap_or(handle);
    let base = base.trim_end_matches('/');
    format!("{}/{}", base, handle)
}

/// `mailto:` link target for an address
pub fn mailto(email: &str) -> String {
    format!("mailto:{}", email.trim())
}

/// Whether a URL points off-site
pub fn is_external(url: &str) -> bool {
    url.starts_with("http://") || url.starts_with("https://") || url.starts_with("//")
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_handle_url_strips_one_at() {
        assert_eq!(
            handle_url("https://twitter.com/", "@My3amclub"),
            "https://twitter.com/My3amclub"
        );
        assert_eq!(
            handle_url("https://twitter.com", "My3amclub"),
            "https://twitter.com/My3amclub"
        );
        assert_eq!(
            handle_url("https://twitter.com/", "@@double"),
            "https://twitter.com/@double"
        );
    }

    #[test]
    fn test_handle_url_keeps_handle_verbatim() {
        assert_eq!(
            handle_url("https://twitter.com/", "@雪球 88"),
            "https://twitter.com/雪球 88"
        );
    }

    #[test]
    fn test_mailto() {
        assert_eq!(mailto(" a@b.c "), "mailto:a@b.c");
    }

    #[test]
    fn test_is_external() {
        assert!(is_external("https://t.me/my3amclub"));
        assert!(!is_external("assets/images/a.jpg"));
    }
}
