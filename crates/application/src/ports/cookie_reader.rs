//! Cookie reader port

/// Read access to the browser-style cookie jar.
pub trait CookieReader: Send + Sync {
    /// Value of the named cookie, if set.
    fn cookie(&self, name: &str) -> Option<String>;
}
