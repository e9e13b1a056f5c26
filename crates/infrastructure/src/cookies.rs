//! Cookie header reader.

use std::collections::HashMap;

use console_application::ports::CookieReader;

/// Cookie jar parsed from a `Cookie:` header or `document.cookie` string.
///
/// Values are percent-decoded. When a name repeats, the first value wins.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct CookieHeaderReader {
    cookies: HashMap<String, String>,
}

impl CookieHeaderReader {
    /// Parses `name=value` pairs separated by `;`.
    #[must_use]
    pub fn parse(header: &str) -> Self {
        let mut cookies = HashMap::new();
        for pair in header.split(';') {
            let Some((name, value)) = pair.split_once('=') else {
                continue;
            };
            let name = name.trim();
            if name.is_empty() {
                continue;
            }
            let value = value.trim();
            let decoded = urlencoding::decode(value)
                .map_or_else(|_| value.to_string(), |v| v.into_owned());
            cookies.entry(name.to_string()).or_insert(decoded);
        }
        Self { cookies }
    }

    /// Returns the number of cookies.
    #[must_use]
    pub fn len(&self) -> usize {
        self.cookies.len()
    }

    /// Returns true if no cookie was parsed.
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.cookies.is_empty()
    }
}

impl CookieReader for CookieHeaderReader {
    fn cookie(&self, name: &str) -> Option<String> {
        self.cookies.get(name).cloned()
    }
}
