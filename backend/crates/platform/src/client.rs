//! Client identification utilities
//!
//! Derives the key a rate limiter counts requests under.

use std::fmt;

use axum::http::HeaderMap;

/// Key used when no proxy header identifies the client.
///
/// Every such request shares one bucket.
pub const UNKNOWN_CLIENT: &str = "unknown";

/// Identifier a rate limit counter is keyed by
#[derive(Debug, Clone, PartialEq, Eq, Hash)]
pub struct ClientKey(String);

impl ClientKey {
    pub fn new(key: impl Into<String>) -> Self {
        Self(key.into())
    }

    pub fn unknown() -> Self {
        Self(UNKNOWN_CLIENT.to_string())
    }

    pub fn as_str(&self) -> &str {
        &self.0
    }

    pub fn is_unknown(&self) -> bool {
        self.0 == UNKNOWN_CLIENT
    }
}

impl fmt::Display for ClientKey {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(&self.0)
    }
}

/// Derive the client key from request headers
///
/// Precedence: first entry of `X-Forwarded-For`, then `X-Real-IP`,
/// then `CF-Connecting-IP`, else [`UNKNOWN_CLIENT`]. The headers are taken
/// as sent; nothing checks that a trusted proxy set them.
pub fn client_key(headers: &HeaderMap) -> ClientKey {
    if let Some(xff) = header_str(headers, "x-forwarded-for") {
        if let Some(first) = xff.split(',').next().map(str::trim) {
            if !first.is_empty() {
                return ClientKey::new(first);
            }
        }
    }

    ["x-real-ip", "cf-connecting-ip"]
        .into_iter()
        .find_map(|name| header_str(headers, name).map(str::trim).filter(|v| !v.is_empty()))
        .map(ClientKey::new)
        .unwrap_or_else(ClientKey::unknown)
}

fn header_str<'a>(headers: &'a HeaderMap, name: &str) -> Option<&'a str> {
    headers.get(name).and_then(|v| v.to_str().ok())
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;

    #[test]
    fn test_forwarded_for_first_entry_wins() {
        let mut headers = HeaderMap::new();
        headers.insert(
            "x-forwarded-for",
            HeaderValue::from_static(" 203.0.113.7 , 10.0.0.1"),
        );
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));

        assert_eq!(client_key(&headers).as_str(), "203.0.113.7");
    }

    #[test]
    fn test_real_ip_then_cdn_header() {
        let mut headers = HeaderMap::new();
        headers.insert("cf-connecting-ip", HeaderValue::from_static("192.0.2.9"));
        assert_eq!(client_key(&headers).as_str(), "192.0.2.9");

        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));
        assert_eq!(client_key(&headers).as_str(), "198.51.100.1");
    }

    #[test]
    fn test_empty_forwarded_for_falls_through() {
        let mut headers = HeaderMap::new();
        headers.insert("x-forwarded-for", HeaderValue::from_static(""));
        headers.insert("x-real-ip", HeaderValue::from_static("198.51.100.1"));

        assert_eq!(client_key(&headers).as_str(), "198.51.100.1");
    }

    #[test]
    fn test_unknown_sentinel() {
        let key = client_key(&HeaderMap::new());
        assert!(key.is_unknown());
        assert_eq!(key.to_string(), "unknown");
    }
}
