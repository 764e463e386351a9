//! Request metadata captured alongside each report.

use axum::http::{header, HeaderMap};
use chrono::{DateTime, SecondsFormat, Utc};
use std::net::IpAddr;

/// Header set by proxies and load balancers carrying the client address.
pub const X_FORWARDED_FOR: &str = "x-forwarded-for";

/// Header set by nginx-style proxies carrying the client address.
pub const X_REAL_IP: &str = "x-real-ip";

/// Metadata derived from the request at the time it is handled.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct RequestMetadata {
    /// When the report was received.
    pub timestamp: DateTime<Utc>,

    /// Client user agent, if sent.
    pub user_agent: Option<String>,

    /// Client address, if it could be determined.
    pub ip: Option<String>,
}

impl RequestMetadata {
    /// Capture metadata for a request arriving now.
    pub fn capture(headers: &HeaderMap, remote_ip: Option<IpAddr>) -> Self {
        Self::at(Utc::now(), headers, remote_ip)
    }

    /// Capture metadata for a request arriving at `timestamp`.
    pub fn at(timestamp: DateTime<Utc>, headers: &HeaderMap, remote_ip: Option<IpAddr>) -> Self {
        Self {
            timestamp,
            user_agent: header_value(headers, header::USER_AGENT.as_str()),
            ip: resolve_ip(headers, remote_ip),
        }
    }

    /// Timestamp in ISO-8601 form, e.g. `2024-05-01T12:00:00.000Z`.
    pub fn timestamp_iso(&self) -> String {
        self.timestamp.to_rfc3339_opts(SecondsFormat::Millis, true)
    }
}

/// Resolve the client address: `x-forwarded-for`, then `x-real-ip`, then
/// the transport peer address.
///
/// Header values are used verbatim; a forwarded chain such as
/// `"203.0.113.7, 10.0.0.1"` is kept whole, and repeated header lines are
/// joined with `", "` in the order received.
pub fn resolve_ip(headers: &HeaderMap, remote_ip: Option<IpAddr>) -> Option<String> {
    joined_header_value(headers, X_FORWARDED_FOR)
        .or_else(|| joined_header_value(headers, X_REAL_IP))
        .or_else(|| remote_ip.map(|ip| ip.to_string()))
}

/// Non-empty, UTF-8 header value.
fn header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    headers
        .get(name)
        .and_then(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .map(str::to_string)
}

/// Every non-empty, UTF-8 value of a possibly repeated header, comma joined.
fn joined_header_value(headers: &HeaderMap, name: &str) -> Option<String> {
    let values: Vec<&str> = headers
        .get_all(name)
        .iter()
        .filter_map(|v| v.to_str().ok())
        .map(str::trim)
        .filter(|v| !v.is_empty())
        .collect();

    if values.is_empty() {
        None
    } else {
        Some(values.join(", "))
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use axum::http::HeaderValue;
    use chrono::TimeZone;
    use std::net::Ipv4Addr;

    fn headers(pairs: &[(&'static str, &str)]) -> HeaderMap {
        let mut map = HeaderMap::new();
        for (name, value) in pairs {
            map.insert(*name, HeaderValue::from_str(value).unwrap());
        }
        map
    }

    const PEER: IpAddr = IpAddr::V4(Ipv4Addr::new(192, 0, 2, 10));

    #[test]
    fn test_forwarded_for_wins() {
        let h = headers(&[
            (X_FORWARDED_FOR, "203.0.113.7, 10.0.0.1"),
            (X_REAL_IP, "198.51.100.2"),
        ]);
        assert_eq!(
            resolve_ip(&h, Some(PEER)).as_deref(),
            Some("203.0.113.7, 10.0.0.1")
        );
    }

    #[test]
    fn test_repeated_forwarded_for_joined() {
        let mut h = HeaderMap::new();
        h.append(X_FORWARDED_FOR, HeaderValue::from_static("203.0.113.7"));
        h.append(X_FORWARDED_FOR, HeaderValue::from_static(" "));
        h.append(X_FORWARDED_FOR, HeaderValue::from_static("10.0.0.1"));

        assert_eq!(
            resolve_ip(&h, Some(PEER)).as_deref(),
            Some("203.0.113.7, 10.0.0.1")
        );
    }

    #[test]
    fn test_real_ip_second() {
        let h = headers(&[(X_REAL_IP, "198.51.100.2")]);
        assert_eq!(resolve_ip(&h, Some(PEER)).as_deref(), Some("198.51.100.2"));
    }

    #[test]
    fn test_peer_address_fallback() {
        assert_eq!(
            resolve_ip(&HeaderMap::new(), Some(PEER)).as_deref(),
            Some("192.0.2.10")
        );
        assert_eq!(resolve_ip(&HeaderMap::new(), None), None);
    }

    #[test]
    fn test_blank_header_skipped() {
        let h = headers(&[(X_FORWARDED_FOR, "  "), (X_REAL_IP, "198.51.100.2")]);
        assert_eq!(resolve_ip(&h, None).as_deref(), Some("198.51.100.2"));
    }

    #[test]
    fn test_capture() {
        let at = Utc.with_ymd_and_hms(2024, 5, 1, 12, 0, 0).unwrap();
        let h = headers(&[("user-agent", "TestAgent")]);
        let meta = RequestMetadata::at(at, &h, None);

        assert_eq!(meta.user_agent.as_deref(), Some("TestAgent"));
        assert_eq!(meta.ip, None);
        assert_eq!(meta.timestamp_iso(), "2024-05-01T12:00:00.000Z");
    }
}
