//! Rate limit response header parsing.
//!
//! Every Riot API response advertises the application-wide and per-method
//! quota state in four headers, each carrying a `value:window` encoded
//! string. Two further advisory headers describe which limit was enforced
//! and how long to wait; they are parsed into [`Advisory`] for caller
//! inspection but the client never acts on them itself.

use std::time::Duration;

use reqwest::header::HeaderMap;

use super::window::{parse_counts, parse_limits, Rate};

/// Header carrying the API key on every request.
pub const HEADER_API_KEY: &str = "X-Riot-Token";
/// Application-wide allowances, `allowed:window` pairs.
pub const HEADER_APP_RATE_LIMIT: &str = "X-App-Rate-Limit";
/// Application-wide usage, `used:window` pairs.
pub const HEADER_APP_RATE_LIMIT_COUNT: &str = "X-App-Rate-Limit-Count";
/// Per-method allowances, `allowed:window` pairs.
pub const HEADER_METHOD_RATE_LIMIT: &str = "X-Method-Rate-Limit";
/// Per-method usage, `used:window` pairs.
pub const HEADER_METHOD_RATE_LIMIT_COUNT: &str = "X-Method-Rate-Limit-Count";
/// Advisory: which class of limit was enforced on a 429.
pub const HEADER_RATE_LIMIT_TYPE: &str = "X-Rate-Limit-Type";
/// Advisory: seconds to wait before retrying.
pub const HEADER_RETRY_AFTER: &str = "Retry-After";

/// The class of limit the server reports as enforced.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum LimitType {
    /// The account-wide quota
    Application,
    /// The endpoint-class quota
    Method,
    /// An underlying service quota not attributed to this client
    Service,
}

impl LimitType {
    fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_ascii_lowercase().as_str() {
            "application" => Some(LimitType::Application),
            "method" => Some(LimitType::Method),
            "service" => Some(LimitType::Service),
            _ => None,
        }
    }
}

/// Advisory throttling hints from a response.
///
/// These are surfaced so a caller can build retry/backoff scheduling on top
/// of the client; the dispatcher itself never waits or blocks on them.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Advisory {
    /// Which limit class was enforced, if the server said
    pub limit_type: Option<LimitType>,
    /// Server-suggested wait before the next attempt
    pub retry_after: Option<Duration>,
}

/// Everything the dispatcher extracts from one response's headers.
#[derive(Debug, Clone, PartialEq)]
pub struct RateHeaders {
    /// Application-wide quota state
    pub app: Rate,
    /// Quota state for the specific operation
    pub method: Rate,
    /// Advisory hints, present only when the server sent either header
    pub advisory: Option<Advisory>,
}

/// Parse the rate limit headers of a response.
///
/// Absent headers yield empty maps: the returned state always reflects
/// exactly what this response advertised, wholly replacing older snapshots.
pub fn parse_rate_headers(headers: &HeaderMap) -> RateHeaders {
    let app = Rate {
        limits: parse_limits(header_str(headers, HEADER_APP_RATE_LIMIT)),
        counts: parse_counts(header_str(headers, HEADER_APP_RATE_LIMIT_COUNT)),
    };
    let method = Rate {
        limits: parse_limits(header_str(headers, HEADER_METHOD_RATE_LIMIT)),
        counts: parse_counts(header_str(headers, HEADER_METHOD_RATE_LIMIT_COUNT)),
    };

    let limit_type = LimitType::parse(header_str(headers, HEADER_RATE_LIMIT_TYPE));
    let retry_after = header_str(headers, HEADER_RETRY_AFTER)
        .trim()
        .parse::<u64>()
        .ok()
        .map(Duration::from_secs);

    let advisory = if limit_type.is_some() || retry_after.is_some() {
        Some(Advisory {
            limit_type,
            retry_after,
        })
    } else {
        None
    };

    RateHeaders {
        app,
        method,
        advisory,
    }
}

/// A header value as a string, or `""` when absent or not valid UTF-8.
fn header_str<'h>(headers: &'h HeaderMap, name: &str) -> &'h str {
    headers
        .get(name)
        .and_then(|value| value.to_str().ok())
        .unwrap_or("")
}

#[cfg(test)]
mod tests {
    use super::*;
    use reqwest::header::{HeaderName, HeaderValue};

    fn headers_from(pairs: &[(&str, &str)]) -> HeaderMap {
        let mut headers = HeaderMap::new();
        for (name, value) in pairs {
            headers.insert(
                name.parse::<HeaderName>().unwrap(),
                HeaderValue::from_str(value).unwrap(),
            );
        }
        headers
    }

    #[test]
    fn test_parse_full_header_set() {
        let headers = headers_from(&[
            (HEADER_APP_RATE_LIMIT, "100:1,1000:10"),
            (HEADER_APP_RATE_LIMIT_COUNT, "5:1,42:10"),
            (HEADER_METHOD_RATE_LIMIT, "20:1"),
            (HEADER_METHOD_RATE_LIMIT_COUNT, "1:1"),
        ]);

        let parsed = parse_rate_headers(&headers);

        assert_eq!(parsed.app.limits[&1].allowed, 100);
        assert_eq!(parsed.app.limits[&10].allowed, 1000);
        assert_eq!(parsed.app.counts[&10].used, 42);
        assert_eq!(parsed.method.limits[&1].allowed, 20);
        assert_eq!(parsed.method.counts[&1].used, 1);
        assert!(parsed.advisory.is_none());
    }

    #[test]
    fn test_missing_headers_yield_empty_state() {
        let parsed = parse_rate_headers(&HeaderMap::new());

        assert!(parsed.app.is_empty());
        assert!(parsed.method.is_empty());
        assert!(parsed.advisory.is_none());
    }

    #[test]
    fn test_advisory_headers() {
        let headers = headers_from(&[
            (HEADER_RATE_LIMIT_TYPE, "Method"),
            (HEADER_RETRY_AFTER, "7"),
        ]);

        let advisory = parse_rate_headers(&headers).advisory.unwrap();

        assert_eq!(advisory.limit_type, Some(LimitType::Method));
        assert_eq!(advisory.retry_after, Some(Duration::from_secs(7)));
    }

    #[test]
    fn test_advisory_present_with_only_retry_after() {
        let headers = headers_from(&[(HEADER_RETRY_AFTER, "3")]);

        let advisory = parse_rate_headers(&headers).advisory.unwrap();

        assert_eq!(advisory.limit_type, None);
        assert_eq!(advisory.retry_after, Some(Duration::from_secs(3)));
    }

    #[test]
    fn test_unknown_limit_type_is_none() {
        let headers = headers_from(&[(HEADER_RATE_LIMIT_TYPE, "mystery")]);

        let parsed = parse_rate_headers(&headers);

        // The header was present but unintelligible; no advisory invented.
        assert!(parsed.advisory.is_none());
    }
}
