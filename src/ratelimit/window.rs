//! Rate window encoding and state types.
//!
//! The Riot API advertises quota limits and current usage as comma-separated
//! `value:window` pairs, e.g. `100:1,1000:10,60000:600,360000:3600` reads as
//! "100 requests per 1s, 1000 per 10s, 60000 per 600s, 360000 per 3600s".
//! The same encoding carries both allowances (`X-*-Rate-Limit`) and usage
//! counts (`X-*-Rate-Limit-Count`); the two differ only in how the parsed
//! pairs are wrapped.

use std::collections::HashMap;

/// A quota allowance for a single time window.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Limit {
    /// Maximum requests permitted within the window
    pub allowed: u32,
    /// Window length in seconds
    pub window_secs: u32,
}

/// Observed usage within a single time window.
///
/// Snapshots are taken from the most recent response and wholly replace any
/// previous snapshot; counts are never merged across responses.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct Count {
    /// Requests used within the window, as of the last response
    pub used: u32,
    /// Window length in seconds
    pub window_secs: u32,
}

/// The joint rate limit state for one operation key.
///
/// Either the application-wide quota (keyed `"app"` in the registry) or one
/// endpoint-class quota. A single operation typically carries several
/// simultaneous windows.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct Rate {
    /// Allowances per window length
    pub limits: HashMap<u32, Limit>,
    /// Usage per window length
    pub counts: HashMap<u32, Count>,
}

impl Rate {
    /// Returns `true` if this rate carries no limits and no counts.
    pub fn is_empty(&self) -> bool {
        self.limits.is_empty() && self.counts.is_empty()
    }
}

/// Parse a `value:window,value:window,...` string into a window -> value map.
///
/// Parsing is best-effort: pairs with fewer than two `:`-separated fields
/// are dropped, and non-numeric fields parse as zero. A malformed header
/// from the server must never fail an otherwise valid response.
pub fn parse_rate_string(raw: &str) -> HashMap<u32, u32> {
    let mut windows = HashMap::new();

    for pair in raw.split(',') {
        let mut fields = pair.splitn(2, ':');
        let value = match fields.next() {
            Some(v) => v,
            None => continue,
        };
        let window = match fields.next() {
            Some(w) => w,
            None => continue,
        };

        let value: u32 = value.trim().parse().unwrap_or(0);
        let window: u32 = window.trim().parse().unwrap_or(0);
        windows.insert(window, value);
    }

    windows
}

/// Render a window -> value map back into the wire encoding.
///
/// Pairs are emitted in ascending window order so the output is stable for
/// logging and comparison.
pub fn encode_rate_string(windows: &HashMap<u32, u32>) -> String {
    let mut entries: Vec<(&u32, &u32)> = windows.iter().collect();
    entries.sort_by_key(|(window, _)| **window);

    entries
        .iter()
        .map(|(window, value)| format!("{}:{}", value, window))
        .collect::<Vec<_>>()
        .join(",")
}

/// Parse an allowance header value into per-window limits.
pub fn parse_limits(raw: &str) -> HashMap<u32, Limit> {
    parse_rate_string(raw)
        .into_iter()
        .map(|(window_secs, allowed)| {
            (
                window_secs,
                Limit {
                    allowed,
                    window_secs,
                },
            )
        })
        .collect()
}

/// Parse a usage header value into per-window counts.
pub fn parse_counts(raw: &str) -> HashMap<u32, Count> {
    parse_rate_string(raw)
        .into_iter()
        .map(|(window_secs, used)| (window_secs, Count { used, window_secs }))
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_parse_rate_string_riot_example() {
        let parsed = parse_rate_string("100:1,1000:10,60000:600,360000:3600");

        let expected: HashMap<u32, u32> =
            [(1, 100), (10, 1000), (600, 60000), (3600, 360000)].into();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_rate_string_empty() {
        assert!(parse_rate_string("").is_empty());
    }

    #[test]
    fn test_parse_rate_string_skips_malformed_pairs() {
        let parsed = parse_rate_string("100:1,nocolon,1000:10");

        let expected: HashMap<u32, u32> = [(1, 100), (10, 1000)].into();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_parse_rate_string_non_numeric_fields_become_zero() {
        let parsed = parse_rate_string("abc:1,100:xyz");

        let expected: HashMap<u32, u32> = [(1, 0), (0, 100)].into();
        assert_eq!(parsed, expected);
    }

    #[test]
    fn test_encode_parse_round_trip() {
        let raw = "100:1,1000:10,60000:600,360000:3600";
        let parsed = parse_rate_string(raw);

        assert_eq!(encode_rate_string(&parsed), raw);
        assert_eq!(parse_rate_string(&encode_rate_string(&parsed)), parsed);
    }

    #[test]
    fn test_parse_limits() {
        let limits = parse_limits("100:1,1000:10");

        assert_eq!(limits.len(), 2);
        assert_eq!(
            limits[&1],
            Limit {
                allowed: 100,
                window_secs: 1
            }
        );
        assert_eq!(
            limits[&10],
            Limit {
                allowed: 1000,
                window_secs: 10
            }
        );
    }

    #[test]
    fn test_parse_counts() {
        let counts = parse_counts("1:1,1:10,1:600,1:3600");

        assert_eq!(counts.len(), 4);
        for window in [1, 10, 600, 3600] {
            assert_eq!(
                counts[&window],
                Count {
                    used: 1,
                    window_secs: window
                }
            );
        }
    }

    #[test]
    fn test_rate_is_empty() {
        assert!(Rate::default().is_empty());

        let rate = Rate {
            limits: parse_limits("10:1"),
            counts: HashMap::new(),
        };
        assert!(!rate.is_empty());
    }
}
