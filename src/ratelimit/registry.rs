//! Shared registry of observed rate limit state.

use std::collections::HashMap;

use parking_lot::Mutex;
use tracing::trace;

use super::window::Rate;

/// Registry key for the application-wide quota, as opposed to a single
/// endpoint-class quota.
pub const APP_RATE_KEY: &str = "app";

/// Process-wide store of the most recently observed [`Rate`] per operation key.
///
/// This is the only shared mutable state in the client. All access goes
/// through one mutex around a single map operation; the lock is never held
/// across network I/O. Entries are created lazily on the first response for
/// an operation and overwritten, never deleted, thereafter.
#[derive(Debug, Default)]
pub struct LimitRegistry {
    /// Observed rate state indexed by operation key
    rates: Mutex<HashMap<String, Rate>>,
}

impl LimitRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// Get the most recently observed rate state for an operation key.
    ///
    /// Returns a zero-value [`Rate`] for keys that have never been seen;
    /// lookups are infallible.
    pub fn get(&self, key: &str) -> Rate {
        let rates = self.rates.lock();
        rates.get(key).cloned().unwrap_or_default()
    }

    /// Replace the whole rate state for an operation key.
    pub fn set(&self, key: &str, rate: Rate) {
        let mut rates = self.rates.lock();
        rates.insert(key.to_string(), rate);
    }

    /// Record the state carried by one response: the application-wide entry
    /// and the method entry are written under a single lock acquisition, so
    /// a reader can never observe limits and counts from different responses
    /// paired together.
    pub fn record(&self, app: Rate, method_key: &str, method: Rate) {
        trace!(
            key = method_key,
            app_windows = app.counts.len(),
            method_windows = method.counts.len(),
            "Recording rate limit state"
        );

        let mut rates = self.rates.lock();
        rates.insert(APP_RATE_KEY.to_string(), app);
        rates.insert(method_key.to_string(), method);
    }

    /// Get the number of tracked operation keys.
    pub fn len(&self) -> usize {
        let rates = self.rates.lock();
        rates.len()
    }

    /// Returns `true` if no operation has been observed yet.
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }

    /// Clear all tracked state.
    ///
    /// This is primarily useful for testing.
    pub fn clear(&self) {
        let mut rates = self.rates.lock();
        rates.clear();
    }
}

#[cfg(test)]
mod tests {
    use super::super::window::{parse_counts, parse_limits};
    use super::*;

    #[test]
    fn test_get_unseen_key_returns_empty_rate() {
        let registry = LimitRegistry::new();

        assert!(registry.get("GET_getAllChampions").is_empty());
        assert!(registry.is_empty());
    }

    #[test]
    fn test_set_then_get() {
        let registry = LimitRegistry::new();
        let rate = Rate {
            limits: parse_limits("10:1"),
            counts: parse_counts("3:1"),
        };

        registry.set("GET_getAllChampions", rate.clone());

        assert_eq!(registry.get("GET_getAllChampions"), rate);
        assert_eq!(registry.len(), 1);
    }

    #[test]
    fn test_set_replaces_whole_rate() {
        let registry = LimitRegistry::new();
        registry.set(
            "k",
            Rate {
                limits: parse_limits("10:1,100:120"),
                counts: parse_counts("3:1,40:120"),
            },
        );

        let newer = Rate {
            limits: parse_limits("10:1"),
            counts: parse_counts("4:1"),
        };
        registry.set("k", newer.clone());

        // The older 120s window is gone, not merged in.
        assert_eq!(registry.get("k"), newer);
    }

    #[test]
    fn test_record_writes_app_and_method_entries() {
        let registry = LimitRegistry::new();
        let app = Rate {
            limits: parse_limits("100:1"),
            counts: parse_counts("5:1"),
        };
        let method = Rate {
            limits: parse_limits("20:1"),
            counts: parse_counts("1:1"),
        };

        registry.record(app.clone(), "GET_getChampionById", method.clone());

        assert_eq!(registry.get(APP_RATE_KEY), app);
        assert_eq!(registry.get("GET_getChampionById"), method);
        assert_eq!(registry.len(), 2);
    }

    #[test]
    fn test_clear() {
        let registry = LimitRegistry::new();
        registry.set("k", Rate::default());
        assert_eq!(registry.len(), 1);

        registry.clear();
        assert!(registry.is_empty());
    }
}
