//! Preemptive quota admission check.

use tracing::debug;

use super::registry::LimitRegistry;

/// Outcome of an admission check for one operation key.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Admission {
    /// No recorded window is at its allowance; the request may be sent.
    Allowed,
    /// A recorded window has already reached its allowance; sending the
    /// request would be rejected by the server.
    Denied {
        /// Window length, in seconds, of the exhausted limit
        window_secs: u32,
        /// Usage recorded by the most recent response
        used: u32,
        /// Allowance advertised by the most recent response
        allowed: u32,
    },
}

impl Admission {
    /// Returns `true` if the request may be sent.
    pub fn is_allowed(&self) -> bool {
        matches!(self, Admission::Allowed)
    }
}

/// Decide whether a request for the given operation key may be sent.
///
/// For every window present in the key's recorded counts, deny if a limit
/// exists for that same window and the recorded usage has reached it. The
/// first exhausted window found is sufficient. Keys with no recorded usage
/// are always admitted.
///
/// This is a client-side prediction from the last response's advertised
/// usage, not a live server check: it only refuses requests already known
/// to exceed quota, and cannot see traffic from other clients sharing the
/// same key.
pub fn admit(registry: &LimitRegistry, key: &str) -> Admission {
    let rate = registry.get(key);

    for (window_secs, count) in &rate.counts {
        if let Some(limit) = rate.limits.get(window_secs) {
            if count.used >= limit.allowed {
                debug!(
                    key,
                    window_secs,
                    used = count.used,
                    allowed = limit.allowed,
                    "Quota exhausted, denying request"
                );
                return Admission::Denied {
                    window_secs: *window_secs,
                    used: count.used,
                    allowed: limit.allowed,
                };
            }
        }
    }

    Admission::Allowed
}

#[cfg(test)]
mod tests {
    use super::super::window::{parse_counts, parse_limits, Rate};
    use super::*;

    fn registry_with(key: &str, limits: &str, counts: &str) -> LimitRegistry {
        let registry = LimitRegistry::new();
        registry.set(
            key,
            Rate {
                limits: parse_limits(limits),
                counts: parse_counts(counts),
            },
        );
        registry
    }

    #[test]
    fn test_admit_unseen_key() {
        let registry = LimitRegistry::new();
        assert_eq!(admit(&registry, "unseen"), Admission::Allowed);
    }

    #[test]
    fn test_admit_below_allowance() {
        let registry = registry_with("k", "10:1", "9:1");
        assert!(admit(&registry, "k").is_allowed());
    }

    #[test]
    fn test_deny_at_allowance() {
        let registry = registry_with("k", "10:1", "10:1");

        assert_eq!(
            admit(&registry, "k"),
            Admission::Denied {
                window_secs: 1,
                used: 10,
                allowed: 10,
            }
        );
    }

    #[test]
    fn test_deny_over_allowance() {
        let registry = registry_with("k", "10:1", "12:1");
        assert!(!admit(&registry, "k").is_allowed());
    }

    #[test]
    fn test_count_without_matching_limit_window_is_ignored() {
        // Usage is recorded for a 600s window, but no allowance is known for
        // that window, so it cannot trip the gate.
        let registry = registry_with("k", "10:1", "9999:600");
        assert!(admit(&registry, "k").is_allowed());
    }

    #[test]
    fn test_any_exhausted_window_denies() {
        let registry = registry_with("k", "10:1,1000:600", "3:1,1000:600");
        assert!(!admit(&registry, "k").is_allowed());
    }
}
