use serde::{Deserialize, Serialize};

/// Outcome of a liveness probe against one DNSBL.
///
/// Produced by the DNSBL-querying side of the tool and consumed read-only
/// when rebuilding the alive subset.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
pub struct AliveCheckResult {
    /// Blacklist host name (e.g. `zen.spamhaus.org`)
    #[serde(alias = "hostName", alias = "blHostName")]
    pub host_name: String,

    /// Whether the blacklist answered the probe
    #[serde(alias = "isResponsive", alias = "blResponse")]
    pub is_responsive: bool,
}

impl AliveCheckResult {
    /// Create a result
    #[must_use]
    pub fn new(host_name: impl Into<String>, is_responsive: bool) -> Self {
        Self {
            host_name: host_name.into(),
            is_responsive,
        }
    }

    /// Result for a blacklist that answered
    #[must_use]
    pub fn alive(host_name: impl Into<String>) -> Self {
        Self::new(host_name, true)
    }

    /// Result for a blacklist that did not answer
    #[must_use]
    pub fn dead(host_name: impl Into<String>) -> Self {
        Self::new(host_name, false)
    }
}
