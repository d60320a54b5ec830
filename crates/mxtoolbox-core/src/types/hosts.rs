use serde::{Deserialize, Serialize};
use std::ops::Deref;

/// Ordered list of blacklist host names as read from a list file.
///
/// File order is preserved and duplicates are kept.
#[derive(Debug, Clone, Default, PartialEq, Eq, Serialize, Deserialize)]
#[serde(transparent)]
pub struct HostList(Vec<String>);

impl HostList {
    /// Parse newline-delimited list content.
    ///
    /// Line terminators (`\n` and `\r\n`) are stripped and empty lines are
    /// dropped. Every other line is kept verbatim, including one made of
    /// spaces or tabs.
    #[must_use]
    pub fn parse(content: &str) -> Self {
        Self(
            content
                .lines()
                .filter(|line| !line.is_empty())
                .map(str::to_owned)
                .collect(),
        )
    }

    /// Number of host names
    #[must_use]
    pub fn len(&self) -> usize {
        self.0.len()
    }

    /// Whether the list holds no host names
    #[must_use]
    pub fn is_empty(&self) -> bool {
        self.0.is_empty()
    }

    /// Borrow the host names as a slice
    #[must_use]
    pub fn as_slice(&self) -> &[String] {
        &self.0
    }

    /// Iterate over host names in file order
    pub fn iter(&self) -> std::slice::Iter<'_, String> {
        self.0.iter()
    }

    /// Whether `host` appears in the list
    #[must_use]
    pub fn contains(&self, host: &str) -> bool {
        self.0.iter().any(|h| h == host)
    }

    /// Consume into the underlying vector
    #[must_use]
    pub fn into_inner(self) -> Vec<String> {
        self.0
    }
}

impl Deref for HostList {
    type Target = [String];

    fn deref(&self) -> &Self::Target {
        &self.0
    }
}

impl From<Vec<String>> for HostList {
    fn from(hosts: Vec<String>) -> Self {
        Self(hosts)
    }
}

impl FromIterator<String> for HostList {
    fn from_iter<I: IntoIterator<Item = String>>(iter: I) -> Self {
        Self(iter.into_iter().collect())
    }
}

impl IntoIterator for HostList {
    type Item = String;
    type IntoIter = std::vec::IntoIter<String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.into_iter()
    }
}

impl<'a> IntoIterator for &'a HostList {
    type Item = &'a String;
    type IntoIter = std::slice::Iter<'a, String>;

    fn into_iter(self) -> Self::IntoIter {
        self.0.iter()
    }
}
