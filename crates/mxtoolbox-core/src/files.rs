//! Well-known file names inside a blacklist directory.

/// Master hostname list. Read-only to the store; maintained by the operator.
pub const MASTER_FILE: &str = "blacklists.txt";

/// Derived list of blacklists that answered the last liveness check.
pub const ALIVE_FILE: &str = "blacklistsAlive.txt";

/// Prefix of the scratch file an alive-subset rebuild writes into.
pub const ALIVE_TEMP_PREFIX: &str = "blacklistsAlive.";

/// Suffix of the scratch file an alive-subset rebuild writes into.
pub const ALIVE_TEMP_SUFFIX: &str = ".tmp";

/// Directory name blacklist data is installed under.
pub const DATA_DIR_NAME: &str = "mxtoolbox-blacklists";
