//! Server topology classification

use crate::protocol::commands::server;

/// Operating mode of the probed server
///
/// Derived once per bootstrap from the `INFO server` reply; never persisted.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Topology {
    /// Plain instance; the direct connection is kept
    Standalone,

    /// Sentinel supervisor; the connection is rebound to the primary's
    /// logical name
    Sentinel,
}

impl Topology {
    /// Classify a server from its `INFO server` reply text.
    ///
    /// A server that does not report a `redis_mode` field is treated as
    /// standalone.
    pub fn classify(info: &str) -> Topology {
        match redis_mode(info) {
            Some(server::MODE_SENTINEL) => Topology::Sentinel,
            _ => Topology::Standalone,
        }
    }

    /// Whether the target is a sentinel-fronted failover group
    pub fn is_sentinel(&self) -> bool {
        matches!(self, Topology::Sentinel)
    }
}

impl std::fmt::Display for Topology {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Standalone => write!(f, "standalone"),
            Self::Sentinel => write!(f, "sentinel"),
        }
    }
}

/// Extract the `redis_mode` field from INFO text.
///
/// INFO replies are `key:value` lines with `# Section` comment headers and
/// CRLF line endings.
fn redis_mode(info: &str) -> Option<&str> {
    for line in info.lines() {
        if let Some(value) = line.strip_prefix("redis_mode:") {
            return Some(value.trim_end_matches('\r').trim());
        }
    }
    None
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_classify_standalone() {
        let info = "# Server\r\nredis_version:7.2.0\r\nredis_mode:standalone\r\n";
        assert_eq!(Topology::classify(info), Topology::Standalone);
    }

    #[test]
    fn test_classify_sentinel() {
        let info = "# Server\r\nredis_version:7.2.0\r\nredis_mode:sentinel\r\n";
        assert_eq!(Topology::classify(info), Topology::Sentinel);
    }

    #[test]
    fn test_classify_cluster_is_not_sentinel() {
        let info = "redis_mode:cluster\r\n";
        assert_eq!(Topology::classify(info), Topology::Standalone);
    }

    #[test]
    fn test_classify_missing_mode_defaults_to_standalone() {
        let info = "# Server\r\nredis_version:7.2.0\r\n";
        assert_eq!(Topology::classify(info), Topology::Standalone);
    }

    #[test]
    fn test_classify_without_carriage_returns() {
        let info = "# Server\nredis_mode:sentinel\n";
        assert_eq!(Topology::classify(info), Topology::Sentinel);
    }

    #[test]
    fn test_classify_empty_input() {
        assert_eq!(Topology::classify(""), Topology::Standalone);
    }

    #[test]
    fn test_display() {
        assert_eq!(Topology::Standalone.to_string(), "standalone");
        assert_eq!(Topology::Sentinel.to_string(), "sentinel");
    }

    #[test]
    fn test_is_sentinel() {
        assert!(Topology::Sentinel.is_sentinel());
        assert!(!Topology::Standalone.is_sentinel());
    }
}
