//! Error types

/// Convenience alias used throughout the crate
pub type Result<T> = std::result::Result<T, Error>;

/// graphwire error type
///
/// Errors are surfaced to the caller as-is: no retry, no partial recovery.
/// Resilience policy belongs to the caller or to the transport configuration.
#[derive(Debug, thiserror::Error)]
pub enum Error {
    /// Malformed URL or connection options (raised before any network call)
    #[error("invalid configuration: {0}")]
    Config(String),

    /// Transport-level or server-reported failure, propagated from the transport
    #[error("connection error: {0}")]
    Connection(#[from] redis::RedisError),

    /// Sentinel group reported other than exactly one master
    ///
    /// Auto-discovery cannot pick a primary; the caller must supply a
    /// disambiguating service name through the connection configuration.
    #[error("ambiguous topology: sentinel reported {found} masters, expected exactly one")]
    AmbiguousTopology {
        /// Number of masters the sentinel reported
        found: usize,
    },

    /// Unexpected reply shape from the server
    #[error("protocol error: {0}")]
    Protocol(String),
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_connection_error_from_redis() {
        let redis_err = redis::RedisError::from((redis::ErrorKind::IoError, "broken pipe"));
        let err: Error = redis_err.into();
        assert!(matches!(err, Error::Connection(_)));
    }

    #[test]
    fn test_ambiguous_topology_display() {
        let err = Error::AmbiguousTopology { found: 3 };
        assert_eq!(
            err.to_string(),
            "ambiguous topology: sentinel reported 3 masters, expected exactly one"
        );
    }

    #[test]
    fn test_config_error_display() {
        let err = Error::Config("bad url".into());
        assert_eq!(err.to_string(), "invalid configuration: bad url");
    }
}
