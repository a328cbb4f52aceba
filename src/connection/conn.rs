//! Core connection type

use super::topology::Topology;
use crate::protocol::{commands, decode};
use crate::{Error, Result};
use redis::aio::MultiplexedConnection;
use redis::sentinel::{SentinelClient, SentinelNodeConnectionInfo, SentinelServerType};
use redis::Value;
use std::path::PathBuf;
use std::time::Duration;
use tracing::Instrument;

/// Server address
#[derive(Debug, Clone, PartialEq, Eq)]
pub enum ServerAddr {
    /// Plain TCP
    Tcp {
        /// Hostname or IP
        host: String,
        /// Port
        port: u16,
    },
    /// TLS-encrypted TCP
    TcpTls {
        /// Hostname or IP
        host: String,
        /// Port
        port: u16,
        /// Skip certificate verification
        insecure: bool,
    },
    /// Unix domain socket
    Unix {
        /// Socket path
        path: PathBuf,
    },
}

impl ServerAddr {
    pub(crate) fn to_redis(&self) -> redis::ConnectionAddr {
        match self {
            ServerAddr::Tcp { host, port } => redis::ConnectionAddr::Tcp(host.clone(), *port),
            ServerAddr::TcpTls {
                host,
                port,
                insecure,
            } => redis::ConnectionAddr::TcpTls {
                host: host.clone(),
                port: *port,
                insecure: *insecure,
                tls_params: None,
            },
            ServerAddr::Unix { path } => redis::ConnectionAddr::Unix(path.clone()),
        }
    }

    /// TLS mode to carry over to sentinel-resolved data nodes
    pub(crate) fn tls_mode(&self) -> Option<redis::TlsMode> {
        match self {
            ServerAddr::TcpTls { insecure: false, .. } => Some(redis::TlsMode::Secure),
            ServerAddr::TcpTls { insecure: true, .. } => Some(redis::TlsMode::Insecure),
            _ => None,
        }
    }
}

impl std::fmt::Display for ServerAddr {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            ServerAddr::Tcp { host, port } => write!(f, "{}:{}", host, port),
            ServerAddr::TcpTls { host, port, .. } => write!(f, "{}:{} (tls)", host, port),
            ServerAddr::Unix { path } => write!(f, "{}", path.display()),
        }
    }
}

/// Connection configuration
///
/// Immutable input to the bootstrapper: server address, credentials, database
/// index, transport timeouts, and the optional sentinel service name. Use
/// `ConnectionConfig::builder()` for the full option set.
#[derive(Debug, Clone)]
pub struct ConnectionConfig {
    /// Server address
    pub addr: ServerAddr,
    /// Username (optional; servers without ACLs use password-only auth)
    pub username: Option<String>,
    /// Password (optional)
    pub password: Option<String>,
    /// Database index
    pub db: i64,
    /// Transport connect timeout (default: none)
    pub connect_timeout: Option<Duration>,
    /// Per-request response timeout (default: none)
    pub response_timeout: Option<Duration>,
    /// Sentinel service name; set it to bypass master auto-discovery when a
    /// sentinel supervises more than one group
    pub service_name: Option<String>,
}

impl ConnectionConfig {
    /// Create a new TCP configuration with defaults
    ///
    /// # Defaults
    ///
    /// - no credentials, database 0
    /// - no connect or response timeout (the transport's own defaults apply)
    /// - no sentinel service name (auto-discovery)
    ///
    /// For timeouts, TLS, and sentinel options, use `builder()` instead.
    pub fn new(host: impl Into<String>, port: u16) -> Self {
        Self {
            addr: ServerAddr::Tcp {
                host: host.into(),
                port,
            },
            username: None,
            password: None,
            db: 0,
            connect_timeout: None,
            response_timeout: None,
            service_name: None,
        }
    }

    /// Create a configuration for a Unix domain socket
    pub fn unix(path: impl Into<PathBuf>) -> Self {
        Self {
            addr: ServerAddr::Unix { path: path.into() },
            username: None,
            password: None,
            db: 0,
            connect_timeout: None,
            response_timeout: None,
            service_name: None,
        }
    }

    /// Create a builder for the full option set
    ///
    /// # Examples
    ///
    /// ```ignore
    /// let config = ConnectionConfig::builder("localhost", 6379)
    ///     .password("secret")
    ///     .connect_timeout(Duration::from_secs(10))
    ///     .build();
    /// ```
    pub fn builder(host: impl Into<String>, port: u16) -> ConnectionConfigBuilder {
        ConnectionConfigBuilder {
            config: Self::new(host, port),
        }
    }

    /// Set username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.username = Some(username.into());
        self
    }

    /// Set password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.password = Some(password.into());
        self
    }

    pub(crate) fn to_redis_info(&self) -> redis::ConnectionInfo {
        redis::ConnectionInfo {
            addr: self.addr.to_redis(),
            redis: self.to_redis_connection_info(),
        }
    }

    pub(crate) fn to_redis_connection_info(&self) -> redis::RedisConnectionInfo {
        redis::RedisConnectionInfo {
            db: self.db,
            username: self.username.clone(),
            password: self.password.clone(),
            ..Default::default()
        }
    }
}

/// Builder for creating `ConnectionConfig` with advanced options
#[derive(Debug, Clone)]
pub struct ConnectionConfigBuilder {
    config: ConnectionConfig,
}

impl ConnectionConfigBuilder {
    /// Set the username
    pub fn username(mut self, username: impl Into<String>) -> Self {
        self.config.username = Some(username.into());
        self
    }

    /// Set the password
    pub fn password(mut self, password: impl Into<String>) -> Self {
        self.config.password = Some(password.into());
        self
    }

    /// Set the database index
    ///
    /// Default: 0
    pub fn db(mut self, db: i64) -> Self {
        self.config.db = db;
        self
    }

    /// Set the transport connect timeout
    ///
    /// Default: none (the transport's own default applies)
    pub fn connect_timeout(mut self, duration: Duration) -> Self {
        self.config.connect_timeout = Some(duration);
        self
    }

    /// Set the per-request response timeout
    ///
    /// Default: none (unlimited)
    pub fn response_timeout(mut self, duration: Duration) -> Self {
        self.config.response_timeout = Some(duration);
        self
    }

    /// Set the sentinel service name, bypassing master auto-discovery
    ///
    /// Required when the sentinel group supervises more than one master;
    /// auto-discovery fails with `AmbiguousTopology` in that case.
    pub fn service_name(mut self, name: impl Into<String>) -> Self {
        self.config.service_name = Some(name.into());
        self
    }

    /// Switch the address to TLS
    ///
    /// `insecure` skips certificate verification; useful against self-signed
    /// development servers, never in production.
    pub fn tls(mut self, insecure: bool) -> Self {
        self.config.addr = match self.config.addr {
            ServerAddr::Tcp { host, port } | ServerAddr::TcpTls { host, port, .. } => {
                ServerAddr::TcpTls {
                    host,
                    port,
                    insecure,
                }
            }
            unix => unix,
        };
        self
    }

    /// Build the configuration
    pub fn build(self) -> ConnectionConfig {
        self.config
    }
}

/// Active backend behind a bootstrapped connection
enum Backend {
    /// Direct connection to a standalone server
    Standalone(MultiplexedConnection),

    /// Failover-aware handle: each request resolves the current primary of
    /// `service` through the sentinel
    Sentinel {
        client: Box<SentinelClient>,
        service: String,
    },
}

/// Bootstrapped connection handle
///
/// Opened against a plain instance or a sentinel supervisor; in the latter
/// case the handle is rebound to the supervised primary's logical name during
/// `open`. Exclusively owned by the caller for its lifetime.
pub struct Connection {
    backend: Backend,
    topology: Topology,
}

impl Connection {
    /// Open a connection and resolve the server topology.
    ///
    /// Opens a direct connection, issues a server-introspection request, and
    /// inspects the reported operating mode. A standalone server's connection
    /// is returned unchanged. A sentinel supervisor triggers master discovery
    /// (unless `service_name` is configured) and the direct connection is
    /// superseded by a failover-aware handle bound to the primary's logical
    /// name; the probe is dropped, which closes its socket.
    pub async fn open(config: &ConnectionConfig) -> Result<Self> {
        async {
            let started = std::time::Instant::now();

            let client = redis::Client::open(config.to_redis_info())?;
            let mut probe = match (config.response_timeout, config.connect_timeout) {
                (None, None) => client.get_multiplexed_async_connection().await?,
                (response, connect) => {
                    client
                        .get_multiplexed_async_connection_with_timeouts(
                            response.unwrap_or(Duration::MAX),
                            connect.unwrap_or(Duration::MAX),
                        )
                        .await?
                }
            };

            let mut info_cmd = redis::cmd(commands::server::INFO);
            info_cmd.arg(commands::server::SECTION_SERVER);
            let reply: Value = info_cmd.query_async(&mut probe).await?;
            let topology = Topology::classify(&decode::text(reply)?);
            tracing::debug!(%topology, "server topology classified");

            let backend = match topology {
                Topology::Standalone => Backend::Standalone(probe),
                Topology::Sentinel => {
                    let service = match &config.service_name {
                        Some(name) => {
                            tracing::debug!(service = %name, "using configured service name");
                            name.clone()
                        }
                        None => {
                            let mut masters_cmd = redis::cmd(commands::sentinel::SENTINEL);
                            masters_cmd.arg(commands::sentinel::MASTERS);
                            let reply: Value = masters_cmd.query_async(&mut probe).await?;
                            let names = decode::master_names(reply)?;
                            let name = match names.as_slice() {
                                [single] => single.clone(),
                                _ => {
                                    return Err(Error::AmbiguousTopology { found: names.len() })
                                }
                            };
                            crate::metrics::counters::primary_discovered();
                            tracing::debug!(primary = %name, "sentinel primary discovered");
                            name
                        }
                    };

                    // The probe is superseded by the failover-aware handle;
                    // dropping the only clone closes its socket.
                    drop(probe);

                    let node_info = SentinelNodeConnectionInfo {
                        tls_mode: config.addr.tls_mode(),
                        redis_connection_info: Some(config.to_redis_connection_info()),
                    };
                    let sentinel = SentinelClient::build(
                        vec![config.to_redis_info()],
                        service.clone(),
                        Some(node_info),
                        SentinelServerType::Master,
                    )?;
                    Backend::Sentinel {
                        client: Box::new(sentinel),
                        service,
                    }
                }
            };

            let mode = match topology {
                Topology::Standalone => crate::metrics::labels::MODE_STANDALONE,
                Topology::Sentinel => crate::metrics::labels::MODE_SENTINEL,
            };
            crate::metrics::counters::connection_opened(mode);
            crate::metrics::histograms::bootstrap_duration(
                mode,
                started.elapsed().as_millis() as u64,
            );
            tracing::info!(%topology, "connection established");

            Ok(Self { backend, topology })
        }
        .instrument(tracing::info_span!("open", addr = %config.addr))
        .await
    }

    /// Topology resolved during bootstrap
    pub fn topology(&self) -> Topology {
        self.topology
    }

    /// Logical name of the sentinel-supervised primary, if any
    pub fn primary_name(&self) -> Option<&str> {
        match &self.backend {
            Backend::Standalone(_) => None,
            Backend::Sentinel { service, .. } => Some(service),
        }
    }

    /// Issue one request/response exchange through the active backend.
    ///
    /// The sentinel backend resolves the current primary per request; that is
    /// what makes the handle failover-aware without any retry policy here.
    pub(crate) async fn command(&mut self, label: &'static str, cmd: &redis::Cmd) -> Result<Value> {
        let started = std::time::Instant::now();
        let result = self.execute(cmd).await;

        let status = if result.is_ok() {
            crate::metrics::labels::STATUS_OK
        } else {
            crate::metrics::labels::STATUS_ERROR
        };
        crate::metrics::counters::command_completed(label, status);
        crate::metrics::histograms::command_duration(label, started.elapsed().as_millis() as u64);

        result
    }

    async fn execute(&mut self, cmd: &redis::Cmd) -> Result<Value> {
        match &mut self.backend {
            Backend::Standalone(conn) => {
                let value: Value = cmd.query_async(conn).await?;
                Ok(value)
            }
            Backend::Sentinel { client, .. } => {
                let mut conn = client.get_async_connection().await?;
                let value: Value = cmd.query_async(&mut conn).await?;
                Ok(value)
            }
        }
    }
}
