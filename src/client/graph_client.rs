//! GraphClient implementation

use super::connection_string::ConnectionInfo;
use super::graph::Graph;
use crate::connection::{Connection, ConnectionConfig, Topology};
use crate::protocol::{commands, decode};
use crate::Result;

/// Graph database client
///
/// A thin binding over one bootstrapped connection: it selects graphs and
/// forwards administrative commands. Resilience policy (retries, pooling)
/// belongs to the caller or the transport configuration, not here.
pub struct GraphClient {
    conn: Connection,
}

impl GraphClient {
    /// Connect using a connection URL
    ///
    /// The URL is parsed before any network call; malformed input fails with
    /// `Error::Config`. See `ConnectionInfo` for the accepted formats.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> graphwire::Result<()> {
    /// use graphwire::GraphClient;
    ///
    /// // TCP connection
    /// let client = GraphClient::connect("redis://localhost:6379").await?;
    ///
    /// // Against a sentinel supervising several groups, name the service
    /// let client = GraphClient::connect("redis://sentinel:26379?service=graph-primary").await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn connect(url: &str) -> Result<Self> {
        let info = ConnectionInfo::parse(url)?;
        Self::open(info.to_config()?).await
    }

    /// Connect using explicit connection options
    ///
    /// Opens a direct connection and probes the server's operating mode. A
    /// standalone server keeps the direct connection; a sentinel supervisor
    /// is asked for its single master group and the handle is rebound to that
    /// primary's logical name (failover-aware). A sentinel reporting zero or
    /// several masters fails with `Error::AmbiguousTopology` unless
    /// `service_name` is configured.
    ///
    /// # Examples
    ///
    /// ```no_run
    /// # async fn example() -> graphwire::Result<()> {
    /// use graphwire::{ConnectionConfig, GraphClient};
    /// use std::time::Duration;
    ///
    /// let config = ConnectionConfig::builder("localhost", 6379)
    ///     .password("secret")
    ///     .connect_timeout(Duration::from_secs(10))
    ///     .build();
    ///
    /// let client = GraphClient::open(config).await?;
    /// # Ok(())
    /// # }
    /// ```
    pub async fn open(config: ConnectionConfig) -> Result<Self> {
        let conn = Connection::open(&config).await?;
        Ok(Self { conn })
    }

    /// Topology resolved during bootstrap
    pub fn topology(&self) -> Topology {
        self.conn.topology()
    }

    /// Logical name of the sentinel-supervised primary this handle is bound
    /// to; `None` for a standalone server
    pub fn primary_name(&self) -> Option<&str> {
        self.conn.primary_name()
    }

    /// Select a graph by name
    ///
    /// Pure construction, no I/O: every call returns a selector referencing
    /// this client and the given name.
    pub fn select_graph(&self, name: impl Into<String>) -> Graph<'_> {
        Graph::new(self, name.into())
    }

    /// List all graph names, in server order
    ///
    /// An empty database yields an empty vector, not an error.
    pub async fn list_graphs(&mut self) -> Result<Vec<String>> {
        let cmd = redis::cmd(commands::graph::LIST);
        let reply = self.conn.command("graph.list", &cmd).await?;
        decode::string_list(reply)
    }

    /// Retrieve a database-level configuration value
    ///
    /// The key is passed through untouched; its validation is the server's
    /// responsibility.
    pub async fn config_get(&mut self, key: &str) -> Result<String> {
        let mut cmd = redis::cmd(commands::graph::CONFIG);
        cmd.arg(commands::graph::GET).arg(key);
        let reply = self.conn.command("graph.config.get", &cmd).await?;
        decode::config_value(reply)
    }

    /// Update a database-level configuration value
    ///
    /// Key and value are both transmitted; a server rejection surfaces as
    /// `Error::Connection` carrying the server's message.
    pub async fn config_set(&mut self, key: &str, value: &str) -> Result<()> {
        let mut cmd = redis::cmd(commands::graph::CONFIG);
        cmd.arg(commands::graph::SET).arg(key).arg(value);
        let reply = self.conn.command("graph.config.set", &cmd).await?;
        decode::ok(reply)
    }
}
