//! # graphwire
//!
//! Async connection bootstrap for graph databases speaking the Redis wire
//! protocol.
//!
//! The crate opens a connection, detects whether the target is a plain
//! instance or a sentinel-managed failover group, rebinds to the supervised
//! primary when needed, and forwards a small set of administrative commands
//! (list graphs, get/set configuration). The request/response transport is
//! delegated to the [`redis`] crate; this crate adds topology resolution,
//! typed reply decoding, and a graph-selection surface on top.
//!
//! ## Quick start
//!
//! ```no_run
//! # async fn example() -> graphwire::Result<()> {
//! use graphwire::GraphClient;
//!
//! let mut client = GraphClient::connect("redis://localhost:6379").await?;
//!
//! for name in client.list_graphs().await? {
//!     println!("graph: {}", name);
//! }
//!
//! let graph = client.select_graph("social");
//! assert_eq!(graph.name(), "social");
//! # Ok(())
//! # }
//! ```
//!
//! ## Sentinel topologies
//!
//! When the probed server reports sentinel mode, the client discovers the
//! supervised master group and returns a failover-aware handle bound to the
//! primary's logical name. A sentinel supervising several groups cannot be
//! auto-resolved; pass the service name explicitly
//! (`ConnectionConfig::builder(..).service_name(..)` or `?service=` in the
//! URL).

pub mod client;
pub mod connection;
mod error;
pub mod metrics;
pub mod protocol;

pub use client::{ConnectionInfo, Graph, GraphClient, TransportType};
pub use connection::{Connection, ConnectionConfig, ConnectionConfigBuilder, ServerAddr, Topology};
pub use error::{Error, Result};
