//! Client facade
//!
//! This module handles:
//! * URL parsing into connection options
//! * The `GraphClient` entry points and administrative passthroughs
//! * Graph selection

mod connection_string;
mod graph;
mod graph_client;

pub use connection_string::{ConnectionInfo, TransportType};
pub use graph::Graph;
pub use graph_client::GraphClient;
