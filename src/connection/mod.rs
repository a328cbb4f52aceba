//! Connection management
//!
//! This module handles:
//! * Connection configuration (address, credentials, timeouts)
//! * Bootstrap: topology probe and sentinel rebinding
//! * Request routing through the active backend

mod conn;
mod topology;

pub use conn::{Connection, ConnectionConfig, ConnectionConfigBuilder, ServerAddr};
pub use topology::Topology;
