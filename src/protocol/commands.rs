//! Protocol command words
//!
//! The outbound request shapes are fixed protocol commands; nothing here is
//! negotiated or versioned.

/// Server introspection commands
pub mod server {
    /// Server information request
    pub const INFO: &str = "INFO";

    /// INFO section carrying the operating mode
    pub const SECTION_SERVER: &str = "server";

    /// `redis_mode` value reported by a sentinel
    pub const MODE_SENTINEL: &str = "sentinel";
}

/// Sentinel supervision commands
pub mod sentinel {
    /// Sentinel command family
    pub const SENTINEL: &str = "SENTINEL";

    /// List the supervised master groups
    pub const MASTERS: &str = "MASTERS";

    /// Field carrying a master's logical name in a MASTERS entry
    pub const FIELD_NAME: &str = "name";
}

/// Graph administration commands
pub mod graph {
    /// List all graph names
    pub const LIST: &str = "GRAPH.LIST";

    /// Configuration command family
    pub const CONFIG: &str = "GRAPH.CONFIG";

    /// CONFIG subcommand: read one parameter
    pub const GET: &str = "GET";

    /// CONFIG subcommand: update one parameter
    pub const SET: &str = "SET";
}
