//! Graph selection

use super::graph_client::GraphClient;

/// A graph name bound to an open client
///
/// Selecting a graph performs no I/O: the selector only pairs a name with a
/// borrowed reference to the client it came from, and has no lifecycle of its
/// own. Query construction and result decoding are layered on top of this
/// binding and are not part of the connection bootstrap.
#[derive(Clone)]
pub struct Graph<'a> {
    client: &'a GraphClient,
    name: String,
}

impl<'a> Graph<'a> {
    pub(crate) fn new(client: &'a GraphClient, name: String) -> Self {
        Self { client, name }
    }

    /// Name of the selected graph
    pub fn name(&self) -> &str {
        &self.name
    }

    /// The client this selector was created from
    pub fn client(&self) -> &'a GraphClient {
        self.client
    }
}
