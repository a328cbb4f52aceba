//! Integration tests for graphwire
//!
//! These tests require a running graph database server on localhost:6379.

use graphwire::{GraphClient, Topology};

fn init_tracing() {
    let _ = tracing_subscriber::fmt()
        .with_env_filter(tracing_subscriber::EnvFilter::from_default_env())
        .try_init();
}

#[tokio::test]
#[ignore] // Requires a graph database server running
async fn test_connect_and_list_graphs() {
    init_tracing();

    let mut client = GraphClient::connect("redis://localhost:6379")
        .await
        .expect("connect");
    assert_eq!(client.topology(), Topology::Standalone);

    // A fresh server has no graphs; the listing must still succeed.
    let graphs = client.list_graphs().await.expect("list graphs");
    println!("graphs: {:?}", graphs);
}

#[tokio::test]
#[ignore] // Requires a graph database server running
async fn test_config_round_trip() {
    init_tracing();

    let mut client = GraphClient::connect("redis://localhost:6379")
        .await
        .expect("connect");

    let original = client.config_get("RESULTSET_SIZE").await.expect("get");

    client
        .config_set("RESULTSET_SIZE", "500")
        .await
        .expect("set");
    assert_eq!(
        client.config_get("RESULTSET_SIZE").await.expect("get"),
        "500"
    );

    client
        .config_set("RESULTSET_SIZE", &original)
        .await
        .expect("restore");
}

#[tokio::test]
#[ignore] // Requires a graph database server running
async fn test_select_graph_is_pure_construction() {
    init_tracing();

    let client = GraphClient::connect("redis://localhost:6379")
        .await
        .expect("connect");

    let first = client.select_graph("social");
    let second = client.select_graph("social");

    assert_eq!(first.name(), "social");
    assert_eq!(second.name(), "social");
    assert!(std::ptr::eq(first.client(), second.client()));
}
