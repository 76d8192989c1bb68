#![allow(clippy::unwrap_used, clippy::expect_used)]
//! Integration tests for the catalog listing routes and health.

use std::{net::SocketAddr, sync::Arc};

use tokio::net::TcpListener;

use {
    leetscope_catalog::Catalog,
    leetscope_config::UpstreamConfig,
    leetscope_gateway::{AppState, build_app},
    leetscope_relay::RelayClient,
};

async fn start_gateway() -> SocketAddr {
    // The catalog routes never touch the relay; any upstream URL will do.
    let config = UpstreamConfig::default();
    let state = AppState {
        catalog: Arc::new(Catalog::builtin()),
        relay: Arc::new(RelayClient::new(&config).unwrap()),
    };
    let app = build_app(state);

    let listener = TcpListener::bind("127.0.0.1:0").await.unwrap();
    let addr = listener.local_addr().unwrap();
    tokio::spawn(async move {
        axum::serve(listener, app).await.unwrap();
    });
    addr
}

#[tokio::test]
async fn endpoints_lists_the_full_catalog() {
    let addr = start_gateway().await;
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/api/endpoints"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();

    let endpoints = body["endpoints"].as_array().unwrap();
    assert_eq!(endpoints.len(), 15);
    assert_eq!(endpoints[0]["id"], "userProfile");
    assert_eq!(endpoints[0]["operationName"], "userPublicProfile");
    assert!(body["categories"].as_array().unwrap().contains(&"Profile".into()));
}

#[tokio::test]
async fn endpoint_detail_exposes_the_document() {
    let addr = start_gateway().await;
    let body: serde_json::Value =
        reqwest::get(format!("http://{addr}/api/endpoints/recentSubmissions"))
            .await
            .unwrap()
            .json()
            .await
            .unwrap();

    assert_eq!(body["id"], "recentSubmissions");
    assert_eq!(body["requiresAuth"], false);
    assert_eq!(body["variableSpec"]["limit"], "Int!");
    assert!(
        body["query"]
            .as_str()
            .unwrap()
            .contains("recentAcSubmissionList")
    );
}

#[tokio::test]
async fn unknown_endpoint_is_404() {
    let addr = start_gateway().await;
    let resp = reqwest::get(format!("http://{addr}/api/endpoints/nope"))
        .await
        .unwrap();
    assert_eq!(resp.status(), 404);
    let body: serde_json::Value = resp.json().await.unwrap();
    assert_eq!(body["error"], "unknown endpoint: nope");
}

#[tokio::test]
async fn health_reports_catalog_size() {
    let addr = start_gateway().await;
    let body: serde_json::Value = reqwest::get(format!("http://{addr}/health"))
        .await
        .unwrap()
        .json()
        .await
        .unwrap();
    assert_eq!(body["ok"], true);
    assert_eq!(body["endpoints"], 15);
}
