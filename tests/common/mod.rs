#![allow(dead_code)]

use ecopulse_rs::{EpClient, LatencyProfile};
use httpmock::{Method::GET, Mock, MockServer};
use std::{fs, path::Path};
use url::Url;

pub const API_KEY: &str = "test-key";
pub const SEED: u64 = 20_240_601;

pub fn setup_server() -> MockServer {
    MockServer::start()
}

pub fn fixture(endpoint: &str, key: &str, ext: &str) -> String {
    let dir = Path::new(env!("CARGO_MANIFEST_DIR")).join("tests/fixtures");
    let filename = format!("{}_{}.{}", endpoint, key.to_lowercase(), ext);
    let path = dir.join(&filename);
    fs::read_to_string(&path)
        .unwrap_or_else(|e| panic!("failed to read fixture {}: {}", path.display(), e))
}

pub fn api_base(server: &MockServer) -> Url {
    Url::parse(&format!("{}/api/v3/", server.base_url())).unwrap()
}

/// Synthetic-mode client with no artificial latency.
pub fn synthetic_client() -> EpClient {
    EpClient::builder()
        .seed(SEED)
        .latency(LatencyProfile::none())
        .build()
        .unwrap()
}

/// Live-mode client pointed at the mock server.
pub fn live_client(server: &MockServer) -> EpClient {
    EpClient::builder()
        .api_key(API_KEY)
        .base_url(api_base(server))
        .seed(SEED)
        .latency(LatencyProfile::none())
        .build()
        .unwrap()
}

/// Live-mode client whose every request is refused at the transport level.
pub fn unreachable_client() -> EpClient {
    EpClient::builder()
        .api_key(API_KEY)
        .base_url(Url::parse("http://127.0.0.1:9/api/v3/").unwrap())
        .seed(SEED)
        .latency(LatencyProfile::none())
        .build()
        .unwrap()
}

/// Answers every GET with a 500, counting calls.
pub fn mock_everything_fails(server: &MockServer) -> Mock<'_> {
    server.mock(|when, then| {
        when.method(GET);
        then.status(500).body("upstream exploded");
    })
}

pub fn mock_json<'a>(server: &'a MockServer, path: &str, fixture_name: &str, key: &str) -> Mock<'a> {
    let body = fixture(fixture_name, key, "json");
    server.mock(|when, then| {
        when.method(GET)
            .path(format!("/api/v3/{path}"))
            .query_param("apikey", API_KEY);
        then.status(200)
            .header("content-type", "application/json")
            .body(body);
    })
}
