#![cfg(feature = "std")]

use dotenvy::dotenv;
use librest::http::client::Client;
use librest::transport::tcp::TcpTransport;
use std::env;

#[test]
#[ignore = "requires network access"]
fn live_http_get() {
    dotenv().ok();
    let host = env::var("TEST_HTTP_HOST").unwrap_or("httpbin.org".to_string());
    let mut client = Client::new(TcpTransport::new(), &host);

    let mut body: heapless::Vec<u8, 4096> = heapless::Vec::new();
    let status = client.get_response("/get", &mut body);
    assert_eq!(status, 200);
    assert!(!body.is_empty());
}

#[test]
#[ignore = "requires network access"]
fn live_http_post() {
    dotenv().ok();
    let host = env::var("TEST_HTTP_HOST").unwrap_or("httpbin.org".to_string());
    let mut client = Client::new(TcpTransport::new(), &host);
    client.set_content_type("application/json");

    let status = client.post("/post", br#"{"hello":"world"}"#);
    assert_eq!(status, 200);
}
