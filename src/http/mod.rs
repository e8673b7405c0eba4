//! HTTP/1.1 client for embedded systems.
//!
//! This module provides a lightweight HTTP client designed specifically for
//! embedded systems and `no_std` environments. It focuses on simplicity,
//! predictable memory usage, and compatibility with resource-constrained
//! devices.
//!
//! # Features
//!
//! - Minimal HTTP/1.1 request serialization
//! - Byte-by-byte response scanning with a tiny state machine
//! - Custom headers with bounded capacity
//! - `Connection: close` semantics (one connection per request)
//! - Works with any [`Transport`](crate::transport::Transport)
//!
//! Deliberately out of scope: chunked transfer-encoding, redirects,
//! keep-alive, compression and header folding. A device that needs those
//! belongs on a full HTTP stack, not on this one.
//!
//! # Usage
//!
//! The main entry point is the [`Client`], which owns its transport for the
//! duration of each request and exposes the familiar REST verbs.
//!
//! ```rust,no_run
//! use librest::http::Client;
//! # struct MockTransport;
//! # impl librest::transport::Transport for MockTransport {
//! #     type Error = ();
//! #     fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> { Ok(()) }
//! #     fn is_connected(&mut self) -> bool { false }
//! #     fn has_data(&mut self) -> bool { false }
//! #     fn read_byte(&mut self) -> Option<u8> { None }
//! #     fn write_all(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> { Ok(()) }
//! #     fn flush(&mut self) -> Result<(), Self::Error> { Ok(()) }
//! #     fn close(&mut self) {}
//! # }
//!
//! let mut client = Client::new_with_port(MockTransport, "example.com", 8080);
//! let status = client.post("/api/telemetry", b"t=23.5");
//! ```

/// Request serialization: methods, header lines and the wire writer.
pub mod request;

/// Response scanning: the per-byte state machine and the drain loop.
pub mod response;

/// The request coordinator tying builder and scanner to a transport.
pub mod client;

pub use client::Client;
pub use request::{HeaderLine, Method, RequestSpec};
pub use response::ScanState;
