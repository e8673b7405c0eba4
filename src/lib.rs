//! # librest - Embedded REST client
//!
//! A lightweight HTTP/1.1 client that lets any IoT device talk to RESTful
//! services over a caller-supplied byte transport. The library is designed
//! for embedded systems and supports `no_std` environments.
//!
//! ## Features
//!
//! - HTTP/1.1 request serialization (GET, POST, PUT, DELETE)
//! - Byte-by-byte response scanning with fixed memory usage
//! - Custom request headers with bounded capacity
//! - Plain and TLS-secured transports behind one trait
//! - Certificate fingerprint pinning for secure connections
//! - Optional idle deadline for transports that never close
//!
//! ## Usage
//!
//! Add this to your `Cargo.toml`:
//!
//! ```toml
//! [dependencies]
//! librest = "0.1.0"
//! ```
//!
//! ### Basic GET request
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
//! let mut client = Client::new(MockTransport, "example.com");
//! client.set_header("X-Device-Id: sensor-01").unwrap();
//!
//! let status = client.get("/api/status");
//! ```
//!
//! ### Capturing the response body
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
//! let mut client = Client::new(MockTransport, "example.com");
//!
//! let mut body: heapless::Vec<u8, 1024> = heapless::Vec::new();
//! let status = client.get_response("/api/config", &mut body);
//! ```
//!
//! A status code of `0` means the connection failed, the pinned certificate
//! check failed, or the peer closed before sending a status line. Use
//! [`http::Client::try_request`] when the caller needs to tell these apart.
//!
//! ## Platform Support
//!
//! This library is designed to work on:
//! - Embedded microcontrollers (ARM Cortex-M, RISC-V, etc.)
//! - Linux-based IoT devices (Raspberry Pi, etc.)
//! - Any platform supporting Rust's `core` library
//!
//! ## Optional Features
//!
//! - `std`: Enable standard library support and the `TcpStream`-backed
//!   transport (default: disabled)
//! - `defmt`: Enable defmt logging support for embedded debugging

#![cfg_attr(not(feature = "std"), no_std)]
#![deny(missing_docs)]
#![warn(missing_debug_implementations)]

/// Transport abstraction over which HTTP bytes flow.
///
/// Defines the [`Transport`](transport::Transport) capability trait plus its
/// TLS-capable extension, and ships a `std::net::TcpStream` adapter behind
/// the `std` feature.
pub mod transport;

/// Common error type for client operations.
pub mod error;

/// HTTP/1.1 client implementation.
///
/// Contains the request serializer, the response-scanning state machine,
/// and the [`Client`](http::Client) that ties them to a transport.
pub mod http;
