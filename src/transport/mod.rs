//! A byte-transport abstraction for embedded HTTP clients.
//!
//! The client never touches sockets directly; it consumes anything that
//! implements [`Transport`]. A plain TCP socket, a TLS session, or a modem
//! driver speaking AT commands all fit behind the same trait, so the request
//! serializer and the response scanner are written exactly once.
//!
//! TLS-capable transports additionally implement [`SecureTransport`], which
//! exposes the post-connect certificate-fingerprint check the client runs
//! when pinning is configured.

#![allow(missing_docs)]

#[cfg(feature = "std")]
pub mod tcp;

/// Re-exports of common traits
pub mod prelude {
    pub use super::{SecureTransport, Transport};
}

/// A synchronous byte transport owning one socket-like connection.
///
/// `read_byte` must only return `Some` when `has_data` reported bytes
/// pending; `is_connected` must eventually report `false` once the peer
/// has closed and all buffered bytes were consumed, otherwise the response
/// scanner drains forever (see [`Client::set_idle_limit`]).
///
/// [`Client::set_idle_limit`]: crate::http::Client::set_idle_limit
pub trait Transport {
    /// Associated error type
    type Error: core::fmt::Debug;
    /// Open a connection to `host:port`.
    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error>;
    /// Whether the connection is still open or has undrained bytes.
    fn is_connected(&mut self) -> bool;
    /// Whether at least one byte can be read without blocking.
    fn has_data(&mut self) -> bool;
    /// Pull one byte off the connection, `None` if nothing is buffered.
    fn read_byte(&mut self) -> Option<u8>;
    /// Write all of `bytes` to the connection.
    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error>;
    /// Push any buffered output onto the wire.
    fn flush(&mut self) -> Result<(), Self::Error>;
    /// Close the connection. Closing an unopened transport is a no-op.
    fn close(&mut self);
}

/// A [`Transport`] running over TLS.
pub trait SecureTransport: Transport {
    /// Check the peer certificate against a pinned fingerprint.
    ///
    /// Invoked once, immediately after `connect` succeeds and before any
    /// request byte is written. Returning `false` aborts the request.
    fn verify_fingerprint(&mut self, fingerprint: &str, host: &str) -> bool;
}

/// A stand-in secure transport for clients that only ever use plain
/// connections.
///
/// Every operation fails or does nothing, so a client built with
/// [`Client::new`](crate::http::Client::new) that is later switched to
/// secure mode reports a connection failure instead of sending anything.
#[derive(Debug, Default)]
pub struct NoTls;

impl Transport for NoTls {
    type Error = ();

    fn connect(&mut self, _host: &str, _port: u16) -> Result<(), Self::Error> {
        Err(())
    }

    fn is_connected(&mut self) -> bool {
        false
    }

    fn has_data(&mut self) -> bool {
        false
    }

    fn read_byte(&mut self) -> Option<u8> {
        None
    }

    fn write_all(&mut self, _bytes: &[u8]) -> Result<(), Self::Error> {
        Err(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        Err(())
    }

    fn close(&mut self) {}
}

impl SecureTransport for NoTls {
    fn verify_fingerprint(&mut self, _fingerprint: &str, _host: &str) -> bool {
        false
    }
}
