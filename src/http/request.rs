//! HTTP/1.1 request serialization.
//!
//! [`write_request`] puts a request on the wire as a fixed sequence of small
//! writes, one per logical line. Nothing is buffered and re-sent, so the
//! byte order on the transport is exactly the order produced here. Existing
//! server deployments are byte-for-byte sensitive to this layout (including
//! the doubled CRLF after the body), so the sequence must not be reordered.

use core::fmt::Write as _;

use heapless::{String, Vec};

use crate::error::Error;
use crate::transport::Transport;

/// Maximum number of user header lines per request.
pub const MAX_HEADERS: usize = 10;

/// Maximum length of a single raw header line.
pub const MAX_HEADER_LINE_LEN: usize = 128;

/// Content type sent when the caller never set one.
pub const DEFAULT_CONTENT_TYPE: &str = "application/x-www-form-urlencoded";

/// One raw header line, e.g. `X-Api-Key: secret`.
pub type HeaderLine = String<MAX_HEADER_LINE_LEN>;

/// An ordered, bounded list of raw header lines.
pub type HeaderList = Vec<HeaderLine, MAX_HEADERS>;

/// HTTP request methods supported by the client.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Method {
    /// HTTP GET
    Get,
    /// HTTP POST
    Post,
    /// HTTP PUT
    Put,
    /// HTTP DELETE
    Delete,
}

impl Method {
    /// The verb token as it appears in the request line.
    pub fn as_str(&self) -> &'static str {
        match self {
            Method::Get => "GET",
            Method::Post => "POST",
            Method::Put => "PUT",
            Method::Delete => "DELETE",
        }
    }
}

/// Everything needed to serialize one request.
#[derive(Debug)]
pub struct RequestSpec<'a> {
    /// Request method.
    pub method: Method,
    /// Request path, sent verbatim.
    pub path: &'a str,
    /// Target host, emitted as the `Host` header.
    pub host: &'a str,
    /// Raw user header lines, written in insertion order.
    pub headers: &'a [HeaderLine],
    /// Optional request body.
    pub body: Option<&'a [u8]>,
    /// Value of the `Content-Type` header, only sent with a body.
    pub content_type: &'a str,
}

/// Serialize `spec` onto `transport`.
///
/// Wire layout, in order: request line, user headers, `Host`,
/// `Connection: close`, content metadata when a body is present, the blank
/// line ending the header block, then the body followed by two CRLFs. The
/// transport is flushed once after the last write so the request is on the
/// wire before the caller starts polling for the response.
pub fn write_request<T: Transport>(transport: &mut T, spec: &RequestSpec<'_>) -> Result<(), Error> {
    put(transport, spec.method.as_str().as_bytes())?;
    put(transport, b" ")?;
    put(transport, spec.path.as_bytes())?;
    put(transport, b" HTTP/1.1\r\n")?;

    for header in spec.headers {
        put(transport, header.as_bytes())?;
        put(transport, b"\r\n")?;
    }

    put(transport, b"Host: ")?;
    put(transport, spec.host.as_bytes())?;
    put(transport, b"\r\n")?;
    put(transport, b"Connection: close\r\n")?;

    if let Some(body) = spec.body {
        let mut content_length: String<40> = String::new();
        write!(content_length, "Content-Length: {}\r\n", body.len()).unwrap();
        put(transport, content_length.as_bytes())?;

        put(transport, b"Content-Type: ")?;
        put(transport, spec.content_type.as_bytes())?;
        put(transport, b"\r\n")?;
    }

    put(transport, b"\r\n")?;

    if let Some(body) = spec.body {
        put(transport, body)?;
        put(transport, b"\r\n")?;
        put(transport, b"\r\n")?;
    }

    transport.flush().map_err(|_| Error::WriteFailed)
}

fn put<T: Transport>(transport: &mut T, bytes: &[u8]) -> Result<(), Error> {
    transport.write_all(bytes).map_err(|_| Error::WriteFailed)
}
