//! The REST client coordinator.
//!
//! Ties the request serializer and the response scanner to a pair of
//! transports (plain and TLS-secured) and exposes the REST verb surface.
//! Exactly one request is in flight at a time; the client owns its
//! transports and header list exclusively, so no locking is involved.

use heapless::Vec;

use crate::error::Error;
use crate::http::request::{
    DEFAULT_CONTENT_TYPE, HeaderLine, HeaderList, Method, RequestSpec, write_request,
};
use crate::http::response::scan;
use crate::transport::{NoTls, SecureTransport, Transport};

/// A minimal HTTP/1.1 REST client for constrained devices.
///
/// The client holds both a plain and a secure transport;
/// [`set_secure_connection`](Client::set_secure_connection) selects which
/// one a request uses. Plain-only deployments construct via
/// [`Client::new`], which plugs the [`NoTls`] placeholder into the secure
/// slot.
///
/// Every request opens a fresh connection and sends `Connection: close`;
/// there is no connection reuse. Pending headers apply to the next request
/// only and are cleared when it completes, successfully or not.
pub struct Client<'a, P: Transport, S: SecureTransport = NoTls> {
    plain: P,
    secure: S,
    host: &'a str,
    port: u16,
    headers: HeaderList,
    content_type: &'a str,
    use_secure: bool,
    fingerprint: &'a str,
    idle_limit: Option<u32>,
}

impl<'a, P: Transport> Client<'a, P, NoTls> {
    /// A plain-transport client targeting `host` on port 80.
    pub fn new(transport: P, host: &'a str) -> Self {
        Self::new_with_port(transport, host, 80)
    }

    /// A plain-transport client targeting `host` on an explicit port.
    pub fn new_with_port(transport: P, host: &'a str, port: u16) -> Self {
        Self::with_tls(transport, NoTls, host, port)
    }
}

impl<'a, P: Transport, S: SecureTransport> Client<'a, P, S> {
    /// A client carrying both transport variants.
    ///
    /// Requests use `plain` until
    /// [`set_secure_connection`](Client::set_secure_connection) switches
    /// them over to `secure`.
    pub fn with_tls(plain: P, secure: S, host: &'a str, port: u16) -> Self {
        Self {
            plain,
            secure,
            host,
            port,
            headers: Vec::new(),
            content_type: DEFAULT_CONTENT_TYPE,
            use_secure: false,
            fingerprint: "",
            idle_limit: None,
        }
    }

    /// Append one raw header line (e.g. `X-Api-Key: secret`) to the next
    /// request.
    ///
    /// The list is bounded: lines longer than
    /// [`MAX_HEADER_LINE_LEN`](crate::http::request::MAX_HEADER_LINE_LEN)
    /// fail with [`Error::HeaderTooLong`], and appending beyond
    /// [`MAX_HEADERS`](crate::http::request::MAX_HEADERS) fails with
    /// [`Error::HeadersFull`].
    pub fn set_header(&mut self, line: &str) -> Result<(), Error> {
        let line = HeaderLine::try_from(line).map_err(|_| Error::HeaderTooLong)?;
        self.headers.push(line).map_err(|_| Error::HeadersFull)
    }

    /// Set the `Content-Type` sent with request bodies.
    ///
    /// Defaults to `application/x-www-form-urlencoded`.
    pub fn set_content_type(&mut self, value: &'a str) {
        self.content_type = value;
    }

    /// Route subsequent requests over the secure transport.
    pub fn set_secure_connection(&mut self, secure: bool) {
        self.use_secure = secure;
    }

    /// Set the pinned certificate fingerprint checked on secure connects.
    ///
    /// Secure requests without a configured fingerprint fail with
    /// [`Error::FingerprintMismatch`] before anything is sent; an empty pin
    /// is treated as a misconfiguration, not as "skip the check".
    pub fn set_fingerprint(&mut self, fingerprint: &'a str) {
        self.fingerprint = fingerprint;
    }

    /// Bound the number of consecutive empty polls tolerated while waiting
    /// for response bytes.
    ///
    /// `None` (the default) drains until the peer closes, which loops
    /// forever on a transport that stays connected but never delivers.
    pub fn set_idle_limit(&mut self, limit: Option<u32>) {
        self.idle_limit = limit;
    }

    /// The plain transport.
    pub fn transport(&self) -> &P {
        &self.plain
    }

    /// The secure transport.
    pub fn secure_transport(&self) -> &S {
        &self.secure
    }

    /// GET `path`, discarding any response body.
    pub fn get(&mut self, path: &str) -> u16 {
        self.request::<0>(Method::Get, path, None, None)
    }

    /// GET `path`, appending the response body to `response`.
    pub fn get_response<const N: usize>(&mut self, path: &str, response: &mut Vec<u8, N>) -> u16 {
        self.request(Method::Get, path, None, Some(response))
    }

    /// POST `body` to `path`, discarding any response body.
    pub fn post(&mut self, path: &str, body: &[u8]) -> u16 {
        self.request::<0>(Method::Post, path, Some(body), None)
    }

    /// POST `body` to `path`, appending the response body to `response`.
    pub fn post_response<const N: usize>(
        &mut self,
        path: &str,
        body: &[u8],
        response: &mut Vec<u8, N>,
    ) -> u16 {
        self.request(Method::Post, path, Some(body), Some(response))
    }

    /// PUT `body` to `path`, discarding any response body.
    pub fn put(&mut self, path: &str, body: &[u8]) -> u16 {
        self.request::<0>(Method::Put, path, Some(body), None)
    }

    /// PUT `body` to `path`, appending the response body to `response`.
    pub fn put_response<const N: usize>(
        &mut self,
        path: &str,
        body: &[u8],
        response: &mut Vec<u8, N>,
    ) -> u16 {
        self.request(Method::Put, path, Some(body), Some(response))
    }

    /// DELETE `path`, discarding any response body.
    pub fn del(&mut self, path: &str) -> u16 {
        self.request::<0>(Method::Delete, path, None, None)
    }

    /// DELETE `path`, appending the response body to `response`.
    pub fn del_response<const N: usize>(&mut self, path: &str, response: &mut Vec<u8, N>) -> u16 {
        self.request(Method::Delete, path, None, Some(response))
    }

    /// DELETE `path` with a request body, discarding any response body.
    pub fn del_body(&mut self, path: &str, body: &[u8]) -> u16 {
        self.request::<0>(Method::Delete, path, Some(body), None)
    }

    /// DELETE `path` with a request body, appending the response body to
    /// `response`.
    pub fn del_body_response<const N: usize>(
        &mut self,
        path: &str,
        body: &[u8],
        response: &mut Vec<u8, N>,
    ) -> u16 {
        self.request(Method::Delete, path, Some(body), Some(response))
    }

    /// The generic request entry point.
    ///
    /// Returns the response status code, or `0` when the connection failed,
    /// the pinned certificate check failed, or the peer closed before a
    /// status line was parsed.
    pub fn request<const N: usize>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
        response: Option<&mut Vec<u8, N>>,
    ) -> u16 {
        self.try_request(method, path, body, response).unwrap_or(0)
    }

    /// Like [`request`](Client::request) but with a discriminated error.
    ///
    /// Lifecycle, all steps ordered: select the transport variant, connect,
    /// verify the pinned fingerprint when secure, write the request, drain
    /// the reply, clear the pending headers, close the transport. Headers
    /// are cleared even when connect or the fingerprint check aborts early.
    pub fn try_request<const N: usize>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
        response: Option<&mut Vec<u8, N>>,
    ) -> Result<u16, Error> {
        let outcome = self.run(method, path, body, response);
        self.headers.clear();
        outcome
    }

    fn run<const N: usize>(
        &mut self,
        method: Method,
        path: &str,
        body: Option<&[u8]>,
        response: Option<&mut Vec<u8, N>>,
    ) -> Result<u16, Error> {
        let spec = RequestSpec {
            method,
            path,
            host: self.host,
            headers: &self.headers,
            body,
            content_type: self.content_type,
        };

        if self.use_secure {
            self.secure
                .connect(self.host, self.port)
                .map_err(|_| Error::ConnectFailed)?;
            if self.fingerprint.is_empty()
                || !self.secure.verify_fingerprint(self.fingerprint, self.host)
            {
                self.secure.close();
                return Err(Error::FingerprintMismatch);
            }
            let outcome = exchange(&mut self.secure, &spec, response, self.idle_limit);
            self.secure.close();
            outcome
        } else {
            self.plain
                .connect(self.host, self.port)
                .map_err(|_| Error::ConnectFailed)?;
            let outcome = exchange(&mut self.plain, &spec, response, self.idle_limit);
            self.plain.close();
            outcome
        }
    }
}

/// Write the request and drain the reply on an already-connected transport.
fn exchange<T: Transport, const N: usize>(
    transport: &mut T,
    spec: &RequestSpec<'_>,
    response: Option<&mut Vec<u8, N>>,
    idle_limit: Option<u32>,
) -> Result<u16, Error> {
    write_request(transport, spec)?;
    let code = scan(transport, response, idle_limit)?;
    if code == 0 {
        return Err(Error::NoStatus);
    }
    Ok(code)
}
