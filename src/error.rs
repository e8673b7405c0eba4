//! Common error types for client operations.

/// A common error type for HTTP client operations.
///
/// This enum defines the failures a request can run into. It is designed to
/// be simple and portable for `no_std` environments. The integer-returning
/// operations on [`Client`](crate::http::Client) collapse every variant to
/// a status code of `0`; [`Client::try_request`](crate::http::Client::try_request)
/// surfaces the discriminated form.
#[derive(Debug, PartialEq, Eq, Clone, Copy)]
pub enum Error {
    /// The transport failed to connect to the remote host.
    ConnectFailed,
    /// The secure transport connected but the pinned certificate
    /// fingerprint did not match (or no fingerprint was configured).
    FingerprintMismatch,
    /// The transport closed before a 3-digit status code was parsed.
    NoStatus,
    /// A transport write or flush failed while sending the request.
    WriteFailed,
    /// The idle-poll deadline expired while waiting for response bytes.
    Timeout,
    /// A header line exceeds the fixed per-line capacity.
    HeaderTooLong,
    /// The header list is full; the request must be completed (or the
    /// headers cleared) before more lines can be added.
    HeadersFull,
}

#[cfg(feature = "defmt")]
impl defmt::Format for Error {
    fn format(&self, f: defmt::Formatter) {
        match self {
            Error::ConnectFailed => defmt::write!(f, "ConnectFailed"),
            Error::FingerprintMismatch => defmt::write!(f, "FingerprintMismatch"),
            Error::NoStatus => defmt::write!(f, "NoStatus"),
            Error::WriteFailed => defmt::write!(f, "WriteFailed"),
            Error::Timeout => defmt::write!(f, "Timeout"),
            Error::HeaderTooLong => defmt::write!(f, "HeaderTooLong"),
            Error::HeadersFull => defmt::write!(f, "HeadersFull"),
        }
    }
}
