//! A [`Transport`] implementation over `std::net::TcpStream`.
//!
//! Intended for Linux-class IoT devices and for integration testing against
//! real servers. The stream runs in non-blocking mode so `has_data` and
//! `read_byte` map onto the transport's polling contract.

use std::io::{ErrorKind, Read, Write};
use std::net::{Shutdown, TcpStream};

use super::Transport;

/// A plain TCP transport backed by the standard library.
#[derive(Debug, Default)]
pub struct TcpTransport {
    stream: Option<TcpStream>,
    eof: bool,
}

impl TcpTransport {
    /// Create an unconnected transport.
    pub fn new() -> Self {
        Self {
            stream: None,
            eof: false,
        }
    }
}

impl Transport for TcpTransport {
    type Error = std::io::Error;

    fn connect(&mut self, host: &str, port: u16) -> Result<(), Self::Error> {
        let stream = TcpStream::connect((host, port))?;
        stream.set_nonblocking(true)?;
        self.stream = Some(stream);
        self.eof = false;
        Ok(())
    }

    fn is_connected(&mut self) -> bool {
        self.stream.is_some() && !self.eof
    }

    fn has_data(&mut self) -> bool {
        let Some(stream) = self.stream.as_mut() else {
            return false;
        };
        let mut probe = [0u8; 1];
        match stream.peek(&mut probe) {
            Ok(0) => {
                self.eof = true;
                false
            }
            Ok(_) => true,
            Err(e) if e.kind() == ErrorKind::WouldBlock => false,
            Err(_) => {
                self.eof = true;
                false
            }
        }
    }

    fn read_byte(&mut self) -> Option<u8> {
        let stream = self.stream.as_mut()?;
        let mut byte = [0u8; 1];
        match stream.read(&mut byte) {
            Ok(0) => {
                self.eof = true;
                None
            }
            Ok(_) => Some(byte[0]),
            Err(e) if e.kind() == ErrorKind::WouldBlock => None,
            Err(_) => {
                self.eof = true;
                None
            }
        }
    }

    fn write_all(&mut self, bytes: &[u8]) -> Result<(), Self::Error> {
        let stream = self
            .stream
            .as_mut()
            .ok_or_else(|| std::io::Error::from(ErrorKind::NotConnected))?;
        let mut remaining = bytes;
        while !remaining.is_empty() {
            match stream.write(remaining) {
                Ok(0) => return Err(ErrorKind::WriteZero.into()),
                Ok(n) => remaining = &remaining[n..],
                Err(e) if e.kind() == ErrorKind::WouldBlock => continue,
                Err(e) => return Err(e),
            }
        }
        Ok(())
    }

    fn flush(&mut self) -> Result<(), Self::Error> {
        match self.stream.as_mut() {
            Some(stream) => stream.flush(),
            None => Ok(()),
        }
    }

    fn close(&mut self) {
        if let Some(stream) = self.stream.take() {
            let _ = stream.shutdown(Shutdown::Both);
        }
        self.eof = false;
    }
}
