//! HTTP/1.1 response scanning.
//!
//! The scanner consumes the reply one byte at a time and extracts exactly
//! two things: the 3-digit status code and, when the caller supplied a
//! sink, the body bytes. Header lines are recognized only well enough to
//! find the blank line that ends them; their content is discarded.
//!
//! The per-byte logic lives in [`ScanState`] so it can be driven without a
//! transport; [`scan`] wraps it in the drain loop that polls a
//! [`Transport`] until the peer closes.

use heapless::Vec;

use crate::error::Error;
use crate::transport::Transport;

/// The per-byte response parsing state machine.
///
/// Status capture: the first space flips the machine into the status token;
/// the next three non-space bytes are collected verbatim (digits or not)
/// and parsed `atoi`-style once the third arrives. Bytes after that never
/// change the code, so trailing garbage in a corrupted status line is
/// ignored rather than rejected.
///
/// Body boundary: a line feed arriving on a still-empty line means the
/// header block has ended. Once body mode is entered it is never left.
#[derive(Debug)]
pub struct ScanState {
    status_buf: [u8; 3],
    collected: u8,
    status: u16,
    in_status: bool,
    line_empty: bool,
    in_body: bool,
}

impl ScanState {
    /// A fresh state, positioned before the first response byte.
    pub fn new() -> Self {
        Self {
            status_buf: [0; 3],
            collected: 0,
            status: 0,
            in_status: false,
            line_empty: true,
            in_body: false,
        }
    }

    /// Advance the machine by one byte.
    ///
    /// Returns `true` when `byte` is a body byte the caller may want to
    /// keep, `false` for status-line and header bytes.
    pub fn feed(&mut self, byte: u8) -> bool {
        if byte == b' ' && !self.in_status {
            self.in_status = true;
        }
        if self.in_status && self.collected < 3 && byte != b' ' {
            self.status_buf[self.collected as usize] = byte;
            self.collected += 1;
            if self.collected == 3 {
                self.status = parse_status(&self.status_buf);
            }
        }

        if self.in_body {
            return true;
        }
        if byte == b'\n' && self.line_empty {
            self.in_body = true;
            return false;
        }
        if byte == b'\n' {
            self.line_empty = true;
        } else if byte != b'\r' {
            self.line_empty = false;
        }
        false
    }

    /// The parsed status code, `0` until three status bytes were seen.
    pub fn status_code(&self) -> u16 {
        self.status
    }

    /// Whether the header/body boundary has been crossed.
    pub fn in_body(&self) -> bool {
        self.in_body
    }
}

impl Default for ScanState {
    fn default() -> Self {
        Self::new()
    }
}

/// Leading-digit parse of the 3-byte status buffer.
///
/// Mirrors C `atoi`: digits accumulate from the front, the first non-digit
/// stops the parse, and a non-digit in the first position yields 0.
fn parse_status(buf: &[u8; 3]) -> u16 {
    let mut code: u16 = 0;
    for &byte in buf {
        if !byte.is_ascii_digit() {
            break;
        }
        code = code * 10 + u16::from(byte - b'0');
    }
    code
}

/// Drain `transport` and parse the response.
///
/// Polls the transport until it reports disconnected, feeding every byte
/// through [`ScanState`]. Body bytes are appended to `body` when a sink was
/// supplied; with `body` of `None` they are read and discarded so the
/// transport still reaches its closed state. A sink that fills up drops the
/// excess but draining continues.
///
/// `idle_limit` bounds the number of consecutive no-data polls before the
/// scan gives up with [`Error::Timeout`]. `None` drains without a deadline,
/// which loops forever on a transport that stays connected but silent.
///
/// Returns the status code as parsed; `0` means the transport closed before
/// three status bytes arrived.
pub fn scan<T: Transport, const N: usize>(
    transport: &mut T,
    mut body: Option<&mut Vec<u8, N>>,
    idle_limit: Option<u32>,
) -> Result<u16, Error> {
    let mut state = ScanState::new();
    let mut idle: u32 = 0;

    while transport.is_connected() {
        if transport.has_data() {
            idle = 0;
            if let Some(byte) = transport.read_byte() {
                if state.feed(byte) {
                    if let Some(sink) = &mut body {
                        let _ = sink.push(byte);
                    }
                }
            }
        } else if let Some(limit) = idle_limit {
            idle = idle.saturating_add(1);
            if idle > limit {
                return Err(Error::Timeout);
            }
        }
    }

    Ok(state.status_code())
}
