//! Error types.

use thiserror::Error;

/// Errors produced when decoding a painting byte stream.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum DecodeError {
    /// Missing or wrong magic header (not a painting blob).
    #[error("not a painting blob (invalid magic header)")]
    InvalidMagic,
    /// The data ended mid-record.
    #[error("unexpected end of painting data")]
    UnexpectedEnd,
    /// Unknown record byte.
    #[error("invalid record byte: 0x{0:02X}")]
    InvalidRecord(u8),
    /// Non-UTF-8 string payload.
    #[error("invalid UTF-8 in string data")]
    InvalidString,
}

/// Errors produced when replaying a painting.
#[derive(Debug, Clone, PartialEq, Eq, Error)]
pub enum ReplayError {
    /// An operation's coordinate span outruns the flat buffer. Only
    /// possible when the reservation step was skipped by a session user;
    /// paintings built through the painter never hit this.
    #[error("operation '{label}' wants {expected} coordinate slots, {available} available")]
    TruncatedCoords {
        label: String,
        expected: usize,
        available: usize,
    },
}
