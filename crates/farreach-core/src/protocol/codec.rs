//! Binary codec for the authentication/account wire messages.
//!
//! Wire format per message:
//! ```text
//! [type_tag:1][payload:N]
//! ```
//! The login rejection payload is a single byte, the reason ordinal, so the
//! whole message is two bytes. Ordinals are append-only wire state; see
//! [`RejectReason`].
//!
//! Decoding never substitutes a default for bytes it cannot interpret:
//! guessing a reason would misreport server intent to the end user, so every
//! failure is surfaced to the caller.

use thiserror::Error;
use tracing::warn;

use crate::protocol::messages::{LoginRejectedMessage, MessageType, RejectReason};

/// Encoded size of a login rejection: tag plus reason ordinal.
pub const LOGIN_REJECTED_SIZE: usize = 2;

/// Errors that can occur during message encoding or decoding.
#[derive(Debug, Error, PartialEq, Eq)]
pub enum ProtocolError {
    /// The byte slice is shorter than the wire layout requires.
    #[error("insufficient data: need at least {needed} bytes, got {available}")]
    InsufficientData { needed: usize, available: usize },

    /// A decoder was invoked on bytes carrying a different message tag. The
    /// stream is desynchronized at the connection level; do not retry the
    /// decode in place.
    #[error("message tag mismatch: expected 0x{expected:02X}, got 0x{found:02X}")]
    TagMismatch { expected: u8, found: u8 },

    /// The leading tag has no decoder registered for it.
    #[error("unknown message tag: 0x{0:02X}")]
    UnknownTag(u8),

    /// The reason ordinal is outside the known table: the sending peer runs
    /// a newer build than this one. Fatal to the message, not to the
    /// connection; whether to close or to ignore the message is caller
    /// policy.
    #[error("unknown reason ordinal: {0}")]
    UnknownOrdinal(u8),
}

impl LoginRejectedMessage {
    /// Appends the binary encoding to `buf`: the type tag, then the reason
    /// ordinal.
    pub fn encode(&self, buf: &mut Vec<u8>) {
        buf.push(MessageType::LoginRejected as u8);
        buf.push(self.reason().ordinal());
    }

    /// Decodes one login rejection from the beginning of `bytes`.
    ///
    /// Returns the message and the number of bytes consumed, so the caller
    /// can advance its read cursor. Trailing bytes are left untouched. The
    /// decoded message carries no channel; the transport layer attaches one
    /// via [`LoginRejectedMessage::with_channel`] if it wants addressing.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::InsufficientData`] if fewer than two bytes are
    ///   available.
    /// - [`ProtocolError::TagMismatch`] if the leading byte is not the
    ///   login rejection tag.
    /// - [`ProtocolError::UnknownOrdinal`] if the reason ordinal is outside
    ///   the known table (version skew).
    pub fn decode(bytes: &[u8]) -> Result<(Self, usize), ProtocolError> {
        if bytes.len() < LOGIN_REJECTED_SIZE {
            return Err(ProtocolError::InsufficientData {
                needed: LOGIN_REJECTED_SIZE,
                available: bytes.len(),
            });
        }

        let expected = MessageType::LoginRejected as u8;
        let found = bytes[0];
        if found != expected {
            return Err(ProtocolError::TagMismatch { expected, found });
        }

        let ordinal = bytes[1];
        let reason = RejectReason::try_from(ordinal).map_err(|_| {
            warn!(ordinal, "reject reason outside the known table; peer runs a newer build");
            ProtocolError::UnknownOrdinal(ordinal)
        })?;

        Ok((Self::new(reason), LOGIN_REJECTED_SIZE))
    }
}
