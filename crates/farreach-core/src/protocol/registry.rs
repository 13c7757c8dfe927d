//! Tag-dispatched decoding of whole messages.
//!
//! Every binary encoding starts with its [`MessageType`] tag, so a generic
//! dispatcher can route incoming bytes to the matching decoder without any
//! external metadata. The registry holds the tag to decoder table. Message
//! kinds are a closed set, so decoders are plain function pointers; the
//! registry is built once at connection setup and never mutated afterwards,
//! which keeps concurrent decoding on different connections lock-free.

use std::collections::HashMap;

use tracing::{trace, warn};

use crate::protocol::codec::ProtocolError;
use crate::protocol::messages::{LoginRejectedMessage, MessageType};

/// Any message this crate can put on, or take off, the wire.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum ProtocolMessage {
    /// The server denied a login attempt.
    LoginRejected(LoginRejectedMessage),
}

impl ProtocolMessage {
    /// Returns the [`MessageType`] tag for this message.
    pub fn message_type(&self) -> MessageType {
        match self {
            ProtocolMessage::LoginRejected(_) => MessageType::LoginRejected,
        }
    }

    /// Appends the binary encoding of the inner message to `buf`.
    pub fn encode(&self, buf: &mut Vec<u8>) {
        match self {
            ProtocolMessage::LoginRejected(msg) => msg.encode(buf),
        }
    }
}

/// Decoder signature: bytes in, message and bytes consumed out.
pub type DecoderFn = fn(&[u8]) -> Result<(ProtocolMessage, usize), ProtocolError>;

/// Maps message tags to their decoders.
pub struct DecoderRegistry {
    decoders: HashMap<u8, DecoderFn>,
}

impl DecoderRegistry {
    /// Creates an empty registry.
    pub fn new() -> Self {
        Self {
            decoders: HashMap::new(),
        }
    }

    /// Creates a registry holding every message kind this crate defines.
    pub fn with_defaults() -> Self {
        let mut registry = Self::new();
        registry.register(MessageType::LoginRejected, decode_login_rejected);
        registry
    }

    /// Registers `decoder` for `message_type`, replacing any previous entry.
    pub fn register(&mut self, message_type: MessageType, decoder: DecoderFn) {
        self.decoders.insert(message_type as u8, decoder);
    }

    /// Decodes one message from the beginning of `bytes`, routed by the
    /// leading tag.
    ///
    /// # Errors
    ///
    /// - [`ProtocolError::InsufficientData`] if `bytes` is empty.
    /// - [`ProtocolError::UnknownTag`] if no decoder is registered for the
    ///   leading tag.
    /// - Whatever the routed decoder reports.
    pub fn decode(&self, bytes: &[u8]) -> Result<(ProtocolMessage, usize), ProtocolError> {
        if bytes.is_empty() {
            return Err(ProtocolError::InsufficientData {
                needed: 1,
                available: 0,
            });
        }

        let tag = bytes[0];
        let decoder = self.decoders.get(&tag).ok_or_else(|| {
            warn!(tag, "no decoder registered for message tag");
            ProtocolError::UnknownTag(tag)
        })?;

        let (message, consumed) = decoder(bytes)?;
        trace!(
            message_type = message.message_type().name(),
            consumed,
            "decoded message"
        );
        Ok((message, consumed))
    }
}

impl Default for DecoderRegistry {
    fn default() -> Self {
        Self::new()
    }
}

fn decode_login_rejected(bytes: &[u8]) -> Result<(ProtocolMessage, usize), ProtocolError> {
    let (message, consumed) = LoginRejectedMessage::decode(bytes)?;
    Ok((ProtocolMessage::LoginRejected(message), consumed))
}
