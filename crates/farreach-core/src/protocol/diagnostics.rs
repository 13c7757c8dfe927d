//! Write-only JSON records for logs and tooling.
//!
//! This path is independent of the binary codec and must never be used for
//! wire transmission: it carries the reason's symbolic name rather than its
//! ordinal and makes no compactness guarantee. There is no decode
//! counterpart.

use serde::Serialize;

use crate::protocol::messages::LoginRejectedMessage;
use crate::protocol::registry::ProtocolMessage;

/// Diagnostic view of one protocol message.
///
/// Serialized shape:
/// ```json
/// {"type":"LoginRejected","channel":"127.0.0.1:32452","reason":"SERVER_IS_FULL","text":"Server is full."}
/// ```
/// `channel` is `null` when no transport channel is attached.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct MessageDiagnostic {
    /// Stable name of the message kind.
    #[serde(rename = "type")]
    pub message_type: &'static str,
    /// Peer address of the originating channel, if known.
    pub channel: Option<String>,
    /// Symbolic reason name, not the wire ordinal.
    pub reason: &'static str,
    /// Untranslated text template bound to the reason.
    pub text: &'static str,
}

impl LoginRejectedMessage {
    /// Returns the diagnostic record for this message.
    pub fn diagnostic(&self) -> MessageDiagnostic {
        MessageDiagnostic {
            message_type: self.message_type().name(),
            channel: self.channel().map(|channel| channel.to_string()),
            reason: self.reason().name(),
            text: self.reason().text_key(),
        }
    }
}

impl ProtocolMessage {
    /// Returns the diagnostic record for the inner message.
    pub fn diagnostic(&self) -> MessageDiagnostic {
        match self {
            ProtocolMessage::LoginRejected(msg) => msg.diagnostic(),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::protocol::messages::{ChannelRef, RejectReason};
    use uuid::Uuid;

    #[test]
    fn test_diagnostic_carries_symbolic_name_and_template() {
        let record = LoginRejectedMessage::new(RejectReason::ServerIsFull).diagnostic();
        assert_eq!(record.message_type, "LoginRejected");
        assert_eq!(record.reason, "SERVER_IS_FULL");
        assert_eq!(record.text, "Server is full.");
        assert_eq!(record.channel, None);
    }

    #[test]
    fn test_diagnostic_json_shape() {
        let channel = ChannelRef::new(Uuid::nil(), "127.0.0.1:32452".parse().unwrap());
        let msg = LoginRejectedMessage::new(RejectReason::ServerIsFull).with_channel(channel);

        let json = serde_json::to_value(msg.diagnostic()).unwrap();
        assert_eq!(json["type"], "LoginRejected");
        assert_eq!(json["channel"], "127.0.0.1:32452");
        assert_eq!(json["reason"], "SERVER_IS_FULL");
        assert_eq!(json["text"], "Server is full.");
    }

    #[test]
    fn test_diagnostic_channel_is_null_when_unknown() {
        let json =
            serde_json::to_value(LoginRejectedMessage::new(RejectReason::SeedWrong).diagnostic())
                .unwrap();
        assert!(json["channel"].is_null());
    }
}
