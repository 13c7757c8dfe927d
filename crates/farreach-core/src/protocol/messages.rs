//! Authentication/account wire message types.
//!
//! Every message kind has a fixed one-byte type tag, and every binary
//! encoding begins with that tag followed by the payload fields in
//! declaration order. Tags and reason ordinals are wire state shared with
//! independently deployed peers; both tables are append-only.

use std::fmt;
use std::net::SocketAddr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

use crate::i18n::Translator;

// ── Message type tags ─────────────────────────────────────────────────────────

/// One-byte tags identifying each concrete message kind on the wire.
///
/// A message's binary encoding always begins with its tag, which lets a
/// generic dispatcher route bytes to the matching decoder without external
/// metadata. Existing tag values never change.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[repr(u8)]
pub enum MessageType {
    /// Server to client: a login attempt was denied.
    /// Payload: the reason ordinal, one byte.
    LoginRejected = 0x0E,
}

impl MessageType {
    /// Stable symbolic name, used by the diagnostic JSON path.
    pub fn name(self) -> &'static str {
        match self {
            MessageType::LoginRejected => "LoginRejected",
        }
    }
}

impl TryFrom<u8> for MessageType {
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0x0E => Ok(MessageType::LoginRejected),
            _ => Err(()),
        }
    }
}

// ── Login rejection reasons ───────────────────────────────────────────────────

/// Why a login attempt was denied.
///
/// The explicit discriminant is the wire ordinal, so the table is
/// append-only: existing variants are never reordered, renamed in position,
/// or removed, and new variants go at the end. An old peer can then at least
/// detect, rather than silently misinterpret, reasons introduced by newer
/// builds.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(rename_all = "SCREAMING_SNAKE_CASE")]
#[repr(u8)]
pub enum RejectReason {
    /// The username or password is wrong.
    UsernameWrong = 0,
    /// Superseded by [`RejectReason::TooManyTriesUsername`] and
    /// [`RejectReason::TooManyTriesIp`]; the slot stays because the ordinal
    /// is wire state.
    TooManyTries = 1,
    /// The account is banned.
    UsernameBanned = 2,
    /// There are too many active clients.
    ServerIsFull = 3,
    /// The client is built for a different game than the server.
    GameMismatch = 4,
    /// The protocol version is incompatible.
    ProtocolMismatch = 5,
    /// The nonce used during encryption setup is invalid.
    InvalidNonce = 6,
    /// The account exists but has not been activated yet.
    UsernameInactive = 7,
    /// Too many failed attempts against this account.
    TooManyTriesUsername = 8,
    /// Too many failed attempts from this network.
    TooManyTriesIp = 9,
    /// The preauthentication seed did not match.
    SeedWrong = 10,
    /// The account was merged into another account.
    AccountMerged = 11,
}

impl RejectReason {
    /// Every variant in ordinal order, for table-driven tests and tooling.
    pub const ALL: [RejectReason; 12] = [
        RejectReason::UsernameWrong,
        RejectReason::TooManyTries,
        RejectReason::UsernameBanned,
        RejectReason::ServerIsFull,
        RejectReason::GameMismatch,
        RejectReason::ProtocolMismatch,
        RejectReason::InvalidNonce,
        RejectReason::UsernameInactive,
        RejectReason::TooManyTriesUsername,
        RejectReason::TooManyTriesIp,
        RejectReason::SeedWrong,
        RejectReason::AccountMerged,
    ];

    /// The wire ordinal of this reason.
    pub fn ordinal(self) -> u8 {
        self as u8
    }

    /// Stable symbolic name, used by the diagnostic JSON path.
    ///
    /// Names stay meaningful across wire versions even though reordering is
    /// forbidden, which makes them the safe choice for human-facing output.
    pub fn name(self) -> &'static str {
        match self {
            RejectReason::UsernameWrong => "USERNAME_WRONG",
            RejectReason::TooManyTries => "TOO_MANY_TRIES",
            RejectReason::UsernameBanned => "USERNAME_BANNED",
            RejectReason::ServerIsFull => "SERVER_IS_FULL",
            RejectReason::GameMismatch => "GAME_MISMATCH",
            RejectReason::ProtocolMismatch => "PROTOCOL_MISMATCH",
            RejectReason::InvalidNonce => "INVALID_NONCE",
            RejectReason::UsernameInactive => "USERNAME_INACTIVE",
            RejectReason::TooManyTriesUsername => "TOO_MANY_TRIES_USERNAME",
            RejectReason::TooManyTriesIp => "TOO_MANY_TRIES_IP",
            RejectReason::SeedWrong => "SEED_WRONG",
            RejectReason::AccountMerged => "ACCOUNT_MERGED",
        }
    }

    /// The untranslated text template bound to this reason.
    ///
    /// Templates double as message keys for the [`Translator`] seam.
    pub fn text_key(self) -> &'static str {
        match self {
            RejectReason::UsernameWrong => "Username/Password incorrect.",
            RejectReason::TooManyTries => {
                "There have been too many failed login attempts for your account or network. \
                 Please wait a few minutes or contact support."
            }
            RejectReason::UsernameBanned => "Account is banned.",
            RejectReason::ServerIsFull => "Server is full.",
            RejectReason::GameMismatch => {
                "Server is running an incompatible version of the game. Please update."
            }
            RejectReason::ProtocolMismatch => "Protocol version is incompatible.",
            RejectReason::InvalidNonce => {
                "The hash you sent does not match the hash you sent earlier."
            }
            RejectReason::UsernameInactive => {
                "Your account is inactive. Please confirm account creation by clicking the link \
                 in the email you received. If you did not get the email, log in to the website \
                 and request it again, or contact support."
            }
            RejectReason::TooManyTriesUsername => {
                "There have been too many failed login attempts for your account. \
                 Please wait a few minutes or contact support."
            }
            RejectReason::TooManyTriesIp => {
                "There have been too many failed login attempts from your network. \
                 Please wait a few minutes or contact support."
            }
            RejectReason::SeedWrong => "Preauthentication failed. Please try again.",
            RejectReason::AccountMerged => {
                "This account was merged into another account. Please log in with the other \
                 account, or contact support."
            }
        }
    }

    /// Resolves the text template through `translator` for the caller's
    /// locale. Resolved at call time, never cached.
    pub fn localized_text(self, translator: &dyn Translator) -> String {
        translator.translate(self.text_key())
    }
}

impl TryFrom<u8> for RejectReason {
    /// Inverse of [`RejectReason::ordinal`]. Fails for ordinals outside the
    /// known table, which signals version skew between peers.
    type Error = ();

    fn try_from(value: u8) -> Result<Self, Self::Error> {
        match value {
            0 => Ok(RejectReason::UsernameWrong),
            1 => Ok(RejectReason::TooManyTries),
            2 => Ok(RejectReason::UsernameBanned),
            3 => Ok(RejectReason::ServerIsFull),
            4 => Ok(RejectReason::GameMismatch),
            5 => Ok(RejectReason::ProtocolMismatch),
            6 => Ok(RejectReason::InvalidNonce),
            7 => Ok(RejectReason::UsernameInactive),
            8 => Ok(RejectReason::TooManyTriesUsername),
            9 => Ok(RejectReason::TooManyTriesIp),
            10 => Ok(RejectReason::SeedWrong),
            11 => Ok(RejectReason::AccountMerged),
            _ => Err(()),
        }
    }
}

// ── Channel reference ─────────────────────────────────────────────────────────

/// Non-owning reference to the transport channel a message arrived on.
///
/// Used only for logging and reply addressing on the receiving side. It is
/// never part of the wire encoding.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct ChannelRef {
    /// Connection identifier assigned by the transport layer.
    pub id: Uuid,
    /// Remote endpoint of the connection.
    pub peer: SocketAddr,
}

impl ChannelRef {
    /// Creates a reference to the channel with the given identity and peer
    /// address.
    pub fn new(id: Uuid, peer: SocketAddr) -> Self {
        Self { id, peer }
    }
}

impl fmt::Display for ChannelRef {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}", self.peer)
    }
}

// ── Login rejection message ───────────────────────────────────────────────────

/// Server to client: the login attempt was denied, and why.
///
/// Constructed once with all fields populated, consumed once by the client
/// (or by logging), then discarded. The channel reference is attached by the
/// transport layer on receive and never serialized.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub struct LoginRejectedMessage {
    reason: RejectReason,
    channel: Option<ChannelRef>,
}

impl LoginRejectedMessage {
    /// Creates a rejection carrying `reason`, with no channel attached.
    pub fn new(reason: RejectReason) -> Self {
        Self {
            reason,
            channel: None,
        }
    }

    /// Returns a copy with the originating channel attached, for logging and
    /// reply addressing.
    pub fn with_channel(self, channel: ChannelRef) -> Self {
        Self {
            channel: Some(channel),
            ..self
        }
    }

    /// The reason the login was denied.
    pub fn reason(&self) -> RejectReason {
        self.reason
    }

    /// The originating transport channel, if known.
    pub fn channel(&self) -> Option<&ChannelRef> {
        self.channel.as_ref()
    }

    /// The tag identifying this message kind on the wire.
    pub fn message_type(&self) -> MessageType {
        MessageType::LoginRejected
    }

    /// Renders the message for humans: message kind, originating peer
    /// address when known, and the localized reason text.
    ///
    /// Presentation only; the output has no round-trip contract and must not
    /// be parsed back into a message.
    pub fn describe(&self, translator: &dyn Translator) -> String {
        match &self.channel {
            Some(channel) => format!(
                "LoginRejected from ({}): {}",
                channel,
                self.reason.localized_text(translator)
            ),
            None => format!(
                "LoginRejected: {}",
                self.reason.localized_text(translator)
            ),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::i18n::IdentityTranslator;

    fn channel() -> ChannelRef {
        ChannelRef::new(Uuid::nil(), "127.0.0.1:32452".parse().unwrap())
    }

    #[test]
    fn test_reason_ordinals_match_table_position() {
        for (position, reason) in RejectReason::ALL.iter().enumerate() {
            assert_eq!(reason.ordinal() as usize, position);
        }
    }

    #[test]
    fn test_reason_try_from_is_the_inverse_of_ordinal() {
        for reason in RejectReason::ALL {
            assert_eq!(RejectReason::try_from(reason.ordinal()), Ok(reason));
        }
    }

    #[test]
    fn test_reason_try_from_rejects_out_of_table_ordinals() {
        assert_eq!(RejectReason::try_from(12), Err(()));
        assert_eq!(RejectReason::try_from(0xFF), Err(()));
    }

    #[test]
    fn test_message_type_try_from_round_trips() {
        assert_eq!(
            MessageType::try_from(MessageType::LoginRejected as u8),
            Ok(MessageType::LoginRejected)
        );
        assert_eq!(MessageType::try_from(0x00), Err(()));
    }

    #[test]
    fn test_reason_serializes_with_symbolic_name() {
        let json = serde_json::to_string(&RejectReason::ServerIsFull).unwrap();
        assert_eq!(json, "\"SERVER_IS_FULL\"");
    }

    #[test]
    fn test_describe_includes_peer_address_when_channel_attached() {
        let msg = LoginRejectedMessage::new(RejectReason::ServerIsFull).with_channel(channel());
        assert_eq!(
            msg.describe(&IdentityTranslator),
            "LoginRejected from (127.0.0.1:32452): Server is full."
        );
    }

    #[test]
    fn test_describe_omits_address_without_channel() {
        let msg = LoginRejectedMessage::new(RejectReason::UsernameWrong);
        assert_eq!(
            msg.describe(&IdentityTranslator),
            "LoginRejected: Username/Password incorrect."
        );
    }

    #[test]
    fn test_with_channel_does_not_change_the_reason() {
        let msg = LoginRejectedMessage::new(RejectReason::AccountMerged).with_channel(channel());
        assert_eq!(msg.reason(), RejectReason::AccountMerged);
        assert_eq!(msg.channel(), Some(&channel()));
    }
}
