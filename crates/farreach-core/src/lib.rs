//! # farreach-core
//!
//! Shared library for the Farreach client/server framework containing the
//! authentication/account wire protocol and its outcome taxonomies.
//!
//! This crate is used by both the server and the client. It has zero
//! dependencies on sockets, encryption, or the game-state protocol; a
//! transport layer hands it whole, already-framed messages and takes the
//! encoded bytes back.
//!
//! - **`protocol`** - how bytes travel over the wire. Every message encodes
//!   as a one-byte type tag followed by its payload fields, and decodes back
//!   into typed Rust values on the other end. Reason ordinals and tags are
//!   append-only wire state shared with independently deployed peers.
//! - **`account`** - the closed set of outcomes an account-creation request
//!   can end in.
//! - **`i18n`** - the translation seam. Protocol enums carry untranslated
//!   English templates as message keys; callers resolve them through a
//!   [`Translator`] for their locale.

pub mod account;
pub mod i18n;
pub mod protocol;

pub use account::AccountResult;
pub use i18n::{DictionaryTranslator, IdentityTranslator, Translator};
pub use protocol::codec::ProtocolError;
pub use protocol::diagnostics::MessageDiagnostic;
pub use protocol::messages::{ChannelRef, LoginRejectedMessage, MessageType, RejectReason};
pub use protocol::registry::{DecoderRegistry, ProtocolMessage};
