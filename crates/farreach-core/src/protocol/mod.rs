//! Wire protocol: message types, the binary codec, the decoder registry,
//! and the diagnostic JSON path.

pub mod codec;
pub mod diagnostics;
pub mod messages;
pub mod registry;

pub use codec::{ProtocolError, LOGIN_REJECTED_SIZE};
pub use diagnostics::MessageDiagnostic;
pub use messages::{ChannelRef, LoginRejectedMessage, MessageType, RejectReason};
pub use registry::{DecoderFn, DecoderRegistry, ProtocolMessage};
