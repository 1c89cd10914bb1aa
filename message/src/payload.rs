use std::io;
use ser::{Reader, Stream};
use common::Command;
use protocol;
use MessageResult;

/// Body of a p2p message of one fixed type.
pub trait Payload: Send + 'static {
	/// Label carried in the message header.
	const COMMAND: &'static str;
	/// Lowest negotiated version at which a peer may send this message.
	const VERSION_MINIMUM: u32;
	/// Highest version this implementation understands for the message.
	const VERSION_MAXIMUM: u32 = protocol::MAXIMUM;

	fn command() -> Command {
		Self::COMMAND.into()
	}

	/// Reads the message fields. Version bounds are not checked here.
	fn deserialize_payload<T>(reader: &mut Reader<T>, version: u32) -> MessageResult<Self> where Self: Sized, T: io::Read;

	/// Writes the message fields. Never fails.
	fn serialize_payload(&self, stream: &mut Stream, version: u32);

	/// Exact number of bytes `serialize_payload` writes for `version`.
	fn serialized_size(&self, version: u32) -> usize;
}
