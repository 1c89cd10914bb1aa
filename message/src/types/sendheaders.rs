use std::io;
use ser::{Stream, Reader};
use {Payload, MessageResult};
use protocol;

/// Asks the peer to announce new blocks with `headers` instead of `inv`.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct SendHeaders;

impl Payload for SendHeaders {
	const COMMAND: &'static str = "sendheaders";
	const VERSION_MINIMUM: u32 = protocol::BIP130;

	fn deserialize_payload<T>(_reader: &mut Reader<T>, _version: u32) -> MessageResult<Self> where T: io::Read {
		Ok(SendHeaders)
	}

	fn serialize_payload(&self, _stream: &mut Stream, _version: u32) {}

	fn serialized_size(&self, _version: u32) -> usize {
		0
	}
}
