use std::io;
use ser::{Stream, Reader};
use {Payload, MessageResult};
use protocol;

/// Asks the peer to announce the transactions in its memory pool.
///
/// The message has no body.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct MemPool;

impl Payload for MemPool {
	const COMMAND: &'static str = "mempool";
	const VERSION_MINIMUM: u32 = protocol::BIP35;

	fn deserialize_payload<T>(_reader: &mut Reader<T>, _version: u32) -> MessageResult<Self> where T: io::Read {
		Ok(MemPool)
	}

	fn serialize_payload(&self, _stream: &mut Stream, _version: u32) {}

	fn serialized_size(&self, _version: u32) -> usize {
		0
	}
}
