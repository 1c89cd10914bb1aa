use std::io;
use ser::{Stream, Reader};
use {Payload, MessageResult};
use protocol;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct GetAddr;

impl Payload for GetAddr {
	const COMMAND: &'static str = "getaddr";
	const VERSION_MINIMUM: u32 = protocol::MINIMUM;

	fn deserialize_payload<T>(_reader: &mut Reader<T>, _version: u32) -> MessageResult<Self> where T: io::Read {
		Ok(GetAddr)
	}

	fn serialize_payload(&self, _stream: &mut Stream, _version: u32) {}

	fn serialized_size(&self, _version: u32) -> usize {
		0
	}
}
