use std::io;
use ser::{Stream, Reader};
use {Payload, MessageResult};
use protocol;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Verack;

impl Payload for Verack {
	const COMMAND: &'static str = "verack";
	const VERSION_MINIMUM: u32 = protocol::MINIMUM;

	fn deserialize_payload<T>(_reader: &mut Reader<T>, _version: u32) -> MessageResult<Self> where T: io::Read {
		Ok(Verack)
	}

	fn serialize_payload(&self, _stream: &mut Stream, _version: u32) {}

	fn serialized_size(&self, _version: u32) -> usize {
		0
	}
}
