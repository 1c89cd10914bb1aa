use std::io;
use ser::{Stream, Reader};
use {Payload, MessageResult};
use protocol;

/// Reply to a `ping`, echoing its nonce.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Pong {
	pub nonce: u64,
}

impl Pong {
	pub fn new(nonce: u64) -> Self {
		Pong {
			nonce: nonce,
		}
	}
}

impl Payload for Pong {
	const COMMAND: &'static str = "pong";
	const VERSION_MINIMUM: u32 = protocol::BIP31;

	fn deserialize_payload<T>(reader: &mut Reader<T>, _version: u32) -> MessageResult<Self> where T: io::Read {
		let pong = Pong {
			nonce: reader.read()?,
		};

		Ok(pong)
	}

	fn serialize_payload(&self, stream: &mut Stream, _version: u32) {
		stream.append(&self.nonce);
	}

	fn serialized_size(&self, _version: u32) -> usize {
		8
	}
}
