use std::io;
use ser::{Stream, Reader};
use {Payload, MessageResult};
use protocol;

#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct Ping {
	pub nonce: u64,
}

impl Ping {
	pub fn new(nonce: u64) -> Self {
		Ping {
			nonce: nonce,
		}
	}
}

impl Payload for Ping {
	const COMMAND: &'static str = "ping";
	const VERSION_MINIMUM: u32 = protocol::MINIMUM;

	fn deserialize_payload<T>(reader: &mut Reader<T>, version: u32) -> MessageResult<Self> where T: io::Read {
		// peers older than bip31 send an empty ping
		let nonce = if version >= protocol::BIP31 {
			reader.read()?
		} else {
			0
		};

		Ok(Ping::new(nonce))
	}

	fn serialize_payload(&self, stream: &mut Stream, version: u32) {
		if version >= protocol::BIP31 {
			stream.append(&self.nonce);
		}
	}

	fn serialized_size(&self, version: u32) -> usize {
		if version >= protocol::BIP31 {
			8
		} else {
			0
		}
	}
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use {Payload, Decoded, serialize_payload};
	use protocol;
	use super::Ping;

	#[test]
	fn test_ping_serialize() {
		let expected: Bytes = "5845303b6da97786".into();
		let ping = Ping::new(0x8677a96d3b304558);
		assert_eq!(serialize_payload(&ping, protocol::BIP31), expected);
		assert_eq!(ping.serialized_size(protocol::BIP31), 8);
	}

	#[test]
	fn test_ping_without_nonce() {
		let ping = Ping::new(0x8677a96d3b304558);
		assert_eq!(serialize_payload(&ping, protocol::MINIMUM), Bytes::new());
		assert_eq!(ping.serialized_size(protocol::BIP14), 0);

		let decoded = Decoded::<Ping>::from_bytes(protocol::MINIMUM, &[]);
		assert_eq!(decoded.into_payload(), Some(Ping::new(0)));
	}

	#[test]
	fn test_ping_deserialize() {
		let raw: Bytes = "5845303b6da97786".into();
		let decoded = Decoded::<Ping>::from_bytes(protocol::BIP31, &raw);
		assert_eq!(decoded.into_payload(), Some(Ping::new(0x8677a96d3b304558)));
	}

	#[test]
	fn test_truncated_ping() {
		let raw: Bytes = "5845303b6da977".into();
		assert!(!Decoded::<Ping>::from_bytes(protocol::BIP31, &raw).is_valid());
	}
}
