use std::io;
use bytes::Bytes;
use ser::{Serializable, Stream, Reader};
use {Payload, MessageResult, Error};
use protocol;

/// Largest element a peer may add to its bloom filter.
pub const MAX_FILTER_ADD_SIZE: usize = 520;

/// Adds one element to the bloom filter loaded on the connection.
#[derive(Debug, Default, Clone, PartialEq)]
pub struct FilterAdd {
	pub data: Bytes,
}

impl FilterAdd {
	pub fn new(data: Bytes) -> Self {
		FilterAdd {
			data: data,
		}
	}
}

impl Payload for FilterAdd {
	const COMMAND: &'static str = "filteradd";
	const VERSION_MINIMUM: u32 = protocol::BIP37;

	fn deserialize_payload<T>(reader: &mut Reader<T>, _version: u32) -> MessageResult<Self> where T: io::Read {
		let data: Bytes = reader.read()?;
		if data.len() > MAX_FILTER_ADD_SIZE {
			return Err(Error::Deserialize);
		}

		Ok(FilterAdd::new(data))
	}

	fn serialize_payload(&self, stream: &mut Stream, _version: u32) {
		stream.append(&self.data);
	}

	fn serialized_size(&self, _version: u32) -> usize {
		self.data.serialized_size()
	}
}
