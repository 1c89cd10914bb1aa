use ser::Stream;
use bytes::Bytes;
use Payload;

/// Encodes a payload.
///
/// Panics when the payload writes a different number of bytes than its
/// `serialized_size` claims: that is a bug in the payload, not in the input.
pub fn serialize_payload<T>(payload: &T, version: u32) -> Bytes where T: Payload {
	let mut stream = PayloadStream::new(version);
	stream.append(payload);
	let bytes = stream.out();
	assert_eq!(
		bytes.len(), payload.serialized_size(version),
		"`{}` payload written with a size other than declared at version {}", T::COMMAND, version
	);
	bytes
}

/// Sink for payloads encoded at one negotiated version.
pub struct PayloadStream {
	stream: Stream,
	version: u32,
}

impl PayloadStream {
	pub fn new(version: u32) -> Self {
		PayloadStream {
			stream: Stream::default(),
			version: version,
		}
	}

	/// Version bounds are the caller's business on this side.
	pub fn append<T>(&mut self, t: &T) -> &mut Self where T: Payload {
		t.serialize_payload(&mut self.stream, self.version);
		self
	}

	pub fn len(&self) -> usize {
		self.stream.len()
	}

	pub fn out(self) -> Bytes {
		self.stream.out()
	}
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use ser::Stream;
	use types::{MemPool, Ping};
	use protocol;
	use Payload;
	use super::{serialize_payload, PayloadStream};

	#[derive(Debug, Default, PartialEq)]
	struct Liar;

	impl Payload for Liar {
		const COMMAND: &'static str = "liar";
		const VERSION_MINIMUM: u32 = 0;

		fn deserialize_payload<T>(_reader: &mut ::ser::Reader<T>, _version: u32) -> ::MessageResult<Self> where T: ::std::io::Read {
			Ok(Liar)
		}

		fn serialize_payload(&self, stream: &mut Stream, _version: u32) {
			stream.append(&1u8);
		}

		fn serialized_size(&self, _version: u32) -> usize {
			0
		}
	}

	#[test]
	fn test_serialize_payload() {
		let expected: Bytes = "5845303b6da97786".into();
		assert_eq!(serialize_payload(&Ping::new(0x8677a96d3b304558), protocol::BIP31), expected);
		assert_eq!(serialize_payload(&MemPool, protocol::BIP35), Bytes::new());
	}

	#[test]
	fn test_payload_stream_does_not_check_version() {
		let mut stream = PayloadStream::new(0);
		stream
			.append(&MemPool)
			.append(&Ping::new(5));
		assert_eq!(stream.len(), 0);
		assert_eq!(stream.out(), Bytes::new());
	}

	#[test]
	#[should_panic]
	fn test_serialize_payload_size_mismatch_is_fatal() {
		serialize_payload(&Liar, 0);
	}
}
