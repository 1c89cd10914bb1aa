use std::io;
use ser::{Reader, Stream};
use bytes::Bytes;
use serialization::serialize_payload;
use Payload;

/// A payload together with the outcome of the decode that produced it.
///
/// A default instance is invalid; the only way to get a valid one is to decode
/// it. Decoding never fails out of band: a truncated buffer and a peer speaking
/// a version too old for the message both leave the entity invalid, and the
/// caller is expected to check `is_valid` before acting on it.
#[derive(Debug, Clone, PartialEq)]
pub struct Decoded<T> {
	payload: T,
	valid: bool,
}

impl<T> Default for Decoded<T> where T: Default {
	fn default() -> Self {
		Decoded {
			payload: T::default(),
			valid: false,
		}
	}
}

impl<T> Decoded<T> where T: Payload + Default {
	pub fn from_bytes(version: u32, data: &[u8]) -> Self {
		let mut instance = Self::default();
		instance.decode_bytes(version, data);
		instance
	}

	pub fn from_stream<R>(version: u32, stream: R) -> Self where R: io::Read {
		let mut instance = Self::default();
		instance.decode_stream(version, stream);
		instance
	}

	pub fn from_reader<R>(version: u32, reader: &mut Reader<R>) -> Self where R: io::Read {
		let mut instance = Self::default();
		instance.decode(version, reader);
		instance
	}

	pub fn decode_bytes(&mut self, version: u32, data: &[u8]) -> bool {
		let mut reader = Reader::new(data);
		self.decode(version, &mut reader)
	}

	pub fn decode_stream<R>(&mut self, version: u32, stream: R) -> bool where R: io::Read {
		let mut reader = Reader::from_read(stream);
		self.decode(version, &mut reader)
	}

	/// Decodes the payload from `reader`, leaving any further bytes unread.
	///
	/// Returns whether the reader is still valid afterwards, which is also
	/// what `is_valid` reports from now on.
	pub fn decode<R>(&mut self, version: u32, reader: &mut Reader<R>) -> bool where R: io::Read {
		self.reset();
		self.valid = true;

		match T::deserialize_payload(reader, version) {
			Ok(payload) => self.payload = payload,
			Err(_) => reader.invalidate(),
		}

		if version < T::VERSION_MINIMUM {
			reader.invalidate();
		}

		if !reader.is_valid() {
			trace!(target: "message", "invalid {} payload at version {}: {:?}", T::COMMAND, version, reader.error());
			self.reset();
		}

		reader.is_valid()
	}

	pub fn encode(&self, version: u32) -> Bytes {
		serialize_payload(&self.payload, version)
	}

	pub fn encode_to(&self, version: u32, stream: &mut Stream) {
		self.payload.serialize_payload(stream, version);
	}

	/// Writes the encoded payload to `writer`. Only the writer itself can fail.
	pub fn encode_to_writer<W>(&self, version: u32, writer: &mut W) -> io::Result<()> where W: io::Write {
		writer.write_all(&self.encode(version))
	}

	pub fn serialized_size(&self, version: u32) -> usize {
		self.payload.serialized_size(version)
	}

	pub fn is_valid(&self) -> bool {
		self.valid
	}

	/// Discards the content, leaving the entity as freshly constructed.
	pub fn reset(&mut self) {
		self.payload = T::default();
		self.valid = false;
	}

	pub fn payload(&self) -> Option<&T> {
		if self.valid {
			Some(&self.payload)
		} else {
			None
		}
	}

	pub fn into_payload(self) -> Option<T> {
		if self.valid {
			Some(self.payload)
		} else {
			None
		}
	}
}

#[cfg(test)]
mod tests {
	use std::io;
	use bytes::Bytes;
	use ser::{Reader, Stream};
	use types::{MemPool, Ping, FeeFilter};
	use protocol;
	use super::Decoded;

	#[test]
	fn test_default_is_invalid() {
		let mempool = Decoded::<MemPool>::default();
		assert!(!mempool.is_valid());
		assert_eq!(mempool.payload(), None);
	}

	#[test]
	fn test_mempool_from_empty_bytes() {
		let mempool = Decoded::<MemPool>::from_bytes(70002, &[]);
		assert!(mempool.is_valid());
		assert_eq!(mempool.payload(), Some(&MemPool));
		assert_eq!(mempool.serialized_size(70002), 0);
		assert_eq!(mempool.encode(70002), Bytes::new());
	}

	#[test]
	fn test_mempool_below_minimum_is_invalid() {
		let mempool = Decoded::<MemPool>::from_bytes(31400, &[]);
		assert!(!mempool.is_valid());
		assert_eq!(mempool.into_payload(), None);
	}

	#[test]
	fn test_truncated_fee_filter_is_invalid() {
		let raw: Bytes = "e8030000".into();
		let mut reader = Reader::new(&raw);
		let filter = Decoded::<FeeFilter>::from_reader(70013, &mut reader);
		assert!(!filter.is_valid());
		assert_eq!(reader.error(), Some(&::ser::Error::UnexpectedEnd));
	}

	#[test]
	fn test_from_stream() {
		let raw: Bytes = "5845303b6da97786".into();
		let ping = Decoded::<Ping>::from_stream(protocol::BIP31, io::Cursor::new(raw.take()));
		assert_eq!(ping.into_payload(), Some(Ping::new(0x8677a96d3b304558)));
	}

	#[test]
	fn test_decode_leaves_following_bytes() {
		let raw: Bytes = "0100000000000000ff".into();
		let mut reader = Reader::new(&raw);
		let ping = Decoded::<Ping>::from_reader(protocol::MAXIMUM, &mut reader);
		assert!(ping.is_valid());
		assert_eq!(reader.read::<u8>().unwrap(), 0xff);
	}

	#[test]
	fn test_decode_after_failure_stays_invalid() {
		let mut reader = Reader::new(&[]);
		reader.invalidate();
		let mempool = Decoded::<MemPool>::from_reader(protocol::BIP35, &mut reader);
		assert!(!mempool.is_valid());
	}

	#[test]
	fn test_redecode_replaces_content() {
		let mut ping = Decoded::<Ping>::from_bytes(protocol::BIP31, &[1, 0, 0, 0, 0, 0, 0, 0]);
		assert_eq!(ping.payload(), Some(&Ping::new(1)));
		assert!(!ping.decode_bytes(protocol::BIP31, &[2, 0]));
		assert_eq!(ping, Decoded::default());
		assert!(ping.decode_bytes(protocol::BIP31, &[3, 0, 0, 0, 0, 0, 0, 0]));
		assert_eq!(ping.payload(), Some(&Ping::new(3)));
	}

	#[test]
	fn test_reset_is_idempotent() {
		let mut ping = Decoded::<Ping>::from_bytes(protocol::BIP31, &[1, 0, 0, 0, 0, 0, 0, 0]);
		ping.reset();
		assert!(!ping.is_valid());
		let once = ping.clone();
		ping.reset();
		assert_eq!(ping, once);
		assert_eq!(ping, Decoded::default());
	}

	#[test]
	fn test_encode_to_writer() {
		let raw: Bytes = "e803000000000000".into();
		let filter = Decoded::<FeeFilter>::from_bytes(protocol::BIP133, &raw);
		let mut out = io::Cursor::new(Vec::new());
		filter.encode_to_writer(protocol::BIP133, &mut out).unwrap();
		Decoded::<MemPool>::from_bytes(protocol::BIP35, &[]).encode_to_writer(protocol::BIP35, &mut out).unwrap();
		assert_eq!(out.into_inner(), raw.take());
	}

	#[test]
	fn test_encode_to_failing_writer() {
		let ping = Decoded::<Ping>::from_bytes(protocol::BIP31, &[9, 0, 0, 0, 0, 0, 0, 0]);
		let mut buffer = [0u8; 4];
		let mut out: &mut [u8] = &mut buffer;
		assert_eq!(ping.encode_to_writer(protocol::BIP31, &mut out).unwrap_err().kind(), io::ErrorKind::WriteZero);
	}

	#[test]
	fn test_encode_to_stream() {
		let ping = Decoded::<Ping>::from_bytes(protocol::BIP31, &[9, 0, 0, 0, 0, 0, 0, 0]);
		let mut stream = Stream::new();
		ping.encode_to(protocol::BIP31, &mut stream);
		ping.encode_to(protocol::MINIMUM, &mut stream);
		assert_eq!(stream.out(), "0900000000000000".into());
	}
}
