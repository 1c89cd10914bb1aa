use std::io;
use ser::Reader;
use {Payload, Error};

/// Decodes a whole buffer as a single payload.
///
/// Unlike `Decoded`, this reports why decoding failed and rejects trailing bytes.
pub fn deserialize_payload<T>(buffer: &[u8], version: u32) -> Result<T, Error> where T: Payload {
	let mut reader = PayloadReader::new(buffer, version);
	let result = reader.read()?;
	if !reader.is_finished() {
		return Err(Error::Deserialize);
	}

	Ok(result)
}

pub struct PayloadReader<T> {
	reader: Reader<T>,
	version: u32,
}

impl<'a> PayloadReader<&'a [u8]> {
	pub fn new(buffer: &'a [u8], version: u32) -> Self {
		PayloadReader::from_read(buffer, version)
	}
}

impl<R> PayloadReader<R> where R: io::Read {
	pub fn from_read(read: R, version: u32) -> Self {
		PayloadReader {
			reader: Reader::from_read(read),
			version: version,
		}
	}

	pub fn read<T>(&mut self) -> Result<T, Error> where T: Payload {
		if T::VERSION_MINIMUM > self.version {
			self.reader.invalidate();
			return Err(Error::InvalidVersion);
		}

		T::deserialize_payload(&mut self.reader, self.version)
	}

	pub fn version(&self) -> u32 {
		self.version
	}

	pub fn is_finished(&mut self) -> bool {
		self.reader.is_finished()
	}
}
