use std::io;
use std::io::Read;

pub fn deserialize<R, T>(buffer: R) -> Result<T, Error> where R: io::Read, T: Deserializable {
	let mut reader = Reader::from_read(buffer);
	let result = reader.read()?;

	if reader.is_finished() {
		Ok(result)
	} else {
		Err(Error::UnreadData)
	}
}

#[derive(Debug, PartialEq, Clone)]
pub enum Error {
	MalformedData,
	UnexpectedEnd,
	UnreadData,
}

impl From<io::Error> for Error {
	fn from(_: io::Error) -> Self {
		Error::UnexpectedEnd
	}
}

pub trait Deserializable {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where Self: Sized, T: io::Read;
}

/// Forward-only cursor over a byte source.
///
/// The first failure is remembered. Every read after it returns the same error
/// without touching the source, so a decoder can bail out at any point and the
/// caller still sees a consistent outcome on `is_valid`.
#[derive(Debug)]
pub struct Reader<T> {
	buffer: T,
	peeked: Option<u8>,
	error: Option<Error>,
}

impl<'a> Reader<&'a [u8]> {
	/// Convenient way of creating for slice of bytes
	pub fn new(buffer: &'a [u8]) -> Self {
		Reader::from_read(buffer)
	}
}

impl<T> io::Read for Reader<T> where T: io::Read {
	fn read(&mut self, buf: &mut [u8]) -> Result<usize, io::Error> {
		// a failed reader is exhausted
		if self.error.is_some() || buf.is_empty() {
			return Ok(0);
		}

		match self.peeked.take() {
			Some(peeked) => {
				buf[0] = peeked;
				Ok(1 + self.buffer.read(&mut buf[1..])?)
			},
			None => self.buffer.read(buf),
		}
	}
}

impl<R> Reader<R> where R: io::Read {
	pub fn from_read(read: R) -> Self {
		Reader {
			buffer: read,
			peeked: None,
			error: None,
		}
	}

	pub fn read<T>(&mut self) -> Result<T, Error> where T: Deserializable {
		if let Some(ref err) = self.error {
			return Err(err.clone());
		}

		T::deserialize(self).map_err(|err| self.fail(err))
	}

	/// Reads a value, yielding its default if the reader is or becomes invalid.
	pub fn read_or_default<T>(&mut self) -> T where T: Deserializable + Default {
		self.read().unwrap_or_default()
	}

	pub fn read_slice(&mut self, bytes: &mut [u8]) -> Result<(), Error> {
		if let Some(ref err) = self.error {
			return Err(err.clone());
		}

		self.read_exact(bytes).map_err(|_| self.fail(Error::UnexpectedEnd))
	}

	/// Marks the reader as failed although the bytes themselves were readable.
	/// Used when a decoded value breaks a protocol rule.
	pub fn invalidate(&mut self) {
		self.fail(Error::MalformedData);
	}

	pub fn is_valid(&self) -> bool {
		self.error.is_none()
	}

	/// The first failure recorded by this reader.
	pub fn error(&self) -> Option<&Error> {
		self.error.as_ref()
	}

	/// Returns true if reading is finished.
	pub fn is_finished(&mut self) -> bool {
		if self.peeked.is_some() {
			return false;
		}

		if self.error.is_some() {
			return true;
		}

		let peek: &mut [u8] = &mut [0u8];
		match self.buffer.read(peek) {
			Ok(1) => {
				self.peeked = Some(peek[0]);
				false
			},
			_ => true,
		}
	}

	fn fail(&mut self, err: Error) -> Error {
		self.error.get_or_insert(err).clone()
	}
}

#[cfg(test)]
mod tests {
	use std::io::Read;
	use super::{Reader, Error, deserialize};

	#[test]
	fn test_first_error_is_sticky() {
		let buffer = [2u8, 1, 1];
		let mut reader = Reader::new(&buffer);
		assert_eq!(reader.read::<bool>(), Err(Error::MalformedData));
		// the remaining bytes are well formed but never reached
		assert_eq!(reader.read::<bool>(), Err(Error::MalformedData));
		assert_eq!(reader.read::<u8>(), Err(Error::MalformedData));
		assert_eq!(reader.error(), Some(&Error::MalformedData));
		assert!(!reader.is_valid());
	}

	#[test]
	fn test_later_failures_keep_first_reason() {
		let buffer = [0u8];
		let mut reader = Reader::new(&buffer);
		assert_eq!(reader.read::<u32>(), Err(Error::UnexpectedEnd));
		reader.invalidate();
		assert_eq!(reader.read_slice(&mut [0u8; 1]), Err(Error::UnexpectedEnd));
		assert_eq!(reader.error(), Some(&Error::UnexpectedEnd));
	}

	#[test]
	fn test_invalidate_records_malformed_data() {
		let buffer = [1u8, 2];
		let mut reader = Reader::new(&buffer);
		assert_eq!(reader.read::<u8>(), Ok(1));
		reader.invalidate();
		assert_eq!(reader.read::<u8>(), Err(Error::MalformedData));
	}

	#[test]
	fn test_read_or_default() {
		let buffer = [7u8];
		let mut reader = Reader::new(&buffer);
		assert_eq!(reader.read_or_default::<u8>(), 7);
		assert_eq!(reader.read_or_default::<u64>(), 0);
		assert!(!reader.is_valid());
	}

	#[test]
	fn test_failed_reader_is_exhausted() {
		let buffer = [5u8, 6, 7];
		let mut reader = Reader::new(&buffer);
		reader.invalidate();
		let mut rest = Vec::new();
		assert_eq!(reader.read_to_end(&mut rest).unwrap(), 0);
		assert!(reader.is_finished());
	}

	#[test]
	fn test_is_finished_keeps_peeked_byte() {
		let buffer = [9u8];
		let mut reader = Reader::new(&buffer);
		assert!(!reader.is_finished());
		assert_eq!(reader.read::<u8>(), Ok(9));
		assert!(reader.is_finished());
		assert!(reader.is_valid());
	}

	#[test]
	fn test_deserialize_rejects_unread_data() {
		assert_eq!(deserialize::<_, u8>(&[1u8, 2] as &[u8]), Err(Error::UnreadData));
		assert_eq!(deserialize::<_, u8>(&[1u8] as &[u8]), Ok(1));
	}
}
