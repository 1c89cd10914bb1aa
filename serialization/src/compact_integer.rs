//! Variable-length integer used for counts and lengths on the wire

use std::{fmt, io};
use {
	Serializable, Stream,
	Deserializable, Reader, Error as ReaderError
};

/// Variable-length unsigned integer ("CompactSize").
#[derive(Default, Debug, Clone, Copy, PartialEq)]
pub struct CompactInteger(u64);

impl fmt::Display for CompactInteger {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		self.0.fmt(f)
	}
}

impl From<CompactInteger> for usize {
	fn from(i: CompactInteger) -> Self {
		i.0 as usize
	}
}

impl From<CompactInteger> for u64 {
	fn from(i: CompactInteger) -> Self {
		i.0
	}
}

impl From<u8> for CompactInteger {
	fn from(i: u8) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u16> for CompactInteger {
	fn from(i: u16) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u32> for CompactInteger {
	fn from(i: u32) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<usize> for CompactInteger {
	fn from(i: usize) -> Self {
		CompactInteger(i as u64)
	}
}

impl From<u64> for CompactInteger {
	fn from(i: u64) -> Self {
		CompactInteger(i)
	}
}

impl CompactInteger {
	/// Marker byte announcing a wider value, if one is needed.
	fn marker(&self) -> Option<u8> {
		match self.0 {
			0..=0xfc => None,
			0xfd..=0xffff => Some(0xfd),
			0x10000..=0xffff_ffff => Some(0xfe),
			_ => Some(0xff),
		}
	}
}

impl Serializable for CompactInteger {
	fn serialize(&self, stream: &mut Stream) {
		match self.marker() {
			None => stream.append(&(self.0 as u8)),
			Some(0xfd) => stream.append(&0xfdu8).append(&(self.0 as u16)),
			Some(0xfe) => stream.append(&0xfeu8).append(&(self.0 as u32)),
			Some(marker) => stream.append(&marker).append(&self.0),
		};
	}

	fn serialized_size(&self) -> usize {
		match self.marker() {
			None => 1,
			Some(0xfd) => 3,
			Some(0xfe) => 5,
			Some(_) => 9,
		}
	}
}

impl Deserializable for CompactInteger {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError> where T: io::Read {
		let first = reader.read::<u8>()?;
		let result: CompactInteger = match first {
			0xfd => reader.read::<u16>()?.into(),
			0xfe => reader.read::<u32>()?.into(),
			0xff => reader.read::<u64>()?.into(),
			i => return Ok(i.into()),
		};

		// only the shortest encoding of a value is accepted
		if result.marker() != Some(first) {
			return Err(ReaderError::MalformedData);
		}

		Ok(result)
	}
}
