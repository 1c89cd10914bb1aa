use std::{cmp, io};
use std::io::Read;
use byteorder::{ReadBytesExt, LittleEndian};
use bytes::Bytes;
use hash::H96;
use compact_integer::CompactInteger;
use {Serializable, Stream, Deserializable, Reader, Error};

/// Upper bound on memory reserved up front for a length-prefixed field.
const MAX_PREALLOCATED_BYTES: u64 = 0x1_0000;

macro_rules! impl_ser_for_int {
	($ty: ty, $size: expr) => {
		impl Serializable for $ty {
			#[inline]
			fn serialize(&self, s: &mut Stream) {
				s.append_slice(&self.to_le_bytes());
			}

			#[inline]
			fn serialized_size(&self) -> usize {
				$size
			}
		}
	}
}

impl_ser_for_int!(u8, 1);
impl_ser_for_int!(u16, 2);
impl_ser_for_int!(u32, 4);
impl_ser_for_int!(u64, 8);
impl_ser_for_int!(i32, 4);
impl_ser_for_int!(i64, 8);

impl Serializable for bool {
	#[inline]
	fn serialize(&self, s: &mut Stream) {
		s.append(&(*self as u8));
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		1
	}
}

impl Deserializable for bool {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		match reader.read_u8()? {
			0 => Ok(false),
			1 => Ok(true),
			_ => Err(Error::MalformedData),
		}
	}
}

impl Deserializable for i32 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_i32::<LittleEndian>()?)
	}
}

impl Deserializable for i64 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_i64::<LittleEndian>()?)
	}
}

impl Deserializable for u8 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u8()?)
	}
}

impl Deserializable for u16 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u16::<LittleEndian>()?)
	}
}

impl Deserializable for u32 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u32::<LittleEndian>()?)
	}
}

impl Deserializable for u64 {
	#[inline]
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		Ok(reader.read_u64::<LittleEndian>()?)
	}
}

impl Serializable for H96 {
	fn serialize(&self, stream: &mut Stream) {
		stream.append_slice(&**self);
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		H96::size()
	}
}

impl Deserializable for H96 {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		let mut result = Self::default();
		reader.read_slice(&mut *result)?;
		Ok(result)
	}
}

impl Serializable for Bytes {
	fn serialize(&self, stream: &mut Stream) {
		stream
			.append(&CompactInteger::from(self.len()))
			.append_slice(self);
	}

	#[inline]
	fn serialized_size(&self) -> usize {
		CompactInteger::from(self.len()).serialized_size() + self.len()
	}
}

impl Deserializable for Bytes {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, Error> where T: io::Read {
		let len: u64 = reader.read::<CompactInteger>()?.into();
		// the prefix is untrusted, grow as the bytes actually arrive
		let mut bytes = Vec::with_capacity(cmp::min(len, MAX_PREALLOCATED_BYTES) as usize);
		reader.by_ref().take(len).read_to_end(&mut bytes)?;
		if (bytes.len() as u64) < len {
			return Err(Error::UnexpectedEnd);
		}

		Ok(bytes.into())
	}
}
