use std::{io, str, fmt};
use hash::H96;
use ser::{Serializable, Stream, Deserializable, Reader, Error as ReaderError};
use Error;

/// ASCII message label, NUL-padded to 12 bytes on the wire.
#[derive(Debug, PartialEq, Clone, Copy, Hash, Eq, Default)]
pub struct Command(H96);

impl str::FromStr for Command {
	type Err = Error;

	fn from_str(s: &str) -> Result<Self, Self::Err> {
		if !s.is_ascii() || s.len() > 12 {
			return Err(Error::InvalidCommand);
		}

		let mut result = H96::default();
		result[..s.len()].copy_from_slice(s.as_ref());
		Ok(Command(result))
	}
}

/// Labels of known message types. Panics on a label that does not fit.
impl From<&'static str> for Command {
	fn from(s: &'static str) -> Self {
		s.parse().expect("static command label is ascii and at most 12 bytes")
	}
}

impl Command {
	pub fn len(&self) -> usize {
		let trailing_zeros = self.0.iter().rev().take_while(|&x| x == &0).count();
		self.0.len() - trailing_zeros
	}

	pub fn is_empty(&self) -> bool {
		self.0.is_zero()
	}

	fn as_string(&self) -> String {
		String::from_utf8_lossy(&self.0[..self.len()]).to_ascii_lowercase()
	}
}

impl From<Command> for String {
	fn from(c: Command) -> Self {
		c.as_string()
	}
}

impl fmt::Display for Command {
	fn fmt(&self, f: &mut fmt::Formatter) -> fmt::Result {
		f.write_str(&self.as_string())
	}
}

impl<'a> PartialEq<&'a str> for Command {
	fn eq(&self, other: &&'a str) -> bool {
		self.len() == other.len() &&
		&self.0[..other.len()] == other.as_ref() as &[u8]
	}
}

impl Serializable for Command {
	fn serialize(&self, stream: &mut Stream) {
		stream.append(&self.0);
	}

	fn serialized_size(&self) -> usize {
		H96::size()
	}
}

impl Deserializable for Command {
	fn deserialize<T>(reader: &mut Reader<T>) -> Result<Self, ReaderError> where T: io::Read {
		reader.read().map(Command)
	}
}

#[cfg(test)]
mod tests {
	use bytes::Bytes;
	use ser::{serialize, deserialize};
	use Error;
	use super::Command;

	#[test]
	fn test_command_parse() {
		let command: Command = "mempool".into();
		assert_eq!(Command("6d656d706f6f6c0000000000".into()), command);
	}

	#[test]
	fn test_command_parse_rejects_bad_labels() {
		assert_eq!("sendcmpctblock".parse::<Command>().unwrap_err(), Error::InvalidCommand);
		assert_eq!("mémpool".parse::<Command>().unwrap_err(), Error::InvalidCommand);
	}

	#[test]
	fn test_command_to_string() {
		let command: Command = "mempool".into();
		let expected: String = "mempool".into();
		assert_eq!(expected, String::from(command));
		assert_eq!("mempool", command.to_string());
	}

	#[test]
	fn test_command_len() {
		let command: Command = "verack".into();
		assert_eq!(command.len(), 6);
		assert!(!command.is_empty());
		assert!(Command::default().is_empty());
	}

	#[test]
	fn test_command_serialize() {
		let expected = "6d656d706f6f6c0000000000".into();
		let command: Command = "mempool".into();

		assert_eq!(serialize(&command), expected);
	}

	#[test]
	fn test_command_deserialize() {
		let raw: Bytes = "6d656d706f6f6c0000000000".into();
		let expected: Command = "mempool".into();

		assert_eq!(expected, deserialize::<_, Command>(raw.as_ref()).unwrap());
	}

	#[test]
	fn partial_eq_command_str() {
		let command: Command = "mempool".into();
		assert_eq!(command, "mempool");
		assert!(command != "mem");
		assert!(command != "mempoolx");
	}
}
