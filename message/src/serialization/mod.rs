mod stream;
mod reader;

pub use self::stream::{PayloadStream, serialize_payload};
pub use self::reader::{PayloadReader, deserialize_payload};
