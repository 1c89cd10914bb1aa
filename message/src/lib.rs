#[macro_use]
extern crate log;
extern crate primitives;
extern crate serialization as ser;

pub mod common;
mod decoded;
mod error;
mod payload;
mod serialization;
pub mod protocol;
pub mod types;

pub use primitives::{hash, bytes};

pub use common::Command;
pub use decoded::Decoded;
pub use error::{Error, MessageResult};
pub use payload::Payload;
pub use serialization::{PayloadReader, PayloadStream, serialize_payload, deserialize_payload};
