use std::io;
use ser::{Stream, Reader};
use {Payload, MessageResult};
use protocol;

/// Minimum fee rate, in satoshis per kilobyte, below which the sender does
/// not want transactions announced.
#[derive(Debug, Default, Clone, Copy, PartialEq)]
pub struct FeeFilter {
	pub fee_rate: u64,
}

impl FeeFilter {
	pub fn with_fee_rate(fee_rate: u64) -> Self {
		FeeFilter {
			fee_rate: fee_rate,
		}
	}
}

impl Payload for FeeFilter {
	const COMMAND: &'static str = "feefilter";
	const VERSION_MINIMUM: u32 = protocol::BIP133;

	fn deserialize_payload<T>(reader: &mut Reader<T>, _version: u32) -> MessageResult<Self> where T: io::Read {
		let fee_filter = FeeFilter {
			fee_rate: reader.read()?,
		};

		Ok(fee_filter)
	}

	fn serialize_payload(&self, stream: &mut Stream, _version: u32) {
		stream.append(&self.fee_rate);
	}

	fn serialized_size(&self, _version: u32) -> usize {
		8
	}
}
