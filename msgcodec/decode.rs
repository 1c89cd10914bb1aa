use std::io;
use std::fmt::Debug;
use message::{Decoded, Payload};
use message::types::{FeeFilter, FilterAdd, GetAddr, MemPool, Ping, Pong, SendHeaders, Verack};
use config::{Config, Input};

/// Outcome of decoding one payload.
#[derive(Debug, PartialEq)]
pub struct Report {
	pub valid: bool,
	pub size: usize,
	pub canonical: String,
}

pub fn decode(cfg: Config) -> Result<(), String> {
	let report = match &cfg.command.to_string() as &str {
		"mempool" => inspect::<MemPool>(cfg.version, cfg.input),
		"verack" => inspect::<Verack>(cfg.version, cfg.input),
		"getaddr" => inspect::<GetAddr>(cfg.version, cfg.input),
		"sendheaders" => inspect::<SendHeaders>(cfg.version, cfg.input),
		"ping" => inspect::<Ping>(cfg.version, cfg.input),
		"pong" => inspect::<Pong>(cfg.version, cfg.input),
		"feefilter" => inspect::<FeeFilter>(cfg.version, cfg.input),
		"filteradd" => inspect::<FilterAdd>(cfg.version, cfg.input),
		_ => return Err(format!("Unsupported command: {}", cfg.command)),
	};

	println!("command: {}", cfg.command);
	println!("version: {}", cfg.version);
	println!("valid: {}", report.valid);
	if report.valid {
		println!("size: {}", report.size);
		println!("payload: {}", report.canonical);
	}

	Ok(())
}

pub fn inspect<T>(version: u32, input: Input) -> Report where T: Payload + Default + Debug {
	let decoded = match input {
		Input::Hex(bytes) => Decoded::<T>::from_bytes(version, &bytes),
		Input::Stdin => Decoded::<T>::from_stream(version, io::stdin()),
	};

	match decoded.payload() {
		Some(payload) => info!(target: "msgcodec", "decoded {} at version {}: {:?}", T::COMMAND, version, payload),
		None => warn!(target: "msgcodec", "{} payload rejected at version {}", T::COMMAND, version),
	}

	Report {
		valid: decoded.is_valid(),
		size: decoded.serialized_size(version),
		canonical: decoded.encode(version).to_hex(),
	}
}
