use clap;
use message::{Command, protocol};
use primitives::bytes::Bytes;

pub const DEFAULT_LOG_FILTERS: &'static str = "warn";

pub enum Input {
	Hex(Bytes),
	Stdin,
}

pub struct Config {
	pub command: Command,
	pub version: u32,
	pub input: Input,
	pub log: String,
	pub color: bool,
}

pub fn parse(matches: &clap::ArgMatches) -> Result<Config, String> {
	let command = matches.value_of("COMMAND").expect("COMMAND is required in cli.yml; qed");
	let command: Command = command.parse().map_err(|_| format!("Invalid command: {}", command))?;

	let version = match matches.value_of("protocol") {
		Some(version) => version.parse().map_err(|_| "Invalid protocol version".to_owned())?,
		None => protocol::MAXIMUM,
	};

	let input = match matches.value_of("PAYLOAD") {
		Some(hex) => Input::Hex(hex.parse().map_err(|e| format!("Invalid payload: {}", e))?),
		None => Input::Stdin,
	};

	let config = Config {
		command: command,
		version: version,
		input: input,
		log: matches.value_of("log").unwrap_or(DEFAULT_LOG_FILTERS).to_owned(),
		color: !matches.is_present("no-color"),
	};

	Ok(config)
}
