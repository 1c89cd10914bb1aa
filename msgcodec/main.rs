//! Bitcoin p2p message payload inspector.

#[macro_use]
extern crate clap;
#[macro_use]
extern crate log;

extern crate logs;
extern crate message;
extern crate primitives;

mod config;
mod decode;

use std::process;

fn main() {
	if let Err(err) = run() {
		eprintln!("{}", err);
		process::exit(1);
	}
}

fn run() -> Result<(), String> {
	let yaml = load_yaml!("cli.yml");
	let matches = clap::App::from_yaml(yaml).get_matches();
	let cfg = config::parse(&matches)?;

	if cfg.color {
		logs::init(&cfg.log, logs::DateAndColorLogFormatter)?;
	} else {
		logs::init(&cfg.log, logs::DateLogFormatter)?;
	}

	decode::decode(cfg)
}
