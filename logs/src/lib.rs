extern crate ansi_term;
extern crate log;
extern crate env_logger;
extern crate time;

use std::io::Write;
use ansi_term::Colour as Color;
use log::{Record, Level};
use env_logger::Builder;

fn strftime() -> String {
	time::strftime("%Y-%m-%d %H:%M:%S %Z", &time::now()).unwrap_or_default()
}

pub trait LogFormatter: Send + Sync + 'static {
	fn format(&self, record: &Record) -> String;
}

pub struct DateLogFormatter;

impl LogFormatter for DateLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = strftime();
		format!("{} {} {} {}", timestamp, record.level(), record.target(), record.args())
	}
}

pub struct DateAndColorLogFormatter;

impl LogFormatter for DateAndColorLogFormatter {
	fn format(&self, record: &Record) -> String {
		let timestamp = strftime();
		let level = match record.level() {
			Level::Error => Color::Red.bold().paint(record.level().to_string()),
			Level::Warn => Color::Yellow.bold().paint(record.level().to_string()),
			Level::Info => Color::Green.paint(record.level().to_string()),
			Level::Debug => Color::Cyan.paint(record.level().to_string()),
			Level::Trace => Color::Blue.paint(record.level().to_string()),
		};

		format!("{} {} {} {}", Color::Black.bold().paint(timestamp), level, record.target(), record.args())
	}
}

/// Installs the global logger. `filters` uses the `RUST_LOG` syntax.
pub fn init<T>(filters: &str, formatter: T) -> Result<(), String> where T: LogFormatter {
	let mut builder = Builder::new();
	builder.parse_filters(filters);
	builder.format(move |buf, record| writeln!(buf, "{}", formatter.format(record)));
	builder.try_init().map_err(|_| "Logger can be initialized only once".to_owned())
}
