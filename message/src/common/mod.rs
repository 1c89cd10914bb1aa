mod command;

pub use self::command::Command;
