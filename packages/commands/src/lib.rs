//! # hearth-commands
//!
//! Name-keyed command dispatch for line-based text interfaces.
//!
//! - `parse_line`: Shell-like tokenizer honoring double-quoted arguments
//! - `Command`: Descriptor capability (name + application-defined handler)
//! - `CommandRegistry`: Table of descriptors with last-write-wins registration
//! - `Route`: Result of matching a raw line against a registry
//!
//! ## Usage
//!
//! ```rust
//! use hearth_commands::{parse_line, Args, CommandRegistry, Route, SimpleCommand};
//!
//! assert_eq!(
//!     parse_line("arg0 arg1 \"arg2 arg3\""),
//!     vec!["arg0", "arg1", "arg2 arg3"]
//! );
//!
//! let mut registry = CommandRegistry::new();
//! registry.add(SimpleCommand::new("shout", |args: &Args| args.joined(0).to_uppercase()));
//!
//! assert!(registry.get_command("shout").is_some());
//! assert!(matches!(registry.route("whisper hi"), Route::Unknown { .. }));
//! ```

mod command;
mod parse;
mod registry;

pub use command::{Command, SimpleCommand};
pub use parse::{parse_line, Args};
pub use registry::{CommandRegistry, Route};
