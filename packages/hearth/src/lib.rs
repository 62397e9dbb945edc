//! Hearth: a small runtime toolkit for text-driven servers.
//!
//! Hearth bundles two independent pieces a host application wires together:
//!
//! - [`commands`]: tokenize a raw line, look the first token up in a
//!   [`CommandRegistry`], hand the rest to the command's handler.
//! - [`vars`]: a thread-safe [`Variables`] store the handlers can read and
//!   write with strictly typed accessors.
//!
//! ## Example
//!
//! ```rust
//! use hearth::{Args, Command, CommandRegistry, Route, SimpleCommand, Variables};
//!
//! type Handler = fn(&Args, &Variables) -> String;
//!
//! fn set_title(args: &Args, vars: &Variables) -> String {
//!     match args.get(0) {
//!         Some(title) => {
//!             vars.set_string("title", title);
//!             format!("Title set to {}", title)
//!         }
//!         None => "Usage: title <text>".to_string(),
//!     }
//! }
//!
//! let mut registry: CommandRegistry<SimpleCommand<Handler>> = CommandRegistry::new();
//! registry.add(SimpleCommand::new("title", set_title as Handler));
//!
//! let vars = Variables::new();
//! if let Route::Found { command, args } = registry.route("title \"the Bold\"") {
//!     (command.handler())(&args, &vars);
//! }
//! assert_eq!(vars.get_string("title", "").unwrap(), "the Bold");
//! ```

pub use hearth_commands as commands;
pub use hearth_vars as vars;

pub use hearth_commands::{parse_line, Args, Command, CommandRegistry, Route, SimpleCommand};
pub use hearth_vars::{FromValue, Value, VarError, VarType, Variables};
