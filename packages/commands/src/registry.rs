//! Command registry - name to descriptor lookup.

use std::collections::HashMap;
use std::fmt;

use tracing::{debug, trace};

use crate::command::Command;
use crate::parse::{parse_line, Args};

/// Outcome of routing a command line through a registry.
pub enum Route<'a, C> {
    /// The line held no tokens.
    Empty,
    /// The first token names no registered command.
    Unknown { name: String, args: Args },
    /// The first token names a registered command.
    Found { command: &'a C, args: Args },
}

impl<C> fmt::Debug for Route<'_, C>
where
    C: Command,
{
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Route::Empty => f.write_str("Empty"),
            Route::Unknown { name, args } => f
                .debug_struct("Unknown")
                .field("name", name)
                .field("args", args)
                .finish(),
            Route::Found { command, args } => f
                .debug_struct("Found")
                .field("command", &command.name())
                .field("args", args)
                .finish(),
        }
    }
}

/// A table of commands keyed by name.
///
/// Registering a name twice replaces the earlier command. Lookups are exact
/// and case-sensitive.
///
/// Registration takes `&mut self` and lookup `&self`: populate the registry
/// during setup, then share it (e.g. behind an `Arc`) for dispatch.
///
/// # Example
///
/// ```rust
/// use hearth_commands::{Args, Command, CommandRegistry, Route, SimpleCommand};
///
/// type Handler = fn(&Args) -> String;
///
/// let mut registry: CommandRegistry<SimpleCommand<Handler>> = CommandRegistry::new();
/// registry.add(SimpleCommand::new("echo", (|args: &Args| args.joined(0)) as Handler));
///
/// match registry.route("echo \"hello there\" friend") {
///     Route::Found { command, args } => {
///         assert_eq!((command.handler())(&args), "hello there friend");
///     }
///     other => panic!("unexpected route: {:?}", other),
/// }
/// ```
pub struct CommandRegistry<C> {
    commands: HashMap<String, C>,
}

impl<C: Command> CommandRegistry<C> {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self {
            commands: HashMap::new(),
        }
    }

    /// Create an empty registry with room for `capacity` commands.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            commands: HashMap::with_capacity(capacity),
        }
    }

    /// Add a command, replacing any command already registered under its
    /// name. Returns the replaced command.
    pub fn add(&mut self, command: C) -> Option<C> {
        let name = command.name().to_string();
        let replaced = self.commands.insert(name.clone(), command);
        if replaced.is_some() {
            debug!(name = %name, "replaced command");
        } else {
            trace!(name = %name, "registered command");
        }
        replaced
    }

    /// Returns the command registered under `name`, if any.
    pub fn get_command(&self, name: &str) -> Option<&C> {
        self.commands.get(name)
    }

    /// True if a command is registered under `name`.
    pub fn contains(&self, name: &str) -> bool {
        self.commands.contains_key(name)
    }

    /// Remove the command registered under `name`.
    pub fn remove(&mut self, name: &str) -> Option<C> {
        self.commands.remove(name)
    }

    /// Number of registered commands.
    pub fn len(&self) -> usize {
        self.commands.len()
    }

    /// True if no commands are registered.
    pub fn is_empty(&self) -> bool {
        self.commands.is_empty()
    }

    /// All registered commands, sorted by name.
    pub fn commands(&self) -> Vec<&C> {
        let mut commands: Vec<&C> = self.commands.values().collect();
        commands.sort_by(|a, b| a.name().cmp(b.name()));
        commands
    }

    /// Tokenize a command line. See [`parse_line`].
    pub fn parse_line(line: &str) -> Vec<String> {
        parse_line(line)
    }

    /// Tokenize `line` and look up its first token.
    ///
    /// Unknown names aren't an error; the caller decides how to report them.
    pub fn route(&self, line: &str) -> Route<'_, C> {
        let mut tokens = parse_line(line).into_iter();
        let Some(name) = tokens.next() else {
            return Route::Empty;
        };
        let args = Args::new(tokens.collect());

        match self.commands.get(&name) {
            Some(command) => Route::Found { command, args },
            None => Route::Unknown { name, args },
        }
    }
}

impl<C: Command> Default for CommandRegistry<C> {
    fn default() -> Self {
        Self::new()
    }
}

impl<C: Command> fmt::Debug for CommandRegistry<C> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let names: Vec<&str> = self.commands().into_iter().map(|c| c.name()).collect();
        f.debug_struct("CommandRegistry")
            .field("commands", &names)
            .finish()
    }
}

impl<C: Command> Extend<C> for CommandRegistry<C> {
    fn extend<I: IntoIterator<Item = C>>(&mut self, iter: I) {
        for command in iter {
            self.add(command);
        }
    }
}

impl<C: Command> FromIterator<C> for CommandRegistry<C> {
    fn from_iter<I: IntoIterator<Item = C>>(iter: I) -> Self {
        let mut registry = Self::new();
        registry.extend(iter);
        registry
    }
}
