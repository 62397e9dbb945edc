//! Command descriptors.

use std::fmt;

/// A registrable command: a unique name plus a handler.
///
/// The handler's shape is up to the application. A chat server might use
/// `fn(&Session, &Args) -> Reply`, a console `Box<dyn Fn(&Args) -> String>`.
pub trait Command {
    /// The application-defined handler type.
    type Handler: ?Sized;

    /// Name the command is registered and looked up under.
    fn name(&self) -> &str;

    /// The handler invoked when the command is dispatched.
    fn handler(&self) -> &Self::Handler;

    /// Usage line shown in help listings.
    fn usage(&self) -> &str {
        ""
    }

    /// Short description shown in help listings.
    fn description(&self) -> &str {
        ""
    }
}

/// A stock command descriptor holding its handler by value.
///
/// # Example
///
/// ```rust
/// use hearth_commands::{Args, Command, SimpleCommand};
///
/// let echo = SimpleCommand::new("echo", |args: &Args| args.joined(0))
///     .with_usage("echo <text>")
///     .with_description("Repeat the given text");
///
/// assert_eq!(echo.name(), "echo");
/// assert_eq!((echo.handler())(&Args::from(vec!["hi".to_string()])), "hi");
/// ```
#[derive(Clone)]
pub struct SimpleCommand<F> {
    name: String,
    usage: String,
    description: String,
    handler: F,
}

impl<F> SimpleCommand<F> {
    /// Create a command with empty usage and description.
    pub fn new(name: impl Into<String>, handler: F) -> Self {
        Self {
            name: name.into(),
            usage: String::new(),
            description: String::new(),
            handler,
        }
    }

    /// Set the usage line.
    pub fn with_usage(mut self, usage: impl Into<String>) -> Self {
        self.usage = usage.into();
        self
    }

    /// Set the help description.
    pub fn with_description(mut self, description: impl Into<String>) -> Self {
        self.description = description.into();
        self
    }

    /// Consume the descriptor, returning its handler.
    pub fn into_handler(self) -> F {
        self.handler
    }
}

impl<F> Command for SimpleCommand<F> {
    type Handler = F;

    fn name(&self) -> &str {
        &self.name
    }

    fn handler(&self) -> &F {
        &self.handler
    }

    fn usage(&self) -> &str {
        &self.usage
    }

    fn description(&self) -> &str {
        &self.description
    }
}

impl<F> fmt::Debug for SimpleCommand<F> {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SimpleCommand")
            .field("name", &self.name)
            .field("usage", &self.usage)
            .field("description", &self.description)
            .finish_non_exhaustive()
    }
}
