//! # hearth-vars
//!
//! A thread-safe store of named, dynamically-typed variables.
//!
//! - `Value`: Tagged payload (numbers, bool, string, bytes)
//! - `Variables`: The store, one mutex per instance
//! - `FromValue`: Typed extraction with strict type checks
//!
//! Reads of a missing variable return the caller's default. Reads of an
//! existing variable as the wrong type return [`VarError::TypeMismatch`].
//!
//! ## Example
//!
//! ```rust
//! use hearth_vars::{Value, Variables};
//!
//! let vars = Variables::new();
//! vars.set("gold", 250u32);
//! vars.set_bool("tutorial_done", true);
//!
//! assert_eq!(vars.get_uint("gold", 0).unwrap(), 250);
//! assert_eq!(vars.get("gold"), Some(Value::Int(250)));
//!
//! // Null removes.
//! vars.set("gold", Value::Null);
//! assert!(!vars.has("gold"));
//! ```

mod error;
mod value;
mod variables;

pub use error::{Result, VarError};
pub use value::{FromValue, Value, VarType};
pub use variables::Variables;
