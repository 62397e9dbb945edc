//! The variable store.
//!
//! `Variables` maps names to [`Value`]s behind one mutex per instance. Every
//! operation, read or write, holds that mutex for its whole duration, so
//! concurrent callers observe each call as atomic.

use std::collections::HashMap;
use std::sync::{Mutex, MutexGuard, PoisonError};

use tracing::{debug, trace};

use crate::error::{Result, VarError};
use crate::value::{FromValue, Value};

#[derive(Debug, Default)]
struct Inner {
    vars: HashMap<String, Value>,
    /// Host-defined serialization of `vars`, dropped on every mutation.
    cache: Option<String>,
}

impl Inner {
    fn invalidate(&mut self) {
        if self.cache.take().is_some() {
            trace!("variable cache invalidated");
        }
    }
}

/// A thread-safe set of named, dynamically-typed variables.
///
/// # Example
///
/// ```rust
/// use hearth_vars::Variables;
///
/// let vars = Variables::new();
/// vars.set_int("level", 12);
/// vars.set_string("title", "Squire");
///
/// assert_eq!(vars.get_int("level", 0).unwrap(), 12);
/// assert_eq!(vars.get_int("missing", 1).unwrap(), 1);
///
/// // Asking for the wrong type is an error, not a silent default.
/// assert!(vars.get_int("title", 0).is_err());
/// ```
#[derive(Debug, Default)]
pub struct Variables {
    inner: Mutex<Inner>,
}

impl Variables {
    /// Create an empty store.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create an empty store with room for `capacity` variables.
    pub fn with_capacity(capacity: usize) -> Self {
        Self {
            inner: Mutex::new(Inner {
                vars: HashMap::with_capacity(capacity),
                cache: None,
            }),
        }
    }

    // Every critical section leaves `Inner` consistent, so a panic in another
    // holder can't have left it half-written.
    fn lock(&self) -> MutexGuard<'_, Inner> {
        self.inner.lock().unwrap_or_else(PoisonError::into_inner)
    }

    /// Number of stored variables.
    pub fn count(&self) -> usize {
        self.lock().vars.len()
    }

    /// Alias for [`count`](Self::count).
    pub fn len(&self) -> usize {
        self.count()
    }

    /// Returns true if no variables are stored.
    pub fn is_empty(&self) -> bool {
        self.lock().vars.is_empty()
    }

    /// Returns true if a variable with the given name exists.
    pub fn has(&self, name: &str) -> bool {
        self.lock().vars.contains_key(name)
    }

    /// Names of all stored variables, sorted.
    pub fn names(&self) -> Vec<String> {
        let mut names: Vec<String> = self.lock().vars.keys().cloned().collect();
        names.sort();
        names
    }

    /// Get the raw value of a variable, or `None` if it doesn't exist.
    pub fn get(&self, name: &str) -> Option<Value> {
        self.lock().vars.get(name).cloned()
    }

    /// Get a variable as `T`.
    ///
    /// Returns `Ok(None)` if the variable doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::TypeMismatch`] if the variable exists but holds a
    /// different type.
    pub fn try_get<T: FromValue>(&self, name: &str) -> Result<Option<T>> {
        let converted = {
            let inner = self.lock();
            match inner.vars.get(name) {
                None => return Ok(None),
                Some(value) => T::from_value(value).ok_or_else(|| value.var_type()),
            }
        };

        converted
            .map(Some)
            .map_err(|actual| VarError::TypeMismatch {
                name: name.to_string(),
                requested: T::NAME,
                expected: T::TYPE,
                actual,
            })
    }

    /// Get a variable as `T`, or `default` if it doesn't exist.
    ///
    /// # Errors
    ///
    /// Returns [`VarError::TypeMismatch`] if the variable exists but holds a
    /// different type. The default is never substituted for a mismatch.
    pub fn get_or<T: FromValue>(&self, name: &str, default: T) -> Result<T> {
        Ok(self.try_get(name)?.unwrap_or(default))
    }

    /// Read a `Byte` variable. Any other stored kind is a type mismatch.
    pub fn get_byte(&self, name: &str, default: u8) -> Result<u8> {
        self.get_or(name, default)
    }

    /// Read a `Byte` variable, reinterpreting its bits as `i8`.
    pub fn get_sbyte(&self, name: &str, default: i8) -> Result<i8> {
        self.get_or(name, default)
    }

    /// Read a `Short` variable. Any other stored kind is a type mismatch.
    pub fn get_short(&self, name: &str, default: i16) -> Result<i16> {
        self.get_or(name, default)
    }

    /// Read a `Short` variable, reinterpreting its bits as `u16`.
    pub fn get_ushort(&self, name: &str, default: u16) -> Result<u16> {
        self.get_or(name, default)
    }

    /// Read an `Int` variable. Any other stored kind is a type mismatch.
    pub fn get_int(&self, name: &str, default: i32) -> Result<i32> {
        self.get_or(name, default)
    }

    /// Read an `Int` variable, reinterpreting its bits as `u32`.
    pub fn get_uint(&self, name: &str, default: u32) -> Result<u32> {
        self.get_or(name, default)
    }

    /// Read a `Long` variable. Any other stored kind is a type mismatch.
    pub fn get_long(&self, name: &str, default: i64) -> Result<i64> {
        self.get_or(name, default)
    }

    /// Read a `Long` variable, reinterpreting its bits as `u64`.
    pub fn get_ulong(&self, name: &str, default: u64) -> Result<u64> {
        self.get_or(name, default)
    }

    /// Read a `Float` variable. A `Double` is a type mismatch, not widened.
    pub fn get_float(&self, name: &str, default: f32) -> Result<f32> {
        self.get_or(name, default)
    }

    /// Read a `Double` variable. A `Float` is a type mismatch, not widened.
    pub fn get_double(&self, name: &str, default: f64) -> Result<f64> {
        self.get_or(name, default)
    }

    /// Read a `Bool` variable. Any other stored kind is a type mismatch.
    pub fn get_bool(&self, name: &str, default: bool) -> Result<bool> {
        self.get_or(name, default)
    }

    /// Read a `String` variable. Any other stored kind is a type mismatch.
    pub fn get_string(&self, name: &str, default: &str) -> Result<String> {
        Ok(self
            .try_get(name)?
            .unwrap_or_else(|| default.to_string()))
    }

    /// Read a `Bytes` variable. Any other stored kind is a type mismatch.
    pub fn get_bytes(&self, name: &str, default: &[u8]) -> Result<Vec<u8>> {
        Ok(self.try_get(name)?.unwrap_or_else(|| default.to_vec()))
    }

    /// Set a variable. Setting [`Value::Null`] (or `None`) removes it.
    pub fn set(&self, name: &str, value: impl Into<Value>) {
        let value = value.into();
        if value.is_null() {
            self.remove(name);
            return;
        }

        let mut inner = self.lock();
        trace!(name, var_type = %value.var_type(), "set variable");
        inner.vars.insert(name.to_string(), value);
        inner.invalidate();
    }

    /// Store a `Byte`.
    pub fn set_byte(&self, name: &str, value: u8) {
        self.set(name, value);
    }

    /// Store an `i8` as a `Byte` with the same bits.
    pub fn set_sbyte(&self, name: &str, value: i8) {
        self.set_byte(name, value as u8);
    }

    /// Store a `Short`.
    pub fn set_short(&self, name: &str, value: i16) {
        self.set(name, value);
    }

    /// Store a `u16` as a `Short` with the same bits.
    pub fn set_ushort(&self, name: &str, value: u16) {
        self.set_short(name, value as i16);
    }

    /// Store an `Int`.
    pub fn set_int(&self, name: &str, value: i32) {
        self.set(name, value);
    }

    /// Store a `u32` as an `Int` with the same bits.
    pub fn set_uint(&self, name: &str, value: u32) {
        self.set_int(name, value as i32);
    }

    /// Store a `Long`.
    pub fn set_long(&self, name: &str, value: i64) {
        self.set(name, value);
    }

    /// Store a `u64` as a `Long` with the same bits.
    pub fn set_ulong(&self, name: &str, value: u64) {
        self.set_long(name, value as i64);
    }

    /// Store a `Float`.
    pub fn set_float(&self, name: &str, value: f32) {
        self.set(name, value);
    }

    /// Store a `Double`.
    pub fn set_double(&self, name: &str, value: f64) {
        self.set(name, value);
    }

    /// Store a `Bool`.
    pub fn set_bool(&self, name: &str, value: bool) {
        self.set(name, value);
    }

    /// Store a `String`.
    pub fn set_string(&self, name: &str, value: impl Into<String>) {
        self.set(name, Value::String(value.into()));
    }

    /// Store a `Bytes` value.
    pub fn set_bytes(&self, name: &str, value: impl Into<Vec<u8>>) {
        self.set(name, Value::Bytes(value.into()));
    }

    /// Remove a variable, returning its value if it existed.
    pub fn remove(&self, name: &str) -> Option<Value> {
        let mut inner = self.lock();
        let removed = inner.vars.remove(name);
        if removed.is_some() {
            trace!(name, "removed variable");
        }
        inner.invalidate();
        removed
    }

    /// Remove every variable.
    pub fn clear(&self) {
        let mut inner = self.lock();
        inner.vars.clear();
        inner.invalidate();
    }

    /// Copy of all variables. Changes to the copy don't affect the store.
    pub fn snapshot(&self) -> HashMap<String, Value> {
        self.lock().vars.clone()
    }

    /// Merge the given variables into the store, overwriting on conflict.
    ///
    /// Existing variables not named in `entries` are kept. A `Null` entry
    /// removes its variable, same as [`set`](Self::set).
    pub fn load_all<I, K, V>(&self, entries: I)
    where
        I: IntoIterator<Item = (K, V)>,
        K: Into<String>,
        V: Into<Value>,
    {
        let mut inner = self.lock();
        let mut merged = 0usize;
        for (name, value) in entries {
            let name: String = name.into();
            let value = value.into();
            if value.is_null() {
                inner.vars.remove(&name);
            } else {
                inner.vars.insert(name, value);
            }
            merged += 1;
        }
        inner.invalidate();
        debug!(merged, total = inner.vars.len(), "loaded variables");
    }

    /// The cached serialized form of the variable set, if one is current.
    pub fn cache(&self) -> Option<String> {
        self.lock().cache.clone()
    }

    /// Replace the cached serialized form. Cleared by the next mutation.
    pub fn set_cache(&self, cache: Option<String>) {
        self.lock().cache = cache;
    }

    /// Return the cached serialized form, computing it with `render` if no
    /// mutation happened since it was last computed.
    ///
    /// `render` runs with the store locked and must not call back into it.
    pub fn cached_or_insert_with<F>(&self, render: F) -> String
    where
        F: FnOnce(&HashMap<String, Value>) -> String,
    {
        let mut inner = self.lock();
        if let Some(cache) = &inner.cache {
            return cache.clone();
        }
        let rendered = render(&inner.vars);
        inner.cache = Some(rendered.clone());
        rendered
    }
}

impl Clone for Variables {
    /// Copies the variables into a new store with its own lock and no cache.
    fn clone(&self) -> Self {
        Self {
            inner: Mutex::new(Inner {
                vars: self.snapshot(),
                cache: None,
            }),
        }
    }
}

impl<K: Into<String>, V: Into<Value>> FromIterator<(K, V)> for Variables {
    fn from_iter<I: IntoIterator<Item = (K, V)>>(iter: I) -> Self {
        let vars = Variables::new();
        vars.load_all(iter);
        vars
    }
}
