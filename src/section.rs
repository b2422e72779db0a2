//! Per-section views with typed, write-through value caches.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use ini::{Ini, Properties};

use crate::error::Error;
use crate::value::Value;

/// The backing store handle shared between a [`Config`](crate::Config) and
/// its section views. Single-threaded by design; a `Config` and its views
/// assume exclusive access.
pub(crate) type SharedIni = Rc<RefCell<Ini>>;

/// A typed view over one `[section]` of the backing store.
///
/// On materialization every key already stored in the section is loaded and
/// typed via [`Value::guess`]. Reads hit the typed cache; a read of a key
/// that is absent from the store but covered by a default materializes the
/// default, writing it through to the store. Writes update the store (as
/// text) and the cache (typed) in the same call, so no reload or save step
/// is needed for consistency.
///
/// The view's own identity (its name, its store handle, its pending
/// defaults) lives in dedicated fields, never in the value cache, so a
/// configuration key can never collide with it.
#[derive(Debug)]
pub struct Section {
    name: String,
    store: SharedIni,
    /// Defaults for this section not yet requested. Moved into `values`
    /// (and written through) on first read.
    pending: IndexMap<String, Value>,
    /// Typed values loaded so far, in store order.
    values: IndexMap<String, Value>,
}

impl Section {
    /// Build the view for `name`, creating the section in the store if it
    /// does not exist and loading every stored key into the typed cache.
    pub(crate) fn materialize(
        name: &str,
        store: SharedIni,
        pending: IndexMap<String, Value>,
    ) -> Self {
        let mut values = IndexMap::new();
        {
            let mut ini = store.borrow_mut();
            let props = ini
                .entry(Some(name.to_string()))
                .or_insert(Properties::new());
            for (key, raw) in props.iter() {
                values.insert(key.to_string(), Value::guess(raw));
            }
        }
        tracing::debug!(
            section = name,
            keys = values.len(),
            defaults = pending.len(),
            "materialized section view"
        );
        Section {
            name: name.to_string(),
            store,
            pending,
            values,
        }
    }

    /// The section's name.
    pub fn name(&self) -> &str {
        &self.name
    }

    /// Read the typed value of `key`.
    ///
    /// A key missing from both the cache and the defaults fails with
    /// [`Error::NoSuchOption`]; a key covered by a default is written
    /// through to the store and cached before it is returned.
    pub fn get(&mut self, key: &str) -> Result<&Value, Error> {
        if self.values.contains_key(key) {
            return Ok(&self.values[key]);
        }
        match self.pending.shift_remove(key) {
            Some(fallback) => {
                self.write_through(key, &fallback);
                tracing::debug!(
                    section = %self.name,
                    key,
                    value = %fallback,
                    "materialized default"
                );
                Ok(self.values.entry(key.to_string()).or_insert(fallback))
            }
            None => Err(Error::no_such_option(&self.name, key, self.known_keys())),
        }
    }

    /// Set `key` to `value`.
    ///
    /// The string form goes to the backing store, the typed value to the
    /// cache. The previous type of the key, if any, is not consulted.
    pub fn set(&mut self, key: impl Into<String>, value: impl Into<Value>) {
        let key = key.into();
        let value = value.into();
        self.write_through(&key, &value);
        tracing::trace!(section = %self.name, key = %key, value = %value, "set");
        self.values.insert(key, value);
    }

    /// Whether `key` is currently loaded in the typed cache.
    ///
    /// Defaults that have not been read yet do not count; they enter the
    /// cache on first [`get`](Section::get).
    pub fn contains_key(&self, key: &str) -> bool {
        self.values.contains_key(key)
    }

    /// The loaded keys, in store order.
    pub fn keys(&self) -> impl Iterator<Item = &str> {
        self.values.keys().map(String::as_str)
    }

    /// Iterate over the loaded `(key, value)` pairs, in store order.
    pub fn iter(&self) -> impl Iterator<Item = (&str, &Value)> {
        self.values.iter().map(|(k, v)| (k.as_str(), v))
    }

    /// Number of loaded keys.
    pub fn len(&self) -> usize {
        self.values.len()
    }

    /// Whether no keys are loaded.
    pub fn is_empty(&self) -> bool {
        self.values.is_empty()
    }

    fn write_through(&self, key: &str, value: &Value) {
        let mut ini = self.store.borrow_mut();
        let props = ini
            .entry(Some(self.name.clone()))
            .or_insert(Properties::new());
        props.insert(key, value.to_string());
    }

    /// Keys a failed lookup could have meant: everything loaded plus every
    /// default still pending.
    fn known_keys(&self) -> Vec<String> {
        self.values
            .keys()
            .chain(self.pending.keys())
            .cloned()
            .collect()
    }
}
