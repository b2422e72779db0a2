//! Fallback values for keys absent from the backing store.

use indexmap::IndexMap;

use crate::value::Value;

/// A table of per-section fallback values.
///
/// Defaults are consulted only when a key is missing from the backing
/// store; the first read of such a key writes the default through to the
/// store. The table is fixed once a [`Config`](crate::Config) is built.
///
/// # Example
///
/// ```rust
/// use iniview::Defaults;
///
/// let defaults = Defaults::new()
///     .value("server", "port", 8080)
///     .value("server", "host", "localhost");
/// assert!(!defaults.is_empty());
/// ```
#[derive(Debug, Clone, Default)]
pub struct Defaults {
    sections: IndexMap<String, IndexMap<String, Value>>,
}

impl Defaults {
    /// Create an empty table.
    pub fn new() -> Self {
        Self::default()
    }

    /// Add a fallback value for `key` in `section`.
    pub fn value(
        mut self,
        section: impl Into<String>,
        key: impl Into<String>,
        value: impl Into<Value>,
    ) -> Self {
        self.sections
            .entry(section.into())
            .or_default()
            .insert(key.into(), value.into());
        self
    }

    /// Look up the fallback for `key` in `section`, if one was registered.
    pub fn get(&self, section: &str, key: &str) -> Option<&Value> {
        self.sections.get(section)?.get(key)
    }

    /// Whether the table holds no fallbacks at all.
    pub fn is_empty(&self) -> bool {
        self.sections.is_empty()
    }

    /// The fallbacks registered for one section, cloned for a materializing
    /// section view.
    pub(crate) fn for_section(&self, name: &str) -> IndexMap<String, Value> {
        self.sections.get(name).cloned().unwrap_or_default()
    }
}
