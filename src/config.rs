//! The configuration root: section lookup, view caching, defaults.

use std::cell::RefCell;
use std::rc::Rc;

use indexmap::IndexMap;
use ini::Ini;

use crate::defaults::Defaults;
use crate::error::Error;
use crate::section::{Section, SharedIni};
use crate::value::Value;

/// A configuration source with typed, section-oriented access.
///
/// `Config` wraps an [`ini::Ini`] backing store and hands out one cached
/// [`Section`] view per section name. The same name always yields the same
/// view for the lifetime of the `Config`; a name with no stored section is
/// materialized as an empty one (see [`Config::section`]).
///
/// A `Config` is a single-threaded, in-process structure: it is neither
/// `Send` nor `Sync`, and all mutation happens through `&mut self`.
///
/// # Example
///
/// ```rust
/// let mut conf = iniview::from_str("[server]\nport = 8080\n").unwrap();
/// assert_eq!(conf.section("server").get("port").unwrap().as_int(), Some(8080));
/// ```
#[derive(Debug)]
pub struct Config {
    ini: SharedIni,
    defaults: Defaults,
    sections: IndexMap<String, Section>,
}

impl Default for Config {
    fn default() -> Self {
        Self::new()
    }
}

impl Config {
    /// An empty configuration with no defaults.
    pub fn new() -> Self {
        Self::with_parts(Ini::new(), Defaults::new())
    }

    /// Wrap an already-loaded backing store, with no defaults.
    ///
    /// Use [`Loader`](crate::Loader) to combine a source with a defaults
    /// table.
    pub fn from_ini(ini: Ini) -> Self {
        Self::with_parts(ini, Defaults::new())
    }

    pub(crate) fn with_parts(ini: Ini, defaults: Defaults) -> Self {
        Config {
            ini: Rc::new(RefCell::new(ini)),
            defaults,
            sections: IndexMap::new(),
        }
    }

    /// The typed view for `name`, materialized on first access.
    ///
    /// Accessing a name with no stored section creates it, empty, in the
    /// backing store; there is no failing variant of this lookup. Repeated
    /// calls return the identical cached view.
    pub fn section(&mut self, name: &str) -> &mut Section {
        if !self.sections.contains_key(name) {
            let pending = self.defaults.for_section(name);
            let view = Section::materialize(name, Rc::clone(&self.ini), pending);
            self.sections.insert(name.to_string(), view);
        }
        &mut self.sections[name]
    }

    /// Read the typed value of `key` in `section`.
    ///
    /// Shorthand for `self.section(section).get(key)`.
    pub fn get(&mut self, section: &str, key: &str) -> Result<&Value, Error> {
        self.section(section).get(key)
    }

    /// Set `key` in `section` to `value`, writing through to the store.
    pub fn set(&mut self, section: &str, key: impl Into<String>, value: impl Into<Value>) {
        self.section(section).set(key, value);
    }

    /// Whether the backing store currently holds a section named `name`.
    ///
    /// This inspects the store, not the view cache, so it reflects sections
    /// auto-created by earlier lookups.
    pub fn has_section(&self, name: &str) -> bool {
        self.ini.borrow().section(Some(name)).is_some()
    }

    /// The section names present in the backing store, in store order.
    pub fn section_names(&self) -> Vec<String> {
        self.ini
            .borrow()
            .iter()
            .filter_map(|(name, _)| name.map(String::from))
            .collect()
    }

    /// The raw string stored for `(section, key)`, if any.
    ///
    /// Typed reads go through [`Config::get`]; this exposes what the
    /// backing store would serialize, which is useful for observing
    /// write-through behavior.
    pub fn raw(&self, section: &str, key: &str) -> Option<String> {
        self.ini
            .borrow()
            .section(Some(section))
            .and_then(|props| props.get(key))
            .map(String::from)
    }

    /// The defaults table supplied at construction.
    pub fn defaults(&self) -> &Defaults {
        &self.defaults
    }

    /// Recover the backing store, e.g. to persist it with
    /// [`Ini::write_to_file`].
    ///
    /// Dropping the views first makes the handle unique; a clone is only
    /// taken in the (unreachable in practice) case where it is not.
    pub fn into_ini(self) -> Ini {
        let Config { ini, sections, .. } = self;
        drop(sections);
        match Rc::try_unwrap(ini) {
            Ok(cell) => cell.into_inner(),
            Err(shared) => shared.borrow().clone(),
        }
    }
}
