//! Assembling a [`Config`] from a file, inline text, and defaults.

use std::path::PathBuf;

use ini::Ini;

use crate::config::Config;
use crate::defaults::Defaults;
use crate::error::Error;

/// Builder for a [`Config`].
///
/// Reading and parsing the source is entirely the backing parser's job;
/// the loader only decides which source to hand it and which defaults the
/// resulting [`Config`] carries.
///
/// An explicit [`path`](Loader::path) wins over inline
/// [`content`](Loader::content); with neither, the store starts empty.
///
/// # Example
///
/// ```rust
/// use iniview::{Defaults, Loader};
///
/// let mut conf = Loader::new()
///     .content("[misc]\none = 1\n")
///     .defaults(Defaults::new().value("misc", "six", 6))
///     .load()
///     .unwrap();
///
/// assert_eq!(conf.get("misc", "one").unwrap().as_int(), Some(1));
/// assert_eq!(conf.get("misc", "six").unwrap().as_int(), Some(6));
/// ```
#[derive(Debug, Default)]
pub struct Loader {
    path: Option<PathBuf>,
    content: Option<String>,
    defaults: Defaults,
}

impl Loader {
    /// Start with no source and no defaults.
    pub fn new() -> Self {
        Self::default()
    }

    /// Load from a file on disk.
    pub fn path(mut self, path: impl Into<PathBuf>) -> Self {
        self.path = Some(path.into());
        self
    }

    /// Load from inline text (avoids disk I/O, handy in tests).
    pub fn content(mut self, content: impl Into<String>) -> Self {
        self.content = Some(content.into());
        self
    }

    /// The defaults table the built [`Config`] will consult.
    pub fn defaults(mut self, defaults: Defaults) -> Self {
        self.defaults = defaults;
        self
    }

    /// Build the [`Config`].
    ///
    /// Fails only when the backing parser does: unreadable file
    /// ([`Error::Io`]) or malformed INI text ([`Error::Parse`]).
    pub fn load(self) -> Result<Config, Error> {
        let ini = if let Some(path) = &self.path {
            tracing::debug!(path = %path.display(), "loading configuration file");
            Ini::load_from_file(path)?
        } else if let Some(text) = &self.content {
            Ini::load_from_str(text)?
        } else {
            Ini::new()
        };
        Ok(Config::with_parts(ini, self.defaults))
    }
}
