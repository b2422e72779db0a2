#![warn(missing_docs)]
#![deny(unsafe_code)]
//! # iniview - Typed views over INI configuration
//!
//! iniview is a thin layer over an INI parser that exposes sections and keys
//! as typed values instead of raw strings:
//! - **Type inference** - `8080` reads as an integer, `on` as a boolean,
//!   `1.5` as a float, everything else as the unchanged string
//! - **Section views** - one cached, write-through view per section
//! - **Defaults** - caller-supplied fallbacks, written to the store the
//!   first time they are read
//!
//! File I/O, INI syntax, and serialization back to disk are delegated to
//! the underlying [`ini`] crate; iniview never parses INI text itself.
//!
//! ## Quick Start
//!
//! ```rust
//! let text = "\
//! [server]
//! host = example.com
//! port = 8080
//! tls = on
//! ";
//!
//! let mut conf = iniview::from_str(text).unwrap();
//! let server = conf.section("server");
//!
//! assert_eq!(server.get("host").unwrap().as_str(), Some("example.com"));
//! assert_eq!(server.get("port").unwrap().as_int(), Some(8080));
//! assert_eq!(server.get("tls").unwrap().as_bool(), Some(true));
//! ```
//!
//! ## Defaults
//!
//! A [`Defaults`] table fills in keys the file does not provide. The first
//! read of such a key writes it through to the backing store:
//!
//! ```rust
//! use iniview::{Defaults, Loader};
//!
//! let mut conf = Loader::new()
//!     .content("[misc]\none = 1\n")
//!     .defaults(Defaults::new().value("misc", "retries", 3))
//!     .load()
//!     .unwrap();
//!
//! assert_eq!(conf.get("misc", "retries").unwrap().as_int(), Some(3));
//! assert_eq!(conf.raw("misc", "retries").as_deref(), Some("3"));
//! ```
//!
//! ## Writes
//!
//! Setting a key updates the typed cache and the backing store in the same
//! call; persisting the store to disk stays with the [`ini`] crate
//! (see [`Config::into_ini`]):
//!
//! ```rust
//! let mut conf = iniview::from_str("[ui]\n").unwrap();
//! conf.section("ui").set("theme", "dark");
//! assert_eq!(conf.raw("ui", "theme").as_deref(), Some("dark"));
//! ```
//!
//! ## Entry Points
//!
//! - [`from_str`] - read configuration from inline text
//! - [`from_file`] - read configuration from a file
//! - [`Loader`] - combine a source with a [`Defaults`] table

pub(crate) mod config;
pub(crate) mod defaults;
pub(crate) mod error;
pub(crate) mod loader;
pub(crate) mod section;
pub(crate) mod value;

// ==========================================
// PUBLIC INTERFACE
// ==========================================

pub use config::Config;
pub use defaults::Defaults;
pub use error::Error;
pub use loader::Loader;
pub use section::Section;
pub use value::Value;

use std::path::Path;

/// Read configuration from inline INI text, with no defaults.
///
/// For defaults or file sources, use [`Loader`].
///
/// # Errors
///
/// Fails with [`Error::Parse`] when the backing parser rejects the text.
pub fn from_str(text: &str) -> Result<Config, Error> {
    Loader::new().content(text).load()
}

/// Read configuration from a file, with no defaults.
///
/// For defaults or inline sources, use [`Loader`].
///
/// # Errors
///
/// Fails with [`Error::Io`] when the file cannot be read and
/// [`Error::Parse`] when the backing parser rejects its contents.
pub fn from_file(path: impl AsRef<Path>) -> Result<Config, Error> {
    Loader::new().path(path.as_ref()).load()
}
