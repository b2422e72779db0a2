//! Loading from files and the failure paths the backing parser surfaces.

use std::io::Write;

use iniview::Error;
use tempfile::NamedTempFile;

fn temp_ini(content: &str) -> NamedTempFile {
    let mut file = NamedTempFile::new().unwrap();
    write!(file, "{content}").unwrap();
    file
}

#[test]
fn test_from_file() {
    let file = temp_ini("[db]\nurl = sqlite://app.db\nmax_connections = 10\n");

    let mut conf = iniview::from_file(file.path()).unwrap();
    assert_eq!(
        conf.get("db", "url").unwrap().as_str(),
        Some("sqlite://app.db")
    );
    assert_eq!(conf.get("db", "max_connections").unwrap().as_int(), Some(10));
}

#[test]
fn test_from_file_missing_path() {
    let err = iniview::from_file("/nonexistent/dir/app.ini").unwrap_err();
    assert!(matches!(err, Error::Io(_)), "got {err:?}");

    // The collaborator's error is reachable through source().
    let source = std::error::Error::source(&err);
    assert!(source.is_some(), "io errors should carry a source");
}

#[test]
fn test_parse_error_names_the_problem() {
    let err = iniview::from_str("[section\nkey = value\n").unwrap_err();
    assert!(matches!(err, Error::Parse(_)), "got {err:?}");
    assert!(
        !err.to_string().is_empty(),
        "parse errors should render a message"
    );
}

#[test]
fn test_values_spanning_sections() {
    let file = temp_ini(
        "[first]\nenabled = yes\n\n[second]\nenabled = no\nthreshold = 0.75\n",
    );

    let mut conf = iniview::from_file(file.path()).unwrap();
    assert_eq!(conf.get("first", "enabled").unwrap().as_bool(), Some(true));
    assert_eq!(conf.get("second", "enabled").unwrap().as_bool(), Some(false));
    assert_eq!(
        conf.get("second", "threshold").unwrap().as_float(),
        Some(0.75)
    );
    assert_eq!(conf.section_names(), ["first", "second"]);
}
