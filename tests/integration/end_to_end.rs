//! The full scenario: typed reads, truthiness, defaults, and write-through
//! on a realistic configuration source.

use iniview::{Defaults, Loader, Value};

const SOURCE: &str = "\
[misc]
one = 1
onepointfive = 1.5
false = 0
true = true
gtf_separator = tests passed!
";

fn load() -> iniview::Config {
    Loader::new()
        .content(SOURCE)
        .defaults(
            Defaults::new()
                .value("misc", "six", 6)
                .value("foo", "bar", "baz"),
        )
        .load()
        .unwrap()
}

#[test]
fn test_stored_values_read_with_inferred_types() {
    let mut conf = load();
    let misc = conf.section("misc");

    assert_eq!(misc.get("one").unwrap(), &Value::Integer(1));
    assert_eq!(misc.get("onepointfive").unwrap(), &Value::Float(1.5));
    assert_eq!(misc.get("true").unwrap(), &Value::Bool(true));
    assert_eq!(
        misc.get("gtf_separator").unwrap(),
        &Value::String("tests passed!".to_string())
    );
}

#[test]
fn test_zero_is_integer_but_still_falsy() {
    let mut conf = load();
    let value = conf.get("misc", "false").unwrap();

    // A stored `0` is the integer zero, not boolean false...
    assert_eq!(value, &Value::Integer(0));
    // ...but condition tests on it behave the same way.
    assert!(!value.is_truthy());
}

#[test]
fn test_default_in_existing_section() {
    let mut conf = load();
    assert_eq!(conf.get("misc", "six").unwrap(), &Value::Integer(6));
    assert_eq!(conf.raw("misc", "six").as_deref(), Some("6"));
}

#[test]
fn test_default_in_absent_section_auto_creates_it() {
    let mut conf = load();
    assert!(!conf.has_section("foo"));

    assert_eq!(
        conf.get("foo", "bar").unwrap(),
        &Value::String("baz".to_string())
    );

    assert!(conf.has_section("foo"));
    assert_eq!(conf.raw("foo", "bar").as_deref(), Some("baz"));
}

#[test]
fn test_missing_key_with_no_default() {
    let mut conf = Loader::new().content(SOURCE).load().unwrap();
    let err = conf.get("misc", "nonexistent").unwrap_err();

    assert!(
        matches!(err, iniview::Error::NoSuchOption { .. }),
        "got {err:?}"
    );
    let message = err.to_string();
    assert!(message.contains("nonexistent"), "message: {message}");
    assert!(message.contains("misc"), "message: {message}");
}

#[test]
fn test_write_read_cycle_without_reload() {
    let mut conf = load();

    conf.section("misc").set("six", 7);
    assert_eq!(conf.get("misc", "six").unwrap(), &Value::Integer(7));
    assert_eq!(conf.raw("misc", "six").as_deref(), Some("7"));

    // Changing the type of an existing key is allowed.
    conf.section("misc").set("one", "not one anymore");
    assert_eq!(
        conf.get("misc", "one").unwrap(),
        &Value::String("not one anymore".to_string())
    );
}

#[test]
fn test_recovered_store_contains_everything() {
    let mut conf = load();
    conf.get("foo", "bar").unwrap();
    conf.section("misc").set("extra", 2.5);

    let ini = conf.into_ini();
    let misc = ini.section(Some("misc")).unwrap();
    assert_eq!(misc.get("one"), Some("1"));
    assert_eq!(misc.get("extra"), Some("2.5"));
    let foo = ini.section(Some("foo")).unwrap();
    assert_eq!(foo.get("bar"), Some("baz"));
}
