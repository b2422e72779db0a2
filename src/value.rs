//! Typed configuration values and scalar type inference.
//!
//! INI files store every value as text. [`Value::guess`] maps that text onto
//! the scalar type it most plausibly represents, so `port = 8080` reads back
//! as an integer and `tls = on` as a boolean without per-key getter calls.

use std::fmt;

/// A scalar configuration value with an inferred type.
#[derive(Debug, Clone, PartialEq)]
pub enum Value {
    /// A boolean value.
    Bool(bool),
    /// An integer value.
    Integer(i64),
    /// A floating-point value.
    Float(f64),
    /// A string value, kept exactly as stored.
    String(String),
}

/// Words that read as `true`, compared ASCII-case-insensitively.
const TRUE_WORDS: [&str; 3] = ["true", "yes", "on"];

/// Words that read as `false`, compared ASCII-case-insensitively.
const FALSE_WORDS: [&str; 3] = ["false", "no", "off"];

impl Value {
    /// Infer the type of a raw stored string.
    ///
    /// Tried in order, first match wins:
    ///
    /// 1. `true` / `yes` / `on` (any case) → `Bool(true)`
    /// 2. `false` / `no` / `off` (any case) → `Bool(false)`
    /// 3. a base-10 integer → `Integer`
    /// 4. a decimal or exponential float → `Float`
    /// 5. anything else → `String`, unchanged
    ///
    /// `"0"` becomes `Integer(0)`, not `Bool(false)`: zero/non-zero
    /// truthiness via [`Value::is_truthy`] behaves like the native number,
    /// which is semantically equivalent for condition tests without forcing
    /// a boolean type onto numeric keys. Whitespace is not stripped; a value
    /// like `" 42"` only parses if the numeric primitives accept it.
    pub fn guess(raw: &str) -> Value {
        if TRUE_WORDS.iter().any(|w| raw.eq_ignore_ascii_case(w)) {
            return Value::Bool(true);
        }
        if FALSE_WORDS.iter().any(|w| raw.eq_ignore_ascii_case(w)) {
            return Value::Bool(false);
        }
        if let Ok(n) = raw.parse::<i64>() {
            return Value::Integer(n);
        }
        if let Ok(x) = raw.parse::<f64>() {
            return Value::Float(x);
        }
        Value::String(raw.to_string())
    }

    /// The boolean value, if this is a `Bool`.
    pub fn as_bool(&self) -> Option<bool> {
        match *self {
            Value::Bool(b) => Some(b),
            _ => None,
        }
    }

    /// The integer value, if this is an `Integer`.
    pub fn as_int(&self) -> Option<i64> {
        match *self {
            Value::Integer(n) => Some(n),
            _ => None,
        }
    }

    /// The float value. Integers widen to `f64`.
    pub fn as_float(&self) -> Option<f64> {
        match *self {
            Value::Float(x) => Some(x),
            Value::Integer(n) => Some(n as f64),
            _ => None,
        }
    }

    /// The string value, if this is a `String`.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Value::String(s) => Some(s),
            _ => None,
        }
    }

    /// Zero/non-zero, empty/non-empty truthiness.
    ///
    /// `Bool` is itself, numbers are true when non-zero, strings when
    /// non-empty.
    pub fn is_truthy(&self) -> bool {
        match self {
            Value::Bool(b) => *b,
            Value::Integer(n) => *n != 0,
            Value::Float(x) => *x != 0.0,
            Value::String(s) => !s.is_empty(),
        }
    }

    /// A short name for the inferred type, for diagnostics.
    pub fn type_name(&self) -> &'static str {
        match self {
            Value::Bool(_) => "bool",
            Value::Integer(_) => "integer",
            Value::Float(_) => "float",
            Value::String(_) => "string",
        }
    }
}

/// The raw-store representation of the value.
///
/// This is the exact text written back to the backing store on a set, so a
/// reloaded file re-infers the same type: floats with no fractional part
/// keep a trailing `.0` (`6.0`, never `6`).
impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Bool(b) => write!(f, "{b}"),
            Value::Integer(n) => write!(f, "{n}"),
            Value::Float(x) if x.is_finite() && x.fract() == 0.0 => write!(f, "{x:.1}"),
            Value::Float(x) => write!(f, "{x}"),
            Value::String(s) => f.write_str(s),
        }
    }
}

impl From<bool> for Value {
    fn from(b: bool) -> Self {
        Value::Bool(b)
    }
}

impl From<i64> for Value {
    fn from(n: i64) -> Self {
        Value::Integer(n)
    }
}

impl From<i32> for Value {
    fn from(n: i32) -> Self {
        Value::Integer(n.into())
    }
}

impl From<f64> for Value {
    fn from(x: f64) -> Self {
        Value::Float(x)
    }
}

impl From<&str> for Value {
    fn from(s: &str) -> Self {
        Value::String(s.to_string())
    }
}

impl From<String> for Value {
    fn from(s: String) -> Self {
        Value::String(s)
    }
}
