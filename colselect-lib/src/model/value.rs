//! Option identifier

use std::cmp::Ordering;
use std::fmt;
use std::hash::Hash;
use std::hash::Hasher;

use serde::Deserialize;
use serde::Deserializer;
use serde::Serialize;

/// The identifier of one option within a catalog.
///
/// An identifier is either a number or a piece of text. Equality is
/// structural, so `Value::from(1)` and `Value::from("1")` are different
/// identifiers. Fractional numbers are kept as [`Value::Float`]; integral
/// ones always become [`Value::Number`], so `1` and `1.0` name the same
/// option.
///
/// # Ordering
///
/// Numbers sort before text. Numbers compare numerically and text compares
/// lexicographically, which is the order used when select-all sorts the
/// selection.
///
/// # Example
///
/// ```
/// use colselect_lib::model::Value;
///
/// let mut values = vec![Value::from("b"), Value::from(10), Value::from(2.5), Value::from("a")];
/// values.sort();
/// assert_eq!(values, vec![Value::from(2.5), Value::from(10), Value::from("a"), Value::from("b")]);
/// ```
#[derive(Debug, Clone, Serialize)]
#[serde(untagged)]
pub enum Value {
    /// Integral identifier.
    Number(i64),
    /// Fractional identifier. Compared and hashed by bit pattern.
    Float(f64),
    /// Text identifier.
    Text(String),
}

#[derive(Deserialize)]
#[serde(untagged, expecting = "an option value (number or string)")]
enum RawValue {
    Number(i64),
    Float(f64),
    Text(String),
}

impl<'de> Deserialize<'de> for Value {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        Ok(match RawValue::deserialize(deserializer)? {
            RawValue::Number(n) => Value::Number(n),
            RawValue::Float(f) => Value::from(f),
            RawValue::Text(s) => Value::Text(s),
        })
    }
}

impl Value {
    /// Parses user input into an identifier.
    ///
    /// Input that reads as an integer becomes a [`Value::Number`], a finite
    /// decimal becomes a number too, anything else is kept verbatim as
    /// [`Value::Text`].
    pub fn parse(input: &str) -> Self {
        let trimmed = input.trim();
        if let Ok(n) = trimmed.parse::<i64>() {
            return Value::Number(n);
        }
        match trimmed.parse::<f64>() {
            Ok(f) if f.is_finite() => Value::from(f),
            _ => Value::Text(input.to_string()),
        }
    }

    /// Returns the number if this is an integral identifier.
    pub fn as_number(&self) -> Option<i64> {
        match self {
            Value::Number(n) => Some(*n),
            _ => None,
        }
    }

    /// Returns any numeric identifier as a float.
    pub fn as_f64(&self) -> Option<f64> {
        match self {
            Value::Number(n) => Some(*n as f64),
            Value::Float(f) => Some(*f),
            Value::Text(_) => None,
        }
    }

    /// Returns the text if this is a text identifier.
    pub fn as_text(&self) -> Option<&str> {
        match self {
            Value::Text(s) => Some(s),
            _ => None,
        }
    }
}

fn integral(f: f64) -> Option<i64> {
    // i64::MAX as f64 rounds up to 2^63, hence the strict upper bound
    if f.fract() == 0.0 && f >= i64::MIN as f64 && f < i64::MAX as f64 {
        Some(f as i64)
    } else {
        None
    }
}

fn cmp_number_float(n: i64, f: f64) -> Ordering {
    match integral(f) {
        // a Float holding an integral value only exists if built by hand
        Some(i) => n.cmp(&i).then(Ordering::Less),
        None => (n as f64).total_cmp(&f).then(Ordering::Less),
    }
}

impl PartialEq for Value {
    fn eq(&self, other: &Self) -> bool {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a == b,
            (Value::Float(a), Value::Float(b)) => a.to_bits() == b.to_bits(),
            (Value::Text(a), Value::Text(b)) => a == b,
            _ => false,
        }
    }
}

impl Eq for Value {}

impl Hash for Value {
    fn hash<H: Hasher>(&self, state: &mut H) {
        std::mem::discriminant(self).hash(state);
        match self {
            Value::Number(n) => n.hash(state),
            Value::Float(f) => f.to_bits().hash(state),
            Value::Text(s) => s.hash(state),
        }
    }
}

impl Ord for Value {
    fn cmp(&self, other: &Self) -> Ordering {
        match (self, other) {
            (Value::Number(a), Value::Number(b)) => a.cmp(b),
            (Value::Float(a), Value::Float(b)) => a.total_cmp(b),
            (Value::Number(a), Value::Float(b)) => cmp_number_float(*a, *b),
            (Value::Float(a), Value::Number(b)) => cmp_number_float(*b, *a).reverse(),
            (Value::Text(a), Value::Text(b)) => a.cmp(b),
            (Value::Text(_), _) => Ordering::Greater,
            (_, Value::Text(_)) => Ordering::Less,
        }
    }
}

impl PartialOrd for Value {
    fn partial_cmp(&self, other: &Self) -> Option<Ordering> {
        Some(self.cmp(other))
    }
}

impl fmt::Display for Value {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Value::Number(n) => write!(f, "{}", n),
            Value::Float(x) => write!(f, "{}", x),
            Value::Text(s) => write!(f, "{}", s),
        }
    }
}

// =============================================================================
// From implementations
// =============================================================================

impl From<i32> for Value {
    fn from(v: i32) -> Self {
        Value::Number(i64::from(v))
    }
}

impl From<i64> for Value {
    fn from(v: i64) -> Self {
        Value::Number(v)
    }
}

impl From<u32> for Value {
    fn from(v: u32) -> Self {
        Value::Number(i64::from(v))
    }
}

impl From<f64> for Value {
    /// Integral floats (including `-0.0`) become [`Value::Number`].
    fn from(v: f64) -> Self {
        match integral(v) {
            Some(n) => Value::Number(n),
            None => Value::Float(v),
        }
    }
}

impl From<String> for Value {
    fn from(v: String) -> Self {
        Value::Text(v)
    }
}

impl From<&str> for Value {
    fn from(v: &str) -> Self {
        Value::Text(v.to_string())
    }
}
