//! Structured fields and the loosely typed arguments that produce them
//!
//! Logging calls take a slice of [`Arg`]s. An argument is either a ready
//! [`Field`] or a bare [`FieldValue`]; bare values are paired up as
//! alternating keys and values by [`normalize_args`].

use serde::{Deserialize, Serialize};
use std::fmt;

/// Value type for structured logging fields
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
#[serde(untagged)]
pub enum FieldValue {
    String(String),
    Int(i64),
    UInt(u64),
    Float(f64),
    Bool(bool),
    Null,
}

impl fmt::Display for FieldValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            FieldValue::String(s) => write!(f, "{}", s),
            FieldValue::Int(i) => write!(f, "{}", i),
            FieldValue::UInt(u) => write!(f, "{}", u),
            FieldValue::Float(fl) => write!(f, "{}", fl),
            FieldValue::Bool(b) => write!(f, "{}", b),
            FieldValue::Null => write!(f, "null"),
        }
    }
}

impl FieldValue {
    /// Convert to serde_json::Value for JSON serialization
    #[must_use]
    pub fn to_json_value(&self) -> serde_json::Value {
        match self {
            FieldValue::String(s) => serde_json::Value::String(s.clone()),
            FieldValue::Int(i) => serde_json::Value::Number((*i).into()),
            FieldValue::UInt(u) => serde_json::Value::Number((*u).into()),
            FieldValue::Float(f) => serde_json::Number::from_f64(*f)
                .map(serde_json::Value::Number)
                .unwrap_or(serde_json::Value::Null),
            FieldValue::Bool(b) => serde_json::Value::Bool(*b),
            FieldValue::Null => serde_json::Value::Null,
        }
    }

    pub fn as_str(&self) -> Option<&str> {
        match self {
            FieldValue::String(s) => Some(s),
            _ => None,
        }
    }
}

impl From<String> for FieldValue {
    fn from(s: String) -> Self {
        FieldValue::String(s)
    }
}

impl From<&str> for FieldValue {
    fn from(s: &str) -> Self {
        FieldValue::String(s.to_string())
    }
}

impl From<&String> for FieldValue {
    fn from(s: &String) -> Self {
        FieldValue::String(s.clone())
    }
}

macro_rules! signed_field_value {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(i: $t) -> Self {
                FieldValue::Int(i as i64)
            }
        })*
    };
}

macro_rules! unsigned_field_value {
    ($($t:ty),*) => {
        $(impl From<$t> for FieldValue {
            fn from(u: $t) -> Self {
                FieldValue::UInt(u as u64)
            }
        })*
    };
}

signed_field_value!(i8, i16, i32, i64, isize);
unsigned_field_value!(u8, u16, u32, u64, usize);

impl From<f32> for FieldValue {
    fn from(f: f32) -> Self {
        FieldValue::Float(f as f64)
    }
}

impl From<f64> for FieldValue {
    fn from(f: f64) -> Self {
        FieldValue::Float(f)
    }
}

impl From<bool> for FieldValue {
    fn from(b: bool) -> Self {
        FieldValue::Bool(b)
    }
}

impl<T: Into<FieldValue>> From<Option<T>> for FieldValue {
    fn from(value: Option<T>) -> Self {
        value.map(Into::into).unwrap_or(FieldValue::Null)
    }
}

/// A named value attached to a record
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Field {
    pub key: String,
    pub value: FieldValue,
}

impl Field {
    pub fn new<K, V>(key: K, value: V) -> Self
    where
        K: Into<String>,
        V: Into<FieldValue>,
    {
        Self {
            key: key.into(),
            value: value.into(),
        }
    }

    /// A field holding the `Display` rendering of `value`
    pub fn display<K: Into<String>>(key: K, value: impl fmt::Display) -> Self {
        Self::new(key, value.to_string())
    }

    /// An `error` field holding the error message
    pub fn error(err: &(dyn std::error::Error + 'static)) -> Self {
        Self::new("error", err.to_string())
    }
}

impl fmt::Display for Field {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{}={}", self.key, self.value)
    }
}

/// One argument to a logging call
#[derive(Debug, Clone, PartialEq)]
pub enum Arg {
    Field(Field),
    Value(FieldValue),
}

impl From<Field> for Arg {
    fn from(field: Field) -> Self {
        Arg::Field(field)
    }
}

impl From<FieldValue> for Arg {
    fn from(value: FieldValue) -> Self {
        Arg::Value(value)
    }
}

macro_rules! value_arg {
    ($($t:ty),*) => {
        $(impl From<$t> for Arg {
            fn from(v: $t) -> Self {
                Arg::Value(v.into())
            }
        })*
    };
}

value_arg!(
    String, &str, &String, i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64, bool
);

impl<T: Into<FieldValue>> From<Option<T>> for Arg {
    fn from(value: Option<T>) -> Self {
        Arg::Value(value.into())
    }
}

/// Turn call-site arguments into fields.
///
/// A single bare value becomes a field with an empty key. Otherwise bare
/// values are read as alternating keys and values: a non-string key is used
/// through its display form, and a key left without a value becomes a field
/// with an empty key. Ready fields pass through untouched.
pub fn normalize_args(args: &[Arg]) -> Vec<Field> {
    if let [Arg::Value(value)] = args {
        return vec![Field::new("", value.clone())];
    }

    let mut fields = Vec::with_capacity(args.len() / 2 + 1);
    let mut iter = args.iter().peekable();

    while let Some(arg) = iter.next() {
        match arg {
            Arg::Field(field) => fields.push(field.clone()),
            Arg::Value(key) => match iter.peek() {
                Some(Arg::Value(value)) => {
                    let key = match key {
                        FieldValue::String(s) => s.clone(),
                        other => other.to_string(),
                    };
                    fields.push(Field::new(key, value.clone()));
                    iter.next();
                }
                _ => fields.push(Field::new("", key.clone())),
            },
        }
    }

    fields
}
