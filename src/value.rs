//! A self-describing value for heterogeneous data.
//!
//! Collection operations are generic over their element type. When the
//! elements of one collection are of different kinds (names next to ages,
//! nested arrays next to numbers), `Value` is the element type to use. It
//! implements every type class of [`typeclass`](crate::typeclass), following
//! the usual dynamic-language readings:
//!
//! | variant     | truthy          | numeric           | displayed as        |
//! |-------------|-----------------|-------------------|---------------------|
//! | `Undefined` | no              | `NaN`             | `undefined`         |
//! | `Null`      | no              | `0`               | `null`              |
//! | `Bool`      | its value       | `0` / `1`         | `true` / `false`    |
//! | `Number`    | not `0`/`NaN`   | itself            | shortest form       |
//! | `String`    | not empty       | parsed, or `NaN`  | itself              |
//! | `Array`     | yes             | `NaN`             | elements, `,`-joined|
//! | `Object`    | yes             | `NaN`             | `[object Object]`   |
//!
//! # Examples
//!
//! ```rust
//! use eachfold::Value;
//! use eachfold::typeclass::{Fields, Truthy};
//! use eachfold::record;
//!
//! let stooge = Value::from(record! { "name" => Value::from("moe"), "age" => Value::from(30) });
//! assert_eq!(stooge.field("age"), Some(Value::from(30)));
//! assert!(!Value::from("").is_truthy());
//! assert_eq!(Value::from(vec![1, 2, 3]).to_string(), "1,2,3");
//! ```

use std::fmt;

use crate::collection::Record;
use crate::typeclass::{Fields, Method, Methods, Nested, Numeric, Truthy, Undefined};

/// A dynamically typed value.
///
/// Equality is structural; numbers compare as `f64`, so `NaN` is never equal
/// to itself.
#[derive(Debug, Clone, Default, PartialEq, serde::Serialize)]
#[serde(untagged)]
pub enum Value {
    /// No value at all.
    #[default]
    Undefined,
    /// The explicit empty value.
    Null,
    /// A boolean.
    Bool(bool),
    /// A number.
    Number(f64),
    /// A string.
    String(String),
    /// An ordered sequence of values.
    Array(Vec<Value>),
    /// A record of named values.
    Object(Record<Value>),
}

impl Value {
    /// Returns the elements if this is an array.
    pub fn as_array(&self) -> Option<&[Self]> {
        match self {
            Self::Array(items) => Some(items),
            _ => None,
        }
    }

    /// Returns the record if this is an object.
    pub const fn as_object(&self) -> Option<&Record<Self>> {
        match self {
            Self::Object(record) => Some(record),
            _ => None,
        }
    }

    /// Returns the number if this is a number.
    pub const fn as_number(&self) -> Option<f64> {
        match self {
            Self::Number(number) => Some(*number),
            _ => None,
        }
    }

    /// Returns the string slice if this is a string.
    pub fn as_str(&self) -> Option<&str> {
        match self {
            Self::String(text) => Some(text),
            _ => None,
        }
    }
}

// =============================================================================
// Conversions
// =============================================================================

macro_rules! impl_from_number {
    ($($number:ty),* $(,)?) => {
        $(
            impl From<$number> for Value {
                #[inline]
                #[allow(clippy::cast_precision_loss, clippy::cast_lossless)]
                fn from(number: $number) -> Self {
                    Self::Number(number as f64)
                }
            }
        )*
    };
}

impl_from_number!(i8, i16, i32, i64, isize, u8, u16, u32, u64, usize, f32, f64);

impl From<bool> for Value {
    #[inline]
    fn from(flag: bool) -> Self {
        Self::Bool(flag)
    }
}

impl From<&str> for Value {
    #[inline]
    fn from(text: &str) -> Self {
        Self::String(text.to_string())
    }
}

impl From<String> for Value {
    #[inline]
    fn from(text: String) -> Self {
        Self::String(text)
    }
}

impl From<char> for Value {
    #[inline]
    fn from(character: char) -> Self {
        Self::String(character.to_string())
    }
}

impl<T: Into<Self>> From<Option<T>> for Value {
    /// `None` becomes [`Value::Undefined`].
    fn from(option: Option<T>) -> Self {
        option.map_or(Self::Undefined, Into::into)
    }
}

impl<T: Into<Self>> From<Vec<T>> for Value {
    fn from(items: Vec<T>) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl<T: Into<Self>, const N: usize> From<[T; N]> for Value {
    fn from(items: [T; N]) -> Self {
        Self::Array(items.into_iter().map(Into::into).collect())
    }
}

impl From<Record<Self>> for Value {
    #[inline]
    fn from(record: Record<Self>) -> Self {
        Self::Object(record)
    }
}

// =============================================================================
// Display
// =============================================================================

/// Writes a number the way a dynamic language prints it.
fn write_number(formatter: &mut fmt::Formatter<'_>, number: f64) -> fmt::Result {
    if number.is_infinite() {
        formatter.write_str(if number > 0.0 { "Infinity" } else { "-Infinity" })
    } else if number == 0.0 {
        formatter.write_str("0")
    } else {
        write!(formatter, "{number}")
    }
}

impl fmt::Display for Value {
    fn fmt(&self, formatter: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self {
            Self::Undefined => formatter.write_str("undefined"),
            Self::Null => formatter.write_str("null"),
            Self::Bool(flag) => write!(formatter, "{flag}"),
            Self::Number(number) => write_number(formatter, *number),
            Self::String(text) => formatter.write_str(text),
            Self::Array(items) => {
                for (position, item) in items.iter().enumerate() {
                    if position > 0 {
                        formatter.write_str(",")?;
                    }
                    // Absent elements print as nothing.
                    if !matches!(item, Self::Undefined | Self::Null) {
                        write!(formatter, "{item}")?;
                    }
                }
                Ok(())
            }
            Self::Object(_) => formatter.write_str("[object Object]"),
        }
    }
}

// =============================================================================
// Type classes
// =============================================================================

impl Truthy for Value {
    fn is_truthy(&self) -> bool {
        match self {
            Self::Undefined | Self::Null => false,
            Self::Bool(flag) => *flag,
            Self::Number(number) => number.is_truthy(),
            Self::String(text) => !text.is_empty(),
            Self::Array(_) | Self::Object(_) => true,
        }
    }
}

impl Numeric for Value {
    fn to_number(&self) -> f64 {
        match self {
            Self::Null => 0.0,
            Self::Bool(flag) => flag.to_number(),
            Self::Number(number) => *number,
            Self::String(text) => text.to_number(),
            Self::Undefined | Self::Array(_) | Self::Object(_) => f64::NAN,
        }
    }
}

impl Fields for Value {
    type Field = Self;

    fn field(&self, name: &str) -> Option<Self> {
        match self {
            Self::Object(record) => record.get(name).cloned(),
            Self::Array(items) if name == "length" => Some(Self::from(items.len())),
            Self::Array(items) => name
                .parse::<usize>()
                .ok()
                .and_then(|position| items.get(position))
                .cloned(),
            Self::String(text) => text.field(name).map(Self::from),
            _ => None,
        }
    }
}

impl Undefined for Value {
    #[inline]
    fn is_undefined(&self) -> bool {
        matches!(self, Self::Undefined)
    }
}

impl Nested for Value {
    #[inline]
    fn children(&self) -> Option<&[Self]> {
        self.as_array()
    }
}

/// Default element order of an array sort: by displayed text, undefined last.
fn compare_displayed(left: &Value, right: &Value) -> std::cmp::Ordering {
    match (left.is_undefined(), right.is_undefined()) {
        (true, true) => std::cmp::Ordering::Equal,
        (true, false) => std::cmp::Ordering::Greater,
        (false, true) => std::cmp::Ordering::Less,
        (false, false) => left.to_string().cmp(&right.to_string()),
    }
}

impl Methods<Self> for Value {
    type Output = Self;

    fn method(&self, name: &str) -> Option<Method<Self, Self, Self>> {
        let method: Method<Self, Self, Self> = match (self, name) {
            (_, "toString") => |receiver, _| Value::String(receiver.to_string()),
            (Self::String(_), "toUpperCase") => |receiver, _| {
                Value::from(receiver.as_str().map(str::to_uppercase))
            },
            (Self::String(_), "toLowerCase") => |receiver, _| {
                Value::from(receiver.as_str().map(str::to_lowercase))
            },
            (Self::String(_), "trim") => |receiver, _| {
                Value::from(receiver.as_str().map(str::trim))
            },
            (Self::Array(_), "sort") => |receiver, _| {
                let mut items = receiver.as_array().map(<[Value]>::to_vec).unwrap_or_default();
                items.sort_by(compare_displayed);
                Value::Array(items)
            },
            (Self::Array(_), "reverse") => |receiver, _| {
                let mut items = receiver.as_array().map(<[Value]>::to_vec).unwrap_or_default();
                items.reverse();
                Value::Array(items)
            },
            (Self::Array(_), "join") => |receiver, arguments| {
                let separator = arguments
                    .first()
                    .filter(|separator| !separator.is_undefined())
                    .map_or_else(|| ",".to_string(), ToString::to_string);
                let mut joined = String::new();
                for (position, item) in receiver.as_array().unwrap_or_default().iter().enumerate() {
                    if position > 0 {
                        joined.push_str(&separator);
                    }
                    if !matches!(item, Value::Undefined | Value::Null) {
                        joined.push_str(&item.to_string());
                    }
                }
                Value::String(joined)
            },
            (Self::Number(_), "toFixed") => |receiver, arguments| {
                let digits = arguments.first().map_or(0.0, Numeric::to_number);
                #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
                let digits = if digits.is_nan() { 0 } else { digits.clamp(0.0, 100.0) as usize };
                let number = receiver.as_number().unwrap_or(f64::NAN);
                Value::String(format!("{number:.digits$}"))
            },
            _ => return None,
        };
        Some(method)
    }
}
