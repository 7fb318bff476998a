//! Typed values held by FVV nodes.
//!
//! [`FvvValue`] is the tagged union stored in every leaf: one of four scalar kinds,
//! four homogeneous array kinds, or empty. Groups always hold [`FvvValue::Empty`].
//!
//! ## Creating Values
//!
//! ```rust
//! use fvv::FvvValue;
//!
//! let flag = FvvValue::from(true);
//! let port = FvvValue::from(8080);
//! let ratio = FvvValue::from(0.75);
//! let name = FvvValue::from("alice");
//! let hosts = FvvValue::from(vec!["a", "b"]);
//!
//! assert!(flag.is_bool());
//! assert_eq!(port.as_int(), Some(8080));
//! assert_eq!(hosts.as_strs().map(|s| s.len()), Some(2));
//! ```
//!
//! ## Display
//!
//! `Display` renders the value as an FVV literal, the same text the printer emits in
//! `common` mode:
//!
//! ```rust
//! use fvv::FvvValue;
//!
//! assert_eq!(FvvValue::from(3.0).to_string(), "3.0");
//! assert_eq!(FvvValue::from(vec![1, 2]).to_string(), "[1, 2]");
//! assert_eq!(FvvValue::from("say \"hi\"").to_string(), "\"say \\\"hi\\\"\"");
//! ```

use crate::options::PrintMode;
use serde::{Deserialize, Deserializer, Serialize, Serializer};
use std::fmt;

/// A value stored in an FVV node.
///
/// # Examples
///
/// ```rust
/// use fvv::{FvvValue, ValueKind};
///
/// let value = FvvValue::Ints(vec![1, 2, 3]);
/// assert_eq!(value.kind(), ValueKind::Ints);
/// assert_eq!(value.as_ints(), Some(&[1, 2, 3][..]));
/// assert_eq!(value.as_int(), None);
/// ```
#[derive(Clone, Debug, PartialEq, Default)]
pub enum FvvValue {
    #[default]
    Empty,
    Bool(bool),
    Int(i64),
    Double(f64),
    String(String),
    Bools(Vec<bool>),
    Ints(Vec<i64>),
    Doubles(Vec<f64>),
    Strings(Vec<String>),
}

/// The tag of an [`FvvValue`], without its payload.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Hash)]
pub enum ValueKind {
    Empty,
    Bool,
    Int,
    Double,
    String,
    Bools,
    Ints,
    Doubles,
    Strings,
}

impl ValueKind {
    /// Human-readable name of the kind, as used in diagnostics.
    #[must_use]
    pub const fn as_str(&self) -> &'static str {
        match self {
            ValueKind::Empty => "empty",
            ValueKind::Bool => "bool",
            ValueKind::Int => "int",
            ValueKind::Double => "double",
            ValueKind::String => "string",
            ValueKind::Bools => "bool array",
            ValueKind::Ints => "int array",
            ValueKind::Doubles => "double array",
            ValueKind::Strings => "string array",
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        matches!(
            self,
            ValueKind::Bools | ValueKind::Ints | ValueKind::Doubles | ValueKind::Strings
        )
    }
}

impl fmt::Display for ValueKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(self.as_str())
    }
}

impl FvvValue {
    #[must_use]
    pub const fn kind(&self) -> ValueKind {
        match self {
            FvvValue::Empty => ValueKind::Empty,
            FvvValue::Bool(_) => ValueKind::Bool,
            FvvValue::Int(_) => ValueKind::Int,
            FvvValue::Double(_) => ValueKind::Double,
            FvvValue::String(_) => ValueKind::String,
            FvvValue::Bools(_) => ValueKind::Bools,
            FvvValue::Ints(_) => ValueKind::Ints,
            FvvValue::Doubles(_) => ValueKind::Doubles,
            FvvValue::Strings(_) => ValueKind::Strings,
        }
    }

    #[inline]
    #[must_use]
    pub const fn is_empty(&self) -> bool {
        matches!(self, FvvValue::Empty)
    }

    #[inline]
    #[must_use]
    pub const fn is_bool(&self) -> bool {
        matches!(self, FvvValue::Bool(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_int(&self) -> bool {
        matches!(self, FvvValue::Int(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_double(&self) -> bool {
        matches!(self, FvvValue::Double(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_string(&self) -> bool {
        matches!(self, FvvValue::String(_))
    }

    #[inline]
    #[must_use]
    pub const fn is_array(&self) -> bool {
        self.kind().is_array()
    }

    #[inline]
    #[must_use]
    pub fn as_bool(&self) -> Option<bool> {
        match self {
            FvvValue::Bool(b) => Some(*b),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_int(&self) -> Option<i64> {
        match self {
            FvvValue::Int(i) => Some(*i),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_double(&self) -> Option<f64> {
        match self {
            FvvValue::Double(f) => Some(*f),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_str(&self) -> Option<&str> {
        match self {
            FvvValue::String(s) => Some(s),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_bools(&self) -> Option<&[bool]> {
        match self {
            FvvValue::Bools(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_ints(&self) -> Option<&[i64]> {
        match self {
            FvvValue::Ints(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_doubles(&self) -> Option<&[f64]> {
        match self {
            FvvValue::Doubles(v) => Some(v),
            _ => None,
        }
    }

    #[inline]
    #[must_use]
    pub fn as_strs(&self) -> Option<&[String]> {
        match self {
            FvvValue::Strings(v) => Some(v),
            _ => None,
        }
    }

    /// Builds an array from scalar values, typed by the first element.
    ///
    /// Elements that do not match the first element's kind are dropped, except that
    /// integers are widened inside a double array. Returns [`FvvValue::Empty`] when
    /// the first element is not a scalar or there are no elements.
    ///
    /// # Examples
    ///
    /// ```rust
    /// use fvv::FvvValue;
    ///
    /// let mixed = vec![FvvValue::from(1), FvvValue::from(2.5), FvvValue::from(3)];
    /// assert_eq!(FvvValue::from_scalars(mixed), FvvValue::Ints(vec![1, 3]));
    ///
    /// let widened = vec![FvvValue::from(0.5), FvvValue::from(2)];
    /// assert_eq!(FvvValue::from_scalars(widened), FvvValue::Doubles(vec![0.5, 2.0]));
    /// ```
    #[must_use]
    pub fn from_scalars(elements: Vec<FvvValue>) -> FvvValue {
        let kind = match elements.first() {
            Some(first) => first.kind(),
            None => return FvvValue::Empty,
        };

        match kind {
            ValueKind::Bool => {
                FvvValue::Bools(elements.iter().filter_map(FvvValue::as_bool).collect())
            }
            ValueKind::Int => {
                FvvValue::Ints(elements.iter().filter_map(FvvValue::as_int).collect())
            }
            ValueKind::Double => FvvValue::Doubles(
                elements
                    .iter()
                    .filter_map(|v| match v {
                        FvvValue::Double(f) => Some(*f),
                        FvvValue::Int(i) => Some(*i as f64),
                        _ => None,
                    })
                    .collect(),
            ),
            ValueKind::String => FvvValue::Strings(
                elements
                    .into_iter()
                    .filter_map(|v| match v {
                        FvvValue::String(s) => Some(s),
                        _ => None,
                    })
                    .collect(),
            ),
            _ => FvvValue::Empty,
        }
    }
}

impl fmt::Display for FvvValue {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        let mut out = String::new();
        crate::ser::write_literal(&mut out, self, PrintMode::Common);
        f.write_str(&out)
    }
}

impl Serialize for FvvValue {
    fn serialize<S>(&self, serializer: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match self {
            FvvValue::Empty => serializer.serialize_unit(),
            FvvValue::Bool(b) => serializer.serialize_bool(*b),
            FvvValue::Int(i) => serializer.serialize_i64(*i),
            FvvValue::Double(f) => serializer.serialize_f64(*f),
            FvvValue::String(s) => serializer.serialize_str(s),
            FvvValue::Bools(v) => v.serialize(serializer),
            FvvValue::Ints(v) => v.serialize(serializer),
            FvvValue::Doubles(v) => v.serialize(serializer),
            FvvValue::Strings(v) => v.serialize(serializer),
        }
    }
}

impl<'de> Deserialize<'de> for FvvValue {
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        deserializer.deserialize_any(FvvValueVisitor)
    }
}

pub(crate) struct FvvValueVisitor;

impl<'de> serde::de::Visitor<'de> for FvvValueVisitor {
    type Value = FvvValue;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a bool, number, string, or array of scalars")
    }

    fn visit_bool<E>(self, value: bool) -> Result<Self::Value, E> {
        Ok(FvvValue::Bool(value))
    }

    fn visit_i64<E>(self, value: i64) -> Result<Self::Value, E> {
        Ok(FvvValue::Int(value))
    }

    fn visit_u64<E>(self, value: u64) -> Result<Self::Value, E> {
        match i64::try_from(value) {
            Ok(i) => Ok(FvvValue::Int(i)),
            Err(_) => Ok(FvvValue::Double(value as f64)),
        }
    }

    fn visit_f64<E>(self, value: f64) -> Result<Self::Value, E> {
        Ok(FvvValue::Double(value))
    }

    fn visit_str<E>(self, value: &str) -> Result<Self::Value, E> {
        Ok(FvvValue::String(value.to_string()))
    }

    fn visit_string<E>(self, value: String) -> Result<Self::Value, E> {
        Ok(FvvValue::String(value))
    }

    fn visit_unit<E>(self) -> Result<Self::Value, E> {
        Ok(FvvValue::Empty)
    }

    fn visit_none<E>(self) -> Result<Self::Value, E> {
        Ok(FvvValue::Empty)
    }

    fn visit_some<D>(self, deserializer: D) -> Result<Self::Value, D::Error>
    where
        D: Deserializer<'de>,
    {
        Deserialize::deserialize(deserializer)
    }

    fn visit_seq<A>(self, mut seq: A) -> Result<Self::Value, A::Error>
    where
        A: serde::de::SeqAccess<'de>,
    {
        let mut elements = Vec::new();
        while let Some(elem) = seq.next_element::<FvvValue>()? {
            elements.push(elem);
        }
        Ok(FvvValue::from_scalars(elements))
    }
}

impl From<bool> for FvvValue {
    fn from(value: bool) -> Self {
        FvvValue::Bool(value)
    }
}

impl From<i32> for FvvValue {
    fn from(value: i32) -> Self {
        FvvValue::Int(value as i64)
    }
}

impl From<i64> for FvvValue {
    fn from(value: i64) -> Self {
        FvvValue::Int(value)
    }
}

impl From<u32> for FvvValue {
    fn from(value: u32) -> Self {
        FvvValue::Int(value as i64)
    }
}

impl From<f64> for FvvValue {
    fn from(value: f64) -> Self {
        FvvValue::Double(value)
    }
}

impl From<String> for FvvValue {
    fn from(value: String) -> Self {
        FvvValue::String(value)
    }
}

impl From<&str> for FvvValue {
    fn from(value: &str) -> Self {
        FvvValue::String(value.to_string())
    }
}

impl From<Vec<bool>> for FvvValue {
    fn from(value: Vec<bool>) -> Self {
        FvvValue::Bools(value)
    }
}

impl From<Vec<i32>> for FvvValue {
    fn from(value: Vec<i32>) -> Self {
        FvvValue::Ints(value.into_iter().map(i64::from).collect())
    }
}

impl From<Vec<i64>> for FvvValue {
    fn from(value: Vec<i64>) -> Self {
        FvvValue::Ints(value)
    }
}

impl From<Vec<f64>> for FvvValue {
    fn from(value: Vec<f64>) -> Self {
        FvvValue::Doubles(value)
    }
}

impl From<Vec<String>> for FvvValue {
    fn from(value: Vec<String>) -> Self {
        FvvValue::Strings(value)
    }
}

impl From<Vec<&str>> for FvvValue {
    fn from(value: Vec<&str>) -> Self {
        FvvValue::Strings(value.into_iter().map(str::to_string).collect())
    }
}
