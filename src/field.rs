//! Tri-state fields for partial updates.
//!
//! The service distinguishes a field that is omitted from a PATCH body
//! (keep the current value) from one sent as explicit `null` (clear the
//! value). `Option` cannot express that difference, so update payloads use
//! [`Field`] together with `#[serde(skip_serializing_if = "Field::is_absent")]`.

use serde::de::{Deserialize, Deserializer};
use serde::ser::{Serialize, Serializer};

/// An update field that is absent, explicitly null, or set to a value.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub enum Field<T> {
    /// Not part of the request body; the service keeps the current value.
    #[default]
    Absent,
    /// Serialized as `null`; the service clears the value.
    Null,
    /// Serialized as the value itself.
    Value(T),
}

impl<T> Field<T> {
    /// `skip_serializing_if` guard for update payloads.
    pub fn is_absent(&self) -> bool {
        matches!(self, Field::Absent)
    }

    /// The contained value, if one is set.
    pub fn value(&self) -> Option<&T> {
        match self {
            Field::Value(value) => Some(value),
            _ => None,
        }
    }
}

impl<T> From<T> for Field<T> {
    fn from(value: T) -> Self {
        Field::Value(value)
    }
}

impl<T> From<Option<T>> for Field<T> {
    /// `Some` maps to a set value, `None` to an explicit clear.
    fn from(value: Option<T>) -> Self {
        match value {
            Some(value) => Field::Value(value),
            None => Field::Null,
        }
    }
}

impl<T: Serialize> Serialize for Field<T> {
    fn serialize<S: Serializer>(&self, serializer: S) -> Result<S::Ok, S::Error> {
        match self {
            // Absent is normally skipped before serialization; if it does
            // reach a serializer it behaves like an explicit null.
            Field::Absent | Field::Null => serializer.serialize_none(),
            Field::Value(value) => serializer.serialize_some(value),
        }
    }
}

impl<'de, T: Deserialize<'de>> Deserialize<'de> for Field<T> {
    fn deserialize<D: Deserializer<'de>>(deserializer: D) -> Result<Self, D::Error> {
        Ok(match Option::<T>::deserialize(deserializer)? {
            Some(value) => Field::Value(value),
            None => Field::Null,
        })
    }
}
