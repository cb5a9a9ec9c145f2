//! Lenient decoding of flow records.
//!
//! Object members are matched to fields ignoring ASCII case and applied in
//! document order, each one updating the value already decoded:
//! - a repeated member overwrites only what it sets, so the last value wins
//! - `null` leaves the current value untouched
//! - unknown members are skipped without being materialized
//!
//! Type mismatches (a string identity, a fractional port, an array where an
//! object is expected) are still errors.

use std::fmt;

use serde::de::{self, DeserializeSeed, Deserializer, IgnoredAny, MapAccess, Visitor};
use serde::Deserialize;

/// An object whose members can be decoded into an existing value.
pub(crate) trait MergeObject {
    const EXPECTING: &'static str;

    /// Decode the value for `key`, or skip it if no field matches.
    fn merge_entry<'de, A: MapAccess<'de>>(
        &mut self,
        key: &str,
        map: &mut A,
    ) -> Result<(), A::Error>;
}

/// Seed decoding into `&mut T` instead of producing a fresh value.
pub(crate) struct Merge<'a, T>(pub &'a mut T);

impl<'de, T: MergeObject> DeserializeSeed<'de> for Merge<'_, T> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        deserializer.deserialize_any(self)
    }
}

impl<'de, T: MergeObject> Visitor<'de> for Merge<'_, T> {
    type Value = ();

    fn expecting(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "{} or null", T::EXPECTING)
    }

    fn visit_unit<E: de::Error>(self) -> Result<(), E> {
        Ok(())
    }

    fn visit_map<A: MapAccess<'de>>(self, mut map: A) -> Result<(), A::Error> {
        while let Some(key) = map.next_key::<String>()? {
            self.0.merge_entry(&key, &mut map)?;
        }
        Ok(())
    }
}

/// Seed updating an integer field; `null` keeps the current value.
pub(crate) struct MergeInt<'a>(pub &'a mut i64);

impl<'de> DeserializeSeed<'de> for MergeInt<'_> {
    type Value = ();

    fn deserialize<D: Deserializer<'de>>(self, deserializer: D) -> Result<(), D::Error> {
        if let Some(value) = Option::<i64>::deserialize(deserializer)? {
            *self.0 = value;
        }
        Ok(())
    }
}

/// Skip the value of a member that maps to no field.
pub(crate) fn skip_value<'de, A: MapAccess<'de>>(map: &mut A) -> Result<(), A::Error> {
    map.next_value::<IgnoredAny>().map(|_| ())
}

/// Case-insensitive member name match.
pub(crate) fn is_field(key: &str, field: &str) -> bool {
    key.eq_ignore_ascii_case(field)
}
