//! Serde helpers for documents read back from a schema-flexible store
//!
//! Fields may be absent, `null`, or written by an older client with a
//! different representation. These helpers collapse all of that into the
//! strongly typed model.

use serde::{Deserialize, Deserializer};

/// Deserialize bool that treats null as true
pub fn bool_true<'de, D>(deserializer: D) -> Result<bool, D::Error>
where
    D: Deserializer<'de>,
{
    Option::<bool>::deserialize(deserializer).map(|opt| opt.unwrap_or(true))
}

/// Deserialize any `Default` type, treating null as the default
pub fn null_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Option::<T>::deserialize(deserializer).map(|opt| opt.unwrap_or_default())
}

/// Timestamp in Unix millis, tolerant of strings and garbage
///
/// Unparseable values become `None` instead of failing the whole document.
pub mod lenient_millis {
    use serde::{Deserialize, Deserializer, Serializer};

    use crate::types::Timestamp;

    pub fn serialize<S>(value: &Option<Timestamp>, s: S) -> Result<S::Ok, S::Error>
    where
        S: Serializer,
    {
        match value {
            Some(ms) => s.serialize_some(ms),
            None => s.serialize_none(),
        }
    }

    pub fn deserialize<'de, D>(d: D) -> Result<Option<Timestamp>, D::Error>
    where
        D: Deserializer<'de>,
    {
        let raw = serde_json::Value::deserialize(d)?;
        Ok(crate::util::parse_timestamp_millis(&raw))
    }
}
