//! Collection encoding.
//!
//! A collection is persisted as one JSON document: a plain ordered array of
//! record objects. No envelope, no version tag. Decoding is strict: the
//! top-level value must be an array and every element must be an object
//! with exactly the six record fields, all strings.

use std::fmt;

use serde::de::value::MapAccessDeserializer;
use serde::de::{Deserialize, Deserializer, MapAccess, Visitor};

use crate::error::{CoreError, Result};
use crate::record::Record;

/// Encode a collection as compact JSON.
pub fn encode_collection(records: &[Record]) -> Result<String> {
    serde_json::to_string(records).map_err(|e| CoreError::Encoding(e.to_string()))
}

/// Encode a collection as indented JSON. Same document shape as
/// [`encode_collection`].
pub fn encode_collection_pretty(records: &[Record]) -> Result<String> {
    serde_json::to_string_pretty(records).map_err(|e| CoreError::Encoding(e.to_string()))
}

/// Decode a collection.
///
/// Fails on anything that is not a well-formed array of record objects,
/// including `null`, a bare object, a record written as an array, a
/// repeated field, or trailing garbage.
pub fn decode_collection(raw: &str) -> Result<Vec<Record>> {
    let objects: Vec<RecordObject> =
        serde_json::from_str(raw).map_err(|e| CoreError::Decoding(e.to_string()))?;

    Ok(objects.into_iter().map(|RecordObject(record)| record).collect())
}

/// A record that only decodes from a JSON object.
///
/// The derived impl also accepts a positional array. This wrapper asks for a
/// map and hands the live map access to the derived impl, which keeps its
/// unknown-field and duplicate-field checks.
struct RecordObject(Record);

impl<'de> Deserialize<'de> for RecordObject {
    fn deserialize<D>(deserializer: D) -> std::result::Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        struct ObjectVisitor;

        impl<'de> Visitor<'de> for ObjectVisitor {
            type Value = Record;

            fn expecting(&self, f: &mut fmt::Formatter) -> fmt::Result {
                f.write_str("a record object")
            }

            fn visit_map<A>(self, map: A) -> std::result::Result<Record, A::Error>
            where
                A: MapAccess<'de>,
            {
                Record::deserialize(MapAccessDeserializer::new(map))
            }
        }

        deserializer.deserialize_map(ObjectVisitor).map(RecordObject)
    }
}
