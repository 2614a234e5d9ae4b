use serde::{de::DeserializeOwned, Deserializer};
use std::fmt;
use std::marker::PhantomData;

struct JsonStringVisitor<T>(PhantomData<T>);

impl<'de, T: DeserializeOwned> serde::de::Visitor<'de> for JsonStringVisitor<T> {
    type Value = T;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a string containing json data")
    }

    fn visit_str<E>(self, v: &str) -> Result<Self::Value, E>
    where
        E: serde::de::Error,
    {
        serde_json::from_str(v).map_err(E::custom)
    }
}

/// Deserializes a field whose value is a string holding an encoded JSON document,
/// e.g. a queue message body or a topic envelope `Message`.
pub fn deserialize_json_string<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: DeserializeOwned,
{
    deserializer.deserialize_str(JsonStringVisitor(PhantomData))
}
