//! Deserializing name-keyed maps without letting a repeated key win.

use crate::Error;
use indexmap::IndexMap;
use serde::de::{self, Deserialize, Deserializer, MapAccess, Visitor};
use std::fmt;
use std::marker::PhantomData;

struct UniqueEntries<V> {
    on_duplicate: fn(&str) -> Error,
    marker: PhantomData<V>,
}

impl<'de, V: Deserialize<'de>> Visitor<'de> for UniqueEntries<V> {
    type Value = IndexMap<String, V>;

    fn expecting(&self, formatter: &mut fmt::Formatter) -> fmt::Result {
        formatter.write_str("a map with unique keys")
    }

    fn visit_map<A>(self, mut map: A) -> Result<Self::Value, A::Error>
    where
        A: MapAccess<'de>,
    {
        let mut entries = IndexMap::with_capacity(map.size_hint().unwrap_or(0));
        while let Some((key, value)) = map.next_entry::<String, V>()? {
            if entries.contains_key(&key) {
                return Err(de::Error::custom((self.on_duplicate)(&key)));
            }
            entries.insert(key, value);
        }
        Ok(entries)
    }
}

fn unique_entries<'de, D, V>(
    deserializer: D,
    on_duplicate: fn(&str) -> Error,
) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    deserializer.deserialize_map(UniqueEntries {
        on_duplicate,
        marker: PhantomData,
    })
}

pub(crate) fn unique_params<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    unique_entries(deserializer, Error::duplicate_parameter)
}

pub(crate) fn unique_tags<'de, D, V>(deserializer: D) -> Result<IndexMap<String, V>, D::Error>
where
    D: Deserializer<'de>,
    V: Deserialize<'de>,
{
    unique_entries(deserializer, Error::duplicate_tag)
}
