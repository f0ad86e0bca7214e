use serde::{Deserialize, Deserializer, Serialize};
use sqlx::FromRow;

/// A single todo item.
///
/// Every field takes its zero value when absent or `null` in a JSON body, so
/// `{"title":""}` decodes and is rejected later by title validation rather
/// than by the decoder.
#[derive(Debug, Clone, Default, Serialize, Deserialize, PartialEq, Eq, FromRow)]
#[serde(default)]
pub struct Todo {
    #[serde(deserialize_with = "null_as_default")]
    pub id: i64,
    #[serde(deserialize_with = "null_as_default")]
    pub title: String,
    #[serde(deserialize_with = "null_as_default")]
    pub description: String,
    #[serde(deserialize_with = "null_as_default")]
    pub done: bool,
}

fn null_as_default<'de, D, T>(deserializer: D) -> Result<T, D::Error>
where
    D: Deserializer<'de>,
    T: Default + Deserialize<'de>,
{
    Ok(Option::<T>::deserialize(deserializer)?.unwrap_or_default())
}

impl Todo {
    pub fn new(title: impl Into<String>, description: impl Into<String>, done: bool) -> Self {
        Self {
            id: 0,
            title: title.into(),
            description: description.into(),
            done,
        }
    }

    /// Same record with `id` replaced.
    pub fn with_id(self, id: i64) -> Self {
        Self { id, ..self }
    }
}
