//! Request bodies that carry either one candidate or a batch of them.

use serde::de::DeserializeOwned;
use serde::{Deserialize, Deserializer};
use serde_json::Value;

/// One candidate record or an ordered batch of candidates.
///
/// Deserialises from either a JSON object or a JSON array of objects. The
/// two shapes are handled differently downstream: a single candidate aborts
/// on conflicts, a batch reports them and still persists the rest. An array
/// is always a batch; candidates are never decoded positionally.
///
/// # Examples
/// ```
/// use user_product_backend::domain::{Submission, UserCandidate};
///
/// let batch: Submission<UserCandidate> =
///     serde_json::from_str(r#"[{"name":"A","email":"a@x.com","age":30}]"#).expect("batch");
/// assert_eq!(batch.len(), 1);
/// assert!(batch.is_batch());
/// ```
#[derive(Debug, Clone, PartialEq)]
pub enum Submission<T> {
    /// Array-valued body.
    Batch(Vec<T>),
    /// Object-valued body.
    Single(T),
}

fn candidate<T, E>(value: Value) -> Result<T, E>
where
    T: DeserializeOwned,
    E: serde::de::Error,
{
    if !value.is_object() {
        return Err(E::custom(format!("expected a JSON object, found {value}")));
    }
    serde_json::from_value(value).map_err(E::custom)
}

impl<'de, T> Deserialize<'de> for Submission<T>
where
    T: DeserializeOwned,
{
    fn deserialize<D>(deserializer: D) -> Result<Self, D::Error>
    where
        D: Deserializer<'de>,
    {
        match Value::deserialize(deserializer)? {
            Value::Array(items) => items
                .into_iter()
                .map(candidate::<T, D::Error>)
                .collect::<Result<_, _>>()
                .map(Self::Batch),
            value => candidate::<T, D::Error>(value).map(Self::Single),
        }
    }
}

impl<T> Submission<T> {
    /// Whether the body was array-valued.
    pub fn is_batch(&self) -> bool {
        matches!(self, Self::Batch(_))
    }

    /// Number of candidates carried.
    pub fn len(&self) -> usize {
        match self {
            Self::Batch(items) => items.len(),
            Self::Single(_) => 1,
        }
    }

    /// Whether the submission carries no candidates (an empty batch).
    pub fn is_empty(&self) -> bool {
        self.len() == 0
    }
}
