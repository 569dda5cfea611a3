//! Presence rule applied to submitted record fields.
//!
//! A required field counts as present only when it holds a non-default
//! value: absent or `null` fields, empty strings, numeric zero, and `NaN`
//! are all treated as missing. Whitespace is not trimmed.

/// Field value that can be checked against the presence rule.
pub trait Presence {
    /// Return `true` when the value satisfies the presence rule.
    fn is_present(&self) -> bool;
}

impl Presence for String {
    fn is_present(&self) -> bool {
        !self.is_empty()
    }
}

impl Presence for f64 {
    fn is_present(&self) -> bool {
        *self != 0.0 && !self.is_nan()
    }
}

impl<T: Presence> Presence for Option<T> {
    fn is_present(&self) -> bool {
        self.as_ref().is_some_and(Presence::is_present)
    }
}

/// Validation failure listing the required fields a candidate lacks.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
#[error("missing required fields: {}", .fields.join(", "))]
pub struct MissingFieldsError {
    /// Field names in declaration order.
    pub fields: Vec<&'static str>,
}

impl MissingFieldsError {
    /// Succeed when nothing is missing, otherwise report the gaps.
    pub fn check(fields: Vec<&'static str>) -> Result<(), Self> {
        if fields.is_empty() {
            Ok(())
        } else {
            Err(Self { fields })
        }
    }
}

/// Names of the fields in `fields` that fail the presence rule, in order.
///
/// # Examples
/// ```
/// use user_product_backend::domain::presence::{missing_fields, Presence};
///
/// let name = Some("Ada".to_owned());
/// let age: Option<f64> = Some(0.0);
/// let missing = missing_fields([("name", name.is_present()), ("age", age.is_present())]);
/// assert_eq!(missing, vec!["age"]);
/// ```
pub fn missing_fields<const N: usize>(fields: [(&'static str, bool); N]) -> Vec<&'static str> {
    fields
        .into_iter()
        .filter_map(|(name, present)| (!present).then_some(name))
        .collect()
}
