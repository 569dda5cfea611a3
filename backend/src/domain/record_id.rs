//! Store-assigned record identifiers.
//!
//! Users and products are keyed by UUIDs generated when a record is first
//! persisted. Each collection gets its own newtype so a product identifier
//! can never be handed to the user repository by mistake.

use std::fmt;
use std::str::FromStr;

use serde::{Deserialize, Serialize};
use uuid::Uuid;

/// Validation errors returned when parsing an identifier from text.
#[derive(Debug, Clone, PartialEq, Eq, thiserror::Error)]
pub enum RecordIdError {
    /// The input was empty.
    #[error("record id must not be empty")]
    Empty,
    /// The input was not a hyphenated UUID.
    #[error("record id `{value}` is not a valid UUID")]
    Invalid { value: String },
}

macro_rules! define_record_id {
    ($(#[$meta:meta])* $name:ident) => {
        $(#[$meta])*
        #[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, Serialize, Deserialize)]
        #[serde(transparent)]
        pub struct $name(Uuid);

        impl $name {
            /// Generate a new random identifier.
            #[must_use]
            pub fn random() -> Self {
                Self(Uuid::new_v4())
            }

            /// Wrap an existing UUID.
            #[must_use]
            pub const fn from_uuid(uuid: Uuid) -> Self {
                Self(uuid)
            }

            /// Access the underlying UUID.
            #[must_use]
            pub const fn as_uuid(&self) -> &Uuid {
                &self.0
            }
        }

        impl fmt::Display for $name {
            fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
                self.0.fmt(f)
            }
        }

        impl FromStr for $name {
            type Err = RecordIdError;

            fn from_str(s: &str) -> Result<Self, Self::Err> {
                parse_uuid(s).map(Self)
            }
        }
    };
}

fn parse_uuid(raw: &str) -> Result<Uuid, RecordIdError> {
    if raw.is_empty() {
        return Err(RecordIdError::Empty);
    }
    Uuid::parse_str(raw).map_err(|_| RecordIdError::Invalid {
        value: raw.to_owned(),
    })
}

define_record_id! {
    /// Identifier of a persisted user.
    ///
    /// # Examples
    /// ```
    /// use user_product_backend::domain::UserId;
    ///
    /// let id: UserId = "3fa85f64-5717-4562-b3fc-2c963f66afa6".parse().expect("valid id");
    /// assert_eq!(id.to_string(), "3fa85f64-5717-4562-b3fc-2c963f66afa6");
    /// ```
    UserId
}

define_record_id! {
    /// Identifier of a persisted product.
    ProductId
}

#[cfg(test)]
mod tests {
    use super::*;
    use rstest::rstest;

    #[rstest]
    #[case("", RecordIdError::Empty)]
    #[case("42", RecordIdError::Invalid { value: "42".to_owned() })]
    #[case("65f0c0ffee0000000000abcd", RecordIdError::Invalid { value: "65f0c0ffee0000000000abcd".to_owned() })]
    fn rejects_malformed_identifiers(#[case] raw: &str, #[case] expected: RecordIdError) {
        assert_eq!(raw.parse::<UserId>(), Err(expected));
    }

    #[rstest]
    fn serialises_as_plain_string() {
        let id: ProductId = "3fa85f64-5717-4562-b3fc-2c963f66afa6"
            .parse()
            .expect("valid id");
        let value = serde_json::to_value(id).expect("serialise id");
        assert_eq!(value, serde_json::json!("3fa85f64-5717-4562-b3fc-2c963f66afa6"));
    }

    #[rstest]
    fn random_identifiers_differ() {
        assert_ne!(UserId::random(), UserId::random());
    }
}
