//! # Domain models for the user directory
//!
//! Defines the record type managed by [`crate::Directory`] and displayed by the
//! Users view. These types are `Serialize + Deserialize` so the API crate can
//! build them straight from decoded wire payloads.
//!
//! ## Types
//!
//! | Struct | Represents |
//! |--------|-----------|
//! | [`User`] | A single directory entry. Carries the numeric `id` (unique within one working set), the display `name`, the contact `email`, the `city` (flattened from the remote payload's nested address), and the account [`Status`]. |
//! | [`Status`] | Whether the account is `Active` or `Inactive`. Serialized lowercase, matching both the remote convention and the values of the status filter control. |

use serde::{Deserialize, Serialize};

/// One user entry in the working set.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    /// Unique within the working set. Remote records keep their server id;
    /// locally created records get one from [`crate::Directory`]'s counter.
    pub id: u64,
    pub name: String,
    pub email: String,
    /// City only; the rest of the remote address is not carried.
    pub city: String,
    pub status: Status,
}

/// Account status shown in the table and used by the status filter.
#[derive(Clone, Copy, Debug, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Status {
    Active,
    Inactive,
}

impl Status {
    /// Lowercase label, identical to the serialized form.
    pub fn as_str(&self) -> &'static str {
        match self {
            Status::Active => "active",
            Status::Inactive => "inactive",
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn status_serializes_lowercase() {
        assert_eq!(serde_json::to_string(&Status::Active).unwrap(), "\"active\"");
        assert_eq!(
            serde_json::from_str::<Status>("\"inactive\"").unwrap(),
            Status::Inactive
        );
    }

    #[test]
    fn status_labels_match_serialized_form() {
        assert_eq!(Status::Active.as_str(), "active");
        assert_eq!(Status::Inactive.as_str(), "inactive");
    }
}
