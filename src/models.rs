use serde::{Deserialize, Serialize};

/// Employee record as stored and exchanged over the API.
///
/// `id` is assigned by the store on first save and never changes afterwards.
/// Emails are unique across all stored records.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, Default)]
#[serde(rename_all = "camelCase")]
pub struct Employee {
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub id: Option<i64>,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl Employee {
    /// Build an unsaved employee (no id yet)
    pub fn new(
        first_name: impl Into<String>,
        last_name: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: None,
            first_name: first_name.into(),
            last_name: last_name.into(),
            email: email.into(),
        }
    }

    pub fn with_id(mut self, id: i64) -> Self {
        self.id = Some(id);
        self
    }

    /// Overwrite the mutable fields with the ones from `other`, keeping our id
    pub fn apply_update(&mut self, other: &Employee) {
        self.first_name = other.first_name.clone();
        self.last_name = other.last_name.clone();
        self.email = other.email.clone();
    }
}

/// Plain message body returned by operations without a resource payload
#[derive(Debug, Clone, Serialize, Deserialize)]
pub struct MessageResponse {
    pub message: String,
}
