use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// A stored user. `id` and `created_at` are assigned by the store.
#[derive(Clone, Debug, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: u64,
    pub first_name: String,
    pub last_name: String,
    pub email: String,
    pub created_at: DateTime<Utc>,
}

/// Client-supplied fields for create and update. Missing fields decode as
/// empty strings; `id`, `created_at` and any other keys are ignored.
#[derive(Clone, Debug, Default, PartialEq, Eq, Deserialize)]
#[serde(default)]
pub struct UserInput {
    pub first_name: String,
    pub last_name: String,
    pub email: String,
}

impl User {
    pub(crate) fn new(id: u64, input: UserInput, created_at: DateTime<Utc>) -> Self {
        Self {
            id,
            first_name: input.first_name,
            last_name: input.last_name,
            email: input.email,
            created_at,
        }
    }

    /// Partial merge: each non-empty incoming field replaces the stored one.
    pub(crate) fn merge(&mut self, input: &UserInput) {
        overwrite(&mut self.first_name, &input.first_name);
        overwrite(&mut self.last_name, &input.last_name);
        overwrite(&mut self.email, &input.email);
    }
}

fn overwrite(field: &mut String, incoming: &str) {
    if !incoming.is_empty() {
        incoming.clone_into(field);
    }
}
