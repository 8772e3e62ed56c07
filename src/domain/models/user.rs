use serde::{Deserialize, Serialize};

/// A user-shaped value submitted by a caller, not yet validated or
/// persisted. Missing request fields decode to empty strings so the
/// validator can report them as required-field violations.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct NewUser {
    pub email: String,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

/// A persisted user record. The id is assigned by the store on insert and
/// is immutable thereafter.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct User {
    pub id: i64,
    pub email: String,
    pub user_name: String,
    pub first_name: Option<String>,
    pub last_name: Option<String>,
}

impl User {
    pub fn from_candidate(id: i64, candidate: &NewUser) -> Self {
        Self {
            id,
            email: candidate.email.clone(),
            user_name: candidate.user_name.clone(),
            first_name: candidate.first_name.clone(),
            last_name: candidate.last_name.clone(),
        }
    }
}
