use std::fmt;

use serde::{Deserialize, Serialize};
use sqlx::FromRow;

/// A row in the `users` table. The password is stored as-is; this tool
/// administers a legacy table that keeps plaintext credentials.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize, FromRow)]
pub struct UserRecord {
    pub id: i32, // assigned by the store on first save, 0 until then
    pub username: String,
    pub password: String,
    pub email: String,
}

impl UserRecord {
    /// A record that has not been persisted yet. The store assigns the id on
    /// the first successful save.
    pub fn new(
        username: impl Into<String>,
        password: impl Into<String>,
        email: impl Into<String>,
    ) -> Self {
        Self {
            id: 0,
            username: username.into(),
            password: password.into(),
            email: email.into(),
        }
    }
}

// One-line listing form; deliberately leaves the password out.
impl fmt::Display for UserRecord {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        write!(f, "#{} {} <{}>", self.id, self.username, self.email)
    }
}
