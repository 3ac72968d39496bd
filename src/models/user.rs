use serde::{Deserialize, Serialize};
use surrealdb::sql::{Datetime, Thing};

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserRecord {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub username: String,
    pub password: String,
    /// Named group memberships; policy only recognizes "Administrator" and "User".
    pub groups: Vec<String>,
    pub is_superuser: bool,
    pub created_at: Datetime,
}

#[derive(Debug, Serialize, Deserialize, Clone)]
pub struct UserProfile {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub id: Option<Thing>,
    pub username: String,
    // no password
    pub groups: Vec<String>,
    pub is_superuser: bool,
    pub created_at: Datetime,
}

impl From<UserRecord> for UserProfile {
    fn from(user: UserRecord) -> Self {
        Self {
            id: user.id,
            username: user.username,
            groups: user.groups,
            is_superuser: user.is_superuser,
            created_at: user.created_at,
        }
    }
}
