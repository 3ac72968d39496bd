//! Role policy for management operations on the catalog.
//!
//! Pure predicates over the acting user's record, evaluated fresh on every
//! request. Management (admin list, create, update, delete) of artists,
//! albums and songs requires administrator standing.

use crate::models::user::UserRecord;

pub const ADMIN_GROUP: &str = "Administrator";
pub const USER_GROUP: &str = "User";

/// Superusers count as administrators regardless of group membership.
pub fn is_administrator(user: &UserRecord) -> bool {
    user.is_superuser || user.groups.iter().any(|group| group == ADMIN_GROUP)
}

pub fn is_standard_user(user: &UserRecord) -> bool {
    user.groups.iter().any(|group| group == USER_GROUP)
}
