//! Reply text sent back to the caller.

use super::UserId;

/// Uniform denial for every caller that is not the owner.
pub const ACCESS_DENIED: &str = "🚫 Access denied.";

/// Reply to `/list_admin` when the allow-list is empty.
pub const NO_ADMINS: &str = "No admins.";

/// Reply when the storage engine reported lock contention.
pub const STORAGE_BUSY: &str = "⏳ Storage is busy, please try again.";

/// Reply for any other storage failure.
pub const STORAGE_FAILURE: &str = "⚠️ Something went wrong, please try again later.";

pub fn format_added(user_id: UserId) -> String {
    format!("Added admin {user_id}")
}

pub fn format_removed(user_id: UserId) -> String {
    format!("Removed admin {user_id}")
}

/// Joins the ids with `", "`, or returns [`NO_ADMINS`] for an empty list.
pub fn format_admin_list(admins: &[UserId]) -> String {
    if admins.is_empty() {
        return NO_ADMINS.to_string();
    }

    admins
        .iter()
        .map(UserId::to_string)
        .collect::<Vec<_>>()
        .join(", ")
}
