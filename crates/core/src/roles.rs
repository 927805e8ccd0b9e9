//! Well-known role name constants.
//!
//! These must match the `CHECK` constraint on `users.role`.

/// May create years and edit monthly figures.
pub const ROLE_ADMIN: &str = "admin";
/// Read-only access to the dashboard.
pub const ROLE_USER: &str = "user";

pub const VALID_ROLES: &[&str] = &[ROLE_ADMIN, ROLE_USER];

/// Validate that a role string is one of the known roles.
pub fn validate_role(role: &str) -> Result<(), String> {
    if VALID_ROLES.contains(&role) {
        Ok(())
    } else {
        Err(format!(
            "Invalid role '{role}'. Must be one of: {}",
            VALID_ROLES.join(", ")
        ))
    }
}

/// Human-readable account name shown next to the role in the dashboard header.
pub fn display_name(role: &str) -> &'static str {
    if role == ROLE_ADMIN {
        "JML Admin"
    } else {
        "JML User"
    }
}

/// Normalize a login name: surrounding whitespace is ignored and matching is
/// case-insensitive.
pub fn normalize_username(username: &str) -> String {
    username.trim().to_lowercase()
}
