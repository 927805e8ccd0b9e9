//! Startup provisioning of dashboard accounts.

use finboard_core::error::CoreError;
use finboard_core::roles::{normalize_username, validate_role};
use finboard_db::models::user::CreateUser;
use finboard_db::repositories::UserRepo;
use finboard_db::DbPool;

use crate::auth::password::{hash_password, validate_password_strength, MIN_PASSWORD_LENGTH};
use crate::config::AccountSeed;
use crate::error::{AppError, AppResult};

/// Create every configured account whose username is not taken yet.
///
/// Existing accounts are left untouched, including their password. Returns the
/// number of accounts created.
pub async fn provision_accounts(pool: &DbPool, accounts: &[AccountSeed]) -> AppResult<usize> {
    let mut created = 0;
    for seed in accounts {
        let username = normalize_username(&seed.username);
        if username.is_empty() {
            return Err(CoreError::Validation("Account username must not be empty".into()).into());
        }
        validate_role(seed.role).map_err(CoreError::Validation)?;
        validate_password_strength(&seed.password, MIN_PASSWORD_LENGTH)
            .map_err(|msg| CoreError::Validation(format!("Account '{username}': {msg}")))?;

        let password_hash = hash_password(&seed.password)
            .map_err(|e| AppError::InternalError(format!("Password hashing error: {e}")))?;

        let input = CreateUser {
            username: username.clone(),
            password_hash,
            role: seed.role.to_string(),
        };
        if UserRepo::create_if_absent(pool, &input).await? {
            tracing::info!(%username, role = seed.role, "Provisioned account");
            created += 1;
        } else {
            tracing::debug!(%username, "Account already exists, skipping");
        }
    }
    Ok(created)
}
