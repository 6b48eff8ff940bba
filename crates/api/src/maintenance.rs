//! Startup maintenance tasks.

use newswire_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::{hash_password, HASH_PREFIX};
use crate::error::{AppError, AppResult};

/// Rehash any stored password that is not already a PHC argon2 string.
///
/// Rows imported from older systems can carry plaintext or foreign hash
/// formats; this sweep converts them in place at boot so the verify path
/// only ever sees argon2 hashes. Returns the number of rows rewritten.
pub async fn rehash_legacy_passwords(pool: &PgPool) -> AppResult<usize> {
    let users = UserRepo::list(pool)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error listing users for rehash sweep"))?;

    let mut rehashed = 0;
    for user in users {
        if user.password_hash.starts_with(HASH_PREFIX) {
            continue;
        }
        let hash = hash_password(&user.password_hash)
            .map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))?;
        UserRepo::update_password(pool, user.id, &hash)
            .await
            .inspect_err(|e| {
                tracing::error!(error = %e, id = user.id, "Error rehashing password")
            })?;
        tracing::info!(id = user.id, "Rehashed legacy password");
        rehashed += 1;
    }

    Ok(rehashed)
}
