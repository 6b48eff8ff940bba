//! User service.
//!
//! Owns password hashing, the duplicate-username rule on registration, and
//! the identity-scoped settings update. Identity always arrives as an
//! explicit parameter -- there is no ambient current-user lookup.

use newswire_core::error::CoreError;
use newswire_core::pagination::{Page, PageRequest};
use newswire_core::types::DbId;
use newswire_db::models::user::{self, NewUser, User, UserResponse};
use newswire_db::repositories::UserRepo;
use sqlx::PgPool;

use crate::auth::password::{hash_password, verify_password};
use crate::dto::{LoginDto, UserDto};
use crate::error::{AppError, AppResult};

/// Hash a plaintext password, mapping hasher failures to internal errors.
fn hash(plaintext: &str) -> AppResult<String> {
    hash_password(plaintext).map_err(|e| AppError::Internal(format!("Password hashing error: {e}")))
}

/// Unknown username and wrong password are indistinguishable on the wire.
fn invalid_credentials() -> AppError {
    AppError::Core(CoreError::Unauthorized(
        "Invalid username or password".into(),
    ))
}

/// Create a user directly, hashing the password at write time.
/// No duplicate-username check: that rule belongs to registration only.
pub async fn create(pool: &PgPool, dto: UserDto) -> AppResult<User> {
    tracing::info!(username = %dto.username, "Creating user");
    let input = NewUser {
        username: dto.username,
        email: dto.email,
        password_hash: hash(&dto.password)?,
    };
    let created = UserRepo::create(pool, &input)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error creating user"))?;
    tracing::info!(id = created.id, "User created");
    Ok(created)
}

/// Register a brand-new user, rejecting usernames that are already taken.
pub async fn register(pool: &PgPool, dto: UserDto) -> AppResult<User> {
    tracing::info!(username = %dto.username, "Registering user");
    let taken = UserRepo::find_by_username(pool, &dto.username)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error checking username availability"))?
        .is_some();
    if taken {
        tracing::warn!(username = %dto.username, "Registration rejected: username taken");
        return Err(AppError::Core(CoreError::Conflict(format!(
            "Username '{}' is already taken",
            dto.username
        ))));
    }

    let input = NewUser {
        username: dto.username,
        email: dto.email,
        password_hash: hash(&dto.password)?,
    };
    let created = UserRepo::create(pool, &input)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error registering user"))?;
    tracing::info!(id = created.id, username = %created.username, "User registered");
    Ok(created)
}

/// Verify credentials, returning the matching user row.
pub async fn authenticate(pool: &PgPool, dto: &LoginDto) -> AppResult<User> {
    tracing::info!(username = %dto.username, "Authenticating user");
    let user = match UserRepo::find_by_username(pool, &dto.username)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error looking up user for login"))?
    {
        Some(user) => user,
        None => {
            tracing::warn!(username = %dto.username, "Authentication failed: unknown username");
            return Err(invalid_credentials());
        }
    };

    let valid = verify_password(&dto.password, &user.password_hash)
        .map_err(|e| AppError::Internal(format!("Password verification error: {e}")))?;
    if !valid {
        tracing::warn!(username = %dto.username, "Authentication failed: wrong password");
        return Err(invalid_credentials());
    }

    tracing::info!(username = %user.username, "User authenticated");
    Ok(user)
}

/// Fully replace a user's profile. The id is preserved, and the stored
/// password hash is kept unless the DTO carries a non-blank new password.
pub async fn update(pool: &PgPool, id: DbId, dto: UserDto) -> AppResult<User> {
    tracing::info!(id, "Updating user");
    let existing = UserRepo::find_by_id(pool, id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error fetching user for update"))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;

    let password_hash = if dto.password.trim().is_empty() {
        existing.password_hash
    } else {
        hash(&dto.password)?
    };

    let input = NewUser {
        username: dto.username,
        email: dto.email,
        password_hash,
    };
    let updated = UserRepo::replace(pool, id, &input)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error updating user"))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))?;
    tracing::info!(id, "User updated");
    Ok(updated)
}

/// Delete a user, returning the deleted row if it existed.
pub async fn delete(pool: &PgPool, id: DbId) -> AppResult<Option<User>> {
    tracing::info!(id, "Deleting user");
    let deleted = UserRepo::delete(pool, id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error deleting user"))?;
    match &deleted {
        Some(_) => tracing::info!(id, "User deleted"),
        None => tracing::warn!(id, "Attempted to delete user that does not exist"),
    }
    Ok(deleted)
}

pub async fn get_by_id(pool: &PgPool, id: DbId) -> AppResult<User> {
    tracing::info!(id, "Fetching user");
    UserRepo::find_by_id(pool, id)
        .await
        .inspect_err(|e| tracing::error!(error = %e, id, "Error fetching user"))?
        .ok_or(AppError::Core(CoreError::NotFound { entity: "User", id }))
}

/// Every user, unpaged, in safe response form.
pub async fn list_all(pool: &PgPool) -> AppResult<Vec<UserResponse>> {
    tracing::info!("Fetching all users");
    let users = UserRepo::list(pool)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching all users"))?;
    Ok(users.into_iter().map(UserResponse::from).collect())
}

/// One page of users, with pager totals, in safe response form.
pub async fn page(pool: &PgPool, request: &PageRequest) -> AppResult<Page<UserResponse>> {
    let order_by = request.order_by(user::SORT_COLUMNS)?;
    let page = UserRepo::page(pool, request, &order_by)
        .await
        .inspect_err(|e| tracing::error!(error = %e, "Error fetching users page"))?;
    tracing::info!(
        count = page.content.len(),
        page = page.page,
        total_pages = page.total_pages,
        "Fetched users"
    );
    Ok(page.map(UserResponse::from))
}

/// Resolve the profile for an authenticated identity.
pub async fn current(pool: &PgPool, username: &str) -> AppResult<UserResponse> {
    tracing::info!(username, "Fetching current user");
    UserRepo::find_by_username(pool, username)
        .await
        .inspect_err(|e| tracing::error!(error = %e, username, "Error fetching current user"))?
        .map(UserResponse::from)
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByName {
                entity: "User",
                name: username.to_string(),
            })
        })
}

/// Update profile settings for the given identity.
///
/// Looked up by username; id, username, and password hash are preserved
/// unconditionally -- only the remaining profile fields change.
pub async fn update_settings(pool: &PgPool, username: &str, dto: UserDto) -> AppResult<User> {
    tracing::info!(username, "Updating user settings");
    let existing = UserRepo::find_by_username(pool, username)
        .await
        .inspect_err(|e| tracing::error!(error = %e, username, "Error fetching user for settings"))?
        .ok_or_else(|| {
            AppError::Core(CoreError::NotFoundByName {
                entity: "User",
                name: username.to_string(),
            })
        })?;

    let input = NewUser {
        username: existing.username,
        email: dto.email,
        password_hash: existing.password_hash,
    };
    let updated = UserRepo::replace(pool, existing.id, &input)
        .await
        .inspect_err(|e| tracing::error!(error = %e, username, "Error updating user settings"))?
        .ok_or(AppError::Core(CoreError::NotFound {
            entity: "User",
            id: existing.id,
        }))?;
    tracing::info!(username, "User settings updated");
    Ok(updated)
}
