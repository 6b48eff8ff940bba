//! Validated wire-format DTOs.
//!
//! Every required string field rejects null/blank at the boundary, before a
//! service ever runs. Conversion into persistence payloads is an explicit
//! field copy -- the id is never taken from a DTO.

use newswire_core::types::{DbId, Timestamp};
use newswire_db::models::article::NewArticle;
use newswire_db::models::source::NewSource;
use serde::Deserialize;
use validator::{Validate, ValidationError};

/// Reject empty and whitespace-only strings.
fn not_blank(value: &str) -> Result<(), ValidationError> {
    if value.trim().is_empty() {
        return Err(ValidationError::new("not_blank"));
    }
    Ok(())
}

/// Inbound article payload for create and full-replace update.
#[derive(Debug, Clone, Deserialize, Validate)]
#[serde(rename_all = "camelCase")]
pub struct ArticleDto {
    #[validate(
        custom(function = not_blank, message = "Title is mandatory"),
        length(max = 255, message = "Title must be less than 255 characters")
    )]
    pub title: String,

    #[validate(custom(function = not_blank, message = "Content is mandatory"))]
    pub content: String,

    #[validate(
        custom(function = not_blank, message = "Source is mandatory"),
        length(max = 255, message = "Source must be less than 255 characters")
    )]
    pub source: String,

    /// ISO-8601 timestamp; required.
    pub published_at: Timestamp,
}

impl ArticleDto {
    pub fn into_new(self) -> NewArticle {
        NewArticle {
            title: self.title,
            content: self.content,
            source: self.source,
            published_at: self.published_at,
        }
    }
}

/// Inbound source payload for create and full-replace update.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct SourceDto {
    #[validate(
        custom(function = not_blank, message = "Name is mandatory"),
        length(max = 255, message = "Name must be less than 255 characters")
    )]
    pub name: String,

    #[validate(
        custom(function = not_blank, message = "URL is mandatory"),
        length(max = 255, message = "URL must be less than 255 characters")
    )]
    pub url: String,
}

impl SourceDto {
    pub fn into_new(self) -> NewSource {
        NewSource {
            name: self.name,
            url: self.url,
        }
    }
}

/// Inbound user payload for create, register, update, and settings.
///
/// Carries the plaintext password; hashing happens in the user service
/// before anything is persisted.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct UserDto {
    /// Accepted for wire compatibility; ids are always server-assigned and
    /// this field is ignored on every write path.
    #[serde(default)]
    pub id: Option<DbId>,

    #[validate(
        custom(function = not_blank, message = "Username is mandatory"),
        length(max = 255, message = "Username must be less than 255 characters")
    )]
    pub username: String,

    #[validate(length(
        min = 6,
        max = 255,
        message = "Password must be between 6 and 255 characters"
    ))]
    pub password: String,

    #[validate(
        custom(function = not_blank, message = "Email is mandatory"),
        email(message = "Email should be valid")
    )]
    pub email: String,
}

/// Login credentials, for both the REST endpoint and the login form.
#[derive(Debug, Clone, Deserialize, Validate)]
pub struct LoginDto {
    #[validate(custom(function = not_blank, message = "Username is mandatory"))]
    pub username: String,

    #[validate(custom(function = not_blank, message = "Password is mandatory"))]
    pub password: String,
}
