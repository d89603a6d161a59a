//! Ticket form validation schema.
//!
//! SYSTEM CONTEXT
//! ==============
//! Validation runs against plain value types (`TicketDraft`, `AvatarFile`)
//! rather than DOM handles, so the same rules apply to eager avatar checks on
//! drop/select and to the full check on submit.

#[cfg(test)]
#[path = "validation_test.rs"]
mod validation_test;

use std::sync::LazyLock;

use regex::Regex;

use crate::state::ticket::{AvatarRef, TicketRequest};

/// Largest accepted avatar upload, in bytes.
pub const MAX_AVATAR_BYTES: u64 = 5_000_000;

/// MIME types accepted for avatar uploads.
pub const ACCEPTED_IMAGE_TYPES: [&str; 2] = ["image/jpg", "image/png"];

/// Value for the file input's `accept` attribute.
pub const ACCEPT_ATTR: &str = "image/jpg, image/png";

// Local part may not start or end with a dot; `..` is rejected separately.
static EMAIL_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(r"^[A-Za-z0-9_'+\-.]*[A-Za-z0-9_+\-]@([A-Za-z0-9][A-Za-z0-9\-]*\.)+[A-Za-z]{2,}$")
        .expect("email pattern compiles")
});

// =============================================================================
// ERRORS
// =============================================================================

/// A single field-level validation failure. `Display` is the inline message.
#[derive(Debug, Clone, Copy, PartialEq, Eq, thiserror::Error)]
pub enum FieldError {
    #[error("File too large. Please upload a photo under 5MB.")]
    AvatarTooLarge,

    #[error("Only .jpg and .png formats are supported.")]
    AvatarUnsupportedFormat,

    #[error("Please enter a valid email address.")]
    InvalidEmail,

    #[error("Please enter your full name.")]
    FullNameRequired,

    #[error("Please enter your GitHub username.")]
    GithubUsernameRequired,
}

/// Per-field errors collected from one validation pass.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct FieldErrors {
    pub avatar: Option<FieldError>,
    pub full_name: Option<FieldError>,
    pub email: Option<FieldError>,
    pub github_username: Option<FieldError>,
}

impl FieldErrors {
    pub fn is_empty(&self) -> bool {
        self.avatar.is_none() && self.full_name.is_none() && self.email.is_none() && self.github_username.is_none()
    }
}

// =============================================================================
// INPUT TYPES
// =============================================================================

/// Metadata of a selected avatar file.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct AvatarFile {
    pub name: String,
    pub mime_type: String,
    pub size: u64,
}

impl AvatarFile {
    #[cfg(feature = "hydrate")]
    #[allow(clippy::cast_possible_truncation, clippy::cast_sign_loss)]
    pub fn from_file(file: &web_sys::File) -> Self {
        Self { name: file.name(), mime_type: file.type_(), size: file.size().max(0.0) as u64 }
    }
}

/// Raw form values prior to validation.
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct TicketDraft {
    pub full_name: String,
    pub email: String,
    pub github_username: String,
    pub avatar: Option<AvatarFile>,
}

/// Which free-text fields must be non-blank.
///
/// Both are optional by default: the ticket falls back to the email when no
/// name is given and hides the GitHub line when no handle is given.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct ValidationPolicy {
    pub require_full_name: bool,
    pub require_github_username: bool,
}

// =============================================================================
// RULES
// =============================================================================

/// Check an avatar against the size limit, then the accepted types.
pub fn validate_avatar(file: &AvatarFile) -> Result<(), FieldError> {
    if file.size > MAX_AVATAR_BYTES {
        return Err(FieldError::AvatarTooLarge);
    }
    if !ACCEPTED_IMAGE_TYPES.contains(&file.mime_type.as_str()) {
        return Err(FieldError::AvatarUnsupportedFormat);
    }
    Ok(())
}

/// Trim and check an email address, returning the trimmed value.
pub fn validate_email(raw: &str) -> Result<String, FieldError> {
    let email = raw.trim();
    if is_valid_email(email) { Ok(email.to_owned()) } else { Err(FieldError::InvalidEmail) }
}

fn is_valid_email(email: &str) -> bool {
    !email.starts_with('.') && !email.contains("..") && EMAIL_RE.is_match(email)
}

fn validate_required(raw: &str, required: bool, error: FieldError) -> Result<String, FieldError> {
    let value = raw.trim();
    if required && value.is_empty() {
        return Err(error);
    }
    Ok(value.to_owned())
}

/// Validate every field of `draft`, producing a ticket or all field errors.
///
/// The returned ticket's avatar carries no object URL yet; the caller
/// attaches one for the live file handle.
pub fn validate_ticket(draft: &TicketDraft, policy: ValidationPolicy) -> Result<TicketRequest, FieldErrors> {
    let avatar = draft.avatar.as_ref().map(validate_avatar).transpose();
    let full_name = validate_required(&draft.full_name, policy.require_full_name, FieldError::FullNameRequired);
    let email = validate_email(&draft.email);
    let github_username = validate_required(
        &draft.github_username,
        policy.require_github_username,
        FieldError::GithubUsernameRequired,
    );

    match (avatar, full_name, email, github_username) {
        (Ok(_), Ok(full_name), Ok(email), Ok(github_username)) => Ok(TicketRequest {
            full_name,
            email,
            github_username,
            avatar: draft.avatar.as_ref().map(|file| AvatarRef {
                file_name: file.name.clone(),
                mime_type: file.mime_type.clone(),
                size: file.size,
                url: None,
            }),
        }),
        (avatar, full_name, email, github_username) => Err(FieldErrors {
            avatar: avatar.err(),
            full_name: full_name.err(),
            email: email.err(),
            github_username: github_username.err(),
        }),
    }
}
