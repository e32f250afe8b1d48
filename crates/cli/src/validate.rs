// SPDX-License-Identifier: MIT
// Copyright (c) 2026 Alfred Jean LLC

//! Input checks run before any request is sent.

use regex::Regex;
use std::sync::OnceLock;

use crate::api::ImageUpload;
use crate::error::{Error, Result};

// Input length limits
pub const MAX_DESCRIPTION_LENGTH: usize = 2_000;
pub const MAX_INSTRUCTIONS_LENGTH: usize = 2_000;
pub const MAX_FIELD_LENGTH: usize = 100;

fn email_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        #[allow(clippy::unwrap_used)] // literal pattern
        Regex::new(r"^[^\s@]+@[^\s@]+\.[^\s@]+$").unwrap()
    })
}

fn phone_regex() -> &'static Regex {
    static RE: OnceLock<Regex> = OnceLock::new();
    RE.get_or_init(|| {
        #[allow(clippy::unwrap_used)] // literal pattern
        Regex::new(r"^\+?[0-9]{10,15}$").unwrap()
    })
}

/// Validate an email address (something@domain.tld, no whitespace)
pub fn validate_email(email: &str) -> Result<()> {
    let trimmed = email.trim();
    if trimmed.is_empty() {
        return Err(Error::FieldEmpty { field: "Email" });
    }
    if !email_regex().is_match(trimmed) {
        return Err(Error::InvalidEmail(email.to_string()));
    }
    Ok(())
}

/// Validate a phone number. Spaces and dashes are ignored.
pub fn validate_phone(phone: &str) -> Result<()> {
    let compact: String = phone
        .chars()
        .filter(|c| !c.is_whitespace() && *c != '-')
        .collect();
    if compact.is_empty() {
        return Err(Error::FieldEmpty { field: "Phone" });
    }
    if !phone_regex().is_match(&compact) {
        return Err(Error::InvalidPhone(phone.to_string()));
    }
    Ok(())
}

/// Validate that a required field is present and not blank
pub fn validate_required<'a>(field: &'static str, value: Option<&'a str>) -> Result<&'a str> {
    match value {
        None => Err(Error::FieldRequired { field }),
        Some(v) if v.trim().is_empty() => Err(Error::FieldEmpty { field }),
        Some(v) => Ok(v),
    }
}

/// Validate that a field is within length limits
pub fn validate_length(field: &'static str, value: &str, max: usize) -> Result<()> {
    let actual = value.chars().count();
    if actual > max {
        return Err(Error::FieldTooLong { field, actual, max });
    }
    Ok(())
}

/// Validate that an image has content
pub fn validate_image(image: &ImageUpload) -> Result<()> {
    if image.bytes.is_empty() {
        return Err(Error::EmptyImage(image.file_name.clone()));
    }
    Ok(())
}

#[cfg(test)]
#[path = "validate_tests.rs"]
mod tests;
