//! Contact submission rules: field checks and the rate-limit policy.
//!
//! The policy is a pure function over a [`RateLimitSnapshot`] so it can be
//! tested without a database; the HTTP layer assembles the snapshot from
//! `contacts` queries and persists the message only on a pass.

use serde::Deserialize;

use crate::error::CoreError;
use crate::types::Timestamp;

/// Maximum messages accepted per trailing day from one IP or one email.
pub const MAX_MESSAGES_PER_DAY: i64 = 3;

/// Trailing window for the daily counts, in milliseconds.
pub const DAILY_WINDOW_MS: i64 = 86_400_000;

/// Minimum quiet period between two messages from the same sender, in
/// milliseconds.
pub const COOLDOWN_MS: i64 = 600_000;

/// Longest accepted message body, in characters.
pub const MAX_MESSAGE_CHARS: usize = 300;

/// Public contact-form submission body.
#[derive(Debug, Clone, Deserialize)]
pub struct ContactSubmission {
    #[serde(default)]
    pub name: String,
    #[serde(default)]
    pub email: String,
    #[serde(default)]
    pub message: String,
}

/// Validate submission fields: all present, message within the length
/// cap. Returns the first violation only, matching the form's one-error
/// display.
pub fn validate_submission(submission: &ContactSubmission) -> Result<(), CoreError> {
    if submission.name.is_empty() {
        return Err(CoreError::validation("Missing required field: name"));
    }
    if submission.email.is_empty() {
        return Err(CoreError::validation("Missing required field: email"));
    }
    if submission.message.is_empty() {
        return Err(CoreError::validation("Missing required field: message"));
    }
    if submission.message.chars().count() > MAX_MESSAGE_CHARS {
        return Err(CoreError::validation(
            "Message is too long. Maximum 300 characters allowed.",
        ));
    }
    Ok(())
}

/// Rate-limit inputs derived from the sender's existing messages.
#[derive(Debug, Clone, Copy, Default)]
pub struct RateLimitSnapshot {
    /// Messages from the same IP within the trailing 24 hours.
    pub ip_daily_count: i64,
    /// Messages from the same email within the trailing 24 hours.
    pub email_daily_count: i64,
    /// Most recent message from the same IP, any age.
    pub last_from_ip: Option<Timestamp>,
    /// Most recent message from the same email, any age.
    pub last_from_email: Option<Timestamp>,
}

/// Evaluate the rate-limit policy. Checks run in a fixed order and the
/// first failure wins; `Ok` means the message may be persisted.
///
/// Cooldown comparisons are strictly less-than: a message sent exactly
/// [`COOLDOWN_MS`] after the previous one is allowed through.
pub fn evaluate(now: Timestamp, snapshot: &RateLimitSnapshot) -> Result<(), CoreError> {
    if snapshot.ip_daily_count >= MAX_MESSAGES_PER_DAY {
        return Err(CoreError::RateLimited(
            "Daily message limit exceeded for this IP. Try again tomorrow.".to_string(),
        ));
    }

    if snapshot.email_daily_count >= MAX_MESSAGES_PER_DAY {
        return Err(CoreError::RateLimited(
            "Daily message limit exceeded for this email. Try again tomorrow.".to_string(),
        ));
    }

    if let Some(last) = snapshot.last_from_ip {
        if (now - last).num_milliseconds() < COOLDOWN_MS {
            return Err(CoreError::RateLimited(
                "Please wait before sending another message".to_string(),
            ));
        }
    }

    if let Some(last) = snapshot.last_from_email {
        if (now - last).num_milliseconds() < COOLDOWN_MS {
            return Err(CoreError::RateLimited(
                "Please wait before sending another message".to_string(),
            ));
        }
    }

    Ok(())
}
