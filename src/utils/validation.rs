//! Input validation utilities

/// Canonical form of an email address used as a lookup key
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

/// Validate the shape of a checkout session id before it is put in a URL
pub fn validate_session_id(session_id: &str) -> Result<(), &'static str> {
    if session_id.is_empty() {
        return Err("Session id is required");
    }
    if session_id.len() > 255 {
        return Err("Session id is too long");
    }
    if !session_id
        .chars()
        .all(|c| c.is_ascii_alphanumeric() || c == '_')
    {
        return Err("Session id can only contain letters, numbers, and underscores");
    }
    Ok(())
}
