//! Input validation utilities

use std::sync::LazyLock;

use regex::Regex;

use crate::constants::{
    self, MAX_ASSISTANT_MESSAGE_LENGTH, MAX_SOURCE_CODE_SIZE, MAX_STDIN_SIZE, USERNAME_PATTERN,
};

static USERNAME_RE: LazyLock<Regex> = LazyLock::new(|| {
    Regex::new(USERNAME_PATTERN).expect("username pattern is a valid regex")
});

/// Validate username format: 3-20 characters of letters, digits, underscores
pub fn validate_username(username: &str) -> Result<(), &'static str> {
    if USERNAME_RE.is_match(username) {
        Ok(())
    } else {
        Err("Username must be 3-20 characters of letters, numbers, and underscores")
    }
}

/// Validate email format (basic validation)
pub fn validate_email(email: &str) -> Result<(), &'static str> {
    let parts: Vec<&str> = email.split('@').collect();
    if parts.len() != 2 || parts[0].is_empty() || parts[1].is_empty() {
        return Err("Invalid email format");
    }
    if !parts[1].contains('.') {
        return Err("Invalid email domain");
    }
    Ok(())
}

/// Validate source code for execution
pub fn validate_source_code(code: &str) -> Result<(), &'static str> {
    if code.is_empty() {
        return Err("Source code cannot be empty");
    }
    if code.len() > MAX_SOURCE_CODE_SIZE {
        return Err("Source code exceeds maximum size of 256KB");
    }
    Ok(())
}

/// Validate stdin for execution
pub fn validate_stdin(stdin: &str) -> Result<(), &'static str> {
    if stdin.len() > MAX_STDIN_SIZE {
        return Err("Standard input exceeds maximum size of 64KB");
    }
    Ok(())
}

/// Validate an assistant message
pub fn validate_assistant_message(message: &str) -> Result<(), &'static str> {
    if message.trim().is_empty() {
        return Err("Message cannot be empty");
    }
    if message.chars().count() > MAX_ASSISTANT_MESSAGE_LENGTH {
        return Err("Message is too long");
    }
    Ok(())
}

/// Validate a problem difficulty label
pub fn validate_difficulty(difficulty: &str) -> Result<(), &'static str> {
    if constants::difficulties::ALL.contains(&difficulty) {
        Ok(())
    } else {
        Err("Invalid difficulty")
    }
}

/// Normalize a username for storage: trimmed, original casing preserved
pub fn normalize_username(username: &str) -> String {
    username.trim().to_string()
}

/// Normalize an email for storage and comparison
pub fn normalize_email(email: &str) -> String {
    email.trim().to_lowercase()
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_validate_username() {
        assert!(validate_username("alice").is_ok());
        assert!(validate_username("Alice_123").is_ok());
        assert!(validate_username("ab").is_err()); // Too short
        assert!(validate_username("a".repeat(21).as_str()).is_err()); // Too long
        assert!(validate_username("user-name").is_err()); // Hyphen not allowed
        assert!(validate_username("user name").is_err()); // Space not allowed
    }

    #[test]
    fn test_validate_email() {
        assert!(validate_email("user@example.com").is_ok());
        assert!(validate_email("invalid").is_err());
        assert!(validate_email("@example.com").is_err());
        assert!(validate_email("user@").is_err());
        assert!(validate_email("user@nodot").is_err());
    }

    #[test]
    fn test_validate_assistant_message() {
        assert!(validate_assistant_message("what is big o notation").is_ok());
        assert!(validate_assistant_message("   ").is_err());
        assert!(validate_assistant_message(&"x".repeat(5000)).is_err());
    }

    #[test]
    fn test_normalization() {
        assert_eq!(normalize_username("  Bob "), "Bob");
        assert_eq!(normalize_email(" BOB@X.com "), "bob@x.com");
    }
}
