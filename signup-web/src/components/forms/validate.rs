use regex::Regex;

use super::form_error::SignupError;
use super::state::SignupInput;

pub const MIN_PASSWORD_CHARS: usize = 5;

// local@domain.tld shape: no whitespace, a single @, dotted domain
const EMAIL_PATTERN: &str = r"^[^\s@]+@[^\s@]+\.[^\s@]+$";

/// Runs the submit-time checks in fixed order with short-circuit at the
/// first failure: email format, then password length, then confirmation
/// match. The email pattern is compiled once, when the form is created.
#[derive(Clone)]
pub struct SignupValidator {
    email_pattern: Regex,
}

impl SignupValidator {
    pub fn new() -> Self {
        Self {
            email_pattern: Regex::new(EMAIL_PATTERN).unwrap(),
        }
    }

    pub fn validate(&self, input: &SignupInput) -> Option<SignupError> {
        if !self.email_pattern.is_match(input.email()) {
            return Some(SignupError::InvalidEmail);
        }
        if input.password().chars().count() < MIN_PASSWORD_CHARS {
            return Some(SignupError::PasswordTooShort);
        }
        if input.password() != input.confirm_password() {
            return Some(SignupError::PasswordMismatch);
        }
        None
    }
}

impl Default for SignupValidator {
    fn default() -> Self {
        Self::new()
    }
}
