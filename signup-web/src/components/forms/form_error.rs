/// A failed validation rule. At most one is surfaced per submit attempt;
/// the user-facing text is mapped here, at the UI boundary.
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum SignupError {
    InvalidEmail,
    PasswordTooShort,
    PasswordMismatch,
}

impl SignupError {
    pub fn message(&self) -> &'static str {
        match self {
            SignupError::InvalidEmail => "Please enter a valid email",
            SignupError::PasswordTooShort => {
                "Password must be at least 5 characters"
            }
            SignupError::PasswordMismatch => "Passwords do not match",
        }
    }
}

impl std::fmt::Display for SignupError {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "{}", self.message())
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn every_error_maps_to_its_fixed_message() {
        assert_eq!(
            SignupError::InvalidEmail.message(),
            "Please enter a valid email"
        );
        assert_eq!(
            SignupError::PasswordTooShort.message(),
            "Password must be at least 5 characters"
        );
        assert_eq!(
            SignupError::PasswordMismatch.message(),
            "Passwords do not match"
        );
    }

    #[test]
    fn display_matches_the_message() {
        assert_eq!(
            SignupError::PasswordMismatch.to_string(),
            SignupError::PasswordMismatch.message()
        );
    }
}
