use crate::shared::constants::PASSWORD_MIN_LENGTH;

/// Individual password requirements, shown to the user as a checklist
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct PasswordChecks {
    pub has_min_length: bool,
    pub has_uppercase: bool,
    pub has_lowercase: bool,
    pub has_number: bool,
    pub has_special_char: bool,
}

impl PasswordChecks {
    pub fn evaluate(password: &str) -> Self {
        Self {
            has_min_length: password.chars().count() >= PASSWORD_MIN_LENGTH,
            has_uppercase: password.chars().any(|c| c.is_ascii_uppercase()),
            has_lowercase: password.chars().any(|c| c.is_ascii_lowercase()),
            has_number: password.chars().any(|c| c.is_ascii_digit()),
            // Anything outside [A-Za-z0-9] counts, including whitespace
            has_special_char: password.chars().any(|c| !c.is_ascii_alphanumeric()),
        }
    }

    /// All requirements met
    pub fn is_strong(&self) -> bool {
        self.has_min_length
            && self.has_uppercase
            && self.has_lowercase
            && self.has_number
            && self.has_special_char
    }

    /// Labels of the requirements still missing
    pub fn missing(&self) -> Vec<&'static str> {
        let mut missing = Vec::new();
        if !self.has_min_length {
            missing.push("at least 8 characters");
        }
        if !self.has_uppercase {
            missing.push("an uppercase letter");
        }
        if !self.has_lowercase {
            missing.push("a lowercase letter");
        }
        if !self.has_number {
            missing.push("a number");
        }
        if !self.has_special_char {
            missing.push("a special character");
        }
        missing
    }
}

pub fn is_strong_password(password: &str) -> bool {
    PasswordChecks::evaluate(password).is_strong()
}
