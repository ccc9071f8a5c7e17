//! Fixed password composition policy.

/// Minimum accepted admin password length.
pub const MIN_LENGTH: usize = 8;

/// Length at which a password earns the second length point.
pub const LONG_LENGTH: usize = 12;

/// Length of generated passwords.
pub const GENERATED_LENGTH: usize = 12;

pub const UPPERCASE: &str = "ABCDEFGHIJKLMNOPQRSTUVWXYZ";
pub const LOWERCASE: &str = "abcdefghijklmnopqrstuvwxyz";
pub const DIGITS: &str = "0123456789";

/// Special characters the generator draws from.
///
/// Scoring and validation accept any character outside `[A-Za-z0-9]` as
/// special, not only these.
pub const SPECIAL: &str = "!@#$%^&*()_+-=[]{}";

/// Password length as the user perceives it (Unicode scalar values).
pub fn length(password: &str) -> usize {
    password.chars().count()
}

/// Which character classes a password contains.
#[derive(Debug, Clone, Copy, Default, PartialEq, Eq)]
pub struct CharacterClasses {
    pub lowercase: bool,
    pub uppercase: bool,
    pub digit: bool,
    pub special: bool,
}

impl CharacterClasses {
    pub fn of(password: &str) -> Self {
        password.chars().fold(Self::default(), |mut acc, c| {
            if c.is_ascii_lowercase() {
                acc.lowercase = true;
            } else if c.is_ascii_uppercase() {
                acc.uppercase = true;
            } else if c.is_ascii_digit() {
                acc.digit = true;
            } else {
                acc.special = true;
            }
            acc
        })
    }

    /// True when every required class is present.
    pub fn is_complete(&self) -> bool {
        self.lowercase && self.uppercase && self.digit && self.special
    }

    /// Number of classes present (0..=4).
    pub fn count(&self) -> u8 {
        [self.lowercase, self.uppercase, self.digit, self.special]
            .iter()
            .filter(|present| **present)
            .count() as u8
    }
}
