//! Password strength scoring for live feedback.

use serde::{Deserialize, Serialize};

use super::policy::{self, CharacterClasses, LONG_LENGTH, MIN_LENGTH};

/// Coarse strength band shown next to the password field.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub enum StrengthLabel {
    #[default]
    None,
    Weak,
    Medium,
    Strong,
}

impl std::fmt::Display for StrengthLabel {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        let s = match self {
            Self::None => "None",
            Self::Weak => "Weak",
            Self::Medium => "Medium",
            Self::Strong => "Strong",
        };
        write!(f, "{s}")
    }
}

/// Result of scoring a password. Derived, never stored.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default, Serialize, Deserialize)]
pub struct PasswordStrength {
    /// 0..=6
    pub score: u8,
    pub label: StrengthLabel,
}

/// Score a password against the composition policy.
///
/// One point each for: length >= 8, length >= 12, lowercase, uppercase, digit,
/// and any character outside `[A-Za-z0-9]`.
pub fn score(password: &str) -> PasswordStrength {
    if password.is_empty() {
        return PasswordStrength::default();
    }

    let len = policy::length(password);
    let mut score = CharacterClasses::of(password).count();
    if len >= MIN_LENGTH {
        score += 1;
    }
    if len >= LONG_LENGTH {
        score += 1;
    }

    let label = if score <= 2 {
        StrengthLabel::Weak
    } else if score <= 4 {
        StrengthLabel::Medium
    } else {
        StrengthLabel::Strong
    };

    PasswordStrength { score, label }
}
