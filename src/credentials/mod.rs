//! Credential policy engine — admin password generation and strength scoring.
//!
//! Both halves share one composition policy: at least eight characters drawn
//! from uppercase, lowercase, digit and special classes. The onboarding wizard
//! uses the generator to propose an initial admin password and the scorer for
//! live feedback, and re-checks the same [`CharacterClasses`] predicate in its
//! own step gate.

pub mod generator;
pub mod policy;
pub mod strength;

pub use generator::{generate, generate_with};
pub use policy::CharacterClasses;
pub use strength::{PasswordStrength, StrengthLabel, score};
