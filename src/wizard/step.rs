//! Wizard steps and phases.

use serde::{Deserialize, Serialize};

/// The seven data-collection steps, in order.
#[derive(Debug, Clone, Copy, PartialEq, Eq, PartialOrd, Ord, Hash, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum WizardStep {
    BasicDetails,
    Address,
    Contact,
    AdminCredentials,
    AcademicSetup,
    Finance,
    Review,
}

impl WizardStep {
    pub const ALL: [WizardStep; 7] = [
        Self::BasicDetails,
        Self::Address,
        Self::Contact,
        Self::AdminCredentials,
        Self::AcademicSetup,
        Self::Finance,
        Self::Review,
    ];

    /// 1-based step number.
    pub fn number(&self) -> u8 {
        match self {
            Self::BasicDetails => 1,
            Self::Address => 2,
            Self::Contact => 3,
            Self::AdminCredentials => 4,
            Self::AcademicSetup => 5,
            Self::Finance => 6,
            Self::Review => 7,
        }
    }

    pub fn from_number(n: u8) -> Option<Self> {
        Self::ALL.get(usize::from(n).checked_sub(1)?).copied()
    }

    /// The following step, capped at `Review`.
    pub fn next(&self) -> Self {
        Self::from_number(self.number() + 1).unwrap_or(Self::Review)
    }

    /// The preceding step, floored at `BasicDetails`.
    pub fn previous(&self) -> Self {
        Self::from_number(self.number().saturating_sub(1)).unwrap_or(Self::BasicDetails)
    }

    pub fn title(&self) -> &'static str {
        match self {
            Self::BasicDetails => "Basic Details",
            Self::Address => "Address",
            Self::Contact => "Contact Person",
            Self::AdminCredentials => "Admin Credentials",
            Self::AcademicSetup => "Academic Setup",
            Self::Finance => "Finance",
            Self::Review => "Review",
        }
    }

    pub fn description(&self) -> &'static str {
        match self {
            Self::BasicDetails => "School identity",
            Self::Address => "Location info",
            Self::Contact => "Primary contact",
            Self::AdminCredentials => "Login setup",
            Self::AcademicSetup => "Academic config",
            Self::Finance => "Fee structure",
            Self::Review => "Confirm details",
        }
    }
}

impl Default for WizardStep {
    fn default() -> Self {
        Self::BasicDetails
    }
}

impl std::fmt::Display for WizardStep {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        write!(f, "step {} ({})", self.number(), self.title())
    }
}

/// Where the wizard is in its lifecycle.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case", tag = "phase", content = "step")]
pub enum WizardPhase {
    /// Collecting data on one of the seven steps.
    Editing(WizardStep),
    /// The create-school request is in flight.
    Submitting,
    /// The school was created; the front-end navigates away.
    Succeeded,
}

impl WizardPhase {
    /// The step being shown, if the wizard is still editing.
    pub fn step(&self) -> Option<WizardStep> {
        match self {
            Self::Editing(step) => Some(*step),
            _ => None,
        }
    }

    pub fn is_terminal(&self) -> bool {
        matches!(self, Self::Succeeded)
    }
}

impl Default for WizardPhase {
    fn default() -> Self {
        Self::Editing(WizardStep::BasicDetails)
    }
}

impl std::fmt::Display for WizardPhase {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        match self {
            Self::Editing(step) => write!(f, "{step}"),
            Self::Submitting => write!(f, "submitting"),
            Self::Succeeded => write!(f, "succeeded"),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn numbers_round_trip() {
        for step in WizardStep::ALL {
            assert_eq!(WizardStep::from_number(step.number()), Some(step));
        }
        assert_eq!(WizardStep::from_number(0), None);
        assert_eq!(WizardStep::from_number(8), None);
    }

    #[test]
    fn next_walks_all_steps_and_caps() {
        let mut current = WizardStep::BasicDetails;
        for expected in &WizardStep::ALL[1..] {
            current = current.next();
            assert_eq!(current, *expected);
        }
        assert_eq!(current.next(), WizardStep::Review);
    }

    #[test]
    fn previous_floors_at_first_step() {
        assert_eq!(WizardStep::BasicDetails.previous(), WizardStep::BasicDetails);
        assert_eq!(WizardStep::Review.previous(), WizardStep::Finance);
    }

    #[test]
    fn default_phase_is_first_step() {
        assert_eq!(
            WizardPhase::default(),
            WizardPhase::Editing(WizardStep::BasicDetails)
        );
        assert!(!WizardPhase::default().is_terminal());
        assert!(WizardPhase::Succeeded.is_terminal());
    }

    #[test]
    fn titles_match_step_headers() {
        assert_eq!(WizardStep::AdminCredentials.title(), "Admin Credentials");
        assert_eq!(WizardStep::Finance.description(), "Fee structure");
        assert_eq!(format!("{}", WizardStep::Review), "step 7 (Review)");
    }
}
