//! Per-step validation gates.

use crate::credentials::policy::{self, CharacterClasses, MIN_LENGTH};
use crate::error::ValidationError;

use super::form::SchoolForm;
use super::step::WizardStep;

/// Check whether `step`'s required fields allow moving forward.
///
/// Only the first failing rule is reported. The review step has no gate.
pub fn validate_step(step: WizardStep, form: &SchoolForm) -> Result<(), ValidationError> {
    match step {
        WizardStep::BasicDetails => require(
            &[
                &form.school_name,
                &form.school_code,
                &form.school_type,
                &form.education_board,
            ],
            ValidationError::MissingBasicDetails,
        ),
        WizardStep::Address => require(
            &[
                &form.address_line1,
                &form.city,
                &form.state,
                &form.country,
                &form.pincode,
            ],
            ValidationError::MissingAddress,
        ),
        WizardStep::Contact => require(
            &[
                &form.primary_contact_name,
                &form.primary_contact_role,
                &form.primary_contact_email,
                &form.primary_contact_phone,
            ],
            ValidationError::MissingContact,
        ),
        WizardStep::AdminCredentials => validate_admin_credentials(form),
        WizardStep::AcademicSetup => {
            require(
                &[
                    &form.academic_year_start,
                    &form.academic_year_end,
                    &form.grading_system,
                ],
                ValidationError::MissingAcademic,
            )?;
            if form.grades_offered.is_empty() {
                return Err(ValidationError::MissingAcademic);
            }
            Ok(())
        }
        WizardStep::Finance => require(
            &[&form.fee_structure_type, &form.billing_contact_email],
            ValidationError::MissingFinance,
        ),
        WizardStep::Review => Ok(()),
    }
}

fn require(values: &[&String], error: ValidationError) -> Result<(), ValidationError> {
    if values.iter().any(|v| v.is_empty()) {
        Err(error)
    } else {
        Ok(())
    }
}

fn validate_admin_credentials(form: &SchoolForm) -> Result<(), ValidationError> {
    let password = &form.admin_password;

    if form.admin_email.is_empty() || password.is_empty() {
        return Err(ValidationError::MissingAdminCredentials);
    }
    if policy::length(password) < MIN_LENGTH {
        return Err(ValidationError::PasswordTooShort);
    }
    if !CharacterClasses::of(password).is_complete() {
        return Err(ValidationError::PasswordMissingClasses);
    }
    // Confirmation is optional; only a non-empty mismatch blocks.
    if !form.confirm_password.is_empty() && form.confirm_password != *password {
        return Err(ValidationError::PasswordMismatch);
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn basic() -> SchoolForm {
        SchoolForm {
            school_name: "Green Valley".into(),
            school_code: "GV-01".into(),
            school_type: "Private".into(),
            education_board: "CBSE".into(),
            ..Default::default()
        }
    }

    fn with_password(password: &str) -> SchoolForm {
        SchoolForm {
            admin_email: "admin@gv.edu".into(),
            admin_password: password.into(),
            ..Default::default()
        }
    }

    #[test]
    fn basic_details_require_all_four() {
        assert!(validate_step(WizardStep::BasicDetails, &basic()).is_ok());

        let clears: [fn(&mut SchoolForm); 4] = [
            |f| f.school_name.clear(),
            |f| f.school_code.clear(),
            |f| f.school_type.clear(),
            |f| f.education_board.clear(),
        ];
        for clear in clears {
            let mut form = basic();
            clear(&mut form);
            assert_eq!(
                validate_step(WizardStep::BasicDetails, &form),
                Err(ValidationError::MissingBasicDetails)
            );
        }
    }

    #[test]
    fn address_requires_country_even_though_defaulted() {
        let mut form = SchoolForm {
            address_line1: "45 Park Street".into(),
            city: "Kolkata".into(),
            state: "West Bengal".into(),
            pincode: "700016".into(),
            ..Default::default()
        };
        assert!(validate_step(WizardStep::Address, &form).is_ok());

        form.country.clear();
        assert_eq!(
            validate_step(WizardStep::Address, &form),
            Err(ValidationError::MissingAddress)
        );
    }

    #[test]
    fn contact_requires_primary_fields_only() {
        let form = SchoolForm {
            primary_contact_name: "R. Sharma".into(),
            primary_contact_role: "Principal".into(),
            primary_contact_email: "r@gv.edu".into(),
            primary_contact_phone: "+91 98765 43210".into(),
            ..Default::default()
        };
        assert!(validate_step(WizardStep::Contact, &form).is_ok());

        let missing_phone = SchoolForm {
            primary_contact_phone: String::new(),
            ..form
        };
        assert_eq!(
            validate_step(WizardStep::Contact, &missing_phone),
            Err(ValidationError::MissingContact)
        );
    }

    #[test]
    fn admin_requires_email_and_password() {
        let form = SchoolForm {
            admin_password: "Str0ng!pass".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_step(WizardStep::AdminCredentials, &form),
            Err(ValidationError::MissingAdminCredentials)
        );
        assert_eq!(
            validate_step(WizardStep::AdminCredentials, &with_password("")),
            Err(ValidationError::MissingAdminCredentials)
        );
    }

    #[test]
    fn short_password_fails_length_check() {
        assert_eq!(
            validate_step(WizardStep::AdminCredentials, &with_password("short1!")),
            Err(ValidationError::PasswordTooShort)
        );
    }

    #[test]
    fn password_without_special_fails_class_check() {
        assert_eq!(
            validate_step(WizardStep::AdminCredentials, &with_password("LongEnough1")),
            Err(ValidationError::PasswordMissingClasses)
        );
        assert_eq!(
            validate_step(WizardStep::AdminCredentials, &with_password("longenough1!")),
            Err(ValidationError::PasswordMissingClasses)
        );
    }

    #[test]
    fn confirmation_is_optional_but_must_match_when_given() {
        let mut form = with_password("LongEnough1!");
        assert!(validate_step(WizardStep::AdminCredentials, &form).is_ok());

        form.confirm_password = "LongEnough1?".into();
        assert_eq!(
            validate_step(WizardStep::AdminCredentials, &form),
            Err(ValidationError::PasswordMismatch)
        );

        form.confirm_password = "LongEnough1!".into();
        assert!(validate_step(WizardStep::AdminCredentials, &form).is_ok());
    }

    #[test]
    fn academic_requires_at_least_one_grade() {
        let mut form = SchoolForm {
            academic_year_start: "2025-04-01".into(),
            academic_year_end: "2026-03-31".into(),
            grading_system: "Percentage".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_step(WizardStep::AcademicSetup, &form),
            Err(ValidationError::MissingAcademic)
        );

        form.grades_offered.push("Class 1".into());
        assert!(validate_step(WizardStep::AcademicSetup, &form).is_ok());
    }

    #[test]
    fn finance_requires_structure_and_billing_email() {
        let mut form = SchoolForm {
            fee_structure_type: "Monthly".into(),
            ..Default::default()
        };
        assert_eq!(
            validate_step(WizardStep::Finance, &form),
            Err(ValidationError::MissingFinance)
        );
        form.billing_contact_email = "fees@gv.edu".into();
        assert!(validate_step(WizardStep::Finance, &form).is_ok());
    }

    #[test]
    fn review_has_no_gate() {
        assert!(validate_step(WizardStep::Review, &SchoolForm::default()).is_ok());
    }

    #[test]
    fn messages_match_what_users_see() {
        assert_eq!(
            ValidationError::MissingBasicDetails.to_string(),
            "Please fill all required fields"
        );
        assert_eq!(
            ValidationError::PasswordMissingClasses.to_string(),
            "Password must contain uppercase, lowercase, number, and special character"
        );
    }
}
