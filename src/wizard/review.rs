//! Summary shown on the review step.

use serde::Serialize;

use super::form::SchoolForm;
use super::step::WizardStep;

/// Shown instead of the admin password.
pub const MASKED_PASSWORD: &str = "••••••••••••";

/// One label/value line.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewRow {
    pub label: &'static str,
    pub value: String,
}

/// A card on the review screen, with an "Edit" link back to `step`.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct ReviewSection {
    pub title: &'static str,
    pub step: WizardStep,
    pub rows: Vec<ReviewRow>,
}

fn row(label: &'static str, value: impl Into<String>) -> ReviewRow {
    ReviewRow {
        label,
        value: value.into(),
    }
}

fn or_na(value: &str) -> String {
    if value.is_empty() {
        "N/A".to_string()
    } else {
        value.to_string()
    }
}

/// Build the six review sections from the collected form.
pub fn review_sections(form: &SchoolForm) -> Vec<ReviewSection> {
    let has_password = !form.admin_password.is_empty();

    vec![
        ReviewSection {
            title: "Basic Details",
            step: WizardStep::BasicDetails,
            rows: vec![
                row("School Name", &form.school_name),
                row("School Code", &form.school_code),
                row("Type", &form.school_type),
                row("Board", &form.education_board),
                row("Academic Level", form.academic_level.join(", ")),
                row("Description", or_na(&form.description)),
            ],
        },
        ReviewSection {
            title: "Address Information",
            step: WizardStep::Address,
            rows: vec![
                row(
                    "Address",
                    format!("{}, {}", form.address_line1, form.address_line2),
                ),
                row("City", &form.city),
                row("State", &form.state),
                row("Country", &form.country),
                row("Pincode", &form.pincode),
            ],
        },
        ReviewSection {
            title: "Primary Contact",
            step: WizardStep::Contact,
            rows: vec![
                row("Name", &form.primary_contact_name),
                row("Role", &form.primary_contact_role),
                row("Email", &form.primary_contact_email),
                row("Phone", &form.primary_contact_phone),
            ],
        },
        ReviewSection {
            title: "Admin Credentials",
            step: WizardStep::AdminCredentials,
            rows: vec![
                row("Admin Email", &form.admin_email),
                row(
                    "Password",
                    if has_password { MASKED_PASSWORD } else { "Not set" },
                ),
                row(
                    "Password Strength",
                    if has_password {
                        "Strong (Auto-generated)"
                    } else {
                        "N/A"
                    },
                ),
            ],
        },
        ReviewSection {
            title: "Academic Configuration",
            step: WizardStep::AcademicSetup,
            rows: vec![
                row(
                    "Academic Year",
                    format!("{} to {}", form.academic_year_start, form.academic_year_end),
                ),
                row("Grades", form.grades_offered.join(", ")),
                row("Sections", form.sections_per_grade.join(", ")),
                row("Grading System", &form.grading_system),
                row("Attendance Type", &form.attendance_type),
                row("Subjects", or_na(&form.subjects_offered.join(", "))),
            ],
        },
        ReviewSection {
            title: "Finance Setup",
            step: WizardStep::Finance,
            rows: vec![
                row("Fee Structure", &form.fee_structure_type),
                row("Billing Email", &form.billing_contact_email),
                row("Payment Modes", form.payment_modes.join(", ")),
                row("Bank Name", or_na(&form.bank_name)),
                row("Tax ID", or_na(&form.tax_id)),
            ],
        },
    ]
}

/// Render a value for display, substituting "Not provided" for blanks.
pub fn display_value(value: &str) -> &str {
    if value.is_empty() { "Not provided" } else { value }
}
