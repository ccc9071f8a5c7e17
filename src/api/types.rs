//! Wire types for the school-creation endpoint.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::wizard::SchoolForm;

/// Body of `POST /api/schools`: every step 1–6 field plus the group id.
///
/// Built only from [`SchoolForm`]; wizard UI state never reaches the wire.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolPayload {
    pub school_name: String,
    pub school_code: String,
    pub school_type: String,
    pub education_board: String,
    pub academic_level: Vec<String>,
    pub description: String,
    /// Logo upload is not handled by this client.
    pub logo_url: Option<String>,

    pub address_line1: String,
    pub address_line2: String,
    pub city: String,
    pub district: String,
    pub state: String,
    pub country: String,
    pub pincode: String,

    pub primary_contact_name: String,
    pub primary_contact_role: String,
    pub primary_contact_email: String,
    pub primary_contact_phone: String,
    pub alternate_contact_name: String,
    pub alternate_contact_email: String,
    pub alternate_phone: String,

    pub admin_email: String,
    pub admin_password: String,

    pub academic_year_start: String,
    pub academic_year_end: String,
    pub grades_offered: Vec<String>,
    pub sections_per_grade: Vec<String>,
    pub grading_system: String,
    pub attendance_type: String,
    pub subjects_offered: Vec<String>,

    pub fee_structure_type: String,
    pub billing_contact_email: String,
    pub payment_modes: Vec<String>,
    pub bank_name: String,
    pub account_number: String,
    pub ifsc_code: String,
    pub tax_id: String,

    pub group_id: Option<String>,
}

impl SchoolPayload {
    pub fn from_form(form: &SchoolForm, group_id: Option<&str>) -> Self {
        let form = form.clone();
        Self {
            school_name: form.school_name,
            school_code: form.school_code,
            school_type: form.school_type,
            education_board: form.education_board,
            academic_level: form.academic_level,
            description: form.description,
            logo_url: None,
            address_line1: form.address_line1,
            address_line2: form.address_line2,
            city: form.city,
            district: form.district,
            state: form.state,
            country: form.country,
            pincode: form.pincode,
            primary_contact_name: form.primary_contact_name,
            primary_contact_role: form.primary_contact_role,
            primary_contact_email: form.primary_contact_email,
            primary_contact_phone: form.primary_contact_phone,
            alternate_contact_name: form.alternate_contact_name,
            alternate_contact_email: form.alternate_contact_email,
            alternate_phone: form.alternate_phone,
            admin_email: form.admin_email,
            admin_password: form.admin_password,
            academic_year_start: form.academic_year_start,
            academic_year_end: form.academic_year_end,
            grades_offered: form.grades_offered,
            sections_per_grade: form.sections_per_grade,
            grading_system: form.grading_system,
            attendance_type: form.attendance_type,
            subjects_offered: form.subjects_offered,
            fee_structure_type: form.fee_structure_type,
            billing_contact_email: form.billing_contact_email,
            payment_modes: form.payment_modes,
            bank_name: form.bank_name,
            account_number: form.account_number,
            ifsc_code: form.ifsc_code,
            tax_id: form.tax_id,
            group_id: group_id.map(str::to_string),
        }
    }
}

/// Credentials the API issued for the new school's admin account.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct AdminCredentials {
    pub email: String,
    pub login_url: String,
}

/// Response envelope of `POST /api/schools`.
#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchoolResponse {
    pub success: bool,
    #[serde(default)]
    pub message: Option<String>,
    #[serde(default)]
    pub data: Option<CreateSchoolData>,
}

#[derive(Debug, Clone, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct CreateSchoolData {
    #[serde(default)]
    pub admin_credentials: Option<AdminCredentials>,
}

/// A successful school creation, shown once to the user and not persisted.
#[derive(Debug, Clone, PartialEq, Eq, Serialize)]
pub struct SchoolCreated {
    #[serde(skip_serializing_if = "Option::is_none")]
    pub admin_credentials: Option<AdminCredentials>,
    pub created_at: DateTime<Utc>,
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn payload_omits_confirmation_and_sets_group() {
        let form = SchoolForm {
            school_name: "Green Valley".into(),
            admin_password: "Secret1!x".into(),
            confirm_password: "Secret1!x".into(),
            ..Default::default()
        };
        let payload = SchoolPayload::from_form(&form, Some("grp-1"));
        let json = serde_json::to_value(&payload).unwrap();

        assert_eq!(json["schoolName"], "Green Valley");
        assert_eq!(json["adminPassword"], "Secret1!x");
        assert_eq!(json["country"], "India");
        assert_eq!(json["groupId"], "grp-1");
        assert!(json["logoUrl"].is_null());
        assert!(json.get("confirmPassword").is_none());
        assert!(json.get("logo").is_none());
    }

    #[test]
    fn missing_group_serializes_as_null() {
        let payload = SchoolPayload::from_form(&SchoolForm::default(), None);
        let json = serde_json::to_value(&payload).unwrap();
        assert!(json["groupId"].is_null());
    }

    #[test]
    fn response_parses_success_with_credentials() {
        let raw = r#"{
            "success": true,
            "data": {
                "adminCredentials": {
                    "email": "admin@gv.edu",
                    "loginUrl": "http://gv.localhost/login"
                }
            }
        }"#;
        let parsed: CreateSchoolResponse = serde_json::from_str(raw).unwrap();
        assert!(parsed.success);
        let creds = parsed.data.unwrap().admin_credentials.unwrap();
        assert_eq!(creds.email, "admin@gv.edu");
        assert_eq!(creds.login_url, "http://gv.localhost/login");
    }

    #[test]
    fn response_parses_failure_message() {
        let parsed: CreateSchoolResponse =
            serde_json::from_str(r#"{"success": false, "message": "School code already exists"}"#)
                .unwrap();
        assert!(!parsed.success);
        assert_eq!(parsed.message.as_deref(), Some("School code already exists"));
        assert!(parsed.data.is_none());
    }
}
