//! The aggregate school record collected across steps 1–6.

use serde::{Deserialize, Serialize};

use super::step::WizardStep;

/// Opaque reference to an uploaded file. The wizard never reads its content.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct FileRef {
    pub name: String,
}

/// Single-valued form fields (text, email, phone, password, select, date).
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum Field {
    // Basic details
    SchoolName,
    SchoolCode,
    SchoolType,
    EducationBoard,
    Description,
    // Address
    AddressLine1,
    AddressLine2,
    City,
    District,
    State,
    Country,
    Pincode,
    // Contact
    PrimaryContactName,
    PrimaryContactRole,
    PrimaryContactEmail,
    PrimaryContactPhone,
    AlternateContactName,
    AlternateContactEmail,
    AlternatePhone,
    // Admin credentials
    AdminEmail,
    AdminPassword,
    ConfirmPassword,
    // Academic setup
    AcademicYearStart,
    AcademicYearEnd,
    GradingSystem,
    AttendanceType,
    // Finance
    FeeStructureType,
    BillingContactEmail,
    BankName,
    AccountNumber,
    IfscCode,
    TaxId,
}

impl Field {
    pub const ALL: [Field; 32] = [
        Self::SchoolName,
        Self::SchoolCode,
        Self::SchoolType,
        Self::EducationBoard,
        Self::Description,
        Self::AddressLine1,
        Self::AddressLine2,
        Self::City,
        Self::District,
        Self::State,
        Self::Country,
        Self::Pincode,
        Self::PrimaryContactName,
        Self::PrimaryContactRole,
        Self::PrimaryContactEmail,
        Self::PrimaryContactPhone,
        Self::AlternateContactName,
        Self::AlternateContactEmail,
        Self::AlternatePhone,
        Self::AdminEmail,
        Self::AdminPassword,
        Self::ConfirmPassword,
        Self::AcademicYearStart,
        Self::AcademicYearEnd,
        Self::GradingSystem,
        Self::AttendanceType,
        Self::FeeStructureType,
        Self::BillingContactEmail,
        Self::BankName,
        Self::AccountNumber,
        Self::IfscCode,
        Self::TaxId,
    ];

    /// Wire name of the field.
    pub fn name(&self) -> &'static str {
        match self {
            Self::SchoolName => "schoolName",
            Self::SchoolCode => "schoolCode",
            Self::SchoolType => "schoolType",
            Self::EducationBoard => "educationBoard",
            Self::Description => "description",
            Self::AddressLine1 => "addressLine1",
            Self::AddressLine2 => "addressLine2",
            Self::City => "city",
            Self::District => "district",
            Self::State => "state",
            Self::Country => "country",
            Self::Pincode => "pincode",
            Self::PrimaryContactName => "primaryContactName",
            Self::PrimaryContactRole => "primaryContactRole",
            Self::PrimaryContactEmail => "primaryContactEmail",
            Self::PrimaryContactPhone => "primaryContactPhone",
            Self::AlternateContactName => "alternateContactName",
            Self::AlternateContactEmail => "alternateContactEmail",
            Self::AlternatePhone => "alternatePhone",
            Self::AdminEmail => "adminEmail",
            Self::AdminPassword => "adminPassword",
            Self::ConfirmPassword => "confirmPassword",
            Self::AcademicYearStart => "academicYearStart",
            Self::AcademicYearEnd => "academicYearEnd",
            Self::GradingSystem => "gradingSystem",
            Self::AttendanceType => "attendanceType",
            Self::FeeStructureType => "feeStructureType",
            Self::BillingContactEmail => "billingContactEmail",
            Self::BankName => "bankName",
            Self::AccountNumber => "accountNumber",
            Self::IfscCode => "ifscCode",
            Self::TaxId => "taxId",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    /// The step whose screen owns this field.
    pub fn step(&self) -> WizardStep {
        use Field::*;
        match self {
            SchoolName | SchoolCode | SchoolType | EducationBoard | Description => {
                WizardStep::BasicDetails
            }
            AddressLine1 | AddressLine2 | City | District | State | Country | Pincode => {
                WizardStep::Address
            }
            PrimaryContactName | PrimaryContactRole | PrimaryContactEmail
            | PrimaryContactPhone | AlternateContactName | AlternateContactEmail
            | AlternatePhone => WizardStep::Contact,
            AdminEmail | AdminPassword | ConfirmPassword => WizardStep::AdminCredentials,
            AcademicYearStart | AcademicYearEnd | GradingSystem | AttendanceType => {
                WizardStep::AcademicSetup
            }
            FeeStructureType | BillingContactEmail | BankName | AccountNumber | IfscCode
            | TaxId => WizardStep::Finance,
        }
    }

    /// Whether the field holds a secret that must not be echoed.
    pub fn is_secret(&self) -> bool {
        matches!(self, Self::AdminPassword | Self::ConfirmPassword)
    }
}

impl std::fmt::Display for Field {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// Multi-select fields with toggle semantics.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum MultiField {
    AcademicLevel,
    GradesOffered,
    SectionsPerGrade,
    SubjectsOffered,
    PaymentModes,
}

impl MultiField {
    pub const ALL: [MultiField; 5] = [
        Self::AcademicLevel,
        Self::GradesOffered,
        Self::SectionsPerGrade,
        Self::SubjectsOffered,
        Self::PaymentModes,
    ];

    pub fn name(&self) -> &'static str {
        match self {
            Self::AcademicLevel => "academicLevel",
            Self::GradesOffered => "gradesOffered",
            Self::SectionsPerGrade => "sectionsPerGrade",
            Self::SubjectsOffered => "subjectsOffered",
            Self::PaymentModes => "paymentModes",
        }
    }

    pub fn from_name(name: &str) -> Option<Self> {
        Self::ALL.into_iter().find(|f| f.name() == name)
    }

    pub fn step(&self) -> WizardStep {
        match self {
            Self::AcademicLevel => WizardStep::BasicDetails,
            Self::GradesOffered | Self::SectionsPerGrade | Self::SubjectsOffered => {
                WizardStep::AcademicSetup
            }
            Self::PaymentModes => WizardStep::Finance,
        }
    }
}

impl std::fmt::Display for MultiField {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(self.name())
    }
}

/// All values collected by the wizard, stored as one record.
///
/// Each field belongs to exactly one step, so editing one step can never
/// overwrite another step's data.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct SchoolForm {
    pub school_name: String,
    pub school_code: String,
    pub school_type: String,
    pub education_board: String,
    pub academic_level: Vec<String>,
    pub description: String,
    pub logo: Option<FileRef>,

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
    pub confirm_password: String,

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
}

impl Default for SchoolForm {
    fn default() -> Self {
        Self {
            school_name: String::new(),
            school_code: String::new(),
            school_type: String::new(),
            education_board: String::new(),
            academic_level: Vec::new(),
            description: String::new(),
            logo: None,
            address_line1: String::new(),
            address_line2: String::new(),
            city: String::new(),
            district: String::new(),
            state: String::new(),
            country: "India".to_string(),
            pincode: String::new(),
            primary_contact_name: String::new(),
            primary_contact_role: String::new(),
            primary_contact_email: String::new(),
            primary_contact_phone: String::new(),
            alternate_contact_name: String::new(),
            alternate_contact_email: String::new(),
            alternate_phone: String::new(),
            admin_email: String::new(),
            admin_password: String::new(),
            confirm_password: String::new(),
            academic_year_start: String::new(),
            academic_year_end: String::new(),
            grades_offered: Vec::new(),
            sections_per_grade: Vec::new(),
            grading_system: String::new(),
            attendance_type: String::new(),
            subjects_offered: Vec::new(),
            fee_structure_type: String::new(),
            billing_contact_email: String::new(),
            payment_modes: Vec::new(),
            bank_name: String::new(),
            account_number: String::new(),
            ifsc_code: String::new(),
            tax_id: String::new(),
        }
    }
}

impl SchoolForm {
    pub fn get(&self, field: Field) -> &str {
        self.slot(field)
    }

    pub fn set(&mut self, field: Field, value: impl Into<String>) {
        *self.slot_mut(field) = value.into();
    }

    pub fn options(&self, field: MultiField) -> &[String] {
        match field {
            MultiField::AcademicLevel => &self.academic_level,
            MultiField::GradesOffered => &self.grades_offered,
            MultiField::SectionsPerGrade => &self.sections_per_grade,
            MultiField::SubjectsOffered => &self.subjects_offered,
            MultiField::PaymentModes => &self.payment_modes,
        }
    }

    /// Select `value` if absent, deselect it if present.
    pub fn toggle(&mut self, field: MultiField, value: &str) {
        let set = match field {
            MultiField::AcademicLevel => &mut self.academic_level,
            MultiField::GradesOffered => &mut self.grades_offered,
            MultiField::SectionsPerGrade => &mut self.sections_per_grade,
            MultiField::SubjectsOffered => &mut self.subjects_offered,
            MultiField::PaymentModes => &mut self.payment_modes,
        };
        if let Some(pos) = set.iter().position(|v| v == value) {
            set.remove(pos);
        } else {
            set.push(value.to_string());
        }
    }

    fn slot(&self, field: Field) -> &String {
        match field {
            Field::SchoolName => &self.school_name,
            Field::SchoolCode => &self.school_code,
            Field::SchoolType => &self.school_type,
            Field::EducationBoard => &self.education_board,
            Field::Description => &self.description,
            Field::AddressLine1 => &self.address_line1,
            Field::AddressLine2 => &self.address_line2,
            Field::City => &self.city,
            Field::District => &self.district,
            Field::State => &self.state,
            Field::Country => &self.country,
            Field::Pincode => &self.pincode,
            Field::PrimaryContactName => &self.primary_contact_name,
            Field::PrimaryContactRole => &self.primary_contact_role,
            Field::PrimaryContactEmail => &self.primary_contact_email,
            Field::PrimaryContactPhone => &self.primary_contact_phone,
            Field::AlternateContactName => &self.alternate_contact_name,
            Field::AlternateContactEmail => &self.alternate_contact_email,
            Field::AlternatePhone => &self.alternate_phone,
            Field::AdminEmail => &self.admin_email,
            Field::AdminPassword => &self.admin_password,
            Field::ConfirmPassword => &self.confirm_password,
            Field::AcademicYearStart => &self.academic_year_start,
            Field::AcademicYearEnd => &self.academic_year_end,
            Field::GradingSystem => &self.grading_system,
            Field::AttendanceType => &self.attendance_type,
            Field::FeeStructureType => &self.fee_structure_type,
            Field::BillingContactEmail => &self.billing_contact_email,
            Field::BankName => &self.bank_name,
            Field::AccountNumber => &self.account_number,
            Field::IfscCode => &self.ifsc_code,
            Field::TaxId => &self.tax_id,
        }
    }

    fn slot_mut(&mut self, field: Field) -> &mut String {
        match field {
            Field::SchoolName => &mut self.school_name,
            Field::SchoolCode => &mut self.school_code,
            Field::SchoolType => &mut self.school_type,
            Field::EducationBoard => &mut self.education_board,
            Field::Description => &mut self.description,
            Field::AddressLine1 => &mut self.address_line1,
            Field::AddressLine2 => &mut self.address_line2,
            Field::City => &mut self.city,
            Field::District => &mut self.district,
            Field::State => &mut self.state,
            Field::Country => &mut self.country,
            Field::Pincode => &mut self.pincode,
            Field::PrimaryContactName => &mut self.primary_contact_name,
            Field::PrimaryContactRole => &mut self.primary_contact_role,
            Field::PrimaryContactEmail => &mut self.primary_contact_email,
            Field::PrimaryContactPhone => &mut self.primary_contact_phone,
            Field::AlternateContactName => &mut self.alternate_contact_name,
            Field::AlternateContactEmail => &mut self.alternate_contact_email,
            Field::AlternatePhone => &mut self.alternate_phone,
            Field::AdminEmail => &mut self.admin_email,
            Field::AdminPassword => &mut self.admin_password,
            Field::ConfirmPassword => &mut self.confirm_password,
            Field::AcademicYearStart => &mut self.academic_year_start,
            Field::AcademicYearEnd => &mut self.academic_year_end,
            Field::GradingSystem => &mut self.grading_system,
            Field::AttendanceType => &mut self.attendance_type,
            Field::FeeStructureType => &mut self.fee_structure_type,
            Field::BillingContactEmail => &mut self.billing_contact_email,
            Field::BankName => &mut self.bank_name,
            Field::AccountNumber => &mut self.account_number,
            Field::IfscCode => &mut self.ifsc_code,
            Field::TaxId => &mut self.tax_id,
        }
    }
}
