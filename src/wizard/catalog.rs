//! Choice lists offered by the onboarding screens.
//!
//! These only populate selects and checkbox groups; validation does not
//! require a value to come from them.

use super::form::{Field, MultiField};

pub const SCHOOL_TYPES: &[&str] = &["Private", "Public", "International", "Government"];

pub const EDUCATION_BOARDS: &[&str] = &["CBSE", "ICSE", "IB", "State Board", "IGCSE"];

pub const ACADEMIC_LEVELS: &[&str] = &[
    "Nursery",
    "K-12",
    "Primary",
    "High School",
    "Senior Secondary",
];

pub const INDIAN_STATES: &[&str] = &[
    "Andhra Pradesh",
    "Arunachal Pradesh",
    "Assam",
    "Bihar",
    "Chhattisgarh",
    "Goa",
    "Gujarat",
    "Haryana",
    "Himachal Pradesh",
    "Jharkhand",
    "Karnataka",
    "Kerala",
    "Madhya Pradesh",
    "Maharashtra",
    "Manipur",
    "Meghalaya",
    "Mizoram",
    "Nagaland",
    "Odisha",
    "Punjab",
    "Rajasthan",
    "Sikkim",
    "Tamil Nadu",
    "Telangana",
    "Tripura",
    "Uttar Pradesh",
    "Uttarakhand",
    "West Bengal",
];

pub const CONTACT_ROLES: &[&str] = &[
    "Principal",
    "School Admin",
    "Director",
    "Vice Principal",
    "Coordinator",
];

pub const GRADES: &[&str] = &[
    "Nursery", "LKG", "UKG", "Class 1", "Class 2", "Class 3", "Class 4", "Class 5", "Class 6",
    "Class 7", "Class 8", "Class 9", "Class 10", "Class 11", "Class 12",
];

pub const SECTIONS: &[&str] = &["A", "B", "C", "D", "E"];

pub const GRADING_SYSTEMS: &[&str] = &[
    "Percentage",
    "GPA (10 scale)",
    "GPA (4 scale)",
    "Grade-based (A-F)",
];

pub const ATTENDANCE_TYPES: &[&str] = &["Daily", "Period-wise", "Hourly"];

pub const COMMON_SUBJECTS: &[&str] = &[
    "Mathematics",
    "English",
    "Science",
    "Social Studies",
    "Hindi",
    "Computer Science",
    "Physical Education",
    "Art",
    "Music",
];

pub const FEE_STRUCTURES: &[&str] = &["Monthly", "Term-wise", "Quarterly", "Annual"];

pub const PAYMENT_MODES: &[&str] = &["Cash", "UPI", "Bank Transfer", "Cheque", "Online Payment"];

/// Choices for a single-select field, if it is a select rather than free text.
pub fn choices_for(field: Field) -> Option<&'static [&'static str]> {
    match field {
        Field::SchoolType => Some(SCHOOL_TYPES),
        Field::EducationBoard => Some(EDUCATION_BOARDS),
        Field::State => Some(INDIAN_STATES),
        Field::PrimaryContactRole => Some(CONTACT_ROLES),
        Field::GradingSystem => Some(GRADING_SYSTEMS),
        Field::AttendanceType => Some(ATTENDANCE_TYPES),
        Field::FeeStructureType => Some(FEE_STRUCTURES),
        _ => None,
    }
}

/// Choices for a multi-select field.
pub fn options_for(field: MultiField) -> &'static [&'static str] {
    match field {
        MultiField::AcademicLevel => ACADEMIC_LEVELS,
        MultiField::GradesOffered => GRADES,
        MultiField::SectionsPerGrade => SECTIONS,
        MultiField::SubjectsOffered => COMMON_SUBJECTS,
        MultiField::PaymentModes => PAYMENT_MODES,
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn selects_have_choices_free_text_does_not() {
        assert_eq!(choices_for(Field::SchoolType), Some(SCHOOL_TYPES));
        assert_eq!(choices_for(Field::State).map(|c| c.len()), Some(28));
        assert_eq!(choices_for(Field::SchoolName), None);
        assert_eq!(choices_for(Field::AdminPassword), None);
    }

    #[test]
    fn every_multi_select_has_options() {
        for field in MultiField::ALL {
            assert!(!options_for(field).is_empty(), "{field} has no options");
        }
        assert_eq!(GRADES.len(), 15);
    }
}
