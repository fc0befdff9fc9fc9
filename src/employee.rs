//! Employee records and search criteria

use chrono::NaiveDate;
use serde::{Deserialize, Serialize};

/// Benefits-program state of an employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "snake_case")]
pub enum EnrollmentStatus {
    Enrolled,
    NotEnrolled,
    InProcess,
}

impl EnrollmentStatus {
    pub fn label(&self) -> &'static str {
        match self {
            EnrollmentStatus::Enrolled => "Enrolled",
            EnrollmentStatus::NotEnrolled => "Not enrolled",
            EnrollmentStatus::InProcess => "In process",
        }
    }
}

/// A single employee record as served by the directory.
///
/// Records are immutable once defined; there is no create/update/delete
/// lifecycle. `hire_date` and `email` are carried for the future detail view.
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct Employee {
    /// Internal identifier, unique within a dataset
    pub id: String,
    /// Externally visible employee code (e.g. DC0001)
    pub employee_number: String,
    pub name: String,
    pub department: String,
    pub status: EnrollmentStatus,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub hire_date: Option<NaiveDate>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub email: Option<String>,
}

/// User-supplied filter values for a directory search
#[derive(Debug, Clone, Default, PartialEq, Eq)]
pub struct SearchCriteria {
    pub employee_number: String,
    pub name: String,
}

impl SearchCriteria {
    /// True when both fields are empty or whitespace-only.
    /// Submissions with empty criteria are rejected before any data access.
    pub fn is_empty(&self) -> bool {
        self.employee_number.trim().is_empty() && self.name.trim().is_empty()
    }

    /// Case-insensitive substring match: every non-empty criterion must be
    /// contained in the corresponding record field. Only the employee number
    /// and name fields participate; the department never matches.
    pub fn matches(&self, employee: &Employee) -> bool {
        let number_ok = self.employee_number.is_empty()
            || employee
                .employee_number
                .to_lowercase()
                .contains(&self.employee_number.to_lowercase());

        let name_ok = self.name.is_empty()
            || employee
                .name
                .to_lowercase()
                .contains(&self.name.to_lowercase());

        number_ok && name_ok
    }
}

#[cfg(test)]
mod tests {
    use super::*;

    fn sample() -> Employee {
        Employee {
            id: "1".to_string(),
            employee_number: "DC0001".to_string(),
            name: "山田 太郎".to_string(),
            department: "人事部".to_string(),
            status: EnrollmentStatus::Enrolled,
            hire_date: NaiveDate::from_ymd_opt(2010, 4, 1),
            email: Some("taro.yamada@example.com".to_string()),
        }
    }

    fn criteria(number: &str, name: &str) -> SearchCriteria {
        SearchCriteria {
            employee_number: number.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn empty_criteria_detection() {
        assert!(criteria("", "").is_empty());
        assert!(criteria("   ", "\t").is_empty());
        assert!(!criteria("DC", "").is_empty());
        assert!(!criteria("", "山田").is_empty());
    }

    #[test]
    fn number_criterion_is_case_insensitive() {
        assert!(criteria("dc0001", "").matches(&sample()));
        assert!(criteria("DC00", "").matches(&sample()));
        assert!(!criteria("DC0002", "").matches(&sample()));
    }

    #[test]
    fn name_criterion_matches_substrings() {
        assert!(criteria("", "山田").matches(&sample()));
        assert!(criteria("", "太郎").matches(&sample()));
        assert!(!criteria("", "花子").matches(&sample()));
    }

    #[test]
    fn department_is_not_matched_by_the_name_criterion() {
        // 人事部 is the department of the sample record, not its name
        assert!(!criteria("", "人事部").matches(&sample()));
    }

    #[test]
    fn both_criteria_must_match() {
        assert!(criteria("DC0001", "山田").matches(&sample()));
        assert!(!criteria("DC0001", "花子").matches(&sample()));
        assert!(!criteria("DC0002", "山田").matches(&sample()));
    }

    #[test]
    fn status_serializes_as_snake_case() {
        let json = serde_json::to_string(&EnrollmentStatus::NotEnrolled).unwrap();
        assert_eq!(json, "\"not_enrolled\"");
    }

    #[test]
    fn record_round_trips_through_json() {
        let employee = sample();
        let json = serde_json::to_string(&employee).unwrap();
        let back: Employee = serde_json::from_str(&json).unwrap();
        assert_eq!(employee, back);
    }

    #[test]
    fn optional_fields_may_be_absent() {
        let json = r#"{
            "id": "9",
            "employee_number": "DC0009",
            "name": "試験 社員",
            "department": "総務部",
            "status": "in_process"
        }"#;
        let employee: Employee = serde_json::from_str(json).unwrap();
        assert_eq!(employee.hire_date, None);
        assert_eq!(employee.email, None);
    }
}
