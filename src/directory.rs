//! Employee data sources
//!
//! The UI only ever talks to the [`EmployeeDirectory`] trait, so the mock
//! in-memory directory can be swapped for a real backend without touching
//! the component logic.

use std::collections::HashSet;
use std::fs;
use std::path::Path;
use std::thread;
use std::time::Duration;

use tracing::debug;

use crate::employee::{Employee, EnrollmentStatus, SearchCriteria};
use crate::error::{EmSearchError, Result};

/// Read-only source of employee records
pub trait EmployeeDirectory: Send + Sync {
    /// Return all records matching the criteria, preserving store order.
    /// Empty criteria yield an empty result set, never the whole store.
    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Employee>>;
}

/// In-memory directory standing in for the real backend.
///
/// Sleeps for a configurable latency before resolving so the UI's loading
/// state is observable, the way the original service's delayed response was.
pub struct InMemoryDirectory {
    records: Vec<Employee>,
    latency: Duration,
}

impl InMemoryDirectory {
    pub fn new(records: Vec<Employee>) -> Self {
        Self {
            records,
            latency: Duration::from_millis(500),
        }
    }

    pub fn with_latency(mut self, latency: Duration) -> Self {
        self.latency = latency;
        self
    }
}

impl EmployeeDirectory for InMemoryDirectory {
    fn search(&self, criteria: &SearchCriteria) -> Result<Vec<Employee>> {
        // Simulated backend round-trip
        if !self.latency.is_zero() {
            thread::sleep(self.latency);
        }

        if criteria.is_empty() {
            return Ok(Vec::new());
        }

        let results: Vec<Employee> = self
            .records
            .iter()
            .filter(|employee| criteria.matches(employee))
            .cloned()
            .collect();

        debug!(matches = results.len(), "directory search finished");
        Ok(results)
    }
}

/// The five records the mock backend ships with
pub fn builtin_records() -> Vec<Employee> {
    vec![
        Employee {
            id: "1".to_string(),
            employee_number: "DC0001".to_string(),
            name: "山田 太郎".to_string(),
            department: "人事部".to_string(),
            status: EnrollmentStatus::Enrolled,
            hire_date: chrono::NaiveDate::from_ymd_opt(2010, 4, 1),
            email: Some("taro.yamada@example.com".to_string()),
        },
        Employee {
            id: "2".to_string(),
            employee_number: "DC0002".to_string(),
            name: "佐藤 花子".to_string(),
            department: "営業部".to_string(),
            status: EnrollmentStatus::NotEnrolled,
            hire_date: chrono::NaiveDate::from_ymd_opt(2015, 4, 1),
            email: Some("hanako.sato@example.com".to_string()),
        },
        Employee {
            id: "3".to_string(),
            employee_number: "DC0003".to_string(),
            name: "鈴木 一郎".to_string(),
            department: "開発部".to_string(),
            status: EnrollmentStatus::InProcess,
            hire_date: chrono::NaiveDate::from_ymd_opt(2018, 10, 1),
            email: Some("ichiro.suzuki@example.com".to_string()),
        },
        Employee {
            id: "4".to_string(),
            employee_number: "DC0004".to_string(),
            name: "高橋 良子".to_string(),
            department: "人事部".to_string(),
            status: EnrollmentStatus::Enrolled,
            hire_date: chrono::NaiveDate::from_ymd_opt(2012, 7, 1),
            email: Some("ryoko.takahashi@example.com".to_string()),
        },
        Employee {
            id: "5".to_string(),
            employee_number: "DC0005".to_string(),
            name: "田中 健太".to_string(),
            department: "経理部".to_string(),
            status: EnrollmentStatus::NotEnrolled,
            hire_date: chrono::NaiveDate::from_ymd_opt(2020, 4, 1),
            email: Some("kenta.tanaka@example.com".to_string()),
        },
    ]
}

/// Parse a JSON array of employee records and validate it
pub fn records_from_json(data: &str) -> Result<Vec<Employee>> {
    let records: Vec<Employee> = serde_json::from_str(data)?;
    validate_records(&records)?;
    Ok(records)
}

/// Load employee records from a JSON file
pub fn load_records(path: &Path) -> Result<Vec<Employee>> {
    let data = fs::read_to_string(path)
        .map_err(|e| EmSearchError::DataLoad(path.display().to_string(), e.to_string()))?;
    records_from_json(&data)
}

/// Ids must be unique and employee numbers non-blank; everything else is
/// treated as opaque data.
fn validate_records(records: &[Employee]) -> Result<()> {
    let mut seen = HashSet::new();
    for record in records {
        if record.employee_number.trim().is_empty() {
            return Err(EmSearchError::InvalidRecord(format!(
                "employee '{}' has a blank employee number",
                record.id
            )));
        }
        if !seen.insert(record.id.as_str()) {
            return Err(EmSearchError::InvalidRecord(format!(
                "duplicate employee id '{}'",
                record.id
            )));
        }
    }
    Ok(())
}

#[cfg(test)]
mod tests {
    use super::*;

    fn directory() -> InMemoryDirectory {
        InMemoryDirectory::new(builtin_records()).with_latency(Duration::ZERO)
    }

    fn criteria(number: &str, name: &str) -> SearchCriteria {
        SearchCriteria {
            employee_number: number.to_string(),
            name: name.to_string(),
        }
    }

    #[test]
    fn builtin_dataset_has_five_records() {
        assert_eq!(builtin_records().len(), 5);
    }

    #[test]
    fn exact_employee_number_returns_one_record() {
        let results = directory().search(&criteria("DC0001", "")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].name, "山田 太郎");
    }

    #[test]
    fn department_text_in_name_field_finds_nothing() {
        // 人事部 is a department, so searching it as a name yields no results
        let results = directory().search(&criteria("", "人事部")).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn lowercase_prefix_matches_every_record() {
        // All builtin employee numbers start with "DC"
        let results = directory().search(&criteria("dc", "")).unwrap();
        assert_eq!(results.len(), 5);
    }

    #[test]
    fn results_preserve_store_order() {
        let results = directory().search(&criteria("dc", "")).unwrap();
        let ids: Vec<&str> = results.iter().map(|e| e.id.as_str()).collect();
        assert_eq!(ids, ["1", "2", "3", "4", "5"]);
    }

    #[test]
    fn empty_criteria_resolve_to_an_empty_set() {
        let results = directory().search(&criteria("", "")).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn whitespace_only_field_matches_nothing() {
        // The raw criterion " " is non-empty, and no employee number
        // contains a space
        let results = directory().search(&criteria(" ", "山田")).unwrap();
        assert!(results.is_empty());
    }

    #[test]
    fn repeated_search_is_idempotent() {
        let dir = directory();
        let first = dir.search(&criteria("", "田")).unwrap();
        let second = dir.search(&criteria("", "田")).unwrap();
        assert_eq!(first, second);
        assert!(!first.is_empty());
    }

    #[test]
    fn both_criteria_combine_with_and() {
        let dir = directory();
        let results = dir.search(&criteria("DC000", "山田")).unwrap();
        assert_eq!(results.len(), 1);
        assert_eq!(results[0].employee_number, "DC0001");
    }

    #[test]
    fn json_dataset_round_trips() {
        let json = serde_json::to_string(&builtin_records()).unwrap();
        let records = records_from_json(&json).unwrap();
        assert_eq!(records, builtin_records());
    }

    #[test]
    fn duplicate_ids_are_rejected() {
        let mut records = builtin_records();
        records[4].id = "1".to_string();
        let json = serde_json::to_string(&records).unwrap();
        let err = records_from_json(&json).unwrap_err();
        assert!(matches!(err, EmSearchError::InvalidRecord(_)));
    }

    #[test]
    fn blank_employee_numbers_are_rejected() {
        let mut records = builtin_records();
        records[2].employee_number = "   ".to_string();
        let json = serde_json::to_string(&records).unwrap();
        let err = records_from_json(&json).unwrap_err();
        assert!(matches!(err, EmSearchError::InvalidRecord(_)));
    }

    #[test]
    fn missing_file_reports_the_path() {
        let err = load_records(Path::new("/nonexistent/employees.json")).unwrap_err();
        match err {
            EmSearchError::DataLoad(path, _) => assert!(path.contains("employees.json")),
            other => panic!("unexpected error: {other}"),
        }
    }
}
