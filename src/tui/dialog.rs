use crate::employee::Employee;

/// Modal dialog for the per-row "view details" action.
///
/// A real detail screen has no defined contract yet, so this only surfaces
/// the record's identifier and name, like the placeholder it replaces.
pub struct DetailDialog {
    pub title: String,
    pub lines: Vec<String>,
}

impl DetailDialog {
    pub fn for_employee(employee: &Employee) -> Self {
        Self {
            title: "Employee Details".to_string(),
            lines: vec![
                format!("ID:   {}", employee.id),
                format!("Name: {}", employee.name),
                String::new(),
                "The full detail screen is not available yet.".to_string(),
            ],
        }
    }
}
