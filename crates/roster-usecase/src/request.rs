//! HireRequest - Everything needed to construct a new employee

use roster_domain::{Employee, EmployeeId, EmployeeKind, SeniorityLevel, Specialty};

#[derive(Debug, Clone, PartialEq)]
pub enum HireRequest {
    Developer {
        name: String,
        base_salary: f64,
        languages: Vec<String>,
        level: SeniorityLevel,
    },
    Designer {
        name: String,
        base_salary: f64,
        tools: Vec<String>,
        specialty: Specialty,
    },
    Manager {
        name: String,
        base_salary: f64,
        department: String,
    },
}

impl HireRequest {
    pub fn kind(&self) -> EmployeeKind {
        match self {
            HireRequest::Developer { .. } => EmployeeKind::Developer,
            HireRequest::Designer { .. } => EmployeeKind::Designer,
            HireRequest::Manager { .. } => EmployeeKind::Manager,
        }
    }

    pub fn name(&self) -> &str {
        match self {
            HireRequest::Developer { name, .. }
            | HireRequest::Designer { name, .. }
            | HireRequest::Manager { name, .. } => name,
        }
    }

    /// Build the employee under the given id
    pub fn into_employee(self, id: EmployeeId) -> Employee {
        match self {
            HireRequest::Developer {
                name,
                base_salary,
                languages,
                level,
            } => Employee::developer(id, name, base_salary, languages, level),
            HireRequest::Designer {
                name,
                base_salary,
                tools,
                specialty,
            } => Employee::designer(id, name, base_salary, tools, specialty),
            HireRequest::Manager {
                name,
                base_salary,
                department,
            } => Employee::manager(id, name, base_salary, department),
        }
    }
}
