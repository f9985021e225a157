//! Errors raised by roster operations
//!
//! Every variant is recoverable. The shell reports it and carries on.

use crate::model::employee::EmployeeKind;
use crate::model::ids::{EmployeeId, ProjectId};

/// What a failed lookup was looking for
#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Lookup {
    Employee(EmployeeId),
    Project(ProjectId),
}

impl core::fmt::Display for Lookup {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            Lookup::Employee(id) => write!(f, "employee with ID {}", id),
            Lookup::Project(id) => write!(f, "project with ID {}", id),
        }
    }
}

#[derive(Debug, Clone, PartialEq)]
pub enum RosterError {
    /// The employee may not take part in this operation at all
    InvalidOperation { employee: EmployeeId, reason: String },
    /// The employee is already on as many projects as allowed
    CapacityExceeded {
        employee: EmployeeId,
        name: String,
        max_projects: usize,
    },
    /// The employee is already on the project
    DuplicateAssignment {
        employee: EmployeeId,
        project: ProjectId,
    },
    /// Only developers and designers may join a team
    InvalidTeamMember {
        employee: EmployeeId,
        kind: EmployeeKind,
    },
    NotFound(Lookup),
}

impl RosterError {
    pub fn is_not_found(&self) -> bool {
        matches!(self, RosterError::NotFound(_))
    }
}

impl core::fmt::Display for RosterError {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        match self {
            RosterError::InvalidOperation { employee, reason } => {
                write!(f, "Invalid operation for employee {}: {}", employee, reason)
            }
            RosterError::CapacityExceeded {
                employee,
                name,
                max_projects,
            } => write!(
                f,
                "{} (ID {}) already has the maximum of {} project(s)",
                name, employee, max_projects
            ),
            RosterError::DuplicateAssignment { employee, project } => {
                write!(f, "Employee {} is already on project {}", employee, project)
            }
            RosterError::InvalidTeamMember { employee, kind } => write!(
                f,
                "Employee {} is a {}; only developers and designers can join a team",
                employee, kind
            ),
            RosterError::NotFound(lookup) => write!(f, "No {} was found", lookup),
        }
    }
}

impl std::error::Error for RosterError {}

#[cfg(test)]
mod tests {
    use super::*;

    #[test]
    fn test_not_found_message() {
        let err = RosterError::NotFound(Lookup::Employee(EmployeeId::new(42)));
        assert_eq!(err.to_string(), "No employee with ID 42 was found");
        assert!(err.is_not_found());
    }

    #[test]
    fn test_capacity_message_names_employee() {
        let err = RosterError::CapacityExceeded {
            employee: EmployeeId::new(1),
            name: "Ana".to_string(),
            max_projects: 3,
        };
        assert!(err.to_string().contains("Ana"));
        assert!(!err.is_not_found());
    }
}
