//! Assignment - The one place an employee and a project get linked
//!
//! Membership is mirrored: the employee lists the project and the project
//! lists the employee. Both entry points validate everything first and only
//! then update the two sides together, so a failed call changes nothing.
//!
//! ```text
//! Employee::assign_to_project ──► assign() ─┐
//!                                           ├──► link()  (both sides)
//! Project::add_employee ────────► enroll() ─┘
//! ```

use crate::error::RosterError;
use crate::model::employee::Employee;
use crate::model::project::Project;

/// Assignment started from the employee side
///
/// Checks, in order: manager, capacity, duplicate.
pub fn assign(employee: &mut Employee, project: &mut Project) -> Result<(), RosterError> {
    reject_manager(employee)?;
    check_capacity(employee)?;
    check_duplicate(employee, project)?;
    link(employee, project);
    Ok(())
}

/// Assignment started from the project side
///
/// Checks, in order: duplicate, manager, capacity.
pub fn enroll(project: &mut Project, employee: &mut Employee) -> Result<(), RosterError> {
    check_duplicate(employee, project)?;
    reject_manager(employee)?;
    check_capacity(employee)?;
    link(employee, project);
    Ok(())
}

fn reject_manager(employee: &Employee) -> Result<(), RosterError> {
    if employee.is_manager() {
        return Err(RosterError::InvalidOperation {
            employee: employee.id(),
            reason: "managers cannot be assigned as project members".to_string(),
        });
    }
    Ok(())
}

fn check_capacity(employee: &Employee) -> Result<(), RosterError> {
    if !employee.has_capacity() {
        return Err(RosterError::CapacityExceeded {
            employee: employee.id(),
            name: employee.name().to_string(),
            max_projects: employee.max_projects(),
        });
    }
    Ok(())
}

fn check_duplicate(employee: &Employee, project: &Project) -> Result<(), RosterError> {
    if employee.is_assigned_to(project.id()) || project.has_member(employee.id()) {
        return Err(RosterError::DuplicateAssignment {
            employee: employee.id(),
            project: project.id(),
        });
    }
    Ok(())
}

fn link(employee: &mut Employee, project: &mut Project) {
    employee.attach(project.id());
    project.attach(employee.id());
}
