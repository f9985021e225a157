//! Company - The registry that owns everyone
//!
//! Company is the aggregate root of the roster. It owns the employees and
//! the projects, hands out their ids, and keeps project rosters in step
//! when somebody leaves.

use super::employee::{Employee, EmployeeSummary};
use super::ids::{EmployeeId, IdSequence, ProjectId};
use super::manager::TeamMember;
use super::project::Project;
use crate::error::{Lookup, RosterError};
use crate::repository::staff_directory::StaffDirectory;

#[derive(Debug, Clone)]
pub struct Company {
    name: String,
    /// Insertion order
    employees: Vec<Employee>,
    projects: Vec<Project>,
    employee_ids: IdSequence,
    project_ids: IdSequence,
}

impl Company {
    pub fn new(name: impl Into<String>) -> Self {
        Self {
            name: name.into(),
            employees: Vec::new(),
            projects: Vec::new(),
            employee_ids: IdSequence::new(),
            project_ids: IdSequence::new(),
        }
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    // ========== Id Allocation ==========

    /// Fresh id for an employee about to be constructed
    pub fn next_employee_id(&mut self) -> EmployeeId {
        self.employee_ids.next_employee_id()
    }

    pub fn next_project_id(&mut self) -> ProjectId {
        self.project_ids.next_project_id()
    }

    // ========== Employees ==========

    /// Append an employee
    ///
    /// Ids are not checked for duplicates; `next_employee_id` keeps them unique.
    pub fn add_employee(&mut self, employee: Employee) {
        self.employees.push(employee);
    }

    pub fn employees(&self) -> &[Employee] {
        &self.employees
    }

    pub fn employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employees.iter().find(|e| e.id() == id)
    }

    pub fn employee_mut(&mut self, id: EmployeeId) -> Option<&mut Employee> {
        self.employees.iter_mut().find(|e| e.id() == id)
    }

    /// Summaries of every employee, in insertion order
    pub fn list_employees(&self) -> Vec<EmployeeSummary> {
        self.employees.iter().map(Employee::summary).collect()
    }

    /// Remove the first employee with this id
    ///
    /// The employee is detached from every project it was on.
    /// An unknown id yields `NotFound` and leaves everything untouched.
    pub fn remove_employee(&mut self, id: EmployeeId) -> Result<Employee, RosterError> {
        let position = self
            .employees
            .iter()
            .position(|e| e.id() == id)
            .ok_or(RosterError::NotFound(Lookup::Employee(id)))?;

        let employee = self.employees.remove(position);
        for project_id in employee.projects() {
            if let Some(project) = self.projects.iter_mut().find(|p| p.id() == *project_id) {
                project.detach(id);
            }
        }

        Ok(employee)
    }

    // ========== Projects ==========

    pub fn add_project(&mut self, project: Project) {
        self.projects.push(project);
    }

    pub fn projects(&self) -> &[Project] {
        &self.projects
    }

    pub fn project(&self, id: ProjectId) -> Option<&Project> {
        self.projects.iter().find(|p| p.id() == id)
    }

    /// Put an employee on a project (paired update)
    pub fn assign_to_project(
        &mut self,
        employee_id: EmployeeId,
        project_id: ProjectId,
    ) -> Result<(), RosterError> {
        let employee = self
            .employees
            .iter_mut()
            .find(|e| e.id() == employee_id)
            .ok_or(RosterError::NotFound(Lookup::Employee(employee_id)))?;
        let project = self
            .projects
            .iter_mut()
            .find(|p| p.id() == project_id)
            .ok_or(RosterError::NotFound(Lookup::Project(project_id)))?;

        employee.assign_to_project(project)
    }

    // ========== Teams ==========

    /// Add an employee to a manager's team
    pub fn add_to_team(
        &mut self,
        manager_id: EmployeeId,
        member_id: EmployeeId,
    ) -> Result<(), RosterError> {
        let member = self
            .employee(member_id)
            .ok_or(RosterError::NotFound(Lookup::Employee(member_id)))?;
        let member = TeamMember::try_from(member)?;

        let manager = self
            .employee_mut(manager_id)
            .ok_or(RosterError::NotFound(Lookup::Employee(manager_id)))?
            .as_manager_mut()
            .ok_or_else(|| RosterError::InvalidOperation {
                employee: manager_id,
                reason: "only managers lead a team".to_string(),
            })?;

        manager.add_member(member);
        Ok(())
    }
}

impl StaffDirectory for Company {
    fn find_employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.employee(id)
    }
}
