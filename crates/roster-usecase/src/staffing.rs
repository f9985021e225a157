//! StaffingService - Hire, list, dismiss, staff projects, build teams
//!
//! Owns the `Company` for the lifetime of a session. All mutation goes
//! through here, one command at a time.

use roster_domain::{
    Company, EmployeeId, EmployeeSummary, Lookup, Project, ProjectId, RosterError,
};
use tracing::{debug, info, warn};

use crate::report::ProjectReport;
use crate::request::HireRequest;

pub struct StaffingService {
    company: Company,
}

impl StaffingService {
    pub fn new(company_name: impl Into<String>) -> Self {
        Self::from_company(Company::new(company_name))
    }

    pub fn from_company(company: Company) -> Self {
        Self { company }
    }

    pub fn company(&self) -> &Company {
        &self.company
    }

    /// Hire a new employee under a fresh id
    pub fn hire(&mut self, request: HireRequest) -> EmployeeSummary {
        let id = self.company.next_employee_id();
        let kind = request.kind();
        let employee = request.into_employee(id);
        let summary = employee.summary();
        self.company.add_employee(employee);

        info!(employee_id = %id, kind = %kind, name = %summary.name, "Employee hired");
        summary
    }

    /// Summaries of the whole staff, in hiring order
    pub fn roster(&self) -> Vec<EmployeeSummary> {
        let roster = self.company.list_employees();
        debug!(count = roster.len(), company = %self.company.name(), "Roster listed");
        roster
    }

    /// Remove an employee and detach it from its projects
    ///
    /// Returns the summary of the departed employee.
    pub fn dismiss(&mut self, id: EmployeeId) -> Result<EmployeeSummary, RosterError> {
        match self.company.remove_employee(id) {
            Ok(employee) => {
                info!(
                    employee_id = %id,
                    projects = employee.projects().len(),
                    "Employee dismissed"
                );
                Ok(employee.summary())
            }
            Err(err) => Err(rejected("dismiss", err)),
        }
    }

    pub fn open_project(&mut self, name: impl Into<String>, budget: f64) -> ProjectId {
        let id = self.company.next_project_id();
        let project = Project::new(id, name, budget);
        info!(project_id = %id, name = %project.name(), budget, "Project opened");
        self.company.add_project(project);
        id
    }

    pub fn assign(&mut self, employee: EmployeeId, project: ProjectId) -> Result<(), RosterError> {
        self.company
            .assign_to_project(employee, project)
            .map_err(|err| rejected("assign", err))?;

        info!(employee_id = %employee, project_id = %project, "Employee assigned to project");
        Ok(())
    }

    pub fn add_to_team(&mut self, manager: EmployeeId, member: EmployeeId) -> Result<(), RosterError> {
        self.company
            .add_to_team(manager, member)
            .map_err(|err| rejected("add_to_team", err))?;

        info!(manager_id = %manager, member_id = %member, "Team member added");
        Ok(())
    }

    pub fn project_report(&self, id: ProjectId) -> Result<ProjectReport, RosterError> {
        let project = self
            .company
            .project(id)
            .ok_or(RosterError::NotFound(Lookup::Project(id)))
            .map_err(|err| rejected("project_report", err))?;

        let report = ProjectReport::build(project, &self.company);
        debug!(project_id = %id, total_cost = report.total_cost, viable = report.viable, "Project report");
        Ok(report)
    }

    pub fn project_reports(&self) -> Vec<ProjectReport> {
        self.company
            .projects()
            .iter()
            .map(|project| ProjectReport::build(project, &self.company))
            .collect()
    }
}

fn rejected(operation: &str, err: RosterError) -> RosterError {
    warn!(operation, error = %err, "Operation rejected");
    err
}
