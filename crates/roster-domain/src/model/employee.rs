//! Employee - A person on the company's payroll
//!
//! Employee is an Entity (has identity). Two employees with the same id
//! are the same person, whatever else differs.
//!
//! The variant (developer, designer, manager) is a closed enum; each
//! variant answers the `Compensation` contract for itself.

use super::compensation::Compensation;
use super::designer::{Designer, Specialty};
use super::developer::{Developer, SeniorityLevel};
use super::ids::{EmployeeId, ProjectId};
use super::manager::Manager;
use super::project::Project;
use crate::error::RosterError;
use crate::service::assignment;

/// The three kinds of employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum EmployeeKind {
    Developer,
    Designer,
    Manager,
}

impl EmployeeKind {
    pub fn display_name(&self) -> &'static str {
        match self {
            EmployeeKind::Developer => "Developer",
            EmployeeKind::Designer => "Designer",
            EmployeeKind::Manager => "Manager",
        }
    }

    /// Case-insensitive; accepts the Spanish names too
    pub fn parse(raw: &str) -> Option<Self> {
        match raw.trim().to_lowercase().as_str() {
            "developer" | "dev" | "desarrollador" => Some(EmployeeKind::Developer),
            "designer" | "diseñador" | "disenador" => Some(EmployeeKind::Designer),
            "manager" | "gerente" => Some(EmployeeKind::Manager),
            _ => None,
        }
    }

    pub fn all() -> &'static [EmployeeKind] {
        &[
            EmployeeKind::Developer,
            EmployeeKind::Designer,
            EmployeeKind::Manager,
        ]
    }
}

impl core::fmt::Display for EmployeeKind {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.display_name())
    }
}

/// Variant-specific data of an employee
#[derive(Debug, Clone, PartialEq)]
pub enum EmployeeRole {
    Developer(Developer),
    Designer(Designer),
    Manager(Manager),
}

impl EmployeeRole {
    pub fn kind(&self) -> EmployeeKind {
        match self {
            EmployeeRole::Developer(_) => EmployeeKind::Developer,
            EmployeeRole::Designer(_) => EmployeeKind::Designer,
            EmployeeRole::Manager(_) => EmployeeKind::Manager,
        }
    }

    fn compensation(&self) -> &dyn Compensation {
        match self {
            EmployeeRole::Developer(developer) => developer,
            EmployeeRole::Designer(designer) => designer,
            EmployeeRole::Manager(manager) => manager,
        }
    }
}

/// Read-only snapshot handed to the shell for rendering
///
/// Field names are what the shell depends on; keep them stable.
#[derive(Debug, Clone, PartialEq)]
pub struct EmployeeSummary {
    pub name: String,
    pub id: EmployeeId,
    pub base_salary: f64,
    pub bonus: f64,
    pub total_salary: f64,
    pub project_count: usize,
}

/// Employee - The central entity of the roster
#[derive(Debug, Clone)]
pub struct Employee {
    /// Unique identifier (Entity identity)
    id: EmployeeId,
    name: String,
    base_salary: f64,
    /// Projects in assignment order, no duplicates
    projects: Vec<ProjectId>,
    role: EmployeeRole,
}

impl Employee {
    pub fn new(id: EmployeeId, name: impl Into<String>, base_salary: f64, role: EmployeeRole) -> Self {
        Self {
            id,
            name: name.into(),
            base_salary,
            projects: Vec::new(),
            role,
        }
    }

    pub fn developer(
        id: EmployeeId,
        name: impl Into<String>,
        base_salary: f64,
        languages: impl IntoIterator<Item = impl Into<String>>,
        level: SeniorityLevel,
    ) -> Self {
        Self::new(
            id,
            name,
            base_salary,
            EmployeeRole::Developer(Developer::new(languages, level)),
        )
    }

    pub fn designer(
        id: EmployeeId,
        name: impl Into<String>,
        base_salary: f64,
        tools: impl IntoIterator<Item = impl Into<String>>,
        specialty: Specialty,
    ) -> Self {
        Self::new(
            id,
            name,
            base_salary,
            EmployeeRole::Designer(Designer::new(tools, specialty)),
        )
    }

    pub fn manager(
        id: EmployeeId,
        name: impl Into<String>,
        base_salary: f64,
        department: impl Into<String>,
    ) -> Self {
        Self::new(id, name, base_salary, EmployeeRole::Manager(Manager::new(department)))
    }

    // ========== Getters ==========

    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn base_salary(&self) -> f64 {
        self.base_salary
    }

    pub fn projects(&self) -> &[ProjectId] {
        &self.projects
    }

    pub fn role(&self) -> &EmployeeRole {
        &self.role
    }

    pub fn kind(&self) -> EmployeeKind {
        self.role.kind()
    }

    pub fn is_manager(&self) -> bool {
        matches!(self.role, EmployeeRole::Manager(_))
    }

    pub fn as_manager(&self) -> Option<&Manager> {
        match &self.role {
            EmployeeRole::Manager(manager) => Some(manager),
            _ => None,
        }
    }

    pub fn as_manager_mut(&mut self) -> Option<&mut Manager> {
        match &mut self.role {
            EmployeeRole::Manager(manager) => Some(manager),
            _ => None,
        }
    }

    // ========== Pay ==========

    pub fn calculate_bonus(&self) -> f64 {
        self.role.compensation().bonus()
    }

    pub fn calculate_salary(&self) -> f64 {
        self.base_salary + self.calculate_bonus()
    }

    pub fn summary(&self) -> EmployeeSummary {
        EmployeeSummary {
            name: self.name.clone(),
            id: self.id,
            base_salary: self.base_salary,
            bonus: self.calculate_bonus(),
            total_salary: self.calculate_salary(),
            project_count: self.projects.len(),
        }
    }

    // ========== Projects ==========

    pub fn max_projects(&self) -> usize {
        self.role.compensation().max_projects()
    }

    pub fn has_capacity(&self) -> bool {
        self.projects.len() < self.max_projects()
    }

    pub fn is_assigned_to(&self, project: ProjectId) -> bool {
        self.projects.contains(&project)
    }

    /// Join a project; both sides are updated or neither is
    pub fn assign_to_project(&mut self, project: &mut Project) -> Result<(), RosterError> {
        assignment::assign(self, project)
    }

    pub(crate) fn attach(&mut self, project: ProjectId) {
        self.projects.push(project);
    }
}

impl PartialEq for Employee {
    fn eq(&self, other: &Self) -> bool {
        // Entity equality: same ID = same entity
        self.id == other.id
    }
}

impl Eq for Employee {}
