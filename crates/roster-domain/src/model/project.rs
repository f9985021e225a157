//! Project - A budget and the people working against it
//!
//! A project references its members by id; the company owns them.

use super::employee::Employee;
use super::ids::{EmployeeId, ProjectId};
use crate::error::RosterError;
use crate::repository::staff_directory::StaffDirectory;
use crate::service::assignment;

/// Share of the budget the members' pay may use up
pub const VIABILITY_RATIO: f64 = 0.7;

#[derive(Debug, Clone, PartialEq)]
pub struct Project {
    id: ProjectId,
    name: String,
    budget: f64,
    /// Members in assignment order, no duplicates
    members: Vec<EmployeeId>,
}

impl Project {
    pub fn new(id: ProjectId, name: impl Into<String>, budget: f64) -> Self {
        Self {
            id,
            name: name.into(),
            budget,
            members: Vec::new(),
        }
    }

    // ========== Getters ==========

    pub fn id(&self) -> ProjectId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn budget(&self) -> f64 {
        self.budget
    }

    pub fn members(&self) -> &[EmployeeId] {
        &self.members
    }

    pub fn has_member(&self, employee: EmployeeId) -> bool {
        self.members.contains(&employee)
    }

    // ========== Membership ==========

    /// Enrol an employee; both sides are updated or neither is
    pub fn add_employee(&mut self, employee: &mut Employee) -> Result<(), RosterError> {
        assignment::enroll(self, employee)
    }

    pub(crate) fn attach(&mut self, employee: EmployeeId) {
        self.members.push(employee);
    }

    /// Drop a member; returns whether it was there
    pub(crate) fn detach(&mut self, employee: EmployeeId) -> bool {
        let before = self.members.len();
        self.members.retain(|member| *member != employee);
        self.members.len() != before
    }

    // ========== Cost ==========

    /// Sum of the members' salaries
    ///
    /// Members the directory does not know contribute nothing.
    pub fn total_cost<D: StaffDirectory + ?Sized>(&self, staff: &D) -> f64 {
        self.members
            .iter()
            .filter_map(|id| staff.find_employee(*id))
            .map(Employee::calculate_salary)
            .sum()
    }

    /// Highest total cost that still counts as viable
    pub fn cost_ceiling(&self) -> f64 {
        self.budget * VIABILITY_RATIO
    }

    pub fn is_viable<D: StaffDirectory + ?Sized>(&self, staff: &D) -> bool {
        self.total_cost(staff) <= self.cost_ceiling()
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::designer::Specialty;
    use crate::model::developer::SeniorityLevel;

    fn project(budget: f64) -> Project {
        Project::new(ProjectId::new(1), "Website", budget)
    }

    fn developer(id: u64, base: f64, level: SeniorityLevel) -> Employee {
        Employee::developer(EmployeeId::new(id), "Dev", base, ["Rust"], level)
    }

    #[test]
    fn test_empty_project_is_viable() {
        let staff: Vec<Employee> = Vec::new();
        let p = project(0.0);
        assert_eq!(p.total_cost(staff.as_slice()), 0.0);
        assert!(p.is_viable(staff.as_slice()));
    }

    #[test]
    fn test_over_budget_is_not_viable() {
        let mut p = project(1000.0);
        let mut dev = developer(1, 600.0, SeniorityLevel::Senior);
        dev.assign_to_project(&mut p).unwrap();

        let staff = vec![dev];
        assert_eq!(p.total_cost(staff.as_slice()), 1600.0);
        assert!(!p.is_viable(staff.as_slice()));
    }

    #[test]
    fn test_viability_boundary_is_inclusive() {
        let mut p = project(1000.0);
        let mut dev = developer(1, 500.0, SeniorityLevel::Junior);
        dev.assign_to_project(&mut p).unwrap();

        let staff = vec![dev];
        assert_eq!(p.total_cost(staff.as_slice()), 700.0);
        assert!(p.is_viable(staff.as_slice()));
    }

    #[test]
    fn test_just_over_boundary() {
        let mut p = project(1000.0);
        let mut dev = developer(1, 500.5, SeniorityLevel::Junior);
        dev.assign_to_project(&mut p).unwrap();

        let staff = vec![dev];
        assert!(!p.is_viable(staff.as_slice()));
    }

    #[test]
    fn test_total_cost_sums_members() {
        let mut p = project(10_000.0);
        let mut dev = developer(1, 1000.0, SeniorityLevel::Senior);
        let mut des = Employee::designer(EmployeeId::new(2), "Des", 800.0, ["Photoshop"], Specialty::Graphic);
        dev.assign_to_project(&mut p).unwrap();
        p.add_employee(&mut des).unwrap();

        let staff = vec![dev, des];
        assert_eq!(p.total_cost(staff.as_slice()), 3000.0);
        assert_eq!(p.members(), &[EmployeeId::new(1), EmployeeId::new(2)]);
    }

    #[test]
    fn test_unknown_members_cost_nothing() {
        let mut p = project(1000.0);
        let mut dev = developer(1, 100.0, SeniorityLevel::Junior);
        dev.assign_to_project(&mut p).unwrap();

        let nobody: Vec<Employee> = Vec::new();
        assert_eq!(p.total_cost(nobody.as_slice()), 0.0);
    }

    #[test]
    fn test_detach() {
        let mut p = project(1000.0);
        let mut dev = developer(1, 100.0, SeniorityLevel::Junior);
        dev.assign_to_project(&mut p).unwrap();

        assert!(p.detach(EmployeeId::new(1)));
        assert!(!p.detach(EmployeeId::new(1)));
        assert!(p.members().is_empty());
    }
}
