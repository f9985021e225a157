//! Manager - Leads a team, paid a share of the team's pay
//!
//! A manager is never a project member (`max_projects` is 0) and can only
//! lead developers and designers.

use super::compensation::Compensation;
use super::designer::Designer;
use super::developer::Developer;
use super::employee::{Employee, EmployeeRole};
use super::ids::EmployeeId;
use crate::error::RosterError;

/// Share of the team's total salary paid to the manager as bonus
pub const TEAM_BONUS_RATE: f64 = 0.15;

/// What a team member does
#[derive(Debug, Clone, PartialEq)]
pub enum MemberProfile {
    Developer(Developer),
    Designer(Designer),
}

impl MemberProfile {
    fn compensation(&self) -> &dyn Compensation {
        match self {
            MemberProfile::Developer(developer) => developer,
            MemberProfile::Designer(designer) => designer,
        }
    }
}

/// A developer or designer on a manager's team
///
/// Members are held by value. The pay inputs of a developer or designer
/// are fixed at hire time, so the member's salary matches the employee's.
#[derive(Debug, Clone, PartialEq)]
pub struct TeamMember {
    id: EmployeeId,
    name: String,
    base_salary: f64,
    profile: MemberProfile,
}

impl TeamMember {
    pub fn id(&self) -> EmployeeId {
        self.id
    }

    pub fn name(&self) -> &str {
        &self.name
    }

    pub fn profile(&self) -> &MemberProfile {
        &self.profile
    }

    pub fn calculate_salary(&self) -> f64 {
        self.base_salary + self.profile.compensation().bonus()
    }
}

impl TryFrom<&Employee> for TeamMember {
    type Error = RosterError;

    fn try_from(employee: &Employee) -> Result<Self, Self::Error> {
        let profile = match employee.role() {
            EmployeeRole::Developer(developer) => MemberProfile::Developer(developer.clone()),
            EmployeeRole::Designer(designer) => MemberProfile::Designer(designer.clone()),
            EmployeeRole::Manager(_) => {
                return Err(RosterError::InvalidTeamMember {
                    employee: employee.id(),
                    kind: employee.kind(),
                })
            }
        };

        Ok(Self {
            id: employee.id(),
            name: employee.name().to_string(),
            base_salary: employee.base_salary(),
            profile,
        })
    }
}

/// Manager-specific data
#[derive(Debug, Clone, PartialEq)]
pub struct Manager {
    department: String,
    team: Vec<TeamMember>,
}

impl Manager {
    pub fn new(department: impl Into<String>) -> Self {
        Self {
            department: department.into(),
            team: Vec::new(),
        }
    }

    pub fn department(&self) -> &str {
        &self.department
    }

    pub fn team(&self) -> &[TeamMember] {
        &self.team
    }

    /// Add a developer or designer to the team
    ///
    /// Anyone else is rejected with `InvalidTeamMember`.
    /// Duplicates are not checked.
    pub fn add_to_team(&mut self, employee: &Employee) -> Result<(), RosterError> {
        let member = TeamMember::try_from(employee)?;
        self.add_member(member);
        Ok(())
    }

    /// Add an already validated member
    pub fn add_member(&mut self, member: TeamMember) {
        self.team.push(member);
    }

    /// Sum of the team members' salaries
    pub fn team_payroll(&self) -> f64 {
        self.team.iter().map(TeamMember::calculate_salary).sum()
    }
}

impl Compensation for Manager {
    fn bonus(&self) -> f64 {
        TEAM_BONUS_RATE * self.team_payroll()
    }

    fn max_projects(&self) -> usize {
        0
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::model::designer::Specialty;
    use crate::model::developer::SeniorityLevel;

    fn senior_dev(id: u64, base: f64) -> Employee {
        Employee::developer(EmployeeId::new(id), "Dev", base, ["Rust"], SeniorityLevel::Senior)
    }

    #[test]
    fn test_empty_team_earns_no_bonus() {
        let manager = Manager::new("Engineering");
        assert_eq!(manager.bonus(), 0.0);
        assert_eq!(manager.max_projects(), 0);
    }

    #[test]
    fn test_bonus_is_share_of_team_salary() {
        let mut manager = Manager::new("Engineering");
        manager.add_to_team(&senior_dev(1, 1000.0)).unwrap();

        // Senior at 1000 base earns 2000, 15% of that is 300
        assert_eq!(manager.team_payroll(), 2000.0);
        assert!((manager.bonus() - 300.0).abs() < 1e-9);
    }

    #[test]
    fn test_mixed_team() {
        let mut manager = Manager::new("Product");
        manager.add_to_team(&senior_dev(1, 1000.0)).unwrap();
        manager
            .add_to_team(&Employee::designer(
                EmployeeId::new(2),
                "Des",
                800.0,
                ["Figma"],
                Specialty::Ux,
            ))
            .unwrap();

        assert_eq!(manager.team().len(), 2);
        assert_eq!(manager.team_payroll(), 3100.0);
    }

    #[test]
    fn test_manager_cannot_join_team() {
        let mut manager = Manager::new("Engineering");
        let other = Employee::manager(EmployeeId::new(9), "Boss", 5000.0, "Sales");

        let result = manager.add_to_team(&other);
        assert!(matches!(
            result,
            Err(RosterError::InvalidTeamMember { employee, .. }) if employee == EmployeeId::new(9)
        ));
        assert!(manager.team().is_empty());
    }

    #[test]
    fn test_duplicates_are_not_guarded() {
        let mut manager = Manager::new("Engineering");
        let dev = senior_dev(1, 1000.0);
        manager.add_to_team(&dev).unwrap();
        manager.add_to_team(&dev).unwrap();

        assert_eq!(manager.team().len(), 2);
        assert_eq!(manager.team_payroll(), 4000.0);
    }

    #[test]
    fn test_member_snapshot_keeps_identity() {
        let member = TeamMember::try_from(&senior_dev(4, 100.0)).unwrap();
        assert_eq!(member.id(), EmployeeId::new(4));
        assert_eq!(member.name(), "Dev");
        assert_eq!(member.calculate_salary(), 1100.0);
        assert!(matches!(member.profile(), MemberProfile::Developer(_)));
    }
}
