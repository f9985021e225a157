//! ProjectReport - Cost and viability of one project, ready to render

use roster_domain::{EmployeeId, Project, ProjectId, StaffDirectory};

#[derive(Debug, Clone, PartialEq)]
pub struct ProjectReport {
    pub id: ProjectId,
    pub name: String,
    pub budget: f64,
    pub members: Vec<EmployeeId>,
    pub total_cost: f64,
    /// Highest total cost that is still viable
    pub cost_ceiling: f64,
    pub viable: bool,
}

impl ProjectReport {
    pub fn build<D: StaffDirectory + ?Sized>(project: &Project, staff: &D) -> Self {
        Self {
            id: project.id(),
            name: project.name().to_string(),
            budget: project.budget(),
            members: project.members().to_vec(),
            total_cost: project.total_cost(staff),
            cost_ceiling: project.cost_ceiling(),
            viable: project.is_viable(staff),
        }
    }
}
