//! Rendering of roster data for the terminal

use console::style;
use roster_usecase::roster_domain::EmployeeSummary;
use roster_usecase::ProjectReport;
use serde::Serialize;

const RULE_WIDTH: usize = 60;

/// JSON shape of an employee summary
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct SummaryView {
    pub name: String,
    pub id: u64,
    pub base_salary: f64,
    pub bonus: f64,
    pub total_salary: f64,
    pub project_count: usize,
}

impl From<&EmployeeSummary> for SummaryView {
    fn from(summary: &EmployeeSummary) -> Self {
        Self {
            name: summary.name.clone(),
            id: summary.id.value(),
            base_salary: summary.base_salary,
            bonus: summary.bonus,
            total_salary: summary.total_salary,
            project_count: summary.project_count,
        }
    }
}

/// JSON shape of a project report
#[derive(Debug, Clone, PartialEq, Serialize)]
pub struct ProjectView {
    pub id: u64,
    pub name: String,
    pub budget: f64,
    pub members: Vec<u64>,
    pub total_cost: f64,
    pub cost_ceiling: f64,
    pub viable: bool,
}

impl From<&ProjectReport> for ProjectView {
    fn from(report: &ProjectReport) -> Self {
        Self {
            id: report.id.value(),
            name: report.name.clone(),
            budget: report.budget,
            members: report.members.iter().map(|id| id.value()).collect(),
            total_cost: report.total_cost,
            cost_ceiling: report.cost_ceiling,
            viable: report.viable,
        }
    }
}

fn rule() -> String {
    "-".repeat(RULE_WIDTH)
}

pub fn roster_text(company: &str, roster: &[EmployeeSummary]) -> String {
    let mut out = String::new();
    out.push_str(&format!("\n{}\n", style(format!("Employees at {}", company)).bold()));
    out.push_str(&rule());
    out.push('\n');

    if roster.is_empty() {
        out.push_str("(no employees)\n");
        return out;
    }

    for summary in roster {
        out.push_str(&format!("Name: {}\n", summary.name));
        out.push_str(&format!("ID: {}\n", summary.id));
        out.push_str(&format!("Base salary: ${:.2}\n", summary.base_salary));
        out.push_str(&format!("Bonus: ${:.2}\n", summary.bonus));
        out.push_str(&format!("Total salary: ${:.2}\n", summary.total_salary));
        out.push_str(&format!("Projects assigned: {}\n", summary.project_count));
        out.push_str(&rule());
        out.push('\n');
    }
    out
}

pub fn roster_json(roster: &[EmployeeSummary]) -> serde_json::Result<String> {
    let views: Vec<SummaryView> = roster.iter().map(SummaryView::from).collect();
    serde_json::to_string_pretty(&views)
}

pub fn project_text(report: &ProjectReport) -> String {
    let members: Vec<String> = report.members.iter().map(|id| id.to_string()).collect();
    let verdict = if report.viable {
        style("viable").green()
    } else {
        style("not viable").red()
    };

    format!(
        "[{}] {}\n  Budget: ${:.2} (ceiling ${:.2})\n  Members: {}\n  Total cost: ${:.2} - {}\n",
        report.id,
        report.name,
        report.budget,
        report.cost_ceiling,
        if members.is_empty() {
            "-".to_string()
        } else {
            members.join(", ")
        },
        report.total_cost,
        verdict,
    )
}

pub fn projects_json(reports: &[ProjectReport]) -> serde_json::Result<String> {
    let views: Vec<ProjectView> = reports.iter().map(ProjectView::from).collect();
    serde_json::to_string_pretty(&views)
}
