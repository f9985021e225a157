//! Argument parsing for the inline forms of shell commands
//!
//! Only type coercion happens here. Anything that parses is passed on
//! to the roster as-is.

use roster_usecase::roster_domain::{EmployeeId, EmployeeKind, ProjectId, SeniorityLevel, Specialty};
use roster_usecase::HireRequest;
use thiserror::Error;

pub const DEVELOPER_USAGE: &str = "/new developer <name> <salary> <lang,lang> <level>";
pub const DESIGNER_USAGE: &str = "/new designer <name> <salary> <tool,tool> <specialty>";
pub const MANAGER_USAGE: &str = "/new manager <name> <salary> <department>";

#[derive(Debug, Error, PartialEq, Eq)]
pub enum ParseError {
    #[error("Unknown employee kind '{0}' (expected developer, designer or manager)")]
    UnknownKind(String),

    #[error("Usage: {0}")]
    Usage(&'static str),

    #[error("'{0}' is not a valid amount")]
    InvalidAmount(String),

    #[error("The ID must be a valid number, got '{0}'")]
    InvalidId(String),
}

/// Comma separated list, each entry trimmed
pub fn split_list(raw: &str) -> Vec<String> {
    raw.split(',').map(|item| item.trim().to_string()).collect()
}

pub fn parse_amount(raw: &str) -> Result<f64, ParseError> {
    raw.trim()
        .parse::<f64>()
        .map_err(|_| ParseError::InvalidAmount(raw.to_string()))
}

fn parse_id(raw: &str) -> Result<u64, ParseError> {
    raw.trim()
        .parse::<u64>()
        .map_err(|_| ParseError::InvalidId(raw.to_string()))
}

pub fn parse_employee_id(raw: &str) -> Result<EmployeeId, ParseError> {
    parse_id(raw).map(EmployeeId::new)
}

pub fn parse_project_id(raw: &str) -> Result<ProjectId, ParseError> {
    parse_id(raw).map(ProjectId::new)
}

/// `<kind> <name> <salary> ...` into a hire request
pub fn parse_hire(args: &[&str]) -> Result<HireRequest, ParseError> {
    let (kind, rest) = args.split_first().ok_or(ParseError::Usage(DEVELOPER_USAGE))?;
    let kind = EmployeeKind::parse(kind).ok_or_else(|| ParseError::UnknownKind(kind.to_string()))?;

    match (kind, rest) {
        (EmployeeKind::Developer, [name, salary, languages, level]) => Ok(HireRequest::Developer {
            name: name.to_string(),
            base_salary: parse_amount(salary)?,
            languages: split_list(languages),
            level: SeniorityLevel::parse(level),
        }),
        (EmployeeKind::Designer, [name, salary, tools, specialty]) => Ok(HireRequest::Designer {
            name: name.to_string(),
            base_salary: parse_amount(salary)?,
            tools: split_list(tools),
            specialty: Specialty::parse(specialty),
        }),
        (EmployeeKind::Manager, [name, salary, department @ ..]) if !department.is_empty() => {
            Ok(HireRequest::Manager {
                name: name.to_string(),
                base_salary: parse_amount(salary)?,
                department: department.join(" "),
            })
        }
        (EmployeeKind::Developer, _) => Err(ParseError::Usage(DEVELOPER_USAGE)),
        (EmployeeKind::Designer, _) => Err(ParseError::Usage(DESIGNER_USAGE)),
        (EmployeeKind::Manager, _) => Err(ParseError::Usage(MANAGER_USAGE)),
    }
}
