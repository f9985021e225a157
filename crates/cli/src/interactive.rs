//! Interactive REPL mode

use std::io::{self, Write};

use roster_usecase::StaffingService;
use shared::{OutputFormat, RosterConfig};

use crate::parse::{parse_amount, parse_employee_id, parse_hire, parse_project_id};
use crate::{prompt, render};

/// Interactive shell over one company's roster
pub struct InteractiveCli {
    service: StaffingService,
    output: OutputFormat,
}

impl InteractiveCli {
    pub fn new(config: &RosterConfig) -> Self {
        Self {
            service: StaffingService::new(config.company_name.clone()),
            output: config.output,
        }
    }

    pub fn service(&self) -> &StaffingService {
        &self.service
    }

    /// Run the interactive REPL
    pub fn run(&mut self) -> anyhow::Result<()> {
        println!("Staff Roster - {}", self.service.company().name());
        println!("Type /help for commands, /quit to exit");
        println!();

        loop {
            print!("[{}] > ", self.service.company().name());
            io::stdout().flush()?;

            let mut input = String::new();
            if io::stdin().read_line(&mut input)? == 0 {
                // EOF
                println!();
                break;
            }
            let input = input.trim();

            if input.is_empty() {
                continue;
            }

            match self.handle_command(input) {
                Ok(should_exit) if should_exit => break,
                Ok(_) => continue,
                Err(e) => {
                    println!("Error: {}", e);
                    continue;
                }
            }
        }

        Ok(())
    }

    fn handle_command(&mut self, input: &str) -> anyhow::Result<bool> {
        let parts: Vec<&str> = input.split_whitespace().collect();
        let cmd = parts.first().copied().unwrap_or("");
        let args = parts.get(1..).unwrap_or(&[]);

        match cmd {
            "/quit" | "/exit" | "/q" => {
                println!("Goodbye!");
                return Ok(true);
            }
            "/help" | "/h" => {
                println!("Commands:");
                println!("  /new [kind name salary ...]   - Hire (prompts when no arguments)");
                println!("  /list                         - List employees");
                println!("  /delete <id>                  - Remove an employee");
                println!("  /project <name> <budget>      - Open a project");
                println!("  /projects                     - Project costs and viability");
                println!("  /assign <employee> <project>  - Put an employee on a project");
                println!("  /team <manager> <member>      - Add to a manager's team");
                println!("  /quit                         - Exit");
            }
            "/new" => {
                let request = if args.is_empty() {
                    prompt::prompt_hire()?
                } else {
                    parse_hire(args)?
                };
                let summary = self.service.hire(request);
                println!("{} added (ID {})", summary.name, summary.id);
            }
            "/list" => self.print_roster()?,
            "/delete" => {
                let raw = args.first().ok_or_else(|| anyhow::anyhow!("Usage: /delete <id>"))?;
                let id = parse_employee_id(raw)?;
                // An unknown id is an ordinary outcome, not an error
                match self.service.dismiss(id) {
                    Ok(_) => println!("Employee with ID {} removed", id),
                    Err(e) => println!("{}", e),
                }
            }
            "/project" => {
                let [name, budget] = args else {
                    anyhow::bail!("Usage: /project <name> <budget>");
                };
                let budget = parse_amount(budget)?;
                let id = self.service.open_project(*name, budget);
                println!("Project {} opened (ID {})", name, id);
            }
            "/projects" => self.print_projects()?,
            "/assign" => {
                let [employee, project] = args else {
                    anyhow::bail!("Usage: /assign <employee-id> <project-id>");
                };
                let employee = parse_employee_id(employee)?;
                let project = parse_project_id(project)?;
                self.service.assign(employee, project)?;
                println!("Employee {} assigned to project {}", employee, project);
            }
            "/team" => {
                let [manager, member] = args else {
                    anyhow::bail!("Usage: /team <manager-id> <member-id>");
                };
                let manager = parse_employee_id(manager)?;
                let member = parse_employee_id(member)?;
                self.service.add_to_team(manager, member)?;
                println!("Employee {} joined the team of {}", member, manager);
            }
            _ => {
                println!("Unknown command: {}", cmd);
            }
        }

        Ok(false)
    }

    fn print_roster(&self) -> anyhow::Result<()> {
        let roster = self.service.roster();
        match self.output {
            OutputFormat::Text => print!(
                "{}",
                render::roster_text(self.service.company().name(), &roster)
            ),
            OutputFormat::Json => println!("{}", render::roster_json(&roster)?),
        }
        Ok(())
    }

    fn print_projects(&self) -> anyhow::Result<()> {
        let reports = self.service.project_reports();
        match self.output {
            OutputFormat::Text if reports.is_empty() => println!("(no projects)"),
            OutputFormat::Text => {
                for report in &reports {
                    print!("{}", render::project_text(report));
                }
            }
            OutputFormat::Json => println!("{}", render::projects_json(&reports)?),
        }
        Ok(())
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use roster_usecase::roster_domain::{EmployeeId, ProjectId, StaffDirectory};

    fn cli() -> InteractiveCli {
        InteractiveCli::new(&RosterConfig {
            company_name: "Acme".to_string(),
            ..Default::default()
        })
    }

    fn cli_with_staff() -> InteractiveCli {
        let mut cli = cli();
        cli.handle_command("/new developer Ana 1000 Rust,Go Senior").unwrap();
        cli.handle_command("/new designer Luis 900 Figma UX").unwrap();
        cli.handle_command("/new manager Marta 3000 Engineering").unwrap();
        cli
    }

    // ============== Exit Commands ==============

    #[test]
    fn test_handle_quit_commands() {
        let mut cli = cli();
        for cmd in ["/quit", "/exit", "/q"] {
            assert!(cli.handle_command(cmd).unwrap());
        }
    }

    #[test]
    fn test_handle_help_command() {
        let mut cli = cli();
        assert!(!cli.handle_command("/help").unwrap());
        assert!(!cli.handle_command("/h").unwrap());
    }

    #[test]
    fn test_handle_unknown_command() {
        let mut cli = cli();
        assert!(!cli.handle_command("/unknown").unwrap());
        assert!(!cli.handle_command("/").unwrap());
    }

    // ============== Hiring & Listing ==============

    #[test]
    fn test_new_inline_hires() {
        let cli = cli_with_staff();
        let roster = cli.service().roster();

        assert_eq!(roster.len(), 3);
        assert_eq!(roster[0].id, EmployeeId::new(1));
        assert_eq!(roster[0].total_salary, 2000.0);
        assert_eq!(roster[1].bonus, 300.0);
    }

    #[test]
    fn test_new_with_bad_salary_is_error() {
        let mut cli = cli();
        assert!(cli.handle_command("/new developer Ana lots Rust Senior").is_err());
        assert!(cli.service().roster().is_empty());
    }

    #[test]
    fn test_list_text_and_json() {
        let mut cli = cli_with_staff();
        assert!(!cli.handle_command("/list").unwrap());

        cli.output = OutputFormat::Json;
        assert!(!cli.handle_command("/list").unwrap());
    }

    // ============== Deletion ==============

    #[test]
    fn test_delete_existing() {
        let mut cli = cli_with_staff();
        assert!(!cli.handle_command("/delete 2").unwrap());
        assert_eq!(cli.service().roster().len(), 2);
    }

    #[test]
    fn test_delete_unknown_is_not_an_error() {
        let mut cli = cli_with_staff();
        assert!(!cli.handle_command("/delete 99").unwrap());
        assert_eq!(cli.service().roster().len(), 3);
    }

    #[test]
    fn test_delete_requires_numeric_id() {
        let mut cli = cli_with_staff();
        assert!(cli.handle_command("/delete abc").is_err());
        assert!(cli.handle_command("/delete").is_err());
        assert_eq!(cli.service().roster().len(), 3);
    }

    // ============== Projects & Teams ==============

    #[test]
    fn test_project_assignment_flow() {
        let mut cli = cli_with_staff();
        cli.handle_command("/project API 1000").unwrap();
        cli.handle_command("/assign 1 1").unwrap();

        let report = cli.service().project_report(ProjectId::new(1)).unwrap();
        assert_eq!(report.members, vec![EmployeeId::new(1)]);
        assert!(!report.viable);
        assert!(!cli.handle_command("/projects").unwrap());
    }

    #[test]
    fn test_assign_manager_is_error() {
        let mut cli = cli_with_staff();
        cli.handle_command("/project API 1000").unwrap();
        assert!(cli.handle_command("/assign 3 1").is_err());
    }

    #[test]
    fn test_assign_usage() {
        let mut cli = cli_with_staff();
        assert!(cli.handle_command("/assign 1").is_err());
        assert!(cli.handle_command("/project API").is_err());
    }

    #[test]
    fn test_team_command() {
        let mut cli = cli_with_staff();
        cli.handle_command("/team 3 1").unwrap();

        let marta = cli
            .service()
            .company()
            .find_employee(EmployeeId::new(3))
            .unwrap();
        assert!((marta.calculate_bonus() - 300.0).abs() < 1e-9);
        assert!(cli.handle_command("/team 3 3").is_err());
    }
}
