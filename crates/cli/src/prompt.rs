//! Step-by-step prompts for `/new` when no arguments are given

use dialoguer::theme::ColorfulTheme;
use dialoguer::{Input, Select};
use roster_usecase::roster_domain::{EmployeeKind, SeniorityLevel, Specialty};
use roster_usecase::HireRequest;

use crate::parse::split_list;

pub fn prompt_hire() -> anyhow::Result<HireRequest> {
    let theme = ColorfulTheme::default();

    let kinds = EmployeeKind::all();
    let kind_labels: Vec<&str> = kinds.iter().map(|k| k.display_name()).collect();
    let kind = Select::with_theme(&theme)
        .with_prompt("Kind")
        .items(&kind_labels)
        .default(0)
        .interact()?;

    let name = Input::<String>::with_theme(&theme)
        .with_prompt("Name")
        .interact_text()?;
    let base_salary = Input::<f64>::with_theme(&theme)
        .with_prompt("Base salary")
        .interact_text()?;

    let request = match kinds[kind] {
        EmployeeKind::Developer => {
            let languages = Input::<String>::with_theme(&theme)
                .with_prompt("Languages (comma separated)")
                .interact_text()?;
            let levels = SeniorityLevel::known();
            let level_labels: Vec<&str> = levels.iter().map(|l| l.as_str()).collect();
            let level = Select::with_theme(&theme)
                .with_prompt("Level")
                .items(&level_labels)
                .default(0)
                .interact()?;

            HireRequest::Developer {
                name,
                base_salary,
                languages: split_list(&languages),
                level: levels[level].clone(),
            }
        }
        EmployeeKind::Designer => {
            let tools = Input::<String>::with_theme(&theme)
                .with_prompt("Tools (comma separated)")
                .interact_text()?;
            let specialties = Specialty::known();
            let specialty_labels: Vec<&str> = specialties.iter().map(|s| s.display_name()).collect();
            let specialty = Select::with_theme(&theme)
                .with_prompt("Specialty")
                .items(&specialty_labels)
                .default(0)
                .interact()?;

            HireRequest::Designer {
                name,
                base_salary,
                tools: split_list(&tools),
                specialty: specialties[specialty].clone(),
            }
        }
        EmployeeKind::Manager => {
            let department = Input::<String>::with_theme(&theme)
                .with_prompt("Department")
                .interact_text()?;

            HireRequest::Manager {
                name,
                base_salary,
                department,
            }
        }
    };

    Ok(request)
}
