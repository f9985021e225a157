//! # Staff Roster Domain Layer
//!
//! Pure business logic for a small company's staff: who works here,
//! what they earn, and which projects they are on.
//!
//! ## Architecture
//!
//! ```text
//! ┌─────────────────────────────────────────────────────────────────┐
//! │                    Domain Layer (This Crate)                     │
//! │  ┌─────────────────────────────────────────────────────────────┐│
//! │  │  model/     - Employees, variants, projects, the company    ││
//! │  │  repository/- Lookup ports (StaffDirectory)                 ││
//! │  │  service/   - Paired employee <-> project assignment        ││
//! │  └─────────────────────────────────────────────────────────────┘│
//! └─────────────────────────────────────────────────────────────────┘
//! ```
//!
//! The domain never reads input or prints output. It hands back plain
//! data (`EmployeeSummary`, `RosterError`) and lets the shell render it.

pub mod error;
pub mod model;
pub mod repository;
pub mod service;

// Re-export commonly used types
pub use error::{Lookup, RosterError};

pub use model::{
    company::Company,
    compensation::Compensation,
    designer::{Designer, Specialty},
    developer::{Developer, SeniorityLevel},
    employee::{Employee, EmployeeKind, EmployeeRole, EmployeeSummary},
    ids::{EmployeeId, IdSequence, ProjectId},
    manager::{Manager, MemberProfile, TeamMember},
    project::Project,
};

pub use repository::staff_directory::StaffDirectory;
