//! # Staff Roster Use Case Layer
//!
//! Application-specific operations on top of the domain.
//! The interactive shell talks to `StaffingService` and nothing else.

pub mod report;
pub mod request;
pub mod staffing;

pub use roster_domain;

pub use report::ProjectReport;
pub use request::HireRequest;
pub use staffing::StaffingService;
