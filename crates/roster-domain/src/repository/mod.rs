//! Lookup Ports - How the domain asks "who is this?"
//!
//! ```text
//! Domain Layer              │  Implementations
//! ──────────────────────────┼────────────────────────
//! trait StaffDirectory      │  Company
//!   fn find_employee()      │  [Employee]
//! ```

pub mod staff_directory;
