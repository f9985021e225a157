//! Identifiers and the sequence that hands them out
//!
//! Ids are plain integers starting at 1. They are allocated by an explicit
//! `IdSequence` (owned by the `Company`), never by a global counter.

/// Unique identifier for an Employee
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct EmployeeId(u64);

impl EmployeeId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for EmployeeId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Unique identifier for a Project
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash, PartialOrd, Ord)]
pub struct ProjectId(u64);

impl ProjectId {
    pub fn new(raw: u64) -> Self {
        Self(raw)
    }

    pub fn value(&self) -> u64 {
        self.0
    }
}

impl core::fmt::Display for ProjectId {
    fn fmt(&self, f: &mut core::fmt::Formatter<'_>) -> core::fmt::Result {
        write!(f, "{}", self.0)
    }
}

/// Monotonic id generator
///
/// Every call returns a value strictly greater than the previous one.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct IdSequence {
    next: u64,
}

impl IdSequence {
    /// Sequence whose first id is 1
    pub fn new() -> Self {
        Self::starting_at(1)
    }

    pub fn starting_at(first: u64) -> Self {
        Self { next: first }
    }

    /// The value the next call will return
    pub fn peek(&self) -> u64 {
        self.next
    }

    pub fn next_employee_id(&mut self) -> EmployeeId {
        EmployeeId(self.advance())
    }

    pub fn next_project_id(&mut self) -> ProjectId {
        ProjectId(self.advance())
    }

    fn advance(&mut self) -> u64 {
        let id = self.next;
        self.next += 1;
        id
    }
}

impl Default for IdSequence {
    fn default() -> Self {
        Self::new()
    }
}
