//! Staff Directory - Resolve employee ids to employees
//!
//! Projects only hold ids, so anything that needs member salaries
//! (project cost, viability) goes through this trait.

use crate::model::employee::Employee;
use crate::model::ids::EmployeeId;

pub trait StaffDirectory {
    /// Find an employee by id
    fn find_employee(&self, id: EmployeeId) -> Option<&Employee>;

    /// Check if an employee exists
    fn contains_employee(&self, id: EmployeeId) -> bool {
        self.find_employee(id).is_some()
    }
}

impl StaffDirectory for [Employee] {
    fn find_employee(&self, id: EmployeeId) -> Option<&Employee> {
        self.iter().find(|employee| employee.id() == id)
    }
}
