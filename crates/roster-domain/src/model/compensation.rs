//! Compensation - The pay contract every employee variant fulfils

/// Shared capability of Developer, Designer and Manager
///
/// Each variant supplies its own bonus formula and project cap.
/// Salary is always `base_salary + bonus()`, computed by `Employee`.
pub trait Compensation {
    /// Variant-specific supplement on top of the base salary
    fn bonus(&self) -> f64;

    /// How many projects this variant may be on at once
    fn max_projects(&self) -> usize;
}
