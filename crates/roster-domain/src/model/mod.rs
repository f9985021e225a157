//! Domain Models - The vocabulary of the roster
//!
//! Every name here should match how HR talks about the company.

pub mod company;
pub mod compensation;
pub mod designer;
pub mod developer;
pub mod employee;
pub mod ids;
pub mod manager;
pub mod project;
