//! Domain Services - Business logic that spans more than one entity

pub mod assignment;
