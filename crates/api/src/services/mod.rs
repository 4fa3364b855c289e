//! Service layer: one service per resource.
//!
//! Services own validation, normalization, the entity↔DTO mapping,
//! and calls into the repositories. Handlers stay thin and only
//! translate service results into HTTP responses.

pub mod character;
pub mod employee;
pub mod funtest;

pub use character::CharacterService;
pub use employee::EmployeeService;
pub use funtest::FuntestService;
