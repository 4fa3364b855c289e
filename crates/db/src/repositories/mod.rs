pub mod character_repo;
pub mod employee_repo;
pub mod funtest_repo;

pub use character_repo::CharacterRepo;
pub use employee_repo::EmployeeRepo;
pub use funtest_repo::FuntestRepo;
