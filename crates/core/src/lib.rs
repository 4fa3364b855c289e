//! Domain layer: shared types, the domain error enum, and the
//! character business rules. No HTTP, no SQL.

pub mod character;
pub mod error;
pub mod types;
