pub mod character;
pub mod employee;
pub mod funtest;
