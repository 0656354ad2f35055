// src/generators/mod.rs
pub mod charset;
pub mod password;

pub use password::PasswordGenerator;
