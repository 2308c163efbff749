//! Utility functions for the application

pub mod crypto;
pub mod file;
pub mod sql;
pub mod string;
pub mod terminal;
