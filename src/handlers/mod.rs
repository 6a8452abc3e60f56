pub mod config;
pub mod random;
pub mod solver;
pub mod validation;
