pub mod application;
pub mod cli;
pub mod domain;

pub use application::Session;
pub use domain::*;
