//! Step definitions for approval workflow BDD scenarios.

pub mod given;
pub mod then;
pub mod world;
