//! Domain module for the Edge Store
//!
//! Contains the edge entity, its state enums, the unit of work and errors.

pub mod entities;
pub mod errors;
pub mod unit_of_work;

pub use entities::*;
pub use errors::*;
pub use unit_of_work::*;
