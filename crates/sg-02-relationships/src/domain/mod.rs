//! Domain module for the Relationship Engine
//!
//! Contains errors, output records and the validation rules guarding each
//! transition.

pub mod errors;
pub mod invariants;
pub mod value_objects;

pub use errors::*;
pub use value_objects::*;
