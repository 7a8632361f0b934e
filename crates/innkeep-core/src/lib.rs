//! # Innkeep Core
//!
//! Core types, entities, and error definitions for the Innkeep hotel backend.
//! Every other crate in the workspace builds on the error taxonomy, typed ids,
//! pagination window, and domain records defined here.

pub mod domain;
pub mod error;
pub mod id;
pub mod pagination;
pub mod result;
pub mod telemetry;
pub mod validation;

pub use domain::*;
pub use error::*;
pub use id::*;
pub use pagination::*;
pub use result::*;
pub use validation::*;

// Re-export shaku so collaborator traits can share one `Interface` bound
pub use shaku::Interface;
