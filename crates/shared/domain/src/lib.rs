//! # Domain Models
//!
//! Pure build types with minimal dependencies (`serde`, `bitflags`).
//! Keep it lean: no I/O or process handling, just data and simple helpers shared by the
//! pipeline stages.

pub mod bindings;
pub mod capabilities;
pub mod constants;
pub mod filters;
pub mod settings;
