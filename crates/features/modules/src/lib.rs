//! # Module scanner
//!
//! Walks the enabled modules in declaration order and collects what each one provides:
//!
//! | file                       | contribution                                   |
//! |----------------------------|------------------------------------------------|
//! | `modules/<name>/site.js`   | appended to the combined script                |
//! | `modules/<name>/site.css`  | appended to the combined stylesheet            |
//! | `modules/<name>/setup.toml`| bindings into the registry, allow-lists merged |
//! | `modules/<name>/assets/`   | directory recorded for the production tree     |
//!
//! Every file is optional.

mod descriptor;
mod error;
mod scanner;
pub mod setup;

pub use crate::descriptor::ModuleDescriptor;
pub use crate::error::{ModuleError, ModuleErrorExt};
pub use crate::scanner::{ModuleSummary, ScanOutcome, scan};
pub use crate::setup::{Registration, SetupDescriptor};
