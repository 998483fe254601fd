//! Facade crate for the hm3 build pipeline.
//! Re-exports the stage crates and runs them in order.
//! Keep this crate thin: it should compose other crates, not implement stage logic.
//!
//! ## Pipeline
//! 1. Load settings (`hm3.ini`, `HM3__*` overrides). Absent settings end the build early.
//! 2. Resolve compression strategies.
//! 3. Scan the enabled modules into an open registry and merge their filters.
//! 4. Write `site.css` and `site.js`.
//! 5. Finalize the registry and persist `hm3.rc` (optionally `config_map.html`).
//! 6. Create the production site with fresh identifiers and debug mode off.
//!
//! ```rust,no_run
//! use hm3::{BuildOptions, BuildOutcome};
//!
//! match hm3::run(&BuildOptions::new(".")).unwrap() {
//!     BuildOutcome::Skipped => {},
//!     BuildOutcome::Completed(report) => println!("{}", report.site.dir.display()),
//! }
//! ```

mod build;
mod error;

pub use crate::build::{BuildOptions, BuildOutcome, BuildReport, run, run_with_runner};
pub use crate::error::{BuildError, BuildErrorExt};
pub use hm3_assets as assets;
pub use hm3_domain as domain;
pub use hm3_kernel as kernel;
pub use hm3_modules as modules;
pub use hm3_rc as rc;
pub use hm3_registry as registry;
pub use hm3_site as site;
