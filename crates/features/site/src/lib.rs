//! # Production site
//!
//! Builds the deployable tree (by default `site/` under the application root):
//!
//! ```text
//! site/
//! ├── site.js
//! ├── site.css
//! ├── index.php            stamped APP_PATH, CACHE_ID, SITE_ID, DEBUG_MODE=false
//! └── modules/<name>/assets/*
//! ```
//!
//! `CACHE_ID` and `SITE_ID` are regenerated on every build from the OS CSPRNG, so each
//! deployment invalidates client caches and gets a distinct site secret.
//!
//! ```rust,no_run
//! use hm3_site::SiteBuilder;
//!
//! let tree = SiteBuilder::new().root("/srv/hm3").create().unwrap();
//! println!("{} module assets copied", tree.copied_files);
//! ```

mod builder;
pub mod entry;
mod error;

pub use crate::builder::{NoRoot, ProductionTree, SiteBuilder, WithRoot};
pub use crate::entry::{EntryField, EntryValues};
pub use crate::error::{SiteError, SiteErrorExt};
