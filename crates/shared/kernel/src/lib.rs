//! Kernel utilities shared across pipeline stages.
//! Keep this crate lightweight: settings loading and identifier generation only.
//!
//! ## Deployment identifiers
//! ```rust
//! # use hm3_kernel::ident::unique_id;
//! let id = unique_id(32).unwrap();
//! assert_eq!(id.len(), 43);
//! ```
//!
//! ## Settings loading
//! ```rust,no_run
//! use hm3_kernel::settings::load_settings;
//!
//! match load_settings("hm3.ini").unwrap() {
//!     Some(settings) => println!("{} keys", settings.len()),
//!     None => println!("No settings found"),
//! }
//! ```
mod error;
pub mod ident;
pub mod settings;

pub use error::{KernelError, KernelErrorExt};
pub use hm3_domain as domain;
