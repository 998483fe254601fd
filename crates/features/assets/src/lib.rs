//! # Assets
//!
//! Turns the concatenated module sources into the two compiled files served by the site.
//!
//! * [`CompressionPlan::resolve`] picks a [`CompressionStrategy`] per asset kind from the
//!   settings.
//! * [`Compressor`] applies it; external commands go through a [`CommandRunner`]
//!   ([`ShellRunner`] in production).
//! * [`write_bundle`] writes `site.css` and `site.js`, the latter prefixed with the
//!   JavaScript library blob.

mod bundle;
mod compress;
mod error;
mod runner;
mod strategy;

pub use crate::bundle::{Bundle, write_bundle};
pub use crate::compress::{Compressor, collapse_whitespace, escape_backslashes};
pub use crate::error::{AssetError, AssetErrorExt};
pub use crate::runner::{CommandOutput, CommandRunner, ShellRunner};
pub use crate::strategy::{CompressionPlan, CompressionStrategy};
