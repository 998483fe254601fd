//! # Persisted configuration
//!
//! Writes the runtime snapshot `hm3.rc`: every passthrough setting plus the finalized
//! `handler_modules` / `output_modules` tables and the merged `input_filters`. The snapshot is
//! pretty JSON with sorted keys, so rebuilding an unchanged tree yields an identical file.
//!
//! [`write_config_map`] renders the same data as a small HTML report for humans.

mod config_map;
mod error;
mod persisted;

pub use crate::config_map::{render_config_map, write_config_map};
pub use crate::error::{RcError, RcErrorExt};
pub use crate::persisted::PersistedConfig;
