//! Page → handler/output bindings registered by modules.

use serde::{Deserialize, Serialize};
use std::collections::BTreeMap;
use std::fmt;

/// Which registry table a binding belongs to.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Hash)]
pub enum BindingKind {
    /// Server-side request processing.
    Handler,
    /// Output rendering.
    Output,
}

impl fmt::Display for BindingKind {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.write_str(match self {
            Self::Handler => "handler",
            Self::Output => "output",
        })
    }
}

/// A named unit of server-side logic attached to a page.
#[derive(Debug, Clone, PartialEq, Eq, Serialize, Deserialize)]
pub struct Binding {
    pub name: String,
    /// Module that registered the binding.
    pub source: String,
    /// Only runs for authenticated sessions.
    pub logged_in: bool,
}

impl Binding {
    pub fn new(name: impl Into<String>, source: impl Into<String>, logged_in: bool) -> Self {
        Self { name: name.into(), source: source.into(), logged_in }
    }
}

#[derive(Debug, Clone, Copy, PartialEq, Eq)]
pub enum Position {
    Before,
    After,
}

/// Insert next to an already registered binding instead of at the end of the page.
#[derive(Debug, Clone, PartialEq, Eq)]
pub struct Placement {
    pub marker: String,
    pub position: Position,
}

impl Placement {
    pub fn before(marker: impl Into<String>) -> Self {
        Self { marker: marker.into(), position: Position::Before }
    }

    pub fn after(marker: impl Into<String>) -> Self {
        Self { marker: marker.into(), position: Position::After }
    }
}

/// Finalized bindings: page → ordered bindings.
pub type BindingMap = BTreeMap<String, Vec<Binding>>;
