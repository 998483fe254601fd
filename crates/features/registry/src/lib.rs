//! # Registration registry
//!
//! Modules attach handler and output bindings to pages while they are scanned. Some bindings
//! cannot be placed yet: a wildcard (`"*"`) binding targets pages that later modules have not
//! registered, and a placement marker may belong to a module further down the list.
//!
//! The registry is therefore a two-phase state machine:
//!
//! 1. [`Registry<Open>`] accepts registrations and queues what it cannot place.
//! 2. [`Registry::finalize`] flushes the queues against the complete page set and returns a
//!    [`Registry<Finalized>`], the only state that exposes the binding maps.
//!
//! ```rust
//! use hm3_domain::bindings::{Binding, BindingKind};
//! use hm3_registry::Registry;
//!
//! let mut registry = Registry::new();
//! registry.add(BindingKind::Handler, "*", Binding::new("check_session", "core", false), None);
//! registry.add(BindingKind::Handler, "home", Binding::new("load_feeds", "feeds", true), None);
//!
//! let finalized = registry.finalize();
//! let home: Vec<_> = finalized.handlers()["home"].iter().map(|b| b.name.as_str()).collect();
//! assert_eq!(home, ["load_feeds", "check_session"]);
//! ```

mod table;

use crate::table::BindingTable;
use hm3_domain::bindings::{Binding, BindingKind, BindingMap, Placement};
use hm3_domain::constants::ALL_PAGES;
use private::Sealed;
use tracing::debug;

/// Registrations are accepted; no snapshot is available.
#[derive(Debug)]
pub struct Open {
    handlers: BindingTable,
    outputs: BindingTable,
}

/// Queues flushed; the binding maps are final.
#[derive(Debug)]
pub struct Finalized {
    handlers: BindingMap,
    outputs: BindingMap,
}

mod private {
    pub trait Sealed {}
}
impl Sealed for Open {}
impl Sealed for Finalized {}

/// Page binding registry owned by one build.
#[derive(Debug)]
pub struct Registry<S: Sealed = Open> {
    state: S,
}

impl Default for Registry<Open> {
    fn default() -> Self {
        Self::new()
    }
}

impl Registry<Open> {
    #[must_use]
    pub const fn new() -> Self {
        Self {
            state: Open {
                handlers: BindingTable::new(BindingKind::Handler),
                outputs: BindingTable::new(BindingKind::Output),
            },
        }
    }

    const fn table(&mut self, kind: BindingKind) -> &mut BindingTable {
        match kind {
            BindingKind::Handler => &mut self.state.handlers,
            BindingKind::Output => &mut self.state.outputs,
        }
    }

    /// Registers `binding` on `page`.
    ///
    /// Without a placement the binding goes to the end of the page. With one, it goes next to
    /// the marker, or is queued until [`Registry::finalize`] if the marker is not on the page
    /// yet. The page `"*"` is shorthand for [`Registry::add_to_all_pages`]. A name already on
    /// the page is ignored.
    pub fn add(
        &mut self,
        kind: BindingKind,
        page: impl Into<String>,
        binding: Binding,
        placement: Option<Placement>,
    ) {
        let page = page.into();
        if page == ALL_PAGES {
            self.add_to_all_pages(kind, binding, placement);
            return;
        }
        self.table(kind).add(page, binding, placement);
    }

    /// Queues `binding` for every page known at finalize time.
    pub fn add_to_all_pages(
        &mut self,
        kind: BindingKind,
        binding: Binding,
        placement: Option<Placement>,
    ) {
        debug!(kind = %kind, binding = %binding.name, "Wildcard binding queued");
        self.table(kind).add_to_all_pages(binding, placement);
    }

    /// Number of registrations waiting for finalize.
    #[must_use]
    pub fn queued(&self) -> usize {
        self.state.handlers.queued() + self.state.outputs.queued()
    }

    /// Applies every deferred registration and freezes the registry.
    #[must_use = "the finalized registry holds the binding snapshot"]
    pub fn finalize(self) -> Registry<Finalized> {
        let Open { handlers, outputs } = self.state;
        Registry { state: Finalized { handlers: handlers.finalize(), outputs: outputs.finalize() } }
    }
}

impl Registry<Finalized> {
    #[must_use]
    pub const fn handlers(&self) -> &BindingMap {
        &self.state.handlers
    }

    #[must_use]
    pub const fn outputs(&self) -> &BindingMap {
        &self.state.outputs
    }

    #[must_use]
    pub const fn bindings(&self, kind: BindingKind) -> &BindingMap {
        match kind {
            BindingKind::Handler => self.handlers(),
            BindingKind::Output => self.outputs(),
        }
    }
}
