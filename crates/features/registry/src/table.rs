use hm3_domain::bindings::{Binding, BindingKind, BindingMap, Placement, Position};
use tracing::{debug, warn};

#[derive(Debug)]
struct Deferred {
    page: String,
    binding: Binding,
    placement: Option<Placement>,
}

#[derive(Debug)]
struct Wildcard {
    binding: Binding,
    placement: Option<Placement>,
}

/// Bindings of one kind while modules are still registering.
#[derive(Debug)]
pub(crate) struct BindingTable {
    kind: BindingKind,
    pages: BindingMap,
    pending: Vec<Deferred>,
    wildcards: Vec<Wildcard>,
}

impl BindingTable {
    pub(crate) const fn new(kind: BindingKind) -> Self {
        Self { kind, pages: BindingMap::new(), pending: Vec::new(), wildcards: Vec::new() }
    }

    pub(crate) fn add(&mut self, page: String, binding: Binding, placement: Option<Placement>) {
        let list = self.pages.entry(page.clone()).or_default();
        match insert(list, binding, placement.as_ref()) {
            Ok(true) => {},
            Ok(false) => debug!(kind = %self.kind, page = %page, "Duplicate binding ignored"),
            Err(binding) => {
                debug!(
                    kind = %self.kind,
                    page = %page,
                    binding = %binding.name,
                    "Marker not registered yet, queued"
                );
                self.pending.push(Deferred { page, binding, placement });
            },
        }
    }

    pub(crate) fn add_to_all_pages(&mut self, binding: Binding, placement: Option<Placement>) {
        self.wildcards.push(Wildcard { binding, placement });
    }

    pub(crate) fn queued(&self) -> usize {
        self.pending.len() + self.wildcards.len()
    }

    /// Flushes the queues against the now complete page set.
    ///
    /// Page-specific entries are retried until a pass makes no progress; whatever is left is
    /// appended to the end of its page. Wildcards then attach to every page, in registration
    /// order; a wildcard with a marker skips pages that lack the marker.
    pub(crate) fn finalize(self) -> BindingMap {
        let Self { kind, mut pages, mut pending, wildcards } = self;

        loop {
            let before = pending.len();
            let mut unresolved = Vec::new();
            for entry in pending {
                let list = pages.entry(entry.page.clone()).or_default();
                if let Err(binding) = insert(list, entry.binding, entry.placement.as_ref()) {
                    unresolved.push(Deferred { binding, ..entry });
                }
            }
            pending = unresolved;
            if pending.is_empty() || pending.len() == before {
                break;
            }
        }

        for entry in pending {
            let marker = entry.placement.as_ref().map_or("", |p| p.marker.as_str());
            warn!(
                kind = %kind,
                page = %entry.page,
                binding = %entry.binding.name,
                marker,
                "Placement marker never registered, appending to page"
            );
            let list = pages.entry(entry.page).or_default();
            let _ = insert(list, entry.binding, None);
        }

        for wildcard in wildcards {
            if pages.is_empty() {
                debug!(kind = %kind, binding = %wildcard.binding.name, "No pages for wildcard binding");
            }
            for (page, list) in &mut pages {
                if insert(list, wildcard.binding.clone(), wildcard.placement.as_ref()).is_err() {
                    debug!(
                        kind = %kind,
                        page = %page,
                        binding = %wildcard.binding.name,
                        "Marker absent, wildcard skipped"
                    );
                }
            }
        }

        pages
    }
}

/// `Ok(true)` inserted, `Ok(false)` name already on the page, `Err` marker missing.
fn insert(
    list: &mut Vec<Binding>,
    binding: Binding,
    placement: Option<&Placement>,
) -> Result<bool, Binding> {
    if list.iter().any(|b| b.name == binding.name) {
        return Ok(false);
    }
    let index = match placement {
        None => list.len(),
        Some(p) => match list.iter().position(|b| b.name == p.marker) {
            Some(i) if p.position == Position::Before => i,
            Some(i) => i + 1,
            None => return Err(binding),
        },
    };
    list.insert(index, binding);
    Ok(true)
}
