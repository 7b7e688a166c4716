//! Equipment selection state for the map.
//!
//! Tracks the user's explicit focus. The *effective* selection is derived:
//! with a planned route active and no explicit focus, the queue head is
//! focused automatically so the bottom sheet opens on the recommended
//! next stop.

use gymkit_core::data::Catalog;

use crate::plan::PlanQueue;

/// Explicit map focus, validated against the catalog.
#[derive(Debug, Clone, Default)]
pub struct SelectionModel {
    selected: Option<String>,
}

impl SelectionModel {
    /// Create a model with no selection.
    pub fn new() -> Self {
        Self::default()
    }

    /// The explicitly selected equipment id, if any.
    pub fn selected_id(&self) -> Option<&str> {
        self.selected.as_deref()
    }

    /// Focus the given equipment.
    ///
    /// A catalog miss is a recoverable no-op: the previous focus stays.
    /// Returns whether the selection changed.
    pub fn select(&mut self, catalog: &Catalog, id: &str) -> bool {
        if catalog.get(id).is_none() {
            tracing::debug!(id, "Ignoring selection of unknown equipment");
            return false;
        }
        if self.selected.as_deref() == Some(id) {
            return false;
        }
        self.selected = Some(id.to_string());
        true
    }

    /// Clear the explicit focus.
    pub fn clear(&mut self) {
        self.selected = None;
    }

    /// The effective focus: explicit selection, or the queue head when a
    /// planned route is active.
    pub fn effective_id<'a>(&'a self, queue: &'a PlanQueue) -> Option<&'a str> {
        self.selected
            .as_deref()
            .or_else(|| queue.head().map(|e| e.id.as_str()))
    }
}
