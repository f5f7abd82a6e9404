//! Reusable pool of option widgets.

use std::sync::Arc;

use crate::error::OptionsViewError;
use crate::host::{OptionWidget, OptionWidgetFactory, SelectionHook};

/// Lazily grown collection of reusable option widgets.
///
/// The pool only ever grows, tracking the largest option set seen so far.
/// Rebinding a slot for a new cycle is a pure data assignment on the
/// existing widget; no widgets are destroyed or recreated between cycles.
pub struct OptionPool {
    slots: Vec<Arc<dyn OptionWidget>>,
}

impl OptionPool {
    pub fn new() -> Self {
        Self { slots: Vec::new() }
    }

    /// Guarantees at least `wanted` slots exist.
    ///
    /// New widgets come from the host factory (which attaches them to the
    /// option container), get the shared selection hook registered, and
    /// start hidden. A factory failure aborts growth and propagates;
    /// already-created slots stay in the pool.
    pub fn ensure_capacity(
        &mut self,
        wanted: usize,
        factory: &dyn OptionWidgetFactory,
        hook: &SelectionHook,
    ) -> Result<(), OptionsViewError> {
        while self.slots.len() < wanted {
            let widget = factory.instantiate()?;
            widget.connect_selected(Arc::clone(hook));
            widget.set_visible(false);
            self.slots.push(widget);
        }
        Ok(())
    }

    /// Resets every slot to hidden.
    pub fn hide_all(&self) {
        for slot in &self.slots {
            slot.set_visible(false);
        }
    }

    /// Current number of pooled slots.
    pub fn capacity(&self) -> usize {
        self.slots.len()
    }

    /// Slots in creation order.
    pub fn slots(&self) -> impl Iterator<Item = &Arc<dyn OptionWidget>> {
        self.slots.iter()
    }
}

impl Default for OptionPool {
    fn default() -> Self {
        Self::new()
    }
}
