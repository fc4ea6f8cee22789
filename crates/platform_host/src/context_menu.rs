//! Scoped suppression of the host's native context menu.
//!
//! The simulator repurposes the secondary mouse button for the taskbar jump list, so the native
//! menu must stay suppressed exactly as long as the simulator is mounted. Suppression is handed
//! out as a [`SuppressionGuard`] that releases on drop, whichever way the owner goes away.

use std::{cell::Cell, fmt, rc::Rc};

/// RAII handle for an active context-menu suppression.
#[must_use = "dropping the guard immediately re-enables the native context menu"]
pub struct SuppressionGuard {
    release: Option<Box<dyn FnOnce()>>,
}

impl SuppressionGuard {
    /// Creates a guard that runs `release` exactly once when dropped.
    pub fn new(release: impl FnOnce() + 'static) -> Self {
        Self {
            release: Some(Box::new(release)),
        }
    }

    /// Guard with nothing to release.
    pub fn inert() -> Self {
        Self { release: None }
    }
}

impl Drop for SuppressionGuard {
    fn drop(&mut self) {
        if let Some(release) = self.release.take() {
            release();
        }
    }
}

impl fmt::Debug for SuppressionGuard {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        f.debug_struct("SuppressionGuard")
            .field("active", &self.release.is_some())
            .finish()
    }
}

/// Host service that disables the native context menu while a guard is held.
pub trait ContextMenuSuppressor {
    /// Installs suppression and returns the guard that removes it.
    fn suppress(&self) -> SuppressionGuard;
}

#[derive(Debug, Clone, Copy, Default)]
/// Suppressor for hosts without a native context menu.
pub struct NoopContextMenuSuppressor;

impl ContextMenuSuppressor for NoopContextMenuSuppressor {
    fn suppress(&self) -> SuppressionGuard {
        SuppressionGuard::inert()
    }
}

#[derive(Debug, Clone, Default)]
/// In-memory suppressor that counts live guards.
pub struct MemoryContextMenuSuppressor {
    active: Rc<Cell<usize>>,
}

impl MemoryContextMenuSuppressor {
    /// Number of guards currently alive.
    pub fn active_count(&self) -> usize {
        self.active.get()
    }

    /// Whether the native menu is currently suppressed.
    pub fn is_suppressed(&self) -> bool {
        self.active_count() > 0
    }
}

impl ContextMenuSuppressor for MemoryContextMenuSuppressor {
    fn suppress(&self) -> SuppressionGuard {
        self.active.set(self.active.get() + 1);
        let active = self.active.clone();
        SuppressionGuard::new(move || active.set(active.get().saturating_sub(1)))
    }
}
