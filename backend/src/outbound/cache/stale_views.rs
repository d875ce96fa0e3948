//! In-process implementation of the `ViewCache` port.
//!
//! The rendered views themselves belong to the host; this registry records
//! which logical paths a mutation invalidated so the host can recompute
//! them on next access, and so tests can observe the signal.

use std::collections::BTreeSet;
use std::sync::Mutex;

use tracing::info;

use crate::domain::ports::ViewCache;

/// Records view paths marked stale by mutation handlers.
#[derive(Debug, Default)]
pub struct StaleViewRegistry {
    stale: Mutex<BTreeSet<String>>,
}

impl StaleViewRegistry {
    /// Create an empty registry.
    pub fn new() -> Self {
        Self::default()
    }

    /// True when the given path has been marked stale and not yet taken.
    pub fn is_stale(&self, path: &str) -> bool {
        self.lock().contains(path)
    }

    /// Drain the set of stale paths for recomputation.
    pub fn take_stale(&self) -> Vec<String> {
        std::mem::take(&mut *self.lock()).into_iter().collect()
    }

    fn lock(&self) -> std::sync::MutexGuard<'_, BTreeSet<String>> {
        // A poisoned lock only means a panicking thread held it; the set of
        // paths is still coherent.
        self.stale
            .lock()
            .unwrap_or_else(std::sync::PoisonError::into_inner)
    }
}

impl ViewCache for StaleViewRegistry {
    fn revalidate(&self, path: &str) {
        info!(path, "view marked stale");
        self.lock().insert(path.to_owned());
    }
}

#[cfg(test)]
mod tests {
    //! Regression coverage for this module.
    use super::*;

    #[test]
    fn revalidated_paths_are_reported_stale_once() {
        let registry = StaleViewRegistry::new();
        registry.revalidate("/dashboard/invoices");
        registry.revalidate("/dashboard/invoices");

        assert!(registry.is_stale("/dashboard/invoices"));
        assert_eq!(registry.take_stale(), ["/dashboard/invoices"]);
        assert!(!registry.is_stale("/dashboard/invoices"));
    }

    #[test]
    fn untouched_paths_are_not_stale() {
        let registry = StaleViewRegistry::new();
        assert!(!registry.is_stale("/createuser"));
    }
}
