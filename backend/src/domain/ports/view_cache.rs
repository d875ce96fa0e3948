//! Port abstraction for the host's view cache.
//!
//! Mutation handlers only *signal* staleness; recomputing the rendered view
//! is the host's concern. Revalidation is fire-and-forget and must never
//! fail a mutation that already committed.

/// Marks logical view paths stale after a successful mutation.
#[cfg_attr(test, mockall::automock)]
pub trait ViewCache: Send + Sync {
    /// Mark the cached output of `path` stale; it is recomputed on next
    /// access.
    fn revalidate(&self, path: &str);
}
