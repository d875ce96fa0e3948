//! In-process view-cache adapter.

mod stale_views;

pub use stale_views::StaleViewRegistry;
