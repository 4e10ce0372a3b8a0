//! Storage implementations backing the dashboard queries

pub mod in_memory;
pub mod snapshot;

pub use in_memory::InMemoryDashboardService;
pub use snapshot::Snapshot;
