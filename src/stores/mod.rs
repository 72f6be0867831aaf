//! Storage backends
//!
//! Two implementations of the [`WorkoutStore`](crate::store::WorkoutStore)
//! seam: a JSON file on disk for native hosts, and an in-memory slot that
//! stands in for browser localStorage and doubles as the test vehicle for
//! corrupt-slot handling. Both round-trip through the same JSON text.

pub mod file;
pub mod memory;

pub use file::FileStore;
pub use memory::MemoryStore;
