//! Type-safe workout journal core with map-driven logging.
//!
//! Traillog is the engine behind a map-based exercise log: the user picks a
//! location on a map, fills in a small form, and the session shows up as a
//! marker and a list entry, surviving reloads through a durable JSON slot.
//! This crate owns the domain model, persistence and view synchronization;
//! the map widget, list widget and geolocation source stay on the host side
//! behind small capability traits.
//!
//! # Features
//!
//! - **Tagged records**: running and cycling variants with their derived
//!   metric (pace / speed) fixed at construction
//! - **Validated construction**: all-or-nothing, no partial records
//! - **Snapshot persistence**: whole-collection JSON saves, explicit
//!   rehydration on load
//! - **Deferred map rendering**: requests queue until the map reports
//!   ready, then replay in order
//!
//! # Quick Start
//!
//! ```rust,no_run
//! use traillog::{LatLng, ListView, MapView, PanAnimation, Traillog, WorkoutEntry, WorkoutId};
//!
//! struct ConsoleMap;
//! impl MapView for ConsoleMap {
//!     fn center_on(&mut self, coords: LatLng, zoom: u8, _pan: Option<PanAnimation>) {
//!         println!("center on {coords} at zoom {zoom}");
//!     }
//!     fn add_marker(&mut self, coords: LatLng, popup: &str, _style_class: &str) {
//!         println!("marker at {coords}: {popup}");
//!     }
//! }
//!
//! struct ConsoleList;
//! impl ListView for ConsoleList {
//!     fn render_entry(&mut self, markup: &str, _id: &WorkoutId) {
//!         println!("{markup}");
//!     }
//! }
//!
//! fn main() -> traillog::Result<()> {
//!     let mut app = Traillog::open("workouts.json", Box::new(ConsoleMap), Box::new(ConsoleList));
//!     app.on_map_ready();
//!     app.on_location_picked(LatLng::new(46.2044, 6.1432)?);
//!     app.on_form_submitted(WorkoutEntry::Running {
//!         distance_km: 5.0,
//!         duration_min: 30.0,
//!         cadence_spm: 150.0,
//!     })?;
//!     Ok(())
//! }
//! ```

// Core types and error handling
mod error;
pub mod render;
#[cfg(test)]
mod test_utils;
pub mod types;

// Controller and collaborator seams
mod app;
pub mod views;

// Persistence seam and backends
pub mod store;
pub mod stores;

// Core exports
pub use error::{JournalError, Result};
pub use types::{LatLng, Sport, SportMetrics, Workout, WorkoutCollection, WorkoutEntry, WorkoutId};

// Controller and view-seam exports
pub use app::App;
pub use views::{FOCUS_ZOOM, Geolocator, INITIAL_ZOOM, ListView, MapView, PanAnimation};

// Persistence exports
pub use store::{StoredWorkout, WorkoutStore, decode_collection, encode_collection};
pub use stores::{FileStore, MemoryStore};

use std::path::PathBuf;

/// Unified entry point for journal sessions.
///
/// This factory wires an [`App`] controller to one of the bundled storage
/// backends. Hosts with their own storage implement [`WorkoutStore`] and
/// use [`App::new`] directly.
///
/// # Examples
///
/// ## File-backed journal
/// ```rust,no_run
/// use traillog::Traillog;
/// # use traillog::{LatLng, ListView, MapView, PanAnimation, WorkoutId};
/// # struct M; impl MapView for M {
/// #     fn center_on(&mut self, _: LatLng, _: u8, _: Option<PanAnimation>) {}
/// #     fn add_marker(&mut self, _: LatLng, _: &str, _: &str) {}
/// # }
/// # struct L; impl ListView for L { fn render_entry(&mut self, _: &str, _: &WorkoutId) {} }
///
/// let app = Traillog::open("workouts.json", Box::new(M), Box::new(L));
/// ```
///
/// ## Volatile journal (tests, previews)
/// ```rust
/// use traillog::Traillog;
/// # use traillog::{LatLng, ListView, MapView, PanAnimation, WorkoutId};
/// # struct M; impl MapView for M {
/// #     fn center_on(&mut self, _: LatLng, _: u8, _: Option<PanAnimation>) {}
/// #     fn add_marker(&mut self, _: LatLng, _: &str, _: &str) {}
/// # }
/// # struct L; impl ListView for L { fn render_entry(&mut self, _: &str, _: &WorkoutId) {} }
///
/// let app = Traillog::in_memory(Box::new(M), Box::new(L));
/// assert!(app.workouts().is_empty());
/// ```
pub struct Traillog;

impl Traillog {
    /// Wire a controller to a JSON file slot.
    ///
    /// No I/O happens here; the slot is read by [`App::start`] and written
    /// on each successful submit.
    pub fn open<P: Into<PathBuf>>(
        path: P,
        map: Box<dyn MapView>,
        list: Box<dyn ListView>,
    ) -> App<FileStore> {
        App::new(FileStore::new(path.into()), map, list)
    }

    /// Wire a controller to an in-memory slot.
    pub fn in_memory(map: Box<dyn MapView>, list: Box<dyn ListView>) -> App<MemoryStore> {
        App::new(MemoryStore::new(), map, list)
    }
}
