//! Core types for workout records.
//!
//! This module provides the domain model of the journal:
//! - [`Workout`] is one logged session, immutable after construction, with
//!   its sport-specific derived metric computed once at creation
//! - [`SportMetrics`] is the tagged per-sport payload (pace for running,
//!   speed for cycling) so polymorphic behavior never has to survive a
//!   serialize/deserialize round trip
//! - [`WorkoutCollection`] is the ordered, exclusively-owned sequence of
//!   records with linear id lookup
//! - [`LatLng`] is a validated coordinate pair
//!
//! ## Usage Example
//!
//! ```rust
//! use traillog::{LatLng, SportMetrics, Workout};
//!
//! let coords = LatLng::new(46.2044, 6.1432)?;
//! let workout = Workout::running(coords, 5.0, 30.0, 150.0)?;
//!
//! match workout.metrics() {
//!     SportMetrics::Running { pace_min_per_km, .. } => assert_eq!(*pace_min_per_km, 6.0),
//!     _ => unreachable!(),
//! }
//! # Ok::<(), traillog::JournalError>(())
//! ```

mod collection;
mod coords;
mod workout;

// Re-export all public types
pub use collection::WorkoutCollection;
pub use coords::LatLng;
pub use workout::{Sport, SportMetrics, Workout, WorkoutEntry, WorkoutId};
