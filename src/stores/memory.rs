//! In-memory storage slot

use tracing::debug;

use crate::Result;
use crate::store::{self, WorkoutStore};
use crate::types::WorkoutCollection;

/// Volatile slot holding the serialized collection as JSON text.
///
/// A stand-in for browser localStorage: the slot is a single string that
/// either exists or does not. Saving and loading go through the same wire
/// format as [`FileStore`](crate::stores::FileStore), so persisted copies
/// are genuine snapshots with data equality only, never shared live
/// references.
#[derive(Debug, Default)]
pub struct MemoryStore {
    slot: Option<String>,
}

impl MemoryStore {
    /// Create a store with an absent slot.
    pub fn new() -> Self {
        Self::default()
    }

    /// Create a store preloaded with raw slot text, e.g. to simulate an
    /// externally written or corrupted slot.
    pub fn with_slot(raw: impl Into<String>) -> Self {
        Self { slot: Some(raw.into()) }
    }

    /// The raw slot text, if any
    pub fn slot(&self) -> Option<&str> {
        self.slot.as_deref()
    }
}

impl WorkoutStore for MemoryStore {
    fn save(&mut self, workouts: &WorkoutCollection) -> Result<()> {
        self.slot = Some(store::encode_collection(workouts)?);
        debug!(records = workouts.len(), "saved journal to memory slot");
        Ok(())
    }

    fn load(&mut self) -> Result<WorkoutCollection> {
        match &self.slot {
            None => {
                debug!("memory slot absent, starting empty");
                Ok(WorkoutCollection::new())
            }
            Some(raw) => store::decode_collection(raw),
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::JournalError;
    use crate::types::{LatLng, Workout};

    #[test]
    fn absent_slot_loads_as_empty() {
        let mut store = MemoryStore::new();
        assert!(store.slot().is_none());
        assert!(store.load().unwrap().is_empty());
    }

    #[test]
    fn save_then_load_yields_equal_data_not_identity() {
        let mut workouts = WorkoutCollection::new();
        workouts
            .push(Workout::running(LatLng::new(10.0, 10.0).unwrap(), 5.0, 30.0, 150.0).unwrap());

        let mut store = MemoryStore::new();
        store.save(&workouts).unwrap();

        let reloaded = store.load().unwrap();
        assert_eq!(reloaded, workouts);
        // the slot holds text, not the collection itself
        assert!(store.slot().unwrap().contains("\"kind\":\"running\""));
    }

    #[test]
    fn corrupted_slot_is_a_parse_error() {
        let mut store = MemoryStore::with_slot("{{{");
        assert!(matches!(store.load(), Err(JournalError::Parse { .. })));
    }

    #[test]
    fn insertion_order_survives_the_round_trip() {
        let mut workouts = WorkoutCollection::new();
        for distance in [1.0, 2.0, 3.0, 4.0] {
            workouts.push(
                Workout::running(LatLng::new(0.0, 0.0).unwrap(), distance, 30.0, 150.0).unwrap(),
            );
        }

        let mut store = MemoryStore::new();
        store.save(&workouts).unwrap();
        let reloaded = store.load().unwrap();

        let distances: Vec<f64> = reloaded.iter().map(|w| w.distance_km()).collect();
        assert_eq!(distances, vec![1.0, 2.0, 3.0, 4.0]);
    }
}
