//! Ordered collection of workout records

use crate::types::{Workout, WorkoutId};

/// The authoritative, ordered sequence of logged workouts.
///
/// Insertion order is creation order is display order (most-recent-last).
/// No two records share an id: fresh ids come from a per-process generator
/// and rehydrated slots are checked during decoding. The collection is
/// exclusively owned by the controller; persisted copies are disposable
/// snapshots, never shared live references.
#[derive(Debug, Clone, Default, PartialEq)]
pub struct WorkoutCollection {
    entries: Vec<Workout>,
}

impl WorkoutCollection {
    pub fn new() -> Self {
        Self::default()
    }

    pub fn len(&self) -> usize {
        self.entries.len()
    }

    pub fn is_empty(&self) -> bool {
        self.entries.is_empty()
    }

    /// Append a record at the end of the display order.
    pub fn push(&mut self, workout: Workout) {
        self.entries.push(workout);
    }

    /// Iterate records in display order.
    pub fn iter(&self) -> impl Iterator<Item = &Workout> {
        self.entries.iter()
    }

    /// Linear lookup by id. The collection stays small enough that an
    /// index would not pay for itself.
    pub fn find(&self, id: &WorkoutId) -> Option<&Workout> {
        self.entries.iter().find(|workout| workout.id() == id)
    }

    pub fn contains(&self, id: &WorkoutId) -> bool {
        self.find(id).is_some()
    }

    pub fn last(&self) -> Option<&Workout> {
        self.entries.last()
    }
}

impl<'a> IntoIterator for &'a WorkoutCollection {
    type Item = &'a Workout;
    type IntoIter = std::slice::Iter<'a, Workout>;

    fn into_iter(self) -> Self::IntoIter {
        self.entries.iter()
    }
}
