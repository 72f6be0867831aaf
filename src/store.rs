//! Persistence seam for the workout collection
//!
//! [`WorkoutStore`] abstracts over durable slots (a file, an in-memory
//! string, a browser localStorage adapter on the host side). Every backend
//! speaks the same wire format: a JSON array of flat [`StoredWorkout`]
//! objects, written wholesale on each save.
//!
//! The stored form is inert data. Loading is a deliberate reconstruction
//! step: each record is rebuilt as the correct sport variant from its
//! `kind` discriminant, its numeric fields re-validated, and its derived
//! metric recomputed from distance and duration. Stored `paceMinPerKm` /
//! `speedKmh` values are written for external readers of the slot but
//! never trusted on the way back in.

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::{LatLng, Sport, SportMetrics, Workout, WorkoutCollection, WorkoutId};
use crate::{JournalError, Result};

/// Trait for durable workout storage
///
/// Implementations own one named slot holding the serialized collection.
/// The contract is snapshot-oriented, with no incremental diffs:
///
/// - `save` replaces the slot wholesale; a failure is reported to the
///   caller but must never be treated as fatal to in-memory state
/// - `load` returns an empty collection when the slot is absent (that is
///   the normal first-run state, not an error)
pub trait WorkoutStore {
    /// Serialize and write the full ordered collection.
    fn save(&mut self, workouts: &WorkoutCollection) -> Result<()>;

    /// Read and rehydrate the collection; empty if the slot is absent.
    fn load(&mut self) -> Result<WorkoutCollection>;
}

/// Flat wire form of one workout record.
///
/// Field names are fixed camelCase so slots stay readable by non-Rust
/// tooling. Sport-specific fields are optional and omitted when absent.
#[derive(Debug, Clone, Serialize, Deserialize)]
#[serde(rename_all = "camelCase")]
pub struct StoredWorkout {
    pub id: WorkoutId,
    pub created_at: DateTime<Utc>,
    pub coordinates: LatLng,
    pub distance_km: f64,
    pub duration_min: f64,
    pub kind: Sport,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub cadence_spm: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub elevation_gain_m: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub pace_min_per_km: Option<f64>,
    #[serde(default, skip_serializing_if = "Option::is_none")]
    pub speed_kmh: Option<f64>,
}

impl From<&Workout> for StoredWorkout {
    fn from(workout: &Workout) -> Self {
        let mut stored = StoredWorkout {
            id: workout.id().clone(),
            created_at: workout.created_at(),
            coordinates: workout.coords(),
            distance_km: workout.distance_km(),
            duration_min: workout.duration_min(),
            kind: workout.sport(),
            cadence_spm: None,
            elevation_gain_m: None,
            pace_min_per_km: None,
            speed_kmh: None,
        };
        match workout.metrics() {
            SportMetrics::Running { cadence_spm, pace_min_per_km } => {
                stored.cadence_spm = Some(*cadence_spm);
                stored.pace_min_per_km = Some(*pace_min_per_km);
            }
            SportMetrics::Cycling { elevation_gain_m, speed_kmh } => {
                stored.elevation_gain_m = Some(*elevation_gain_m);
                stored.speed_kmh = Some(*speed_kmh);
            }
        }
        stored
    }
}

impl TryFrom<StoredWorkout> for Workout {
    type Error = JournalError;

    fn try_from(stored: StoredWorkout) -> Result<Workout> {
        match stored.kind {
            Sport::Running => {
                let cadence_spm = stored.cadence_spm.ok_or_else(|| {
                    JournalError::parse(
                        "stored workouts",
                        format!("running entry {} is missing cadenceSpm", stored.id),
                    )
                })?;
                Workout::rehydrate_running(
                    stored.id,
                    stored.created_at,
                    stored.coordinates,
                    stored.distance_km,
                    stored.duration_min,
                    cadence_spm,
                )
            }
            Sport::Cycling => {
                let elevation_gain_m = stored.elevation_gain_m.ok_or_else(|| {
                    JournalError::parse(
                        "stored workouts",
                        format!("cycling entry {} is missing elevationGainM", stored.id),
                    )
                })?;
                Workout::rehydrate_cycling(
                    stored.id,
                    stored.created_at,
                    stored.coordinates,
                    stored.distance_km,
                    stored.duration_min,
                    elevation_gain_m,
                )
            }
        }
    }
}

/// Encode a collection into the JSON slot text.
///
/// Public so hosts can implement [`WorkoutStore`] over storage this crate
/// does not ship a backend for, while staying on the shared wire format.
pub fn encode_collection(workouts: &WorkoutCollection) -> Result<String> {
    let stored: Vec<StoredWorkout> = workouts.iter().map(StoredWorkout::from).collect();
    Ok(serde_json::to_string(&stored)?)
}

/// Decode slot text back into a live collection.
///
/// Rehydrates every record as its proper variant and rejects slots that
/// violate the id-uniqueness invariant.
pub fn decode_collection(raw: &str) -> Result<WorkoutCollection> {
    let stored: Vec<StoredWorkout> = serde_json::from_str(raw)?;

    let mut workouts = WorkoutCollection::new();
    for record in stored {
        let workout = Workout::try_from(record)?;
        if workouts.contains(workout.id()) {
            return Err(JournalError::parse(
                "stored workouts",
                format!("duplicate workout id {}", workout.id()),
            ));
        }
        workouts.push(workout);
    }
    Ok(workouts)
}
