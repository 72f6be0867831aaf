//! Workout records and their derived metrics
//!
//! A [`Workout`] is immutable after construction. Construction is
//! all-or-nothing: every numeric input is validated up front and the
//! sport-specific derived metric (pace or speed) is computed once and
//! stored alongside the inputs, so a record can never be observed with a
//! metric that disagrees with its distance and duration.

use std::sync::atomic::{AtomicU64, Ordering};

use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

use crate::types::LatLng;
use crate::{JournalError, Result};

/// Per-process sequence so records created in the same millisecond still
/// get distinct ids.
static NEXT_SEQUENCE: AtomicU64 = AtomicU64::new(0);

/// Opaque unique identifier for a workout record.
///
/// Assigned at creation and stable for the record's lifetime; this is the
/// sole join key between list entries and in-memory records.
#[derive(Debug, Clone, PartialEq, Eq, Hash, Serialize, Deserialize)]
#[serde(transparent)]
pub struct WorkoutId(String);

impl WorkoutId {
    /// Wrap an existing id, e.g. one read back from storage.
    pub fn new(raw: impl Into<String>) -> Self {
        Self(raw.into())
    }

    fn generate(created_at: DateTime<Utc>) -> Self {
        let stamp = format!("{:010}", created_at.timestamp_millis().unsigned_abs());
        let stamp = &stamp[stamp.len() - 10..];
        let seq = NEXT_SEQUENCE.fetch_add(1, Ordering::Relaxed);
        Self(format!("{stamp}-{seq}"))
    }

    /// The id as a string slice
    pub fn as_str(&self) -> &str {
        &self.0
    }
}

impl std::fmt::Display for WorkoutId {
    fn fmt(&self, f: &mut std::fmt::Formatter<'_>) -> std::fmt::Result {
        f.write_str(&self.0)
    }
}

/// Sport discriminant for a workout record.
#[derive(Debug, Clone, Copy, PartialEq, Eq, Serialize, Deserialize)]
#[serde(rename_all = "lowercase")]
pub enum Sport {
    Running,
    Cycling,
}

impl Sport {
    /// Lowercase sport name, as used in the wire form and style classes
    pub fn as_str(self) -> &'static str {
        match self {
            Sport::Running => "running",
            Sport::Cycling => "cycling",
        }
    }
}

/// Sport-specific payload: the user-supplied intensity input plus the
/// metric derived from it at construction time.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum SportMetrics {
    Running { cadence_spm: f64, pace_min_per_km: f64 },
    Cycling { elevation_gain_m: f64, speed_kmh: f64 },
}

impl SportMetrics {
    /// The discriminant for this payload
    pub fn sport(&self) -> Sport {
        match self {
            SportMetrics::Running { .. } => Sport::Running,
            SportMetrics::Cycling { .. } => Sport::Cycling,
        }
    }
}

/// The numeric inputs of a submitted workout form.
///
/// Id, timestamp and coordinates are assigned by the core, never by the
/// form; this carries only what the user typed.
#[derive(Debug, Clone, Copy, PartialEq)]
pub enum WorkoutEntry {
    Running { distance_km: f64, duration_min: f64, cadence_spm: f64 },
    Cycling { distance_km: f64, duration_min: f64, elevation_gain_m: f64 },
}

/// One logged exercise session.
#[derive(Debug, Clone, PartialEq)]
pub struct Workout {
    id: WorkoutId,
    created_at: DateTime<Utc>,
    coords: LatLng,
    distance_km: f64,
    duration_min: f64,
    metrics: SportMetrics,
}

impl Workout {
    /// Create a running record. Pace (min/km) is derived immediately.
    pub fn running(
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self> {
        let created_at = Utc::now();
        Self::build_running(
            WorkoutId::generate(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            cadence_spm,
        )
    }

    /// Create a cycling record. Speed (km/h) is derived immediately.
    pub fn cycling(
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        let created_at = Utc::now();
        Self::build_cycling(
            WorkoutId::generate(created_at),
            created_at,
            coords,
            distance_km,
            duration_min,
            elevation_gain_m,
        )
    }

    /// Create the record variant matching a submitted form.
    pub fn from_entry(coords: LatLng, entry: WorkoutEntry) -> Result<Self> {
        match entry {
            WorkoutEntry::Running { distance_km, duration_min, cadence_spm } => {
                Self::running(coords, distance_km, duration_min, cadence_spm)
            }
            WorkoutEntry::Cycling { distance_km, duration_min, elevation_gain_m } => {
                Self::cycling(coords, distance_km, duration_min, elevation_gain_m)
            }
        }
    }

    /// Reconstruct a running record from stored data, keeping its original
    /// id and timestamp. The pace is recomputed, not trusted.
    pub(crate) fn rehydrate_running(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self> {
        Self::build_running(id, created_at, coords, distance_km, duration_min, cadence_spm)
    }

    /// Reconstruct a cycling record from stored data, keeping its original
    /// id and timestamp. The speed is recomputed, not trusted.
    pub(crate) fn rehydrate_cycling(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        Self::build_cycling(id, created_at, coords, distance_km, duration_min, elevation_gain_m)
    }

    fn build_running(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        cadence_spm: f64,
    ) -> Result<Self> {
        let distance_km = positive("distance", distance_km)?;
        let duration_min = positive("duration", duration_min)?;
        let cadence_spm = positive("cadence", cadence_spm)?;

        let pace_min_per_km = duration_min / distance_km;
        Ok(Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            metrics: SportMetrics::Running { cadence_spm, pace_min_per_km },
        })
    }

    fn build_cycling(
        id: WorkoutId,
        created_at: DateTime<Utc>,
        coords: LatLng,
        distance_km: f64,
        duration_min: f64,
        elevation_gain_m: f64,
    ) -> Result<Self> {
        let distance_km = positive("distance", distance_km)?;
        let duration_min = positive("duration", duration_min)?;
        let elevation_gain_m = non_negative("elevation gain", elevation_gain_m)?;

        let speed_kmh = distance_km / (duration_min / 60.0);
        Ok(Self {
            id,
            created_at,
            coords,
            distance_km,
            duration_min,
            metrics: SportMetrics::Cycling { elevation_gain_m, speed_kmh },
        })
    }

    pub fn id(&self) -> &WorkoutId {
        &self.id
    }

    pub fn created_at(&self) -> DateTime<Utc> {
        self.created_at
    }

    pub fn coords(&self) -> LatLng {
        self.coords
    }

    pub fn distance_km(&self) -> f64 {
        self.distance_km
    }

    pub fn duration_min(&self) -> f64 {
        self.duration_min
    }

    pub fn sport(&self) -> Sport {
        self.metrics.sport()
    }

    pub fn metrics(&self) -> &SportMetrics {
        &self.metrics
    }
}

fn positive(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value > 0.0 {
        Ok(value)
    } else {
        Err(JournalError::validation(field, "a positive, finite number", value))
    }
}

fn non_negative(field: &'static str, value: f64) -> Result<f64> {
    if value.is_finite() && value >= 0.0 {
        Ok(value)
    } else {
        Err(JournalError::validation(field, "a finite number of at least zero", value))
    }
}
