//! Recording fakes shared by in-crate unit tests
//!
//! Each view fake appends every call it receives to a shared log handle so
//! tests can hand the fake to the controller and still inspect what was
//! rendered afterwards.

#![cfg(test)]

use std::cell::RefCell;
use std::rc::Rc;

use crate::store::WorkoutStore;
use crate::types::{LatLng, WorkoutCollection, WorkoutId};
use crate::views::{Geolocator, ListView, MapView, PanAnimation};
use crate::{JournalError, Result};

/// Everything a [`RecordingMap`] was asked to do, in call order.
#[derive(Debug, Default)]
pub struct MapLog {
    pub markers: Vec<(LatLng, String, String)>,
    pub centers: Vec<(LatLng, u8, Option<PanAnimation>)>,
}

/// Map fake writing into a shared [`MapLog`].
pub struct RecordingMap(pub Rc<RefCell<MapLog>>);

impl MapView for RecordingMap {
    fn center_on(&mut self, coords: LatLng, zoom: u8, pan: Option<PanAnimation>) {
        self.0.borrow_mut().centers.push((coords, zoom, pan));
    }

    fn add_marker(&mut self, coords: LatLng, popup: &str, style_class: &str) {
        self.0.borrow_mut().markers.push((coords, popup.to_string(), style_class.to_string()));
    }
}

/// Every entry a [`RecordingList`] rendered, in call order.
#[derive(Debug, Default)]
pub struct ListLog {
    pub entries: Vec<(String, WorkoutId)>,
}

/// List fake writing into a shared [`ListLog`].
pub struct RecordingList(pub Rc<RefCell<ListLog>>);

impl ListView for RecordingList {
    fn render_entry(&mut self, markup: &str, id: &WorkoutId) {
        self.0.borrow_mut().entries.push((markup.to_string(), id.clone()));
    }
}

/// Geolocator fake that only counts requests.
#[derive(Debug, Default)]
pub struct CountingGeolocator {
    pub requests: u32,
}

impl Geolocator for CountingGeolocator {
    fn request_current_position(&mut self) {
        self.requests += 1;
    }
}

/// Store whose writes always fail, e.g. a full storage quota.
#[derive(Debug, Default)]
pub struct FailingStore;

impl WorkoutStore for FailingStore {
    fn save(&mut self, _workouts: &WorkoutCollection) -> Result<()> {
        Err(JournalError::storage("slot quota exceeded"))
    }

    fn load(&mut self) -> Result<WorkoutCollection> {
        Ok(WorkoutCollection::new())
    }
}
