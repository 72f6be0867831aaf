//! The workout controller
//!
//! [`App`] owns the authoritative in-memory collection and mediates every
//! flow between the store, the map and the list: location picks open a
//! pending form, submits validate and append, list clicks re-center the
//! map, and session start rehydrates the persisted collection into both
//! views.
//!
//! The map may become ready long after the session starts, or never.
//! Map-bound work is therefore funneled through a single FIFO queue that
//! is flushed once on the ready signal; afterwards requests dispatch
//! directly. List rendering never waits on the map.

use std::collections::VecDeque;

use tracing::{debug, info, warn};

use crate::render;
use crate::store::WorkoutStore;
use crate::types::{LatLng, Workout, WorkoutCollection, WorkoutEntry, WorkoutId};
use crate::views::{FOCUS_ZOOM, Geolocator, ListView, MapView, PanAnimation};
use crate::{JournalError, Result};

/// The controller's input state machine.
///
/// `Idle` means no form is pending; a location pick moves to
/// `AwaitingInput` with the clicked coordinates held until the submit.
#[derive(Debug, Clone, Copy, PartialEq)]
enum InputPhase {
    Idle,
    AwaitingInput { coords: LatLng },
}

/// One unit of map-bound work, queued while the map is not ready.
#[derive(Debug, Clone, PartialEq)]
enum MapRequest {
    Marker { coords: LatLng, popup: String, style_class: &'static str },
    Center { coords: LatLng, zoom: u8, pan: Option<PanAnimation> },
}

impl MapRequest {
    fn marker_for(workout: &Workout) -> Self {
        MapRequest::Marker {
            coords: workout.coords(),
            popup: render::title(workout),
            style_class: render::popup_class(workout.sport()),
        }
    }
}

/// Workout journal controller.
///
/// Generic over the storage backend; the view collaborators sit behind
/// trait objects because a session has exactly one of each and they are
/// chosen by the host at wiring time.
pub struct App<S: WorkoutStore> {
    store: S,
    map: Box<dyn MapView>,
    list: Box<dyn ListView>,
    workouts: WorkoutCollection,
    phase: InputPhase,
    map_ready: bool,
    pending: VecDeque<MapRequest>,
}

impl<S: WorkoutStore> App<S> {
    /// Wire up a controller. No I/O happens until [`App::start`].
    pub fn new(store: S, map: Box<dyn MapView>, list: Box<dyn ListView>) -> Self {
        Self {
            store,
            map,
            list,
            workouts: WorkoutCollection::new(),
            phase: InputPhase::Idle,
            map_ready: false,
            pending: VecDeque::new(),
        }
    }

    /// Start the session: rehydrate the persisted collection, render its
    /// list entries, queue its markers, and fire the geolocation request.
    ///
    /// A failed load is reported but not fatal: the session continues with
    /// an empty collection and a later save simply overwrites the slot.
    /// List entries render before the map can possibly be ready; markers
    /// wait in the queue for [`App::on_map_ready`].
    pub fn start(&mut self, geolocator: &mut dyn Geolocator) -> Result<()> {
        let load_error = match self.store.load() {
            Ok(workouts) => {
                self.workouts = workouts;
                None
            }
            Err(error) => {
                warn!(%error, "could not load the journal slot, starting empty");
                self.workouts = WorkoutCollection::new();
                Some(error)
            }
        };
        info!(records = self.workouts.len(), "session started");

        for workout in self.workouts.iter() {
            self.list.render_entry(&render::list_entry(workout), workout.id());
        }

        let markers: Vec<MapRequest> = self.workouts.iter().map(MapRequest::marker_for).collect();
        for request in markers {
            self.submit_map_request(request);
        }

        geolocator.request_current_position();

        match load_error {
            Some(error) => Err(error),
            None => Ok(()),
        }
    }

    /// The host's map is up; flush every deferred request in FIFO order.
    pub fn on_map_ready(&mut self) {
        self.map_ready = true;
        debug!(pending = self.pending.len(), "map ready, flushing deferred requests");
        while let Some(request) = self.pending.pop_front() {
            Self::dispatch(self.map.as_mut(), request);
        }
    }

    /// Geolocation failed; the session continues without map rendering.
    ///
    /// Deferred requests stay queued; the map may still come up later
    /// through some other host path, or never.
    pub fn on_location_unavailable(&mut self) {
        warn!(error = %JournalError::LocationUnavailable, "continuing without the map");
    }

    /// A location was picked on the map; hold it for the next submit.
    ///
    /// Picking again while a form is already open replaces the pending
    /// coordinates: the newest pick wins.
    pub fn on_location_picked(&mut self, coords: LatLng) {
        if matches!(self.phase, InputPhase::AwaitingInput { .. }) {
            debug!("replacing pending location with a newer pick");
        }
        self.phase = InputPhase::AwaitingInput { coords };
    }

    /// The form was submitted for the pending location.
    ///
    /// On validation failure the controller stays in its awaiting state,
    /// the pending coordinates survive, and nothing is appended: the host
    /// keeps the form open and shows the error. On success the record is
    /// appended, the whole collection persisted (a write failure is
    /// reported as a warning and never rolls back the append), both views
    /// updated, and the controller returns to idle.
    pub fn on_form_submitted(&mut self, entry: WorkoutEntry) -> Result<WorkoutId> {
        let InputPhase::AwaitingInput { coords } = self.phase else {
            debug!("form submitted with no pending location");
            return Err(JournalError::NoPendingLocation);
        };

        let workout = Workout::from_entry(coords, entry)?;

        let markup = render::list_entry(&workout);
        let marker = MapRequest::marker_for(&workout);
        let id = workout.id().clone();

        self.workouts.push(workout);
        if let Err(error) = self.store.save(&self.workouts) {
            warn!(%error, "could not persist the journal; the new entry stays in memory");
        }

        self.submit_map_request(marker);
        self.list.render_entry(&markup, &id);
        self.phase = InputPhase::Idle;
        info!(%id, "logged workout");
        Ok(id)
    }

    /// A list entry was activated; center the map on its workout.
    ///
    /// A stale id (entry outliving its record) is ignored, never an
    /// error, never a state change.
    pub fn on_list_entry_activated(&mut self, id: &WorkoutId) {
        let Some(coords) = self.workouts.find(id).map(Workout::coords) else {
            debug!(%id, "list entry refers to an unknown workout, ignoring");
            return;
        };
        self.submit_map_request(MapRequest::Center {
            coords,
            zoom: FOCUS_ZOOM,
            pan: Some(PanAnimation::default()),
        });
    }

    /// The authoritative collection
    pub fn workouts(&self) -> &WorkoutCollection {
        &self.workouts
    }

    /// Whether a form is currently open
    pub fn is_awaiting_input(&self) -> bool {
        matches!(self.phase, InputPhase::AwaitingInput { .. })
    }

    /// The coordinates held for the next submit, if a form is open
    pub fn pending_location(&self) -> Option<LatLng> {
        match self.phase {
            InputPhase::AwaitingInput { coords } => Some(coords),
            InputPhase::Idle => None,
        }
    }

    /// Whether the map has signaled readiness
    pub fn is_map_ready(&self) -> bool {
        self.map_ready
    }

    /// Number of map requests still waiting for the ready signal
    pub fn pending_map_requests(&self) -> usize {
        self.pending.len()
    }

    fn submit_map_request(&mut self, request: MapRequest) {
        if self.map_ready {
            Self::dispatch(self.map.as_mut(), request);
        } else {
            self.pending.push_back(request);
        }
    }

    fn dispatch(map: &mut dyn MapView, request: MapRequest) {
        match request {
            MapRequest::Marker { coords, popup, style_class } => {
                map.add_marker(coords, &popup, style_class);
            }
            MapRequest::Center { coords, zoom, pan } => {
                map.center_on(coords, zoom, pan);
            }
        }
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::store;
    use crate::stores::MemoryStore;
    use crate::test_utils::{
        CountingGeolocator, FailingStore, ListLog, MapLog, RecordingList, RecordingMap,
    };
    use std::cell::RefCell;
    use std::rc::Rc;

    fn harness<S: WorkoutStore>(store: S) -> (App<S>, Rc<RefCell<MapLog>>, Rc<RefCell<ListLog>>) {
        let map_log = Rc::new(RefCell::new(MapLog::default()));
        let list_log = Rc::new(RefCell::new(ListLog::default()));
        let app = App::new(
            store,
            Box::new(RecordingMap(Rc::clone(&map_log))),
            Box::new(RecordingList(Rc::clone(&list_log))),
        );
        (app, map_log, list_log)
    }

    fn running_entry() -> WorkoutEntry {
        WorkoutEntry::Running { distance_km: 5.0, duration_min: 30.0, cadence_spm: 150.0 }
    }

    fn coords(lat: f64, lng: f64) -> LatLng {
        LatLng::new(lat, lng).unwrap()
    }

    #[test]
    fn submit_without_a_pick_is_rejected() {
        let (mut app, _map, list) = harness(MemoryStore::new());
        let error = app.on_form_submitted(running_entry()).unwrap_err();
        assert!(matches!(error, JournalError::NoPendingLocation));
        assert!(app.workouts().is_empty());
        assert!(list.borrow().entries.is_empty());
    }

    #[test]
    fn pick_then_submit_appends_and_renders() {
        let (mut app, map, list) = harness(MemoryStore::new());
        app.on_location_picked(coords(10.0, 10.0));
        assert!(app.is_awaiting_input());

        let id = app.on_form_submitted(running_entry()).unwrap();

        assert!(!app.is_awaiting_input());
        assert_eq!(app.workouts().len(), 1);
        assert_eq!(app.workouts().find(&id).unwrap().coords(), coords(10.0, 10.0));

        let list = list.borrow();
        assert_eq!(list.entries.len(), 1);
        assert_eq!(list.entries[0].1, id);

        // map not ready yet: marker deferred, nothing rendered
        assert!(map.borrow().markers.is_empty());
        assert_eq!(app.pending_map_requests(), 1);
    }

    #[test]
    fn markers_dispatch_directly_once_the_map_is_ready() {
        let (mut app, map, _list) = harness(MemoryStore::new());
        app.on_map_ready();

        app.on_location_picked(coords(10.0, 10.0));
        app.on_form_submitted(running_entry()).unwrap();

        let map = map.borrow();
        assert_eq!(map.markers.len(), 1);
        let (marker_coords, popup, style_class) = &map.markers[0];
        assert_eq!(*marker_coords, coords(10.0, 10.0));
        assert!(popup.contains("Running on"));
        assert_eq!(style_class.as_str(), "running-popup");
    }

    #[test]
    fn deferred_requests_flush_in_original_order() {
        let (mut app, map, _list) = harness(MemoryStore::new());

        app.on_location_picked(coords(1.0, 1.0));
        app.on_form_submitted(running_entry()).unwrap();
        app.on_location_picked(coords(2.0, 2.0));
        app.on_form_submitted(WorkoutEntry::Cycling {
            distance_km: 20.0,
            duration_min: 60.0,
            elevation_gain_m: 400.0,
        })
        .unwrap();

        assert_eq!(app.pending_map_requests(), 2);
        app.on_map_ready();
        assert_eq!(app.pending_map_requests(), 0);

        let map = map.borrow();
        assert_eq!(map.markers.len(), 2);
        assert_eq!(map.markers[0].0, coords(1.0, 1.0));
        assert_eq!(map.markers[1].0, coords(2.0, 2.0));
    }

    #[test]
    fn a_second_pick_replaces_the_first() {
        let (mut app, _map, _list) = harness(MemoryStore::new());
        app.on_location_picked(coords(1.0, 1.0));
        app.on_location_picked(coords(2.0, 2.0));
        assert!(app.workouts().is_empty());
        assert_eq!(app.pending_location(), Some(coords(2.0, 2.0)));

        let id = app.on_form_submitted(running_entry()).unwrap();
        assert_eq!(app.workouts().find(&id).unwrap().coords(), coords(2.0, 2.0));
    }

    #[test]
    fn invalid_input_keeps_the_form_open_and_the_collection_unchanged() {
        let (mut app, _map, list) = harness(MemoryStore::new());
        app.on_location_picked(coords(10.0, 10.0));

        let error = app
            .on_form_submitted(WorkoutEntry::Running {
                distance_km: -1.0,
                duration_min: 30.0,
                cadence_spm: 150.0,
            })
            .unwrap_err();

        assert!(error.is_input_error());
        assert!(app.is_awaiting_input());
        assert_eq!(app.pending_location(), Some(coords(10.0, 10.0)));
        assert!(app.workouts().is_empty());
        assert!(list.borrow().entries.is_empty());

        // the retained location still works for a corrected submit
        assert!(app.on_form_submitted(running_entry()).is_ok());
        assert_eq!(app.workouts().len(), 1);
    }

    #[test]
    fn stale_list_references_are_ignored() {
        let (mut app, map, _list) = harness(MemoryStore::new());
        app.on_map_ready();
        app.on_list_entry_activated(&WorkoutId::new("long-gone"));
        assert!(map.borrow().centers.is_empty());
        assert!(app.workouts().is_empty());
    }

    #[test]
    fn activating_an_entry_centers_the_map_on_its_workout() {
        let (mut app, map, _list) = harness(MemoryStore::new());
        app.on_map_ready();
        app.on_location_picked(coords(10.0, 10.0));
        let id = app.on_form_submitted(running_entry()).unwrap();

        app.on_list_entry_activated(&id);

        let map = map.borrow();
        assert_eq!(map.centers.len(), 1);
        let (center, zoom, pan) = &map.centers[0];
        assert_eq!(*center, coords(10.0, 10.0));
        assert_eq!(*zoom, FOCUS_ZOOM);
        assert_eq!(*pan, Some(PanAnimation::default()));
    }

    #[test]
    fn a_failed_save_does_not_roll_back_the_append() {
        let (mut app, _map, list) = harness(FailingStore);
        app.on_location_picked(coords(10.0, 10.0));

        let id = app.on_form_submitted(running_entry()).unwrap();

        assert_eq!(app.workouts().len(), 1);
        assert!(app.workouts().contains(&id));
        assert!(!app.is_awaiting_input());
        assert_eq!(list.borrow().entries.len(), 1);
    }

    #[test]
    fn start_renders_the_persisted_collection_and_requests_location_once() {
        let mut seeded = WorkoutCollection::new();
        seeded.push(Workout::running(coords(10.0, 10.0), 5.0, 30.0, 150.0).unwrap());
        seeded.push(Workout::cycling(coords(11.0, 12.0), 20.0, 60.0, 400.0).unwrap());
        let slot = store::encode_collection(&seeded).unwrap();

        let (mut app, map, list) = harness(MemoryStore::with_slot(slot));
        let mut geolocator = CountingGeolocator::default();
        app.start(&mut geolocator).unwrap();

        assert_eq!(geolocator.requests, 1);
        assert_eq!(app.workouts().len(), 2);

        // list entries render immediately, markers wait for the map
        assert_eq!(list.borrow().entries.len(), 2);
        assert!(map.borrow().markers.is_empty());
        assert_eq!(app.pending_map_requests(), 2);

        app.on_map_ready();
        let map = map.borrow();
        assert_eq!(map.markers.len(), 2);
        assert_eq!(map.markers[0].0, coords(10.0, 10.0));
        assert_eq!(map.markers[1].0, coords(11.0, 12.0));
    }

    #[test]
    fn start_with_a_corrupt_slot_reports_and_continues_empty() {
        let (mut app, _map, list) = harness(MemoryStore::with_slot("{{{"));
        let mut geolocator = CountingGeolocator::default();

        let error = app.start(&mut geolocator).unwrap_err();
        assert!(matches!(error, JournalError::Parse { .. }));
        assert!(app.workouts().is_empty());
        assert!(list.borrow().entries.is_empty());
        assert_eq!(geolocator.requests, 1);

        // the session stays fully functional
        app.on_location_picked(coords(10.0, 10.0));
        assert!(app.on_form_submitted(running_entry()).is_ok());
    }

    #[test]
    fn location_unavailable_leaves_the_queue_intact() {
        let (mut app, map, _list) = harness(MemoryStore::new());
        app.on_location_picked(coords(10.0, 10.0));
        app.on_form_submitted(running_entry()).unwrap();
        assert_eq!(app.pending_map_requests(), 1);

        app.on_location_unavailable();
        assert_eq!(app.pending_map_requests(), 1);
        assert!(map.borrow().markers.is_empty());

        // a late ready signal still renders every queued marker
        app.on_map_ready();
        assert_eq!(map.borrow().markers.len(), 1);
    }
}
