//! Capability traits for the view collaborators
//!
//! The core never renders anything itself. The map widget, the list widget
//! and the geolocation source are external collaborators; these traits are
//! the exact capability surface the controller consumes from each of them.
//! Hosts implement them over whatever UI stack they have (Leaflet bindings,
//! a TUI, a recording fake in tests).

use crate::types::{LatLng, WorkoutId};

/// Zoom level the host should use when first centering the map on the
/// user's position.
pub const INITIAL_ZOOM: u8 = 15;

/// Zoom level used when jumping to a workout from its list entry.
pub const FOCUS_ZOOM: u8 = 17;

/// Animation options for a map pan.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct PanAnimation {
    pub duration_secs: f32,
}

impl Default for PanAnimation {
    fn default() -> Self {
        Self { duration_secs: 2.0 }
    }
}

/// Trait for the map widget.
///
/// Calls arrive only after the host has signaled readiness through
/// `App::on_map_ready`; requests made earlier are queued by the controller
/// and replayed in their original order.
pub trait MapView {
    /// Center the view on a coordinate pair, optionally animating the pan.
    fn center_on(&mut self, coords: LatLng, zoom: u8, pan: Option<PanAnimation>);

    /// Place a marker with a popup.
    ///
    /// `style_class` is a sport-specific hook for the host's styling
    /// (`"running-popup"` / `"cycling-popup"`).
    fn add_marker(&mut self, coords: LatLng, popup: &str, style_class: &str);
}

/// Trait for the workout list widget.
pub trait ListView {
    /// Append one rendered entry.
    ///
    /// `id` is the join key the host must echo back through
    /// `App::on_list_entry_activated` when the entry is clicked.
    fn render_entry(&mut self, markup: &str, id: &WorkoutId);
}

/// Trait for the geolocation source.
///
/// The request is fire-and-forget and issued at most once per session
/// start. Its outcome re-enters the controller later as `on_map_ready`
/// (the host built the map around the acquired position) or
/// `on_location_unavailable`, possibly never, which the controller must
/// tolerate.
pub trait Geolocator {
    fn request_current_position(&mut self);
}
