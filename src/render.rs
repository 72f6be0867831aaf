//! Display derivation shared by both view renderers
//!
//! Everything in this module is a pure function of a [`Workout`]: the same
//! record always yields the same icon, title and markup, and nothing here
//! mutates the record. The markup mirrors the shape list hosts style with
//! the `workout`/`workout__*` class family.

use crate::types::{Sport, SportMetrics, Workout};

/// Icon used to tag a sport in titles and detail rows
pub fn sport_icon(sport: Sport) -> &'static str {
    match sport {
        Sport::Running => "🏃‍♂️",
        Sport::Cycling => "🚴‍♀️",
    }
}

/// Style class for a workout's map popup
pub fn popup_class(sport: Sport) -> &'static str {
    match sport {
        Sport::Running => "running-popup",
        Sport::Cycling => "cycling-popup",
    }
}

fn sport_label(sport: Sport) -> &'static str {
    match sport {
        Sport::Running => "Running",
        Sport::Cycling => "Cycling",
    }
}

/// Human-readable title, e.g. `🏃‍♂️ Running on August 7`.
///
/// Used both as the marker popup content and as the list entry heading.
pub fn title(workout: &Workout) -> String {
    let sport = workout.sport();
    format!(
        "{} {} on {}",
        sport_icon(sport),
        sport_label(sport),
        workout.created_at().format("%B %-d")
    )
}

/// Full list-entry markup for one workout.
///
/// Shared detail rows (distance, duration) are followed by the two
/// sport-specific rows: pace and cadence for running, speed and elevation
/// gain for cycling.
pub fn list_entry(workout: &Workout) -> String {
    let sport = workout.sport();
    let mut markup = format!(
        "<li class=\"workout workout--{sport}\" data-id=\"{id}\">\
         <h2 class=\"workout__title\">{title}</h2>\
         {distance}{duration}",
        sport = sport.as_str(),
        id = workout.id(),
        title = title(workout),
        distance = detail_row(sport_icon(sport), workout.distance_km(), "km"),
        duration = detail_row("⏱", workout.duration_min(), "min"),
    );

    match workout.metrics() {
        SportMetrics::Running { cadence_spm, pace_min_per_km } => {
            markup.push_str(&detail_row("⚡️", *pace_min_per_km, "min/km"));
            markup.push_str(&detail_row("🦶🏼", *cadence_spm, "spm"));
        }
        SportMetrics::Cycling { elevation_gain_m, speed_kmh } => {
            markup.push_str(&detail_row("⚡️", *speed_kmh, "km/h"));
            markup.push_str(&detail_row("⛰", *elevation_gain_m, "m"));
        }
    }

    markup.push_str("</li>");
    markup
}

fn detail_row(icon: &str, value: f64, unit: &str) -> String {
    format!(
        "<div class=\"workout__details\">\
         <span class=\"workout__icon\">{icon}</span>\
         <span class=\"workout__value\">{value}</span>\
         <span class=\"workout__unit\">{unit}</span>\
         </div>"
    )
}
