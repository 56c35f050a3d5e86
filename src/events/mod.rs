//! Upcoming-event side list
//!
//! Events come from an external aggregator. The chart only filters them down to
//! the ones close to the instant being rendered.

use chrono::{DateTime, Duration, Utc};
use serde::{Deserialize, Serialize};

/// A dated sky event, e.g. a conjunction or a meteor shower peak
#[derive(Debug, Clone, PartialEq, Serialize, Deserialize)]
pub struct SkyEvent {
    pub title: String,
    pub datetime: DateTime<Utc>,
}

impl SkyEvent {
    pub fn new(title: &str, datetime: DateTime<Utc>) -> Self {
        Self {
            title: title.to_string(),
            datetime,
        }
    }
}

/// Source of the event list
pub trait EventSource {
    fn event_list(&self) -> Vec<SkyEvent>;
}

impl EventSource for Vec<SkyEvent> {
    fn event_list(&self) -> Vec<SkyEvent> {
        self.clone()
    }
}

/// Events within `window_hours` either side of `instant`
///
/// Keeps the order of the input list and returns at most `limit` entries. A
/// non-finite or negative window matches nothing.
pub fn events_near<'a>(
    events: &'a [SkyEvent],
    instant: &DateTime<Utc>,
    window_hours: f64,
    limit: usize,
) -> Vec<&'a SkyEvent> {
    if !(window_hours >= 0.0) || !window_hours.is_finite() {
        return Vec::new();
    }
    let window = Duration::milliseconds((window_hours * 3_600_000.0).round() as i64);
    events
        .iter()
        .filter(|e| (e.datetime - *instant).abs() <= window)
        .take(limit)
        .collect()
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::j2000_instant;

    fn events() -> Vec<SkyEvent> {
        let t0 = j2000_instant();
        vec![
            SkyEvent::new("Far future", t0 + Duration::days(3)),
            SkyEvent::new("Tonight", t0 + Duration::hours(6)),
            SkyEvent::new("Yesterday", t0 - Duration::hours(23)),
            SkyEvent::new("Edge", t0 + Duration::hours(24)),
            SkyEvent::new("Just past edge", t0 - Duration::hours(24) - Duration::seconds(1)),
        ]
    }

    #[test]
    fn test_window_keeps_original_order() {
        let list = events();
        let near = events_near(&list, &j2000_instant(), 24.0, 5);
        let titles: Vec<&str> = near.iter().map(|e| e.title.as_str()).collect();
        assert_eq!(titles, vec!["Tonight", "Yesterday", "Edge"]);
    }

    #[test]
    fn test_limit() {
        let t0 = j2000_instant();
        let list: Vec<SkyEvent> = (0..8)
            .map(|i| SkyEvent::new(&format!("E{}", i), t0 + Duration::hours(i)))
            .collect();
        let near = events_near(&list, &t0, 24.0, 5);
        assert_eq!(near.len(), 5);
        assert_eq!(near[4].title, "E4");
    }

    #[test]
    fn test_bad_window() {
        let list = events();
        assert!(events_near(&list, &j2000_instant(), f64::NAN, 5).is_empty());
        assert!(events_near(&list, &j2000_instant(), -1.0, 5).is_empty());
    }

    #[test]
    fn test_event_json() {
        let json = r#"[{"title": "Perseids peak", "datetime": "2024-08-12T20:00:00Z"}]"#;
        let list: Vec<SkyEvent> = serde_json::from_str(json).unwrap();
        assert_eq!(list[0].title, "Perseids peak");
        assert_eq!(list.event_list().len(), 1);
    }
}
