//! Observer context: where and when the sky is drawn for
//!
//! Location and time are owned by the host application. The chart only reads
//! them; a change of either simply calls for a new render.

use crate::coordinates::GeoLocation;
use chrono::{DateTime, Utc};
use serde::{Deserialize, Serialize};

/// Source of the observer's location and the instant to render
///
/// Either value may be unknown, in which case [`ObserverContext::resolve`]
/// falls back to the configured location and the current time.
pub trait ObserverSource {
    fn observer_location(&self) -> Option<GeoLocation>;
    fn selected_instant(&self) -> Option<DateTime<Utc>>;
}

/// Observer position and the instant being rendered
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct ObserverContext {
    pub location: GeoLocation,
    pub instant: DateTime<Utc>,
}

impl ObserverContext {
    pub fn new(location: GeoLocation, instant: DateTime<Utc>) -> Self {
        Self { location, instant }
    }

    /// Build a context from a collaborator, filling gaps with the fallback location and now
    pub fn resolve(source: &dyn ObserverSource, fallback: GeoLocation) -> Self {
        Self {
            location: source.observer_location().unwrap_or(fallback),
            instant: source.selected_instant().unwrap_or_else(Utc::now),
        }
    }

    pub fn latitude(&self) -> f64 {
        self.location.latitude
    }

    pub fn longitude(&self) -> f64 {
        self.location.longitude
    }
}

/// A fixed location and instant, mostly useful for tests and the CLI
#[derive(Debug, Clone, Copy, Default)]
pub struct FixedObserver {
    pub location: Option<GeoLocation>,
    pub instant: Option<DateTime<Utc>>,
}

impl ObserverSource for FixedObserver {
    fn observer_location(&self) -> Option<GeoLocation> {
        self.location
    }

    fn selected_instant(&self) -> Option<DateTime<Utc>> {
        self.instant
    }
}

#[cfg(test)]
mod tests {
    use super::*;
    use crate::time::j2000_instant;

    #[test]
    fn test_resolve_uses_supplied_values() {
        let source = FixedObserver {
            location: Some(GeoLocation::new(51.48, 0.0)),
            instant: Some(j2000_instant()),
        };
        let context = ObserverContext::resolve(&source, GeoLocation::new(1.0, 2.0));
        assert_eq!(context.latitude(), 51.48);
        assert_eq!(context.longitude(), 0.0);
        assert_eq!(context.instant, j2000_instant());
    }

    #[test]
    fn test_resolve_falls_back() {
        let before = Utc::now();
        let context =
            ObserverContext::resolve(&FixedObserver::default(), GeoLocation::new(10.25, -61.63));
        assert_eq!(context.location, GeoLocation::new(10.25, -61.63));
        assert!(context.instant >= before);
    }
}
