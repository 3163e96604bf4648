//! Geodesic distance, walk-time estimation and route-status sampling.
//!
//! # Responsibility
//! - Compute great-circle distance between two lat/lon points.
//! - Derive a bounded walking-time estimate from distance and speed.
//! - Build the outbound walking-directions link.
//!
//! # Invariants
//! - All functions here are pure; the only stochastic entry point takes
//!   its random source from the caller.
//! - Distances are measured from [`CANGKANG_ORIGIN`] in every user flow.

pub mod route;

pub use route::{sample_route_status, RouteStatus, CLEAR_PROBABILITY};

use serde::{Deserialize, Serialize};

/// Mean Earth radius used by the haversine formula, in kilometers.
pub const EARTH_RADIUS_KM: f64 = 6371.0;

/// Assumed walking speed for time estimates, in km/h.
pub const DEFAULT_WALK_SPEED_KMH: f64 = 4.0;

/// Fixed journey starting point: 長光部落 (Cangkang).
pub const CANGKANG_ORIGIN: GeoPoint = GeoPoint {
    lat: 23.398,
    lon: 121.488,
};

/// A latitude/longitude pair in decimal degrees.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct GeoPoint {
    pub lat: f64,
    pub lon: f64,
}

impl GeoPoint {
    pub const fn new(lat: f64, lon: f64) -> Self {
        Self { lat, lon }
    }
}

/// Haversine great-circle distance in kilometers.
pub fn distance_km(from: GeoPoint, to: GeoPoint) -> f64 {
    let dlat = (to.lat - from.lat).to_radians();
    let dlon = (to.lon - from.lon).to_radians();

    let a = (dlat / 2.0).sin().powi(2)
        + from.lat.to_radians().cos() * to.lat.to_radians().cos() * (dlon / 2.0).sin().powi(2);
    let c = 2.0 * a.sqrt().atan2((1.0 - a).sqrt());

    EARTH_RADIUS_KM * c
}

/// Walking-time estimate with a ±20% bounding interval, in hours.
#[derive(Debug, Clone, Copy, PartialEq, Serialize, Deserialize)]
pub struct WalkTimeEstimate {
    pub base_hours: f64,
    pub min_hours: f64,
    pub max_hours: f64,
}

/// Derives a bounded walking-time estimate from distance and speed.
///
/// `base = distance / speed`, interval is `base ± 0.2·base`. Distance is
/// never negative, so no clamping is applied.
pub fn estimate_walk_time(distance_km: f64, speed_kmh: f64) -> WalkTimeEstimate {
    let base_hours = distance_km / speed_kmh;
    let buffer = base_hours * 0.2;
    WalkTimeEstimate {
        base_hours,
        min_hours: base_hours - buffer,
        max_hours: base_hours + buffer,
    }
}

/// Builds the opaque outbound Google Maps walking-directions link.
pub fn walking_directions_url(from: GeoPoint, to: GeoPoint) -> String {
    format!(
        "https://www.google.com/maps/dir/?api=1&origin={},{}&destination={},{}&travelmode=walking",
        from.lat, from.lon, to.lat, to.lon
    )
}

#[cfg(test)]
mod tests {
    use super::{distance_km, GeoPoint, CANGKANG_ORIGIN};

    #[test]
    fn distance_to_self_is_zero() {
        assert_eq!(distance_km(CANGKANG_ORIGIN, CANGKANG_ORIGIN), 0.0);
    }

    #[test]
    fn distance_is_symmetric() {
        let pacidal = GeoPoint::new(23.931, 121.535);
        let there = distance_km(CANGKANG_ORIGIN, pacidal);
        let back = distance_km(pacidal, CANGKANG_ORIGIN);
        assert!((there - back).abs() < 1e-9);
    }
}
