//! Distance utilities leveraging the geo crate.
//!
//! This module wraps the `geo` crate's metric implementations behind a
//! small surface: a haversine [`distance`] for the common case and
//! [`distance_between`] when the caller wants to pick the metric.

use geo::{Distance, Euclidean, Geodesic, Haversine, Point, Rhumb};

/// Distance metrics for spatial calculations.
///
/// Different metrics are appropriate for different use cases:
/// - **Haversine**: Fast spherical distance, good for most lon/lat calculations
/// - **Geodesic**: More accurate ellipsoidal distance (Karney 2013), slower
/// - **Rhumb**: Constant bearing distance, useful for navigation
/// - **Euclidean**: Planar distance, only for projected coordinates
#[derive(Debug, Clone, Copy, PartialEq, Eq, Default)]
pub enum DistanceMetric {
    /// Haversine formula - assumes spherical Earth, fast and accurate enough for most uses
    #[default]
    Haversine,
    /// Geodesic distance using Karney (2013) - more accurate, accounts for Earth's ellipsoid
    Geodesic,
    /// Rhumb line (loxodrome) - maintains constant bearing
    Rhumb,
    /// Euclidean distance - for planar/projected coordinates only
    Euclidean,
}

/// Great-circle (haversine) distance between two points, in meters.
///
/// Pure function; NaN or out-of-range coordinates are not validated and
/// produce implementation-defined results.
///
/// # Examples
///
/// ```rust
/// use locus::{spatial::distance, Point};
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// let la = Point::new(-118.2437, 34.0522);
///
/// let meters = distance(&nyc, &la);
/// assert!(meters > 3_900_000.0); // ~3,944 km
/// ```
pub fn distance(point1: &Point, point2: &Point) -> f64 {
    distance_between(point1, point2, DistanceMetric::Haversine)
}

/// Calculate the distance between two points using the specified metric.
///
/// # Arguments
///
/// * `point1` - First point
/// * `point2` - Second point
/// * `metric` - Distance metric to use
///
/// # Returns
///
/// Distance in meters
///
/// # Examples
///
/// ```rust
/// use locus::{spatial::{distance_between, DistanceMetric}, Point};
///
/// let nyc = Point::new(-74.0060, 40.7128);
/// let la = Point::new(-118.2437, 34.0522);
///
/// let dist = distance_between(&nyc, &la, DistanceMetric::Haversine);
/// let dist_geodesic = distance_between(&nyc, &la, DistanceMetric::Geodesic);
/// assert!((dist - dist_geodesic).abs() < 10_000.0);
/// ```
pub fn distance_between(point1: &Point, point2: &Point, metric: DistanceMetric) -> f64 {
    match metric {
        DistanceMetric::Haversine => Haversine.distance(*point1, *point2),
        DistanceMetric::Geodesic => Geodesic.distance(*point1, *point2),
        DistanceMetric::Rhumb => Rhumb.distance(*point1, *point2),
        DistanceMetric::Euclidean => Euclidean.distance(*point1, *point2),
    }
}
