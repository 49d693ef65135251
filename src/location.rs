//! Location resolution and coordinate state.
//!
//! [`Location`] wraps the outcome of a geocoding lookup and offers the cell
//! neighborhood operations on the resolved point. A location either carries
//! a resolved [`Position`] or is explicitly unset; operations that need
//! coordinates fail with [`LocusError::UnsetLocation`] on the latter.

use crate::cells::{self, DEFAULT_WALK_RADIUS};
use crate::config::Config;
use crate::error::{LocusError, Result};
use crate::geocode::{Geocoder, HttpGeocoder};
use geo::Point;
use s2::cellid::CellID;
use std::fmt;

/// Altitude sentinel used when the provider reports none.
///
/// Non-zero so an unknown altitude is never conflated with a legitimate
/// sea-level reading.
pub const DEFAULT_ALTITUDE: f64 = 8.0;

/// A resolved coordinate triple.
#[derive(Debug, Clone, Copy, PartialEq)]
pub struct Position {
    /// Latitude in degrees, [-90, 90]
    pub latitude: f64,
    /// Longitude in degrees, [-180, 180]
    pub longitude: f64,
    /// Altitude in meters ([`DEFAULT_ALTITUDE`] when unknown)
    pub altitude: f64,
}

impl Position {
    pub fn new(latitude: f64, longitude: f64, altitude: f64) -> Self {
        Self {
            latitude,
            longitude,
            altitude,
        }
    }

    /// The position as a lon/lat `geo` point.
    pub fn to_point(&self) -> Point {
        Point::new(self.longitude, self.latitude)
    }
}

/// Coordinate state of a [`Location`].
///
/// The unset variant replaces a null-filled placeholder: whether coordinates
/// exist is visible in the type, not in field values.
#[derive(Debug, Clone, Copy, PartialEq, Default)]
pub enum Coordinate {
    /// No coordinates; placeholder only
    #[default]
    Unset,
    /// Coordinates resolved or set explicitly
    Resolved(Position),
}

/// A place resolved to coordinates, with cell neighborhood operations.
///
/// Constructed by geocoding a place name ([`Location::resolve`]), from a
/// caller-supplied provider ([`Location::resolve_with`]), or as an unset
/// placeholder ([`Location::noop`]). Nothing is cached; every cell query
/// recomputes from the current coordinates.
#[derive(Debug, Clone, Default)]
pub struct Location {
    coordinate: Coordinate,
}

impl Location {
    /// Geocode a place name using the configured HTTP provider.
    ///
    /// Fails with [`LocusError::InvalidInput`] on an empty query and
    /// [`LocusError::Geocoding`] on any provider failure; no partial result
    /// is ever returned.
    pub fn resolve(query: &str, config: &Config) -> Result<Self> {
        let geocoder = HttpGeocoder::new(config)?;
        Self::resolve_with(&geocoder, query)
    }

    /// Geocode a place name using a caller-supplied provider.
    pub fn resolve_with<G: Geocoder>(geocoder: &G, query: &str) -> Result<Self> {
        if query.trim().is_empty() {
            return Err(LocusError::InvalidInput(
                "place-name query must not be empty".to_string(),
            ));
        }

        let place = geocoder.geocode(query)?;
        let position = Position::new(
            place.latitude,
            place.longitude,
            place.altitude.unwrap_or(DEFAULT_ALTITUDE),
        );

        log::debug!(
            "resolved {:?} to ({}, {}, {})",
            query,
            position.latitude,
            position.longitude,
            position.altitude
        );

        Ok(Self {
            coordinate: Coordinate::Resolved(position),
        })
    }

    /// An unset placeholder location with no provider behind it.
    ///
    /// Coordinate-dependent operations fail until coordinates are supplied
    /// via [`set_coordinates`](Self::set_coordinates).
    pub fn noop() -> Self {
        Self {
            coordinate: Coordinate::Unset,
        }
    }

    /// Unconditionally replace latitude and longitude.
    ///
    /// Altitude is preserved; from the unset state it becomes the
    /// [`DEFAULT_ALTITUDE`] sentinel. Used when coordinates are known
    /// out-of-band and geocoding should be skipped.
    pub fn set_coordinates(&mut self, latitude: f64, longitude: f64) {
        let altitude = match self.coordinate {
            Coordinate::Resolved(position) => position.altitude,
            Coordinate::Unset => DEFAULT_ALTITUDE,
        };
        self.coordinate = Coordinate::Resolved(Position::new(latitude, longitude, altitude));
    }

    /// The coordinate state.
    pub fn coordinate(&self) -> &Coordinate {
        &self.coordinate
    }

    /// The resolved position, or [`LocusError::UnsetLocation`].
    pub fn position(&self) -> Result<&Position> {
        match &self.coordinate {
            Coordinate::Resolved(position) => Ok(position),
            Coordinate::Unset => Err(LocusError::UnsetLocation),
        }
    }

    /// The resolved `(latitude, longitude, altitude)` triple.
    pub fn coordinates(&self) -> Result<(f64, f64, f64)> {
        let position = self.position()?;
        Ok((position.latitude, position.longitude, position.altitude))
    }

    /// The containing cell at the working level.
    pub fn cell_id(&self) -> Result<CellID> {
        let position = self.position()?;
        Ok(cells::cell_id_for(position.latitude, position.longitude))
    }

    /// Hilbert-order cell walk around this location.
    ///
    /// See [`cells::cell_walk`].
    pub fn cell_walk(&self, radius: usize, both_directions: bool) -> Result<Vec<CellID>> {
        let position = self.position()?;
        Ok(cells::cell_walk(
            position.latitude,
            position.longitude,
            radius,
            both_directions,
        ))
    }

    /// Two-sided cell walk at the default radius.
    pub fn cells(&self) -> Result<Vec<CellID>> {
        self.cell_walk(DEFAULT_WALK_RADIUS, true)
    }

    /// Face/IJ grid expansion around this location's cell.
    ///
    /// See [`cells::grid_neighbors`].
    pub fn neighbor_cells(&self, radius: u32) -> Result<Vec<CellID>> {
        Ok(cells::grid_neighbors(self.cell_id()?, radius))
    }

    /// Great-circle distance in meters to another location.
    pub fn distance_to(&self, other: &Location) -> Result<f64> {
        let a = self.position()?.to_point();
        let b = other.position()?.to_point();
        Ok(crate::spatial::distance(&a, &b))
    }
}

impl fmt::Display for Location {
    fn fmt(&self, f: &mut fmt::Formatter<'_>) -> fmt::Result {
        match self.coordinate {
            Coordinate::Resolved(position) => write!(
                f,
                "Coordinates: {} {} {}",
                position.latitude, position.longitude, position.altitude
            ),
            Coordinate::Unset => write!(f, "Coordinates: unset"),
        }
    }
}
